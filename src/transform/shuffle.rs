//! Random permutations that never come back unchanged.

use rand::Rng;
use rand::seq::SliceRandom;

/// Returns a random permutation of `sequence` using the thread-local RNG.
///
/// See [`shuffle_with`] for the exact guarantees.
///
/// # Examples
///
/// ```rust
/// use underbar::transform::shuffle;
///
/// let cards = vec![1, 2, 3, 4, 5];
/// let shuffled = shuffle(&cards);
///
/// assert_ne!(shuffled, cards);
/// let mut sorted = shuffled.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, cards);
/// ```
pub fn shuffle<T>(sequence: &[T]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    shuffle_with(sequence, &mut rand::thread_rng())
}

/// Returns a random permutation of `sequence` drawn from `rng`.
///
/// The input is not modified. For sequences of two or more elements the
/// result always differs from the input in at least one position: draws that
/// reproduce the input order are rejected and redrawn, which makes the result
/// uniform over every *other* ordering rather than over all orderings. When
/// all elements are equal no other ordering exists and a copy is returned, as
/// it is for sequences of zero or one element.
///
/// A draw counts as unchanged when every element either stays at its own
/// position or lands on a position holding an equal value. Swapping duplicates
/// is therefore redrawn, while values that are not equal to themselves (such as
/// `f64::NAN`) are treated as distinct from every other position and are still
/// guaranteed to move.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use underbar::transform::shuffle_with;
///
/// let mut first = StdRng::seed_from_u64(7);
/// let mut second = StdRng::seed_from_u64(7);
/// let letters = ['a', 'b', 'c', 'd'];
///
/// // The same seed produces the same permutation.
/// assert_eq!(
///     shuffle_with(&letters, &mut first),
///     shuffle_with(&letters, &mut second)
/// );
/// ```
pub fn shuffle_with<T, G>(sequence: &[T], rng: &mut G) -> Vec<T>
where
    T: Clone + PartialEq,
    G: Rng + ?Sized,
{
    if sequence.windows(2).all(|pair| pair[0] == pair[1]) {
        return sequence.to_vec();
    }

    let mut order: Vec<usize> = (0..sequence.len()).collect();
    let mut attempts = 1_u32;
    order.shuffle(rng);
    while is_unchanged(sequence, &order) {
        attempts += 1;
        order.shuffle(rng);
    }
    if attempts > 1 {
        tracing::trace!(attempts, length = sequence.len(), "shuffle redrew identity order");
    }
    order.iter().map(|&index| sequence[index].clone()).collect()
}

fn is_unchanged<T: PartialEq>(sequence: &[T], order: &[usize]) -> bool {
    order
        .iter()
        .enumerate()
        .all(|(position, &index)| index == position || sequence[index] == sequence[position])
}
