//! Position-wise and set-style combination of several sequences.
//!
//! Inputs are passed as a slice of sequences rather than variadically, so
//! `intersection(&[a, b, c])` plays the role of `intersection(a, b, c)`.
//! Membership uses `PartialEq` only.

use crate::collection::{contains, reject};

/// Groups the elements at each position of every sequence.
///
/// The result is as long as the longest input. Positions past the end of a
/// shorter input are `None`.
///
/// # Examples
///
/// ```rust
/// use underbar::transform::zip;
///
/// let zipped = zip(&[vec!['a', 'b', 'c'], vec!['x', 'y']]);
/// assert_eq!(
///     zipped,
///     vec![
///         vec![Some('a'), Some('x')],
///         vec![Some('b'), Some('y')],
///         vec![Some('c'), None],
///     ]
/// );
/// ```
pub fn zip<T, S>(sequences: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let length = sequences
        .iter()
        .map(|sequence| sequence.as_ref().len())
        .max()
        .unwrap_or(0);

    (0..length)
        .map(|index| {
            sequences
                .iter()
                .map(|sequence| sequence.as_ref().get(index).cloned())
                .collect()
        })
        .collect()
}

/// Pairs up two sequences of possibly different element types.
///
/// Like [`zip`], the result is as long as the longer input.
///
/// # Examples
///
/// ```rust
/// use underbar::transform::zip_pair;
///
/// let pairs = zip_pair(&["a", "b", "c"], &[1, 2]);
/// assert_eq!(
///     pairs,
///     vec![(Some("a"), Some(1)), (Some("b"), Some(2)), (Some("c"), None)]
/// );
/// ```
pub fn zip_pair<A, B>(left: &[A], right: &[B]) -> Vec<(Option<A>, Option<B>)>
where
    A: Clone,
    B: Clone,
{
    let length = left.len().max(right.len());
    (0..length)
        .map(|index| (left.get(index).cloned(), right.get(index).cloned()))
        .collect()
}

/// Returns the values present in every sequence.
///
/// Values appear in the order of the shortest input (the first one if
/// several share the shortest length), each at most once. An empty slice of
/// inputs yields an empty result.
///
/// # Examples
///
/// ```rust
/// use underbar::transform::intersection;
///
/// assert_eq!(intersection(&[vec![1, 2, 3], vec![2, 3, 4]]), vec![2, 3]);
/// assert_eq!(intersection(&[vec![5, 5, 6, 5], vec![5, 6]]), vec![5, 6]);
/// ```
pub fn intersection<T, S>(sequences: &[S]) -> Vec<T>
where
    T: Clone + PartialEq,
    S: AsRef<[T]>,
{
    let Some(shortest) = sequences
        .iter()
        .map(|sequence| sequence.as_ref())
        .min_by_key(|sequence| sequence.len())
    else {
        return Vec::new();
    };

    let mut output: Vec<T> = Vec::new();
    for element in shortest {
        if contains(output.as_slice(), element) {
            continue;
        }
        if sequences
            .iter()
            .all(|sequence| contains(sequence.as_ref(), element))
        {
            output.push(element.clone());
        }
    }
    output
}

/// Returns the elements of `sequence` that appear in none of `others`.
///
/// `others` are treated as one combined sequence. The order and duplicates
/// of `sequence` are preserved.
///
/// # Examples
///
/// ```rust
/// use underbar::transform::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4], &[vec![2, 4]]), vec![1, 3]);
/// assert_eq!(difference(&[1, 1, 2, 5], &[vec![2], vec![9, 5]]), vec![1, 1]);
/// ```
pub fn difference<T, S>(sequence: &[T], others: &[S]) -> Vec<T>
where
    T: Clone + PartialEq,
    S: AsRef<[T]>,
{
    let excluded: Vec<&T> = others
        .iter()
        .flat_map(|other| other.as_ref().iter())
        .collect();
    reject(sequence, |element| excluded.contains(&element))
}
