//! Operations that only make sense for ordered sequences.

/// Returns the elements of `sequence` that pass `predicate`, in order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::filter;
///
/// let evens = filter(&[1, 2, 3, 4], |number| number % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn filter<T, P>(sequence: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    sequence
        .iter()
        .filter(|element| predicate(element))
        .cloned()
        .collect()
}

/// Returns the elements of `sequence` that fail `predicate`, in order.
///
/// The complement of [`filter`].
pub fn reject<T, P>(sequence: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    filter(sequence, |element| !predicate(element))
}

/// Returns a duplicate-free copy of `sequence`, keeping the first occurrence
/// of each value.
///
/// Only `PartialEq` is required, so the cost is quadratic in the number of
/// distinct values.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::uniq;
///
/// assert_eq!(uniq(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn uniq<T>(sequence: &[T]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    let mut output: Vec<T> = Vec::with_capacity(sequence.len());
    for element in sequence {
        if !output.contains(element) {
            output.push(element.clone());
        }
    }
    output
}

/// Returns the index of the first element equal to `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::index_of;
///
/// assert_eq!(index_of(&["a", "b", "b"], &"b"), Some(1));
/// assert_eq!(index_of(&["a"], &"z"), None);
/// ```
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    sequence.iter().position(|element| element == target)
}

/// Returns the first element of `sequence`.
#[inline]
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns the first `count` elements of `sequence`.
///
/// A `count` larger than the sequence returns the whole sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::take_first;
///
/// assert_eq!(take_first(&[1, 2, 3], 2), &[1, 2]);
/// assert_eq!(take_first(&[1, 2, 3], 5), &[1, 2, 3]);
/// assert!(take_first(&[1, 2, 3], 0).is_empty());
/// ```
pub fn take_first<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[..count.min(sequence.len())]
}

/// Returns the last element of `sequence`.
#[inline]
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns the last `count` elements of `sequence`.
///
/// A `count` larger than the sequence returns the whole sequence.
pub fn take_last<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[sequence.len().saturating_sub(count)..]
}
