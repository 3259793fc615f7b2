//! Small helper functions.

/// Returns the value unchanged.
///
/// Useful as the default transform wherever a callback is expected but no
/// transformation is wanted.
///
/// # Examples
///
/// ```
/// use underbar::function::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
///
/// let keys: Vec<i32> = vec![3, 1, 2].into_iter().map(identity).collect();
/// assert_eq!(keys, vec![3, 1, 2]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}
