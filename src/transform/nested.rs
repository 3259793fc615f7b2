//! Nested sequences and flattening.
//!
//! [`Nested<T>`] is the typed form of "a sequence whose elements may
//! themselves be sequences". Because a `Nested<T>` owns its children, it can
//! never contain itself, so flattening always terminates. Flattening walks
//! the tree with an explicit stack of iterators rather than recursion, so
//! deep nesting is bounded by the heap and not the call stack.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An element of a nested sequence: either a plain item or a further
/// sequence.
///
/// With the `serde` feature, `Nested<T>` (de)serializes untagged: a JSON
/// array becomes a `Sequence` and anything that parses as `T` becomes an
/// `Item`. Items are tried first.
///
/// # Examples
///
/// ```rust
/// use underbar::nested;
/// use underbar::transform::Nested;
///
/// let tree = nested![1, [2, 3]];
/// assert_eq!(
///     tree,
///     vec![
///         Nested::Item(1),
///         Nested::Sequence(vec![Nested::Item(2), Nested::Item(3)]),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Nested<T> {
    /// A non-sequence value.
    Item(T),
    /// A sequence of further nested values.
    Sequence(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Creates an item.
    #[inline]
    pub const fn item(value: T) -> Self {
        Self::Item(value)
    }

    /// Creates a sequence from nested elements.
    pub fn sequence(elements: impl IntoIterator<Item = Self>) -> Self {
        Self::Sequence(elements.into_iter().collect())
    }

    /// Wraps every value as an item, producing an already-flat sequence.
    pub fn from_items(values: impl IntoIterator<Item = T>) -> Vec<Self> {
        values.into_iter().map(Self::Item).collect()
    }

    /// Returns `true` if this is an item.
    pub const fn is_item(&self) -> bool {
        matches!(self, Self::Item(_))
    }

    /// Returns `true` if this is a sequence.
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns the item value, if this is an item.
    pub const fn as_item(&self) -> Option<&T> {
        match self {
            Self::Item(value) => Some(value),
            Self::Sequence(_) => None,
        }
    }

    /// Returns the greatest number of sequence levels below this element.
    ///
    /// An item has depth 0, a sequence of items depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0_usize)];
        while let Some((element, level)) = stack.pop() {
            if let Self::Sequence(children) = element {
                let level = level + 1;
                deepest = deepest.max(level);
                stack.extend(children.iter().map(|child| (child, level)));
            }
        }
        deepest
    }
}

impl<T> From<Vec<Self>> for Nested<T> {
    fn from(elements: Vec<Self>) -> Self {
        Self::Sequence(elements)
    }
}

/// Builds a `Vec<Nested<_>>` from bracketed literals.
///
/// Each element is a single token tree: a bracketed group becomes a
/// sequence, anything else becomes an item. Wrap multi-token expressions in
/// parentheses.
///
/// # Examples
///
/// ```rust
/// use underbar::nested;
/// use underbar::transform::flatten;
///
/// let tree = nested![1, [2, [3, [4]], 5], (-6)];
/// assert_eq!(flatten(&tree), vec![1, 2, 3, 4, 5, -6]);
/// ```
#[macro_export]
macro_rules! nested {
    (@element [$($inner:tt),* $(,)?]) => {
        $crate::transform::Nested::Sequence($crate::nested![$($inner),*])
    };
    (@element $value:expr) => {
        $crate::transform::Nested::Item($value)
    };
    ($($element:tt),* $(,)?) => {
        ::std::vec![$($crate::nested!(@element $element)),*]
    };
}

/// Configuration for [`flatten_with`].
///
/// # Examples
///
/// ```rust
/// use underbar::transform::FlattenOptions;
///
/// let options = FlattenOptions::new().shallow(true);
/// assert!(options.is_shallow());
/// assert!(!FlattenOptions::default().is_shallow());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenOptions {
    shallow: bool,
}

impl FlattenOptions {
    /// Creates the default options: full, recursive flattening.
    pub const fn new() -> Self {
        Self { shallow: false }
    }

    /// Restricts flattening to a single level when `shallow` is `true`.
    #[must_use]
    pub const fn shallow(mut self, shallow: bool) -> Self {
        self.shallow = shallow;
        self
    }

    /// Returns `true` if only one level will be flattened.
    pub const fn is_shallow(&self) -> bool {
        self.shallow
    }
}

/// Flattens `nested` completely, returning every item in depth-first,
/// left-to-right order.
///
/// # Examples
///
/// ```rust
/// use underbar::nested;
/// use underbar::transform::{Nested, flatten};
///
/// assert_eq!(flatten(&nested![1, [2, [3, [4]], 5]]), vec![1, 2, 3, 4, 5]);
///
/// let hollow: Vec<Nested<i32>> = nested![[], [[]]];
/// assert!(flatten(&hollow).is_empty());
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    let mut output = Vec::new();
    let mut stack = vec![nested.iter()];

    while let Some(top) = stack.last_mut() {
        match top.next() {
            Some(Nested::Item(value)) => output.push(value.clone()),
            Some(Nested::Sequence(children)) => stack.push(children.iter()),
            None => {
                stack.pop();
            }
        }
    }
    output
}

/// Flattens `nested` according to `options`.
///
/// With default options this is [`flatten`] with every value re-wrapped as
/// an item. With `shallow` set, only the top level is spliced: the children
/// of each top-level sequence are copied in as they are, sequences
/// included.
///
/// # Examples
///
/// ```rust
/// use underbar::nested;
/// use underbar::transform::{FlattenOptions, flatten_with};
///
/// let shallow = flatten_with(&nested![1, [2, [3]]], FlattenOptions::new().shallow(true));
/// assert_eq!(shallow, nested![1, 2, [3]]);
/// ```
pub fn flatten_with<T: Clone>(nested: &[Nested<T>], options: FlattenOptions) -> Vec<Nested<T>> {
    if !options.is_shallow() {
        return Nested::from_items(flatten(nested));
    }

    let mut output = Vec::with_capacity(nested.len());
    for element in nested {
        match element {
            Nested::Item(_) => output.push(element.clone()),
            Nested::Sequence(children) => output.extend(children.iter().cloned()),
        }
    }
    output
}
