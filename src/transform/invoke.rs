//! Calling a named method or a callback on every element.

use std::fmt;

use crate::error::{Error, Result};

/// Elements that expose operations callable by name.
///
/// # Examples
///
/// ```rust
/// use underbar::transform::Methods;
///
/// struct Counter(u32);
///
/// impl Methods<u32> for Counter {
///     type Output = u32;
///
///     fn call_method(&self, name: &str, amount: &u32) -> Option<u32> {
///         match name {
///             "plus" => Some(self.0 + amount),
///             "times" => Some(self.0 * amount),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Counter(4).call_method("times", &3), Some(12));
/// assert_eq!(Counter(4).call_method("divide", &3), None);
/// ```
pub trait Methods<A> {
    /// The result of a method call.
    type Output;

    /// Calls the method named `name` with `arguments`.
    ///
    /// Returns `None` if the element has no method called `name`.
    fn call_method(&self, name: &str, arguments: &A) -> Option<Self::Output>;
}

/// What [`invoke`] calls for each element.
pub enum Invocation<'a, T, A, R> {
    /// Call the element's own method with this name.
    Method {
        /// The method name.
        name: &'a str,
        /// Dispatches the call on an element, `None` if the method does not
        /// exist.
        dispatch: fn(&T, &str, &A) -> Option<R>,
    },
    /// Call a callback with the element as its context.
    Callback(Box<dyn Fn(&T, &A) -> R + 'a>),
}

impl<'a, T, A, R> Invocation<'a, T, A, R> {
    /// Invokes the element method called `name`.
    pub fn method(name: &'a str) -> Self
    where
        T: Methods<A, Output = R>,
    {
        Self::Method {
            name,
            dispatch: T::call_method,
        }
    }

    /// Invokes `callback(element, arguments)`.
    pub fn callback(callback: impl Fn(&T, &A) -> R + 'a) -> Self {
        Self::Callback(Box::new(callback))
    }
}

impl<'a, T, A> From<&'a str> for Invocation<'a, T, A, T::Output>
where
    T: Methods<A>,
{
    fn from(name: &'a str) -> Self {
        Self::method(name)
    }
}

impl<T, A, R> fmt::Debug for Invocation<'_, T, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Method { name, .. } => formatter.debug_tuple("Method").field(name).finish(),
            Self::Callback(_) => formatter.write_str("Callback(<fn>)"),
        }
    }
}

/// Calls `invocation` on every element of `collection` with `arguments` and
/// returns the results in order.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] as soon as an element lacks the named
/// method. Elements after it are not visited.
///
/// # Examples
///
/// ```rust
/// use underbar::transform::{Invocation, Methods, invoke};
///
/// struct Word(&'static str);
///
/// impl Methods<()> for Word {
///     type Output = String;
///
///     fn call_method(&self, name: &str, _: &()) -> Option<String> {
///         (name == "shout").then(|| self.0.to_uppercase())
///     }
/// }
///
/// let words = [Word("hi"), Word("yo")];
/// assert_eq!(invoke(&words, "shout", ()).unwrap(), vec!["HI", "YO"]);
///
/// let repeated = invoke(
///     &words,
///     Invocation::callback(|word: &Word, times: &usize| word.0.repeat(*times)),
///     2,
/// )
/// .unwrap();
/// assert_eq!(repeated, vec!["hihi", "yoyo"]);
/// assert!(invoke(&words, "whisper", ()).is_err());
/// ```
pub fn invoke<'a, T, A, R>(
    collection: &[T],
    invocation: impl Into<Invocation<'a, T, A, R>>,
    arguments: A,
) -> Result<Vec<R>>
where
    T: 'a,
    A: 'a,
{
    let invocation = invocation.into();
    collection
        .iter()
        .map(|element| match &invocation {
            Invocation::Method { name, dispatch } => dispatch(element, name, &arguments)
                .ok_or_else(|| Error::unknown_method("invoke", name)),
            Invocation::Callback(callback) => Ok(callback(element, &arguments)),
        })
        .collect()
}
