//! Calling a function or a named method on every element.

use thiserror::Error;

use crate::collection::AsCollection;
use crate::collection::each;

/// Error returned when an element has no method by the requested name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvokeError {
    #[error("no method named `{name}` on element")]
    UnknownMethod { name: String },
}

/// Methods an element exposes by name.
pub trait Methods {
    type Output;

    /// Call the named method with no arguments, or `None` if there is none.
    fn call_method(&self, name: &str) -> Option<Self::Output>;
}

impl Methods for str {
    type Output = String;

    fn call_method(&self, name: &str) -> Option<String> {
        match name {
            "to_uppercase" => Some(self.to_uppercase()),
            "to_lowercase" => Some(self.to_lowercase()),
            "trim" => Some(self.trim().to_string()),
            "reverse" => Some(self.chars().rev().collect()),
            _ => None,
        }
    }
}

impl Methods for String {
    type Output = String;

    fn call_method(&self, name: &str) -> Option<String> {
        return self.as_str().call_method(name);
    }
}

impl<T: Methods + ?Sized> Methods for &T {
    type Output = T::Output;

    fn call_method(&self, name: &str) -> Option<T::Output> {
        return (**self).call_method(name);
    }
}

/// A method looked up by name on each element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Method<'a>(pub &'a str);

/// Something that can be invoked with an element as its receiver.
///
/// Closures receive the element and the shared arguments. A [`Method`] is
/// resolved on the element and called with no arguments.
pub trait Invocation<V, A> {
    type Output;

    fn invoke(&mut self, receiver: &V, args: &A) -> Result<Self::Output, InvokeError>;
}

impl<V, A, R, F> Invocation<V, A> for F
where
    F: FnMut(&V, &A) -> R,
{
    type Output = R;

    fn invoke(&mut self, receiver: &V, args: &A) -> Result<R, InvokeError> {
        return Ok(self(receiver, args));
    }
}

impl<V: Methods, A> Invocation<V, A> for Method<'_> {
    type Output = V::Output;

    fn invoke(&mut self, receiver: &V, _args: &A) -> Result<V::Output, InvokeError> {
        return receiver.call_method(self.0).ok_or_else(|| InvokeError::UnknownMethod {
            name: self.0.to_string(),
        });
    }
}

/// Invoke on every element, collecting results in element order.
///
/// Stops at the first element that cannot be invoked on.
pub fn invoke<C, A, I>(collection: &C, mut invocation: I, args: &A) -> Result<Vec<I::Output>, InvokeError>
where
    C: AsCollection + ?Sized,
    I: Invocation<C::Value, A>,
{
    let mut result = Vec::new();
    let mut failure = None;

    each(collection, |item, _, _| {
        if failure.is_some() {
            return;
        }
        match invocation.invoke(item, args) {
            Ok(value) => result.push(value),
            Err(error) => failure = Some(error),
        }
    });

    if let Some(error) = failure {
        return Err(error);
    }
    return Ok(result);
}
