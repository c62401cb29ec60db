//! # Interpretation Layer (Listener)
//!
//! A Listener interprets a raw input and either produces a typed output or
//! declines it. The deep-link parser is a listener from URLs to paths.
//!
//! # Responsibilities
//!
//! 1. **Interpretation**: Parse raw input into strongly-typed values.
//! 2. **Gatekeeping**: Decline irrelevant input by returning `Ok(None)`.
//! 3. **Composition**: Chain with `filter`, `map` and `and_then`.

use crate::{error::BoxError, message::Message};

/// An interpreter from `In` to `Self::Output`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Listener` for `{In}`",
    label = "missing `Listener` implementation",
    note = "Listeners must implement the `listen` method to process `{In}`."
)]
pub trait Listener<In: Message>: Send + Sync + 'static {
    /// The interpreted value.
    type Output: Message;

    /// Interprets `event`. `Ok(None)` means the input was declined.
    fn listen(&self, event: &In) -> Result<Option<Self::Output>, BoxError>;

    /// Chains this listener with another listener.
    fn and_then<Next>(self, next: Next) -> Chain<Self, Next>
    where
        Self: Sized,
        Next: Listener<Self::Output>,
    {
        Chain {
            first: self,
            second: next,
        }
    }

    /// Filters the output of this listener.
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool + Send + Sync + 'static,
    {
        Filter {
            listener: self,
            predicate,
        }
    }

    /// Transforms the output of this listener.
    fn map<F, Out>(self, mapper: F) -> Map<Self, F, Out>
    where
        Self: Sized,
        Out: Message,
        F: Fn(Self::Output) -> Out + Send + Sync + 'static,
    {
        Map {
            listener: self,
            mapper,
            _phantom: std::marker::PhantomData,
        }
    }
}

/// Runs `second` on whatever `first` produces.
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B, In> Listener<In> for Chain<A, B>
where
    In: Message,
    A: Listener<In>,
    B: Listener<A::Output>,
{
    type Output = B::Output;

    fn listen(&self, event: &In) -> Result<Option<Self::Output>, BoxError> {
        let Some(intermediate) = self.first.listen(event)? else {
            return Ok(None);
        };
        self.second.listen(&intermediate)
    }
}

/// Declines outputs that fail a predicate.
pub struct Filter<L, F> {
    listener: L,
    predicate: F,
}

impl<L, F, In> Listener<In> for Filter<L, F>
where
    In: Message,
    L: Listener<In>,
    F: Fn(&L::Output) -> bool + Send + Sync + 'static,
{
    type Output = L::Output;

    fn listen(&self, event: &In) -> Result<Option<Self::Output>, BoxError> {
        let Some(output) = self.listener.listen(event)? else {
            return Ok(None);
        };
        if (self.predicate)(&output) {
            Ok(Some(output))
        } else {
            Ok(None)
        }
    }
}

/// Transforms accepted outputs.
pub struct Map<L, F, Out> {
    listener: L,
    mapper: F,
    _phantom: std::marker::PhantomData<fn() -> Out>,
}

impl<L, F, In, Out> Listener<In> for Map<L, F, Out>
where
    In: Message,
    L: Listener<In>,
    Out: Message,
    F: Fn(L::Output) -> Out + Send + Sync + 'static,
{
    type Output = Out;

    fn listen(&self, event: &In) -> Result<Option<Self::Output>, BoxError> {
        let Some(output) = self.listener.listen(event)? else {
            return Ok(None);
        };
        Ok(Some((self.mapper)(output)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Trim;

    impl Listener<String> for Trim {
        type Output = String;

        fn listen(&self, event: &String) -> Result<Option<String>, BoxError> {
            let trimmed = event.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
    }

    #[test]
    fn test_combinators() {
        let listener = Trim
            .filter(|s: &String| s.starts_with('/'))
            .map(|s: String| s.to_uppercase());

        assert_eq!(
            listener.listen(&"  /abc ".to_string()).unwrap(),
            Some("/ABC".to_string())
        );
        assert_eq!(listener.listen(&"abc".to_string()).unwrap(), None);
        assert_eq!(listener.listen(&"   ".to_string()).unwrap(), None);
    }

    #[test]
    fn test_chain_skips_declined() {
        let listener = Trim.and_then(Trim);
        assert_eq!(listener.listen(&" x ".to_string()).unwrap(), Some("x".to_string()));
        assert_eq!(listener.listen(&"".to_string()).unwrap(), None);
    }
}
