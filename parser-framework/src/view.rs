use crate::combinators::{Or, Then};
use crate::error::ParseError;
use crate::traits::Parser;
use common_framework::Space;
use std::ops::{Add, BitOr};

/// A single-role view: exposes only the parser contract of what it wraps.
///
/// The composition operators `+` and `|` are implemented on this type and
/// nowhere else in the parser framework. Wrapping a value that also formats
/// hides its formatter side, so the operator can only mean parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserView<P> {
    inner: P,
}

impl<P: Parser> ParserView<P> {
    /// Narrows `inner` to its parser contract.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Returns the wrapped value.
    pub fn into_inner(self) -> P {
        self.inner
    }

    /// Returns a reference to the wrapped value.
    pub fn get_ref(&self) -> &P {
        &self.inner
    }
}

impl<P: Parser> Parser for ParserView<P> {
    type Output = P::Output;

    #[inline]
    fn parse(
        &self,
        text: &str,
        position: usize,
        end: usize,
        space: &dyn Space,
    ) -> Result<(Self::Output, usize), ParseError> {
        self.inner.parse(text, position, end, space)
    }
}

impl<A: Parser, B: Parser> Add<ParserView<B>> for ParserView<A> {
    type Output = ParserView<Then<A, B>>;

    fn add(self, rhs: ParserView<B>) -> Self::Output {
        ParserView::new(Then::new(self, rhs))
    }
}

impl<A, B> BitOr<ParserView<B>> for ParserView<A>
where
    A: Parser,
    B: Parser<Output = A::Output>,
{
    type Output = ParserView<Or<A, B>>;

    fn bitor(self, rhs: ParserView<B>) -> Self::Output {
        ParserView::new(Or::new(self, rhs))
    }
}
