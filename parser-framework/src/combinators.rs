//! Parser-side composition.
//!
//! Both combinators take their operands as [`ParserView`]s. A value that
//! implements more than one contract has to be narrowed before it can be
//! composed here, so the meaning of `+` and `|` is always the parser one.

use crate::error::ParseError;
use crate::traits::Parser;
use crate::view::ParserView;
use common_framework::Space;

/// Runs `first`, then `second` from where `first` stopped.
///
/// Produces both values as a pair. Written `a + b` on views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A: Parser, B: Parser> Then<A, B> {
    pub fn new(first: ParserView<A>, second: ParserView<B>) -> Self {
        Self {
            first: first.into_inner(),
            second: second.into_inner(),
        }
    }
}

impl<A: Parser, B: Parser> Parser for Then<A, B> {
    type Output = (A::Output, B::Output);

    fn parse(
        &self,
        text: &str,
        position: usize,
        end: usize,
        space: &dyn Space,
    ) -> Result<(Self::Output, usize), ParseError> {
        let (a, position) = self.first.parse(text, position, end, space)?;
        let (b, position) = self.second.parse(text, position, end, space)?;
        Ok(((a, b), position))
    }
}

/// Tries `first`; if it fails, tries `second` at the same offset.
///
/// When both fail the two errors are merged with [`ParseError::merge`].
/// Written `a | b` on views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<A, B> {
    first: A,
    second: B,
}

impl<A, B> Or<A, B>
where
    A: Parser,
    B: Parser<Output = A::Output>,
{
    pub fn new(first: ParserView<A>, second: ParserView<B>) -> Self {
        Self {
            first: first.into_inner(),
            second: second.into_inner(),
        }
    }
}

impl<A, B> Parser for Or<A, B>
where
    A: Parser,
    B: Parser<Output = A::Output>,
{
    type Output = A::Output;

    fn parse(
        &self,
        text: &str,
        position: usize,
        end: usize,
        space: &dyn Space,
    ) -> Result<(Self::Output, usize), ParseError> {
        match self.first.parse(text, position, end, space) {
            Ok(result) => Ok(result),
            Err(first_error) => self
                .second
                .parse(text, position, end, space)
                .map_err(|second_error| first_error.merge(second_error)),
        }
    }
}
