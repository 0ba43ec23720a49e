use crate::error::{check_bounds, Expected, ParseError};
use common_framework::Space;
use std::sync::Arc;

/// The parser contract.
///
/// A parser consumes a bounded span of `text` starting at `position` and
/// either produces a value together with the offset just past what it
/// consumed, or fails without consuming anything. Offsets are byte offsets;
/// `end` is exclusive and bounds how far the parser may look.
pub trait Parser {
    /// The value produced by a successful parse.
    type Output;

    /// Attempts to parse `text[position..end]`.
    ///
    /// `space` describes the insignificant characters the parser may skip
    /// before each token it matches.
    fn parse(
        &self,
        text: &str,
        position: usize,
        end: usize,
        space: &dyn Space,
    ) -> Result<(Self::Output, usize), ParseError>;

    /// Parses the whole of `text`.
    ///
    /// Trailing insignificant characters are skipped; anything left after
    /// that is reported as a failure expecting the end of input.
    fn parse_str(&self, text: &str, space: &dyn Space) -> Result<Self::Output, ParseError> {
        let end = text.len();
        let (value, next) = self.parse(text, 0, end, space)?;
        check_bounds(text, next, end)?;
        let rest = space.skip(text, next, end);
        if rest == end {
            Ok(value)
        } else {
            Err(ParseError::no_match(rest, Expected::EndOfInput))
        }
    }
}

impl<P: Parser + ?Sized> Parser for &P {
    type Output = P::Output;

    #[inline]
    fn parse(
        &self,
        text: &str,
        position: usize,
        end: usize,
        space: &dyn Space,
    ) -> Result<(Self::Output, usize), ParseError> {
        (**self).parse(text, position, end, space)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Output = P::Output;

    #[inline]
    fn parse(
        &self,
        text: &str,
        position: usize,
        end: usize,
        space: &dyn Space,
    ) -> Result<(Self::Output, usize), ParseError> {
        (**self).parse(text, position, end, space)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    type Output = P::Output;

    #[inline]
    fn parse(
        &self,
        text: &str,
        position: usize,
        end: usize,
        space: &dyn Space,
    ) -> Result<(Self::Output, usize), ParseError> {
        (**self).parse(text, position, end, space)
    }
}
