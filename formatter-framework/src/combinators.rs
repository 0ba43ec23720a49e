//! Formatter-side composition.
//!
//! `+` concatenates and `|` picks the first alternative that accepts the
//! value. Operands must be [`FormatterView`]s, so a value that also parses
//! has to be narrowed before it reaches these operators.

use crate::error::FormatError;
use crate::traits::Formatter;
use crate::view::FormatterView;

/// Formats a pair: the first half with `first`, the second with `second`,
/// concatenated. Written `a + b` on views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A: Formatter, B: Formatter> Then<A, B> {
    pub fn new(first: FormatterView<A>, second: FormatterView<B>) -> Self {
        Self {
            first: first.into_inner(),
            second: second.into_inner(),
        }
    }
}

impl<A: Formatter, B: Formatter> Formatter for Then<A, B> {
    type Input = (A::Input, B::Input);

    fn format(&self, value: &Self::Input) -> Result<String, FormatError> {
        let mut text = self.first.format(&value.0)?;
        text.push_str(&self.second.format(&value.1)?);
        Ok(text)
    }
}

/// Formats with `first`, falling back to `second` if `first` rejects the
/// value. Written `a | b` on views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<A, B> {
    first: A,
    second: B,
}

impl<A, B> Or<A, B>
where
    A: Formatter,
    B: Formatter<Input = A::Input>,
{
    pub fn new(first: FormatterView<A>, second: FormatterView<B>) -> Self {
        Self {
            first: first.into_inner(),
            second: second.into_inner(),
        }
    }
}

impl<A, B> Formatter for Or<A, B>
where
    A: Formatter,
    B: Formatter<Input = A::Input>,
{
    type Input = A::Input;

    fn format(&self, value: &Self::Input) -> Result<String, FormatError> {
        match self.first.format(value) {
            Ok(text) => Ok(text),
            Err(first_error) => self
                .second
                .format(value)
                .map_err(|second_error| FormatError::alternatives(first_error, second_error)),
        }
    }
}
