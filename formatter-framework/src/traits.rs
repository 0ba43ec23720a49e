use crate::error::FormatError;
use std::sync::Arc;

/// The formatter contract.
///
/// A formatter turns a structured value into text, or reports that the value
/// has no representation under it.
pub trait Formatter {
    /// The value this formatter consumes.
    type Input;

    /// Produces the text for `value`.
    fn format(&self, value: &Self::Input) -> Result<String, FormatError>;
}

impl<F: Formatter + ?Sized> Formatter for &F {
    type Input = F::Input;

    #[inline]
    fn format(&self, value: &Self::Input) -> Result<String, FormatError> {
        (**self).format(value)
    }
}

impl<F: Formatter + ?Sized> Formatter for Box<F> {
    type Input = F::Input;

    #[inline]
    fn format(&self, value: &Self::Input) -> Result<String, FormatError> {
        (**self).format(value)
    }
}

impl<F: Formatter + ?Sized> Formatter for Arc<F> {
    type Input = F::Input;

    #[inline]
    fn format(&self, value: &Self::Input) -> Result<String, FormatError> {
        (**self).format(value)
    }
}
