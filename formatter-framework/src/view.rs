use crate::combinators::{Or, Then};
use crate::error::FormatError;
use crate::traits::Formatter;
use std::ops::{Add, BitOr};

/// A single-role view: exposes only the formatter contract of what it wraps.
///
/// `+` and `|` are implemented here and nowhere else in the formatter
/// framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatterView<F> {
    inner: F,
}

impl<F: Formatter> FormatterView<F> {
    /// Narrows `inner` to its formatter contract.
    pub fn new(inner: F) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> F {
        self.inner
    }

    pub fn get_ref(&self) -> &F {
        &self.inner
    }
}

impl<F: Formatter> Formatter for FormatterView<F> {
    type Input = F::Input;

    #[inline]
    fn format(&self, value: &Self::Input) -> Result<String, FormatError> {
        self.inner.format(value)
    }
}

impl<A: Formatter, B: Formatter> Add<FormatterView<B>> for FormatterView<A> {
    type Output = FormatterView<Then<A, B>>;

    fn add(self, rhs: FormatterView<B>) -> Self::Output {
        FormatterView::new(Then::new(self, rhs))
    }
}

impl<A, B> BitOr<FormatterView<B>> for FormatterView<A>
where
    A: Formatter,
    B: Formatter<Input = A::Input>,
{
    type Output = FormatterView<Or<A, B>>;

    fn bitor(self, rhs: FormatterView<B>) -> Self::Output {
        FormatterView::new(Or::new(self, rhs))
    }
}
