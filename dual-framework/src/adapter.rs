use crate::contract::{
    Candidate, ContractValidator, ContractViolation, SharedFormatter, SharedParser,
};
use common_framework::Space;
use formatter_framework::{FormatError, Formatter, FormatterView};
use parser_framework::{ParseError, Parser, ParserView};
use std::any::type_name;

/// One parser and one formatter acting as a single grammar element.
///
/// Used as a [`Parser`] it behaves exactly like the parser it was built from;
/// used as a [`Formatter`] it behaves exactly like the formatter. Nothing
/// passes between the two halves: they agree only because they were built
/// from the same arguments.
///
/// The halves are fixed at construction. There is no way to replace either
/// one afterwards.
///
/// # Composition
///
/// `ParserFormatter` does not implement `+` or `|`. Parsers and formatters
/// each give those operators their own meaning, and a value that is both
/// would leave the choice open. Narrow it first:
///
/// ```
/// use dual_framework::{Literal, Parser, SkipNone};
///
/// let open = Literal::new("(");
/// let close = Literal::new(")");
/// let parens = open.as_parser() + close.as_parser();
/// assert_eq!(parens.parse("()", 0, 2, &SkipNone), Ok((((), ()), 2)));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ParserFormatter<P, F> {
    parser: P,
    formatter: F,
}

/// A [`ParserFormatter`] over type-erased halves, as built by
/// [`ParserFormatter::from_candidates`].
pub type DynParserFormatter<O, I> = ParserFormatter<SharedParser<O>, SharedFormatter<I>>;

impl<P: Parser, F: Formatter> ParserFormatter<P, F> {
    /// Combines `parser` and `formatter`.
    ///
    /// Both contracts are proven by the trait bounds, so this cannot fail.
    pub fn new(parser: P, formatter: F) -> Self {
        tracing::trace!(
            parser = type_name::<P>(),
            formatter = type_name::<F>(),
            "parser/formatter assembled"
        );
        Self { parser, formatter }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Borrows the parser half as a single-role view, ready for composition.
    pub fn as_parser(&self) -> ParserView<&P> {
        ParserView::new(&self.parser)
    }

    /// Borrows the formatter half as a single-role view, ready for
    /// composition.
    pub fn as_formatter(&self) -> FormatterView<&F> {
        FormatterView::new(&self.formatter)
    }

    pub fn into_parser(self) -> ParserView<P> {
        ParserView::new(self.parser)
    }

    pub fn into_formatter(self) -> FormatterView<F> {
        FormatterView::new(self.formatter)
    }

    /// Splits into two single-role views.
    pub fn split(self) -> (ParserView<P>, FormatterView<F>) {
        (ParserView::new(self.parser), FormatterView::new(self.formatter))
    }

    pub fn into_parts(self) -> (P, F) {
        (self.parser, self.formatter)
    }
}

impl<O: 'static, I: 'static> ParserFormatter<SharedParser<O>, SharedFormatter<I>> {
    /// Builds an adapter from opaque collaborators.
    ///
    /// `parser` is checked against the parser contract first, then
    /// `formatter` against the formatter contract. The first violation is
    /// returned and no adapter is built.
    pub fn from_candidates(
        parser: Candidate,
        formatter: Candidate,
    ) -> Result<Self, ContractViolation> {
        let parser_name = parser.type_name();
        let formatter_name = formatter.type_name();
        let parser = ContractValidator::<SharedParser<O>>::compile().accept(parser)?;
        let formatter = ContractValidator::<SharedFormatter<I>>::compile().accept(formatter)?;
        tracing::debug!(
            parser = parser_name,
            formatter = formatter_name,
            "parser/formatter assembled from candidates"
        );
        Ok(Self { parser, formatter })
    }
}

impl<P: Parser, F> Parser for ParserFormatter<P, F> {
    type Output = P::Output;

    #[inline]
    fn parse(
        &self,
        text: &str,
        position: usize,
        end: usize,
        space: &dyn Space,
    ) -> Result<(Self::Output, usize), ParseError> {
        self.parser.parse(text, position, end, space)
    }
}

impl<P, F: Formatter> Formatter for ParserFormatter<P, F> {
    type Input = F::Input;

    #[inline]
    fn format(&self, value: &Self::Input) -> Result<String, FormatError> {
        self.formatter.format(value)
    }
}

impl<P, F> std::fmt::Debug for ParserFormatter<P, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserFormatter")
            .field("parser", &type_name::<P>())
            .field("formatter", &type_name::<F>())
            .finish()
    }
}
