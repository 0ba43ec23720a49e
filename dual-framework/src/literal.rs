use crate::adapter::ParserFormatter;
use common_framework::Space;
use formatter_framework::{FormatError, Formatter, FormatterView};
use parser_framework::{ParseError, Parser, ParserView};

type LiteralParser = parser_framework::Literal;
type LiteralFormatter = formatter_framework::Literal;

/// Recognizes and emits one fixed token.
///
/// Parsing `text` produces `()`, and formatting `()` produces `text` again,
/// so `format(parse(text))` is always `text`. The empty literal matches
/// anywhere without consuming input and formats to the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    inner: ParserFormatter<LiteralParser, LiteralFormatter>,
}

impl Literal {
    pub fn new<S: Into<String>>(text: S) -> Self {
        let text = text.into();
        tracing::debug!(text = %text, "literal parser/formatter built");
        Self {
            inner: ParserFormatter::new(
                LiteralParser::new(text.clone()),
                LiteralFormatter::new(text),
            ),
        }
    }

    pub fn text(&self) -> &str {
        self.inner.parser().text()
    }

    pub fn as_adapter(&self) -> &ParserFormatter<LiteralParser, LiteralFormatter> {
        &self.inner
    }

    pub fn into_adapter(self) -> ParserFormatter<LiteralParser, LiteralFormatter> {
        self.inner
    }

    pub fn as_parser(&self) -> ParserView<&LiteralParser> {
        self.inner.as_parser()
    }

    pub fn as_formatter(&self) -> FormatterView<&LiteralFormatter> {
        self.inner.as_formatter()
    }

    pub fn split(self) -> (ParserView<LiteralParser>, FormatterView<LiteralFormatter>) {
        self.inner.split()
    }
}

impl Parser for Literal {
    type Output = ();

    #[inline]
    fn parse(
        &self,
        text: &str,
        position: usize,
        end: usize,
        space: &dyn Space,
    ) -> Result<((), usize), ParseError> {
        self.inner.parse(text, position, end, space)
    }
}

impl Formatter for Literal {
    type Input = ();

    #[inline]
    fn format(&self, value: &()) -> Result<String, FormatError> {
        self.inner.format(value)
    }
}
