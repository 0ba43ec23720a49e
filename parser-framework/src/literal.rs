use crate::error::{check_bounds, Expected, ParseError};
use crate::traits::Parser;
use common_framework::Space;

/// Matches one fixed piece of text.
///
/// Insignificant characters described by the space rule are skipped first.
/// A successful match produces `()`; the text itself carries no value. The
/// empty literal matches everywhere without consuming anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    text: String,
}

impl Literal {
    /// Creates a parser recognizing exactly `text`.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }

    /// Returns the text this parser recognizes.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Parser for Literal {
    type Output = ();

    fn parse(
        &self,
        text: &str,
        position: usize,
        end: usize,
        space: &dyn Space,
    ) -> Result<((), usize), ParseError> {
        check_bounds(text, position, end)?;
        let start = space.skip(text, position, end);
        let stop = start + self.text.len();
        if stop <= end && text[start..end].starts_with(self.text.as_str()) {
            Ok(((), stop))
        } else {
            Err(ParseError::no_match(
                start,
                Expected::Literal(self.text.clone()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common_framework::{SkipNone, SkipWhitespace};

    #[test]
    fn test_literal_matches_prefix() {
        let foo = Literal::new("foo");
        assert_eq!(foo.parse("foobar", 0, 6, &SkipNone), Ok(((), 3)));
    }

    #[test]
    fn test_literal_respects_end() {
        let foo = Literal::new("foo");
        assert_eq!(
            foo.parse("foobar", 0, 2, &SkipNone),
            Err(ParseError::no_match(0, Expected::Literal("foo".to_string())))
        );
    }

    #[test]
    fn test_literal_skips_space_first() {
        let foo = Literal::new("foo");
        assert_eq!(foo.parse("  foo", 0, 5, &SkipWhitespace), Ok(((), 5)));
        assert!(foo.parse("  foo", 0, 5, &SkipNone).is_err());
    }

    #[test]
    fn test_failure_reports_offset_after_space() {
        let foo = Literal::new("foo");
        assert_eq!(
            foo.parse("  bar", 0, 5, &SkipWhitespace).unwrap_err().position(),
            2
        );
    }

    #[test]
    fn test_empty_literal_is_zero_width() {
        let empty = Literal::new("");
        assert_eq!(empty.parse("0123456789", 5, 10, &SkipNone), Ok(((), 5)));
        assert_eq!(empty.parse("", 0, 0, &SkipNone), Ok(((), 0)));
    }

    #[test]
    fn test_rejects_invalid_span() {
        let foo = Literal::new("foo");
        assert_eq!(
            foo.parse("foo", 4, 3, &SkipNone),
            Err(ParseError::OutOfBounds {
                position: 4,
                end: 3,
                len: 3
            })
        );
    }
}
