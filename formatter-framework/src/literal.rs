use crate::error::FormatError;
use crate::traits::Formatter;

/// Emits one fixed piece of text.
///
/// Accepts the unit value, which is what the matching literal parser
/// produces, so formatting never fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    text: String,
}

impl Literal {
    /// Creates a formatter emitting exactly `text`.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }

    /// Returns the text this formatter emits.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Formatter for Literal {
    type Input = ();

    fn format(&self, _value: &()) -> Result<String, FormatError> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_emits_text() {
        assert_eq!(Literal::new("foo").format(&()), Ok("foo".to_string()));
    }

    #[test]
    fn test_empty_literal_emits_nothing() {
        assert_eq!(Literal::new("").format(&()), Ok(String::new()));
    }
}
