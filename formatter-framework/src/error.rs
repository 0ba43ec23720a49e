use thiserror::Error;

/// Why a value could not be formatted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The value has no representation under `formatter`.
    #[error("{formatter} cannot format the value: {reason}")]
    Unformattable { formatter: String, reason: String },
    /// Every alternative rejected the value.
    #[error("no alternative could format the value ({} tried)", .0.len())]
    NoAlternative(Vec<FormatError>),
}

impl FormatError {
    pub fn unformattable<N, R>(formatter: N, reason: R) -> Self
    where
        N: Into<String>,
        R: Into<String>,
    {
        FormatError::Unformattable {
            formatter: formatter.into(),
            reason: reason.into(),
        }
    }

    /// Combines the failures of two alternatives into one flat list.
    pub fn alternatives(first: FormatError, second: FormatError) -> FormatError {
        let mut errors = Vec::new();
        for error in [first, second] {
            match error {
                FormatError::NoAlternative(nested) => errors.extend(nested),
                other => errors.push(other),
            }
        }
        FormatError::NoAlternative(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unformattable_display() {
        let error = FormatError::unformattable("digit", "10 has two digits");
        assert_eq!(
            error.to_string(),
            "digit cannot format the value: 10 has two digits"
        );
    }

    #[test]
    fn test_alternatives_flatten() {
        let a = FormatError::unformattable("a", "no");
        let b = FormatError::unformattable("b", "no");
        let c = FormatError::unformattable("c", "no");
        let nested = FormatError::alternatives(a.clone(), b.clone());
        let flat = FormatError::alternatives(nested, c.clone());
        assert_eq!(flat, FormatError::NoAlternative(vec![a, b, c]));
        assert_eq!(flat.to_string(), "no alternative could format the value (3 tried)");
    }
}
