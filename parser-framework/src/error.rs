use thiserror::Error;

/// Something a parser was looking for when it failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expected {
    /// An exact piece of text.
    Literal(String),
    /// The end of the input.
    EndOfInput,
    /// A free-form description supplied by a custom parser.
    Described(String),
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Literal(text) => write!(f, "{:?}", text),
            Expected::EndOfInput => write!(f, "end of input"),
            Expected::Described(description) => write!(f, "{}", description),
        }
    }
}

/// Why a parser did not match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing matched at `position`.
    #[error("no match at offset {position}: expected {}", describe(.expected))]
    NoMatch {
        position: usize,
        expected: Vec<Expected>,
    },
    /// The requested span does not fit the input or splits a character.
    #[error("span {position}..{end} is not a valid range of the {len}-byte input")]
    OutOfBounds {
        position: usize,
        end: usize,
        len: usize,
    },
}

impl ParseError {
    /// A failure at `position` with a single expectation.
    pub fn no_match(position: usize, expected: Expected) -> Self {
        ParseError::NoMatch {
            position,
            expected: vec![expected],
        }
    }

    /// The offset the failure refers to.
    pub fn position(&self) -> usize {
        match self {
            ParseError::NoMatch { position, .. } | ParseError::OutOfBounds { position, .. } => {
                *position
            }
        }
    }

    /// Combines the failures of two alternatives.
    ///
    /// The failure that got further into the input wins. When both stopped at
    /// the same offset their expectations are merged, keeping the first
    /// occurrence of each.
    pub fn merge(self, other: ParseError) -> ParseError {
        match (self, other) {
            (
                ParseError::NoMatch {
                    position,
                    mut expected,
                },
                ParseError::NoMatch {
                    position: other_position,
                    expected: other_expected,
                },
            ) => {
                if other_position > position {
                    return ParseError::NoMatch {
                        position: other_position,
                        expected: other_expected,
                    };
                }
                if other_position == position {
                    for item in other_expected {
                        if !expected.contains(&item) {
                            expected.push(item);
                        }
                    }
                }
                ParseError::NoMatch { position, expected }
            }
            (error @ ParseError::OutOfBounds { .. }, _) => error,
            (_, error) => error,
        }
    }
}

/// Verifies that `position..end` is a valid span of `text`.
pub fn check_bounds(text: &str, position: usize, end: usize) -> Result<(), ParseError> {
    let valid = position <= end
        && end <= text.len()
        && text.is_char_boundary(position)
        && text.is_char_boundary(end);
    if valid {
        Ok(())
    } else {
        Err(ParseError::OutOfBounds {
            position,
            end,
            len: text.len(),
        })
    }
}

fn describe(expected: &[Expected]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [single] => single.to_string(),
        _ => {
            let items: Vec<String> = expected.iter().map(ToString::to_string).collect();
            format!("one of {}", items.join(", "))
        }
    }
}
