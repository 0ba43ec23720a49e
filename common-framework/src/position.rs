/// A human-readable location in source text.
///
/// Parsers work on byte offsets; this type translates an offset into the
/// line/column pair used when reporting a failure to a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, counted in characters)
    pub column: usize,
    /// Byte offset from the start of the input
    pub offset: usize,
}

impl Position {
    /// Creates a new position at the start of the input.
    pub fn new() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Creates a position with the given values.
    pub fn at(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Locates a byte offset inside `text`.
    ///
    /// Offsets past the end of `text` are clamped to `text.len()`. An offset
    /// that falls inside a multi-byte character is attributed to that
    /// character's column.
    pub fn locate(text: &str, offset: usize) -> Self {
        let offset = offset.min(text.len());
        let mut position = Self::new();
        for (index, ch) in text.char_indices() {
            if index >= offset {
                break;
            }
            if index + ch.len_utf8() > offset {
                break;
            }
            if ch == '\n' {
                position.line += 1;
                position.column = 1;
            } else {
                position.column += 1;
            }
        }
        position.offset = offset;
        position
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_new() {
        let pos = Position::new();
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.offset, 0);
    }

    #[test]
    fn test_position_default() {
        let pos = Position::default();
        assert_eq!(pos, Position::new());
    }

    #[test]
    fn test_locate_first_line() {
        assert_eq!(Position::locate("foobar", 3), Position::at(1, 4, 3));
    }

    #[test]
    fn test_locate_after_newline() {
        let text = "ab\ncd";
        assert_eq!(Position::locate(text, 3), Position::at(2, 1, 3));
        assert_eq!(Position::locate(text, 4), Position::at(2, 2, 4));
    }

    #[test]
    fn test_locate_clamps_past_end() {
        assert_eq!(Position::locate("ab", 10), Position::at(1, 3, 2));
    }

    #[test]
    fn test_locate_counts_characters_not_bytes() {
        // "é" is two bytes wide
        assert_eq!(Position::locate("éx", 2), Position::at(1, 2, 2));
        assert_eq!(Position::locate("éx", 1), Position::at(1, 1, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::at(3, 7, 20).to_string(), "3:7");
    }
}
