/// A rule describing insignificant characters between tokens.
///
/// Parsers call [`Space::skip`] before they try to match, so the same grammar
/// can be run with or without whitespace tolerance.
pub trait Space {
    /// Returns the first offset at or after `position` (and at most `end`)
    /// that does not start an insignificant character.
    ///
    /// `position` and `end` must lie on character boundaries of `text` with
    /// `position <= end <= text.len()`.
    fn skip(&self, text: &str, position: usize, end: usize) -> usize;
}

impl<S: Space + ?Sized> Space for &S {
    fn skip(&self, text: &str, position: usize, end: usize) -> usize {
        (**self).skip(text, position, end)
    }
}

/// Skips nothing: every character is significant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipNone;

impl Space for SkipNone {
    #[inline]
    fn skip(&self, _text: &str, position: usize, _end: usize) -> usize {
        position
    }
}

/// Skips Unicode whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipWhitespace;

impl Space for SkipWhitespace {
    fn skip(&self, text: &str, position: usize, end: usize) -> usize {
        skip_while(text, position, end, char::is_whitespace)
    }
}

/// Skips any character from a fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipChars {
    chars: Vec<char>,
}

impl SkipChars {
    /// Creates a rule skipping every character of `chars`.
    pub fn new<S: AsRef<str>>(chars: S) -> Self {
        Self {
            chars: chars.as_ref().chars().collect(),
        }
    }
}

impl Space for SkipChars {
    fn skip(&self, text: &str, position: usize, end: usize) -> usize {
        skip_while(text, position, end, |ch| self.chars.contains(&ch))
    }
}

fn skip_while<F>(text: &str, position: usize, end: usize, mut predicate: F) -> usize
where
    F: FnMut(char) -> bool,
{
    let mut current = position;
    for ch in text[position..end].chars() {
        if !predicate(ch) {
            break;
        }
        current += ch.len_utf8();
    }
    current
}
