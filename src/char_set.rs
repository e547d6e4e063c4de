//! Character classes used by the class-aware matchers.
//!
//! All ranges are ASCII only. Option syntax is ASCII, and a non-ASCII
//! letter never counts as an option character.

/// A set of characters a matcher will accept.
///
/// `Any` and `OneOf("")` are opposites: the first accepts every character,
/// the second accepts none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharSet<'a> {
    /// Every character is allowed.
    Any,
    /// Only the characters of the string are allowed.
    OneOf(&'a str),
}

impl CharSet<'_> {
    pub fn contains(&self, ch: char) -> bool {
        match self {
            CharSet::Any => true,
            CharSet::OneOf(chars) => chars.contains(ch),
        }
    }
}

impl<'a> From<&'a str> for CharSet<'a> {
    fn from(chars: &'a str) -> Self {
        CharSet::OneOf(chars)
    }
}

impl<'a> From<Option<&'a str>> for CharSet<'a> {
    fn from(chars: Option<&'a str>) -> Self {
        chars.map_or(CharSet::Any, CharSet::OneOf)
    }
}

pub fn is_digit10(ch: char) -> bool {
    ch.is_ascii_digit()
}

pub fn is_digit16(ch: char) -> bool {
    matches!(ch, '0'..='9' | 'a'..='f' | 'A'..='F')
}

pub fn is_upper(ch: char) -> bool {
    ch.is_ascii_uppercase()
}

pub fn is_lower(ch: char) -> bool {
    ch.is_ascii_lowercase()
}

pub fn is_alpha(ch: char) -> bool {
    is_upper(ch) || is_lower(ch)
}

pub fn is_alnum(ch: char) -> bool {
    is_alpha(ch) || is_digit10(ch)
}
