//! Single character matchers.

use crate::char_set::{self, CharSet};
use crate::matched::Match;

/// Match the first character of `input` against a predicate.
fn match_first(input: &str, pred: impl FnOnce(char) -> bool) -> Match {
    match input.chars().next() {
        Some(ch) => Match::one_if(pred(ch), ch.len_utf8()),
        None => Match::NoMatch,
    }
}

/// Match `input` if it starts with `c`.
pub fn match_char(input: &str, c: char) -> Match {
    match_first(input, |ch| ch == c)
}

/// Match the end of `input`.
///
/// Succeeds with a length of 1 (the terminator) only on empty input.
pub fn match_end(input: &str) -> Match {
    Match::one_if(input.is_empty(), 1)
}

/// Match the first character of `input` if `allowed` contains it.
pub fn match_any_of<'a>(input: &str, allowed: impl Into<CharSet<'a>>) -> Match {
    let allowed = allowed.into();
    match_first(input, |ch| allowed.contains(ch))
}

/// `0-9`
pub fn match_digit10(input: &str) -> Match {
    match_first(input, char_set::is_digit10)
}

/// `0-9`, `a-f`, `A-F`
pub fn match_digit16(input: &str) -> Match {
    match_first(input, char_set::is_digit16)
}

pub fn match_upper(input: &str) -> Match {
    match_first(input, char_set::is_upper)
}

pub fn match_lower(input: &str) -> Match {
    match_first(input, char_set::is_lower)
}

pub fn match_alpha(input: &str) -> Match {
    match_first(input, char_set::is_alpha)
}

pub fn match_alnum(input: &str) -> Match {
    match_first(input, char_set::is_alnum)
}
