//! Matchers that consume runs of characters.

use crate::matched::Match;

use super::chars::match_any_of;

/// Length in bytes of the longest common prefix of `input` and `pattern`.
fn common_prefix(input: &str, pattern: &str) -> usize {
    input
        .chars()
        .zip(pattern.chars())
        .take_while(|(a, b)| a == b)
        .map(|(ch, _)| ch.len_utf8())
        .sum()
}

/// Match `input` if it starts with the whole of `pattern`.
///
/// Trailing input is allowed. An empty `pattern` never matches.
pub fn match_exact(input: &str, pattern: &str) -> Match {
    let bytes = common_prefix(input, pattern);
    if bytes == pattern.len() {
        Match::from_len(bytes)
    } else {
        Match::NoMatch
    }
}

/// Match `input` if it is exactly `pattern`, with nothing left over.
pub fn match_exact_to_end(input: &str, pattern: &str) -> Match {
    match match_exact(input, pattern) {
        m if m.len() == input.len() => m,
        _ => Match::NoMatch,
    }
}

/// Match as much of `pattern` as `input` agrees with, provided at least
/// the first `n` bytes agree.
///
/// This is the abbreviation matcher: `match_at_least_n("ver", 3, "verbose")`
/// consumes `ver`.
pub fn match_at_least_n(input: &str, n: usize, pattern: &str) -> Match {
    let bytes = common_prefix(input, pattern);
    if bytes >= n {
        Match::from_len(bytes)
    } else {
        Match::NoMatch
    }
}

/// Match a run of base-10 digits.
pub fn match_unsigned_integer10(input: &str) -> Match {
    Match::from_len(input.bytes().take_while(u8::is_ascii_digit).count())
}

/// Match a base-10 integer with at most one leading `+` or `-`.
pub fn match_signed_integer10(input: &str) -> Match {
    let sign = match_any_of(input, "+-");
    match match_unsigned_integer10(sign.rest(input)) {
        Match::NoMatch => Match::NoMatch,
        digits => digits.extend(sign.len()),
    }
}
