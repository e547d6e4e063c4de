//! POSIX-style options: `-a`, `-abc`, `--name` and `--`.

use crate::char_set::{self, CharSet};
use crate::matched::Match;

use super::chars::match_char;
use super::sequence::match_exact_to_end;
use super::{lead_then_name, lead_then_option_char};

/// Match a dash followed by one alphanumeric option character from `allowed`.
///
/// Always consumes 2 on success. Whatever follows is left to the caller, so
/// `-azrf` matches as `-a`.
pub fn match_short_option<'a>(input: &str, allowed: impl Into<CharSet<'a>>) -> Match {
    lead_then_option_char(input, '-', allowed.into())
}

/// Match a cluster of short flags such as `-abc`.
///
/// Every character after the dash must be alphanumeric and in `allowed`;
/// a single rejected character fails the whole cluster.
pub fn match_short_flags<'a>(input: &str, allowed: impl Into<CharSet<'a>>) -> Match {
    let allowed = allowed.into();
    let dash = match_char(input, '-');
    if dash.is_no_match() {
        return Match::NoMatch;
    }
    let flags = dash.rest(input);
    if flags
        .chars()
        .all(|ch| char_set::is_alnum(ch) && allowed.contains(ch))
    {
        // Flags are ASCII, so bytes and characters agree here.
        Match::from_len(flags.len()).extend(dash.len())
    } else {
        Match::NoMatch
    }
}

/// Match a dash followed by the whole of `name`.
///
/// Pass `"-name"` to match `--name`. The trailer is not inspected, so
/// checking for `=` or the end of the argument is up to the caller.
pub fn match_long_option(input: &str, name: &str) -> Match {
    lead_then_name(input, '-', name)
}

/// Match an argument that is exactly `--`.
pub fn match_option_terminator(input: &str) -> Match {
    match_exact_to_end(input, "--")
}
