//! Windows-style switches: `/a` and `/name`.

use crate::char_set::CharSet;
use crate::matched::Match;

use super::{lead_then_name, lead_then_option_char};

/// Match a slash followed by one alphanumeric switch character from `allowed`.
pub fn match_switch<'a>(input: &str, allowed: impl Into<CharSet<'a>>) -> Match {
    lead_then_option_char(input, '/', allowed.into())
}

/// Match a slash followed by the whole of `name`.
pub fn match_long_switch(input: &str, name: &str) -> Match {
    lead_then_name(input, '/', name)
}
