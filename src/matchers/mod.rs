//! Matchers for hand-written argument parsing.
//!
//! Every matcher takes an input view and returns a [`Match`] telling how many
//! bytes it consumed. Matchers are pure: the same arguments always give the
//! same result, and nothing is allocated or mutated.
//!
//! Matchers are combined with ordinary control flow. Alternation is
//! [`Match::or_else`] (or [`first_of`] when the caller needs to know which
//! alternative won), and sequencing is done by continuing on [`Match::rest`].
//!
//! ```rust
//! use clam::{match_char, match_end, match_long_option};
//!
//! let arg = "--name=value";
//! let m = match_long_option(arg, "-name");
//! let trailer = m.rest(arg);
//! assert!(m.is_match());
//! assert!(match_end(trailer).or_else(|| match_char(trailer, '=')).is_match());
//! ```

mod chars;
mod choice;
mod posix;
mod sequence;
mod windows;


pub use chars::{
    match_alnum, match_alpha, match_any_of, match_char, match_digit10, match_digit16, match_end,
    match_lower, match_upper,
};
pub use choice::{Choice, Matcher, first_of};
pub use posix::{match_long_option, match_option_terminator, match_short_flags, match_short_option};
pub use sequence::{
    match_at_least_n, match_exact, match_exact_to_end, match_signed_integer10,
    match_unsigned_integer10,
};
pub use windows::{match_long_switch, match_switch};

use crate::char_set::CharSet;
use crate::matched::Match;

/// `lead` followed by one alphanumeric character from `allowed`.
fn lead_then_option_char(input: &str, lead: char, allowed: CharSet<'_>) -> Match {
    let lead = match_char(input, lead);
    let option = lead.rest(input);
    if lead.is_match() && match_alnum(option).is_match() && match_any_of(option, allowed).is_match()
    {
        Match::from_len(2)
    } else {
        Match::NoMatch
    }
}

/// `lead` followed by the whole of `name`.
fn lead_then_name(input: &str, lead: char, name: &str) -> Match {
    let lead = match_char(input, lead);
    if lead.is_no_match() {
        return Match::NoMatch;
    }
    match match_exact(lead.rest(input), name) {
        Match::NoMatch => Match::NoMatch,
        m => m.extend(lead.len()),
    }
}
