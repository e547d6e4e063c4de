//! Composable matchers for hand-written command line argument parsing.
//!
//! Rather than describing options in a table and handing them to an
//! interpreter, callers test each argument with small pure matchers and
//! decide what to do with ordinary control flow.
//!
//! # Example
//!
//! ```rust
//! use clam::{match_char, match_end, match_long_option, match_short_option};
//!
//! let args = ["--name=clam", "-v"];
//! let mut name = None;
//! let mut verbose = false;
//!
//! for arg in args {
//!     let m = match_long_option(arg, "-name");
//!     if m.is_match() {
//!         let trailer = m.rest(arg);
//!         if match_char(trailer, '=').is_match() {
//!             name = Some(&trailer[1..]);
//!         } else if match_end(trailer).is_no_match() {
//!             panic!("unexpected trailer {trailer}");
//!         }
//!         continue;
//!     }
//!     if match_short_option(arg, "v").is_match() {
//!         verbose = true;
//!     }
//! }
//!
//! assert_eq!(name, Some("clam"));
//! assert!(verbose);
//! ```

mod char_set;
pub mod demo;
mod matched;
pub mod matchers;
pub mod report;
pub mod selfcheck;

pub use char_set::{CharSet, is_alnum, is_alpha, is_digit10, is_digit16, is_lower, is_upper};
pub use matched::Match;
pub use matchers::{
    Choice, Matcher, first_of, match_alnum, match_alpha, match_any_of, match_at_least_n,
    match_char, match_digit10, match_digit16, match_end, match_exact, match_exact_to_end,
    match_long_option, match_long_switch, match_lower, match_option_terminator,
    match_short_flags, match_short_option, match_signed_integer10, match_switch,
    match_unsigned_integer10, match_upper,
};
pub use report::Report;
