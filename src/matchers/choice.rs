//! Alternation that reports which alternative matched.

use std::num::NonZeroUsize;

use crate::matched::Match;

/// Anything that can be run against an input view.
pub trait Matcher {
    fn match_input(&self, input: &str) -> Match;
}

impl<F> Matcher for F
where
    F: Fn(&str) -> Match,
{
    fn match_input(&self, input: &str) -> Match {
        self(input)
    }
}

/// The alternative picked by [`first_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice<T> {
    tag: T,
    len: NonZeroUsize,
}

impl<T: Copy> Choice<T> {
    /// Which alternative matched.
    pub fn tag(&self) -> T {
        self.tag
    }

    /// Bytes consumed by the winning alternative. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn rest<'a>(&self, input: &'a str) -> &'a str {
        input.get(self.len()..).unwrap_or("")
    }
}

/// Try each alternative left to right and stop at the first match.
///
/// Alternatives after the winner are never run.
pub fn first_of<T: Copy>(input: &str, alternatives: &[(T, &dyn Matcher)]) -> Option<Choice<T>> {
    alternatives
        .iter()
        .find_map(|(tag, matcher)| match matcher.match_input(input) {
            Match::Matched(len) => Some(Choice { tag: *tag, len }),
            Match::NoMatch => None,
        })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::matchers::{match_long_option, match_short_option};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Spelling {
        Long,
        Short,
    }

    #[test]
    fn reports_the_winning_tag() {
        let long: &dyn Matcher = &|s: &str| match_long_option(s, "-name");
        let short: &dyn Matcher = &|s: &str| match_short_option(s, "n");
        let alternatives = [(Spelling::Long, long), (Spelling::Short, short)];

        let choice = first_of("--name=x", &alternatives).unwrap();
        assert_eq!(choice.tag(), Spelling::Long);
        assert_eq!(choice.len(), 6);
        assert_eq!(choice.rest("--name=x"), "=x");

        let choice = first_of("-nfoo", &alternatives).unwrap();
        assert_eq!(choice.tag(), Spelling::Short);
        assert_eq!(choice.len(), 2);
        assert_eq!(choice.rest("-nfoo"), "foo");
    }

    #[test]
    fn none_when_nothing_matches() {
        let short: &dyn Matcher = &|s: &str| match_short_option(s, "n");
        assert_eq!(first_of("-x", &[(Spelling::Short, short)]), None);
        assert_eq!(first_of::<Spelling>("-x", &[]), None);
    }

    #[test]
    fn zero_length_alternative_is_skipped() {
        let empty: &dyn Matcher = &|_: &str| Match::from_len(0);
        let short: &dyn Matcher = &|s: &str| match_short_option(s, "n");
        let choice = first_of("-n", &[(Spelling::Long, empty), (Spelling::Short, short)]).unwrap();
        assert_eq!(choice.tag(), Spelling::Short);
        assert!(choice.len() > 0);
        assert_eq!(first_of("-n", &[(Spelling::Long, empty)]), None);
    }

    #[test]
    fn stops_at_first_success() {
        let calls = Cell::new(0);
        let first: &dyn Matcher = &|s: &str| {
            calls.set(calls.get() + 1);
            match_short_option(s, "a")
        };
        let second: &dyn Matcher = &|_: &str| {
            calls.set(calls.get() + 10);
            Match::from_len(1)
        };
        let choice = first_of("-a", &[(1, first), (2, second)]).unwrap();
        assert_eq!(choice.tag(), 1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn first_success_wins_over_longer_later_match() {
        let short: &dyn Matcher = &|s: &str| match_short_option(s, "l");
        let long: &dyn Matcher = &|s: &str| match_long_option(s, "link");
        let alternatives = [(Spelling::Short, short), (Spelling::Long, long)];
        let choice = first_of("-link", &alternatives).unwrap();
        assert_eq!(choice.tag(), Spelling::Short);
        assert_eq!(choice.len(), 2);
    }
}
