use std::num::NonZeroUsize;

/// The outcome of running a matcher against an input.
///
/// `Matched` carries the number of bytes consumed, which is never zero.
/// Numeric callers can use [`Match::len`], where `NoMatch` reads as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Match {
    #[default]
    NoMatch,
    Matched(NonZeroUsize),
}

impl Match {
    /// Build a result from a consumed length. A length of zero is `NoMatch`.
    pub fn from_len(len: usize) -> Self {
        NonZeroUsize::new(len).map_or(Match::NoMatch, Match::Matched)
    }

    /// A single consumed character of `len_utf8` bytes, or `NoMatch`.
    pub(crate) fn one_if(ok: bool, len_utf8: usize) -> Self {
        if ok {
            Match::from_len(len_utf8)
        } else {
            Match::NoMatch
        }
    }

    /// Number of bytes consumed; `0` for `NoMatch`.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(self) -> usize {
        match self {
            Match::NoMatch => 0,
            Match::Matched(n) => n.get(),
        }
    }

    pub fn is_match(self) -> bool {
        matches!(self, Match::Matched(_))
    }

    pub fn is_no_match(self) -> bool {
        !self.is_match()
    }

    /// Short-circuit alternation: `f` is only evaluated when `self` failed.
    pub fn or_else(self, f: impl FnOnce() -> Match) -> Match {
        match self {
            Match::NoMatch => f(),
            matched => matched,
        }
    }

    /// Add `extra` bytes to a successful match. `NoMatch` stays `NoMatch`.
    pub(crate) fn extend(self, extra: usize) -> Match {
        match self {
            Match::NoMatch => Match::NoMatch,
            Match::Matched(n) => Match::from_len(n.get() + extra),
        }
    }

    /// The part of `input` following this match.
    ///
    /// `match_end` reports 1 for the terminator of an empty input, so the
    /// offset saturates at the end of `input` rather than panicking.
    pub fn rest(self, input: &str) -> &str {
        input.get(self.len()..).unwrap_or("")
    }
}

impl From<Match> for usize {
    fn from(m: Match) -> usize {
        m.len()
    }
}

impl From<Match> for bool {
    fn from(m: Match) -> bool {
        m.is_match()
    }
}
