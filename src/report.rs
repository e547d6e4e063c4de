//! Markdown pass/fail report for matcher checks.
//!
//! A [`Report`] is the whole state of one run: it is created by the caller,
//! passed to each check, and inspected at the end for the exit status.

use std::fmt;
use std::panic::Location;

use itertools::Itertools;

use crate::matched::Match;

/// Accumulated outcome of a run of checks.
#[derive(Debug, Default)]
pub struct Report {
    /// Suppress the lines of successful checks.
    quiet: bool,
    lines: Vec<String>,
    passed: usize,
    failures: Vec<String>,
}

impl Report {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            ..Self::default()
        }
    }

    /// Start a new `# title` section.
    pub fn section(&mut self, title: &str) {
        self.lines.push(format!("# {title}"));
    }

    /// Record one check. `got` is the value reported on failure.
    #[track_caller]
    pub fn check(&mut self, description: &str, ok: bool, got: usize) -> bool {
        if ok {
            self.passed += 1;
            if !self.quiet {
                self.lines.push(format!("* [X] Success: {description}"));
            }
        } else {
            let at = Location::caller();
            self.lines.push(format!(
                "* [ ] **Failure:** {description} does not hold, got {got} ({}:{})",
                at.file(),
                at.line()
            ));
            self.failures.push(description.to_string());
        }
        ok
    }

    /// Check that `m` consumed exactly `expected` bytes (`0` meaning no match).
    #[track_caller]
    pub fn expect_len(&mut self, description: &str, m: Match, expected: usize) -> bool {
        self.check(description, m.len() == expected, m.len())
    }

    #[track_caller]
    pub fn expect_match(&mut self, description: &str, m: Match) -> bool {
        self.check(description, m.is_match(), m.len())
    }

    #[track_caller]
    pub fn expect_no_match(&mut self, description: &str, m: Match) -> bool {
        self.check(description, m.is_no_match(), m.len())
    }

    /// Run `f` with success lines suppressed, then restore the previous setting.
    ///
    /// Used for sweeps over character ranges, where only failures are
    /// interesting.
    pub fn quietly<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let quiet = std::mem::replace(&mut self.quiet, true);
        let result = f(self);
        self.quiet = quiet;
        result
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Process exit status for this run.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;
        if self.is_success() {
            writeln!(f, "{} checks passed.", self.passed)
        } else {
            writeln!(
                f,
                "{} passed, {} failed: {}",
                self.passed,
                self.failed(),
                self.failures.iter().join("; ")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_lines_and_exit_code() {
        let mut report = Report::new(false);
        report.section("Basics");
        assert!(report.check("one holds", true, 1));
        assert_eq!(report.passed(), 1);
        assert_eq!(report.exit_code(), 0);

        let text = report.to_string();
        assert!(text.starts_with("# Basics\n* [X] Success: one holds\n"));
        assert!(text.ends_with("1 checks passed.\n"));
    }

    #[test]
    fn failure_is_recorded_with_location() {
        let mut report = Report::new(false);
        assert!(!report.check("two holds", false, 7));
        assert_eq!(report.failed(), 1);
        assert_eq!(report.exit_code(), 1);

        let text = report.to_string();
        assert!(text.contains("* [ ] **Failure:** two holds does not hold, got 7 ("));
        assert!(text.contains("report.rs:"));
        assert!(text.contains("0 passed, 1 failed: two holds"));
    }

    #[test]
    fn quiet_hides_successes_only() {
        let mut report = Report::new(true);
        report.check("hidden", true, 1);
        report.check("shown", false, 0);
        let text = report.to_string();
        assert!(!text.contains("hidden"));
        assert!(text.contains("shown does not hold"));
    }

    #[test]
    fn quietly_restores_previous_setting() {
        let mut report = Report::new(false);
        report.quietly(|r| {
            r.check("in sweep", true, 1);
        });
        report.check("after sweep", true, 1);
        let text = report.to_string();
        assert!(!text.contains("in sweep"));
        assert!(text.contains("* [X] Success: after sweep"));
        assert_eq!(report.passed(), 2);
    }

    #[test]
    fn match_expectations() {
        let mut report = Report::new(true);
        assert!(report.expect_len("len", Match::from_len(3), 3));
        assert!(report.expect_len("zero", Match::NoMatch, 0));
        assert!(report.expect_match("match", Match::from_len(1)));
        assert!(report.expect_no_match("no match", Match::NoMatch));
        assert!(!report.expect_no_match("unexpected", Match::from_len(2)));
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn separate_reports_do_not_share_state() {
        let mut first = Report::new(false);
        first.check("fails", false, 0);
        let second = Report::new(false);
        assert_eq!(first.exit_code(), 1);
        assert_eq!(second.exit_code(), 0);
    }
}
