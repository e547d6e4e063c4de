//! Fixed-input checks of every matcher, rendered into a [`Report`].

use crate::char_set::CharSet;
use crate::matched::Match;
use crate::matchers::*;
use crate::report::Report;

/// Run all checks into `report`.
pub fn run(report: &mut Report) {
    basic(report);
    posix(report);
    windows(report);
}

/// Check `matcher` against every character of `chars`, reporting failures only.
fn sweep(
    report: &mut Report,
    description: &str,
    chars: impl IntoIterator<Item = char>,
    matcher: fn(&str) -> Match,
) {
    report.quietly(|r| {
        let mut buf = [0u8; 4];
        for ch in chars {
            r.expect_len(description, matcher(ch.encode_utf8(&mut buf)), 1);
        }
    });
}

fn basic(r: &mut Report) {
    r.section("Basic character matching");

    r.expect_match("`match_char` should match a matching character", match_char("A", 'A'));
    r.expect_no_match(
        "`match_char` should not match a non-matching character",
        match_char("A", 'a'),
    );

    r.expect_match("`match_end` should match an empty string", match_end(""));
    r.expect_no_match("`match_end` should not match a string", match_end("A"));

    r.expect_match("`match_any_of` should match an allowed character", match_any_of("A", "aA123"));
    r.expect_match(
        "`match_any_of` should match any character if any are allowed",
        match_any_of("A", CharSet::Any),
    );
    r.expect_no_match(
        "`match_any_of` should not match any character if none are allowed",
        match_any_of("A", ""),
    );
    r.expect_no_match(
        "`match_any_of` should not match a character that is not allowed",
        match_any_of("B", "aA123"),
    );

    r.expect_len("`match_exact` should match a matching string", match_exact("AA", "AA"), 2);
    r.expect_len(
        "`match_exact` should match a matching string even if the input is longer",
        match_exact("AAZ", "AA"),
        2,
    );
    r.expect_no_match(
        "`match_exact` should not match a non-matching string",
        match_exact("AA", "BAA"),
    );
    r.expect_no_match(
        "`match_exact` should not match a non-matching string that starts the same",
        match_exact("AAA", "ABA"),
    );
    r.expect_no_match(
        "`match_exact` should not match a shorter input even if they start the same",
        match_exact("BA", "BAA"),
    );

    r.expect_len(
        "`match_exact_to_end` should match a matching string",
        match_exact_to_end("AA", "AA"),
        2,
    );
    r.expect_no_match(
        "`match_exact_to_end` should not match if the input is longer",
        match_exact_to_end("AAZ", "AA"),
    );
    r.expect_no_match(
        "`match_exact_to_end` should not match a non-matching string",
        match_exact_to_end("AA", "BAA"),
    );

    r.expect_len(
        "`match_at_least_n` should match all of a fully matching string",
        match_at_least_n("ABC", 2, "ABC"),
        3,
    );
    r.expect_len(
        "`match_at_least_n` should match the minimum required prefix",
        match_at_least_n("ABQ", 2, "ABC"),
        2,
    );
    r.expect_no_match(
        "`match_at_least_n` should not match below the minimum required prefix",
        match_at_least_n("ABQ", 3, "ABC"),
    );

    sweep(r, "`match_digit10` should match a base-10 numeric character", '0'..='9', match_digit10);
    r.expect_no_match(
        "`match_digit10` should not match a non-base10 character",
        match_digit10("A"),
    );

    r.expect_len(
        "`match_unsigned_integer10` should match an unsigned base-10 numeric string",
        match_unsigned_integer10("1234a"),
        4,
    );
    r.expect_no_match(
        "`match_unsigned_integer10` should not match a non-numeric string",
        match_unsigned_integer10("a1234a"),
    );

    let signed = [
        ("1234a", 4, "an unsigned base-10 numeric string"),
        ("+1234a", 5, "a numeric string with a positive sign"),
        ("++1234a", 0, "a numeric string with two positive signs"),
        ("-1234a", 5, "a numeric string with a negative sign"),
        ("--1234a", 0, "a numeric string with two negative signs"),
        ("a1234a", 0, "a non-numeric string"),
        ("+", 0, "a positive sign alone"),
        ("-", 0, "a negative sign alone"),
    ];
    for (input, expected, what) in signed {
        let verb = if expected == 0 { "should not match" } else { "should match" };
        r.expect_len(
            &format!("`match_signed_integer10` {verb} {what}"),
            match_signed_integer10(input),
            expected,
        );
    }

    sweep(
        r,
        "`match_digit16` should match a base-16 numeric character",
        ('0'..='9').chain('A'..='F').chain('a'..='f'),
        match_digit16,
    );
    r.expect_no_match(
        "`match_digit16` should not match a non-base16 character",
        match_digit16("G"),
    );

    sweep(r, "`match_upper` should match an uppercase character", 'A'..='Z', match_upper);
    r.expect_no_match("`match_upper` should not match a non-uppercase character", match_upper("a"));

    sweep(r, "`match_lower` should match a lowercase character", 'a'..='z', match_lower);
    r.expect_no_match("`match_lower` should not match a non-lowercase character", match_lower("A"));

    sweep(
        r,
        "`match_alpha` should match an alphabetic character",
        ('A'..='Z').chain('a'..='z'),
        match_alpha,
    );
    r.expect_no_match(
        "`match_alpha` should not match a non-alphabetic character",
        match_alpha("1"),
    );

    sweep(
        r,
        "`match_alnum` should match an alphanumeric character",
        ('0'..='9').chain('A'..='Z').chain('a'..='z'),
        match_alnum,
    );
    r.expect_no_match(
        "`match_alnum` should not match a non-alphanumeric character",
        match_alnum("-"),
    );
}

fn posix(r: &mut Report) {
    r.section("POSIX-style matching");

    r.expect_len(
        "`match_short_option` should match with an option allowed",
        match_short_option("-a", "dacb1"),
        2,
    );
    r.expect_len(
        "`match_short_option` should match with an option allowed and an arbitrary trailer",
        match_short_option("-azrf", "dacb1"),
        2,
    );
    r.expect_no_match(
        "`match_short_option` should not match if no option given",
        match_short_option("-", "dacb1"),
    );
    r.expect_no_match(
        "`match_short_option` should not match if no valid option given",
        match_short_option("-A", "dacb1"),
    );

    r.expect_match(
        "`match_short_flags` should match with all flags allowed",
        match_short_flags("-abcd1", "dacb1"),
    );
    r.expect_match(
        "`match_short_flags` should match with any flags allowed",
        match_short_flags("-abcd", CharSet::Any),
    );
    r.expect_no_match(
        "`match_short_flags` should not match if not all flags are allowed",
        match_short_flags("-abcd", "dac"),
    );
    r.expect_no_match(
        "`match_short_flags` should not match for non-alphanumeric characters",
        match_short_flags("-abcd_", "dacb"),
    );

    r.expect_len(
        "`match_long_option` should match against an exact match",
        match_long_option("--hello", "-hello"),
        7,
    );
    r.expect_len(
        "`match_long_option` should match against a prefix match",
        match_long_option("--hellop", "-hello"),
        7,
    );
    r.expect_no_match(
        "`match_long_option` should not match against a non-matching string",
        match_long_option("--hellop", "-help"),
    );
    r.expect_no_match(
        "`match_long_option` should not match without the second dash",
        match_long_option("--hellop", "hellop"),
    );
    r.expect_no_match(
        "`match_long_option` should not match against an empty name",
        match_long_option("-", ""),
    );

    r.expect_len(
        "`match_option_terminator` should match if the string is exactly --",
        match_option_terminator("--"),
        2,
    );
    r.expect_no_match(
        "`match_option_terminator` should not match if the string continues after --",
        match_option_terminator("--a"),
    );
    r.expect_no_match(
        "`match_option_terminator` should not match if the string does not start with --",
        match_option_terminator("b--a"),
    );
}

fn windows(r: &mut Report) {
    r.section("Windows-style matching");

    r.expect_len(
        "`match_switch` should match with a switch allowed",
        match_switch("/a", "dacb1"),
        2,
    );
    r.expect_len(
        "`match_switch` should match with a switch allowed and an arbitrary trailer",
        match_switch("/azrf", "dacb1"),
        2,
    );
    r.expect_no_match(
        "`match_switch` should not match if no switch given",
        match_switch("/", "dacb1"),
    );
    r.expect_no_match(
        "`match_switch` should not match if no valid switch given",
        match_switch("/A", "dacb1"),
    );

    r.expect_len(
        "`match_long_switch` should match against an exact match",
        match_long_switch("/hello", "hello"),
        6,
    );
    r.expect_len(
        "`match_long_switch` should match against a prefix match",
        match_long_switch("/hellop", "hello"),
        6,
    );
    r.expect_no_match(
        "`match_long_switch` should not match against a non-matching string",
        match_long_switch("/hellop", "help"),
    );
    r.expect_no_match(
        "`match_long_switch` should not match against an empty name",
        match_long_switch("/hellop", ""),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_check_passes() {
        let mut report = Report::new(true);
        run(&mut report);
        assert!(report.is_success(), "{report}");
        assert_eq!(report.exit_code(), 0);
        assert!(report.passed() > 100);
    }

    #[test]
    fn report_has_three_sections() {
        let mut report = Report::new(false);
        run(&mut report);
        let text = report.to_string();
        assert!(text.contains("# Basic character matching\n"));
        assert!(text.contains("# POSIX-style matching\n"));
        assert!(text.contains("# Windows-style matching\n"));
        // Sweeps stay quiet even in a verbose report.
        assert!(!text.contains("should match a base-10 numeric character"));
    }
}
