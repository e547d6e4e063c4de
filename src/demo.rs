//! A small argument loop showing the matchers in use.
//!
//! Recognises:
//!
//! | Spelling                                     | Meaning                    |
//! |----------------------------------------------|----------------------------|
//! | `-h`, `--help`                               | Print usage and stop       |
//! | `-lNAME`, `-l NAME`                          | Link with `NAME`           |
//! | `--link NAME`, `--link=NAME`                 | Link with `NAME`           |
//! | `-link NAME`, `-link=NAME`                   | Link with `NAME`           |
//! | `/f [VALUE]`, `/F [VALUE]`                   | Use `VALUE` or a default   |
//! | `--`                                         | End of options             |
//!
//! Everything else, and everything after `--`, is skipped.

use std::io::Write;

use anyhow::{Result, bail};
use tracing::debug;

use crate::matched::Match;
use crate::matchers::{
    Matcher, first_of, match_char, match_end, match_long_option, match_option_terminator,
    match_short_option, match_switch,
};

const USAGE: &str = "\
Usage: clam-demo [option]... [-- operand...]
  -h | --help This help information
  -lname | -l name | --link name | --link=name | -link name | -link=name
  /f [value]
";

/// How the link option was spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkSpelling {
    /// `-link`
    Long,
    /// `--link`
    DoubleDash,
    /// `-l`
    Short,
}

impl LinkSpelling {
    /// Long spellings must be followed by `=` or nothing at all.
    fn is_long(self) -> bool {
        !matches!(self, LinkSpelling::Short)
    }
}

/// Process `args` (without the program name), writing results to `out`.
pub fn run<S: AsRef<str>>(args: &[S], out: &mut impl Write) -> Result<()> {
    let help: &dyn Matcher = &|s: &str| {
        match_short_option(s, "h").or_else(|| match_long_option(s, "-help"))
    };
    let link_long: &dyn Matcher = &|s: &str| match_long_option(s, "link");
    let link_double_dash: &dyn Matcher = &|s: &str| match_long_option(s, "-link");
    let link_short: &dyn Matcher = &|s: &str| match_short_option(s, "l");
    let link = [
        (LinkSpelling::Long, link_long),
        (LinkSpelling::DoubleDash, link_double_dash),
        (LinkSpelling::Short, link_short),
    ];

    let mut args = args.iter().map(|s| s.as_ref());
    while let Some(arg) = args.next() {
        if match_option_terminator(arg).is_match() {
            debug!(operands = args.len(), "end of options");
            break;
        }

        if help.match_input(arg).is_match() {
            write!(out, "{USAGE}")?;
            return Ok(());
        }

        if let Some(choice) = first_of(arg, &link) {
            debug!(spelling = ?choice.tag(), arg, "matched link option");
            let mut value = choice.rest(arg);
            let mut eq = Match::NoMatch;
            if choice.tag().is_long() {
                if match_end(value).is_no_match() && match_char(value, '=').is_no_match() {
                    bail!("invalid trailer {value} at {} in {arg}", choice.len());
                }
                eq = match_char(value, '=');
                value = eq.rest(value);
            }
            if eq.is_no_match() && match_end(value).is_match() {
                match args.next() {
                    Some(next) => value = next,
                    None => bail!("link requires an argument"),
                }
            }
            writeln!(out, "linking with {value}")?;
            continue;
        }

        if match_switch(arg, "Ff").is_match() {
            debug!(arg, "matched /f switch");
            match args.next() {
                Some(value) => writeln!(out, "doing something with {value}")?,
                None => writeln!(out, "using a default with /f")?,
            }
            continue;
        }

        debug!(arg, "ignoring unrecognised argument");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo(args: &[&str]) -> Result<String> {
        let mut out = Vec::new();
        run(args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn help_stops_processing() {
        assert_eq!(demo(&["-h", "-lfoo"]).unwrap(), USAGE);
        assert_eq!(demo(&["--help"]).unwrap(), USAGE);
    }

    #[test]
    fn short_link_attached_and_separate() {
        assert_eq!(demo(&["-lfoo"]).unwrap(), "linking with foo\n");
        assert_eq!(demo(&["-l", "foo"]).unwrap(), "linking with foo\n");
    }

    #[test]
    fn long_link_spellings() {
        for args in [
            &["--link", "foo"][..],
            &["--link=foo"],
            &["-link", "foo"],
            &["-link=foo"],
        ] {
            assert_eq!(demo(args).unwrap(), "linking with foo\n", "{args:?}");
        }
    }

    #[test]
    fn empty_value_after_equals_is_kept() {
        assert_eq!(demo(&["--link=", "next"]).unwrap(), "linking with \n");
    }

    #[test]
    fn invalid_trailer_is_an_error() {
        let err = demo(&["--linker"]).unwrap_err();
        assert_eq!(err.to_string(), "invalid trailer er at 6 in --linker");
    }

    #[test]
    fn missing_value_is_an_error() {
        let err = demo(&["--link"]).unwrap_err();
        assert_eq!(err.to_string(), "link requires an argument");
        let err = demo(&["-l"]).unwrap_err();
        assert_eq!(err.to_string(), "link requires an argument");
    }

    #[test]
    fn windows_switch_value_or_default() {
        assert_eq!(demo(&["/f", "x"]).unwrap(), "doing something with x\n");
        assert_eq!(demo(&["/F"]).unwrap(), "using a default with /f\n");
    }

    #[test]
    fn unrecognised_arguments_are_skipped() {
        assert_eq!(demo(&["input.txt", "-x", "/q"]).unwrap(), "");
        assert_eq!(
            demo(&["input.txt", "-lfoo", "/f", "bar"]).unwrap(),
            "linking with foo\ndoing something with bar\n"
        );
    }

    #[test]
    fn terminator_ends_option_processing() {
        assert_eq!(demo(&["--", "-h"]).unwrap(), "");
        assert_eq!(demo(&["-lfoo", "--", "-lbar"]).unwrap(), "linking with foo\n");
        // Only a bare `--` ends options.
        assert_eq!(demo(&["--x", "-h"]).unwrap(), USAGE);
    }

    #[test]
    fn values_are_not_reinterpreted() {
        assert_eq!(demo(&["--link", "-h"]).unwrap(), "linking with -h\n");
    }
}
