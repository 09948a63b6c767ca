//! Command handlers for the tally CLI.
//!
//! Each submodule implements one command. Option parsing and interpreter
//! construction are shared and live here.

use std::time::Duration;

use tally_interp::{EvalLimits, Interpreter, ParseOutcome};

mod check;
mod lookup;
mod parse;
mod sequence;

pub use check::{check_file, check_lines, run_cases, CheckLine, CheckReport};
pub use lookup::{lookup_word, word_readings};
pub use parse::parse_text;
pub use sequence::sequence_text;

/// Flags shared by every command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    /// Value the message is expected to contain.
    pub expect: i64,
    pub deadline: Option<Duration>,
    pub max_sequence: Option<usize>,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            expect: 1,
            deadline: None,
            max_sequence: None,
        }
    }
}

impl CliOptions {
    /// An interpreter configured from these flags.
    pub fn interpreter(&self) -> Interpreter {
        let mut limits = EvalLimits::default();
        if let Some(deadline) = self.deadline {
            limits = limits.with_deadline(deadline);
        }
        let mut builder = Interpreter::builder().limits(limits);
        if let Some(max) = self.max_sequence {
            builder = builder.max_sequence(max);
        }
        builder.build()
    }
}

/// Split `args` into positional arguments and [`CliOptions`].
///
/// Flags take their value either as the next argument or after `=`.
pub fn parse_options(args: &[String]) -> Result<(Vec<String>, CliOptions), String> {
    let mut options = CliOptions::default();
    let mut positional = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_owned())),
            _ => (arg.as_str(), None),
        };
        if !matches!(flag, "--expect" | "--deadline-ms" | "--max-sequence") {
            positional.push(arg.clone());
            continue;
        }
        let Some(value) = inline.or_else(|| iter.next().cloned()) else {
            return Err(format!("missing value for {flag}"));
        };
        match flag {
            "--expect" => options.expect = parse_number(flag, &value)?,
            "--deadline-ms" => {
                options.deadline = Some(Duration::from_millis(parse_number(flag, &value)?));
            }
            _ => options.max_sequence = Some(parse_number(flag, &value)?),
        }
    }

    Ok((positional, options))
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid value for {flag}: '{value}'"))
}

/// Read a file, exiting with a message on failure.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// One-line summary of an outcome.
pub(super) fn describe(outcome: &ParseOutcome) -> String {
    match outcome.value {
        Some(value) => format!("{value} ({})", outcome.method),
        None => format!("no value ({})", outcome.method),
    }
}
