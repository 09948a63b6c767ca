//! The `check` command: verify a file of expected readings.
//!
//! Lines are `expected<TAB>text`. They are parsed in parallel; the
//! interpreter holds no per-message state, so one instance is shared by
//! every worker.

use rayon::prelude::*;
use tally_interp::{Interpreter, ParseOutcome};

use super::{describe, read_file, CliOptions};

/// One line of a check file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckLine<'a> {
    Case {
        line: usize,
        expected: i64,
        text: &'a str,
    },
    Malformed {
        line: usize,
        reason: String,
    },
}

/// Result of checking one case.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckReport<'a> {
    pub line: usize,
    pub expected: i64,
    pub text: &'a str,
    pub outcome: ParseOutcome,
}

impl CheckReport<'_> {
    pub fn passed(&self) -> bool {
        self.outcome.is_match(self.expected)
    }
}

/// Split a check file into cases, skipping blanks and `#` comments.
pub fn check_lines(content: &str) -> Vec<CheckLine<'_>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, raw)| {
            let trimmed = raw.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(idx, raw)| {
            let line = idx + 1;
            let Some((expected, text)) = raw.split_once('\t') else {
                return CheckLine::Malformed {
                    line,
                    reason: "expected `expected<TAB>text`".to_owned(),
                };
            };
            match expected.trim().parse() {
                Ok(expected) => CheckLine::Case {
                    line,
                    expected,
                    text,
                },
                Err(_) => CheckLine::Malformed {
                    line,
                    reason: format!("'{}' is not an integer", expected.trim()),
                },
            }
        })
        .collect()
}

/// Parse every case in parallel, keeping input order.
pub fn run_cases<'a>(
    interpreter: &Interpreter,
    lines: &[CheckLine<'a>],
) -> Vec<CheckReport<'a>> {
    lines
        .par_iter()
        .filter_map(|line| match *line {
            CheckLine::Case {
                line,
                expected,
                text,
            } => Some(CheckReport {
                line,
                expected,
                text,
                outcome: interpreter.parse_single(text, expected),
            }),
            CheckLine::Malformed { .. } => None,
        })
        .collect()
}

/// Check a file. Returns `true` when every line parsed to its expected value.
pub fn check_file(path: &str, options: &CliOptions) -> bool {
    let content = read_file(path);
    let lines = check_lines(&content);
    let interpreter = options.interpreter();

    let mut ok = true;
    for line in &lines {
        if let CheckLine::Malformed { line, reason } = line {
            eprintln!("{path}:{line}: {reason}");
            ok = false;
        }
    }

    let reports = run_cases(&interpreter, &lines);
    let failed = reports.iter().filter(|r| !r.passed()).count();
    for report in &reports {
        let status = if report.passed() { "ok  " } else { "FAIL" };
        println!(
            "{status} {path}:{} expected {} in {:?}: {}",
            report.line,
            report.expected,
            report.text,
            describe(&report.outcome)
        );
    }

    println!();
    println!("{} passed, {failed} failed", reports.len() - failed);
    ok && failed == 0
}
