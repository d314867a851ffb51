//! Ladder case runner.
//!
//! Runs `(start, end, expected)` cases through the solver, timing each one, and
//! classifies the result against the expectation.

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::error::CaseParseError;
use crate::solver::{Chain, LadderSolver};

/// Marker used in case files for "no chain expected".
pub const NO_CHAIN: &str = "-";

/// One case: a query and the chain it should produce, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderCase {
    pub start: String,
    pub end: String,
    pub expected: Option<Vec<String>>,
}

impl LadderCase {
    /// A case expecting exactly `chain`.
    pub fn expecting(start: &str, end: &str, chain: &[&str]) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            expected: Some(chain.iter().map(|w| w.to_string()).collect()),
        }
    }

    /// A case expecting no chain.
    pub fn no_chain(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            expected: None,
        }
    }

    /// Cases checked against the embedded dictionary.
    pub fn builtin() -> Vec<Self> {
        vec![
            Self::expecting("cat", "dog", &["cat", "cot", "dot", "dog"]),
            Self::expecting("cold", "warm", &["cold", "cord", "word", "ward", "warm"]),
            Self::expecting("cat", "pig", &["cat", "pat", "pit", "pig"]),
            Self::no_chain("cat", "gnu"),
            Self::no_chain("cat", "zebra"),
        ]
    }
}

/// How a case's actual result compares with its expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    /// A chain was found but it is not the expected one.
    Mismatch,
    /// A chain was found where none was expected.
    Unexpected,
    /// No chain was found where one was expected.
    Missing,
}

impl CaseOutcome {
    pub fn classify(expected: Option<&[String]>, actual: Option<&Chain>) -> Self {
        match (expected, actual) {
            (None, None) => CaseOutcome::Passed,
            (Some(expected), Some(actual)) if actual.words() == expected => CaseOutcome::Passed,
            (Some(_), Some(_)) => CaseOutcome::Mismatch,
            (None, Some(_)) => CaseOutcome::Unexpected,
            (Some(_), None) => CaseOutcome::Missing,
        }
    }

    pub fn is_pass(self) -> bool {
        self == CaseOutcome::Passed
    }
}

/// Result of running one case.
#[derive(Debug, Clone)]
pub struct CaseReport {
    pub case: LadderCase,
    pub actual: Option<Chain>,
    pub outcome: CaseOutcome,
    pub elapsed: Duration,
}

/// Totals over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarnessSummary {
    pub passed: usize,
    pub failed: usize,
    pub elapsed: Duration,
}

impl HarnessSummary {
    pub fn from_reports(reports: &[CaseReport]) -> Self {
        reports.iter().fold(Self::default(), |mut summary, report| {
            if report.outcome.is_pass() {
                summary.passed += 1;
            } else {
                summary.failed += 1;
            }
            summary.elapsed += report.elapsed;
            summary
        })
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Solve one case and time the search.
pub fn run_case(solver: &LadderSolver<'_>, case: &LadderCase) -> CaseReport {
    let start = Instant::now();
    let actual = solver.find_chain(&case.start, &case.end);
    let elapsed = start.elapsed();

    let outcome = CaseOutcome::classify(case.expected.as_deref(), actual.as_ref());
    CaseReport {
        case: case.clone(),
        actual,
        outcome,
        elapsed,
    }
}

/// Run cases one after another so each timing covers a single search.
pub fn run_cases(solver: &LadderSolver<'_>, cases: &[LadderCase]) -> Vec<CaseReport> {
    cases.iter().map(|case| run_case(solver, case)).collect()
}

/// Parse a case file.
///
/// Each non-blank line not starting with `#` is `start end` followed by the
/// expected chain, or `-` when no chain is expected.
pub fn parse_cases(text: &str) -> Result<Vec<LadderCase>, CaseParseError> {
    let mut cases = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(CaseParseError::Malformed {
                line: i + 1,
                reason: format!(
                    "expected 'start end chain...' or 'start end {}', got {} field(s)",
                    NO_CHAIN,
                    fields.len()
                ),
            });
        }

        let expected = match &fields[2..] {
            [marker] if *marker == NO_CHAIN => None,
            words if words.contains(&NO_CHAIN) => {
                return Err(CaseParseError::Malformed {
                    line: i + 1,
                    reason: format!("'{}' must be the only expected field", NO_CHAIN),
                });
            }
            words => Some(words.iter().map(|w| crate::normalize(w)).collect()),
        };

        cases.push(LadderCase {
            start: crate::normalize(fields[0]),
            end: crate::normalize(fields[1]),
            expected,
        });
    }

    Ok(cases)
}

/// Read and parse a case file from disk.
pub fn load_cases(path: impl AsRef<Path>) -> Result<Vec<LadderCase>, CaseParseError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| CaseParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_cases(&text)
}
