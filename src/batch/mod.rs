//! Batch driver: run a file of test cases against one automaton.
//!
//! A case file holds one case per line, blank lines skipped, two
//! whitespace-separated tokens each. The first token is the input string,
//! with `-` standing for the empty input (a token cannot be empty). The
//! second is the expectation: `accept`/`aceita`, `reject`/`rejeita`, or the
//! name of the exact state the run must halt in.
//!
//! The driver owns the acceptance decision the simulator deliberately does
//! not make: a run accepts when it halts in a final state, and the
//! rejection outcome never accepts.

use serde::{Deserialize, Serialize};

use crate::core::Automaton;
use crate::simulator::{simulate, Outcome};

mod error;

pub use error::BatchError;

/// Token standing for the empty input string in a case file.
const EMPTY_INPUT: &str = "-";

/// What a test case expects from its run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expectation {
    /// The run must halt in a final state.
    Accept,
    /// The run must not accept; halting in a non-final state and hitting an
    /// undefined transition both qualify.
    Reject,
    /// The run must halt in exactly this state.
    HaltsIn(String),
}

/// Judgement for a single case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Pass,
    Fail { actual: String },
    /// The case's input used a symbol outside the alphabet. Only this case
    /// is affected; later cases still run.
    Error { message: String },
}

/// One evaluated case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReport {
    /// 1-based line number in the case file.
    pub line: usize,
    pub input: String,
    pub expectation: Expectation,
    pub verdict: Verdict,
}

/// All case results for one batch run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    cases: Vec<CaseReport>,
}

impl BatchReport {
    /// The evaluated cases, in file order.
    pub fn cases(&self) -> &[CaseReport] {
        &self.cases
    }

    /// Number of passing cases.
    pub fn passed(&self) -> usize {
        self.cases
            .iter()
            .filter(|case| case.verdict == Verdict::Pass)
            .count()
    }

    /// Number of cases that failed or errored.
    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// Parse `source` as a case file and run every case against `automaton`.
///
/// # Example
///
/// ```rust
/// use afd::{load, run_cases};
///
/// let automaton = load(
///     "states q0 q1\n\
///      alphabet a\n\
///      transition q0 a q1\n\
///      initial_state q0\n\
///      final_states q1",
/// )
/// .unwrap();
///
/// let report = run_cases(&automaton, "a accept\n- reject\naa reject").unwrap();
/// assert!(report.all_passed());
/// ```
pub fn run_cases(automaton: &Automaton, source: &str) -> Result<BatchReport, BatchError> {
    let mut cases = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [input, expected] = tokens.as_slice() else {
            return Err(BatchError::MalformedCase {
                line_no,
                line: line.to_string(),
            });
        };

        let input = if *input == EMPTY_INPUT {
            String::new()
        } else {
            input.to_string()
        };
        let expectation = match *expected {
            "accept" | "aceita" => Expectation::Accept,
            "reject" | "rejeita" => Expectation::Reject,
            state => Expectation::HaltsIn(state.to_string()),
        };

        let verdict = match simulate(automaton, &input) {
            Ok(outcome) => judge(automaton, &expectation, &outcome),
            Err(err) => Verdict::Error {
                message: err.to_string(),
            },
        };

        cases.push(CaseReport {
            line: line_no,
            input,
            expectation,
            verdict,
        });
    }

    Ok(BatchReport { cases })
}

fn judge(automaton: &Automaton, expectation: &Expectation, outcome: &Outcome) -> Verdict {
    let accepted = outcome
        .end_state()
        .is_some_and(|state| automaton.is_final_state(state));

    let met = match expectation {
        Expectation::Accept => accepted,
        Expectation::Reject => !accepted,
        Expectation::HaltsIn(state) => outcome.end_state() == Some(state.as_str()),
    };

    if met {
        Verdict::Pass
    } else {
        Verdict::Fail {
            actual: describe(outcome),
        }
    }
}

fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Halted { state } => format!("halted in state '{state}'"),
        Outcome::Rejected {
            state,
            symbol,
            position,
        } => format!(
            "rejected: no transition from state '{state}' on symbol '{symbol}' at position {position}"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load;

    fn sample() -> Automaton {
        load(
            "states q0 q1 q2\n\
             alphabet a b\n\
             transition q0 a q1 q1 b q2\n\
             initial_state q0\n\
             final_states q2",
        )
        .unwrap()
    }

    #[test]
    fn verdicts_follow_the_expectations() {
        let automaton = sample();
        let report = run_cases(
            &automaton,
            "ab accept\n\
             a reject\n\
             ab q2\n\
             - q0\n\
             b reject",
        )
        .unwrap();

        assert_eq!(report.cases().len(), 5);
        assert!(report.all_passed());
        assert_eq!(report.passed(), 5);
        assert_eq!(report.failed(), 0);
    }

    #[test]
    fn failing_case_reports_what_actually_happened() {
        let automaton = sample();
        let report = run_cases(&automaton, "a accept").unwrap();

        assert_eq!(report.failed(), 1);
        match &report.cases()[0].verdict {
            Verdict::Fail { actual } => assert!(actual.contains("q1"), "actual: {actual}"),
            other => panic!("expected a failure, got {other:?}"),
        }
    }

    #[test]
    fn rejection_by_undefined_transition_is_not_acceptance() {
        let automaton = sample();
        // 'b' from q0 is undefined; the sentinel must count as reject even
        // against an expected state.
        let report = run_cases(&automaton, "ba reject\nba q0").unwrap();
        assert_eq!(report.cases()[0].verdict, Verdict::Pass);
        assert!(matches!(report.cases()[1].verdict, Verdict::Fail { .. }));
    }

    #[test]
    fn unknown_symbol_fails_only_its_own_case() {
        let automaton = sample();
        let report = run_cases(&automaton, "az accept\nab accept").unwrap();

        assert!(matches!(report.cases()[0].verdict, Verdict::Error { .. }));
        assert_eq!(report.cases()[1].verdict, Verdict::Pass);
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn dash_stands_for_the_empty_input() {
        let automaton = sample();
        let report = run_cases(&automaton, "- reject").unwrap();
        assert_eq!(report.cases()[0].input, "");
        assert_eq!(report.cases()[0].verdict, Verdict::Pass);
    }

    #[test]
    fn malformed_case_line_aborts_the_run() {
        let automaton = sample();
        let err = run_cases(&automaton, "ab accept\nab\n").unwrap_err();
        assert_eq!(
            err,
            BatchError::MalformedCase {
                line_no: 2,
                line: "ab".to_string(),
            }
        );
    }

    #[test]
    fn blank_lines_are_skipped_and_numbering_is_kept() {
        let automaton = sample();
        let report = run_cases(&automaton, "\nab accept\n\n- reject\n").unwrap();
        assert_eq!(report.cases()[0].line, 2);
        assert_eq!(report.cases()[1].line, 4);
    }

    #[test]
    fn portuguese_expectation_keywords_are_accepted() {
        let automaton = sample();
        let report = run_cases(&automaton, "ab aceita\na rejeita").unwrap();
        assert!(report.all_passed());
    }
}
