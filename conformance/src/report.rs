//! Human and machine readable rendering of a conformance run.

use std::fmt::Write as _;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::runner::ScenarioOutcome;
use crate::runner::Verdict;

const RULE: &str = "--------------------------------------------------------------------------------";
const BANNER: &str = "################################################################################";

/// Aggregated outcome of a full scenario run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub outcomes: Vec<ScenarioOutcome>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    total: usize,
    passed: usize,
    failed: usize,
    all_passed: bool,
    outcomes: &'a [ScenarioOutcome],
}

impl RunReport {
    pub fn new(outcomes: Vec<ScenarioOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.verdict.is_pass())
            .count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Per-scenario lines, full output for the failing ones, and a
    /// summary block.
    pub fn render_text(&self) -> String {
        let mut text = String::new();

        for outcome in &self.outcomes {
            match &outcome.verdict {
                Verdict::RejectedAsExpected => {
                    let _ = writeln!(
                        text,
                        "{} {}",
                        format!("PASS {}", outcome.name).green(),
                        "rejected with the expected diagnostic".green()
                    );
                }
                Verdict::UnexpectedCompilation => {
                    let _ = writeln!(
                        text,
                        "{} {}",
                        format!("FAIL {}", outcome.name).red(),
                        "compiled successfully (and it should not have)".red()
                    );
                    self.append_full_output(&mut text, outcome);
                }
                Verdict::DiagnosticMismatch => {
                    let _ = writeln!(
                        text,
                        "{} {}",
                        format!("FAIL {}", outcome.name).red(),
                        "failed to compile, but the expected diagnostic was not found".red()
                    );
                    self.append_full_output(&mut text, outcome);
                }
                Verdict::Infrastructure { reason } => {
                    let _ = writeln!(
                        text,
                        "{} {}",
                        format!("FAIL {}", outcome.name).red(),
                        format!("build tool failure: {reason}").red()
                    );
                }
            }
        }

        let counts = format!(
            "{} scenarios: {} passed, {} failed",
            self.total(),
            self.passed(),
            self.failed()
        );
        let _ = writeln!(text, "{counts}");
        if self.all_passed() {
            let _ = writeln!(text, "{}", "SUMMARY: PASSED".green());
        } else {
            let _ = writeln!(text, "{}", "SUMMARY: FAILED".red());
        }
        text
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonReport {
            total: self.total(),
            passed: self.passed(),
            failed: self.failed(),
            all_passed: self.all_passed(),
            outcomes: &self.outcomes,
        })
    }

    fn append_full_output(&self, text: &mut String, outcome: &ScenarioOutcome) {
        let _ = writeln!(text, "{BANNER}");
        let _ = writeln!(text, "{:^80}", "FULL OUTPUT");
        let _ = writeln!(text, "{RULE}");
        let _ = writeln!(text, "{}", outcome.stdout);
        let _ = writeln!(text, "{RULE}");
        let _ = writeln!(text, "{}", outcome.stderr);
        let _ = writeln!(text, "{BANNER}");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn outcome(name: &str, verdict: Verdict) -> ScenarioOutcome {
        ScenarioOutcome {
            name: name.to_string(),
            verdict,
            stdout: String::new(),
            stderr: "error[E0599]: no method named `actions` found".to_string(),
        }
    }

    #[test]
    fn counts_split_passes_and_failures() {
        let report = RunReport::new(vec![
            outcome("a", Verdict::RejectedAsExpected),
            outcome("b", Verdict::DiagnosticMismatch),
            outcome("c", Verdict::UnexpectedCompilation),
        ]);

        assert_eq!(report.total(), 3);
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 2);
        assert!(!report.all_passed());
    }

    #[test]
    fn text_report_names_every_scenario() {
        let report = RunReport::new(vec![
            outcome("first scenario", Verdict::RejectedAsExpected),
            outcome("second scenario", Verdict::DiagnosticMismatch),
        ]);
        let text = report.render_text();

        assert!(text.contains("first scenario"));
        assert!(text.contains("second scenario"));
        assert!(text.contains("2 scenarios: 1 passed, 1 failed"));
        assert!(text.contains("SUMMARY: FAILED"));
    }

    #[test]
    fn full_output_is_dumped_only_for_failures() {
        let passing = RunReport::new(vec![outcome("quiet", Verdict::RejectedAsExpected)]);
        assert!(!passing.render_text().contains("FULL OUTPUT"));

        let failing = RunReport::new(vec![outcome("loud", Verdict::DiagnosticMismatch)]);
        let text = failing.render_text();
        assert!(text.contains("FULL OUTPUT"));
        assert!(text.contains("no method named"));
    }

    #[test]
    fn json_report_carries_the_counts() {
        let report = RunReport::new(vec![
            outcome("a", Verdict::RejectedAsExpected),
            outcome(
                "b",
                Verdict::Infrastructure {
                    reason: "tool missing".to_string(),
                },
            ),
        ]);
        let json: serde_json::Value =
            serde_json::from_str(&report.render_json().unwrap()).unwrap();

        assert_eq!(json["total"], 2);
        assert_eq!(json["passed"], 1);
        assert_eq!(json["failed"], 1);
        assert_eq!(json["all_passed"], false);
        assert_eq!(json["outcomes"][1]["verdict"]["kind"], "infrastructure");
        assert_eq!(json["outcomes"][1]["verdict"]["reason"], "tool missing");
    }
}
