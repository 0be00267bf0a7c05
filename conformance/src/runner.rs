//! Drives the external build tool over isolated scenario projects.

use std::path::Path;
use std::time::Duration;

use serde::Serialize;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::diagnostics::contains_diagnostic;
use crate::project;
use crate::scenario::Scenario;

/// External build collaborator: a program plus fixed arguments, invoked
/// with a scenario project as its working directory. The harness depends
/// only on the exit status and the captured output text.
#[derive(Debug, Clone)]
pub struct BuildTool {
    program: String,
    args: Vec<String>,
}

impl BuildTool {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The default collaborator.
    pub fn cargo() -> Self {
        Self::new("cargo", vec!["build".to_string()])
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

/// Outcome classification for one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// Compilation failed and the diagnostic matched. The expected outcome.
    RejectedAsExpected,
    /// The snippet compiled even though it violates the protocol.
    UnexpectedCompilation,
    /// Compilation failed but the expected fragment was absent.
    DiagnosticMismatch,
    /// The build tool could not be driven to a verdict at all.
    Infrastructure { reason: String },
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::RejectedAsExpected)
    }
}

/// Full record of one scenario run. Captured output is kept only for
/// failing scenarios; passing ones stay terse.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stdout: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stderr: String,
}

impl ScenarioOutcome {
    fn infrastructure(scenario: &Scenario, reason: String) -> Self {
        Self {
            name: scenario.name.clone(),
            verdict: Verdict::Infrastructure { reason },
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

/// Compile one scenario in isolation and classify the result.
///
/// Failures of the harness itself (unwritable scratch space, a missing
/// build tool, a hung build) come back as [`Verdict::Infrastructure`];
/// they never abort the remaining scenarios.
pub async fn run_scenario(
    scenario: &Scenario,
    scratch_root: &Path,
    core_dir: &Path,
    tool: &BuildTool,
    time_limit: Duration,
) -> ScenarioOutcome {
    let project = match project::materialize(scenario, scratch_root, core_dir) {
        Ok(project) => project,
        Err(err) => {
            return ScenarioOutcome::infrastructure(
                scenario,
                format!("failed to set up scenario project: {err}"),
            );
        }
    };

    debug!(
        scenario = %scenario.name,
        program = tool.program(),
        root = %project.root.display(),
        "compiling scenario"
    );

    let invocation = Command::new(&tool.program)
        .args(&tool.args)
        .current_dir(&project.root)
        .kill_on_drop(true)
        .output();

    let output = match timeout(time_limit, invocation).await {
        Err(_) => {
            return ScenarioOutcome::infrastructure(
                scenario,
                format!("build did not finish within {}s", time_limit.as_secs()),
            );
        }
        Ok(Err(err)) => {
            return ScenarioOutcome::infrastructure(
                scenario,
                format!("failed to invoke {}: {err}", tool.program()),
            );
        }
        Ok(Ok(output)) => output,
    };

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    let verdict = if output.status.success() {
        Verdict::UnexpectedCompilation
    } else if contains_diagnostic(&stderr, &scenario.expected_diagnostic)
        || contains_diagnostic(&stdout, &scenario.expected_diagnostic)
    {
        Verdict::RejectedAsExpected
    } else {
        Verdict::DiagnosticMismatch
    };

    if verdict.is_pass() {
        ScenarioOutcome {
            name: scenario.name.clone(),
            verdict,
            stdout: String::new(),
            stderr: String::new(),
        }
    } else {
        ScenarioOutcome {
            name: scenario.name.clone(),
            verdict,
            stdout,
            stderr,
        }
    }
}
