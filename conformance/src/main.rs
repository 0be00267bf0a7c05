//! Conformance harness entry point.
//!
//! Compiles every negative scenario against the core crate and reports
//! whether the compiler rejected each one with the expected diagnostic.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::Level;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use runstage_conformance::project::resolve_core_dir;
use runstage_conformance::report::RunReport;
use runstage_conformance::runner;
use runstage_conformance::runner::BuildTool;
use runstage_conformance::scenario::builtin_table;

/// Proves that the staged run manager protocol is enforced by the compiler
#[derive(Parser, Debug)]
#[command(name = "runstage-conformance")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory of the core crate the scenarios compile against
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/../core"))]
    core_dir: PathBuf,

    /// Run only scenarios whose name contains this substring
    #[arg(long)]
    filter: Option<String>,

    /// Upper bound for a single build invocation, in seconds
    #[arg(long, default_value_t = 300)]
    timeout_secs: u64,

    /// Keep the generated scenario projects instead of deleting them
    #[arg(long)]
    keep_artifacts: bool,

    /// List scenario names and exit
    #[arg(long)]
    list: bool,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    format: ReportFormat,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let table = builtin_table();

    if cli.list {
        for scenario in table.iter() {
            println!("{}", scenario.name);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let scenarios: Vec<_> = match &cli.filter {
        Some(needle) => table
            .iter()
            .filter(|scenario| scenario.name.contains(needle.as_str()))
            .collect(),
        None => table.iter().collect(),
    };
    anyhow::ensure!(!scenarios.is_empty(), "no scenario matches the requested filter");

    let core_dir = resolve_core_dir(&cli.core_dir)
        .with_context(|| "the --core-dir option must point at the core crate")?;

    let scratch = tempfile::tempdir().context("failed to create scratch directory")?;
    info!(
        scratch = %scratch.path().display(),
        scenarios = scenarios.len(),
        "starting conformance run"
    );

    let tool = BuildTool::cargo();
    let time_limit = Duration::from_secs(cli.timeout_secs);

    let mut outcomes = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        outcomes.push(
            runner::run_scenario(scenario, scratch.path(), &core_dir, &tool, time_limit).await,
        );
    }

    if cli.keep_artifacts {
        let kept = scratch.keep();
        println!("scenario projects kept under {}", kept.display());
    }

    let report = RunReport::new(outcomes);
    match cli.format {
        ReportFormat::Text => print!("{}", report.render_text()),
        ReportFormat::Json => println!("{}", report.render_json()?),
    }

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_structure_is_valid() {
        use clap::CommandFactory;

        Cli::command().debug_assert();
    }
}
