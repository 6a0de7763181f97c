//! CLI entrypoint for the crucible test harness.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crucible_core::TestSuite;
use crucible_harness::selftest;
use crucible_harness::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};

/// Test harness and self-test runner for crucible.
#[derive(Debug, Parser)]
#[command(name = "crucible-harness")]
#[command(about = "Runs crucible test suites and reports results")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the framework self-test suite.
    Selftest {
        /// Print the compact pass/fail digest after the report.
        #[arg(long)]
        summary: bool,
        /// Print the failure details block after the report.
        #[arg(long)]
        details: bool,
        /// Write per-case JSONL records to this path.
        #[arg(long)]
        log: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Command::Selftest {
            summary,
            details,
            log,
        } => run_selftest(summary, details, log.as_deref()),
    }
}

fn run_selftest(summary: bool, details: bool, log: Option<&Path>) -> ExitCode {
    let mut suite = match selftest::suite() {
        Ok(suite) => suite,
        Err(err) => {
            eprintln!("failed to build self-test suite: {err}");
            return ExitCode::FAILURE;
        }
    };

    suite.run();
    if summary {
        print!("{}", suite.summary());
    }
    if details {
        print!("{}", suite.details());
    }

    if let Some(path) = log
        && let Err(err) = write_run_log(&suite, path)
    {
        eprintln!("failed to write log {}: {err}", path.display());
        return ExitCode::FAILURE;
    }

    if suite.fail_count() == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn write_run_log(suite: &TestSuite, path: &Path) -> std::io::Result<()> {
    let mut emitter = LogEmitter::to_file(path, "selftest")?;
    emitter.emit(LogLevel::Info, "run_start")?;
    for case in suite.cases() {
        let (level, outcome) = if case.failed() {
            (LogLevel::Error, Outcome::Fail)
        } else {
            (LogLevel::Info, Outcome::Pass)
        };
        let mut entry = LogEntry::new("", level, "case_result")
            .with_case(case.name())
            .with_outcome(outcome);
        if let Some(message) = case.message() {
            entry = entry.with_message(message);
        }
        emitter.emit_entry(entry)?;
    }
    emitter.emit(LogLevel::Info, "run_end")?;
    emitter.flush()
}
