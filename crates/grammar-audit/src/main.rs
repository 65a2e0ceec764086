//! Grammar coverage audit - Entry Point
//!
//! Zero-argument command: reads `grammar.js` one directory up from the
//! executable, audits the construct registry against it, prints the
//! report to stdout, and exits nonzero when a done construct references
//! a rule the grammar does not define or the grammar file is missing.

use clap::Parser;
use grammar_audit::{CoverageAuditor, Reporter};
use std::process::ExitCode;

/// Command line interface for the grammar coverage audit
#[derive(Parser, Debug)]
#[command(name = "check-coverage")]
#[command(about = "Validate tree-sitter-xonsh coverage of xonsh PLY grammar constructs")]
#[command(version)]
struct Cli {}

fn main() -> ExitCode {
    // Initialize logging; diagnostics go to stderr so the report stream
    // stays byte-stable.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    let auditor = match CoverageAuditor::from_exe_location() {
        Ok(auditor) => auditor,
        Err(e) => {
            eprintln!("ERROR: {e}");
            return ExitCode::FAILURE;
        }
    };

    match auditor.run() {
        Ok(report) => {
            print!("{}", Reporter::to_human_readable(&report));
            if report.passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}
