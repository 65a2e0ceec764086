//! Coverage audit for the xonsh tree-sitter grammar
//!
//! The tree-sitter port of xonsh tracks which constructs of the original
//! PLY grammar it covers in a hand-maintained registry. This crate
//! cross-references that registry against the rule table `grammar.js`
//! actually defines and reports drift: a construct marked done whose
//! expected rules are missing from the grammar fails the audit.
//!
//! The audit never parses or executes the grammar; it only checks that a
//! rule of each expected name exists. Gap and partial constructs are
//! reported for visibility but never fail the run.
//!
//! # Example
//!
//! ```ignore
//! use grammar_audit::{CoverageAuditor, Reporter};
//!
//! let auditor = CoverageAuditor::new("../grammar.js");
//! let report = auditor.run()?;
//! print!("{}", Reporter::to_human_readable(&report));
//! assert!(report.passed());
//! ```

pub mod auditor;
pub mod extractor;
pub mod registry;
pub mod reporter;

use std::path::PathBuf;
use thiserror::Error;

pub use auditor::{
    audit, default_grammar_path, CoverageAuditor, CoverageReport, GapEntry, MissingRule,
    GRAMMAR_FILE_NAME,
};
pub use extractor::extract_rule_names;
pub use registry::{Construct, Status, CONSTRUCTS};
pub use reporter::Reporter;

/// Result type for audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

/// Audit error types
#[derive(Error, Debug)]
pub enum AuditError {
    /// The grammar definition is not where the run expects it. Fatal
    /// setup error; nothing is audited.
    #[error("{} not found", .path.display())]
    GrammarNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
