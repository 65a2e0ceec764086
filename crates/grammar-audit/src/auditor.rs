//! Registry/grammar cross-reference.
//!
//! Consumes the construct registry and the extracted rule set, classifies
//! constructs by status, and collects every rule a done construct expects
//! but the grammar does not define. A single miss fails the run; gap and
//! partial entries never do.

use crate::extractor::extract_rule_names;
use crate::registry::{Construct, Status, CONSTRUCTS};
use crate::{AuditError, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the grammar definition at the repository root.
pub const GRAMMAR_FILE_NAME: &str = "grammar.js";

/// A done construct referencing a rule the grammar does not define.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingRule {
    /// Display name of the offending construct.
    pub construct: String,
    /// Expected rule absent from the grammar.
    pub rule: String,
}

impl std::fmt::Display for MissingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} references {:?} not found in {}",
            self.construct, self.rule, GRAMMAR_FILE_NAME
        )
    }
}

/// A known-gap construct surfaced in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GapEntry {
    pub name: String,
    pub notes: String,
}

/// Outcome of one audit run. Derived, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    /// Total constructs in the registry.
    pub total: usize,
    /// Constructs marked done.
    pub done_count: usize,
    /// Constructs marked partial.
    pub partial_count: usize,
    /// Constructs marked gap.
    pub gap_count: usize,
    /// Gap constructs with their notes, in registry order.
    pub gaps: Vec<GapEntry>,
    /// Rules referenced by done constructs but absent from the grammar,
    /// in registry order.
    pub missing_rules: Vec<MissingRule>,
}

impl CoverageReport {
    /// Share of done constructs, in percent. Zero for an empty registry.
    pub fn done_percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.done_count as f64 / self.total as f64 * 100.0
        }
    }

    /// True when no done construct references a missing rule.
    pub fn passed(&self) -> bool {
        self.missing_rules.is_empty()
    }
}

/// Cross-reference a construct registry against the grammar's rule set.
///
/// Single deterministic pass in registry order. Only done constructs are
/// checked for missing rules; partial and gap entries are counted and,
/// for gaps, surfaced with their notes. All misses are collected, not
/// short-circuited.
pub fn audit(constructs: &[Construct], grammar_rules: &HashSet<String>) -> CoverageReport {
    let mut done_count = 0;
    let mut partial_count = 0;
    let mut gaps = Vec::new();
    let mut missing_rules = Vec::new();

    for construct in constructs {
        match construct.status {
            Status::Done => {
                done_count += 1;
                for rule in construct.expected_rules {
                    if !grammar_rules.contains(*rule) {
                        missing_rules.push(MissingRule {
                            construct: construct.name.to_string(),
                            rule: (*rule).to_string(),
                        });
                    }
                }
            }
            Status::Partial => partial_count += 1,
            Status::Gap => gaps.push(GapEntry {
                name: construct.name.to_string(),
                notes: construct.notes.to_string(),
            }),
        }
    }

    CoverageReport {
        total: constructs.len(),
        done_count,
        partial_count,
        gap_count: gaps.len(),
        gaps,
        missing_rules,
    }
}

/// Runs the audit pipeline against a grammar file on disk.
pub struct CoverageAuditor {
    grammar_path: PathBuf,
}

impl CoverageAuditor {
    /// Audit the grammar at the given path.
    pub fn new(grammar_path: impl Into<PathBuf>) -> Self {
        Self {
            grammar_path: grammar_path.into(),
        }
    }

    /// Audit the grammar at its conventional location relative to the
    /// running executable: one directory up, `grammar.js`.
    pub fn from_exe_location() -> Result<Self> {
        Ok(Self::new(default_grammar_path()?))
    }

    /// The grammar file this auditor reads.
    pub fn grammar_path(&self) -> &Path {
        &self.grammar_path
    }

    /// Read the grammar, extract its rule set, and audit the registry.
    ///
    /// A missing grammar file is the fatal setup error of the run; any
    /// other read failure propagates as an I/O error.
    pub fn run(&self) -> Result<CoverageReport> {
        if !self.grammar_path.exists() {
            return Err(AuditError::GrammarNotFound {
                path: self.grammar_path.clone(),
            });
        }

        let grammar_text = std::fs::read_to_string(&self.grammar_path)?;
        let grammar_rules = extract_rule_names(&grammar_text);
        debug!(
            path = %self.grammar_path.display(),
            rules = grammar_rules.len(),
            "auditing construct registry"
        );

        Ok(audit(CONSTRUCTS, &grammar_rules))
    }
}

/// Conventional grammar.js location: one directory up from the directory
/// containing the running executable.
pub fn default_grammar_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let repo_root = exe
        .parent()
        .and_then(Path::parent)
        .ok_or_else(|| AuditError::GrammarNotFound { path: exe.clone() })?;
    Ok(repo_root.join(GRAMMAR_FILE_NAME))
}
