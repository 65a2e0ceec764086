//! Construct registry for the xonsh grammar port.
//!
//! Each entry pairs a user-visible xonsh construct with the PLY
//! production it came from and the tree-sitter rules expected to
//! implement it. The table is ordered and hand-maintained: adding a
//! construct or changing a status means editing it here. Category
//! headers are documentation only.

use serde::Serialize;

/// Implementation maturity of a construct in the tree-sitter grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Fully implemented. Every expected rule must exist in the grammar.
    Done,
    /// Partially implemented. Informational only, never checked.
    Partial,
    /// Not implemented yet. Informational only, never checked.
    Gap,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done => write!(f, "done"),
            Self::Partial => write!(f, "partial"),
            Self::Gap => write!(f, "gap"),
        }
    }
}

/// One tracked xonsh language construct.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Construct {
    /// Display label for the feature, e.g. `$(cmd)`. Not required unique.
    pub name: &'static str,
    /// PLY production the feature originates from. Documentation only.
    pub legacy_rule: &'static str,
    /// Tree-sitter rules expected to exist for this construct. Empty for
    /// constructs with no implementation yet.
    pub expected_rules: &'static [&'static str],
    /// Implementation maturity.
    pub status: Status,
    /// Free-text annotation. Empty when there is nothing to say.
    pub notes: &'static str,
}

/// Every xonsh construct the grammar port tracks, in display order.
pub const CONSTRUCTS: &[Construct] = &[
    // === Expressions ===
    Construct {
        name: "$VAR",
        legacy_rule: "p_atom_envvar",
        expected_rules: &["env_variable"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "${expr}",
        legacy_rule: "p_atom_envvar_braced",
        expected_rules: &["env_variable_braced"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "$(cmd)",
        legacy_rule: "p_atom_subproc_captured",
        expected_rules: &["captured_subprocess"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "!(cmd)",
        legacy_rule: "p_atom_subproc_captured_object",
        expected_rules: &["captured_subprocess_object"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "$[cmd]",
        legacy_rule: "p_atom_subproc_uncaptured",
        expected_rules: &["uncaptured_subprocess"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "![cmd]",
        legacy_rule: "p_atom_subproc_uncaptured_object",
        expected_rules: &["uncaptured_subprocess_object"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "@(expr)",
        legacy_rule: "p_atom_pyeval",
        expected_rules: &["python_evaluation"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "@$(cmd)",
        legacy_rule: "p_atom_subproc_inject",
        expected_rules: &["tokenized_substitution"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "@.attr",
        legacy_rule: "p_atom_at_attribute",
        expected_rules: &["at_object"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "`pattern`",
        legacy_rule: "p_atom_re_glob",
        expected_rules: &["regex_glob"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "rp`pattern`",
        legacy_rule: "p_atom_re_glob_path",
        expected_rules: &["regex_path_glob"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "g`pattern`",
        legacy_rule: "p_atom_glob",
        expected_rules: &["glob_pattern"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "gp`pattern`",
        legacy_rule: "p_atom_glob_path",
        expected_rules: &["glob_path"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "f`pattern`",
        legacy_rule: "p_atom_fglob",
        expected_rules: &["formatted_glob"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "@func`pattern`",
        legacy_rule: "p_atom_custom_glob",
        expected_rules: &["custom_function_glob"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "p\"...\"",
        legacy_rule: "p_atom_pathobj",
        expected_rules: &["path_string"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "func!(args)",
        legacy_rule: "p_atom_bang_lfunc",
        expected_rules: &["macro_call"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "expr?",
        legacy_rule: "p_help_expression",
        expected_rules: &["help_expression"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "expr??",
        legacy_rule: "p_super_help_expression",
        expected_rules: &["super_help_expression"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "@@.name decorator",
        legacy_rule: "p_decorator_atat_*",
        expected_rules: &["at_object"],
        status: Status::Done,
        notes: "at_object reused inside decorator context",
    },
    Construct {
        name: "@modifier cmd",
        legacy_rule: "p_subproc_atom_modifier",
        expected_rules: &["subprocess_modifier"],
        status: Status::Done,
        notes: "In subprocess context",
    },
    // === Statements ===
    Construct {
        name: "$VAR = val",
        legacy_rule: "p_env_assignment",
        expected_rules: &["env_assignment"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "del $VAR",
        legacy_rule: "p_env_deletion",
        expected_rules: &["env_deletion"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "$VAR=val cmd",
        legacy_rule: "p_env_scoped_command",
        expected_rules: &["env_scoped_command", "env_prefix"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "$VAR=\"val\"",
        legacy_rule: "p_env_assignment",
        expected_rules: &["env_prefix_statement"],
        status: Status::Done,
        notes: "No-space assignment variant",
    },
    Construct {
        name: "xontrib load name",
        legacy_rule: "p_xontrib_statement",
        expected_rules: &["xontrib_statement"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "cmd! args",
        legacy_rule: "p_subproc_macro",
        expected_rules: &["subprocess_macro"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "with! ctx:",
        legacy_rule: "p_block_macro",
        expected_rules: &["block_macro_statement"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "bare subprocess",
        legacy_rule: "p_subproc_bare",
        expected_rules: &["bare_subprocess"],
        status: Status::Done,
        notes: "Detected by scanner heuristics",
    },
    // === Subprocess internals ===
    Construct {
        name: "pipe |",
        legacy_rule: "p_subproc_pipe",
        expected_rules: &["pipe_operator", "subprocess_pipeline"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "stderr pipe e|",
        legacy_rule: "p_subproc_pipe",
        expected_rules: &["pipe_operator"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "logical && ||",
        legacy_rule: "p_subproc_logical",
        expected_rules: &["logical_operator", "subprocess_logical"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "redirect > >> <",
        legacy_rule: "p_subproc_redirect",
        expected_rules: &["redirect_operator", "subprocess_redirect"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "stream merge 2>&1",
        legacy_rule: "p_subproc_redirect",
        expected_rules: &["stream_merge_operator"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "background &",
        legacy_rule: "p_subproc_background",
        expected_rules: &["background_command"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "brace expansion {a,b}",
        legacy_rule: "p_subproc_brace_expansion",
        expected_rules: &["brace_expansion"],
        status: Status::Done,
        notes: "",
    },
    Construct {
        name: "boolean && || at Python level",
        legacy_rule: "p_or_test / p_and_test",
        expected_rules: &["boolean_operator"],
        status: Status::Done,
        notes: "Override of Python boolean_operator",
    },
    // === Known gaps ===
    Construct {
        name: "trailing ! in subprocess (empty)",
        legacy_rule: "p_atom_bang_empty_fistful_of_dollars",
        expected_rules: &[],
        status: Status::Gap,
        notes: "e.g. $(cmd !) — trailing ! before closer appends empty string arg",
    },
    Construct {
        name: "trailing ! in subprocess (raw text)",
        legacy_rule: "p_atom_bang_fistful_of_dollars",
        expected_rules: &[],
        status: Status::Gap,
        notes: "e.g. $(cmd ! raw text) — ! acts as raw-string boundary before closer",
    },
];
