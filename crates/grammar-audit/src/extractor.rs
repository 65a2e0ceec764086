//! Rule-name extraction from the grammar definition.

use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

/// Extract the set of top-level rule names declared in grammar.js text.
///
/// Recognizes the shapes the declarative rule table uses:
///
/// ```text
///   ruleName: $ =>
///   ruleName: _ =>
///   ruleName: ($, original) =>
/// ```
///
/// This is a fixed heuristic over the rule-table text, not a parser:
/// leading whitespace is required, and rule names nested inside rule
/// bodies, computed names, or declarations in any other shape are not
/// recognized. The builder token is assumed to be the conventional
/// `$`/`_` placeholder; if the grammar format ever changes that
/// convention this pattern needs updating.
///
/// Duplicates collapse; order carries no meaning.
pub fn extract_rule_names(grammar_text: &str) -> HashSet<String> {
    let rule_re = Regex::new(r"(?m)^\s+(\w+)\s*:\s*(?:[$_]|\(\$(?:,\s*original)?\))\s*=>")
        .expect("Invalid regex");

    let rules: HashSet<String> = rule_re
        .captures_iter(grammar_text)
        .map(|caps| caps[1].to_string())
        .collect();

    debug!(count = rules.len(), "extracted grammar rules");
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_declaration_shapes() {
        let rules =
            extract_rule_names("  plain: $ =>\n  hidden: _ =>\n  overridden: ($, original) =>\n");
        assert!(rules.contains("plain"));
        assert!(rules.contains("hidden"));
        assert!(rules.contains("overridden"));
    }

    #[test]
    fn test_assignment_line_not_matched() {
        let rules = extract_rule_names("  notARule = 5;\n");
        assert!(rules.is_empty());
    }
}
