//! Shape invariants of the built-in construct registry

use grammar_audit::{audit, extract_rule_names, Status, CONSTRUCTS};

#[test]
fn registry_is_not_empty() {
    assert!(!CONSTRUCTS.is_empty());
}

#[test]
fn done_constructs_declare_expected_rules() {
    for construct in CONSTRUCTS {
        if construct.status == Status::Done {
            assert!(
                !construct.expected_rules.is_empty(),
                "done construct {:?} lists no expected rules",
                construct.name
            );
        }
    }
}

#[test]
fn gap_constructs_declare_no_expected_rules() {
    for construct in CONSTRUCTS {
        if construct.status == Status::Gap {
            assert!(
                construct.expected_rules.is_empty(),
                "gap construct {:?} should not list expected rules",
                construct.name
            );
        }
    }
}

#[test]
fn every_construct_names_its_legacy_rule() {
    for construct in CONSTRUCTS {
        assert!(
            !construct.legacy_rule.is_empty(),
            "construct {:?} has no legacy rule reference",
            construct.name
        );
    }
}

#[test]
fn registry_audits_clean_against_its_own_rule_inventory() {
    // A fixture declaring exactly the rules the registry expects must
    // produce a passing audit.
    let mut grammar = String::new();
    for construct in CONSTRUCTS {
        for rule in construct.expected_rules {
            grammar.push_str(&format!("    {rule}: $ => seq('x'),\n"));
        }
    }

    let rules = extract_rule_names(&grammar);
    let report = audit(CONSTRUCTS, &rules);

    assert!(
        report.passed(),
        "registry references rules its own inventory does not cover: {:?}",
        report.missing_rules
    );
    assert_eq!(report.total, CONSTRUCTS.len());
    assert_eq!(
        report.done_count + report.partial_count + report.gap_count,
        report.total,
        "statuses must partition the registry"
    );
}
