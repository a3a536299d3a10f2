use std::fmt::Write;

use crate::generator::rule_set::{EntryKind, EntrySummary, RuleSet};

/// Build a markdown report with per-entry block counts and review notes.
pub fn build_report(rule_set: &RuleSet) -> String {
    let mut report = String::new();

    writeln!(report, "# oslopolicy2rego Translation Report").unwrap();
    writeln!(report).unwrap();

    writeln!(report, "## Summary").unwrap();
    writeln!(report).unwrap();
    writeln!(report, "- Aliases: {}", rule_set.count(EntryKind::Alias)).unwrap();
    writeln!(report, "- Actions: {}", rule_set.count(EntryKind::Action)).unwrap();
    writeln!(report, "- Rule blocks: {}", rule_set.blocks.len()).unwrap();
    writeln!(report).unwrap();

    writeln!(report, "## Entries").unwrap();
    writeln!(report).unwrap();
    writeln!(report, "| Entry | Kind | Blocks | Notes |").unwrap();
    writeln!(report, "|-------|------|--------|-------|").unwrap();
    for entry in &rule_set.entries {
        writeln!(
            report,
            "| {} | {} | {} | {} |",
            entry.name,
            entry.kind,
            entry.alternatives,
            format_notes(entry)
        )
        .unwrap();
    }

    let review = review_items(rule_set);
    if !review.is_empty() {
        writeln!(report).unwrap();
        writeln!(report, "## Review").unwrap();
        writeln!(report).unwrap();
        for item in review {
            writeln!(report, "- {item}").unwrap();
        }
    }

    report
}

fn format_notes(entry: &EntrySummary) -> String {
    if entry.mixes_and_or {
        "REVIEW: mixes `and` with `or`".to_string()
    } else {
        String::new()
    }
}

fn review_items(rule_set: &RuleSet) -> Vec<String> {
    let mut items: Vec<String> = rule_set
        .entries
        .iter()
        .filter(|entry| entry.mixes_and_or)
        .map(|entry| {
            format!(
                "**{}**: `and` is split before `or`, so every operand ends up in a single rule body",
                entry.name
            )
        })
        .collect();

    items.extend(
        rule_set
            .unresolved_references()
            .into_iter()
            .map(|(entry, reference)| {
                format!("**{entry}**: `rule:{reference}` has no matching alias in this document")
            }),
    );
    items
}
