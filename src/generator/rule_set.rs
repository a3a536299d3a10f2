use std::collections::BTreeSet;
use std::fmt;

use serde_json::Value;

use crate::error::TranslateError;
use crate::parser::document::PolicyDocument;
use crate::parser::expression::{self, Clause};

/// How an entry is exposed in the generated policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryKind {
    /// Named helper rule, referenced elsewhere as `rule:<name>`.
    Alias,
    /// API action such as `secrets:get`, compiled into guarded `allow` rules.
    Action,
}

impl EntryKind {
    /// Names containing a colon are actions; everything else is an alias.
    pub fn of(name: &str) -> Self {
        if name.contains(':') {
            EntryKind::Action
        } else {
            EntryKind::Alias
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Alias => write!(f, "alias"),
            EntryKind::Action => write!(f, "action"),
        }
    }
}

/// One named rule in the output, built from one disjunctive alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBlock {
    /// Alias or action.
    pub kind: EntryKind,
    /// Entry name from the policy file.
    pub name: String,
    /// Body of the rule.
    pub clause: Clause,
}

/// Per-entry facts collected while assembling, used by the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySummary {
    /// Entry name from the policy file.
    pub name: String,
    /// Alias or action.
    pub kind: EntryKind,
    /// Number of blocks emitted for the entry.
    pub alternatives: usize,
    /// Alias names referenced via `rule:<name>`, deduplicated and sorted.
    pub references: Vec<String>,
    /// Whether the raw expression combines `and` with `or`.
    pub mixes_and_or: bool,
}

/// Every block of a translated document, in entry-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    /// Blocks in output order.
    pub blocks: Vec<RuleBlock>,
    /// One summary per entry, in the same order.
    pub entries: Vec<EntrySummary>,
}

impl RuleSet {
    /// Number of entries of the given kind.
    pub fn count(&self, kind: EntryKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }

    /// Whether an alias with this name exists.
    pub fn has_alias(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.kind == EntryKind::Alias && entry.name == name)
    }

    /// `(entry, referenced name)` pairs for `rule:` references with no matching alias.
    pub fn unresolved_references(&self) -> Vec<(&str, &str)> {
        let rule_set = self;
        self.entries
            .iter()
            .flat_map(move |entry| {
                entry
                    .references
                    .iter()
                    .filter(move |reference| !rule_set.has_alias(reference))
                    .map(move |reference| (entry.name.as_str(), reference.as_str()))
            })
            .collect()
    }
}

/// Parse every entry and lay out its blocks. The first failing entry aborts.
pub fn assemble(document: &PolicyDocument) -> Result<RuleSet, TranslateError> {
    let mut rule_set = RuleSet::default();

    for (name, value) in document.entries() {
        let kind = EntryKind::of(name);
        let clauses =
            expression::parse_expression(value).map_err(|source| TranslateError::Entry {
                name: name.to_string(),
                source,
            })?;

        let references: BTreeSet<String> = clauses
            .iter()
            .flat_map(Clause::referenced_rules)
            .map(str::to_string)
            .collect();

        rule_set.entries.push(EntrySummary {
            name: name.to_string(),
            kind,
            alternatives: clauses.len(),
            references: references.into_iter().collect(),
            mixes_and_or: mixes_and_or(value),
        });
        rule_set
            .blocks
            .extend(clauses.into_iter().map(|clause| RuleBlock {
                kind,
                name: name.to_string(),
                clause,
            }));
    }

    Ok(rule_set)
}

fn mixes_and_or(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|text| text.contains(" and ") && text.contains(" or "))
}
