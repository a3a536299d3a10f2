use std::fmt::Write;

use crate::classifier::operand::rego_string;
use crate::generator::rule_set::{EntryKind, RuleBlock, RuleSet};
use crate::parser::expression::BODY_INDENT;

/// Package declaration, input bindings and the default-deny rule.
pub const HEADER: &str = "package openstack.policy

import input.credentials as credentials
import input.action_name as action_name
import input.target as target

default allow = false
";

/// Render one block.
///
/// Aliases become `name { ... }`; actions become an `allow` rule guarded by
/// `action_name`.
pub fn render_block(block: &RuleBlock) -> String {
    match block.kind {
        EntryKind::Alias => format!(
            "{name} {{\n{BODY_INDENT}{body}\n}}",
            name = block.name,
            body = block.clause
        ),
        EntryKind::Action => format!(
            "allow {{\n{BODY_INDENT}action_name = {name}\n{BODY_INDENT}{body}\n}}",
            name = rego_string(&block.name),
            body = block.clause
        ),
    }
}

/// Render the full policy: header, then every block separated by a blank line.
pub fn render_document(rule_set: &RuleSet) -> String {
    let mut rego = String::from(HEADER);
    for block in &rule_set.blocks {
        writeln!(rego).unwrap();
        writeln!(rego, "{}", render_block(block)).unwrap();
    }
    rego
}
