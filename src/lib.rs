//! Translate OpenStack `oslo.policy` rules into `Rego` policies.
#![warn(missing_docs)]

/// Operand and comparison-leaf classification.
pub mod classifier;
/// Translation error types.
pub mod error;
/// `Rego` rule assembly and rendering.
pub mod generator;
/// File output and markdown report generation.
pub mod output;
/// Policy document loading and expression parsing.
pub mod parser;

pub use error::{ErrorKind, ExpressionError, TranslateError};

use generator::rule_set::{self, RuleSet};
use generator::rego;
use parser::document::{self, PolicyDocument};

/// Translate a YAML or JSON `oslo.policy` file into `Rego` source.
pub fn translate(input: &str) -> Result<String, TranslateError> {
    translate_with_rule_set(input).map(|(_, rego)| rego)
}

/// Translate an already-loaded policy document.
pub fn translate_document(document: &PolicyDocument) -> Result<String, TranslateError> {
    let rule_set = rule_set::assemble(document)?;
    Ok(rego::render_document(&rule_set))
}

/// Like [`translate`], also returning the assembled blocks for reporting.
pub fn translate_with_rule_set(input: &str) -> Result<(RuleSet, String), TranslateError> {
    let document = document::parse_document(input)?;
    let rule_set = rule_set::assemble(&document)?;
    let rego = rego::render_document(&rule_set);
    Ok((rule_set, rego))
}
