/// `Rego` text rendering of assembled rule blocks.
pub mod rego;
/// Alias / action classification and per-alternative block layout.
pub mod rule_set;
