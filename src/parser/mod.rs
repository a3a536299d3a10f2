/// YAML / JSON loading into a name → raw expression mapping.
pub mod document;
/// The `and` / `or` / `not` expression grammar.
pub mod expression;
