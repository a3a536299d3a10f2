/// Writes the generated policy and report to disk or stdout.
pub mod formatter;
/// Builds a Markdown translation report from an assembled rule set.
pub mod report;
