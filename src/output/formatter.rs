use std::io::Write;
use std::path::{Path, PathBuf};

use crate::generator::rule_set::RuleSet;
use crate::output::report;

/// Failure while writing generated artifacts.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// The parent directory of an output file could not be created.
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The output file could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Standard output could not be written.
    #[error("Failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

/// Write the generated policy to `destination`, or to stdout when `None`.
pub fn write_output(destination: Option<&Path>, rego: &str) -> Result<(), OutputError> {
    match destination {
        Some(path) => write_file(path, rego),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rego.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(OutputError::Stdout)
        }
    }
}

/// Write the Markdown translation report for `rule_set` to `path`.
pub fn write_report(path: &Path, rule_set: &RuleSet) -> Result<(), OutputError> {
    write_file(path, &report::build_report(rule_set))
}

fn write_file(path: &Path, contents: &str) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, contents).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}
