//! CLI entry point for `oslopolicy2rego`.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use oslopolicy2rego::generator::rule_set::EntryKind;
use oslopolicy2rego::output::formatter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "oslopolicy2rego",
    about = "Translate OpenStack oslo.policy rules into a Rego policy",
    version
)]
struct Cli {
    /// Policy file (YAML or JSON); reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Write the Rego policy here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write a Markdown translation report
    #[arg(long)]
    report: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "oslopolicy2rego=debug"
    } else {
        "oslopolicy2rego=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let input = match read_input(cli.input.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    };

    let (rule_set, rego) = match oslopolicy2rego::translate_with_rule_set(&input) {
        Ok(translated) => translated,
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "translation failed");
            eprintln!("error: {e}");
            process::exit(2);
        }
    };

    tracing::debug!(
        aliases = rule_set.count(EntryKind::Alias),
        actions = rule_set.count(EntryKind::Action),
        blocks = rule_set.blocks.len(),
        "translated policy"
    );
    for (entry, reference) in rule_set.unresolved_references() {
        tracing::debug!(%entry, %reference, "rule reference has no matching alias");
    }

    if let Err(e) = formatter::write_output(cli.output.as_deref(), &rego) {
        eprintln!("error: {e}");
        process::exit(2);
    }
    if let Some(path) = &cli.output {
        tracing::info!(path = %path.display(), "wrote Rego policy");
    }

    if let Some(path) = &cli.report {
        if let Err(e) = formatter::write_report(path, &rule_set) {
            eprintln!("error: {e}");
            process::exit(2);
        }
        tracing::info!(path = %path.display(), "wrote translation report");
    }
}

fn read_input(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "reading policy file");
            std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {e}", path.display()))
        }
        _ => {
            tracing::debug!("reading policy from stdin");
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| format!("Failed to read stdin: {e}"))?;
            Ok(input)
        }
    }
}
