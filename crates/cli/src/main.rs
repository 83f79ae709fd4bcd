//! Command-line front end for comparing passwords by edit distance.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pwdist_audit::{audit, Finding, PasswordRecord};
use pwdist_core::Unit;
use tracing_subscriber::EnvFilter;

mod report;

#[derive(Debug, Parser)]
#[command(name = "pwdist")]
#[command(version, about = "Spot passwords that are trivial variants of each other", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the Levenshtein distance between two strings
    Distance {
        #[arg(allow_hyphen_values = true)]
        source: String,
        #[arg(allow_hyphen_values = true)]
        target: String,
        /// Compare per Unicode scalar value (`char`) or per UTF-8 byte (`byte`)
        #[arg(long, default_value_t = Unit::Char)]
        unit: Unit,
    },

    /// Print the similarity ratio (0.000 to 1.000) between two strings
    Similarity {
        #[arg(allow_hyphen_values = true)]
        source: String,
        #[arg(allow_hyphen_values = true)]
        target: String,
        #[arg(long, default_value_t = Unit::Char)]
        unit: Unit,
    },

    /// Report similar passwords in a history file
    Audit {
        /// JSON array of records (`.json`) or one password per line
        records: PathBuf,
        /// TOML file with audit thresholds
        #[arg(long)]
        config: Option<PathBuf>,
        /// Check this password against the records instead of auditing them pairwise
        #[arg(long, allow_hyphen_values = true)]
        candidate: Option<String>,
        /// Print findings as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Distance { source, target, unit } => {
            println!("{}", pwdist_core::distance_with(&source, &target, unit));
        }
        Command::Similarity { source, target, unit } => {
            println!("{:.3}", pwdist_core::similarity(&source, &target, unit));
        }
        Command::Audit {
            records,
            config,
            candidate,
            json,
        } => {
            let (history, findings) =
                run_audit(&records, config.as_deref(), candidate.as_deref())?;
            print!("{}", render_output(&findings, &history, json)?);
        }
    }

    Ok(())
}

fn run_audit(
    records_path: &Path,
    config_path: Option<&Path>,
    candidate: Option<&str>,
) -> Result<(Vec<PasswordRecord>, Vec<Finding>)> {
    let auditor = audit::create_auditor(config_path).with_context(|| match config_path {
        Some(path) => format!("Failed to load config {}", path.display()),
        None => "Failed to build default config".to_string(),
    })?;
    let records: Vec<PasswordRecord> = audit::load_records(records_path)
        .with_context(|| format!("Failed to read records {}", records_path.display()))?;

    tracing::info!(
        records = records.len(),
        unit = %auditor.config().unit,
        "Starting audit"
    );

    let findings = match candidate {
        Some(candidate) => auditor.check_candidate(candidate, &records),
        None => auditor.find_similar_pairs(&records),
    };
    Ok((records, findings))
}

fn render_output(findings: &[Finding], history: &[PasswordRecord], json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(findings).context("Failed to encode findings")?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(report::render(findings, history))
    }
}
