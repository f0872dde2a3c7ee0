//! Roster: parses mail and email spreadsheet exports into a deduplicated,
//! validated person roster.

mod batch;
mod error;
mod export;
mod parser;
mod spreadsheet;

use crate::batch::process_pass;
use crate::batch::PassConfig;
use crate::parser::RowParser;
use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Extracts a clean person roster from mail/email spreadsheet exports")]
#[command(version)]
struct Cli {
    /// Directory of mail export files (names and ZIP codes only)
    #[arg(long)]
    mail_dir: Option<PathBuf>,

    /// Directory of email export files (names, ZIPs, plan numbers, SSNs)
    #[arg(long)]
    email_dir: Option<PathBuf>,

    /// Output CSV path
    #[arg(long, default_value = "parsed_names.csv")]
    output: PathBuf,

    /// Spreadsheet column letter holding the full name
    #[arg(long, default_value = "G")]
    name_column: String,
}

/// Converts a spreadsheet column letter ('A'..) to its 0-based index.
fn column_letter_to_index(letter: &str) -> Result<usize> {
    let mut characters = letter.chars();
    match (characters.next(), characters.next()) {
        (Some(character), None) if character.is_ascii_alphabetic() => {
            Ok(character.to_ascii_uppercase() as usize - 'A' as usize)
        }
        _ => bail!("invalid column letter '{letter}'"),
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    if cli.mail_dir.is_none() && cli.email_dir.is_none() {
        bail!("at least one of --mail-dir and --email-dir is required");
    }

    let name_column = column_letter_to_index(&cli.name_column)?;
    let parser = RowParser::new(name_column);

    let mut records = Vec::new();
    if let Some(directory) = cli.mail_dir {
        let pass = PassConfig {
            directory,
            extract_identifiers: false,
            communication_type: "Print".to_owned(),
        };
        records.extend(process_pass(&pass, &parser).context("processing mail files")?);
    }
    if let Some(directory) = cli.email_dir {
        let pass = PassConfig {
            directory,
            extract_identifiers: true,
            communication_type: "Email".to_owned(),
        };
        records.extend(process_pass(&pass, &parser).context("processing email files")?);
    }

    let cleaned = export::clean(records);
    export::write_csv(&cli.output, &cleaned)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    info!(rows = cleaned.len(), output = %cli.output.display(), "roster saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_letters_map_to_zero_based_indexes() {
        assert_eq!(column_letter_to_index("A").unwrap(), 0);
        assert_eq!(column_letter_to_index("G").unwrap(), 6);
        assert_eq!(column_letter_to_index("g").unwrap(), 6);
    }

    #[test]
    fn invalid_column_letters_are_rejected() {
        assert!(column_letter_to_index("").is_err());
        assert!(column_letter_to_index("AA").is_err());
        assert!(column_letter_to_index("7").is_err());
    }
}
