//! Command-line interface for the extractor.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;
use crate::extract::extract_records;
use crate::input::read_input;
use crate::tsv::write_records;

/// MedRecord extractor - Convert PubMed article-set XML into flat tabular records.
#[derive(Parser)]
#[command(name = "medrecord-extractor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract tab-separated records from an article-set XML file.
    Extract {
        /// Input XML file, plain or gzip-compressed (default: stdin)
        input: Option<PathBuf>,

        /// Emit the fully-qualified record line instead of the five-field default
        #[arg(short, long)]
        full: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            full,
            output,
        } => extract_command(input.as_deref(), full, output.as_deref()),
    }
}

/// Execute the extract command.
fn extract_command(input: Option<&Path>, full: bool, output: Option<&Path>) -> Result<()> {
    // Record lines go to stdout (or --output); status stays on stderr.
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Reading input...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let xml = match read_input(input) {
        Ok(xml) => xml,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Extracting records...");

    let records = match extract_records(&xml) {
        Ok(records) => records,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    let count = match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_records(&mut writer, records, full)?
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_records(&mut writer, records, full)?
        }
    };

    let mut status = io::stderr();
    writeln!(
        status,
        "{} {} record(s){}",
        style("Extracted").green().bold(),
        style(count).cyan(),
        output
            .map(|p| format!(" to {}", p.display()))
            .unwrap_or_default()
    )?;

    Ok(())
}
