//! Sheetcast CLI - row source inspection tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sheetcast::prelude::*;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheetcast")]
#[command(author, version, about = "Inspect the sheets and rows sheetcast decodes from")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all sheets in a workbook
    Sheets {
        /// Input spreadsheet file (xlsx, xlsm, csv)
        input: PathBuf,
    },

    /// Dump a sheet's rows as CSV or JSON
    Rows {
        /// Input spreadsheet file (xlsx, xlsm, csv)
        input: PathBuf,

        /// Sheet name (default: first sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Output as a JSON array of rows
        #[arg(short, long)]
        json: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field delimiter for CSV output
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sheets { input } => list_sheets(&input),
        Commands::Rows {
            input,
            sheet,
            json,
            output,
            delimiter,
        } => dump_rows(&input, sheet.as_deref(), json, output.as_deref(), delimiter),
    }
}

fn open_decoder(input: &PathBuf) -> Result<Decoder<Box<dyn RowSource>>> {
    sheetcast::open(input, DecodeOptions::default())
        .with_context(|| format!("Failed to open '{}'", input.display()))
}

fn list_sheets(input: &PathBuf) -> Result<()> {
    let decoder = open_decoder(input)?;

    for name in decoder.sheet_names() {
        println!("{name}");
    }

    Ok(())
}

fn dump_rows(
    input: &PathBuf,
    sheet: Option<&str>,
    json: bool,
    output: Option<&std::path::Path>,
    delimiter: char,
) -> Result<()> {
    let decoder = open_decoder(input)?;

    let sheet = match sheet {
        Some(name) => name.to_string(),
        None => decoder
            .sheet_names()
            .into_iter()
            .next()
            .context("Workbook has no sheets")?,
    };

    let rows = decoder
        .source()
        .rows(&sheet)
        .with_context(|| format!("Sheet '{sheet}' not found"))?;

    let rendered = if json {
        let mut text = serde_json::to_string_pretty(&rows).context("Failed to encode rows")?;
        text.push('\n');
        text
    } else {
        let mut text = String::new();
        for row in &rows {
            let mut first = true;
            for cell in row {
                if !first {
                    text.push(delimiter);
                }
                first = false;
                text.push_str(&csv_escape(cell, delimiter));
            }
            text.push('\n');
        }
        text
    };

    if let Some(output_path) = output {
        std::fs::write(output_path, &rendered)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!("Wrote {} rows to '{}'", rows.len(), output_path.display());
    } else {
        io::stdout()
            .write_all(rendered.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

/// Quote a cell for CSV output when it contains the delimiter, quotes or
/// line breaks
fn csv_escape(cell: &str, delimiter: char) -> String {
    if cell.contains(delimiter) || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
    {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
