use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use linepay_core::{parse_records, DateRange, Record};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "linepay", version, about = "LINE Pay chat-export reporting tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the purchase table and total for a date range
    Report {
        /// Exported chat-log text file
        file: PathBuf,

        /// First day of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,

        /// Last day of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: NaiveDate,
    },

    /// Write the records in range to a spreadsheet or CSV file
    Export {
        /// Exported chat-log text file
        file: PathBuf,

        /// First day of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,

        /// Last day of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: NaiveDate,

        /// Output path (default: linepay_output_{from}_{to}.{ext})
        #[arg(long)]
        out: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Format::Xlsx)]
        format: Format,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Xlsx,
    Csv,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Xlsx => "xlsx",
            Format::Csv => "csv",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Report { file, from, to } => {
            let records = load_records(&file, from, to)?;
            if records.is_empty() {
                print_empty_notice(from, to);
                return Ok(());
            }

            let mut writer = BufWriter::new(std::io::stdout());
            linepay_report::write_table(&mut writer, &records)?;
            writer.flush()?;
            println!("\nTotal spend = {}", linepay_report::total(&records));
        }

        Command::Export { file, from, to, out, format } => {
            let records = load_records(&file, from, to)?;
            if records.is_empty() {
                print_empty_notice(from, to);
                return Ok(());
            }

            let out = out.unwrap_or_else(|| {
                PathBuf::from(format!("linepay_output_{from}_{to}.{}", format.extension()))
            });

            match format {
                Format::Xlsx => linepay_report::write_spreadsheet(&out, &records)
                    .with_context(|| format!("writing {}", out.display()))?,
                Format::Csv => {
                    let out_file = std::fs::File::create(&out)
                        .with_context(|| format!("creating {}", out.display()))?;
                    linepay_report::write_csv(BufWriter::new(out_file), &records)
                        .with_context(|| format!("writing {}", out.display()))?;
                }
            }

            println!("Wrote {} records to {}", records.len(), out.display());
        }
    }

    Ok(())
}

fn load_records(file: &PathBuf, from: NaiveDate, to: NaiveDate) -> Result<Vec<Record>> {
    if from > to {
        bail!("--from {from} is after --to {to}");
    }

    let bytes = std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let text = String::from_utf8(bytes)
        .with_context(|| format!("{} is not valid UTF-8", file.display()))?;

    Ok(parse_records(&text, DateRange::new(from, to)))
}

fn print_empty_notice(from: NaiveDate, to: NaiveDate) {
    // Not an error: nothing in range is a legitimate answer.
    println!(
        "No purchase records found between {from} and {to}. \
         Check the date range and the export file."
    );
}
