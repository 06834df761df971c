//! Rendering calculator results for the terminal

use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

use springpad_calculators::Summary;

use crate::cli::OutputFormat;

/// Print one calculator result in the chosen format
pub fn print_result<T: Serialize + Summary>(result: &T, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => write_table(&mut out, &result.summary())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, result)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_csv(&mut out, &result.summary())?,
    }
    Ok(())
}

/// Print detail rows (schedules, yearly breakdowns) under the summary
pub fn print_rows<T: Serialize>(title: &str, rows: &[T], format: OutputFormat) -> Result<()> {
    if rows.is_empty() || format == OutputFormat::Json {
        return Ok(());
    }
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if format == OutputFormat::Table {
        writeln!(out, "\n{}:", title)?;
    } else {
        writeln!(out)?;
    }

    let mut wtr = csv::Writer::from_writer(out);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_table<W: Write>(out: &mut W, lines: &[(String, String)]) -> Result<()> {
    let width = lines.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    for (label, value) in lines {
        writeln!(out, "  {:<width$}  {}", label, value, width = width)?;
    }
    Ok(())
}

fn write_csv<W: Write>(out: W, lines: &[(String, String)]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["label", "value"])?;
    for (label, value) in lines {
        wtr.write_record([label, value])?;
    }
    wtr.flush()?;
    Ok(())
}
