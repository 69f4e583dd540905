// insert-batch: inspect a SQL script and show how its INSERTs would batch.
// Each statement is parsed on its own; nothing is queued or executed.

use clap::Parser;
use insert_batch::{generate_multi_row_insert, logger, split_statements, InsertDescriptor};
use rayon::prelude::*;
use std::fs;
use std::io::{self, Read, Write};
use std::time::Instant;
use tracing::{debug, info};

// Command-line flags and positional arguments.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Enable debug logging.
    #[arg(long)]
    debug: bool,

    /// Also print the multi-row INSERT for this many rows.
    #[arg(long, allow_hyphen_values = true)]
    rows: Option<i64>,

    /// Print one JSON object per statement.
    #[arg(long)]
    json: bool,

    /// SQL script to read. Reads stdin when omitted or `-`.
    input: Option<String>,
}

#[derive(Debug, serde::Serialize)]
struct StatementReport {
    index: usize,
    parametrized: bool,
    compatible_with_previous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    descriptor: Option<InsertDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    multi_row_sql: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    multi_row_error: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    logger::setup_logger(args.debug);

    let start = Instant::now();
    let script = read_input(args.input.as_deref())?;
    let statements = split_statements(&script);
    debug!(count = statements.len(), "split script into statements");

    let reports = inspect_all(&statements, args.rows);

    let mut stdout = io::stdout().lock();
    for report in &reports {
        if args.json {
            writeln!(stdout, "{}", serde_json::to_string(report)?)?;
        } else {
            write_text(&mut stdout, report)?;
        }
    }
    stdout.flush()?;

    let parsed = reports.iter().filter(|r| r.descriptor.is_some()).count();
    let parametrized = reports.iter().filter(|r| r.parametrized).count();
    let mergeable = reports.iter().filter(|r| r.compatible_with_previous).count();

    let sep = "=".repeat(60);
    let mut stderr = io::stderr();
    writeln!(stderr, "\n{}\nSUMMARY\n{}", sep, sep)?;
    writeln!(stderr, "Statements:    {}", reports.len())?;
    writeln!(stderr, "Parsed:        {}", parsed)?;
    writeln!(stderr, "Parametrized:  {}", parametrized)?;
    writeln!(stderr, "Mergeable:     {}", mergeable)?;
    writeln!(stderr, "{}", sep)?;

    info!("inspected {} statements in {:?}", reports.len(), start.elapsed());
    Ok(())
}

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => {
            debug!("reading script from {}", path);
            fs::read_to_string(path)
        }
    }
}

// Parsing is pure, so statements are inspected in parallel; order is restored by collect.
fn inspect_all(statements: &[String], rows: Option<i64>) -> Vec<StatementReport> {
    let mut reports: Vec<StatementReport> = statements
        .par_iter()
        .enumerate()
        .map(|(index, sql)| inspect(index, sql, rows))
        .collect();

    for i in 1..reports.len() {
        let compatible = match (&reports[i - 1].descriptor, &reports[i].descriptor) {
            (Some(prev), Some(cur)) => {
                reports[i - 1].parametrized && reports[i].parametrized && prev.is_compatible_with(cur)
            }
            _ => false,
        };
        reports[i].compatible_with_previous = compatible;
    }
    reports
}

fn inspect(index: usize, sql: &str, rows: Option<i64>) -> StatementReport {
    let parsed = InsertDescriptor::parse(sql);
    let (multi_row_sql, multi_row_error) = match (&parsed, rows) {
        (Ok(info), Some(n)) => match generate_multi_row_insert(Some(info), n) {
            Ok(sql) => (Some(sql), None),
            Err(e) => (None, Some(e.to_string())),
        },
        _ => (None, None),
    };
    let parametrized = parsed.as_ref().is_ok_and(InsertDescriptor::is_parametrized);
    let (descriptor, rejected) = match parsed {
        Ok(info) => (Some(info), None),
        Err(e) => (None, Some(e.to_string())),
    };

    StatementReport {
        index,
        parametrized,
        compatible_with_previous: false,
        descriptor,
        rejected,
        multi_row_sql,
        multi_row_error,
    }
}

fn write_text(out: &mut impl Write, report: &StatementReport) -> io::Result<()> {
    match (&report.descriptor, &report.rejected) {
        (Some(info), _) => {
            writeln!(
                out,
                "#{} {} [{}] parametrized={} mergeable={}",
                report.index,
                info.table_name(),
                info.columns().join(", "),
                report.parametrized,
                report.compatible_with_previous
            )?;
        }
        (None, reason) => {
            writeln!(
                out,
                "#{} skipped: {}",
                report.index,
                reason.as_deref().unwrap_or("not an INSERT")
            )?;
        }
    }
    if let Some(sql) = &report.multi_row_sql {
        writeln!(out, "    {}", sql)?;
    }
    if let Some(err) = &report.multi_row_error {
        writeln!(out, "    cannot expand: {}", err)?;
    }
    Ok(())
}
