//! Toy robot command-line front end.
//!
//! Runs command files given as arguments, or an interactive stdin loop when
//! none are given. One stdout line per successful report; unparseable lines
//! are skipped.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tabletop_robot::{parse_line, Controller, Robot, Table};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "tabletop-robot",
    version,
    about = "Simulate a toy robot on a tabletop grid"
)]
struct Cli {
    /// Command files to run in order. Reads stdin interactively when empty.
    files: Vec<PathBuf>,

    /// Table width in cells.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(i32).range(1..))]
    width: i32,

    /// Table height in cells.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(i32).range(1..))]
    height: i32,
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let table = Table::new(cli.width, cli.height);
    let mut controller = Controller::new(Robot::new());
    let mut out = io::stdout().lock();

    if cli.files.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("read stdin")?;
            run_line(&mut controller, &line, table, &mut out)?;
        }
    } else {
        for path in &cli.files {
            let file =
                File::open(path).with_context(|| format!("open {}", path.display()))?;
            for line in BufReader::new(file).lines() {
                let line = line.with_context(|| format!("read {}", path.display()))?;
                run_line(&mut controller, &line, table, &mut out)?;
            }
        }
    }

    Ok(())
}

fn run_line(
    controller: &mut Controller,
    line: &str,
    table: Table,
    out: &mut impl Write,
) -> Result<()> {
    let Some(command) = parse_line(line, table) else {
        return Ok(());
    };
    if let Some(report) = controller.execute(command) {
        writeln!(out, "{report}").context("write report")?;
    }
    Ok(())
}

/// Dev diagnostics via `RUST_LOG`, stderr, compact format. Defaults to `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).compact())
        .init();
}
