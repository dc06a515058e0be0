mod script;

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::script::Script;

/// Feed a scripted timeline of page events through the controller and print
/// the resulting DOM commands, one JSON record per line.
#[derive(Parser)]
#[command(name = "folio-replay", version)]
struct Cli {
    /// Script file, or `-` for stdin.
    script: PathBuf,

    /// Pretty-print each record instead of one per line.
    #[arg(long)]
    pretty: bool,

    /// Override the script's `until`.
    #[arg(long, value_name = "MS")]
    until: Option<f64>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_script(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading script from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut script = Script::from_json(&read_script(&cli.script)?)?;
    if cli.until.is_some() {
        script.until = cli.until;
    }
    let records = script.run()?;

    let mut stdout = io::stdout().lock();
    for record in &records {
        let line = if cli.pretty {
            serde_json::to_string_pretty(record)?
        } else {
            serde_json::to_string(record)?
        };
        writeln!(stdout, "{line}")?;
    }
    stdout.flush()?;
    Ok(())
}
