use std::env;
use std::io::{self, BufRead, Write};

use agecalc::config::{Command, Config, print_help};
use agecalc::render::{JsonReport, render_snapshot};
use agecalc::Snapshot;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{Level, info};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let binary_name = args.first().cloned().unwrap_or_else(|| "agecalc".to_string());

    let config = match Config::from_args(args.into_iter().skip(1))? {
        Command::Help => {
            print_help(&binary_name);
            return Ok(());
        }
        Command::Run(config) => config,
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(if config.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    let today = config.today();
    info!(%today, policy = ?config.policy, "starting");

    let mut out = io::stdout().lock();

    // Arguments are successive field contents; only the final state is shown.
    if !config.inputs.is_empty() {
        let snapshot = config
            .inputs
            .iter()
            .fold(Snapshot::new(), |snap, raw| snap.apply(raw, today, config.policy));
        return emit(&mut out, &snapshot, today, config.json);
    }

    let mut snapshot = Snapshot::new().focus();
    if !config.json {
        emit(&mut out, &snapshot, today, false)?;
    }
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read input from stdin")?;
        snapshot = snapshot.apply(&line, today, config.policy);
        emit(&mut out, &snapshot, today, config.json)?;
    }

    Ok(())
}

fn emit(out: &mut impl Write, snapshot: &Snapshot, today: NaiveDate, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, &JsonReport::new(snapshot, today))
            .context("Failed to serialize report")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}\n", render_snapshot(snapshot, today))?;
    }
    out.flush().context("Failed to write to stdout")
}
