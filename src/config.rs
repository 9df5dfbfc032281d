//! Command-line configuration. Everything comes from the arguments; no
//! environment variables or files are read.

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};

use crate::calculator::CalendarPolicy;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Fixed "today"; the local calendar date when unset.
    pub today: Option<NaiveDate>,
    pub policy: CalendarPolicy,
    pub json: bool,
    pub verbose: bool,
    /// Successive field contents. Empty means read lines from stdin.
    pub inputs: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(Config),
    Help,
}

impl Config {
    /// Parses arguments, excluding the binary name.
    pub fn from_args<I>(args: I) -> Result<Command>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--today" => {
                    let value = args
                        .next()
                        .context("--today requires a date (YYYY-MM-DD)")?;
                    config.today = Some(parse_today(&value)?);
                }
                "--lenient" => config.policy = CalendarPolicy::Lenient,
                "--json" => config.json = true,
                "-v" | "--verbose" => config.verbose = true,
                "--" => config.inputs.extend(args.by_ref()),
                s if s.starts_with("--today=") => {
                    config.today = Some(parse_today(&s["--today=".len()..])?);
                }
                s if s.starts_with("--") => bail!("unknown option: {s}"),
                other => config.inputs.push(other.to_string()),
            }
        }

        Ok(Command::Run(config))
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

fn parse_today(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("invalid --today value {value:?}, expected YYYY-MM-DD"))
}

pub fn print_help(binary_name: &str) {
    println!(
        "Agecalc v{} - Age from a date of birth",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS] [INPUT]...", binary_name);
    println!("    {} [OPTIONS] < keystrokes.txt", binary_name);
    println!();
    println!("Each INPUT (or stdin line) is the full content of the date field.");
    println!("It is masked to DD/MM/YYYY; once complete the age is shown.");
    println!();
    println!("OPTIONS:");
    println!("    --today <YYYY-MM-DD>  Compute ages relative to this date.");
    println!("    --lenient             Roll impossible days/months over (31/04 -> 01/05).");
    println!("    --json                Print one JSON report per input.");
    println!("    -v, --verbose         Log each formatter/calculator pass to stderr.");
    println!("    -h, --help            Show this help message.");
}
