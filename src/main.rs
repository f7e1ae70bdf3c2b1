use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use holidayengine::configuration::Configuration;
use holidayengine::engine::HolidayEngine;
use holidayengine::holiday::holidayerror::HolidayError;

/// Public holidays of the German federal states.
#[derive(Parser, Debug)]
#[command(name = "holidayengine", version, about)]
struct Cli {
    /// JSON configuration file (year horizon, date format).
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Holiday on a single date, e.g. `holiday 25.12.2022 BY`.
    Holiday {
        date: String,
        code: String
    },
    /// Holidays between two dates, both inclusive.
    Holidays {
        from: String,
        to: String,
        code: String
    },
    /// Known jurisdictions.
    Jurisdictions
}

fn run(cli: Cli) -> Result<String, HolidayError> {
    let configuration = match cli.config {
        Some(path) => Configuration::from_reader(path)?,
        None => Configuration::default()
    };
    let engine = HolidayEngine::in_memory(configuration)?;

    let json = match cli.command {
        Command::Holiday { date, code } => {
            tracing::info!(%date, %code, "holiday request");
            serde_json::to_string_pretty(&engine.holiday_in(&date, &code)?)
        },
        Command::Holidays { from, to, code } => {
            tracing::info!(%from, %to, %code, "holidays request");
            serde_json::to_string_pretty(&engine.holidays_in(&from, &to, &code)?)
        },
        Command::Jurisdictions => serde_json::to_string_pretty(&engine.jurisdictions().records())
    };
    json.map_err(|error| HolidayError::Manager(error.into()))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
