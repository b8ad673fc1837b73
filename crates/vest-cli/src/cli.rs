use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::names::parse_target_date;

#[derive(Parser, Debug)]
#[command(
    name = "vest",
    about = "Vested share balances per employee and award as of a target date",
    version,
)]
pub struct Cli {
    /// Ledger file name, e.g. `example.csv`
    pub ledger: String,

    /// As-of date, formatted YYYY-MM-DD
    #[arg(value_parser = parse_target_date)]
    pub target_date: NaiveDate,

    /// Output format (overrides the config file)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
