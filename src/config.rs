use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::{Clock, FixedClock, SystemClock};

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-timeline")]
#[command(about = "Print the portfolio timeline, skills and availability in French")]
pub struct CliConfig {
    /// Document with the `experiences` and `education` arrays
    #[arg(long, default_value = "data/data.json")]
    pub data: PathBuf,

    /// Array of `{category, name, iconClass}` records
    #[arg(long, default_value = "data/skills.json")]
    pub skills: PathBuf,

    /// Reference date (YYYY-MM-DD) instead of the local date
    #[arg(long)]
    pub today: Option<NaiveDate>,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// The clock every label is computed against.
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.today {
            Some(date) => Box::new(FixedClock(date)),
            None => Box::new(SystemClock),
        }
    }
}
