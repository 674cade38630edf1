use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use timeline_dates::config::CliConfig;
use timeline_dates::compute_availability_date;
use timeline_dates::logging;
use timeline_dates::timeline::{PortfolioData, Skill, TimelineBlock, build_timeline, group_skills};

fn main() {
    let config = CliConfig::parse();
    logging::init(config.verbose);

    let today = config.clock().today();
    tracing::debug!(?config, %today, "starting portfolio-timeline");

    match compute_availability_date(today) {
        Ok(label) => println!("Disponible à partir {label}"),
        Err(err) => tracing::error!(%err, "could not compute availability date"),
    }

    // The two documents are independent: one failing does not hide the other.
    match load_timeline(&config.data, today) {
        Ok(blocks) => {
            println!();
            for block in &blocks {
                println!("{block}");
            }
        }
        Err(err) => tracing::error!("An error occurred while loading the timeline: {err:#}"),
    }

    match load_skills(&config.skills) {
        Ok(skills) => {
            for category in group_skills(&skills) {
                println!("{category}");
            }
        }
        Err(err) => tracing::error!("An error occurred while loading the skills: {err:#}"),
    }
}

fn load_timeline(path: &Path, today: NaiveDate) -> anyhow::Result<Vec<TimelineBlock>> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let data = PortfolioData::from_json(&json).with_context(|| format!("parsing {}", path.display()))?;
    tracing::info!(
        experiences = data.experiences.len(),
        education = data.education.len(),
        "loaded {}",
        path.display()
    );
    Ok(build_timeline(&data, today))
}

fn load_skills(path: &Path) -> anyhow::Result<Vec<Skill>> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let skills = Skill::list_from_json(&json).with_context(|| format!("parsing {}", path.display()))?;
    tracing::info!(count = skills.len(), "loaded {}", path.display());
    Ok(skills)
}
