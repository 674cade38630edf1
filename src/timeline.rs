//! Portfolio data as it is published, and the render-ready view of it.
//!
//! `data.json` holds `experiences` and `education` arrays of [`TimelineEntry`];
//! `skills.json` is a flat array of [`Skill`]. Nothing here touches markup:
//! callers get plain labels and a left/right placement per block.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::{DateError, TimelineSpan};

#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[display(fmt = "experience")]
    Experience,
    #[display(fmt = "education")]
    Education,
}

/// One item of the `experiences` or `education` arrays.
///
/// Dates stay raw here so that one bad entry does not reject the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date:  Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date:    Option<String>,
    #[serde(rename = "type")]
    pub kind:        EntryKind,
    pub text:        String,
    #[serde(default)]
    pub subtext:     String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TimelineEntry {
    /// # Errors
    /// Returns a [`DateError`] if either date is present but malformed.
    pub fn span(&self) -> Result<TimelineSpan, DateError> {
        TimelineSpan::parse(self.start_date.as_deref(), self.end_date.as_deref())
    }
}

/// Contents of `data.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioData {
    #[serde(default)]
    pub experiences: Vec<TimelineEntry>,
    #[serde(default)]
    pub education:   Vec<TimelineEntry>,
}

impl PortfolioData {
    /// # Errors
    /// Returns `TimelineError::Json` if the document does not match the expected shape.
    pub fn from_json(json: &str) -> Result<Self, TimelineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Experiences first, then education, each in document order.
    pub fn entries(&self) -> impl Iterator<Item = &TimelineEntry> {
        self.experiences.iter().chain(&self.education)
    }
}

/// Placement of a block on either side of the timeline axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Side {
    #[display(fmt = "right")]
    Right,
    #[display(fmt = "left")]
    Left,
}

impl Side {
    /// Blocks alternate starting on the right.
    pub const fn for_position(position: usize) -> Self {
        if position % 2 == 0 { Self::Right } else { Self::Left }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Right => "timeline-block-right",
            Self::Left => "timeline-block-left",
        }
    }
}

/// A timeline entry with its labels computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineBlock {
    pub side:        Side,
    pub kind:        EntryKind,
    pub period:      String,
    pub duration:    String,
    pub text:        String,
    pub subtext:     String,
    pub description: Option<String>,
}

impl TimelineBlock {
    /// # Errors
    /// Returns a [`DateError`] if the entry's dates cannot be parsed or resolved.
    pub fn from_entry(entry: &TimelineEntry, side: Side, today: NaiveDate) -> Result<Self, DateError> {
        let span = entry.span()?;
        Ok(Self {
            side,
            kind: entry.kind,
            period: span.format_range()?,
            duration: span.format_duration(today),
            text: entry.text.clone(),
            subtext: entry.subtext.clone(),
            description: entry.description.clone().filter(|d| !d.is_empty()),
        })
    }

    /// Whether the block has a description to reveal. Only an empty string
    /// counts as no description; whitespace is kept as published.
    pub const fn is_expandable(&self) -> bool {
        self.description.is_some()
    }
}

impl fmt::Display for TimelineBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.side, self.period)?;
        if !self.duration.is_empty() {
            write!(f, " ({})", self.duration)?;
        }
        writeln!(f)?;
        writeln!(f, "  {}", self.text)?;
        if !self.subtext.is_empty() {
            writeln!(f, "  {}", self.subtext)?;
        }
        if let Some(description) = &self.description {
            writeln!(f, "  {description}")?;
        }
        Ok(())
    }
}

/// Builds the blocks for every entry whose dates parse.
///
/// Entries with malformed dates are logged and skipped; sides alternate over
/// the blocks that remain.
pub fn build_timeline(data: &PortfolioData, today: NaiveDate) -> Vec<TimelineBlock> {
    let mut blocks = Vec::new();
    for entry in data.entries() {
        let side = Side::for_position(blocks.len());
        match TimelineBlock::from_entry(entry, side, today) {
            Ok(block) => blocks.push(block),
            Err(err) => tracing::warn!(text = %entry.text, %err, "skipping timeline entry"),
        }
    }
    tracing::debug!(count = blocks.len(), "built timeline");
    blocks
}

/// One item of `skills.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub category:   String,
    pub name:       String,
    pub icon_class: String,
}

impl Skill {
    /// # Errors
    /// Returns `TimelineError::Json` if the document is not an array of skills.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, TimelineError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory<'a> {
    pub name:   &'a str,
    pub skills: Vec<&'a Skill>,
}

impl fmt::Display for SkillCategory<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.skills.iter().map(|s| s.name.as_str()).collect();
        write!(f, "{}: {}", self.name, names.join(", "))
    }
}

/// Groups skills by category, categories in order of first appearance.
pub fn group_skills(skills: &[Skill]) -> Vec<SkillCategory<'_>> {
    let mut categories: Vec<SkillCategory<'_>> = Vec::new();
    for skill in skills {
        match categories.iter_mut().find(|c| c.name == skill.category) {
            Some(category) => category.skills.push(skill),
            None => categories.push(SkillCategory {
                name:   &skill.category,
                skills: vec![skill],
            }),
        }
    }
    categories
}
