//! Structured answers rendered as cards.
//!
//! Each variant carries exactly the fields its card needs, so renderers
//! match exhaustively instead of probing for optional keys.

use serde::{Deserialize, Serialize};

use crate::command::Intent;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Payload {
    About(AboutCard),
    Contact(ContactCard),
    Experience { items: Vec<ExperienceItem> },
    Projects { items: Vec<ProjectItem> },
    Skills { groups: Vec<SkillGroup> },
    Link { label: String, url: String },
}

impl Payload {
    /// The command intent this payload answers
    pub fn intent(&self) -> Intent {
        match self {
            Payload::About(_) => Intent::About,
            Payload::Contact(_) => Intent::Contact,
            Payload::Experience { .. } => Intent::Experience,
            Payload::Projects { .. } => Intent::Projects,
            Payload::Skills { .. } => Intent::Skills,
            Payload::Link { .. } => Intent::Resume,
        }
    }

    /// Card heading shown above the payload
    pub fn title(&self) -> &'static str {
        match self {
            Payload::About(_) => "About",
            Payload::Contact(_) => "Get In Touch",
            Payload::Experience { .. } => "Experience",
            Payload::Projects { .. } => "Projects",
            Payload::Skills { .. } => "Skills",
            Payload::Link { .. } => "Resume",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutCard {
    pub name: String,
    pub headline: String,
    pub summary: String,
    /// Words the renderer highlights inside the summary
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactCard {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub website: Option<String>,
}

impl ContactCard {
    /// Social links that are present, as (label, url) pairs in display order
    pub fn social_links(&self) -> Vec<(&'static str, &str)> {
        [
            ("LinkedIn", self.linkedin.as_deref()),
            ("GitHub", self.github.as_deref()),
            ("Twitter", self.twitter.as_deref()),
            ("Website", self.website.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub demo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub skills: Vec<String>,
}
