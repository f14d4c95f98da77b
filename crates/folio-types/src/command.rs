use serde::{Deserialize, Serialize};

/// What a slash command (or a matching question) asks to see
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    About,
    Experience,
    Projects,
    Skills,
    Contact,
    Resume,
}

impl Intent {
    /// Every intent, in catalog order
    pub fn all() -> &'static [Intent] {
        &[
            Intent::About,
            Intent::Experience,
            Intent::Projects,
            Intent::Skills,
            Intent::Contact,
            Intent::Resume,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Intent::About => "about",
            Intent::Experience => "experience",
            Intent::Projects => "projects",
            Intent::Skills => "skills",
            Intent::Contact => "contact",
            Intent::Resume => "resume",
        }
    }

    pub fn slash(&self) -> &'static str {
        match self {
            Intent::About => "/about",
            Intent::Experience => "/experience",
            Intent::Projects => "/projects",
            Intent::Skills => "/skills",
            Intent::Contact => "/contact",
            Intent::Resume => "/resume",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Intent::About => "Learn about my background and story",
            Intent::Experience => "View my work experience and career journey",
            Intent::Projects => "Explore my latest projects and case studies",
            Intent::Skills => "Check out my technical skills and expertise",
            Intent::Contact => "Get my contact information",
            Intent::Resume => "Download my resume",
        }
    }
}

/// A static entry of the command palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSuggestion {
    pub id: String,
    /// Canonical slash form, e.g. `/projects`
    pub label: String,
    pub description: String,
    pub intent: Intent,
}

impl CommandSuggestion {
    pub fn for_intent(intent: Intent) -> Self {
        Self {
            id: intent.id().to_string(),
            label: intent.slash().to_string(),
            description: intent.description().to_string(),
            intent,
        }
    }
}

/// The six built-in commands, in display order.
pub fn default_catalog() -> Vec<CommandSuggestion> {
    Intent::all()
        .iter()
        .map(|i| CommandSuggestion::for_intent(*i))
        .collect()
}
