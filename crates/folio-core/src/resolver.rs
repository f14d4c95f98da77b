//! Command resolver: maps raw input to a canned answer.
//!
//! Matching is deliberately loose: after trimming and lower-casing, the input
//! resolves when it starts with a slash command, or when a command word or
//! synonym appears anywhere in it. "I work on contact lenses" therefore
//! resolves to `/contact`. Anything that does not resolve goes to the
//! answer provider.

use folio_types::{command::Intent, payload::Payload, profile::Profile};

/// Synonyms checked after the command words themselves, in order.
const SYNONYMS: &[(&str, Intent)] = &[
    ("project", Intent::Projects),
    ("work", Intent::Experience),
    ("skill", Intent::Skills),
    ("tech", Intent::Skills),
    ("background", Intent::About),
    ("email", Intent::Contact),
];

/// A successful resolution: the intent plus its fixed payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub intent: Intent,
    pub payload: Payload,
}

/// Resolves input against the owner's profile.
pub struct CommandResolver {
    profile: Profile,
}

impl CommandResolver {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Resolve `input` to a canned payload, or `None` to fall through to the provider.
    pub fn resolve(&self, input: &str) -> Option<Resolution> {
        let intent = classify(input)?;
        Some(Resolution {
            intent,
            payload: self.profile.payload_for(intent),
        })
    }
}

impl Default for CommandResolver {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}

/// Classify input into an intent without building the payload.
pub fn classify(input: &str) -> Option<Intent> {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    let intents = Intent::all();

    intents
        .iter()
        .find(|i| normalized.starts_with(i.slash()))
        .or_else(|| intents.iter().find(|i| normalized.contains(i.id())))
        .copied()
        .or_else(|| {
            SYNONYMS
                .iter()
                .find(|(word, _)| normalized.contains(word))
                .map(|(_, intent)| *intent)
        })
}
