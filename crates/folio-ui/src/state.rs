//! UI-level state that drives rendering.
//! The conversation itself lives in the controller; this holds only what
//! the views need between frames, updated by draining the EventBus.

use folio_core::suggest::SuggestionEngine;
use folio_types::command::default_catalog;
use folio_types::event::ChatEvent;

use crate::panels::search::SearchAction;

/// Which page is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Chat,
}

/// State visible to UI panels
pub struct UiState {
    pub view: View,
    /// Palette for the chat input
    pub chat_palette: SuggestionEngine,
    /// Palette for the landing search bar
    pub landing_palette: SuggestionEngine,
    /// Landing search bar content
    pub landing_input: String,
    pub landing_palette_open: bool,
    /// Status line text
    pub status_text: String,
    pending: bool,
    last_error: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            view: View::Landing,
            chat_palette: SuggestionEngine::new(default_catalog()),
            landing_palette: SuggestionEngine::new(default_catalog()),
            landing_input: String::new(),
            landing_palette_open: false,
            status_text: "Ready".to_string(),
            pending: false,
            last_error: None,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::PendingChanged { pending: true } => {
                    self.pending = true;
                    self.last_error = None;
                    self.status_text = "Thinking...".to_string();
                }
                ChatEvent::PendingChanged { pending: false } => {
                    self.pending = false;
                    if self.last_error.is_none() {
                        self.status_text = "Ready".to_string();
                    }
                }
                ChatEvent::Error { message } => {
                    self.status_text = format!("Error: {}", message);
                    self.last_error = Some(message);
                }
                ChatEvent::Cleared { .. } => {
                    self.pending = false;
                    self.last_error = None;
                    self.status_text = "New chat".to_string();
                }
                ChatEvent::MessageAppended { .. }
                | ChatEvent::InputChanged { .. }
                | ChatEvent::SuggestionsToggled { .. } => {}
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Apply a landing search bar action. Returns the question to carry
    /// into the chat view when the visitor submits.
    pub fn apply_landing(&mut self, action: SearchAction) -> Option<String> {
        match action {
            SearchAction::Changed(text) => {
                self.landing_input = text;
                None
            }
            SearchAction::Open => {
                self.landing_palette_open = true;
                None
            }
            SearchAction::Close => {
                self.landing_palette_open = false;
                None
            }
            SearchAction::Submit(text) => {
                let question = text.trim().to_string();
                if question.is_empty() {
                    return None;
                }
                self.landing_input.clear();
                self.landing_palette_open = false;
                self.view = View::Chat;
                log::info!("Opening chat from landing page");
                Some(question)
            }
        }
    }

    /// Back to the landing page
    pub fn go_home(&mut self) {
        log::info!("Back to landing page");
        self.view = View::Landing;
        self.landing_palette_open = false;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
