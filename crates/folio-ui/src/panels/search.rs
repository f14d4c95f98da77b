//! Search bar with the `/` command palette attached.
//!
//! Shared by the landing page and the chat view. The widget owns no
//! conversation state; it reports what happened as [`SearchAction`]s.

use egui::{self, Key, Modifiers, RichText, Vec2};

use folio_core::suggest::{NavKey, PaletteSignal, SuggestionEngine};
use folio_types::config::PaletteConfig;

use crate::panels::palette::command_palette;
use crate::theme::*;

pub const SEARCH_HINT: &str = "Ask me anything :) | Type '/' for commands";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// The buffer was edited
    Changed(String),
    Open,
    Close,
    /// Enter, the send button, or a palette pick
    Submit(String),
}

/// Decide the actions for one edit of the buffer.
///
/// Typing `/` into an empty buffer opens the palette.
pub fn edit_actions(previous: &str, current: &str) -> Vec<SearchAction> {
    let mut actions = Vec::new();
    if previous.is_empty() && current == "/" {
        actions.push(SearchAction::Open);
    }
    actions.push(SearchAction::Changed(current.to_string()));
    actions
}

/// Map a palette signal onto bar actions. A pick while the bar is
/// disabled only closes the palette.
pub fn signal_actions(signal: PaletteSignal, enabled: bool) -> Option<SearchAction> {
    match signal {
        PaletteSignal::None => None,
        PaletteSignal::Selected(item) if enabled => {
            log::debug!("Palette picked {}", item.label);
            Some(SearchAction::Submit(item.label))
        }
        PaletteSignal::Selected(item) => {
            log::debug!("Palette pick {} ignored while busy", item.label);
            Some(SearchAction::Close)
        }
        PaletteSignal::Close => Some(SearchAction::Close),
    }
}

/// Render the bar. `enabled` is false while an answer is pending.
pub fn search_bar(
    ui: &mut egui::Ui,
    id: &str,
    input: &str,
    open: bool,
    enabled: bool,
    engine: &mut SuggestionEngine,
    config: &PaletteConfig,
) -> Vec<SearchAction> {
    let mut actions = Vec::new();
    engine.sync(open, input);

    // Keys go to the palette before the text field can see them.
    if engine.is_open() {
        for key in take_nav_keys(ui, engine) {
            actions.extend(signal_actions(engine.handle_key(key), enabled));
        }
    }

    let mut buffer = input.to_string();
    let mut response = None;
    ui.horizontal(|ui| {
        let edit = egui::TextEdit::singleline(&mut buffer)
            .id_salt(id)
            .hint_text(SEARCH_HINT)
            .desired_width(ui.available_width() - 70.0)
            .font(egui::FontId::proportional(14.0));
        let edit_response = ui.add(edit);

        let send_enabled = enabled && !buffer.trim().is_empty();
        let send_btn = ui.add_enabled(
            send_enabled,
            egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(60.0, 0.0)),
        );

        if edit_response.changed() {
            actions.extend(edit_actions(input, &buffer));
        }

        if (edit_response.lost_focus()
            && ui.input(|i| i.key_pressed(Key::Enter))
            && send_enabled)
            || send_btn.clicked()
        {
            actions.push(SearchAction::Submit(buffer.trim().to_string()));
            edit_response.request_focus();
        }
        response = Some(edit_response);
    });

    if let Some(response) = response {
        if let Some(signal) = command_palette(ui.ctx(), id, response.rect, engine, config) {
            actions.extend(signal_actions(signal, enabled));
        }
    }

    actions
}

/// Consume the navigation keys for this frame. Enter is only taken when
/// there is a row to pick, so a plain submission still reaches the field.
fn take_nav_keys(ui: &mut egui::Ui, engine: &SuggestionEngine) -> Vec<NavKey> {
    let enter_picks = engine.selected().is_some();
    ui.input_mut(|input| {
        let mut keys = Vec::new();
        if input.consume_key(Modifiers::NONE, Key::ArrowDown) {
            keys.push(NavKey::ArrowDown);
        }
        if input.consume_key(Modifiers::NONE, Key::ArrowUp) {
            keys.push(NavKey::ArrowUp);
        }
        if enter_picks && input.consume_key(Modifiers::NONE, Key::Enter) {
            keys.push(NavKey::Enter);
        }
        if input.consume_key(Modifiers::NONE, Key::Escape) {
            keys.push(NavKey::Escape);
        }
        keys
    })
}
