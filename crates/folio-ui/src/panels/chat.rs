//! Chat panel: the conversation log, a typing indicator, and the input bar.

use egui::{self, Align, Layout, RichText, ScrollArea};

use folio_core::conversation::ConversationState;
use folio_types::config::PaletteConfig;
use folio_types::message::{Message, Role};

use crate::cards::payload_card;
use crate::panels::search::{search_bar, SearchAction};
use crate::state::UiState;
use crate::theme::*;

/// What the visitor did in the chat view this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    Search(SearchAction),
    NewChat,
    Home,
}

/// Render the chat panel from a snapshot of the conversation.
pub fn chat_panel(
    ui: &mut egui::Ui,
    conversation: &ConversationState,
    state: &mut UiState,
    palette: &PaletteConfig,
) -> Vec<ChatAction> {
    let mut actions = Vec::new();

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    if ui.button("← Home").clicked() {
                        actions.push(ChatAction::Home);
                    }
                    ui.heading(RichText::new("Chat").color(TEXT_PRIMARY).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button("New chat").clicked() {
                            actions.push(ChatAction::NewChat);
                        }
                        let status_color = if state.last_error().is_some() {
                            ERROR
                        } else if state.is_busy() {
                            WARNING
                        } else {
                            SUCCESS
                        };
                        ui.label(RichText::new(&state.status_text).color(status_color).small());
                    });
                });

                ui.separator();

                let available_height = ui.available_height() - 60.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if conversation.is_empty() {
                            ui.add_space(24.0);
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    RichText::new("Ask about my work, or type / for commands.")
                                        .color(TEXT_MUTED),
                                );
                            });
                        }
                        for message in &conversation.messages {
                            render_message(ui, message);
                            ui.add_space(4.0);
                        }
                        if conversation.pending {
                            typing_indicator(ui);
                        }
                    });

                ui.add_space(8.0);

                let bar = search_bar(
                    ui,
                    "chat_input",
                    &conversation.input,
                    conversation.suggestions_open,
                    !conversation.pending,
                    &mut state.chat_palette,
                    palette,
                );
                actions.extend(bar.into_iter().map(ChatAction::Search));
            });
        });

    actions
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let time = message
        .created_at
        .with_timezone(&chrono::Local)
        .format("%H:%M")
        .to_string();

    match message.role {
        Role::User => {
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                egui::Frame::default()
                    .fill(USER_BUBBLE)
                    .corner_radius(PILL_ROUNDING)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.set_max_width(CONTENT_WIDTH * 0.7);
                        ui.label(RichText::new(&message.text).color(TEXT_PRIMARY));
                        ui.label(RichText::new(time).color(TEXT_SECONDARY).small());
                    });
            });
        }
        Role::Assistant => {
            egui::Frame::default()
                .fill(BG_SECONDARY)
                .corner_radius(PANEL_ROUNDING)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    match &message.payload {
                        Some(payload) => payload_card(ui, payload),
                        None => {
                            ui.label(RichText::new(&message.text).color(TEXT_PRIMARY));
                        }
                    }
                    ui.label(RichText::new(time).color(TEXT_MUTED).small());
                });
        }
    }
}

fn typing_indicator(ui: &mut egui::Ui) {
    let time = ui.input(|i| i.time);
    let dots = (time * 3.0) as usize % 3 + 1;
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new("●".repeat(dots)).color(ACCENT));
        });
    ui.ctx().request_repaint();
}
