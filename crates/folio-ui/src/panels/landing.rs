//! Landing page: hero and the search bar that opens the chat.

use egui::{self, RichText};

use folio_types::config::PaletteConfig;
use folio_types::payload::AboutCard;

use crate::panels::search::{search_bar, SearchAction};
use crate::state::UiState;
use crate::theme::*;

/// Render the landing page. Returns the bar's actions for
/// [`UiState::apply_landing`].
pub fn landing_panel(
    ui: &mut egui::Ui,
    about: &AboutCard,
    state: &mut UiState,
    palette: &PaletteConfig,
) -> Vec<SearchAction> {
    let mut actions = Vec::new();

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);
        ui.heading(
            RichText::new(format!("Hi, I'm {}", about.name))
                .color(TEXT_PRIMARY)
                .size(32.0)
                .strong(),
        );
        ui.label(RichText::new(&about.headline).color(TEXT_SECONDARY).size(18.0));
        ui.add_space(24.0);

        ui.allocate_ui(egui::vec2(CONTENT_WIDTH.min(ui.available_width()), 40.0), |ui| {
            actions = search_bar(
                ui,
                "landing_input",
                &state.landing_input,
                state.landing_palette_open,
                true,
                &mut state.landing_palette,
                palette,
            );
        });

        ui.add_space(12.0);
        ui.label(RichText::new("Try /projects, /skills or /contact").color(TEXT_MUTED).small());
    });

    actions
}
