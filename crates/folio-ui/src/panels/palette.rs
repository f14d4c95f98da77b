//! Floating command palette.

use egui::{self, Id, Order, RichText, ScrollArea, Sense};

use folio_core::suggest::{compute_placement, AnchorRect, PaletteSignal, SuggestionEngine};
use folio_types::config::PaletteConfig;

use crate::theme::*;

/// Draw the palette next to `anchor` when it has rows to show.
/// Returns `Selected` when a row is clicked.
pub fn command_palette(
    ctx: &egui::Context,
    id: &str,
    anchor: egui::Rect,
    engine: &mut SuggestionEngine,
    config: &PaletteConfig,
) -> Option<PaletteSignal> {
    let rows = engine.visible()?.to_vec();
    let placement = compute_placement(
        AnchorRect {
            top: anchor.top(),
            bottom: anchor.bottom(),
        },
        ctx.screen_rect().height(),
        rows.len(),
        config,
    );

    let mut signal = None;
    egui::Area::new(Id::new(("command_palette", id)))
        .order(Order::Foreground)
        .fixed_pos(egui::pos2(anchor.left(), placement.top))
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(BG_SECONDARY)
                .stroke(egui::Stroke::new(1.0, BORDER))
                .corner_radius(PANEL_ROUNDING)
                .inner_margin(4.0)
                .show(ui, |ui| {
                    ui.set_width(anchor.width());
                    ScrollArea::vertical()
                        .max_height(placement.height)
                        .auto_shrink([false, true])
                        .show(ui, |ui| {
                            for (index, item) in rows.iter().enumerate() {
                                let selected = index == engine.selected_index();
                                let response = palette_row(ui, &item.label, &item.description, selected, config.row_height);
                                if selected {
                                    response.scroll_to_me(None);
                                }
                                if response.hovered() {
                                    engine.hover(index);
                                }
                                if response.clicked() {
                                    signal = Some(PaletteSignal::Selected(item.clone()));
                                }
                            }
                        });
                });
        });

    signal
}

fn palette_row(ui: &mut egui::Ui, label: &str, description: &str, selected: bool, height: f32) -> egui::Response {
    let fill = if selected { BG_SURFACE } else { BG_SECONDARY };
    let label_color = if selected { ACCENT } else { TEXT_PRIMARY };

    egui::Frame::default()
        .fill(fill)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(ui.available_width(), height - 8.0));
            ui.horizontal(|ui| {
                ui.label(RichText::new(label).color(label_color).monospace().strong());
                ui.label(RichText::new(description).color(TEXT_MUTED).small());
            });
        })
        .response
        .interact(Sense::click())
}
