//! Card renderers for structured answers.

use egui::{self, RichText};

use folio_types::payload::{AboutCard, ContactCard, ExperienceItem, Payload, ProjectItem, SkillGroup};

use crate::theme::*;

/// Render a payload as a card
pub fn payload_card(ui: &mut egui::Ui, payload: &Payload) {
    ui.label(RichText::new(payload.title()).color(ACCENT).strong());
    ui.add_space(4.0);
    match payload {
        Payload::About(card) => about(ui, card),
        Payload::Contact(card) => contact(ui, card),
        Payload::Experience { items } => experience(ui, items),
        Payload::Projects { items } => projects(ui, items),
        Payload::Skills { groups } => skills(ui, groups),
        Payload::Link { label, url } => {
            ui.hyperlink_to(label, url);
        }
    }
}

fn about(ui: &mut egui::Ui, card: &AboutCard) {
    ui.label(RichText::new(&card.name).color(TEXT_PRIMARY).size(18.0).strong());
    ui.label(RichText::new(&card.headline).color(TEXT_SECONDARY));
    ui.add_space(4.0);
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for (text, highlighted) in highlight_spans(&card.summary, &card.highlights) {
            let text = RichText::new(text);
            ui.label(if highlighted { text.color(ACCENT).strong() } else { text.color(TEXT_PRIMARY) });
        }
    });
}

/// One copyable contact line: label, shown value, and link target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLine<'a> {
    pub label: &'static str,
    pub value: &'a str,
    pub href: String,
}

/// Email, then phone when present. Each gets a copy button.
pub fn contact_lines(card: &ContactCard) -> Vec<ContactLine<'_>> {
    let mut lines = vec![ContactLine {
        label: "Email",
        value: &card.email,
        href: format!("mailto:{}", card.email),
    }];
    if let Some(phone) = &card.phone {
        lines.push(ContactLine {
            label: "Phone",
            value: phone,
            href: format!("tel:{}", phone),
        });
    }
    lines
}

fn contact(ui: &mut egui::Ui, card: &ContactCard) {
    for line in contact_lines(card) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(line.label).color(TEXT_MUTED));
            ui.hyperlink_to(line.value, &line.href);
            copy_button(ui, line.value);
        });
    }
    if let Some(location) = &card.location {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Location").color(TEXT_MUTED));
            ui.label(RichText::new(location).color(TEXT_PRIMARY));
        });
    }
    let links = card.social_links();
    if !links.is_empty() {
        ui.horizontal_wrapped(|ui| {
            for (label, url) in links {
                ui.hyperlink_to(label, url);
            }
        });
    }
}

fn copy_button(ui: &mut egui::Ui, text: &str) {
    if ui
        .small_button("Copy")
        .on_hover_text("Copy to clipboard")
        .clicked()
    {
        ui.ctx().copy_text(text.to_string());
    }
}

fn experience(ui: &mut egui::Ui, items: &[ExperienceItem]) {
    for item in items {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&item.role).color(TEXT_PRIMARY).strong());
            ui.label(RichText::new(format!("@ {}", item.company)).color(TEXT_SECONDARY));
        });
        ui.label(RichText::new(&item.period).color(TEXT_MUTED).small());
        for bullet in &item.bullets {
            ui.label(RichText::new(format!("• {}", bullet)).color(TEXT_PRIMARY));
        }
        ui.add_space(6.0);
    }
}

fn projects(ui: &mut egui::Ui, items: &[ProjectItem]) {
    for item in items {
        egui::Frame::default()
            .fill(BG_SURFACE)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(RichText::new(&item.title).color(TEXT_PRIMARY).strong());
                ui.label(RichText::new(&item.description).color(TEXT_SECONDARY));
                if !item.tech.is_empty() {
                    ui.label(RichText::new(item.tech.join(" · ")).color(ACCENT).small());
                }
                ui.horizontal(|ui| {
                    if let Some(github) = &item.github {
                        ui.hyperlink_to("GitHub", github);
                    }
                    if let Some(demo) = &item.demo {
                        ui.hyperlink_to("Live demo", demo);
                    }
                });
            });
        ui.add_space(4.0);
    }
}

fn skills(ui: &mut egui::Ui, groups: &[SkillGroup]) {
    for group in groups {
        ui.label(RichText::new(&group.name).color(TEXT_SECONDARY).strong());
        ui.horizontal_wrapped(|ui| {
            for skill in &group.skills {
                egui::Frame::default()
                    .fill(BG_SURFACE)
                    .corner_radius(PILL_ROUNDING)
                    .inner_margin(egui::Margin::symmetric(8, 2))
                    .show(ui, |ui| {
                        ui.label(RichText::new(skill).color(TEXT_PRIMARY).small());
                    });
            }
        });
        ui.add_space(4.0);
    }
}

/// Split `text` into spans, flagging the ones that match a highlight word.
/// Matching is case-sensitive and the earliest match wins.
pub fn highlight_spans<'a>(text: &'a str, highlights: &[String]) -> Vec<(&'a str, bool)> {
    let mut spans = Vec::new();
    let mut rest = text;
    loop {
        let next = highlights
            .iter()
            .filter(|word| !word.is_empty())
            .filter_map(|word| rest.find(word.as_str()).map(|at| (at, word.len())))
            .min_by_key(|&(at, len)| (at, std::cmp::Reverse(len)));
        let Some((at, len)) = next else {
            break;
        };
        if at > 0 {
            spans.push((&rest[..at], false));
        }
        spans.push((&rest[at..at + len], true));
        rest = &rest[at + len..];
    }
    if !rest.is_empty() {
        spans.push((rest, false));
    }
    spans
}
