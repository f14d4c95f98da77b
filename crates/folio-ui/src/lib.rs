//! egui views: landing page, chat panel, command palette, and payload cards.

pub mod state;
pub mod theme;
pub mod cards;
pub mod panels;

#[cfg(test)]
mod tests;
