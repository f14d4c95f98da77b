//! Suggestion engine behind the `/` command palette.
//!
//! Filters the static catalog against the live input, tracks a selection
//! cursor, and decides where the panel goes relative to the search bar.
//! Nothing here touches the conversation; the caller acts on the returned
//! [`PaletteSignal`].

use folio_types::{command::CommandSuggestion, config::PaletteConfig};

/// Keys the palette reacts to while it is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
}

/// What the caller should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteSignal {
    None,
    Selected(CommandSuggestion),
    Close,
}

/// Filter `catalog` by `query`, keeping catalog order.
///
/// A leading `/` is ignored and matching is case-insensitive against the
/// label, the description, and the id. An empty query keeps everything.
pub fn filter(catalog: &[CommandSuggestion], query: &str) -> Vec<CommandSuggestion> {
    let q = query.strip_prefix('/').unwrap_or(query).to_lowercase();
    if q.is_empty() {
        return catalog.to_vec();
    }
    catalog
        .iter()
        .filter(|item| {
            let label = item.label.strip_prefix('/').unwrap_or(&item.label);
            label.to_lowercase().contains(&q)
                || item.description.to_lowercase().contains(&q)
                || item.id.to_lowercase().contains(&q)
        })
        .cloned()
        .collect()
}

/// Filtered list plus selection cursor for one palette.
pub struct SuggestionEngine {
    catalog: Vec<CommandSuggestion>,
    open: bool,
    query: String,
    filtered: Vec<CommandSuggestion>,
    selected: usize,
}

impl SuggestionEngine {
    pub fn new(catalog: Vec<CommandSuggestion>) -> Self {
        let filtered = catalog.clone();
        Self {
            catalog,
            open: false,
            query: String::new(),
            filtered,
            selected: 0,
        }
    }

    /// Bring the engine in line with the panel's visibility and the input text.
    /// The cursor goes back to the first row whenever the filtered list changes.
    pub fn sync(&mut self, open: bool, query: &str) {
        self.open = open;
        if query == self.query {
            return;
        }
        self.query = query.to_string();
        let filtered = filter(&self.catalog, query);
        if filtered != self.filtered {
            self.filtered = filtered;
            self.selected = 0;
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn filtered(&self) -> &[CommandSuggestion] {
        &self.filtered
    }

    /// Rows to render, or `None` when the panel should not be drawn at all.
    pub fn visible(&self) -> Option<&[CommandSuggestion]> {
        if self.open && !self.filtered.is_empty() {
            Some(&self.filtered)
        } else {
            None
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&CommandSuggestion> {
        self.filtered.get(self.selected)
    }

    /// Move the cursor to a row, e.g. on mouse hover. Out-of-range rows are ignored.
    pub fn hover(&mut self, index: usize) {
        if index < self.filtered.len() {
            self.selected = index;
        }
    }

    /// Apply a navigation key. Ignored while the panel is closed.
    pub fn handle_key(&mut self, key: NavKey) -> PaletteSignal {
        if !self.open {
            return PaletteSignal::None;
        }
        match key {
            NavKey::ArrowDown => {
                let last = self.filtered.len().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
                PaletteSignal::None
            }
            NavKey::ArrowUp => {
                self.selected = self.selected.saturating_sub(1);
                PaletteSignal::None
            }
            NavKey::Enter => match self.selected() {
                Some(item) => PaletteSignal::Selected(item.clone()),
                None => PaletteSignal::None,
            },
            NavKey::Escape => PaletteSignal::Close,
        }
    }
}

// ─── Placement ───────────────────────────────────────────────

/// Bounding box of the element the palette attaches to, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRect {
    pub top: f32,
    pub bottom: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Below,
    Above,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub side: Side,
    pub height: f32,
    /// Top edge of the panel in viewport coordinates
    pub top: f32,
}

/// Decide where the palette goes.
///
/// Below when the full panel (up to `max_rows`) fits under the anchor,
/// otherwise above when it fits there, otherwise on whichever side has
/// more room with the height clamped to that room but never under `min_rows`.
pub fn compute_placement(
    anchor: AnchorRect,
    viewport_height: f32,
    row_count: usize,
    config: &PaletteConfig,
) -> Placement {
    let rows = row_count.clamp(1, config.max_rows.max(1));
    let wanted = rows as f32 * config.row_height;
    let floor = config.min_rows.max(1) as f32 * config.row_height;

    let space_below = (viewport_height - anchor.bottom - config.gap).max(0.0);
    let space_above = (anchor.top - config.gap).max(0.0);

    if space_below >= wanted {
        return below(anchor, wanted, config);
    }
    if space_above >= wanted {
        return above(anchor, wanted, config);
    }

    if space_below >= space_above {
        below(anchor, space_below.max(floor), config)
    } else {
        above(anchor, space_above.max(floor), config)
    }
}

fn below(anchor: AnchorRect, height: f32, config: &PaletteConfig) -> Placement {
    Placement {
        side: Side::Below,
        height,
        top: anchor.bottom + config.gap,
    }
}

fn above(anchor: AnchorRect, height: f32, config: &PaletteConfig) -> Placement {
    Placement {
        side: Side::Above,
        height,
        top: (anchor.top - config.gap - height).max(0.0),
    }
}
