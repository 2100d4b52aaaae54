//! Dynamic list editor widget.
//!
//! Presents an ordered list of strings as stacked rows. Each row is a
//! growable single-line text field with a "Remove" button; an "Add Entry"
//! button sits below the rows. Rows are only ever appended or removed, so row
//! order is insertion order.

use crate::layout::{self, RelayoutSignal};

/// Stable identity of a row inside one [`DynamicListEditor`].
///
/// Ids are never reused by the editor that issued them, so a stale id can
/// never address a newer row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

#[derive(Debug)]
struct ListEntry {
    id: EntryId,
    value: String,
}

/// Structural edit emitted by the editor's buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    /// Append an empty row
    Add,
    /// Remove the row with this id
    Remove(EntryId),
}

/// Editable, ordered list of strings.
///
/// # Example
///
/// ```
/// use level_config::layout::RelayoutSignal;
/// use level_config::widgets::DynamicListEditor;
///
/// let mut editor = DynamicListEditor::with_values(RelayoutSignal::new(), ["10.0.0.1", "10.0.0.2"]);
/// let first = editor.entry_ids()[0];
/// editor.remove_entry(first);
/// editor.add_entry("10.0.0.3");
/// assert_eq!(editor.values(), vec!["10.0.0.2", "10.0.0.3"]);
/// ```
#[derive(Debug)]
pub struct DynamicListEditor {
    entries: Vec<ListEntry>,
    next_id: u64,
    relayout: RelayoutSignal,
}

impl DynamicListEditor {
    /// Create an empty editor that reports structural changes to `relayout`.
    #[must_use]
    pub fn new(relayout: RelayoutSignal) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            relayout,
        }
    }

    /// Create an editor pre-filled with `values`, in order.
    pub fn with_values<I, S>(relayout: RelayoutSignal, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut editor = Self::new(relayout);
        for value in values {
            editor.add_entry(value);
        }
        editor
    }

    /// Append a row holding `value` and return its id.
    pub fn add_entry(&mut self, value: impl Into<String>) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(ListEntry {
            id,
            value: value.into(),
        });
        tracing::debug!(entry = id.0, rows = self.entries.len(), "List entry added");
        self.relayout.request();
        id
    }

    /// Remove the row with `id`.
    ///
    /// Returns `false` and leaves the editor untouched when no such row exists.
    pub fn remove_entry(&mut self, id: EntryId) -> bool {
        let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
            tracing::warn!(entry = id.0, "Ignoring removal of unknown list entry");
            return false;
        };
        let removed = self.entries.remove(pos);
        tracing::debug!(
            entry = removed.id.0,
            rows = self.entries.len(),
            "List entry removed"
        );
        self.relayout.request();
        true
    }

    /// Apply a structural edit.
    pub fn apply(&mut self, action: ListAction) {
        match action {
            ListAction::Add => {
                self.add_entry(String::new());
            }
            ListAction::Remove(id) => {
                self.remove_entry(id);
            }
        }
    }

    /// Overwrite the text of an existing row. Returns `false` for an unknown id.
    pub fn set_value(&mut self, id: EntryId, value: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Current text of every row, in row order.
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.value.clone()).collect()
    }

    /// Row ids, in row order.
    #[must_use]
    pub fn entry_ids(&self) -> Vec<EntryId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the editor has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the rows and the add button.
    ///
    /// Button presses are collected while drawing and applied afterwards so
    /// the row list is never mutated mid-iteration. Returns true if any text
    /// or structure changed this frame.
    pub fn ui(&mut self, ui: &mut egui::Ui) -> bool {
        let mut pending: Option<ListAction> = None;
        let mut changed = false;

        ui.vertical(|ui| {
            ui.spacing_mut().item_spacing.y = layout::ROW_SPACING;

            for entry in &mut self.entries {
                let id = entry.id;
                ui.push_id(id, |ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let remove = egui::Button::new("Remove")
                            .min_size(egui::vec2(layout::REMOVE_BUTTON_WIDTH, 0.0));
                        if ui.add(remove).clicked() {
                            pending = Some(ListAction::Remove(id));
                        }
                        let text = egui::TextEdit::singleline(&mut entry.value)
                            .desired_width(f32::INFINITY);
                        changed |= ui.add(text).changed();
                    });
                });
            }

            if ui.button("Add Entry").clicked() {
                pending = Some(ListAction::Add);
            }
        });

        if let Some(action) = pending {
            self.apply(action);
            changed = true;
        }

        changed
    }
}
