//! Navigation tree: a hidden root with one child per record kind.

use crate::schema::RecordKind;

/// A node of the navigation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeItem {
    /// Hidden root; selecting it shows the placeholder
    Root,
    /// Child node for a record kind
    Record(RecordKind),
}

impl TreeItem {
    /// Item text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TreeItem::Root => "Root",
            TreeItem::Record(kind) => kind.label(),
        }
    }

    /// Map item text back to an item. Unknown text maps to the root.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        RecordKind::ALL
            .into_iter()
            .find(|k| k.label() == label)
            .map_or(TreeItem::Root, TreeItem::Record)
    }
}

/// Two-node selector under a hidden root.
#[derive(Debug)]
pub struct NavigationTree {
    children: Vec<TreeItem>,
    selected: Option<TreeItem>,
}

impl Default for NavigationTree {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationTree {
    /// Tree with one child per record kind and nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            children: RecordKind::ALL.into_iter().map(TreeItem::Record).collect(),
            selected: None,
        }
    }

    /// Visible items, in display order.
    #[must_use]
    pub fn children(&self) -> &[TreeItem] {
        &self.children
    }

    /// Currently selected item.
    #[must_use]
    pub fn selected(&self) -> Option<TreeItem> {
        self.selected
    }

    /// Select `item`. Returns it if the selection actually changed.
    pub fn select(&mut self, item: TreeItem) -> Option<TreeItem> {
        if self.selected == Some(item) {
            return None;
        }
        self.selected = Some(item);
        Some(item)
    }

    /// Render the visible items. Returns the newly selected item, if any.
    pub fn ui(&mut self, ui: &mut egui::Ui) -> Option<TreeItem> {
        let mut clicked = None;
        for &item in &self.children {
            let is_selected = self.selected == Some(item);
            if ui.selectable_label(is_selected, item.label()).clicked() {
                clicked = Some(item);
            }
        }
        clicked.and_then(|item| self.select(item))
    }
}
