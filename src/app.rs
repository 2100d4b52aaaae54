//! Master/detail shell: the top-level window.
//!
//! The navigation tree sits in a resizable left pane; the detail region fills
//! the rest of the window inside a vertical scroll area. Every selection
//! change clears the detail region before rendering the new state, so no
//! control or edit survives navigation.

use crate::config::{AppSettings, WindowSettings};
use crate::error::AppResult;
use crate::layout::{self, RelayoutSignal};
use crate::panels::{DetailRegion, NavigationTree, TreeItem};
use crate::schema::RecordKind;
use crate::widgets::RecordFormBuilder;

/// What the detail region is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    /// Placeholder message
    NoSelection,
    /// Level form
    ShowingLevelForm,
    /// Transmitter form
    ShowingTransmitterForm,
}

impl ShellState {
    fn for_item(item: TreeItem) -> Self {
        match item {
            TreeItem::Record(RecordKind::Level) => ShellState::ShowingLevelForm,
            TreeItem::Record(RecordKind::Transmitter) => ShellState::ShowingTransmitterForm,
            TreeItem::Root => ShellState::NoSelection,
        }
    }
}

/// Top-level window state.
pub struct MasterDetailShell {
    window: WindowSettings,
    tree: NavigationTree,
    detail: DetailRegion,
    builder: RecordFormBuilder,
    relayout: RelayoutSignal,
    state: ShellState,
}

impl MasterDetailShell {
    /// Create the shell showing the placeholder.
    #[must_use]
    pub fn new(settings: &AppSettings) -> Self {
        let relayout = RelayoutSignal::new();
        let mut detail = DetailRegion::new();
        detail.show_placeholder();

        Self {
            window: settings.window.clone(),
            tree: NavigationTree::new(),
            detail,
            builder: RecordFormBuilder::new(relayout.clone()),
            relayout,
            state: ShellState::NoSelection,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ShellState {
        self.state
    }

    /// Navigation tree.
    #[must_use]
    pub fn tree(&self) -> &NavigationTree {
        &self.tree
    }

    /// Detail region.
    #[must_use]
    pub fn detail(&self) -> &DetailRegion {
        &self.detail
    }

    /// Mutable detail region, for editing the displayed form.
    pub fn detail_mut(&mut self) -> &mut DetailRegion {
        &mut self.detail
    }

    /// Shared relayout signal for everything inside the detail region.
    #[must_use]
    pub fn relayout(&self) -> &RelayoutSignal {
        &self.relayout
    }

    /// Handle a tree selection: clear the detail region, then render for `item`.
    pub fn select(&mut self, item: TreeItem) {
        self.tree.select(item);
        self.detail.clear();

        let next = ShellState::for_item(item);
        match item {
            TreeItem::Record(kind) => self.detail.show_form(&mut self.builder, kind.schema()),
            TreeItem::Root => self.detail.show_placeholder(),
        }

        tracing::info!(from = ?self.state, to = ?next, item = item.label(), "Selection changed");
        self.state = next;
        self.relayout.request();
    }

    /// Handle a selection by item text. Unknown text shows the placeholder.
    pub fn select_label(&mut self, label: &str) {
        self.select(TreeItem::from_label(label));
    }

    fn nav_ui(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("navigation")
            .resizable(true)
            .default_width(self.window.nav_width)
            .min_width(layout::NAV_PANEL_MIN_WIDTH)
            .show(ctx, |ui| {
                if let Some(item) = self.tree.ui(ui) {
                    self.select(item);
                }
            });
    }

    fn detail_ui(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| self.detail.ui(ui));
        });
    }
}

impl eframe::App for MasterDetailShell {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.nav_ui(ctx);
        self.detail_ui(ctx);

        // Rows added or removed this frame change geometry of the next one
        if self.relayout.take() {
            ctx.request_repaint();
        }
    }
}

/// Native window options for `window`.
#[must_use]
pub fn native_options(window: &WindowSettings) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&window.title)
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([window.nav_width * 2.0, window.height / 2.0]),
        centered: window.centered,
        ..Default::default()
    }
}

/// Open the main window and block until it is closed.
pub fn run(settings: &AppSettings) -> AppResult<()> {
    let options = native_options(&settings.window);
    let shell = MasterDetailShell::new(settings);

    tracing::info!(
        title = %settings.window.title,
        width = settings.window.width,
        height = settings.window.height,
        "Opening configuration window"
    );

    eframe::run_native(
        &settings.window.title,
        options,
        Box::new(|_cc| Ok(Box::new(shell))),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_options_follow_settings() {
        let window = WindowSettings::default();
        let options = native_options(&window);

        assert_eq!(
            options.viewport.title.as_deref(),
            Some("Transmitter and Level Configuration")
        );
        assert_eq!(options.viewport.inner_size, Some(egui::vec2(800.0, 600.0)));
        assert!(options.centered);
    }

    #[test]
    fn test_min_size_within_valid_window() {
        let mut settings = AppSettings::default();
        settings.window.width = 500.0;
        assert!(settings.validate().is_ok());

        let options = native_options(&settings.window);
        let min = options.viewport.min_inner_size.unwrap_or_default();
        assert!(min.x <= settings.window.width);
        assert!(min.y <= settings.window.height);
    }

    #[test]
    fn test_state_for_item() {
        assert_eq!(
            ShellState::for_item(TreeItem::Record(RecordKind::Level)),
            ShellState::ShowingLevelForm
        );
        assert_eq!(ShellState::for_item(TreeItem::Root), ShellState::NoSelection);
    }
}
