//! Detail region: the scrollable right-hand side of the window.
//!
//! Holds either the placeholder message or one record form. Whatever it holds
//! is dropped by [`DetailRegion::clear`] before anything new is shown.

use crate::error::AppResult;
use crate::layout;
use crate::records::{LevelRecord, RecordValues, TransmitterRecord};
use crate::schema::{RecordKind, RecordSchema};
use crate::widgets::{FormControlSet, RecordFormBuilder};

/// Text shown while nothing is selected.
pub const PLACEHOLDER_TEXT: &str = "Select an option from the left panel.";

/// What the region currently displays.
#[derive(Debug)]
pub enum DetailContent {
    /// Placeholder message
    Placeholder,
    /// A record form
    Form(FormControlSet),
}

/// Container for the detail view.
#[derive(Debug, Default)]
pub struct DetailRegion {
    content: Option<DetailContent>,
}

impl DetailRegion {
    /// Empty region.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content, `None` right after [`clear`](Self::clear).
    #[must_use]
    pub fn content(&self) -> Option<&DetailContent> {
        self.content.as_ref()
    }

    /// Displayed form, if any.
    #[must_use]
    pub fn form(&self) -> Option<&FormControlSet> {
        match &self.content {
            Some(DetailContent::Form(set)) => Some(set),
            _ => None,
        }
    }

    /// Mutable access to the displayed form.
    pub fn form_mut(&mut self) -> Option<&mut FormControlSet> {
        match &mut self.content {
            Some(DetailContent::Form(set)) => Some(set),
            _ => None,
        }
    }

    /// Drop whatever is displayed.
    pub fn clear(&mut self) {
        if let Some(DetailContent::Form(set)) = self.content.take() {
            tracing::debug!(
                record = %set.schema().kind(),
                controls = set.len(),
                "Released record form"
            );
        }
    }

    /// Clear and show the placeholder.
    pub fn show_placeholder(&mut self) {
        self.clear();
        self.content = Some(DetailContent::Placeholder);
    }

    /// Clear and show a freshly built form for `schema`.
    pub fn show_form(&mut self, builder: &mut RecordFormBuilder, schema: &'static RecordSchema) {
        self.clear();
        self.content = Some(DetailContent::Form(builder.build(schema)));
    }

    /// Render the region contents.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        match &mut self.content {
            None => {}
            Some(DetailContent::Placeholder) => {
                ui.add_space(layout::FORM_MARGIN);
                ui.label(egui::RichText::new(PLACEHOLDER_TEXT).color(layout::colors::MUTED));
            }
            Some(DetailContent::Form(set)) => {
                egui::Frame::new()
                    .inner_margin(layout::FORM_MARGIN)
                    .show(ui, |ui| {
                        ui.heading(set.schema().kind().label());
                        ui.separator();
                        set.ui(ui);
                        ui.add_space(layout::FORM_MARGIN);
                        render_preview(ui, set);
                    });
            }
        }
    }
}

/// Typed record for a form snapshot, as pretty JSON.
pub fn record_preview(values: &RecordValues) -> AppResult<String> {
    let json = match values.kind() {
        RecordKind::Level => serde_json::to_string_pretty(&LevelRecord::try_from(values)?)?,
        RecordKind::Transmitter => {
            serde_json::to_string_pretty(&TransmitterRecord::try_from(values)?)?
        }
    };
    Ok(json)
}

/// The snapshot is only taken while the section is open.
fn render_preview(ui: &mut egui::Ui, set: &FormControlSet) {
    egui::CollapsingHeader::new("Record preview")
        .id_salt(("record_preview", set.schema().kind()))
        .default_open(false)
        .show(ui, |ui| match record_preview(&set.values()) {
            Ok(json) => {
                ui.label(egui::RichText::new(json).monospace());
            }
            Err(e) => {
                ui.colored_label(layout::colors::ERROR, e.to_string());
            }
        });
}
