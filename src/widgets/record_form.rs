//! Schema-driven record form.
//!
//! [`RecordFormBuilder`] turns a [`RecordSchema`] into a [`FormControlSet`]:
//! one control per field, chosen from the field kind through a single
//! dispatch table. The set renders as a two-column (label, control) grid.

use crate::layout::{self, RelayoutSignal};
use crate::records::{FieldValue, RecordValues};
use crate::schema::{FieldDescriptor, FieldKind, RecordSchema};
use crate::widgets::DynamicListEditor;

/// Identity of one control instance.
///
/// Issued by a [`RecordFormBuilder`] and never reused, so controls from
/// different builds can always be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(u64);

/// Input control backing one field.
#[derive(Debug)]
pub enum FormControl {
    /// Checkbox
    Toggle(bool),
    /// Single-line text input
    Text(String),
    /// Dynamic list of text rows
    List(DynamicListEditor),
}

impl FormControl {
    /// Whether this control is the one `kind` calls for.
    #[must_use]
    pub fn matches(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (FormControl::Toggle(_), FieldKind::Boolean)
                | (FormControl::List(_), FieldKind::StringList)
                | (
                    FormControl::Text(_),
                    FieldKind::String | FieldKind::Integer
                )
        )
    }

    /// Current value of the control.
    #[must_use]
    pub fn value(&self) -> FieldValue {
        match self {
            FormControl::Toggle(on) => FieldValue::Flag(*on),
            FormControl::Text(text) => FieldValue::Text(text.clone()),
            FormControl::List(editor) => FieldValue::List(editor.values()),
        }
    }
}

type ControlFactory = fn(&RelayoutSignal) -> FormControl;

/// Kind to control constructor. Lists start empty; there is no backing store.
fn control_factory(kind: FieldKind) -> ControlFactory {
    match kind {
        FieldKind::Boolean => |_: &RelayoutSignal| FormControl::Toggle(false),
        FieldKind::StringList => |relayout: &RelayoutSignal| {
            FormControl::List(DynamicListEditor::new(relayout.clone()))
        },
        FieldKind::String | FieldKind::Integer => {
            |_: &RelayoutSignal| FormControl::Text(String::new())
        }
    }
}

/// A live control bound to its field.
#[derive(Debug)]
pub struct FieldControl {
    id: ControlId,
    descriptor: FieldDescriptor,
    control: FormControl,
}

impl FieldControl {
    /// Instance identity.
    #[must_use]
    pub fn id(&self) -> ControlId {
        self.id
    }

    /// Field this control edits.
    #[must_use]
    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    /// The control itself.
    #[must_use]
    pub fn control(&self) -> &FormControl {
        &self.control
    }

    /// Mutable access to the control.
    pub fn control_mut(&mut self) -> &mut FormControl {
        &mut self.control
    }

    fn ui(&mut self, ui: &mut egui::Ui) -> bool {
        let name = self.descriptor.name;
        match &mut self.control {
            FormControl::Toggle(on) => ui.checkbox(on, "").changed(),
            FormControl::Text(text) => {
                let mut edit = egui::TextEdit::singleline(text).desired_width(f32::INFINITY);
                if self.descriptor.kind == FieldKind::Integer {
                    edit = edit.hint_text("integer");
                }
                ui.add(edit).changed()
            }
            FormControl::List(editor) => ui.push_id(name, |ui| editor.ui(ui)).inner,
        }
    }
}

/// Field name to live control, in schema order.
#[derive(Debug)]
pub struct FormControlSet {
    schema: &'static RecordSchema,
    controls: Vec<FieldControl>,
}

impl FormControlSet {
    /// Schema the set was built from.
    #[must_use]
    pub fn schema(&self) -> &'static RecordSchema {
        self.schema
    }

    /// Number of controls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether the set has no controls.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Control for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldControl> {
        self.controls.iter().find(|c| c.descriptor.name == name)
    }

    /// Mutable control for `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldControl> {
        self.controls.iter_mut().find(|c| c.descriptor.name == name)
    }

    /// Controls in schema order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldControl> {
        self.controls.iter()
    }

    /// Field names in schema order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.controls.iter().map(|c| c.descriptor.name)
    }

    /// Identity of every control instance.
    #[must_use]
    pub fn control_ids(&self) -> Vec<ControlId> {
        self.controls.iter().map(|c| c.id).collect()
    }

    /// Snapshot of every control's current value.
    #[must_use]
    pub fn values(&self) -> RecordValues {
        let mut values = RecordValues::new(self.schema.kind());
        for c in &self.controls {
            values.push(c.descriptor.name, c.control.value());
        }
        values
    }

    /// Render the two-column form. Returns true if any control changed.
    pub fn ui(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;
        egui::Grid::new(("record_form", self.schema.kind()))
            .num_columns(2)
            .spacing(layout::FORM_SPACING)
            .striped(true)
            .show(ui, |ui| {
                for control in &mut self.controls {
                    ui.label(control.descriptor.name)
                        .on_hover_text(control.descriptor.kind.label());
                    changed |= control.ui(ui);
                    ui.end_row();
                }
            });
        changed
    }
}

/// Builds a [`FormControlSet`] for a schema.
#[derive(Debug)]
pub struct RecordFormBuilder {
    next_control_id: u64,
    relayout: RelayoutSignal,
}

impl RecordFormBuilder {
    /// Create a builder whose list editors report to `relayout`.
    #[must_use]
    pub fn new(relayout: RelayoutSignal) -> Self {
        Self {
            next_control_id: 0,
            relayout,
        }
    }

    /// Instantiate one fresh control per field, in schema order.
    pub fn build(&mut self, schema: &'static RecordSchema) -> FormControlSet {
        let controls = schema
            .fields()
            .iter()
            .map(|descriptor| {
                let id = ControlId(self.next_control_id);
                self.next_control_id += 1;
                FieldControl {
                    id,
                    descriptor: *descriptor,
                    control: control_factory(descriptor.kind)(&self.relayout),
                }
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            record = %schema.kind(),
            controls = controls.len(),
            "Built record form"
        );
        self.relayout.request();

        FormControlSet { schema, controls }
    }
}
