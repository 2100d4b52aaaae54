//! Reusable editing widgets.
//!
//! The list editor and the schema-driven record form are independent of the
//! window layout and can be embedded in any container.

pub mod list_editor;
pub mod record_form;

pub use list_editor::{DynamicListEditor, EntryId, ListAction};
pub use record_form::{
    ControlId, FieldControl, FormControl, FormControlSet, RecordFormBuilder,
};
