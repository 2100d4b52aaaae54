//! Static record schemas.
//!
//! Each editable record type is described by an ordered list of
//! [`FieldDescriptor`]s. The form builder walks a schema in order and picks a
//! control for every field based on its [`FieldKind`]. Schemas are plain
//! `static` data and never change at runtime.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Primitive kind of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text.
    String,
    /// Integer, edited as free text.
    Integer,
    /// On/off flag.
    Boolean,
    /// Ordered list of strings.
    StringList,
}

impl FieldKind {
    /// Short lowercase name used in error messages and hints.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::StringList => "string list",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Name and kind of a single record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name, unique within its schema
    pub name: &'static str,
    /// Primitive kind
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Create a descriptor.
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// The record types the editor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// Monitored process level with six threshold bands
    Level,
    /// Named instrument with a primary valve list
    Transmitter,
}

impl RecordKind {
    /// All record kinds, in navigation order.
    pub const ALL: [RecordKind; 2] = [RecordKind::Level, RecordKind::Transmitter];

    /// Display label, also used as the navigation tree item text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Level => "Level",
            RecordKind::Transmitter => "Transmitter",
        }
    }

    /// Schema describing this record kind.
    #[must_use]
    pub fn schema(self) -> &'static RecordSchema {
        match self {
            RecordKind::Level => &LEVEL_SCHEMA,
            RecordKind::Transmitter => &TRANSMITTER_SCHEMA,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered field list for one record kind.
#[derive(Debug)]
pub struct RecordSchema {
    kind: RecordKind,
    fields: &'static [FieldDescriptor],
}

impl RecordSchema {
    /// Record kind this schema describes.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Fields in display order.
    #[must_use]
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in display order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|f| f.name)
    }
}

const LEVEL_FIELDS: [FieldDescriptor; 25] = [
    FieldDescriptor::new("name", FieldKind::String),
    FieldDescriptor::new("primary_valve", FieldKind::StringList),
    FieldDescriptor::new("plc_addr", FieldKind::StringList),
    FieldDescriptor::new("min", FieldKind::Integer),
    FieldDescriptor::new("max", FieldKind::Integer),
    FieldDescriptor::new("forced_value", FieldKind::Integer),
    FieldDescriptor::new("force_enable", FieldKind::Boolean),
    FieldDescriptor::new("LL_sensor_value", FieldKind::Integer),
    FieldDescriptor::new("LL_sensor_address", FieldKind::StringList),
    FieldDescriptor::new("LL_NC", FieldKind::Boolean),
    FieldDescriptor::new("L_sensor_value", FieldKind::Integer),
    FieldDescriptor::new("L_sensor_address", FieldKind::StringList),
    FieldDescriptor::new("L_NC", FieldKind::Boolean),
    FieldDescriptor::new("M_sensor_value", FieldKind::Integer),
    FieldDescriptor::new("M_sensor_address", FieldKind::StringList),
    FieldDescriptor::new("M_NC", FieldKind::Boolean),
    FieldDescriptor::new("MH_sensor_value", FieldKind::Integer),
    FieldDescriptor::new("MH_sensor_address", FieldKind::StringList),
    FieldDescriptor::new("MH_NC", FieldKind::Boolean),
    FieldDescriptor::new("H_sensor_value", FieldKind::Integer),
    FieldDescriptor::new("H_sensor_address", FieldKind::StringList),
    FieldDescriptor::new("H_NC", FieldKind::Boolean),
    FieldDescriptor::new("HH_sensor_value", FieldKind::Integer),
    FieldDescriptor::new("HH_sensor_address", FieldKind::StringList),
    FieldDescriptor::new("HH_NC", FieldKind::Boolean),
];

const TRANSMITTER_FIELDS: [FieldDescriptor; 2] = [
    FieldDescriptor::new("name", FieldKind::String),
    FieldDescriptor::new("primary_valve", FieldKind::StringList),
];

/// Schema for [`RecordKind::Level`].
pub static LEVEL_SCHEMA: RecordSchema = RecordSchema {
    kind: RecordKind::Level,
    fields: &LEVEL_FIELDS,
};

/// Schema for [`RecordKind::Transmitter`].
pub static TRANSMITTER_SCHEMA: RecordSchema = RecordSchema {
    kind: RecordKind::Transmitter,
    fields: &TRANSMITTER_FIELDS,
};
