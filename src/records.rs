//! Typed Level and Transmitter records.
//!
//! Forms edit everything as text, flags and string lists. A [`RecordValues`]
//! snapshot taken from a form can be converted into a typed record with
//! `TryFrom`; integer text is parsed at that point and nowhere else.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::{FieldKind, RecordKind};

/// Failure converting a form snapshot into a typed record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Snapshot holds a {found} record, expected {expected}")]
    WrongRecord {
        expected: RecordKind,
        found: RecordKind,
    },

    #[error("Field '{0}' is missing from the snapshot")]
    MissingField(String),

    #[error("Field '{field}' should hold a {expected} value")]
    KindMismatch { field: String, expected: FieldKind },

    #[error("Field '{field}' is not an integer: '{value}'")]
    InvalidInteger { field: String, value: String },
}

/// Current value of one form control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text of a single-line field (strings and integers)
    Text(String),
    /// State of a toggle
    Flag(bool),
    /// Rows of a list editor
    List(Vec<String>),
}

/// Snapshot of a whole form, in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordValues {
    kind: RecordKind,
    fields: Vec<(&'static str, FieldValue)>,
}

impl RecordValues {
    /// Create an empty snapshot for `kind`.
    #[must_use]
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
        }
    }

    /// Append a field value.
    pub fn push(&mut self, name: &'static str, value: FieldValue) {
        self.fields.push((name, value));
    }

    /// Record kind the snapshot was taken from.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Value of `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Field values in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(n, v)| (*n, v))
    }

    fn require(&self, name: &str) -> Result<&FieldValue, RecordError> {
        self.get(name)
            .ok_or_else(|| RecordError::MissingField(name.to_string()))
    }

    fn text(&self, name: &str) -> Result<String, RecordError> {
        match self.require(name)? {
            FieldValue::Text(s) => Ok(s.clone()),
            _ => Err(mismatch(name, FieldKind::String)),
        }
    }

    fn flag(&self, name: &str) -> Result<bool, RecordError> {
        match self.require(name)? {
            FieldValue::Flag(b) => Ok(*b),
            _ => Err(mismatch(name, FieldKind::Boolean)),
        }
    }

    fn list(&self, name: &str) -> Result<Vec<String>, RecordError> {
        match self.require(name)? {
            FieldValue::List(items) => Ok(items.clone()),
            _ => Err(mismatch(name, FieldKind::StringList)),
        }
    }

    /// Empty text reads as 0; anything else must parse as a signed integer.
    fn integer(&self, name: &str) -> Result<i64, RecordError> {
        let raw = match self.require(name)? {
            FieldValue::Text(s) => s,
            _ => return Err(mismatch(name, FieldKind::Integer)),
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }
        trimmed
            .parse()
            .map_err(|_| RecordError::InvalidInteger {
                field: name.to_string(),
                value: raw.clone(),
            })
    }

    fn expect_kind(&self, expected: RecordKind) -> Result<(), RecordError> {
        if self.kind == expected {
            Ok(())
        } else {
            Err(RecordError::WrongRecord {
                expected,
                found: self.kind,
            })
        }
    }
}

fn mismatch(field: &str, expected: FieldKind) -> RecordError {
    RecordError::KindMismatch {
        field: field.to_string(),
        expected,
    }
}

/// Threshold band of a level sensor, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorBand {
    LL,
    L,
    M,
    MH,
    H,
    HH,
}

impl SensorBand {
    /// All bands, lowest first.
    pub const ALL: [SensorBand; 6] = [
        SensorBand::LL,
        SensorBand::L,
        SensorBand::M,
        SensorBand::MH,
        SensorBand::H,
        SensorBand::HH,
    ];

    /// Field name prefix used by the Level schema.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            SensorBand::LL => "LL",
            SensorBand::L => "L",
            SensorBand::M => "M",
            SensorBand::MH => "MH",
            SensorBand::H => "H",
            SensorBand::HH => "HH",
        }
    }
}

/// Sensor settings for one threshold band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandSensor {
    pub band: SensorBand,
    pub sensor_value: i64,
    pub sensor_address: Vec<String>,
    /// Contact is normally closed
    pub normally_closed: bool,
}

/// A monitored process level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRecord {
    pub name: String,
    pub primary_valve: Vec<String>,
    pub plc_addr: Vec<String>,
    pub min: i64,
    pub max: i64,
    pub forced_value: i64,
    pub force_enable: bool,
    /// One entry per [`SensorBand`], lowest first
    pub sensors: Vec<BandSensor>,
    /// Live reading; not part of the form and starts at 0
    #[serde(default)]
    pub value: i64,
}

impl LevelRecord {
    /// Sensor settings for `band`.
    #[must_use]
    pub fn sensor(&self, band: SensorBand) -> Option<&BandSensor> {
        self.sensors.iter().find(|s| s.band == band)
    }
}

impl TryFrom<&RecordValues> for LevelRecord {
    type Error = RecordError;

    fn try_from(values: &RecordValues) -> Result<Self, Self::Error> {
        values.expect_kind(RecordKind::Level)?;

        let sensors = SensorBand::ALL
            .iter()
            .map(|&band| -> Result<BandSensor, RecordError> {
                let p = band.prefix();
                Ok(BandSensor {
                    band,
                    sensor_value: values.integer(&format!("{p}_sensor_value"))?,
                    sensor_address: values.list(&format!("{p}_sensor_address"))?,
                    normally_closed: values.flag(&format!("{p}_NC"))?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: values.text("name")?,
            primary_valve: values.list("primary_valve")?,
            plc_addr: values.list("plc_addr")?,
            min: values.integer("min")?,
            max: values.integer("max")?,
            forced_value: values.integer("forced_value")?,
            force_enable: values.flag("force_enable")?,
            sensors,
            value: 0,
        })
    }
}

/// A named transmitter and its primary valves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransmitterRecord {
    pub name: String,
    pub primary_valve: Vec<String>,
}

impl TryFrom<&RecordValues> for TransmitterRecord {
    type Error = RecordError;

    fn try_from(values: &RecordValues) -> Result<Self, Self::Error> {
        values.expect_kind(RecordKind::Transmitter)?;
        Ok(Self {
            name: values.text("name")?,
            primary_valve: values.list("primary_valve")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::LEVEL_SCHEMA;

    fn blank_level() -> RecordValues {
        let mut values = RecordValues::new(RecordKind::Level);
        for field in LEVEL_SCHEMA.fields() {
            let value = match field.kind {
                FieldKind::Boolean => FieldValue::Flag(false),
                FieldKind::StringList => FieldValue::List(Vec::new()),
                FieldKind::String | FieldKind::Integer => FieldValue::Text(String::new()),
            };
            values.push(field.name, value);
        }
        values
    }

    fn set(values: &mut RecordValues, name: &str, value: FieldValue) {
        for (n, v) in &mut values.fields {
            if *n == name {
                *v = value;
                return;
            }
        }
        panic!("no field {name}");
    }

    #[test]
    fn test_blank_level_converts_with_zeroes() {
        let record = LevelRecord::try_from(&blank_level()).unwrap();
        assert_eq!(record.name, "");
        assert_eq!(record.min, 0);
        assert_eq!(record.sensors.len(), 6);
        assert_eq!(record.value, 0);
    }

    #[test]
    fn test_level_band_values() {
        let mut values = blank_level();
        set(&mut values, "name", FieldValue::Text("Tank 1".into()));
        set(&mut values, "max", FieldValue::Text(" 950 ".into()));
        set(&mut values, "MH_sensor_value", FieldValue::Text("-12".into()));
        set(
            &mut values,
            "MH_sensor_address",
            FieldValue::List(vec!["DB10.DBX2.1".into()]),
        );
        set(&mut values, "MH_NC", FieldValue::Flag(true));

        let record = LevelRecord::try_from(&values).unwrap();
        assert_eq!(record.name, "Tank 1");
        assert_eq!(record.max, 950);

        let mh = record.sensor(SensorBand::MH).unwrap();
        assert_eq!(mh.sensor_value, -12);
        assert_eq!(mh.sensor_address, vec!["DB10.DBX2.1"]);
        assert!(mh.normally_closed);
        assert!(!record.sensor(SensorBand::LL).unwrap().normally_closed);
    }

    #[test]
    fn test_invalid_integer_reports_field() {
        let mut values = blank_level();
        set(&mut values, "forced_value", FieldValue::Text("12x".into()));

        let err = LevelRecord::try_from(&values).unwrap_err();
        assert_eq!(
            err,
            RecordError::InvalidInteger {
                field: "forced_value".into(),
                value: "12x".into()
            }
        );
    }

    #[test]
    fn test_wrong_kind_and_missing_field() {
        let transmitter = RecordValues::new(RecordKind::Transmitter);
        assert!(matches!(
            LevelRecord::try_from(&transmitter),
            Err(RecordError::WrongRecord { .. })
        ));
        assert_eq!(
            TransmitterRecord::try_from(&transmitter),
            Err(RecordError::MissingField("name".into()))
        );
    }

    #[test]
    fn test_kind_mismatch() {
        let mut values = RecordValues::new(RecordKind::Transmitter);
        values.push("name", FieldValue::Flag(true));
        values.push("primary_valve", FieldValue::List(vec![]));

        assert_eq!(
            TransmitterRecord::try_from(&values),
            Err(RecordError::KindMismatch {
                field: "name".into(),
                expected: FieldKind::String
            })
        );
    }

    #[test]
    fn test_level_json_shape() {
        let record = LevelRecord::try_from(&blank_level()).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["sensors"][0]["band"], "LL");
        assert_eq!(json["sensors"][5]["band"], "HH");
        assert_eq!(json["force_enable"], false);
    }
}
