//! Application error type.
//!
//! Editing records has no failure path; the errors here come from the
//! ambient parts of the program:
//!
//! - **`Settings`**: the settings file or environment could not be parsed.
//! - **`Validation`**: settings parsed but hold an unusable value.
//! - **`Record`**: a form snapshot could not be turned into a typed record.
//! - **`Json`**: a typed record could not be serialized for preview.
//! - **`Logging`**: the tracing subscriber could not be installed.
//! - **`Gui`**: the native window could not be created or crashed.

use thiserror::Error;

use crate::records::RecordError;

/// Convenience alias for results using the application error type.
pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Settings error: {0}")]
    Settings(#[from] Box<figment::Error>),

    #[error("Settings validation error: {0}")]
    Validation(String),

    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging setup error: {0}")]
    Logging(String),

    #[error("GUI error: {0}")]
    Gui(String),
}

impl From<eframe::Error> for AppError {
    fn from(err: eframe::Error) -> Self {
        AppError::Gui(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_converts() {
        let err: AppError = RecordError::MissingField("name".into()).into();
        assert_eq!(
            err.to_string(),
            "Record error: Field 'name' is missing from the snapshot"
        );
    }
}
