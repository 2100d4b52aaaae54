//! # Level Config
//!
//! Desktop editor for industrial instrumentation records: "Level" entities
//! with six threshold bands and "Transmitter" entities with their primary
//! valves. A navigation tree on the left selects the record type; the right
//! side shows a form generated from the record schema.
//!
//! ## Crate Structure
//!
//! - **`schema`**: static field lists for each record type.
//! - **`widgets`**: the dynamic list editor and the schema-driven record form.
//! - **`panels`**: the navigation tree and the detail region.
//! - **`app`**: `MasterDetailShell`, the `eframe` application tying the panels together.
//! - **`records`**: typed records built from a form snapshot.
//! - **`config`**: layered settings (defaults, TOML file, environment).
//! - **`logging`**: `tracing` subscriber setup.
//! - **`error`**: the `AppError` type.
//!
//! Edits live only as long as the window; nothing is saved.

pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod panels;
pub mod records;
pub mod schema;
pub mod widgets;

pub use app::{MasterDetailShell, ShellState};
pub use error::{AppError, AppResult};
