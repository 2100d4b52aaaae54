//! Layout constants and relayout signalling for the editor window.

use std::cell::Cell;
use std::rc::Rc;

use egui::{Color32, Vec2};

pub const NAV_PANEL_WIDTH: f32 = 250.0;
pub const NAV_PANEL_MIN_WIDTH: f32 = 120.0;

pub const FORM_SPACING: Vec2 = Vec2::new(8.0, 8.0);
pub const FORM_MARGIN: f32 = 10.0;
pub const ROW_SPACING: f32 = 2.0;
pub const REMOVE_BUTTON_WIDTH: f32 = 70.0;

pub mod colors {
    use super::*;

    pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);
    pub const MUTED: Color32 = Color32::from_rgb(107, 114, 128);
}

/// Shared "geometry changed" flag between a container and the widgets it owns.
///
/// Widgets call [`request`](Self::request) after a structural change. The
/// owning container drains the flag with [`take`](Self::take) once per frame
/// and asks the host for a repaint. Everything runs on the UI thread, so the
/// counter lives in an `Rc<Cell<_>>`.
#[derive(Debug, Clone, Default)]
pub struct RelayoutSignal {
    pending: Rc<Cell<u32>>,
}

impl RelayoutSignal {
    /// Create a fresh signal with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a relayout request.
    pub fn request(&self) {
        self.pending.set(self.pending.get().saturating_add(1));
    }

    /// Number of requests since the last [`take`](Self::take).
    #[must_use]
    pub fn pending(&self) -> u32 {
        self.pending.get()
    }

    /// Clear the signal, returning whether any request was pending.
    pub fn take(&self) -> bool {
        self.pending.replace(0) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let container = RelayoutSignal::new();
        let child = container.clone();

        child.request();
        child.request();
        assert_eq!(container.pending(), 2);

        assert!(container.take());
        assert_eq!(child.pending(), 0);
        assert!(!container.take());
    }

    #[test]
    fn test_nav_width_within_bounds() {
        assert!(NAV_PANEL_MIN_WIDTH < NAV_PANEL_WIDTH);
    }
}
