//! Window panels: the navigation tree on the left and the detail region on the right.

pub mod detail;
pub mod navigation;

pub use detail::{record_preview, DetailContent, DetailRegion, PLACEHOLDER_TEXT};
pub use navigation::{NavigationTree, TreeItem};
