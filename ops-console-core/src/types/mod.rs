//! Shared state types

pub mod page;
pub mod panel;

pub use page::{total_pages, ListPage};
pub use panel::{PanelMode, PanelState};
