//! Ops Console Core Library
//!
//! Frontend-agnostic state layer for a game-ops admin console. Every admin
//! page (announcements, roles, users, channels, servers, ...) is one
//! instance of the same abstraction:
//!
//! - [`CrudPanelController`] — list a paginated resource, create/edit it
//!   through a form panel, delete with confirmation
//! - [`Resource`] — per-page typed record with its REST prefix and a
//!   declared form draft
//! - capability traits ([`NotificationSink`], [`ConfirmPrompt`],
//!   [`KeyValueStore`]) injected at construction so controllers stay
//!   testable in isolation
//!
//! The rendering layer is out of scope; this crate owns state and backend
//! mediation only.

pub mod controller;
pub mod error;
pub mod resource;
pub mod resources;
pub mod shell;
pub mod traits;
pub mod types;

// Re-export common types
pub use controller::CrudPanelController;
pub use error::{ConsoleError, ConsoleResult};
pub use resource::{Draft, Resource};
pub use shell::{RecentTab, SessionUser, ShellState, Theme};
pub use traits::{ConfirmPrompt, KeyValueStore, NotificationSink};
pub use types::{ListPage, PanelMode, PanelState};
