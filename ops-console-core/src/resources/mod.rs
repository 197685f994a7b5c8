//! Typed records for the console's admin pages
//!
//! One module per backend resource. Each declares the record as listed by
//! the backend plus its form draft with the required fields the panel
//! checks before submitting. Where older endpoints diverged between
//! camelCase and snake_case for the same resource, the camelCase wire form
//! is the canonical one.

pub mod announcement;
pub mod channel;
pub mod dict;
pub mod menu;
pub mod note;
pub mod physical_server;
pub mod role;
pub mod server_group;
pub mod user;

pub use announcement::{Announcement, AnnouncementForm};
pub use channel::{Channel, ChannelForm};
pub use dict::{DictEntry, DictEntryForm};
pub use menu::{MenuItem, MenuItemForm};
pub use note::{Note, NoteForm};
pub use physical_server::{PhysicalServer, PhysicalServerForm};
pub use role::{Role, RoleForm};
pub use server_group::{ServerGroup, ServerGroupForm};
pub use user::{User, UserForm};
