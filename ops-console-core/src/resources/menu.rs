//! Sidebar menu resource
//!
//! Menus are stored flat; the two-level tree shown in the sidebar is
//! derived by the rendering layer from `parent_id`.

use serde::{Deserialize, Serialize};

use crate::resource::{Draft, Resource};

/// One menu entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub icon: String,
    /// 0 for top-level groups.
    #[serde(default)]
    pub parent_id: u64,
    #[serde(default)]
    pub permission: String,
    #[serde(default)]
    pub sort: i32,
    #[serde(default)]
    pub is_show: bool,
}

/// Form buffer for a menu entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub path: String,
    pub icon: String,
    pub parent_id: u64,
    pub permission: String,
    pub sort: i32,
    pub is_show: bool,
}

impl Default for MenuItemForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            path: String::new(),
            icon: String::new(),
            parent_id: 0,
            permission: String::new(),
            sort: 0,
            is_show: true,
        }
    }
}

impl Draft for MenuItemForm {
    fn id(&self) -> Option<u64> {
        self.id
    }

    fn missing_required(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("name");
        }
        if self.path.trim().is_empty() {
            return Some("path");
        }
        None
    }
}

impl Resource for MenuItem {
    type Form = MenuItemForm;

    const PREFIX: &'static str = "/api/admin/menus";
    const LIST_KEY: &'static str = "menus";
    const LABEL: &'static str = "menu";

    fn id(&self) -> u64 {
        self.id
    }

    fn to_form(&self) -> MenuItemForm {
        MenuItemForm {
            id: Some(self.id),
            name: self.name.clone(),
            path: self.path.clone(),
            icon: self.icon.clone(),
            parent_id: self.parent_id,
            permission: self.permission.clone(),
            sort: self.sort,
            is_show: self.is_show,
        }
    }
}
