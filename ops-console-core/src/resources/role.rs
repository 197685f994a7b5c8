//! Admin role resource

use serde::{Deserialize, Serialize};

use crate::resource::{Draft, Resource};

/// A role with its assigned permission ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub permissions: Vec<u64>,
}

/// Form buffer for a role.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub description: String,
    pub permissions: Vec<u64>,
}

impl Draft for RoleForm {
    fn id(&self) -> Option<u64> {
        self.id
    }

    fn missing_required(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("name");
        }
        None
    }
}

impl Resource for Role {
    type Form = RoleForm;

    const PREFIX: &'static str = "/api/admin/roles";
    const LIST_KEY: &'static str = "roles";
    const LABEL: &'static str = "role";

    fn id(&self) -> u64 {
        self.id
    }

    fn to_form(&self) -> RoleForm {
        RoleForm {
            id: Some(self.id),
            name: self.name.clone(),
            description: self.description.clone(),
            permissions: self.permissions.clone(),
        }
    }
}
