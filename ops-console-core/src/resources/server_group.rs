//! Server group resource

use serde::{Deserialize, Serialize};

use crate::resource::{Draft, Resource};

/// A named group of physical servers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerGroup {
    pub id: u64,
    pub name: String,
    /// 1 = active, 0 = disabled.
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub server_ids: Vec<u64>,
}

/// Form buffer for a server group.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerGroupForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub status: i32,
    pub server_ids: Vec<u64>,
}

impl Default for ServerGroupForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            status: 1,
            server_ids: Vec::new(),
        }
    }
}

impl Draft for ServerGroupForm {
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

impl Resource for ServerGroup {
    type Form = ServerGroupForm;

    const PREFIX: &'static str = "/api/server_group";
    const LIST_KEY: &'static str = "groups";
    const LABEL: &'static str = "server group";

    fn id(&self) -> u64 {
        self.id
    }

    fn to_form(&self) -> ServerGroupForm {
        ServerGroupForm {
            id: Some(self.id),
            name: self.name.clone(),
            status: self.status,
            server_ids: self.server_ids.clone(),
        }
    }
}
