//! Physical game-server resource

use serde::{Deserialize, Serialize};

use crate::resource::{Draft, Resource};

/// A physical server registered with the console.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalServer {
    pub id: u64,
    /// Logical server id shown to players.
    #[serde(default)]
    pub server_id: u64,
    pub name: String,
    #[serde(default)]
    pub host: String,
    /// 1 = normal, 2 = maintenance, 3 = retired.
    #[serde(default)]
    pub server_status: i32,
    #[serde(default)]
    pub available: bool,
    /// Target server id after a merge, 0 when not merged.
    #[serde(default)]
    pub merge_id: u64,
}

/// Form buffer for a physical server.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalServerForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub server_id: u64,
    pub name: String,
    pub host: String,
    pub server_status: i32,
    pub available: bool,
    pub merge_id: u64,
}

impl Default for PhysicalServerForm {
    fn default() -> Self {
        Self {
            id: None,
            server_id: 0,
            name: String::new(),
            host: String::new(),
            server_status: 1,
            available: true,
            merge_id: 0,
        }
    }
}

impl Draft for PhysicalServerForm {
    fn id(&self) -> Option<u64> {
        self.id
    }

    fn missing_required(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("name");
        }
        if self.host.trim().is_empty() {
            return Some("host");
        }
        None
    }
}

impl Resource for PhysicalServer {
    type Form = PhysicalServerForm;

    const PREFIX: &'static str = "/api/admin/physical_servers";
    const LIST_KEY: &'static str = "servers";
    const LABEL: &'static str = "physical server";

    fn id(&self) -> u64 {
        self.id
    }

    fn to_form(&self) -> PhysicalServerForm {
        PhysicalServerForm {
            id: Some(self.id),
            server_id: self.server_id,
            name: self.name.clone(),
            host: self.host.clone(),
            server_status: self.server_status,
            available: self.available,
            merge_id: self.merge_id,
        }
    }
}
