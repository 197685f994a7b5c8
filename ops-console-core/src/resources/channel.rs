//! Distribution channel resource

use serde::{Deserialize, Serialize};

use crate::resource::{Draft, Resource};

/// A game distribution channel with its CDN and login endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub server_list: String,
    #[serde(default)]
    pub cdn_version: String,
    #[serde(default)]
    pub cdn_url: String,
    #[serde(default)]
    pub open_patch: String,
    #[serde(default)]
    pub login_api: String,
    #[serde(default)]
    pub pkg_version: String,
}

/// Form buffer for a channel.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub server_list: String,
    pub cdn_version: String,
    pub cdn_url: String,
    pub open_patch: String,
    pub login_api: String,
    pub pkg_version: String,
}

impl Draft for ChannelForm {
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

impl Resource for Channel {
    type Form = ChannelForm;

    const PREFIX: &'static str = "/api/channel";
    const LIST_KEY: &'static str = "channels";
    const LABEL: &'static str = "channel";

    fn id(&self) -> u64 {
        self.id
    }

    fn to_form(&self) -> ChannelForm {
        ChannelForm {
            id: Some(self.id),
            name: self.name.clone(),
            server_list: self.server_list.clone(),
            cdn_version: self.cdn_version.clone(),
            cdn_url: self.cdn_url.clone(),
            open_patch: self.open_patch.clone(),
            login_api: self.login_api.clone(),
            pkg_version: self.pkg_version.clone(),
        }
    }
}
