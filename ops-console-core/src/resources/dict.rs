//! Data dictionary resource

use serde::{Deserialize, Serialize};

use crate::resource::{Draft, Resource};

/// One dictionary entry. `category` groups entries (the old console's
/// dict "type"); `key`/`value` is the pair looked up by game services.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictEntry {
    pub id: u64,
    pub category: String,
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub remark: String,
}

/// Form buffer for a dictionary entry.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictEntryForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub category: String,
    pub key: String,
    pub value: String,
    pub remark: String,
}

impl Draft for DictEntryForm {
    fn id(&self) -> Option<u64> {
        self.id
    }

    fn missing_required(&self) -> Option<&'static str> {
        if self.category.trim().is_empty() {
            return Some("category");
        }
        if self.key.trim().is_empty() {
            return Some("key");
        }
        None
    }
}

impl Resource for DictEntry {
    type Form = DictEntryForm;

    const PREFIX: &'static str = "/api/dict";
    const LIST_KEY: &'static str = "items";
    const LABEL: &'static str = "dictionary entry";

    fn id(&self) -> u64 {
        self.id
    }

    fn to_form(&self) -> DictEntryForm {
        DictEntryForm {
            id: Some(self.id),
            category: self.category.clone(),
            key: self.key.clone(),
            value: self.value.clone(),
            remark: self.remark.clone(),
        }
    }
}
