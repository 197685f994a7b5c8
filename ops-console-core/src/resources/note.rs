//! Operations note resource

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resource::{Draft, Resource};

/// A free-form operations note.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category_id: Option<u64>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Form buffer for a note.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
}

impl Draft for NoteForm {
    fn id(&self) -> Option<u64> {
        self.id
    }

    fn missing_required(&self) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            return Some("title");
        }
        None
    }
}

impl Resource for Note {
    type Form = NoteForm;

    const PREFIX: &'static str = "/api/note";
    const LIST_KEY: &'static str = "notes";
    const LABEL: &'static str = "note";

    fn id(&self) -> u64 {
        self.id
    }

    fn to_form(&self) -> NoteForm {
        NoteForm {
            id: Some(self.id),
            title: self.title.clone(),
            content: self.content.clone(),
            category_id: self.category_id,
        }
    }
}
