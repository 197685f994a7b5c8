//! In-game announcement resource

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::resource::{Draft, Resource};

/// An announcement as listed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// 1 = published, 0 = hidden.
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Form buffer for creating or editing an announcement.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub content: String,
    pub status: i32,
}

impl Default for AnnouncementForm {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            content: String::new(),
            status: 1,
        }
    }
}

impl Draft for AnnouncementForm {
    fn id(&self) -> Option<u64> {
        self.id
    }

    fn missing_required(&self) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            return Some("title");
        }
        if self.content.trim().is_empty() {
            return Some("content");
        }
        None
    }
}

impl Resource for Announcement {
    type Form = AnnouncementForm;

    const PREFIX: &'static str = "/api/announcement";
    const LIST_KEY: &'static str = "announcements";
    const LABEL: &'static str = "announcement";

    fn id(&self) -> u64 {
        self.id
    }

    fn to_form(&self) -> AnnouncementForm {
        AnnouncementForm {
            id: Some(self.id),
            title: self.title.clone(),
            content: self.content.clone(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_checked_in_order() {
        let mut form = AnnouncementForm::default();
        assert_eq!(form.missing_required(), Some("title"));
        form.title = "maintenance window".into();
        assert_eq!(form.missing_required(), Some("content"));
        form.content = "servers down at 02:00".into();
        assert_eq!(form.missing_required(), None);
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let form = AnnouncementForm {
            title: "   ".into(),
            ..AnnouncementForm::default()
        };
        assert_eq!(form.missing_required(), Some("title"));
    }

    #[test]
    fn create_form_serializes_without_id() {
        let form = AnnouncementForm::default();
        let value = serde_json::to_value(&form).expect("serialize");
        assert!(value.get("id").is_none());
    }
}
