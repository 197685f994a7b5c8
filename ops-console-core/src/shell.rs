//! Layout shell state
//!
//! Session, theme, sidebar and recent-tab state shared by every admin page.
//! Everything persists through an injected [`KeyValueStore`] so the shell
//! survives reloads the same way the browser console did via localStorage.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::traits::KeyValueStore;

/// Upper bound on remembered tabs; the oldest is evicted beyond this.
pub const MAX_RECENT_TABS: usize = 8;

mod keys {
    pub const TOKEN: &str = "token";
    pub const USER: &str = "user";
    pub const THEME: &str = "theme";
    pub const MENU_COLLAPSED: &str = "menuCollapsed";
    pub const EXPANDED_MENU_GROUP: &str = "expandedMenuGroup";
    pub const RECENT_TABS_PREFIX: &str = "recentTabs_";
}

/// The signed-in console user, as persisted under the `user` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: u64,
    pub username: String,
}

/// One entry in the recent-tabs strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentTab {
    pub path: String,
    pub title: String,
}

/// Console color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }
}

/// State of the admin layout shell.
///
/// Each field mirrors one persisted key; mutations write through to the
/// store immediately so a hard reload always comes back in the same shape.
pub struct ShellState {
    store: Arc<dyn KeyValueStore>,
    token: Option<String>,
    user: Option<SessionUser>,
    theme: Theme,
    menu_collapsed: bool,
    expanded_group: Option<String>,
    recent_tabs: Vec<RecentTab>,
}

impl ShellState {
    /// Restore shell state from the store. Corrupt entries (unparseable
    /// user JSON or tab list) fall back to signed-out / empty rather than
    /// failing startup.
    #[must_use]
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let token = store.get(keys::TOKEN);
        let user: Option<SessionUser> = store
            .get(keys::USER)
            .and_then(|raw| serde_json::from_str(&raw).ok());
        let theme = Theme::from_stored(store.get(keys::THEME).as_deref());
        let menu_collapsed = store.get(keys::MENU_COLLAPSED).as_deref() == Some("true");
        let expanded_group = store.get(keys::EXPANDED_MENU_GROUP);

        let recent_tabs = user
            .as_ref()
            .and_then(|u| store.get(&tabs_key(u.id)))
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        Self {
            store,
            token,
            user,
            theme,
            menu_collapsed,
            expanded_group,
            recent_tabs,
        }
    }

    // ===== Session =====

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Persist a fresh session and pick up that user's recent tabs.
    pub fn login(&mut self, token: String, user: SessionUser) {
        self.store.set(keys::TOKEN, &token);
        if let Ok(raw) = serde_json::to_string(&user) {
            self.store.set(keys::USER, &raw);
        }
        self.recent_tabs = self
            .store
            .get(&tabs_key(user.id))
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Drop the session. Theme and sidebar preferences survive; the user's
    /// persisted tab list stays behind for their next sign-in.
    pub fn logout(&mut self) {
        self.store.remove(keys::TOKEN);
        self.store.remove(keys::USER);
        self.token = None;
        self.user = None;
        self.recent_tabs.clear();
    }

    // ===== Theme / sidebar =====

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip light/dark and persist; returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.store.set(keys::THEME, self.theme.as_str());
        self.theme
    }

    pub fn menu_collapsed(&self) -> bool {
        self.menu_collapsed
    }

    pub fn toggle_menu_collapsed(&mut self) -> bool {
        self.menu_collapsed = !self.menu_collapsed;
        self.store.set(
            keys::MENU_COLLAPSED,
            if self.menu_collapsed { "true" } else { "false" },
        );
        self.menu_collapsed
    }

    pub fn expanded_group(&self) -> Option<&str> {
        self.expanded_group.as_deref()
    }

    /// Remember which menu group is expanded; `None` collapses all.
    pub fn set_expanded_group(&mut self, group: Option<String>) {
        match &group {
            Some(id) => self.store.set(keys::EXPANDED_MENU_GROUP, id),
            None => self.store.remove(keys::EXPANDED_MENU_GROUP),
        }
        self.expanded_group = group;
    }

    // ===== Recent tabs =====

    pub fn recent_tabs(&self) -> &[RecentTab] {
        &self.recent_tabs
    }

    /// Record a visit to `path`.
    ///
    /// Revisiting an open tab moves it to the end; a new tab is appended
    /// and the oldest evicted once the strip exceeds [`MAX_RECENT_TABS`].
    pub fn open_tab(&mut self, path: &str, title: &str) {
        if let Some(index) = self.recent_tabs.iter().position(|t| t.path == path) {
            let tab = self.recent_tabs.remove(index);
            self.recent_tabs.push(tab);
        } else {
            self.recent_tabs.push(RecentTab {
                path: path.to_owned(),
                title: title.to_owned(),
            });
            while self.recent_tabs.len() > MAX_RECENT_TABS {
                self.recent_tabs.remove(0);
            }
        }
        self.persist_tabs();
    }

    /// Close the tab at `path`; returns the neighboring tab to activate
    /// next, if any remain.
    pub fn close_tab(&mut self, path: &str) -> Option<RecentTab> {
        let index = self.recent_tabs.iter().position(|t| t.path == path)?;
        self.recent_tabs.remove(index);
        self.persist_tabs();
        if self.recent_tabs.is_empty() {
            return None;
        }
        let neighbor = index.saturating_sub(1).min(self.recent_tabs.len() - 1);
        self.recent_tabs.get(neighbor).cloned()
    }

    fn persist_tabs(&self) {
        let Some(user) = &self.user else {
            // No session, nowhere to persist; the in-memory strip still works.
            return;
        };
        if let Ok(raw) = serde_json::to_string(&self.recent_tabs) {
            self.store.set(&tabs_key(user.id), &raw);
        }
    }
}

fn tabs_key(user_id: u64) -> String {
    format!("{}{user_id}", keys::RECENT_TABS_PREFIX)
}
