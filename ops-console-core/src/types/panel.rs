//! Create/edit panel state

/// What an open panel is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    /// Drafting a new record.
    Create,
    /// Editing a copy of an existing record.
    Edit,
}

/// Visibility and mode of a controller's form panel.
///
/// Transitions are `Closed → Create → Closed` and `Closed → Edit → Closed`;
/// a controller never has two panels open at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    /// Whether the panel is showing.
    pub visible: bool,
    /// Create or edit; meaningless while closed.
    pub mode: PanelMode,
    /// Title shown in the panel header.
    pub title: String,
}

impl PanelState {
    /// The closed state.
    #[must_use]
    pub fn closed() -> Self {
        Self {
            visible: false,
            mode: PanelMode::Create,
            title: String::new(),
        }
    }

    /// An open panel with the given mode and title.
    #[must_use]
    pub fn open(mode: PanelMode, title: impl Into<String>) -> Self {
        Self {
            visible: true,
            mode,
            title: title.into(),
        }
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::closed()
    }
}
