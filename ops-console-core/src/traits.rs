//! Capability traits injected into controllers
//!
//! Notification, confirmation and persistence are modeled as injected
//! capabilities rather than process-wide globals so every controller can
//! be driven in isolation.

/// Transient toast/alert surface.
///
/// Implementations render however the host UI likes; controllers only
/// distinguish success from failure.
pub trait NotificationSink: Send + Sync {
    /// Surface the outcome of a completed operation.
    fn success(&self, message: &str);
    /// Surface a terminal error. The message is already user-readable.
    fn error(&self, message: &str);
}

/// Synchronous confirmation step gating destructive operations.
///
/// `remove` asks before any network call fires; a declined prompt is a
/// complete no-op.
pub trait ConfirmPrompt: Send + Sync {
    /// Returns `true` when the user confirmed the action.
    fn confirm(&self, message: &str) -> bool;
}

/// Browser-local key-value persistence (the `localStorage` analogue).
///
/// Used by the layout shell for session, theme and recent-tab state.
/// Writes are best-effort; there is nothing to report to the user when
/// the store misbehaves.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when absent.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value, overwriting any previous one.
    fn set(&self, key: &str, value: &str);
    /// Remove a value if present.
    fn remove(&self, key: &str);
}
