//! Resource and form-draft contracts

use serde::de::DeserializeOwned;
use serde::Serialize;

/// In-progress, not-yet-saved copy of a record.
///
/// A draft is seeded either from [`Default`] (create) or from a shallow copy
/// of a listed record (edit); it is never shared by reference with the
/// list's copy, so mutating it cannot touch the list until a successful save
/// reloads the page.
pub trait Draft: Clone + Default + Serialize + Send + Sync + 'static {
    /// Id of the record being edited; `None` while creating.
    fn id(&self) -> Option<u64>;

    /// First declared required field that is empty, if any.
    ///
    /// This is the only client-side validation the console performs;
    /// everything else is the backend's job.
    fn missing_required(&self) -> Option<&'static str>;
}

/// One backend-owned entity type with its own REST prefix.
///
/// Implemented once per admin page. Field naming is canonical camelCase on
/// the wire regardless of what older endpoints used.
pub trait Resource: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The form buffer for this resource.
    type Form: Draft;

    /// REST path prefix, e.g. `/api/channel`.
    const PREFIX: &'static str;
    /// Key holding the record array in list responses.
    const LIST_KEY: &'static str;
    /// Human-readable singular name used in notifications and prompts.
    const LABEL: &'static str;

    /// Backend-assigned record id.
    fn id(&self) -> u64;

    /// Shallow copy of this record as an edit draft.
    fn to_form(&self) -> Self::Form;
}
