use crate::error::Result;

/// Abstract interface for raw slot I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while [`super::todo_store::TodoStore`] handles the "what" (encoding, fallbacks).
///
/// A slot is a named string value, the same shape as a browser's `localStorage`.
pub trait KeyValueBackend {
    /// Read the raw value of a slot.
    /// Returns Ok(None) if the slot was never written.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value of a slot.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
