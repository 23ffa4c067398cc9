//! Entity trait shared by every persisted record

use crate::errors::{HerodexError, Result};
use crate::query_builder::Column;

/// A typed record persisted as one row of `TABLE`
///
/// `COLUMNS` is the canonical projection order; row readers decode fields in
/// exactly this order.
pub trait Entity: Sized {
    const TABLE: &'static str;
    const COLUMNS: &'static [Column];

    /// Check required fields before any row is written
    fn validate(&self) -> Result<()>;
}

/// Reject blank required text fields
pub(crate) fn require_text(entity: &str, field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HerodexError::InvalidField {
            entity: entity.to_string(),
            field: field.to_string(),
            reason: "cannot be blank".to_string(),
        });
    }
    Ok(())
}

/// The store-assigned identity, or `NotPersisted` for a transient entity
pub(crate) fn require_identity(entity: &str, id: Option<i64>) -> Result<i64> {
    id.ok_or_else(|| HerodexError::NotPersisted {
        entity: entity.to_string(),
    })
}
