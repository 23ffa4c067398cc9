//! Migration fingerprints
//!
//! Each applied migration is recorded with the SHA-256 of its SQL, hex
//! encoded. On every start the embedded text is fingerprinted again and
//! compared with the ledger.

use crate::errors::{checksum_mismatch, Result};
use sha2::{Digest, Sha256};

pub fn fingerprint(sql: &str) -> String {
    hex::encode(Sha256::digest(sql.as_bytes()))
}

/// Whether a migration still has to run
///
/// `recorded` is the ledger entry: `None` when the migration was never
/// applied, `Some(None)` for a row written without a checksum, which is
/// accepted as applied.
pub fn needs_apply(
    migration_id: &str,
    recorded: Option<Option<&str>>,
    current: &str,
) -> Result<bool> {
    match recorded {
        None => Ok(true),
        Some(Some(applied)) if applied != current => {
            Err(checksum_mismatch(migration_id, applied, current))
        }
        Some(_) => Ok(false),
    }
}
