/*!
 * Database entity models.
 *
 * These structures map directly to database tables and provide
 * type-safe access to persisted data.
 */

use serde::{Deserialize, Serialize};

use crate::layout::store::PostId;

/// One stored metadata value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaRecord {
    /// Post the value belongs to
    pub post_id: PostId,
    /// Metadata key
    pub meta_key: String,
    /// Raw stored value
    pub meta_value: String,
    /// Last write time (SQLite `datetime('now')`, UTC)
    pub updated_at: String,
}
