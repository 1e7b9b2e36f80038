/*!
 * Database module for persistent post metadata.
 *
 * This module provides SQLite-based storage for the per-post metadata
 * values the bridge reads and writes (the layout JSON among them).
 */

pub mod connection;
pub mod models;
pub mod repository;
pub mod schema;

// Re-export main types
pub use connection::{DatabaseConnection, DatabaseStats};
pub use models::MetaRecord;
pub use repository::MetaRepository;
