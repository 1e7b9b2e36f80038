/*!
 * Page-builder layout documents and their storage.
 *
 * - `model`: typed layout document and elements
 * - `store`: metadata store seam and typed layout access
 */

pub mod model;
pub mod store;

pub use model::{Element, LAYOUT_SCHEMA_VERSION, LayoutDocument};
pub use store::{LayoutLookup, LayoutStore, MemoryMetaStore, MetaStore, PostId};
