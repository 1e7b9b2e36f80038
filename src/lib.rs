/*!
 * # layout-bridge - page-builder layouts for translation hosts
 *
 * A Rust library that lets a translation-management host translate
 * page-builder layouts stored as JSON in post metadata.
 *
 * ## Features
 *
 * - Announce page-builder translation support to the host
 * - Register every element text of a layout with the host's string registry
 * - Rebuild a translated copy of the layout from the host's results
 * - Typed, versioned layout documents that keep unknown fields
 * - In-memory and SQLite metadata stores
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `app_controller`: the commands behind the CLI
 * - `bridge`: the host hooks:
 *   - `bridge::hooks`: capability, registration and reinjection hooks
 *   - `bridge::key`: registration name encoding
 *   - `bridge::registry`: host string registry seam
 *   - `bridge::results`: translation results from the host
 * - `layout`: layout document model and typed storage
 * - `database`: SQLite post metadata store
 * - `file_utils`: File system operations
 * - `json_utils`: lenient decoding of host JSON
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

pub mod app_config;
pub mod app_controller;
pub mod bridge;
pub mod database;
pub mod errors;
pub mod file_utils;
pub mod json_utils;
pub mod language_utils;
pub mod layout;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use bridge::{
    PackageDescriptor, PageBuilderHooks, RecordingRegistry, ReinjectionOutcome,
    RegistrationOutcome, StringRegistry, TranslationBridge, TranslationResult, TranslationResults,
};
pub use database::MetaRepository;
pub use errors::{BridgeError, KeyError, LayoutError, StoreError};
pub use layout::{Element, LayoutDocument, LayoutStore, MemoryMetaStore, MetaStore, PostId};
