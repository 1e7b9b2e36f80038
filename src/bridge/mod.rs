/*!
 * Translation bridge between a page-builder layout and a translation host.
 *
 * - `hooks`: the host hooks and the bridge implementing them
 * - `key`: registration name encoding
 * - `package`: host package descriptor
 * - `registry`: host string registry seam
 * - `results`: translation results sent back by the host
 * - `outcome`: what each hook did
 */

pub mod hooks;
pub mod key;
pub mod outcome;
pub mod package;
pub mod registry;
pub mod results;

pub use hooks::{BridgeBuilder, LayoutFactory, PageBuilderHooks, TranslationBridge};
pub use key::{DEFAULT_NAME_PREFIX, StringKey};
pub use outcome::{ReinjectionOutcome, ReinjectionReport, RegistrationOutcome};
pub use package::PackageDescriptor;
pub use registry::{
    JsonLinesRegistry, RecordingRegistry, RegistrationEntry, StringRegistry, StringType,
};
pub use results::{STATUS_COMPLETE, TranslationResult, TranslationResults};
