mod collector;
mod error;
mod mode;
mod provider;
mod record;
mod resolver;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use collector::Collector;
pub use error::ListError;
pub use mode::{Mode, SpecialBits, triplet};
pub use provider::{MetadataProvider, OsMetadataProvider, RawMetadata};
pub use record::{DeviceId, FileKind, FileRecord};
pub use resolver::{Resolution, list_children, resolve_args};
