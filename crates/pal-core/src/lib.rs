#![deny(missing_docs)]
#![doc = "Shared error, provenance and seeding types used by every crate of the palindrome toolkit."]

pub mod errors;
pub mod provenance;
pub mod rng;

pub use errors::{ErrorInfo, PalError};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};

/// Version string recorded in provenance tool maps.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");
