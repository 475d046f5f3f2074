//! Core types: the entity record model and the crate error type.

pub mod errors;
pub mod record;

pub use errors::{Error, Result, ResultExt, EXIT_FAILURE, EXIT_SETUP_FAILURE};
pub use record::{is_blank, EntityKind, QualifiedName, Record, UnknownKind};
