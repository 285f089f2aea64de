//! Domain model types (pure).
//!
//! All types in this module are pure data with no I/O.

pub mod error;
pub mod key_action;
pub mod person;

// Re-export for convenience
pub use error::{AppError, DatasetError, TransportError};
pub use key_action::KeyAction;
pub use person::{Person, ResultSet, UNKNOWN_LOCATION};
