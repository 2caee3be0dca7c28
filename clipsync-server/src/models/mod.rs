//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod entry;
pub mod limit;
pub mod validation;

pub use entry::{EntryContent, EntryKind, EntryTitle};
pub use limit::ListLimit;
pub use validation::ValidationError;
