//! Repository implementations for database access
//!
//! The repository is a thin struct borrowing the pool; each call runs a
//! single statement and releases its connection when it returns.

pub mod clips;

pub use clips::{ClipEntry, ClipRepo, DbError};
