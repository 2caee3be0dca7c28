//! Route handlers organized by resource

pub mod clips;
pub mod health;
