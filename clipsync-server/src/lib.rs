//! clipsync-server: HTTP backend for clipboard sync.
//!
//! Clients submit text or URL snippets; the service persists them in
//! PostgreSQL and lists them newest first. Single table, no sync/merge
//! logic despite the name.

pub mod db;
pub mod http;
pub mod models;
pub mod service;
