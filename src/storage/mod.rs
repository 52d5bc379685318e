//! Storage layer for folio
//!
//! A SQLite-backed key-value capability. Each persisted key (`theme`,
//! `accent`, `selection`, `endorsed_skills`) is exclusively owned by the
//! store that manages it, so no locking is needed.

pub mod kv;
pub mod migrations;

pub use kv::Database;
