//! Database module: the inquiry record store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and submitted forms
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the store itself

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{InquiryRecord, NewInquiry};
pub use schema::SQLITE_INIT;
pub use sqlite::{InquiryStore, SqlitePool};
