//! Database module: the swimmer table and its SQLite storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: pool setup and CRUD queries

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Swimmer, SwimmerFields};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, SwimmerStorage};
