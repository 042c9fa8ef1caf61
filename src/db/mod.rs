//! Database module: connection provider, models and schema.
//!
//! Layout:
//! - `models.rs`: request/response shapes and the `pessoas` row
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: pool construction and the `PersonStorage` queries

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{CreatePersonRequest, CreatedPerson, NewPerson, PersonRecord};
pub use schema::SQLITE_INIT;
pub use sqlite::{PersonStorage, SqlitePool, connect};
