//! Database module: entities, schema and repositories.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `repository.rs`: the `CrudRepository` contract and an in-memory implementation
//! - `sqlite.rs`: SQLite-backed repositories and pool setup

pub mod models;
pub mod repository;
pub mod schema;
pub mod sqlite;

pub use models::{Article, Entity, Member};
pub use repository::{CrudRepository, MemoryRepository};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqliteArticleRepository, SqliteMemberRepository, SqlitePool, connect};
