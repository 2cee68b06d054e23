//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries over a `ConnectionTrait`, so the same repository works
//! against the connection pool or inside a transaction.

pub mod employee;
