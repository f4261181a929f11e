//! `vulnapi-store` — SQLite persistence for the demo.
//!
//! Two query layers coexist on purpose, mirroring the split the demo is
//! built to show:
//!
//! - [`users`]: pooled, parameterized queries (the well-behaved "ORM-style"
//!   path used by registration and lookups)
//! - [`raw`]: a fresh connection per call and SQL assembled by string
//!   concatenation (the injectable path; every function in it is an exhibit)

pub mod db;
pub mod error;
pub mod raw;
pub mod schema;
pub mod users;

pub use db::{connect_pool, raw_connection};
pub use error::{StoreError, StoreResult};
