//! `vulnapi-core` — shared records and configuration for the demo API.
//!
//! This crate is deliberately thin. The application it supports is a flat
//! catalogue of insecure practices, one HTTP endpoint per OWASP Top 10
//! category, so there is no layered domain here: just the two persisted
//! records, the role string, and the (intentionally insecure) runtime
//! configuration.

pub mod config;
pub mod records;
pub mod role;

pub use config::AppConfig;
pub use records::{Post, User};
pub use role::Role;
