//! `vulnapi-auth` — token issuing and credential parsing for the demo.
//!
//! This crate is decoupled from HTTP and storage: it turns an
//! `Authorization: Basic` header into credentials and mints/verifies the
//! HS256 tokens `/login` hands out. The actual credential *check* lives in
//! the store's raw query layer, because the check itself (string-concatenated
//! SQL) is one of the exhibits.

pub mod basic;
pub mod claims;
pub mod token;

pub use basic::{BasicCredentials, CredentialError, parse_basic_header};
pub use claims::JwtClaims;
pub use token::{TOKEN_TTL_HOURS, TokenError, issue, verify};
