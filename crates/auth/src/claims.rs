use serde::{Deserialize, Serialize};

/// JWT claims carried by the tokens `/login` issues.
///
/// Minimal on purpose: subject (username), role string, and expiry. No
/// issuer, no audience, no key id. The role claim is trusted verbatim by
/// anyone who decodes the token, and the signing secret is hardcoded in the
/// default configuration, so forging one is trivial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject: the authenticated username.
    pub sub: String,

    /// Role string copied straight from the user row.
    pub role: String,

    /// Expiration as a unix timestamp, one hour out at issue time.
    pub exp: i64,
}
