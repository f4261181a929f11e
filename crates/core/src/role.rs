use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role string attached to a user account.
///
/// Roles are opaque strings, nominally `"user"` or `"admin"`. There is no
/// enforced enumeration and no check constraint in the database; any text a
/// caller manages to get into the column becomes a "role". Keeping this
/// unchecked is part of the broken-access-control exhibit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The default role every registered and seeded account starts with.
    pub const fn user() -> Self {
        Self(Cow::Borrowed("user"))
    }

    pub const fn admin() -> Self {
        Self(Cow::Borrowed("admin"))
    }

    /// Whether this is the admin role string.
    ///
    /// Provided for completeness; the admin endpoint pointedly never calls
    /// it. Anything else the column happens to contain is neither user nor
    /// admin and grants exactly as much as both do: everything.
    pub fn is_admin(&self) -> bool {
        self.0 == "admin"
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
