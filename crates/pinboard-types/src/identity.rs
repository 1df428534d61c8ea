use std::fmt;

use serde::{Deserialize, Serialize};

/// Authentication capability consumed by the board.
///
/// An `Identity` is a named principal that can check a presented secret.
/// The board never stores or inspects secrets itself; it only asks the
/// owner's identity whether a presented secret is valid.
pub trait Identity: Send + Sync {
    /// The principal's name.
    fn name(&self) -> &str;

    /// Returns `true` if `secret` is this principal's secret.
    ///
    /// A principal constructed without a secret authenticates nothing.
    fn authenticate(&self, secret: &str) -> bool;
}

/// In-process identity: a name and an optional secret.
///
/// Two `LocalUser`s are equal when their names are equal, regardless of
/// secret. Identities are immutable once constructed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocalUser {
    name: String,
    secret: Option<String>,
}

impl LocalUser {
    /// Create an identity holding a secret.
    pub fn new(name: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secret: Some(secret.into()),
        }
    }

    /// Create a secretless identity (a friend reference, not an owner).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secret: None,
        }
    }
}

impl Identity for LocalUser {
    fn name(&self) -> &str {
        &self.name
    }

    fn authenticate(&self, secret: &str) -> bool {
        self.secret.as_deref() == Some(secret)
    }
}

impl PartialEq for LocalUser {
    // Equality by name only: a friend reference and the friend's full
    // identity denote the same principal.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for LocalUser {}

impl std::hash::Hash for LocalUser {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for LocalUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
