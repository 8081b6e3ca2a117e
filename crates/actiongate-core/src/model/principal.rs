//! Requester identity and the `ALL` wildcard.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GateError, Result};

/// Persisted string form of [`Principal::All`].
pub const ALL_TOKEN: &str = "ALL";

/// A rule subject: one concrete identity, or the `ALL` wildcard.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Principal {
    /// Matches every identity.
    All,
    /// One identity token (session/sender id).
    Id(String),
}

impl Principal {
    /// Parse from the persisted string form. Empty ids are malformed.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GateError::InvalidInput("empty principal".into()));
        }
        if s == ALL_TOKEN {
            Ok(Principal::All)
        } else {
            Ok(Principal::Id(s.to_string()))
        }
    }

    /// Persisted string form.
    pub fn as_str(&self) -> &str {
        match self {
            Principal::All => ALL_TOKEN,
            Principal::Id(id) => id,
        }
    }

    /// True when this entry matches the given identity.
    pub fn matches(&self, identity: &str) -> bool {
        match self {
            Principal::All => true,
            Principal::Id(id) => id == identity,
        }
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Persisted documents keep principals as plain strings ("ALL" or the id),
// so serde goes through the string form rather than an enum tag.

impl Serialize for Principal {
    fn serialize<S: Serializer>(&self, ser: S) -> std::result::Result<S::Ok, S::Error> {
        ser.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Principal {
    fn deserialize<D: Deserializer<'de>>(de: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(de)?;
        Principal::parse(&s).map_err(serde::de::Error::custom)
    }
}
