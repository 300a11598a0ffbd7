use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// A short link identifier.
///
/// Generated ids are the base58 encoding of a random 64-bit value
/// (at most 11 characters). Ids arriving from the outside (e.g. a
/// path segment) are carried verbatim; the store decides whether
/// they resolve.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LinkId(SmolStr);

impl LinkId {
    /// Creates a `LinkId` from an already-encoded string.
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    /// Encodes a 64-bit value as a base58 `LinkId`.
    pub fn from_u64(value: u64) -> Self {
        let encoded = bs58::encode(value.to_be_bytes()).into_string();
        Self(SmolStr::new(encoded))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("LinkId").field(&self.0).finish()
    }
}

impl Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for LinkId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LinkId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Ok(Self(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u64_is_stable() {
        assert_eq!(LinkId::from_u64(0), LinkId::from_u64(0));
        assert_ne!(LinkId::from_u64(1), LinkId::from_u64(2));
    }

    #[test]
    fn from_u64_is_short_base58() {
        let id = LinkId::from_u64(u64::MAX);
        assert!(id.as_str().len() <= 11);
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() && c != '0' && c != 'O' && c != 'I' && c != 'l'));
    }

    #[test]
    fn display_matches_as_str() {
        let id = LinkId::from_u64(42);
        assert_eq!(id.to_string(), id.as_str());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = LinkId::new("abc123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc123\"");

        let back: LinkId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
