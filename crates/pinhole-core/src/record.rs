use crate::id::LinkId;
use serde::{Deserialize, Serialize};

/// The scheme and authority a caller wants shortened URLs built with.
///
/// The host is supplied per call at response time; it is never stored
/// alongside the entry, so the same id can be served under different
/// public hostnames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    scheme: String,
    host: String,
}

impl Host {
    /// Creates a new `Host` from a scheme and an authority.
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
        }
    }

    /// Builds the outward-facing shortened URL for an id, with the id
    /// as the sole path segment.
    pub fn link_url(&self, id: &LinkId) -> String {
        format!("{}://{}/{}", self.scheme, self.host, id)
    }
}

/// The caller-facing result of a shorten or expand operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The short identifier, unique per store instance.
    pub id: LinkId,
    /// Count of successful expansions of this id.
    pub visits: u64,
    /// The original, validated absolute URL.
    pub expanded_url: String,
    /// The id combined with the caller-supplied host. Derived, never
    /// stored.
    pub shortened_url: String,
}
