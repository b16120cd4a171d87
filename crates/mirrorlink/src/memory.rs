//! In-memory implementation of the peering source.
//!
//! Primarily for tests. Same read semantics as the cluster-backed source
//! but with no persistence; can also be armed to fail, for exercising the
//! verbatim error passthrough.

use std::sync::RwLock;

use async_trait::async_trait;

use mirrorlink_api::MirrorPeering;

use crate::source::PeeringSource;

/// In-memory peering source. Thread-safe via RwLock.
pub struct MemoryPeeringSource {
    inner: RwLock<Inner>,
}

struct Inner {
    peerings: Vec<MirrorPeering>,
    fail_with: Option<String>,
}

impl MemoryPeeringSource {
    /// Create a source pre-seeded with the given declarations.
    pub fn new(peerings: Vec<MirrorPeering>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                peerings,
                fail_with: None,
            }),
        }
    }

    /// Create a source whose list call always fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                peerings: Vec::new(),
                fail_with: Some(message.into()),
            }),
        }
    }

    /// Replace the stored declarations.
    pub fn set_peerings(&self, peerings: Vec<MirrorPeering>) {
        self.inner.write().unwrap().peerings = peerings;
    }
}

impl Default for MemoryPeeringSource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl PeeringSource for MemoryPeeringSource {
    async fn list_peerings(&self) -> anyhow::Result<Vec<MirrorPeering>> {
        let inner = self.inner.read().unwrap();
        if let Some(message) = &inner.fail_with {
            anyhow::bail!("{message}");
        }
        Ok(inner.peerings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirrorlink_api::{MirrorPeeringSpec, PeerRef};

    #[tokio::test]
    async fn test_set_peerings_replaces_snapshot() {
        let source = MemoryPeeringSource::default();
        assert!(source.list_peerings().await.unwrap().is_empty());

        source.set_peerings(vec![MirrorPeering {
            name: "pair".to_string(),
            spec: MirrorPeeringSpec::new([
                PeerRef::new("east", "sc1", "ns1"),
                PeerRef::new("west", "sc2", "ns2"),
            ]),
        }]);

        let listed = source.list_peerings().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "pair");
    }
}
