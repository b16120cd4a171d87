//! The upstream peering boundary: listing declarations from the external
//! store.
//!
//! Peering declarations live in a strongly-consistent store owned by the
//! reconciliation loop. This module only defines the read seam; retry,
//! backoff, and optimistic-concurrency discipline belong to the caller.
//! Cancellation follows the usual async contract: dropping the returned
//! future cancels the call.

use async_trait::async_trait;

use mirrorlink_api::MirrorPeering;

/// Read access to the collection of peering declarations.
///
/// Implementations fetch from the cluster's object API (or, in tests, from
/// memory). Errors are surfaced verbatim; this layer never retries or
/// wraps them.
#[async_trait]
pub trait PeeringSource: Send + Sync {
    /// List every declared peering. No pagination contract; the store
    /// returns the full snapshot.
    async fn list_peerings(&self) -> anyhow::Result<Vec<MirrorPeering>>;
}

/// Fetch all peering declarations from the given source.
///
/// A thin, named entry point for reconcilers; the source's error passes
/// through unchanged.
pub async fn fetch_all_peerings(source: &dyn PeeringSource) -> anyhow::Result<Vec<MirrorPeering>> {
    let peerings = source.list_peerings().await?;
    tracing::debug!(count = peerings.len(), "listed peering declarations");
    Ok(peerings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryPeeringSource;
    use mirrorlink_api::{MirrorPeeringSpec, PeerRef};

    fn peering(name: &str) -> MirrorPeering {
        MirrorPeering {
            name: name.to_string(),
            spec: MirrorPeeringSpec::new([
                PeerRef::new("east", "sc1", "ns1"),
                PeerRef::new("west", "sc2", "ns2"),
            ]),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_returns_snapshot() {
        let source = MemoryPeeringSource::new(vec![peering("a"), peering("b")]);
        let peerings = fetch_all_peerings(&source).await.unwrap();

        assert_eq!(peerings.len(), 2);
        assert_eq!(peerings[0].name, "a");
        assert_eq!(peerings[1].name, "b");
    }

    #[tokio::test]
    async fn test_fetch_all_empty() {
        let source = MemoryPeeringSource::default();
        let peerings = fetch_all_peerings(&source).await.unwrap();
        assert!(peerings.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_surfaces_error_verbatim() {
        let source = MemoryPeeringSource::failing("store unavailable");
        let err = fetch_all_peerings(&source).await.unwrap_err();
        assert_eq!(err.to_string(), "store unavailable");
    }
}
