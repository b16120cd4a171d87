//! Peer references: the identity of one side of a mirroring relationship.
//!
//! A peer reference is a derived value. It has no lifecycle of its own and
//! is recomputed on demand from a validated exchange record; equality is
//! structural over the three leaf strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a storage cluster by name and namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StorageClusterRef {
    /// Name of the storage cluster object.
    pub name: String,

    /// Namespace the storage cluster lives in.
    pub namespace: String,
}

/// One side of a mirroring relationship.
///
/// Two peer references are equal iff the cluster name and both storage
/// cluster fields are equal. The matcher relies on this derived equality;
/// there is no identity beyond the three strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeerRef {
    /// Name of the managed cluster this peer runs on.
    pub cluster_name: String,

    /// The storage cluster on that managed cluster.
    pub storage_cluster_ref: StorageClusterRef,
}

impl PeerRef {
    /// Build a peer reference from its three leaf strings.
    pub fn new(
        cluster_name: impl Into<String>,
        storage_cluster_name: impl Into<String>,
        storage_cluster_namespace: impl Into<String>,
    ) -> Self {
        Self {
            cluster_name: cluster_name.into(),
            storage_cluster_ref: StorageClusterRef {
                name: storage_cluster_name.into(),
                namespace: storage_cluster_namespace.into(),
            },
        }
    }
}

impl fmt::Display for PeerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.cluster_name, self.storage_cluster_ref.namespace, self.storage_cluster_ref.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peer_ref_structural_equality() {
        let a = PeerRef::new("cluster1", "sc1", "ns1");
        let b = PeerRef::new("cluster1", "sc1", "ns1");
        assert_eq!(a, b);

        let c = PeerRef::new("cluster1", "sc1", "ns2");
        assert_ne!(a, c);
    }

    #[test]
    fn test_peer_ref_display() {
        let p = PeerRef::new("east", "sc-a", "ns-a");
        assert_eq!(format!("{}", p), "east/ns-a/sc-a");
    }
}
