//! Test fixtures and helpers.
//!
//! Common setup code for integration and property tests.

use bytes::Bytes;

use mirrorlink::MemoryPeeringSource;
use mirrorlink_api::{MirrorPeering, MirrorPeeringSpec, PeerRef};
use mirrorlink_core::{
    destination_record, source_record, ExchangeRecord, NamespacedName, Role, ROLE_LABEL_KEY,
    ROOK_ORIGIN,
};

/// A fixture pinned to one cluster/storage-cluster pair.
pub struct RecordFixture {
    pub cluster_namespace: String,
    pub storage_cluster: NamespacedName,
}

impl RecordFixture {
    /// Create a fixture for records produced in `cluster_namespace` about
    /// the given storage cluster.
    pub fn new(cluster_namespace: &str, sc_name: &str, sc_namespace: &str) -> Self {
        Self {
            cluster_namespace: cluster_namespace.to_string(),
            storage_cluster: NamespacedName::new(sc_name, sc_namespace),
        }
    }

    /// The peer reference every well-formed record from this fixture
    /// derives to.
    pub fn peer_ref(&self) -> PeerRef {
        PeerRef::new(
            self.cluster_namespace.clone(),
            self.storage_cluster.name.clone(),
            self.storage_cluster.namespace.clone(),
        )
    }

    /// Build a well-formed source-tagged record.
    pub fn make_source(&self, name: &str) -> ExchangeRecord {
        source_record(
            &NamespacedName::new(name, self.cluster_namespace.clone()),
            &self.storage_cluster,
            Bytes::from_static(b"credentials"),
            ROOK_ORIGIN,
        )
    }

    /// Build a well-formed destination-tagged record.
    pub fn make_destination(&self, name: &str) -> ExchangeRecord {
        destination_record(
            &NamespacedName::new(name, self.cluster_namespace.clone()),
            &self.storage_cluster,
            Bytes::from_static(b"credentials"),
            ROOK_ORIGIN,
        )
    }

    /// Build a well-formed record retagged to the given role.
    pub fn make_tagged(&self, name: &str, role: Role) -> ExchangeRecord {
        let mut record = self.make_source(name);
        record
            .labels
            .insert(ROLE_LABEL_KEY.to_string(), role.as_label().to_string());
        record
    }

    /// Build a record whose payload map is absent entirely.
    pub fn make_payloadless(&self, name: &str) -> ExchangeRecord {
        let mut record = self.make_source(name);
        record.data = None;
        record
    }

    /// Build a record missing one required payload key.
    pub fn make_missing_key(&self, name: &str, key: &str) -> ExchangeRecord {
        let mut record = self.make_source(name);
        record.data.as_mut().unwrap().remove(key);
        record
    }
}

/// A memory peering source seeded with one declaration per peer pair.
pub fn seeded_peering_source(pairs: &[(PeerRef, PeerRef)]) -> MemoryPeeringSource {
    let peerings = pairs
        .iter()
        .enumerate()
        .map(|(i, (a, b))| MirrorPeering {
            name: format!("peering-{i}"),
            spec: MirrorPeeringSpec::new([a.clone(), b.clone()]),
        })
        .collect();
    MemoryPeeringSource::new(peerings)
}
