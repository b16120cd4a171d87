//! # MirrorLink
//!
//! Unified API for the MirrorLink engine: classify, validate, name, and
//! match the exchange records that synchronize storage-mirroring
//! credentials between independent clusters.
//!
//! The engine itself is pure and lives in [`mirrorlink_core`]; the schema
//! types it consumes live in [`mirrorlink_api`]. This crate re-exports
//! both and adds the one asynchronous seam: the [`PeeringSource`] trait
//! for listing peering declarations from the external store.
//!
//! ## Usage
//!
//! ```rust
//! use mirrorlink::{
//!     peer_ref_from_record, find_matching_record, source_record,
//!     Bytes, NamespacedName, ROOK_ORIGIN,
//! };
//!
//! let record = source_record(
//!     &NamespacedName::new("rec1", "ns-a"),
//!     &NamespacedName::new("sc-a", "ns-a"),
//!     Bytes::from_static(b"credentials"),
//!     ROOK_ORIGIN,
//! );
//!
//! let peer_ref = peer_ref_from_record(&record).unwrap();
//! let candidates = vec![record];
//! assert!(find_matching_record(&peer_ref, &candidates).is_some());
//! ```

pub mod memory;
pub mod source;

pub use memory::MemoryPeeringSource;
pub use source::{fetch_all_peerings, PeeringSource};

pub use mirrorlink_api::{
    MirrorPeering, MirrorPeeringSpec, MirroringMode, PeerRef, StorageClusterRef,
    DEFAULT_PROVISIONER_SECRET_NAME, DEFAULT_SCHEDULING_INTERVAL,
};
pub use mirrorlink_core::{
    destination_record, find_matching_record, is_destination, is_internal, is_record_with_role,
    is_relevant, is_source, peer_ref_from_record, source_record, unique_name, unique_secret_name,
    validate_credential_record, validate_destination_record, validate_record,
    validate_source_record, ExchangeRecord, NamespacedName, RecordError, RecordEvent, Role,
    AWS_ACCESS_KEY_ID_KEY, AWS_SECRET_ACCESS_KEY_KEY, CREATED_BY_LABEL_KEY, MIRROR_PEER_SECRET,
    NAMESPACE_KEY, ROLE_LABEL_KEY, ROOK_ORIGIN, S3_BUCKET_NAME_KEY, S3_ENDPOINT_KEY, S3_ORIGIN,
    S3_PROFILE_NAME_KEY, S3_PROFILE_PREFIX, S3_REGION_KEY, SECRET_DATA_KEY, SECRET_ORIGIN_KEY,
    STORAGE_CLUSTER_NAME_KEY, UNIQUE_SECRET_NAME_LEN,
};

// Re-exported so callers can build payload blobs without a direct dep.
pub use bytes::Bytes;
