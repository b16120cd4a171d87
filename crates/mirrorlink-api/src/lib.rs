//! # MirrorLink API
//!
//! Schema types for the peering resources that MirrorLink consumes.
//!
//! These types are owned by the external reconciliation loop: this crate
//! only defines their shape and serde contract. The engine reads peering
//! declarations; it never creates or mutates them.
//!
//! ## Key Types
//!
//! - [`PeerRef`] - One side of a mirroring relationship
//! - [`StorageClusterRef`] - The storage cluster a peer points at
//! - [`MirrorPeering`] - A named two-sided peering declaration
//! - [`MirroringMode`] - Snapshot or journal based mirroring

pub mod peer;
pub mod peering;

pub use peer::{PeerRef, StorageClusterRef};
pub use peering::{
    MirrorPeering, MirrorPeeringSpec, MirroringMode, DEFAULT_PROVISIONER_SECRET_NAME,
    DEFAULT_SCHEDULING_INTERVAL,
};
