//! Peering declarations: the externally owned two-sided mirroring resource.

use serde::{Deserialize, Serialize};

use crate::peer::PeerRef;

/// Default interval between scheduled mirroring snapshots.
pub const DEFAULT_SCHEDULING_INTERVAL: &str = "5m";

/// Default name of the secret holding mirroring credentials.
pub const DEFAULT_PROVISIONER_SECRET_NAME: &str = "rook-csi-rbd-provisioner";

/// How block images are mirrored between the two peers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MirroringMode {
    /// Point-in-time snapshots shipped on a schedule.
    #[default]
    Snapshot,
    /// Continuous journal-based replication.
    Journal,
}

/// Desired state of a peering: exactly two peers plus mirroring settings.
///
/// The two-peer shape is enforced at the type level; a declaration with
/// any other number of peers does not deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorPeeringSpec {
    /// The two sides of the relationship, in declaration order.
    pub peers: [PeerRef; 2],

    /// Mirroring mode, defaulting to snapshot-based.
    #[serde(default)]
    pub mode: MirroringMode,

    /// Interval between scheduled mirroring runs.
    #[serde(default = "default_scheduling_interval")]
    pub scheduling_interval: String,

    /// Name of the secret carrying mirroring credentials.
    #[serde(default = "default_secret_ref")]
    pub secret_ref: String,

    /// Whether the orchestrator also manages object-store replication.
    #[serde(default)]
    pub manage_object_store: bool,
}

fn default_scheduling_interval() -> String {
    DEFAULT_SCHEDULING_INTERVAL.to_string()
}

fn default_secret_ref() -> String {
    DEFAULT_PROVISIONER_SECRET_NAME.to_string()
}

/// A named peering declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorPeering {
    /// Name of the declaration, unique within the collection.
    pub name: String,

    /// Desired peering state.
    pub spec: MirrorPeeringSpec,
}

impl MirrorPeeringSpec {
    /// Create a spec with the given peers and all settings defaulted.
    pub fn new(peers: [PeerRef; 2]) -> Self {
        Self {
            peers,
            mode: MirroringMode::default(),
            scheduling_interval: default_scheduling_interval(),
            secret_ref: default_secret_ref(),
            manage_object_store: false,
        }
    }
}
