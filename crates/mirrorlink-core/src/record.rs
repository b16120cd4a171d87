//! Exchange records: the unit of cross-cluster credential hand-off.
//!
//! An exchange record is a named, namespaced, opaque key/value payload with
//! a single role label. Records are immutable once validated for a given
//! reconciliation pass; any change upstream is a full replace.
//!
//! All key constants in this module are part of the wire contract with
//! existing deployments and must match verbatim.

use std::collections::BTreeMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Label key carrying the record's role.
pub const ROLE_LABEL_KEY: &str = "multicluster.odf.openshift.io/secret-type";

/// Label key identifying which controller created the record.
pub const CREATED_BY_LABEL_KEY: &str = "multicluster.odf.openshift.io/created-by";

/// Conventional `CREATED_BY_LABEL_KEY` value for records created by the
/// peering reconciler.
pub const MIRROR_PEER_SECRET: &str = "mirrorpeersecret";

/// Payload key: namespace the record originated from.
pub const NAMESPACE_KEY: &str = "namespace";

/// Payload key: name of the originating storage cluster.
pub const STORAGE_CLUSTER_NAME_KEY: &str = "storage-cluster-name";

/// Payload key: the opaque credential blob itself.
pub const SECRET_DATA_KEY: &str = "secret-data";

/// Payload key: free-form tag naming the producing subsystem.
pub const SECRET_ORIGIN_KEY: &str = "secret-origin";

/// Origin tag reserved for the block-storage mirroring backend.
pub const ROOK_ORIGIN: &str = "rook";

/// Origin tag for object-store credential records.
pub const S3_ORIGIN: &str = "S3";

/// Conventional name prefix for object-store credential records.
pub const S3_PROFILE_PREFIX: &str = "s3profile";

/// Credential payload key: object-store profile name.
pub const S3_PROFILE_NAME_KEY: &str = "s3ProfileName";

/// Credential payload key: bucket name.
pub const S3_BUCKET_NAME_KEY: &str = "s3Bucket";

/// Credential payload key: S3-compatible endpoint URL.
pub const S3_ENDPOINT_KEY: &str = "s3CompatibleEndpoint";

/// Credential payload key: bucket region.
pub const S3_REGION_KEY: &str = "s3Region";

/// Credential payload key: access key id.
pub const AWS_ACCESS_KEY_ID_KEY: &str = "AWS_ACCESS_KEY_ID";

/// Credential payload key: secret access key.
pub const AWS_SECRET_ACCESS_KEY_KEY: &str = "AWS_SECRET_ACCESS_KEY";

/// A name/namespace pair addressing an object in a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamespacedName {
    pub name: String,
    pub namespace: String,
}

impl NamespacedName {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

/// A named, namespaced key/value payload with a role label.
///
/// `data: None` models a record whose payload map is absent entirely,
/// distinct from an empty map. Validation rejects both shapes that miss
/// required keys, but the error differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRecord {
    /// Record name, unique within its namespace.
    pub name: String,

    /// Namespace the record lives in.
    pub namespace: String,

    /// String labels; the role tag lives under [`ROLE_LABEL_KEY`].
    #[serde(default)]
    pub labels: BTreeMap<String, String>,

    /// Opaque payload map. Values are raw bytes.
    #[serde(default)]
    pub data: Option<BTreeMap<String, Bytes>>,
}

impl ExchangeRecord {
    /// Create an empty record with no labels and no payload.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            labels: BTreeMap::new(),
            data: None,
        }
    }

    /// The record's parsed role, if the label is present and recognized.
    pub fn role(&self) -> Option<Role> {
        self.labels
            .get(ROLE_LABEL_KEY)
            .and_then(|value| Role::from_label(value))
    }

    /// Look up a payload value by key.
    pub fn data_value(&self, key: &str) -> Option<&Bytes> {
        self.data.as_ref().and_then(|data| data.get(key))
    }
}

/// Build a fully-labelled exchange record of the given role.
fn tagged_record(
    record: &NamespacedName,
    storage_cluster: &NamespacedName,
    role: Role,
    blob: Bytes,
    origin: &str,
) -> ExchangeRecord {
    let mut labels = BTreeMap::new();
    labels.insert(ROLE_LABEL_KEY.to_string(), role.as_label().to_string());

    let mut data = BTreeMap::new();
    data.insert(SECRET_DATA_KEY.to_string(), blob);
    data.insert(
        NAMESPACE_KEY.to_string(),
        Bytes::from(storage_cluster.namespace.clone()),
    );
    data.insert(
        STORAGE_CLUSTER_NAME_KEY.to_string(),
        Bytes::from(storage_cluster.name.clone()),
    );
    data.insert(SECRET_ORIGIN_KEY.to_string(), Bytes::from(origin.to_string()));

    ExchangeRecord {
        name: record.name.clone(),
        namespace: record.namespace.clone(),
        labels,
        data: Some(data),
    }
}

/// Build a source-tagged exchange record.
pub fn source_record(
    record: &NamespacedName,
    storage_cluster: &NamespacedName,
    blob: Bytes,
    origin: &str,
) -> ExchangeRecord {
    tagged_record(record, storage_cluster, Role::Source, blob, origin)
}

/// Build a destination-tagged exchange record.
pub fn destination_record(
    record: &NamespacedName,
    storage_cluster: &NamespacedName,
    blob: Bytes,
    origin: &str,
) -> ExchangeRecord {
    tagged_record(record, storage_cluster, Role::Destination, blob, origin)
}
