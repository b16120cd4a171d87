//! # MirrorLink Core
//!
//! Pure decision logic for cross-cluster storage mirroring: classifying,
//! validating, naming, and matching the exchange records that carry
//! mirroring credentials between clusters.
//!
//! This crate contains no I/O, no async, no shared state. Every operation
//! is a pure function of its inputs, safe to call concurrently from any
//! number of reconciliation workers.
//!
//! ## Key Types
//!
//! - [`ExchangeRecord`] - A named, namespaced key/value payload with a role tag
//! - [`Role`] - Closed role taxonomy: source, destination, internal, ignore
//! - [`RecordError`] - Structural validation failures (always recoverable)
//! - [`RecordEvent`] - A create/update/delete notification to filter
//!
//! ## Wire Contract
//!
//! Label and payload key constants in [`record`] are bit-exact with existing
//! deployments and must not change. See [`naming`] for the frozen 39-char
//! secret-name truncation.

pub mod error;
pub mod event;
pub mod naming;
pub mod peer;
pub mod record;
pub mod role;
pub mod validation;

pub use error::RecordError;
pub use event::{
    is_relevant, relevant_on_create, relevant_on_delete, relevant_on_update, RecordEvent,
};
pub use naming::{unique_name, unique_secret_name, UNIQUE_SECRET_NAME_LEN};
pub use peer::{find_matching_record, peer_ref_from_record};
pub use record::{
    destination_record, source_record, ExchangeRecord, NamespacedName, AWS_ACCESS_KEY_ID_KEY,
    AWS_SECRET_ACCESS_KEY_KEY, CREATED_BY_LABEL_KEY, MIRROR_PEER_SECRET, NAMESPACE_KEY,
    ROLE_LABEL_KEY, ROOK_ORIGIN, S3_BUCKET_NAME_KEY, S3_ENDPOINT_KEY, S3_ORIGIN,
    S3_PROFILE_NAME_KEY, S3_PROFILE_PREFIX, S3_REGION_KEY, SECRET_DATA_KEY, SECRET_ORIGIN_KEY,
    STORAGE_CLUSTER_NAME_KEY,
};
pub use role::{is_destination, is_internal, is_record_with_role, is_source, Role};
pub use validation::{
    validate_credential_record, validate_destination_record, validate_record,
    validate_source_record,
};
