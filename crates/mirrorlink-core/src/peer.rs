//! Peer-reference extraction and matching.
//!
//! Correlates a record produced on one cluster with its counterpart in a
//! list fetched from another cluster. The two clusters share no database,
//! so the correlation key is derived from the record itself.

use mirrorlink_api::{PeerRef, StorageClusterRef};

use crate::error::RecordError;
use crate::record::{ExchangeRecord, NAMESPACE_KEY, STORAGE_CLUSTER_NAME_KEY};
use crate::role::Role;
use crate::validation::validate_record;

/// Derive the canonical peer reference for a validated exchange record.
///
/// Validation is role-agnostic: a source record and the destination copy of
/// the same relationship derive the same peer reference. Validation errors
/// propagate unchanged.
pub fn peer_ref_from_record(record: &ExchangeRecord) -> Result<PeerRef, RecordError> {
    validate_record(Some(record), Role::Ignore)?;

    // Required keys are present after validation; values may be any bytes.
    let storage_cluster_name = record
        .data_value(STORAGE_CLUSTER_NAME_KEY)
        .map(|v| String::from_utf8_lossy(v).into_owned())
        .unwrap_or_default();
    let storage_cluster_namespace = record
        .data_value(NAMESPACE_KEY)
        .map(|v| String::from_utf8_lossy(v).into_owned())
        .unwrap_or_default();

    Ok(PeerRef {
        cluster_name: record.namespace.clone(),
        storage_cluster_ref: StorageClusterRef {
            name: storage_cluster_name,
            namespace: storage_cluster_namespace,
        },
    })
}

/// Find the first candidate whose derived peer reference equals `target`.
///
/// Candidates that fail extraction are skipped, not fatal: one malformed or
/// wrong-shaped record must never abort the scan of the rest. Skips are
/// logged at debug level. When several candidates would derive the same
/// peer reference, the first in input order wins.
pub fn find_matching_record<'a>(
    target: &PeerRef,
    candidates: &'a [ExchangeRecord],
) -> Option<&'a ExchangeRecord> {
    candidates.iter().find(|candidate| {
        match peer_ref_from_record(candidate) {
            Ok(peer_ref) => peer_ref == *target,
            Err(err) => {
                tracing::debug!(
                    record = %candidate.name,
                    namespace = %candidate.namespace,
                    error = %err,
                    "skipping candidate that failed peer-ref extraction"
                );
                false
            }
        }
    })
}
