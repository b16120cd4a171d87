//! Record validation: structural checks for exchange and credential records.

use std::collections::BTreeMap;

use bytes::Bytes;

use crate::error::RecordError;
use crate::record::{
    ExchangeRecord, AWS_ACCESS_KEY_ID_KEY, AWS_SECRET_ACCESS_KEY_KEY, NAMESPACE_KEY,
    S3_BUCKET_NAME_KEY, S3_ENDPOINT_KEY, S3_PROFILE_NAME_KEY, S3_REGION_KEY, SECRET_DATA_KEY,
    SECRET_ORIGIN_KEY, STORAGE_CLUSTER_NAME_KEY,
};
use crate::role::Role;

/// The four payload keys every valid exchange record must carry.
const REQUIRED_KEYS: [&str; 4] = [
    NAMESPACE_KEY,
    STORAGE_CLUSTER_NAME_KEY,
    SECRET_ORIGIN_KEY,
    SECRET_DATA_KEY,
];

/// Validate an exchange record's structure against an expected role.
///
/// Pass [`Role::Ignore`] to request role-agnostic validation; the role
/// check is then skipped and only structural defects can fail. With `Role`
/// being a closed enum there is no "empty expected role" to guard against.
///
/// Checks, in order:
/// - the record is present
/// - unless `expected` is `Ignore`, the role label parses to exactly `expected`
/// - the payload map is present
/// - all four required payload keys are present (values may be empty)
pub fn validate_record(
    record: Option<&ExchangeRecord>,
    expected: Role,
) -> Result<(), RecordError> {
    let record = record.ok_or(RecordError::MissingRecord)?;

    if expected != Role::Ignore && record.role() != Some(expected) {
        return Err(RecordError::RoleMismatch {
            expected,
            found: record.role(),
        });
    }

    let data = record.data.as_ref().ok_or(RecordError::MissingPayload)?;

    let missing: Vec<&'static str> = REQUIRED_KEYS
        .into_iter()
        .filter(|key| !data.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(RecordError::MissingKeys { keys: missing });
    }

    Ok(())
}

/// Validate that the record is a well-formed source record.
pub fn validate_source_record(record: Option<&ExchangeRecord>) -> Result<(), RecordError> {
    validate_record(record, Role::Source)
}

/// Validate that the record is a well-formed destination record.
pub fn validate_destination_record(record: Option<&ExchangeRecord>) -> Result<(), RecordError> {
    validate_record(record, Role::Destination)
}

/// Pre-flight check for an object-store credential payload.
///
/// True iff all six credential keys are present. This is a boolean rather
/// than an error because callers use it to decide whether to proceed, not
/// to reject a record outright.
pub fn validate_credential_record(data: &BTreeMap<String, Bytes>) -> bool {
    [
        S3_PROFILE_NAME_KEY,
        S3_BUCKET_NAME_KEY,
        S3_ENDPOINT_KEY,
        S3_REGION_KEY,
        AWS_ACCESS_KEY_ID_KEY,
        AWS_SECRET_ACCESS_KEY_KEY,
    ]
    .into_iter()
    .all(|key| data.contains_key(key))
}
