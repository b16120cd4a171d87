//! Role taxonomy for exchange records.
//!
//! A record's role is stored as a string label on the wire; everything past
//! the [`Role::from_label`] boundary works with the closed enum. Internal
//! logic never compares raw label strings.

use serde::{Deserialize, Serialize};

use crate::record::{ExchangeRecord, ROLE_LABEL_KEY};

/// The role an exchange record plays in a mirroring relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Produced on the source cluster, to be shipped to destinations.
    Source,
    /// Landed on a destination cluster, mirrored from a source.
    Destination,
    /// Consumed only by the orchestrator itself.
    Internal,
    /// Sentinel requesting role-agnostic validation. Never a valid
    /// expected value for a real role check, and never written to a record.
    Ignore,
}

impl Role {
    /// The wire label value for this role.
    ///
    /// These values are bit-exact with existing deployments.
    pub fn as_label(self) -> &'static str {
        match self {
            Role::Source => "BLUE",
            Role::Destination => "GREEN",
            Role::Internal => "INTERNAL",
            Role::Ignore => "IGNORE",
        }
    }

    /// Parse a wire label value. Unknown values are `None`, not an error.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "BLUE" => Some(Role::Source),
            "GREEN" => Some(Role::Destination),
            "INTERNAL" => Some(Role::Internal),
            "IGNORE" => Some(Role::Ignore),
            _ => None,
        }
    }
}

/// True iff the record's role label is present and parses to exactly `role`.
///
/// An absent or unrecognized label is simply "no match"; there is no error
/// path here.
pub fn is_record_with_role(record: &ExchangeRecord, role: Role) -> bool {
    record
        .labels
        .get(ROLE_LABEL_KEY)
        .and_then(|value| Role::from_label(value))
        == Some(role)
}

/// True iff the record is tagged as a source record.
pub fn is_source(record: &ExchangeRecord) -> bool {
    is_record_with_role(record, Role::Source)
}

/// True iff the record is tagged as a destination record.
pub fn is_destination(record: &ExchangeRecord) -> bool {
    is_record_with_role(record, Role::Destination)
}

/// True iff the record is tagged as an internal record.
pub fn is_internal(record: &ExchangeRecord) -> bool {
    is_record_with_role(record, Role::Internal)
}
