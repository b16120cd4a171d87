//! Error types for record validation and extraction.

use thiserror::Error;

use crate::role::Role;

/// A structural defect in an exchange record.
///
/// Every variant means "do not act on this record". These errors are local
/// and recoverable; they are never fatal to the calling control loop, which
/// decides whether to log, skip, or requeue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// No record was provided at all.
    #[error("no record provided")]
    MissingRecord,

    /// The record's role tag does not match the expected role.
    #[error("expected role {expected:?}, record is tagged {found:?}")]
    RoleMismatch {
        expected: Role,
        found: Option<Role>,
    },

    /// The record carries no payload map.
    #[error("record has no payload")]
    MissingPayload,

    /// One or more required payload keys are absent.
    #[error("required payload keys missing: {keys:?}")]
    MissingKeys { keys: Vec<&'static str> },
}
