//! Event relevance filtering for the reconciliation loop.
//!
//! The reconciler registers these predicates at its watch registration
//! point; only notifications that pass are forwarded into reconciliation.
//! The predicates are stateless free functions, so a single filter value
//! serves every worker.

use crate::record::ExchangeRecord;
use crate::role::{is_destination, is_internal, is_source};

/// A mutation notification for an exchange record.
#[derive(Debug, Clone, Copy)]
pub enum RecordEvent<'a> {
    /// A record was created.
    Created(&'a ExchangeRecord),
    /// A record was updated; both versions are available.
    Updated {
        old: &'a ExchangeRecord,
        new: &'a ExchangeRecord,
    },
    /// A record was deleted.
    Deleted(&'a ExchangeRecord),
    /// Any other notification kind. Never relevant.
    Generic(&'a ExchangeRecord),
}

/// Whether a creation is worth reacting to: source- or internal-tagged.
pub fn relevant_on_create(record: &ExchangeRecord) -> bool {
    is_source(record) || is_internal(record)
}

/// Whether a deletion is worth reacting to: source- or destination-tagged.
pub fn relevant_on_delete(record: &ExchangeRecord) -> bool {
    is_source(record) || is_destination(record)
}

/// Whether an update is worth reacting to.
///
/// Only updates that keep the role fixed at source, destination, or
/// internal pass. A role transition is suppressed on purpose: role
/// reassignment is not content drift, and if it happens at all it is
/// handled upstream as a full delete+create cycle.
pub fn relevant_on_update(old: &ExchangeRecord, new: &ExchangeRecord) -> bool {
    (is_source(old) && is_source(new))
        || (is_destination(old) && is_destination(new))
        || (is_internal(old) && is_internal(new))
}

/// Dispatch a notification to the per-case predicate.
pub fn is_relevant(event: &RecordEvent<'_>) -> bool {
    match event {
        RecordEvent::Created(record) => relevant_on_create(record),
        RecordEvent::Updated { old, new } => relevant_on_update(old, new),
        RecordEvent::Deleted(record) => relevant_on_delete(record),
        RecordEvent::Generic(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ROLE_LABEL_KEY;
    use crate::role::Role;

    fn tagged(role: Role) -> ExchangeRecord {
        let mut record = ExchangeRecord::new("rec", "ns");
        record
            .labels
            .insert(ROLE_LABEL_KEY.to_string(), role.as_label().to_string());
        record
    }

    #[test]
    fn test_create_relevance() {
        assert!(relevant_on_create(&tagged(Role::Source)));
        assert!(relevant_on_create(&tagged(Role::Internal)));
        assert!(!relevant_on_create(&tagged(Role::Destination)));
        assert!(!relevant_on_create(&ExchangeRecord::new("rec", "ns")));
    }

    #[test]
    fn test_delete_relevance() {
        assert!(relevant_on_delete(&tagged(Role::Source)));
        assert!(relevant_on_delete(&tagged(Role::Destination)));
        assert!(!relevant_on_delete(&tagged(Role::Internal)));
    }

    #[test]
    fn test_update_same_role_relevant() {
        assert!(relevant_on_update(&tagged(Role::Source), &tagged(Role::Source)));
        assert!(relevant_on_update(
            &tagged(Role::Destination),
            &tagged(Role::Destination)
        ));
        assert!(relevant_on_update(
            &tagged(Role::Internal),
            &tagged(Role::Internal)
        ));
    }

    #[test]
    fn test_update_role_transition_suppressed() {
        assert!(!relevant_on_update(
            &tagged(Role::Source),
            &tagged(Role::Destination)
        ));
        assert!(!relevant_on_update(
            &tagged(Role::Source),
            &tagged(Role::Internal)
        ));
        assert!(!relevant_on_update(
            &tagged(Role::Destination),
            &tagged(Role::Source)
        ));
    }

    #[test]
    fn test_update_untagged_not_relevant() {
        let untagged = ExchangeRecord::new("rec", "ns");
        assert!(!relevant_on_update(&untagged, &untagged));
    }

    #[test]
    fn test_generic_never_relevant() {
        let record = tagged(Role::Source);
        assert!(!is_relevant(&RecordEvent::Generic(&record)));
    }

    #[test]
    fn test_dispatch() {
        let source = tagged(Role::Source);
        let destination = tagged(Role::Destination);

        assert!(is_relevant(&RecordEvent::Created(&source)));
        assert!(!is_relevant(&RecordEvent::Created(&destination)));
        assert!(is_relevant(&RecordEvent::Deleted(&destination)));
        assert!(is_relevant(&RecordEvent::Updated {
            old: &source,
            new: &source
        }));
        assert!(!is_relevant(&RecordEvent::Updated {
            old: &source,
            new: &destination
        }));
    }
}
