//! Proptest generators for property-based testing.

use std::collections::BTreeMap;

use bytes::Bytes;
use proptest::prelude::*;

use mirrorlink_core::{
    ExchangeRecord, Role, NAMESPACE_KEY, ROLE_LABEL_KEY, SECRET_DATA_KEY, SECRET_ORIGIN_KEY,
    STORAGE_CLUSTER_NAME_KEY,
};

/// Generate a platform-legal object name.
pub fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,31}".prop_map(String::from)
}

/// Generate a real role (never the Ignore sentinel).
pub fn role() -> impl Strategy<Value = Role> {
    prop_oneof![
        Just(Role::Source),
        Just(Role::Destination),
        Just(Role::Internal),
    ]
}

/// Generate payload bytes.
pub fn blob(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Parameters for generating a well-formed exchange record.
#[derive(Debug, Clone)]
pub struct RecordParams {
    pub name: String,
    pub cluster_namespace: String,
    pub storage_cluster_name: String,
    pub storage_cluster_namespace: String,
    pub role: Role,
    pub origin: String,
    pub blob: Vec<u8>,
}

impl Arbitrary for RecordParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (name(), name(), name(), name(), role(), name(), blob(256))
            .prop_map(
                |(name, cluster_namespace, sc_name, sc_namespace, role, origin, blob)| {
                    RecordParams {
                        name,
                        cluster_namespace,
                        storage_cluster_name: sc_name,
                        storage_cluster_namespace: sc_namespace,
                        role,
                        origin,
                        blob,
                    }
                },
            )
            .boxed()
    }
}

/// Build a record from parameters.
pub fn record_from_params(params: &RecordParams) -> ExchangeRecord {
    let mut labels = BTreeMap::new();
    labels.insert(
        ROLE_LABEL_KEY.to_string(),
        params.role.as_label().to_string(),
    );

    let mut data = BTreeMap::new();
    data.insert(
        NAMESPACE_KEY.to_string(),
        Bytes::from(params.storage_cluster_namespace.clone()),
    );
    data.insert(
        STORAGE_CLUSTER_NAME_KEY.to_string(),
        Bytes::from(params.storage_cluster_name.clone()),
    );
    data.insert(
        SECRET_ORIGIN_KEY.to_string(),
        Bytes::from(params.origin.clone()),
    );
    data.insert(SECRET_DATA_KEY.to_string(), Bytes::from(params.blob.clone()));

    ExchangeRecord {
        name: params.name.clone(),
        namespace: params.cluster_namespace.clone(),
        labels,
        data: Some(data),
    }
}

/// Generate a well-formed, role-tagged exchange record.
pub fn valid_record() -> impl Strategy<Value = ExchangeRecord> {
    any::<RecordParams>().prop_map(|params| record_from_params(&params))
}

/// Generate a record with one required payload key knocked out.
pub fn record_missing_one_key() -> impl Strategy<Value = ExchangeRecord> {
    (valid_record(), 0usize..4).prop_map(|(mut record, which)| {
        let key = [
            NAMESPACE_KEY,
            STORAGE_CLUSTER_NAME_KEY,
            SECRET_ORIGIN_KEY,
            SECRET_DATA_KEY,
        ][which];
        record.data.as_mut().unwrap().remove(key);
        record
    })
}
