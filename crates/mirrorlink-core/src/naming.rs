//! Deterministic naming for cross-cluster objects.
//!
//! Names must be reproducible across processes, versions, and
//! implementations: same ordered inputs, same output, always. No
//! randomness, no time-based salt.

use sha2::{Digest, Sha512};

/// Length of a truncated secret name.
///
/// 39 lowercase hex characters of a SHA-512 digest. Downstream naming
/// systems cap identifier length, and existing deployments depend on this
/// exact prefix length; it must not change.
pub const UNIQUE_SECRET_NAME_LEN: usize = 39;

/// Joined components are hashed with this delimiter. Platform naming rules
/// already forbid it inside cluster/namespace/resource names.
const COMPONENT_DELIMITER: &str = "-";

/// Hash an ordered list of name components into a 128-char lowercase hex
/// string (SHA-512 of the components joined with `-`).
///
/// Component order matters: `unique_name(&["x", "y"])` and
/// `unique_name(&["y", "x"])` differ.
pub fn unique_name(components: &[&str]) -> String {
    let joined = components.join(COMPONENT_DELIMITER);
    hex::encode(Sha512::digest(joined.as_bytes()))
}

/// Derive the name for a mirroring secret, truncated to
/// [`UNIQUE_SECRET_NAME_LEN`] characters.
///
/// With a prefix, the hash input is `(prefix, managed_cluster,
/// storage_cluster_namespace, storage_cluster_name)`; without, the prefix
/// component is absent entirely. `Some("")` is not the same as `None`: an
/// empty prefix still contributes a leading delimiter to the hash input.
pub fn unique_secret_name(
    managed_cluster: &str,
    storage_cluster_namespace: &str,
    storage_cluster_name: &str,
    prefix: Option<&str>,
) -> String {
    let full = match prefix {
        Some(prefix) => unique_name(&[
            prefix,
            managed_cluster,
            storage_cluster_namespace,
            storage_cluster_name,
        ]),
        None => unique_name(&[
            managed_cluster,
            storage_cluster_namespace,
            storage_cluster_name,
        ]),
    };
    full[..UNIQUE_SECRET_NAME_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_name_deterministic() {
        let a = unique_name(&["cluster1", "ns1", "sc1"]);
        let b = unique_name(&["cluster1", "ns1", "sc1"]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 128);
    }

    #[test]
    fn test_unique_name_order_sensitive() {
        assert_ne!(unique_name(&["x", "y"]), unique_name(&["y", "x"]));
    }

    #[test]
    fn test_unique_name_lowercase_hex() {
        let name = unique_name(&["cluster1", "ns1", "sc1"]);
        assert!(name.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_secret_name_length() {
        let name = unique_secret_name("cluster1", "ns1", "sc1", None);
        assert_eq!(name.len(), UNIQUE_SECRET_NAME_LEN);

        let prefixed = unique_secret_name("cluster1", "ns1", "sc1", Some("prefixA"));
        assert_eq!(prefixed.len(), UNIQUE_SECRET_NAME_LEN);
    }

    #[test]
    fn test_secret_name_is_digest_prefix() {
        let full = unique_name(&["cluster1", "ns1", "sc1"]);
        let short = unique_secret_name("cluster1", "ns1", "sc1", None);
        assert_eq!(short, full[..39]);
    }

    // Known-answer vectors: first 39 hex chars of SHA512 over the joined
    // input, pinned so the on-wire names never drift.
    #[test]
    fn test_secret_name_golden_no_prefix() {
        // SHA512("cluster1-ns1-sc1")
        assert_eq!(
            unique_secret_name("cluster1", "ns1", "sc1", None),
            "b9630d6daf8444d9f7639edc202b37fbc7aebca"
        );
    }

    #[test]
    fn test_secret_name_golden_with_prefix() {
        // SHA512("prefixA-cluster1-ns1-sc1")
        assert_eq!(
            unique_secret_name("cluster1", "ns1", "sc1", Some("prefixA")),
            "37eb0c16fb61305fc3bce5283eebf29faaa2d95"
        );
    }

    #[test]
    fn test_empty_prefix_differs_from_no_prefix() {
        let none = unique_secret_name("cluster1", "ns1", "sc1", None);
        // SHA512("-cluster1-ns1-sc1"): the empty prefix still adds a delimiter.
        let empty = unique_secret_name("cluster1", "ns1", "sc1", Some(""));
        assert_ne!(none, empty);
        assert_eq!(empty, "5f8a7302b4ea59a54d9bed40b374e2e1534a51d");
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Holds for arbitrary component strings, delimiter bytes included.
            #[test]
            fn prop_unique_name_deterministic(
                components in prop::collection::vec(".*", 1..5)
            ) {
                let refs: Vec<&str> = components.iter().map(String::as_str).collect();
                let first = unique_name(&refs);
                prop_assert_eq!(&first, &unique_name(&refs));
                prop_assert_eq!(first.len(), 128);
            }

            #[test]
            fn prop_secret_name_always_39_chars(
                mc in ".*", ns in ".*", sc in ".*",
                prefix in prop::option::of(".*")
            ) {
                let secret_name = unique_secret_name(&mc, &ns, &sc, prefix.as_deref());
                prop_assert_eq!(secret_name.len(), UNIQUE_SECRET_NAME_LEN);
            }
        }
    }
}
