//! # MirrorLink Testkit
//!
//! Testing utilities for the MirrorLink engine.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Helper structs for setting up record/peering scenarios
//! - **Generators**: Proptest strategies for property-based testing
//!
//! The property suite itself lives in this crate's `tests/` directory.
//!
//! ## Test Fixtures
//!
//! Quickly set up test scenarios:
//!
//! ```rust
//! use mirrorlink_testkit::fixtures::RecordFixture;
//!
//! let fixture = RecordFixture::new("ns-a", "sc-a", "ns-a");
//! let record = fixture.make_source("rec1");
//! assert!(mirrorlink_core::validate_source_record(Some(&record)).is_ok());
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use mirrorlink_testkit::generators::valid_record;
//!
//! proptest! {
//!     #[test]
//!     fn extraction_never_panics(record in valid_record()) {
//!         let _ = mirrorlink_core::peer_ref_from_record(&record);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{seeded_peering_source, RecordFixture};
pub use generators::{name, role, valid_record, RecordParams};
