//! # Cove Ident Testkit
//!
//! Testing utilities for the Cove identifier primitives.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known encodings with expected outputs for cross-SDK verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Deterministic id factories for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! Golden vectors ensure the canonical encodings stay identical across
//! implementations:
//!
//! ```rust
//! use cove_ident_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok, encoded) in verify_all_vectors() {
//!     println!("{}: {} ({})", name, encoded, ok);
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use cove_ident_testkit::generators::object_id;
//!
//! proptest! {
//!     #[test]
//!     fn encoding_roundtrips(id in object_id()) {
//!         prop_assert_eq!(id.to_string().parse().unwrap(), id);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly set up reproducible id streams:
//!
//! ```rust
//! use cove_ident_testkit::fixtures::IdFixture;
//!
//! let mut fixture = IdFixture::with_seed(42);
//! let id = fixture.object_id();
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_instance_fixtures, IdFixture};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
