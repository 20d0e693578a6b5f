//! Proptest generators for property-based testing.

use proptest::prelude::*;

use cove_ident::{InstanceId, ObjectId, Signature};

/// Generate an arbitrary ObjectId (both partitions, sentinel included).
pub fn object_id() -> impl Strategy<Value = ObjectId> {
    any::<u64>().prop_map(ObjectId::new)
}

/// Generate an ObjectId from the composed-object partition.
pub fn non_blob_object_id() -> impl Strategy<Value = ObjectId> {
    (0..=0x7fff_ffff_ffff_ffffu64).prop_map(ObjectId::new)
}

/// Generate a blob ObjectId.
pub fn blob_object_id() -> impl Strategy<Value = ObjectId> {
    any::<u64>().prop_map(ObjectId::blob)
}

/// Generate an arbitrary Signature (sentinel included).
pub fn signature() -> impl Strategy<Value = Signature> {
    any::<u64>().prop_map(Signature::new)
}

/// Generate a Signature that is never the invalid sentinel.
pub fn valid_signature() -> impl Strategy<Value = Signature> {
    (0..u64::MAX).prop_map(Signature::new)
}

/// Generate an InstanceId with a small ordinal, like a real cluster.
pub fn instance_id() -> impl Strategy<Value = InstanceId> {
    (0u64..64).prop_map(InstanceId::new)
}

/// Generate a well-formed encoded hex id string (unpadded forms included).
pub fn encoded_hex_id() -> impl Strategy<Value = String> {
    "o[0-9a-f]{1,16}".prop_map(String::from)
}
