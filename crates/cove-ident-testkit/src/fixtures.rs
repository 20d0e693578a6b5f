//! Test fixtures and helpers.
//!
//! Common setup code for tests that need streams of distinct ids.

use cove_ident::{InstanceId, ObjectId, Signature};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A deterministic factory for identifier values.
///
/// A fixture seeded with the same value always yields the same id
/// sequence, so downstream tests stay reproducible.
pub struct IdFixture {
    rng: StdRng,
    /// The instance this fixture mints ids for.
    pub instance: InstanceId,
}

impl IdFixture {
    /// Create a fixture with an arbitrary seed.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create a deterministic fixture from a seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            instance: InstanceId::new(0),
        }
    }

    /// Mint a composed-object id (never a blob, never the sentinel).
    pub fn object_id(&mut self) -> ObjectId {
        ObjectId::new(self.rng.gen::<u64>() & 0x7fff_ffff_ffff_ffff)
    }

    /// Mint a blob id.
    pub fn blob_id(&mut self) -> ObjectId {
        ObjectId::blob(self.rng.gen::<u64>())
    }

    /// Mint a signature (never the invalid sentinel).
    pub fn signature(&mut self) -> Signature {
        Signature::new(self.rng.gen_range(0..u64::MAX))
    }
}

impl Default for IdFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create fixtures for a simulated cluster of `count` instances.
pub fn multi_instance_fixtures(count: usize) -> Vec<IdFixture> {
    (0..count)
        .map(|i| {
            let mut fixture = IdFixture::with_seed(i as u64);
            fixture.instance = InstanceId::new(i as u64);
            fixture
        })
        .collect()
}
