//! Benchmark fixtures for comparing silt storage backends.
//!
//! Provides deterministic input generation and a generic buffer builder
//! so every backend is measured over identical data.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use silt::prelude::*;

/// Deterministic pseudo-random values for benchmark inputs.
///
/// Identical `(len, seed)` pairs always produce identical sequences, so
/// backend comparisons measure the representation, not the data.
pub fn seeded_values(len: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random()).collect()
}

/// Build a frozen buffer of any backend from the given values, through
/// the replicate/write/freeze construction path.
pub fn build_buffer<A>(values: &[u64]) -> A
where
    A: Contiguous<Item = u64>,
{
    if values.is_empty() {
        return A::empty();
    }
    A::run(|| {
        let mut staged = A::Mutable::replicate(values.len(), 0);
        for (i, &value) in values.iter().enumerate() {
            staged.write(i, value);
        }
        staged
    })
}
