//! Benchmark workloads for simple-vector.
//!
//! - [`filled`]: a vector of `0..len` built by repeated `push_back`
//! - [`insert_positions`]: deterministic insert positions via seed
//! - [`erase_positions`]: deterministic erase positions via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use simple_vector::{Vector, VectorError};

/// Build a vector holding `0..len` through the append path.
pub fn filled(len: u64) -> Result<Vector<u64>, VectorError> {
    let mut v = Vector::new();
    for i in 0..len {
        v.push_back(i)?;
    }
    Ok(v)
}

/// Positions for `count` inserts into a vector that starts at `start_len`
/// elements and grows by one per insert.
///
/// Position `i` is always valid (`<= start_len + i`).
pub fn insert_positions(start_len: usize, count: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| (rng.next_u64() % (start_len + i + 1) as u64) as usize)
        .collect()
}

/// Positions for `count` erases from a vector of `start_len` elements that
/// shrinks by one per erase.
///
/// # Panics
///
/// Panics if `count > start_len`.
pub fn erase_positions(start_len: usize, count: usize, seed: u64) -> Vec<usize> {
    assert!(count <= start_len, "cannot erase {count} of {start_len}");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| (rng.next_u64() % (start_len - i) as u64) as usize)
        .collect()
}
