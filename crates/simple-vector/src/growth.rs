//! Capacity growth policy.
//!
//! Appending operations (`push_back`, `insert`) double the current
//! capacity, with a floor of [`GrowthPolicy::MIN_NON_ZERO_CAP`] when the
//! vector has never allocated. A growing `resize` allocates
//! [`GrowthPolicy::RESIZE_GROWTH_FACTOR`] times the requested length.
//! `reserve` is exact and does not go through this module.

use crate::error::VectorError;

/// Growth constants and the checked arithmetic built on them.
#[derive(Clone, Copy, Debug)]
pub struct GrowthPolicy;

impl GrowthPolicy {
    /// Multiplier applied to the current capacity when an append finds the
    /// buffer full.
    pub const GROWTH_FACTOR: usize = 2;

    /// Capacity chosen by the first append into an unallocated vector.
    pub const MIN_NON_ZERO_CAP: usize = 1;

    /// Multiplier applied to the requested length when `resize` outgrows
    /// the buffer.
    pub const RESIZE_GROWTH_FACTOR: usize = 2;

    /// New capacity for an append into a full buffer of `capacity` slots.
    ///
    /// Returns `max(MIN_NON_ZERO_CAP, GROWTH_FACTOR * capacity)`, or
    /// [`VectorError::CapacityOverflow`] if the product overflows.
    pub fn grow_for_append(capacity: usize) -> Result<usize, VectorError> {
        capacity
            .checked_mul(Self::GROWTH_FACTOR)
            .map(|cap| cap.max(Self::MIN_NON_ZERO_CAP))
            .ok_or(VectorError::CapacityOverflow {
                requested: capacity,
            })
    }

    /// New capacity for a `resize` to `len` elements that exceeds the
    /// current capacity.
    ///
    /// Returns `RESIZE_GROWTH_FACTOR * len`, or
    /// [`VectorError::CapacityOverflow`] if the product overflows.
    pub fn grow_for_resize(len: usize) -> Result<usize, VectorError> {
        len.checked_mul(Self::RESIZE_GROWTH_FACTOR)
            .ok_or(VectorError::CapacityOverflow { requested: len })
    }
}
