//! Capacity reservation requests.
//!
//! `SimpleVector::from(reserve(n))` creates an empty vector with room for `n`
//! elements, which reads differently at the call site from
//! `SimpleVector::with_size(n)` (n default elements).

/// A request to construct a vector with reserved, but unused, capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveRequest {
    capacity: usize,
}

impl ReserveRequest {
    pub fn new(capacity: usize) -> ReserveRequest {
        ReserveRequest { capacity }
    }

    /// Number of slots the constructed vector should allocate.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Builds a [`ReserveRequest`] for `capacity` slots.
pub fn reserve(capacity: usize) -> ReserveRequest {
    ReserveRequest::new(capacity)
}
