//! Exclusive owner of a single fixed-capacity array allocation.
//!
//! `ArrayPtr<T>` is the raw storage layer underneath `SimpleVector`. It has no
//! notion of a logical length: every one of its `capacity` slots is always
//! initialized (new slots are default-constructed), and it is up to the owning
//! container to decide which of them hold live values.
//!
//! The allocation is released exactly once, when the `ArrayPtr` is dropped.
//! Ownership moves between instances only through [`ArrayPtr::swap`] (or by
//! moving the value itself), so at most one owner refers to a given block.

use std::ops::{Index, IndexMut};

/// A uniquely owned, fixed-capacity block of `T` slots.
pub struct ArrayPtr<T> {
    /// The owned slots; an empty slice does not allocate.
    inner: Box<[T]>,
}

impl<T> ArrayPtr<T> {
    /// Creates an empty owner that holds no allocation.
    pub fn new() -> ArrayPtr<T> {
        ArrayPtr {
            inner: Box::default(),
        }
    }

    /// Allocates storage for exactly `capacity` elements, each set to `T::default()`.
    ///
    /// A capacity of zero allocates nothing. Allocation failure aborts the process.
    pub fn with_capacity(capacity: usize) -> ArrayPtr<T>
    where
        T: Default,
    {
        if capacity == 0 {
            return ArrayPtr::new();
        }
        ArrayPtr {
            inner: std::iter::repeat_with(T::default).take(capacity).collect(),
        }
    }

    /// Takes ownership of an existing boxed slice.
    pub fn from_boxed_slice(inner: Box<[T]>) -> ArrayPtr<T> {
        ArrayPtr { inner }
    }

    /// Releases the allocation to the caller, leaving nothing behind to free.
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.inner
    }

    /// Returns the number of slots in the block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if this owner currently holds an allocation.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        !self.inner.is_empty()
    }

    /// Returns a raw pointer to the first slot, or null when nothing is allocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        if self.is_allocated() {
            self.inner.as_ptr()
        } else {
            std::ptr::null()
        }
    }

    /// Returns a mutable raw pointer to the first slot, or null when nothing is
    /// allocated.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        if self.is_allocated() {
            self.inner.as_mut_ptr()
        } else {
            std::ptr::null_mut()
        }
    }

    /// Returns all slots, live or not, as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Returns all slots, live or not, as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.inner
    }

    /// Exchanges the owned blocks of `self` and `other` without touching any element.
    #[inline]
    pub fn swap(&mut self, other: &mut ArrayPtr<T>) {
        std::mem::swap(&mut self.inner, &mut other.inner);
    }
}

impl<T> Index<usize> for ArrayPtr<T> {
    type Output = T;

    /// Returns slot `index`. The caller guarantees `index < capacity()`.
    #[inline]
    fn index(&self, index: usize) -> &T {
        debug_assert!(index < self.capacity());
        &self.inner[index]
    }
}

impl<T> IndexMut<usize> for ArrayPtr<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.capacity());
        &mut self.inner[index]
    }
}

impl<T> Default for ArrayPtr<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayPtr")
            .field("slots", &self.as_slice())
            .field("cap", &self.capacity())
            .finish()
    }
}

impl<T> From<Vec<T>> for ArrayPtr<T> {
    fn from(vec: Vec<T>) -> Self {
        ArrayPtr::from_boxed_slice(vec.into_boxed_slice())
    }
}
