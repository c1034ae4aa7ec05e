use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Index, IndexMut};

use simvec_array_ptr::ArrayPtr;
use simvec_common::{Result, result::verify_index};

use crate::reserve::ReserveRequest;

/// A growable, contiguous sequence with explicit capacity control.
///
/// `SimpleVector` owns exactly one [`ArrayPtr`] and tracks how many of its
/// slots hold live values. Slots past `len()` stay initialized but are not
/// part of the sequence; they are overwritten (or dropped with the buffer)
/// rather than dropped eagerly by `pop_back`, `erase`, `clear` or a shrinking
/// `resize`.
///
/// Growth doubles the capacity, floored at the size actually needed, so a run
/// of `n` appends moves `O(n)` elements in total.
///
/// Positions are plain indices. Slices and iterators borrowed from the vector
/// cannot outlive an operation that reallocates or shifts elements; the borrow
/// checker enforces this.
pub struct SimpleVector<T> {
    /// The owned storage. Its capacity is the vector's capacity.
    buffer: ArrayPtr<T>,
    /// Number of live elements at the front of `buffer`.
    len: usize,
}

impl<T> SimpleVector<T> {
    /// Capacity multiplier applied when an append or insert finds the buffer full.
    pub const GROWTH_FACTOR: usize = 2;

    /// Creates an empty vector with no allocation.
    pub fn new() -> SimpleVector<T> {
        SimpleVector {
            buffer: ArrayPtr::new(),
            len: 0,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns `true` if the vector contains no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.as_slice()[..self.len]
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer.as_mut_slice()[..self.len]
    }

    /// Returns a pointer to the first slot, or null if nothing is allocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buffer.as_ptr()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_index(index, self.len)?;
        Ok(&self.buffer[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index(index, self.len)?;
        Ok(&mut self.buffer[index])
    }

    /// Sets the length to zero. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Removes the last element from the sequence.
    ///
    /// The vector must not be empty. This is checked in debug builds only;
    /// a release build leaves an empty vector unchanged.
    #[inline]
    pub fn pop_back(&mut self) {
        debug_assert!(!self.is_empty(), "pop_back on an empty SimpleVector");
        self.len = self.len.saturating_sub(1);
    }

    /// Removes the element at `index`, shifting everything after it one slot
    /// to the left, and returns the position of the element that now occupies
    /// `index` (equal to `len()` if the last element was removed).
    ///
    /// `index` must refer to a live element, i.e. `index < len()`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        debug_assert!(
            index < self.len,
            "erase position {index} out of bounds for length {}",
            self.len
        );
        let len = self.len;
        self.buffer.as_mut_slice()[index..len].rotate_left(1);
        self.len -= 1;
        index
    }

    /// Exchanges the contents of `self` and `other` in O(1).
    pub fn swap(&mut self, other: &mut SimpleVector<T>) {
        self.buffer.swap(&mut other.buffer);
        std::mem::swap(&mut self.len, &mut other.len);
    }

    /// Transfers the storage out of `self` into a new vector, leaving `self`
    /// empty with no allocation.
    pub fn take(&mut self) -> SimpleVector<T> {
        std::mem::take(self)
    }

    /// Capacity to grow to when at least `required` slots are needed.
    #[inline]
    fn grown_capacity(&self, required: usize) -> usize {
        required.max(self.capacity().saturating_mul(Self::GROWTH_FACTOR))
    }
}

impl<T: Default> SimpleVector<T> {
    /// Creates a vector of `size` default-valued elements.
    pub fn with_size(size: usize) -> SimpleVector<T> {
        SimpleVector {
            buffer: ArrayPtr::with_capacity(size),
            len: size,
        }
    }

    /// Creates an empty vector with exactly `request.capacity()` allocated slots.
    pub fn with_reserved(request: ReserveRequest) -> SimpleVector<T> {
        SimpleVector {
            buffer: ArrayPtr::with_capacity(request.capacity()),
            len: 0,
        }
    }

    /// Grows the allocation to exactly `new_capacity` slots, keeping the live
    /// elements in order. Does nothing if `new_capacity <= capacity()`; never
    /// shrinks.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.reallocate(new_capacity);
        }
    }

    /// Changes the length to `new_size`.
    ///
    /// Shrinking only moves the length; the dropped tail keeps its slots.
    /// Growing fills the new positions with `T::default()` and, if the
    /// current capacity is too small, reallocates to
    /// `max(new_size, capacity() * 2)`.
    pub fn resize(&mut self, new_size: usize) {
        if new_size <= self.len {
            self.len = new_size;
            return;
        }

        if new_size > self.capacity() {
            // Slots past the moved prefix come fresh from the new buffer.
            let new_capacity = self.grown_capacity(new_size);
            self.reallocate(new_capacity);
        } else {
            self.buffer.as_mut_slice()[self.len..new_size]
                .iter_mut()
                .for_each(|slot| *slot = T::default());
        }
        self.len = new_size;
    }

    /// Appends `value` to the end, doubling the capacity if the buffer is full.
    pub fn push_back(&mut self, value: T) {
        if self.len == self.capacity() {
            let new_capacity = self.grown_capacity(self.len + 1);
            self.reallocate(new_capacity);
        }
        self.buffer[self.len] = value;
        self.len += 1;
    }

    /// Inserts `value` at `index`, shifting the tail one slot to the right, and
    /// returns the position of the inserted element.
    ///
    /// `index` must satisfy `index <= len()`; `index == len()` appends.
    /// A full buffer grows to `max(len() + 1, capacity() * 2)`; an unallocated
    /// one gets exactly one slot.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        debug_assert!(
            index <= self.len,
            "insert position {index} out of bounds for length {}",
            self.len
        );
        let len = self.len;

        if self.capacity() == 0 {
            let mut replacement = ArrayPtr::<T>::with_capacity(1);
            replacement[0] = value;
            self.buffer.swap(&mut replacement);
        } else if len < self.capacity() {
            let slots = self.buffer.as_mut_slice();
            slots[len] = value;
            slots[index..=len].rotate_right(1);
        } else {
            let new_capacity = self.grown_capacity(len + 1);
            log::trace!(
                "SimpleVector::insert: growing {} -> {new_capacity} slots at position {index}",
                self.capacity()
            );
            let mut replacement = ArrayPtr::<T>::with_capacity(new_capacity);
            let old = self.buffer.as_mut_slice();
            let new = replacement.as_mut_slice();
            new[..index].swap_with_slice(&mut old[..index]);
            new[index] = value;
            new[index + 1..=len].swap_with_slice(&mut old[index..len]);
            self.buffer.swap(&mut replacement);
        }

        self.len += 1;
        index
    }

    /// Moves the live elements into a fresh buffer of `new_capacity` slots and
    /// releases the old one.
    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);
        log::trace!(
            "SimpleVector: reallocating {} -> {new_capacity} slots, moving {} elements",
            self.capacity(),
            self.len
        );
        let len = self.len;
        let mut replacement = ArrayPtr::<T>::with_capacity(new_capacity);
        replacement.as_mut_slice()[..len].swap_with_slice(&mut self.buffer.as_mut_slice()[..len]);
        self.buffer.swap(&mut replacement);
    }
}

impl<T: Clone> SimpleVector<T> {
    /// Creates a vector of `size` copies of `value`.
    pub fn from_value(size: usize, value: T) -> SimpleVector<T> {
        SimpleVector::from(vec![value; size])
    }

    /// Creates a vector holding a copy of `values`, with capacity equal to its length.
    pub fn from_slice(values: &[T]) -> SimpleVector<T> {
        SimpleVector::from(values.to_vec())
    }
}

impl<T: Clone + Default> SimpleVector<T> {
    /// Appends a copy of every element of `values`.
    pub fn extend_from_slice(&mut self, values: &[T]) {
        let required = self.len + values.len();
        if required > self.capacity() {
            let new_capacity = self.grown_capacity(required);
            self.reallocate(new_capacity);
        }
        self.buffer.as_mut_slice()[self.len..required].clone_from_slice(values);
        self.len = required;
    }
}

impl<T> Index<usize> for SimpleVector<T> {
    type Output = T;

    /// Unchecked access: `index < len()` is asserted in debug builds only.
    #[inline]
    fn index(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len,
            "index {index} out of bounds for length {}",
            self.len
        );
        &self.buffer[index]
    }
}

impl<T> IndexMut<usize> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "index {index} out of bounds for length {}",
            self.len
        );
        &mut self.buffer[index]
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    fn clone(&self) -> SimpleVector<T> {
        SimpleVector::from_slice(self.as_slice())
    }

    /// Copy-and-swap: the replacement is fully built before `self` is touched.
    fn clone_from(&mut self, source: &Self) {
        let mut replacement = source.clone();
        self.swap(&mut replacement);
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleVector")
            .field("values", &self.as_slice())
            .field("len", &self.len)
            .field("cap", &self.capacity())
            .finish()
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(vec: Vec<T>) -> Self {
        let len = vec.len();
        SimpleVector {
            buffer: ArrayPtr::from(vec),
            len,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(values: [T; N]) -> Self {
        SimpleVector::from(Vec::from(values))
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(values: &[T]) -> Self {
        SimpleVector::from_slice(values)
    }
}

impl<T: Default> From<ReserveRequest> for SimpleVector<T> {
    fn from(request: ReserveRequest) -> Self {
        SimpleVector::with_reserved(request)
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SimpleVector::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let required = self.len.saturating_add(lower);
        if required > self.capacity() {
            let new_capacity = self.grown_capacity(required);
            self.reallocate(new_capacity);
        }
        iter.for_each(|value| self.push_back(value));
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Yields the live elements by value; dead tail slots are dropped.
    fn into_iter(self) -> Self::IntoIter {
        let mut values = self.buffer.into_boxed_slice().into_vec();
        values.truncate(self.len);
        values.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reserve::reserve;

    #[test]
    fn test_default_is_empty() {
        let v = SimpleVector::<i32>::new();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
        assert!(v.as_ptr().is_null());
        assert_eq!(v, SimpleVector::default());
    }

    #[test]
    fn test_with_size_default_values() {
        let v = SimpleVector::<i32>::with_size(5);
        assert_eq!(v.len(), 5);
        assert_eq!(v.capacity(), 5);
        assert!(v.iter().all(|&x| x == 0));
    }

    #[test]
    fn test_from_value() {
        let v = SimpleVector::from_value(3, 42);
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.as_slice(), &[42, 42, 42]);
    }

    #[test]
    fn test_from_list() {
        let v = SimpleVector::from([1, 2, 3]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_reserve_request_construction() {
        let v = SimpleVector::<i32>::from(reserve(5));
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn test_at_checked() {
        let mut v = SimpleVector::from([1, 2, 3]);
        assert_eq!(*v.at(2).unwrap(), 3);
        *v.at_mut(0).unwrap() = 10;
        assert_eq!(v[0], 10);
        assert!(v.at(3).unwrap_err().is_out_of_range());
        assert!(v.at_mut(100).is_err());
    }

    #[test]
    fn test_at_ignores_dead_slots() {
        let mut v = SimpleVector::from([1, 2, 3]);
        v.pop_back();
        assert_eq!(v.capacity(), 3);
        assert!(v.at(2).is_err());
    }

    #[test]
    fn test_push_back_growth_from_zero() {
        let mut v = SimpleVector::new();
        v.push_back(1);
        assert_eq!(v.capacity(), 1);
        v.push_back(2);
        assert_eq!(v.capacity(), 2);
        v.push_back(3);
        assert_eq!(v.capacity(), 4);
        v.push_back(4);
        assert_eq!(v.capacity(), 4);
        v.push_back(5);
        assert_eq!(v.capacity(), 8);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_push_back_move_only() {
        let mut v = SimpleVector::new();
        for i in 0..10 {
            v.push_back(Box::new(i));
        }
        assert_eq!(v.len(), 10);
        assert_eq!(*v[7], 7);
    }

    #[test]
    fn test_insert_into_unallocated() {
        let mut v = SimpleVector::new();
        let pos = v.insert(0, 7);
        assert_eq!(pos, 0);
        assert_eq!(v.len(), 1);
        assert_eq!(v.capacity(), 1);
        assert_eq!(v[0], 7);
    }

    #[test]
    fn test_insert_within_capacity() {
        let mut v = SimpleVector::from(reserve(8));
        v.extend([1, 2, 3, 4]);
        let ptr = v.as_ptr();
        let pos = v.insert(1, 99);
        assert_eq!(pos, 1);
        assert_eq!(v.as_slice(), &[1, 99, 2, 3, 4]);
        assert_eq!(v.capacity(), 8);
        assert_eq!(v.as_ptr(), ptr);
    }

    #[test]
    fn test_insert_when_full_doubles() {
        let mut v = SimpleVector::from([1, 2, 3, 4]);
        let pos = v.insert(2, 99);
        assert_eq!(pos, 2);
        assert_eq!(v.capacity(), 8);
        assert_eq!(v.as_slice(), &[1, 2, 99, 3, 4]);
    }

    #[test]
    fn test_insert_front_and_end() {
        let mut v = SimpleVector::from([2, 3]);
        v.insert(0, 1);
        let end = v.len();
        v.insert(end, 4);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_returns_usable_position_after_growth() {
        let mut v = SimpleVector::from(["a".to_string(), "c".to_string()]);
        let pos = v.insert(1, "b".to_string());
        v[pos].push('!');
        assert_eq!(v.as_slice(), &["a", "b!", "c"]);
    }

    #[test]
    fn test_erase() {
        let mut v = SimpleVector::from([1, 2, 3, 4]);
        let next = v.erase(1);
        assert_eq!(next, 1);
        assert_eq!(v[next], 3);
        assert_eq!(v.as_slice(), &[1, 3, 4]);
        assert_eq!(v.capacity(), 4);

        let next = v.erase(2);
        assert_eq!(next, v.len());
        assert_eq!(v.as_slice(), &[1, 3]);
    }

    #[test]
    fn test_pop_back_keeps_capacity() {
        let mut v = SimpleVector::from([1, 2]);
        v.pop_back();
        assert_eq!(v.as_slice(), &[1]);
        assert_eq!(v.capacity(), 2);
        v.pop_back();
        assert!(v.is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "pop_back on an empty SimpleVector")]
    fn test_pop_back_empty_asserts() {
        let mut v = SimpleVector::<i32>::new();
        v.pop_back();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of bounds")]
    fn test_unchecked_index_asserts_on_dead_slot() {
        let mut v = SimpleVector::from([1, 2, 3]);
        v.pop_back();
        let _dead = v[2];
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "erase position")]
    fn test_erase_at_end_asserts() {
        let mut v = SimpleVector::from([1, 2, 3]);
        v.erase(3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "insert position")]
    fn test_insert_past_end_asserts() {
        let mut v = SimpleVector::from([1, 2, 3]);
        v.insert(5, 0);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut v = SimpleVector::from([1, 2, 3]);
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 3);
        v.push_back(9);
        assert_eq!(v.as_slice(), &[9]);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn test_reserve() {
        let mut v = SimpleVector::from([1, 2, 3]);
        v.reserve(10);
        assert_eq!(v.capacity(), 10);
        assert_eq!(v.as_slice(), &[1, 2, 3]);

        let ptr = v.as_ptr();
        v.reserve(5);
        v.reserve(10);
        assert_eq!(v.capacity(), 10);
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_ptr(), ptr);
    }

    #[test]
    fn test_resize_shrink_then_grow_within_capacity() {
        let mut v = SimpleVector::from([1, 2, 3, 4, 5]);
        v.resize(2);
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.capacity(), 5);
        v.resize(4);
        assert_eq!(v.as_slice(), &[1, 2, 0, 0]);
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn test_resize_same_size_is_noop() {
        let mut v = SimpleVector::from([1, 2, 3]);
        v.reserve(6);
        let ptr = v.as_ptr();
        v.resize(3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!(v.capacity(), 6);
        assert_eq!(v.as_ptr(), ptr);
    }

    #[test]
    fn test_resize_beyond_capacity() {
        let mut v = SimpleVector::from([1, 2, 3]);
        v.resize(4);
        assert_eq!(v.capacity(), 6);
        assert_eq!(v.as_slice(), &[1, 2, 3, 0]);

        v.resize(20);
        assert_eq!(v.capacity(), 20);
        assert_eq!(v.len(), 20);
        assert_eq!(&v.as_slice()[..4], &[1, 2, 3, 0]);
        assert!(v.as_slice()[4..].iter().all(|&x| x == 0));
    }

    #[test]
    fn test_extend_from_slice() {
        let mut v = SimpleVector::from([1]);
        v.extend_from_slice(&[2, 3, 4]);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(v.capacity(), 4);
        v.extend_from_slice(&[5]);
        assert_eq!(v.capacity(), 8);
        v.extend_from_slice(&[]);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_swap() {
        let mut a = SimpleVector::from([1, 2, 3]);
        let mut b = SimpleVector::from(reserve(10));
        b.push_back(9);
        a.swap(&mut b);
        assert_eq!(a.as_slice(), &[9]);
        assert_eq!(a.capacity(), 10);
        assert_eq!(b.as_slice(), &[1, 2, 3]);
        assert_eq!(b.capacity(), 3);
    }

    #[test]
    fn test_take_leaves_source_empty() {
        let mut a = SimpleVector::from([1, 2, 3]);
        let ptr = a.as_ptr();
        let b = a.take();
        assert_eq!(b.as_slice(), &[1, 2, 3]);
        assert_eq!(b.as_ptr(), ptr);
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = SimpleVector::from([1, 2, 3]);
        original.reserve(10);
        let mut copy = original.clone();
        assert_eq!(copy, original);
        assert_eq!(copy.capacity(), 3);
        copy[0] = 100;
        copy.push_back(4);
        assert_eq!(original.as_slice(), &[1, 2, 3]);
        assert_ne!(copy, original);
    }

    #[test]
    fn test_clone_from() {
        let source = SimpleVector::from([4, 5]);
        let mut target = SimpleVector::from([1, 2, 3]);
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(source.as_slice(), &[4, 5]);
    }

    #[derive(Debug, Default, PartialEq)]
    struct Fragile(u32);

    impl Clone for Fragile {
        fn clone(&self) -> Self {
            if self.0 == 13 {
                panic!("cannot clone Fragile(13)");
            }
            Fragile(self.0)
        }
    }

    #[test]
    fn test_clone_from_failure_leaves_target_unchanged() {
        use std::panic::{AssertUnwindSafe, catch_unwind};

        let source = SimpleVector::from([Fragile(1), Fragile(13)]);
        let mut target = SimpleVector::from([Fragile(7)]);
        target.reserve(4);
        let ptr = target.as_ptr();

        let result = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));

        assert!(result.is_err());
        assert_eq!(target.as_slice(), &[Fragile(7)]);
        assert_eq!(target.len(), 1);
        assert_eq!(target.capacity(), 4);
        assert_eq!(target.as_ptr(), ptr);
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn test_equality_ignores_capacity_and_dead_slots() {
        let a = SimpleVector::from([1, 2]);
        let mut b = SimpleVector::from([1, 2, 3]);
        b.reserve(16);
        assert_ne!(a, b);
        b.pop_back();
        assert_eq!(a, b);
    }

    #[test]
    fn test_ordering() {
        let a = SimpleVector::from([1, 2, 3]);
        let b = SimpleVector::from([1, 2, 4]);
        let c = SimpleVector::from([1, 2]);
        assert!(a < b);
        assert!(b > a);
        assert!(c < a);
        assert!(a <= a.clone());
        assert!(a >= a.clone());
        assert!(a >= c);
        assert!(!(a < a.clone()));
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert!(SimpleVector::<i32>::new() < c);
    }

    #[test]
    fn test_iteration() {
        let mut v = SimpleVector::from([1, 2, 3]);
        v.reserve(8);
        let view = v.iter();
        assert_eq!(view.clone().count(), 3);
        assert_eq!(view.sum::<i32>(), 6);

        for x in &mut v {
            *x *= 10;
        }
        let collected: Vec<_> = (&v).into_iter().copied().collect();
        assert_eq!(collected, vec![10, 20, 30]);

        let owned: Vec<_> = v.into_iter().collect();
        assert_eq!(owned, vec![10, 20, 30]);
    }

    #[test]
    fn test_from_iterator_and_extend() {
        let mut v: SimpleVector<i32> = (1..=3).collect();
        assert_eq!(v.capacity(), 3);
        v.extend(4..=6);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(v.capacity(), 6);
    }

    #[test]
    fn test_debug_format() {
        let mut v = SimpleVector::from([1, 2]);
        v.reserve(4);
        assert_eq!(
            format!("{v:?}"),
            "SimpleVector { values: [1, 2], len: 2, cap: 4 }"
        );
    }
}
