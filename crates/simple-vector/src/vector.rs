//! The growable contiguous container.
//!
//! [`Vector`] layers a live-element count over a [`RawBuffer`]. Slots
//! `[0, size)` hold initialised values; slots `[size, capacity)` are
//! uninitialised and never read. Every mutation keeps that split exact,
//! including on unwind: the size is advanced one slot at a time as values
//! are written, so a panicking constructor never exposes an uninitialised
//! slot and never leaks a constructed one.
//!
//! Relocation into a larger buffer is a bitwise move and cannot fail. Each
//! growing operation allocates the new buffer first, so an allocation
//! failure leaves the vector exactly as it was.

#![allow(unsafe_code)]

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::slice::{self, SliceIndex};

use crate::error::VectorError;
use crate::growth::GrowthPolicy;
use crate::raw::RawBuffer;

/// A contiguous growable sequence of `T`.
///
/// Positions are plain indices. Any operation that may reallocate or shift
/// elements invalidates previously obtained raw pointers (`begin`, `end`,
/// `as_ptr`); the borrow checker already rejects stale references.
pub struct Vector<T> {
    buf: RawBuffer<T>,
    size: usize,
}

impl<T> Vector<T> {
    /// An empty vector. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::empty(),
            size: 0,
        }
    }

    /// `n` default-constructed elements; `size == capacity == n`.
    pub fn with_size(n: usize) -> Result<Self, VectorError>
    where
        T: Default,
    {
        let mut vector = Self::from_reservation(n)?;
        vector.fill_tail_with(n, T::default);
        Ok(vector)
    }

    /// `n` clones of `value`; `size == capacity == n`.
    pub fn with_size_fill(n: usize, value: &T) -> Result<Self, VectorError>
    where
        T: Clone,
    {
        let mut vector = Self::from_reservation(n)?;
        vector.fill_tail_with(n, || value.clone());
        Ok(vector)
    }

    /// Move the elements of `init` in order into a buffer of exactly
    /// `init.len()` slots.
    ///
    /// An iterator that under-reports its length is truncated to the
    /// reported length; one that over-reports yields a shorter vector.
    pub fn from_sequence<I>(init: I) -> Result<Self, VectorError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = init.into_iter();
        let mut vector = Self::from_reservation(iter.len())?;
        for item in iter.take(vector.capacity()) {
            // SAFETY: `take` bounds the writes to the reserved capacity.
            unsafe { vector.push_unchecked(item) };
        }
        Ok(vector)
    }

    /// An empty vector with exactly `capacity` reserved slots.
    pub fn from_reservation(capacity: usize) -> Result<Self, VectorError> {
        let mut vector = Self::new();
        vector.reserve(capacity)?;
        Ok(vector)
    }

    /// Element-wise copy into a buffer of exactly `self.size()` slots.
    ///
    /// The copy never shares storage with `self`.
    pub fn try_clone(&self) -> Result<Self, VectorError>
    where
        T: Clone,
    {
        let mut copy = Self::from_reservation(self.size)?;
        for item in self.iter() {
            // SAFETY: `copy` has exactly `self.size` slots and receives
            // `self.size` elements.
            unsafe { copy.push_unchecked(item.clone()) };
        }
        Ok(copy)
    }

    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of slots available without reallocation.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Whether the vector holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Checked access.
    ///
    /// # Errors
    ///
    /// [`VectorError::OutOfRange`] if `index >= size`.
    pub fn at(&self, index: usize) -> Result<&T, VectorError> {
        let size = self.size;
        self.as_slice()
            .get(index)
            .ok_or(VectorError::OutOfRange { index, size })
    }

    /// Checked mutable access.
    ///
    /// # Errors
    ///
    /// [`VectorError::OutOfRange`] if `index >= size`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, VectorError> {
        let size = self.size;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(VectorError::OutOfRange { index, size })
    }

    /// Raw position of the first element.
    pub fn begin(&self) -> *const T {
        self.as_ptr()
    }

    /// Raw position one past the last live element.
    pub fn end(&self) -> *const T {
        // SAFETY: `size <= capacity`, so the result is within or one past
        // the allocation.
        unsafe { self.as_ptr().add(self.size) }
    }

    /// Pointer to the first slot. Never null; dangling when unallocated.
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_non_null().as_ptr()
    }

    /// Mutable pointer to the first slot. Never null; dangling when
    /// unallocated.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_non_null().as_ptr()
    }

    /// The live prefix as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, size) are initialised and the base is non-null
        // and aligned even when unallocated.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.size) }
    }

    /// The live prefix as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.size) }
    }

    /// Destroy every live element front to back. Capacity is kept.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Change the number of live elements to `new_size`.
    ///
    /// Shrinking destroys `[new_size, size)`. Growing within capacity
    /// default-constructs `[size, new_size)`, each slot exactly once.
    /// Growing past capacity allocates `2 * new_size` slots; the new
    /// elements are constructed in the fresh buffer before it replaces
    /// the old one, so a panicking `T::default` leaves `self` untouched.
    ///
    /// # Errors
    ///
    /// [`VectorError::CapacityOverflow`] or [`VectorError::AllocationError`]
    /// when growing past capacity fails; the vector is unchanged.
    pub fn resize(&mut self, new_size: usize) -> Result<(), VectorError>
    where
        T: Default,
    {
        if new_size <= self.size {
            self.truncate(new_size);
            return Ok(());
        }
        if new_size <= self.capacity() {
            self.fill_tail_with(new_size, T::default);
            return Ok(());
        }

        let mut fresh = RawBuffer::<T>::new(GrowthPolicy::grow_for_resize(new_size)?)?;
        let dst = fresh.as_non_null().as_ptr();
        let mut tail = PartialTail {
            base: dst,
            start: self.size,
            end: self.size,
        };
        while tail.end < new_size {
            // SAFETY: tail.end < new_size <= fresh.len(); slot is unwritten.
            unsafe { dst.add(tail.end).write(T::default()) };
            tail.end += 1;
        }
        mem::forget(tail);
        // SAFETY: `fresh` has room for `self.size` more slots below the
        // tail, and the two allocations never overlap.
        unsafe { ptr::copy_nonoverlapping(self.as_ptr(), dst, self.size) };
        self.buf.swap(&mut fresh);
        self.size = new_size;
        Ok(())
    }

    /// Append `value`.
    ///
    /// When full, the buffer grows to `max(1, 2 * capacity)`.
    ///
    /// # Errors
    ///
    /// [`VectorError::CapacityOverflow`] or [`VectorError::AllocationError`]
    /// if growth fails; the vector is unchanged and `value` is dropped.
    pub fn push_back(&mut self, value: T) -> Result<(), VectorError> {
        if self.size == self.capacity() {
            self.relocate(GrowthPolicy::grow_for_append(self.capacity())?)?;
        }
        // SAFETY: size < capacity after the growth check.
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Insert `value` at `index`, shifting `[index, size)` one slot right.
    ///
    /// When full, the buffer grows to `max(1, 2 * capacity)` and the
    /// elements are relocated around the gap in a single pass. Returns
    /// `index`, the position of the inserted element.
    ///
    /// # Errors
    ///
    /// [`VectorError::CapacityOverflow`] or [`VectorError::AllocationError`]
    /// if growth fails; the vector is unchanged and `value` is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `index > size`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, VectorError> {
        assert!(
            index <= self.size,
            "insert position {index} out of bounds for size {}",
            self.size
        );
        let tail_len = self.size - index;
        if self.size < self.capacity() {
            // SAFETY: size < capacity, so slot `size` exists; `ptr::copy`
            // handles the overlapping shift.
            unsafe {
                let gap = self.as_mut_ptr().add(index);
                ptr::copy(gap, gap.add(1), tail_len);
                gap.write(value);
            }
        } else {
            let mut fresh = RawBuffer::<T>::new(GrowthPolicy::grow_for_append(self.capacity())?)?;
            // SAFETY: fresh holds at least size + 1 slots and does not
            // overlap the current buffer. Elements are moved bitwise; the
            // old buffer is released without dropping them.
            unsafe {
                let src = self.as_ptr();
                let dst = fresh.as_non_null().as_ptr();
                ptr::copy_nonoverlapping(src, dst, index);
                dst.add(index).write(value);
                ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), tail_len);
            }
            self.buf.swap(&mut fresh);
        }
        self.size += 1;
        Ok(index)
    }

    /// Remove and return the last element, or `None` when empty.
    ///
    /// Dropping the returned value destroys it.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }
        self.size -= 1;
        // SAFETY: slot `size` was live and is now outside the live prefix.
        Some(unsafe { self.as_ptr().add(self.size).read() })
    }

    /// Remove and return the element at `index`, shifting the tail left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.size,
            "erase position {index} out of bounds for size {}",
            self.size
        );
        // SAFETY: index < size; the read takes ownership of the element
        // before its slot is overwritten by the shift.
        unsafe {
            let slot = self.as_mut_ptr().add(index);
            let removed = slot.read();
            ptr::copy(slot.add(1), slot, self.size - index - 1);
            self.size -= 1;
            removed
        }
    }

    /// Destroy the element at `index`, shifting the tail left. Returns
    /// `index`, now the position of the element that followed.
    ///
    /// # Panics
    ///
    /// Panics if `index >= size`.
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Exchange contents with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.size, &mut other.size);
    }

    /// Ensure room for `capacity` slots in total.
    ///
    /// Grows to exactly `capacity` when it exceeds the current capacity;
    /// otherwise does nothing. Size is unchanged.
    ///
    /// # Errors
    ///
    /// [`VectorError::CapacityOverflow`] or [`VectorError::AllocationError`];
    /// the vector is unchanged.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), VectorError> {
        if capacity <= self.capacity() {
            return Ok(());
        }
        self.relocate(capacity)
    }

    /// Copy assignment: replace the contents with clones of `rhs`.
    ///
    /// The copy is built before anything is released (copy-and-swap), so
    /// a failed allocation or panicking clone leaves `self` unchanged.
    pub fn assign_from(&mut self, rhs: &Self) -> Result<(), VectorError>
    where
        T: Clone,
    {
        let mut copy = rhs.try_clone()?;
        self.swap(&mut copy);
        Ok(())
    }

    /// Whether the buffer/size invariants hold.
    pub fn check_invariants(&self) -> bool {
        self.size <= self.capacity() && self.buf.get().is_null() == (self.capacity() == 0)
    }

    /// Move the live prefix into a fresh buffer of `capacity` slots.
    fn relocate(&mut self, capacity: usize) -> Result<(), VectorError> {
        debug_assert!(capacity >= self.size);
        let mut fresh = RawBuffer::<T>::new(capacity)?;
        // SAFETY: fresh holds at least `size` slots and does not overlap
        // the current buffer. The old buffer is released without dropping
        // the moved-out elements.
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr(), fresh.as_non_null().as_ptr(), self.size);
        }
        self.buf.swap(&mut fresh);
        debug_assert!(self.check_invariants());
        Ok(())
    }

    /// Write `value` into slot `size` and extend the live prefix.
    ///
    /// # Safety
    ///
    /// `size < capacity`.
    unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.size < self.capacity());
        self.as_mut_ptr().add(self.size).write(value);
        self.size += 1;
    }

    /// Construct `[size, new_size)` in place. Requires `new_size <= capacity`.
    fn fill_tail_with(&mut self, new_size: usize, mut make: impl FnMut() -> T) {
        debug_assert!(new_size <= self.capacity());
        while self.size < new_size {
            // SAFETY: size < new_size <= capacity.
            unsafe { self.push_unchecked(make()) };
        }
    }

    /// Destroy `[new_size, size)`. No-op when `new_size >= size`.
    fn truncate(&mut self, new_size: usize) {
        if new_size >= self.size {
            return;
        }
        let doomed: *mut [T] = &mut self.as_mut_slice()[new_size..];
        // Shrink first: a panicking destructor must not cause a double drop.
        self.size = new_size;
        // SAFETY: the slots were live and are now outside the live prefix.
        unsafe { ptr::drop_in_place(doomed) };
    }

    /// Hand the buffer and live length to the caller, leaving `self` empty.
    pub(crate) fn into_raw_parts(mut self) -> (RawBuffer<T>, usize) {
        let size = mem::replace(&mut self.size, 0);
        (mem::take(&mut self.buf), size)
    }
}

/// Drops the elements constructed so far in a not-yet-installed buffer.
struct PartialTail<T> {
    base: *mut T,
    start: usize,
    end: usize,
}

impl<T> Drop for PartialTail<T> {
    fn drop(&mut self) {
        // SAFETY: [start, end) were constructed and are owned by nobody else.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.base.add(self.start),
                self.end - self.start,
            ));
        }
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: the live prefix is initialised; `buf` frees the memory.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|err| err.abort())
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.assign_from(source) {
            err.abort();
        }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for Vector<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &I::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for Vector<T> {
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            if let Err(err) = self.push_back(item) {
                err.abort();
            }
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vector = Self::new();
        vector.extend(iter);
        vector
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(init: [T; N]) -> Self {
        Self::from_sequence(init).unwrap_or_else(|err| err.abort())
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Clone>(v: &Vector<T>) -> Vec<T> {
        v.iter().cloned().collect()
    }

    #[test]
    fn new_is_unallocated() {
        let v: Vector<i32> = Vector::new();
        assert_eq!(v.size(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
        assert!(v.check_invariants());
    }

    #[test]
    fn with_size_default_constructs() {
        let v: Vector<i32> = Vector::with_size(5).unwrap();
        assert_eq!(v.size(), 5);
        assert_eq!(v.capacity(), 5);
        assert!(v.iter().all(|&x| x == 0));
    }

    #[test]
    fn with_size_zero_does_not_allocate() {
        let v: Vector<String> = Vector::with_size(0).unwrap();
        assert_eq!(v.capacity(), 0);
        assert!(v.check_invariants());
    }

    #[test]
    fn with_size_fill_clones_value() {
        let v = Vector::with_size_fill(3, &"x".to_string()).unwrap();
        assert_eq!(collect(&v), ["x", "x", "x"]);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn from_sequence_sizes_exactly() {
        let v = Vector::from_sequence(vec![1, 2, 3, 4]).unwrap();
        assert_eq!(v.size(), 4);
        assert_eq!(v.capacity(), 4);
        assert_eq!(collect(&v), [1, 2, 3, 4]);
    }

    #[test]
    fn from_reservation_reserves_without_elements() {
        let v: Vector<u8> = Vector::from_reservation(16).unwrap();
        assert_eq!(v.size(), 0);
        assert_eq!(v.capacity(), 16);
    }

    #[test]
    fn at_reports_out_of_range() {
        let v = Vector::from([1, 2, 3]);
        assert_eq!(*v.at(2).unwrap(), 3);
        assert_eq!(
            v.at(3).unwrap_err(),
            VectorError::OutOfRange { index: 3, size: 3 }
        );
    }

    #[test]
    fn at_mut_writes_through() {
        let mut v = Vector::from([1, 2, 3]);
        *v.at_mut(1).unwrap() = 20;
        assert_eq!(v[1], 20);
        assert!(v.at_mut(3).is_err());
    }

    #[test]
    #[should_panic]
    fn subscript_past_size_panics() {
        let v = Vector::from([1, 2, 3]);
        let _ = v[3];
    }

    #[test]
    fn subscript_ranges_slice_the_live_prefix() {
        let v = Vector::from([1, 2, 3, 4]);
        assert_eq!(&v[1..3], &[2, 3]);
    }

    #[test]
    fn begin_end_span_live_prefix() {
        let mut v: Vector<u32> = Vector::from_reservation(8).unwrap();
        v.push_back(1).unwrap();
        v.push_back(2).unwrap();
        // SAFETY: both pointers come from the same allocation.
        let span = unsafe { v.end().offset_from(v.begin()) };
        assert_eq!(span, 2);
    }

    #[test]
    fn push_back_doubles_capacity() {
        let mut v = Vector::new();
        let mut caps = vec![v.capacity()];
        for i in 0..5 {
            v.push_back(i).unwrap();
            caps.push(v.capacity());
        }
        assert_eq!(caps, [0, 1, 2, 4, 4, 8]);
    }

    #[test]
    fn insert_in_place_shifts_tail() {
        let mut v: Vector<i32> = Vector::from_reservation(4).unwrap();
        v.extend([1, 2, 3]);
        let pos = v.insert(1, 9).unwrap();
        assert_eq!(pos, 1);
        assert_eq!(collect(&v), [1, 9, 2, 3]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn insert_when_full_relocates_around_gap() {
        let mut v = Vector::from([1, 2, 3]);
        let pos = v.insert(2, 7).unwrap();
        assert_eq!(pos, 2);
        assert_eq!(collect(&v), [1, 2, 7, 3]);
        assert_eq!(v.capacity(), 6);
    }

    #[test]
    fn insert_at_begin_of_empty() {
        let mut v = Vector::new();
        assert_eq!(v.insert(0, 'a').unwrap(), 0);
        assert_eq!(v.capacity(), 1);
        assert_eq!(collect(&v), ['a']);
    }

    #[test]
    fn insert_at_end_matches_push_back() {
        let mut a = Vector::from([1, 2]);
        let mut b = Vector::from([1, 2]);
        a.insert(2, 3).unwrap();
        b.push_back(3).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.capacity(), b.capacity());
    }

    #[test]
    #[should_panic(expected = "insert position 3 out of bounds")]
    fn insert_past_end_panics() {
        let mut v = Vector::from([1, 2]);
        let _ = v.insert(3, 0);
    }

    #[test]
    fn pop_back_on_empty_is_noop() {
        let mut v: Vector<i32> = Vector::new();
        assert_eq!(v.pop_back(), None);
        assert_eq!(v.size(), 0);
    }

    #[test]
    fn pop_back_keeps_capacity() {
        let mut v = Vector::from([1, 2, 3]);
        assert_eq!(v.pop_back(), Some(3));
        assert_eq!(v.size(), 2);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn erase_shifts_left_and_returns_position() {
        let mut v = Vector::from(["a", "b", "c", "d"]);
        assert_eq!(v.erase(0), 0);
        assert_eq!(collect(&v), ["b", "c", "d"]);
        assert_eq!(v.erase(2), 2);
        assert_eq!(collect(&v), ["b", "c"]);
    }

    #[test]
    #[should_panic(expected = "erase position 0 out of bounds")]
    fn erase_on_empty_panics() {
        let mut v: Vector<u8> = Vector::new();
        v.erase(0);
    }

    #[test]
    fn remove_returns_element() {
        let mut v = Vector::from([String::from("keep"), String::from("take")]);
        assert_eq!(v.remove(1), "take");
        assert_eq!(v.size(), 1);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut v = Vector::from([1, 2, 3]);
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn resize_shrink_then_grow_within_capacity() {
        let mut v = Vector::from([5, 6, 7, 8]);
        v.resize(1).unwrap();
        assert_eq!(collect(&v), [5]);
        v.resize(3).unwrap();
        assert_eq!(collect(&v), [5, 0, 0]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn resize_past_capacity_doubles_request() {
        let mut v = Vector::from([1, 2]);
        v.resize(5).unwrap();
        assert_eq!(collect(&v), [1, 2, 0, 0, 0]);
        assert_eq!(v.capacity(), 10);
    }

    #[test]
    fn resize_to_zero_empties() {
        let mut v = Vector::from([1, 2]);
        v.resize(0).unwrap();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn resize_to_same_size_keeps_elements() {
        let mut v = Vector::from([3, 1, 4]);
        v.resize(3).unwrap();
        assert_eq!(collect(&v), [3, 1, 4]);
    }

    #[test]
    fn reserve_is_exact_and_never_shrinks() {
        let mut v = Vector::from([1]);
        v.reserve(10).unwrap();
        assert_eq!(v.capacity(), 10);
        v.reserve(3).unwrap();
        assert_eq!(v.capacity(), 10);
        assert_eq!(collect(&v), [1]);
    }

    #[test]
    fn reserve_failure_leaves_vector_unchanged() {
        let mut v: Vector<u8> = Vector::from([1, 2, 3]);
        let before = v.as_ptr();
        let err = v.reserve(isize::MAX as usize).unwrap_err();
        assert!(matches!(err, VectorError::AllocationError { .. }));
        assert_eq!(v.as_ptr(), before);
        assert_eq!(v.capacity(), 3);
        assert_eq!(collect(&v), [1, 2, 3]);
    }

    #[test]
    fn reserve_overflow_is_reported() {
        let mut v: Vector<u64> = Vector::new();
        let err = v.reserve(usize::MAX).unwrap_err();
        assert_eq!(
            err,
            VectorError::CapacityOverflow {
                requested: usize::MAX
            }
        );
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn swap_exchanges_everything() {
        let mut a = Vector::from([1, 2, 3]);
        let mut b: Vector<i32> = Vector::from_reservation(10).unwrap();
        a.swap(&mut b);
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 10);
        assert_eq!(collect(&b), [1, 2, 3]);
        assert_eq!(b.capacity(), 3);
    }

    #[test]
    fn clone_is_deep_and_tight() {
        let mut a: Vector<i32> = Vector::from_reservation(8).unwrap();
        a.extend([1, 2, 3]);
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b.capacity(), 3);
        assert_ne!(a.as_ptr(), b.as_ptr());
    }

    #[test]
    fn assign_from_replaces_contents() {
        let mut a = Vector::from([9, 9, 9, 9, 9]);
        let b = Vector::from([1, 2]);
        a.assign_from(&b).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.capacity(), 2);
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut a = Vector::from([1, 2, 3]);
        let b = mem::take(&mut a);
        assert_eq!(collect(&b), [1, 2, 3]);
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 0);
    }

    #[test]
    fn zero_sized_elements() {
        let mut v = Vector::new();
        for _ in 0..10 {
            v.push_back(()).unwrap();
        }
        v.insert(3, ()).unwrap();
        v.erase(0);
        assert_eq!(v.size(), 10);
        assert!(v.capacity() >= 10);
    }

    #[test]
    fn debug_lists_elements() {
        let v = Vector::from([1, 2]);
        assert_eq!(format!("{v:?}"), "[1, 2]");
    }

    #[test]
    fn collect_and_extend() {
        let mut v: Vector<u32> = (1..=3).collect();
        v.extend(4..=5);
        assert_eq!(collect(&v), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn iter_mut_updates_in_place() {
        let mut v = Vector::from([1, 2, 3]);
        for x in &mut v {
            *x *= 10;
        }
        assert_eq!(collect(&v), [10, 20, 30]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum Op {
            Push(i32),
            Pop,
            Insert(usize, i32),
            Erase(usize),
            Resize(usize),
            Reserve(usize),
            Clear,
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                4 => any::<i32>().prop_map(Op::Push),
                1 => Just(Op::Pop),
                2 => (any::<usize>(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
                2 => any::<usize>().prop_map(Op::Erase),
                1 => (0usize..40).prop_map(Op::Resize),
                1 => (0usize..64).prop_map(Op::Reserve),
                1 => Just(Op::Clear),
            ]
        }

        proptest! {
            #[test]
            fn matches_std_vec_model(ops in proptest::collection::vec(op(), 0..64)) {
                let mut v = Vector::new();
                let mut model: Vec<i32> = Vec::new();
                let mut last_cap = 0;
                for op in ops {
                    match op {
                        Op::Push(x) => {
                            v.push_back(x).unwrap();
                            model.push(x);
                        }
                        Op::Pop => {
                            prop_assert_eq!(v.pop_back(), model.pop());
                        }
                        Op::Insert(i, x) => {
                            let i = i % (model.len() + 1);
                            prop_assert_eq!(v.insert(i, x).unwrap(), i);
                            model.insert(i, x);
                        }
                        Op::Erase(i) => {
                            if !model.is_empty() {
                                let i = i % model.len();
                                prop_assert_eq!(v.erase(i), i);
                                model.remove(i);
                            }
                        }
                        Op::Resize(n) => {
                            v.resize(n).unwrap();
                            model.resize(n, 0);
                        }
                        Op::Reserve(n) => {
                            v.reserve(n).unwrap();
                        }
                        Op::Clear => {
                            v.clear();
                            model.clear();
                        }
                    }
                    prop_assert!(v.check_invariants());
                    prop_assert!(v.capacity() >= last_cap);
                    last_cap = v.capacity();
                    prop_assert_eq!(v.as_slice(), model.as_slice());
                }
            }

            #[test]
            fn push_then_pop_preserves_size(
                init in proptest::collection::vec(any::<u8>(), 0..32),
                x in any::<u8>(),
            ) {
                let mut v = Vector::from_sequence(init.clone()).unwrap();
                let cap = v.capacity();
                v.push_back(x).unwrap();
                prop_assert_eq!(v.pop_back(), Some(x));
                prop_assert_eq!(v.size(), init.len());
                prop_assert!(v.capacity() >= cap);
            }

            #[test]
            fn reserved_pushes_never_reallocate(cap in 1usize..64, extra in 0usize..64) {
                let count = extra.min(cap);
                let mut v: Vector<usize> = Vector::from_reservation(cap).unwrap();
                let base = v.as_ptr();
                for i in 0..count {
                    v.push_back(i).unwrap();
                    prop_assert_eq!(v.capacity(), cap);
                    prop_assert_eq!(v.as_ptr(), base);
                }
            }

            #[test]
            fn erase_undoes_insert(
                init in proptest::collection::vec(any::<i16>(), 0..32),
                pos in any::<usize>(),
                x in any::<i16>(),
            ) {
                let mut v = Vector::from_sequence(init.clone()).unwrap();
                let at = v.insert(pos % (init.len() + 1), x).unwrap();
                v.erase(at);
                prop_assert_eq!(v.as_slice(), init.as_slice());
            }
        }
    }
}
