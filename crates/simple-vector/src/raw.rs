//! Owning storage for uninitialised element slots.
//!
//! [`RawBuffer`] owns a heap region of `len` contiguous `T` slots. It never
//! constructs, reads, or drops elements: which prefix of the slots holds
//! live values is tracked by the owner (see [`Vector`](crate::Vector)).
//! Dropping a buffer releases the allocation only.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Index, IndexMut};
use std::ptr::{self, NonNull};

use crate::error::VectorError;

/// A movable, non-copyable handle to `len` uninitialised `T` slots.
///
/// `base` is `None` exactly when `len == 0`; no allocation is made for an
/// empty buffer. Zero-sized `T` never touches the allocator and uses a
/// dangling base instead.
pub struct RawBuffer<T> {
    base: Option<NonNull<T>>,
    len: usize,
    /// The buffer logically owns `T`s on behalf of its owner (drop check).
    _owns: PhantomData<T>,
}

// SAFETY: RawBuffer uniquely owns its allocation, like `Box<[T]>`.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: shared access only hands out `&MaybeUninit<T>` and raw pointers.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    /// An empty buffer: null base, zero slots, no allocation.
    pub const fn empty() -> Self {
        Self {
            base: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Allocate `len` uninitialised slots.
    ///
    /// `len == 0` returns [`RawBuffer::empty`] without calling the
    /// allocator.
    ///
    /// # Errors
    ///
    /// [`VectorError::CapacityOverflow`] if `len` slots of `T` exceed the
    /// maximum allocation size, [`VectorError::AllocationError`] if the
    /// allocator returns null.
    pub fn new(len: usize) -> Result<Self, VectorError> {
        if len == 0 {
            return Ok(Self::empty());
        }
        let layout = Self::layout(len)?;
        if layout.size() == 0 {
            return Ok(Self {
                base: Some(NonNull::dangling()),
                len,
                _owns: PhantomData,
            });
        }
        // SAFETY: `layout` has non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        let base = NonNull::new(raw.cast::<T>()).ok_or(VectorError::AllocationError { layout })?;
        Ok(Self {
            base: Some(base),
            len,
            _owns: PhantomData,
        })
    }

    /// Number of slots managed by this buffer.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer manages zero slots (and therefore has no base).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw base pointer; null when the buffer is empty.
    pub fn get(&self) -> *mut T {
        self.base.map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    /// Base pointer suitable for slice construction: dangling (but
    /// non-null and aligned) when the buffer is empty.
    pub(crate) fn as_non_null(&self) -> NonNull<T> {
        self.base.unwrap_or(NonNull::dangling())
    }

    /// Borrow slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn slot(&self, index: usize) -> &MaybeUninit<T> {
        assert!(
            index < self.len,
            "slot {index} out of bounds for buffer of {} slots",
            self.len
        );
        // SAFETY: index < len, so the slot lies inside the allocation.
        // `MaybeUninit<T>` has the layout of `T` and may be uninitialised.
        unsafe { &*self.as_non_null().as_ptr().add(index).cast::<MaybeUninit<T>>() }
    }

    /// Mutably borrow slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn slot_mut(&mut self, index: usize) -> &mut MaybeUninit<T> {
        assert!(
            index < self.len,
            "slot {index} out of bounds for buffer of {} slots",
            self.len
        );
        // SAFETY: as in `slot`; `&mut self` guarantees uniqueness.
        unsafe { &mut *self.as_non_null().as_ptr().add(index).cast::<MaybeUninit<T>>() }
    }

    /// Exchange base and length with `other`. O(1), never fails.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.base, &mut other.base);
        mem::swap(&mut self.len, &mut other.len);
    }

    fn layout(len: usize) -> Result<Layout, VectorError> {
        Layout::array::<T>(len).map_err(|_| VectorError::CapacityOverflow { requested: len })
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        let Some(base) = self.base else {
            return;
        };
        // The layout was valid when the buffer was allocated.
        if let Ok(layout) = Self::layout(self.len) {
            if layout.size() != 0 {
                // SAFETY: `base` came from `alloc::alloc` with this layout.
                unsafe { alloc::dealloc(base.as_ptr().cast::<u8>(), layout) };
            }
        }
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Index<usize> for RawBuffer<T> {
    type Output = MaybeUninit<T>;

    fn index(&self, index: usize) -> &MaybeUninit<T> {
        self.slot(index)
    }
}

impl<T> IndexMut<usize> for RawBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut MaybeUninit<T> {
        self.slot_mut(index)
    }
}

impl<T> fmt::Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuffer")
            .field("base", &self.get())
            .field("len", &self.len)
            .finish()
    }
}
