//! By-value iteration.

#![allow(unsafe_code)]

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;
use std::slice;

use crate::raw::RawBuffer;
use crate::vector::Vector;

/// Owning iterator over the elements of a [`Vector`].
///
/// Slots `[front, back)` are still live. Elements not yielded are dropped
/// with the iterator; the buffer is released afterwards.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [front, back) are initialised and inside the buffer.
        unsafe {
            slice::from_raw_parts(
                self.buf.as_non_null().as_ptr().add(self.front),
                self.back - self.front,
            )
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        // SAFETY: `index` was live and has left [front, back).
        Some(unsafe { self.buf.as_non_null().as_ptr().add(index).read() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: `back` was live and has left [front, back).
        Some(unsafe { self.buf.as_non_null().as_ptr().add(self.back).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining: *mut [T] = ptr::slice_from_raw_parts_mut(
            // SAFETY: front <= back <= len.
            unsafe { self.buf.as_non_null().as_ptr().add(self.front) },
            self.back - self.front,
        );
        self.front = self.back;
        // SAFETY: the remaining elements are live and owned by the iterator.
        unsafe { ptr::drop_in_place(remaining) };
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let (buf, size) = self.into_raw_parts();
        IntoIter {
            buf,
            front: 0,
            back: size,
        }
    }
}
