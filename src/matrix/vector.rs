//! Strided, non-owning views over matrix storage.
//!
//! A view is a (slice, offset, length, stride) quadruple borrowed from a [`Matrix`]: a row is a
//! view with stride 1, a column a view with stride `ncols`. Views never own storage, and the
//! borrow checker ties their lifetime to the owning matrix, so a view cannot outlive it and a
//! [`VectorViewMut`] excludes any concurrent reader.
//!
//! [`Matrix`]: crate::matrix::Matrix

use crate::error::SingularError;
use std::ops::{Index, IndexMut};

/// Read-only strided view.
#[derive(Clone, Copy, Debug)]
pub struct VectorView<'a, T> {
    data: &'a [T],
    offset: usize,
    len: usize,
    stride: usize,
}

impl<'a, T: Copy> VectorView<'a, T> {
    /// Wrap `len` elements of `data`, starting at `offset`, `stride` apart.
    pub fn new(data: &'a [T], offset: usize, len: usize, stride: usize) -> Self {
        debug_assert!(len == 0 || offset + (len - 1) * stride < data.len());
        Self { data, offset, len, stride }
    }

    /// Number of elements in the view.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Element at `idx`.
    pub fn get(&self, idx: usize) -> T {
        self[idx]
    }

    /// Sub-view starting at `start`.
    ///
    /// `start == len` yields an empty view.
    ///
    /// # Errors
    /// `SliceOutOfRange` if `start > len`.
    pub fn slice(&self, start: usize) -> Result<VectorView<'a, T>, SingularError> {
        if start > self.len {
            return Err(SingularError::SliceOutOfRange { start, len: self.len });
        }
        Ok(VectorView {
            data: self.data,
            offset: self.offset + start * self.stride,
            len: self.len - start,
            stride: self.stride,
        })
    }

    /// Iterate the viewed elements front to back.
    pub fn iter(&self) -> impl Iterator<Item = T> + use<'a, T> {
        let data: &'a [T] = if self.len == 0 { &[] } else { &self.data[self.offset..] };
        data.iter().step_by(self.stride.max(1)).take(self.len).copied()
    }

    /// Copy the viewed elements into an owned vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T> Index<usize> for VectorView<'_, T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        debug_assert!(idx < self.len, "index {} out of view of length {}", idx, self.len);
        &self.data[self.offset + idx * self.stride]
    }
}

/// Mutable strided view; writes go straight to the owning matrix.
#[derive(Debug)]
pub struct VectorViewMut<'a, T> {
    data: &'a mut [T],
    offset: usize,
    len: usize,
    stride: usize,
}

impl<'a, T: Copy> VectorViewMut<'a, T> {
    pub fn new(data: &'a mut [T], offset: usize, len: usize, stride: usize) -> Self {
        debug_assert!(len == 0 || offset + (len - 1) * stride < data.len());
        Self { data, offset, len, stride }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, idx: usize) -> T {
        self[idx]
    }

    /// Overwrite the element at `idx`.
    pub fn set(&mut self, idx: usize, value: T) {
        self[idx] = value;
    }

    /// Consume this view, returning the sub-view starting at `start`.
    ///
    /// # Errors
    /// `SliceOutOfRange` if `start > len`.
    pub fn slice(self, start: usize) -> Result<VectorViewMut<'a, T>, SingularError> {
        if start > self.len {
            return Err(SingularError::SliceOutOfRange { start, len: self.len });
        }
        Ok(VectorViewMut {
            data: self.data,
            offset: self.offset + start * self.stride,
            len: self.len - start,
            stride: self.stride,
        })
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> VectorView<'_, T> {
        VectorView { data: &*self.data, offset: self.offset, len: self.len, stride: self.stride }
    }

    /// Write `values` into the view, element by element.
    ///
    /// # Panics
    /// If `values.len()` differs from the view length.
    pub fn copy_from_slice(&mut self, values: &[T]) {
        assert_eq!(values.len(), self.len, "Source slice has incorrect length");
        for (k, &x) in values.iter().enumerate() {
            self[k] = x;
        }
    }
}

impl<T> Index<usize> for VectorViewMut<'_, T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        debug_assert!(idx < self.len, "index {} out of view of length {}", idx, self.len);
        &self.data[self.offset + idx * self.stride]
    }
}

impl<T> IndexMut<usize> for VectorViewMut<'_, T> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        debug_assert!(idx < self.len, "index {} out of view of length {}", idx, self.len);
        &mut self.data[self.offset + idx * self.stride]
    }
}
