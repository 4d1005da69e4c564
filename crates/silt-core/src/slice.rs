//! Zero-copy windowed views over buffers.
//!
//! A [`Slice`] is `(base, offset, len)` over a frozen buffer; a
//! [`SliceMut`] is the analogue over a mutable buffer, enabling localized
//! mutation within one exclusively-borrowed allocation. Re-slicing
//! composes offsets and always yields the same view type — a slice of a
//! slice is a slice, never a nested wrapper.
//!
//! Neither view holds representation-specific logic: every operation
//! delegates to the backend's range primitives evaluated at
//! `base offset + local offset`.

use crate::iter::Iter;
use crate::traits::{Contiguous, ContiguousMut};

/// Read-only zero-copy view of the window `[offset, offset + len)` over a
/// frozen buffer.
///
/// The base buffer is shared by reference and never mutated through the
/// view. The window invariant `offset + len <= base.len()` is established
/// at construction and maintained by every composition.
pub struct Slice<'a, A: Contiguous> {
    base: &'a A,
    offset: usize,
    len: usize,
}

impl<A: Contiguous> Clone for Slice<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Contiguous> Copy for Slice<'_, A> {}

impl<'a, A: Contiguous> Slice<'a, A> {
    /// View of `[offset, offset + len)` over `base`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len > base.len()`.
    pub fn new(base: &'a A, offset: usize, len: usize) -> Self {
        match Self::try_new(base, offset, len) {
            Some(slice) => slice,
            None => panic!(
                "slice window {offset}+{len} out of bounds for buffer of length {}",
                base.len()
            ),
        }
    }

    /// Checked variant of [`new`](Slice::new); `None` if the window falls
    /// outside the base buffer.
    pub fn try_new(base: &'a A, offset: usize, len: usize) -> Option<Self> {
        let end = offset.checked_add(len)?;
        if end > base.len() {
            return None;
        }
        Some(Self { base, offset, len })
    }

    /// Window length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the window is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of the window start within the base buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Element at window position `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<A::Item> {
        if index < self.len {
            self.base.get(self.offset + index)
        } else {
            None
        }
    }

    /// Element at window position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn index(&self, index: usize) -> A::Item {
        match self.get(index) {
            Some(item) => item,
            None => panic!("index {index} out of bounds for slice of length {}", self.len),
        }
    }

    /// Re-slice: view of `[offset, offset + len)` within this window.
    ///
    /// Offsets compose against the same base buffer, so the result is a
    /// [`Slice`] with the original borrow lifetime — never a view of a
    /// view.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len > self.len()`.
    pub fn slice(&self, offset: usize, len: usize) -> Slice<'a, A> {
        match offset.checked_add(len) {
            Some(end) if end <= self.len => Slice {
                base: self.base,
                offset: self.offset + offset,
                len,
            },
            _ => panic!(
                "slice window {offset}+{len} out of bounds for slice of length {}",
                self.len
            ),
        }
    }

    /// Copy the window into a brand-new, independently-owned buffer of
    /// exactly `len()` elements.
    pub fn to_buffer(&self) -> A {
        self.base.clone_range(self.offset, self.len)
    }

    /// Copy the window into a freshly allocated mutable buffer.
    pub fn thaw(&self) -> A::Mutable {
        self.base.thaw_range(self.offset, self.len)
    }

    /// Full structural content equality of two windows.
    pub fn content_eq(&self, other: &Slice<'_, A>) -> bool
    where
        A::Item: PartialEq,
    {
        self.len == other.len && (0..self.len).all(|i| self.index(i) == other.index(i))
    }

    /// Positional walk over the window, front to back.
    pub fn iter(&self) -> Iter<'a, A> {
        Iter::over(self.base, self.offset, self.offset + self.len)
    }
}

impl<A: Contiguous> PartialEq for Slice<'_, A>
where
    A::Item: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.content_eq(other)
    }
}

impl<'a, A: Contiguous> IntoIterator for Slice<'a, A> {
    type Item = A::Item;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Iter<'a, A> {
        Iter::over(self.base, self.offset, self.offset + self.len)
    }
}

impl<A: Contiguous> std::fmt::Debug for Slice<'_, A>
where
    A::Item: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Writable zero-copy view of the window `[offset, offset + len)` over a
/// mutable buffer.
///
/// Holds the exclusive borrow of its base for the view's lifetime, so
/// localized mutation through the view cannot race with any other access.
/// The window length can only shrink ([`SliceMut::shrink`]); the backing
/// buffer's allocation is never touched by the view.
pub struct SliceMut<'a, M: ContiguousMut> {
    base: &'a mut M,
    offset: usize,
    len: usize,
}

impl<'a, M: ContiguousMut> SliceMut<'a, M> {
    /// Writable view of `[offset, offset + len)` over `base`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len > base.len()`.
    pub fn new(base: &'a mut M, offset: usize, len: usize) -> Self {
        let size = base.len();
        match Self::try_new(base, offset, len) {
            Some(slice) => slice,
            None => panic!("slice window {offset}+{len} out of bounds for buffer of length {size}"),
        }
    }

    /// Checked variant of [`new`](SliceMut::new); `None` if the window
    /// falls outside the base buffer.
    pub fn try_new(base: &'a mut M, offset: usize, len: usize) -> Option<Self> {
        let end = offset.checked_add(len)?;
        if end > base.len() {
            return None;
        }
        Some(Self { base, offset, len })
    }

    /// Window length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the window is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of the window start within the base buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Element at window position `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<M::Item> {
        if index < self.len {
            self.base.get(self.offset + index)
        } else {
            None
        }
    }

    /// Element at window position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn read(&self, index: usize) -> M::Item {
        match self.get(index) {
            Some(item) => item,
            None => panic!("read index {index} out of bounds for slice of length {}", self.len),
        }
    }

    /// Store `item` at window position `index`, writing through to the
    /// base buffer.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn write(&mut self, index: usize, item: M::Item) {
        assert!(
            index < self.len,
            "write index {index} out of bounds for slice of length {}",
            self.len
        );
        self.base.write(self.offset + index, item);
    }

    /// Set every element of the window to a clone of `item`.
    pub fn fill(&mut self, item: M::Item) {
        for i in 0..self.len {
            self.base.write(self.offset + i, item.clone());
        }
    }

    /// Truncate the window's logical length to `new_len`.
    ///
    /// This is purely a view adjustment — the backing buffer's length and
    /// allocation are untouched.
    ///
    /// # Panics
    ///
    /// Panics if `new_len > len()`.
    pub fn shrink(&mut self, new_len: usize) {
        assert!(
            new_len <= self.len,
            "cannot shrink slice of length {} to {new_len}",
            self.len
        );
        self.len = new_len;
    }

    /// Re-slice: writable view of `[offset, offset + len)` within this
    /// window, reborrowing the base for the returned view's lifetime.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len > self.len()`.
    pub fn slice_mut(&mut self, offset: usize, len: usize) -> SliceMut<'_, M> {
        match offset.checked_add(len) {
            Some(end) if end <= self.len => SliceMut {
                base: &mut *self.base,
                offset: self.offset + offset,
                len,
            },
            _ => panic!(
                "slice window {offset}+{len} out of bounds for slice of length {}",
                self.len
            ),
        }
    }

    /// Consuming re-slice that keeps the original borrow lifetime.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len > self.len()`.
    pub fn into_slice_mut(self, offset: usize, len: usize) -> SliceMut<'a, M> {
        match offset.checked_add(len) {
            Some(end) if end <= self.len => SliceMut {
                base: self.base,
                offset: self.offset + offset,
                len,
            },
            _ => panic!(
                "slice window {offset}+{len} out of bounds for slice of length {}",
                self.len
            ),
        }
    }

    /// Copy the window into a new immutable buffer. The base buffer
    /// remains valid and usable.
    pub fn freeze(&self) -> M::Frozen {
        self.base.freeze_range(self.offset, self.len)
    }

    /// Copy the window into a brand-new mutable buffer.
    pub fn clone_mut(&self) -> M {
        self.base.clone_mut_range(self.offset, self.len)
    }

    /// Copy the first `len` elements of the window into a new immutable
    /// buffer, consuming the view.
    ///
    /// A borrowed view cannot truncate or consume its backing buffer, so
    /// this always takes the copying path; the non-copying
    /// truncate-then-move variant lives on the owned buffer as
    /// [`ContiguousMut::shrink_and_freeze`].
    ///
    /// # Panics
    ///
    /// Panics if `len > self.len()`.
    pub fn shrink_and_freeze(self, len: usize) -> M::Frozen {
        assert!(
            len <= self.len,
            "cannot shrink slice of length {} to {len}",
            self.len
        );
        self.base.freeze_range(self.offset, len)
    }

    /// Copy all of `src` into the window starting at `dst_offset`.
    ///
    /// The source is immutable storage, necessarily distinct from the
    /// window's base buffer.
    ///
    /// # Panics
    ///
    /// Panics if `dst_offset + src.len() > self.len()`.
    pub fn copy_from(&mut self, dst_offset: usize, src: Slice<'_, M::Frozen>) {
        assert!(
            dst_offset + src.len() <= self.len,
            "destination range {dst_offset}+{} out of bounds for slice of length {}",
            src.len(),
            self.len
        );
        self.base
            .copy_from(self.offset + dst_offset, src.base, src.offset, src.len);
    }

    /// Copy `len` elements from another mutable buffer into the window.
    ///
    /// # Panics
    ///
    /// Panics if either range is out of bounds.
    pub fn copy_from_mut(&mut self, dst_offset: usize, src: &M, src_offset: usize, len: usize) {
        assert!(
            dst_offset + len <= self.len,
            "destination range {dst_offset}+{len} out of bounds for slice of length {}",
            self.len
        );
        self.base
            .copy_from_mut(self.offset + dst_offset, src, src_offset, len);
    }

    /// Move `len` elements from `src_offset` to `dst_offset` within the
    /// window. Correct for overlapping ranges in either direction.
    ///
    /// # Panics
    ///
    /// Panics if either range extends past the window.
    pub fn copy_within(&mut self, src_offset: usize, len: usize, dst_offset: usize) {
        assert!(
            src_offset + len <= self.len,
            "source range {src_offset}+{len} out of bounds for slice of length {}",
            self.len
        );
        assert!(
            dst_offset + len <= self.len,
            "destination range {dst_offset}+{len} out of bounds for slice of length {}",
            self.len
        );
        self.base
            .copy_within(self.offset + src_offset, len, self.offset + dst_offset);
    }

    /// Whether two views denote the same region: same backing storage,
    /// same offset, and same length. Contents are never compared.
    pub fn same_region(&self, other: &SliceMut<'_, M>) -> bool {
        self.base.same_storage(other.base) && self.offset == other.offset && self.len == other.len
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{VecArray, VecArrayMut};
    use crate::traits::{Contiguous, ContiguousMut};

    use super::*;

    fn sample() -> VecArray<u32> {
        VecArray::quadrupleton(10, 20, 30, 40)
    }

    #[test]
    fn window_reads_through_offset() {
        let buf = sample();
        let s = buf.slice(1, 2);
        assert_eq!(s.len(), 2);
        assert_eq!(s.index(0), 20);
        assert_eq!(s.index(1), 30);
        assert_eq!(s.get(2), None);
    }

    #[test]
    fn full_slice_indexes_identically() {
        let buf = sample();
        let s = buf.as_slice();
        assert!((0..buf.len()).all(|i| s.index(i) == buf.index(i)));
    }

    #[test]
    fn reslicing_composes_offsets() {
        let buf = sample();
        let outer = buf.slice(1, 3);
        let inner = outer.slice(1, 1);
        assert_eq!(inner.offset(), 2);
        assert_eq!(inner.len(), 1);
        assert!(inner.content_eq(&buf.slice(2, 1)));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn window_past_end_panics() {
        let buf = sample();
        buf.slice(3, 2);
    }

    #[test]
    fn try_new_rejects_overflowing_windows() {
        let buf = sample();
        assert!(Slice::try_new(&buf, usize::MAX, 2).is_none());
        assert!(Slice::try_new(&buf, 2, 3).is_none());
        assert!(Slice::try_new(&buf, 4, 0).is_some());
    }

    #[test]
    fn to_buffer_is_independent_of_base() {
        let buf = sample();
        let copy = buf.slice(1, 2).to_buffer();
        assert_eq!(copy.len(), 2);
        let mut thawed = copy.thaw();
        thawed.write(0, 999);
        assert_eq!(buf.index(1), 20);
    }

    #[test]
    fn thaw_round_trips_content() {
        let buf = sample();
        let thawed = buf.slice(1, 3).thaw();
        let refrozen = thawed.into_frozen();
        assert!(refrozen.as_slice().content_eq(&buf.slice(1, 3)));
    }

    #[test]
    fn slice_equality_is_content_based() {
        let a = sample();
        let b = VecArray::tripleton(20u32, 30, 99);
        assert_eq!(a.slice(1, 2), b.slice(0, 2));
        assert_ne!(a.slice(0, 2), b.slice(0, 2));
    }

    #[test]
    fn mutable_window_writes_through() {
        let mut m = VecArrayMut::<u32>::new(5);
        {
            let mut w = m.slice_mut(1, 3);
            w.write(0, 7);
            w.slice_mut(1, 2).fill(1);
        }
        assert!((0..5).all(|i| m.read(i) == [0, 7, 1, 1, 0][i]));
    }

    #[test]
    fn shrink_truncates_view_only() {
        let mut m = VecArrayMut::replicate(4, 9u32);
        let mut w = m.slice_mut(0, 4);
        w.shrink(2);
        assert_eq!(w.len(), 2);
        drop(w);
        assert_eq!(m.len(), 4);
    }

    #[test]
    #[should_panic(expected = "cannot shrink")]
    fn shrink_growing_panics() {
        let mut m = VecArrayMut::replicate(2, 0u32);
        m.as_slice_mut().shrink(3);
    }

    #[test]
    fn freeze_copies_the_window() {
        let mut m = VecArrayMut::<u32>::new(4);
        for i in 0..4 {
            m.write(i, i as u32 + 1);
        }
        let frozen = m.slice_mut(1, 2).freeze();
        assert_eq!(frozen.len(), 2);
        assert_eq!(frozen.index(0), 2);
        assert_eq!(frozen.index(1), 3);
        // Source still writable afterwards.
        m.write(1, 0);
        assert_eq!(frozen.index(0), 2);
    }

    #[test]
    fn shrink_and_freeze_takes_the_prefix() {
        let mut m = VecArrayMut::<u32>::new(4);
        for i in 0..4 {
            m.write(i, i as u32);
        }
        let frozen = m.slice_mut(1, 3).shrink_and_freeze(2);
        assert_eq!(frozen.len(), 2);
        assert_eq!(frozen.index(0), 1);
        assert_eq!(frozen.index(1), 2);
    }

    #[test]
    fn copy_from_immutable_slice() {
        let src = sample();
        let mut m = VecArrayMut::<u32>::new(6);
        let mut w = m.slice_mut(1, 4);
        w.copy_from(1, src.slice(0, 2));
        drop(w);
        assert!((0..6).all(|i| m.read(i) == [0, 0, 10, 20, 0, 0][i]));
    }

    #[test]
    fn copy_within_the_window_respects_overlap() {
        let mut m = VecArrayMut::<u32>::new(5);
        for i in 0..5 {
            m.write(i, i as u32);
        }
        let mut w = m.as_slice_mut();
        w.copy_within(0, 3, 1);
        drop(w);
        assert!((0..5).all(|i| m.read(i) == [0, 0, 1, 2, 4][i]));
    }

    #[test]
    fn same_region_requires_storage_offset_and_length() {
        let mut a = VecArrayMut::replicate(4, 0u32);
        let mut b = VecArrayMut::replicate(4, 0u32);
        let wa = SliceMut::new(&mut a, 1, 2);
        let wb = SliceMut::new(&mut b, 1, 2);
        // Same shape, different storage.
        assert!(!wa.same_region(&wb));
        assert!(wa.same_region(&wa));
    }

    #[test]
    fn into_slice_mut_keeps_lifetime_and_composes() {
        let mut m = VecArrayMut::<u32>::new(6);
        let w = m.as_slice_mut();
        let inner = w.into_slice_mut(2, 3).into_slice_mut(1, 1);
        assert_eq!(inner.offset(), 3);
        assert_eq!(inner.len(), 1);
    }
}
