//! The capability interface implemented by every storage representation.
//!
//! [`Contiguous`] is the read-side interface over frozen (immutable)
//! buffers, [`ContiguousMut`] the write-side interface over exclusively
//! owned mutable buffers, and [`Resize`] the extension valid only on an
//! unsliced buffer. Generic algorithms written against these traits run
//! unmodified over every backend.
//!
//! # Layering
//!
//! Each backend supplies a small set of leaf primitives — allocation,
//! element get/set, range clone/thaw/freeze, block copy — and the rest of
//! the interface is derived from them as default methods. The windowed
//! views ([`Slice`], [`SliceMut`]) are likewise expressed purely in terms
//! of these primitives computed over `base offset + local offset`, so they
//! carry no representation-specific logic of their own.
//!
//! # Error tiers
//!
//! Out-of-range access, over-length shrink, and out-of-range window
//! construction are caller contract violations and panic immediately.
//! Checked probing goes through the `Option`-returning `get` and
//! `try_new` forms. No recoverable error type exists: every operation is
//! total on inputs that satisfy its stated bounds.

use crate::element::Element;
use crate::iter::Iter;
use crate::slice::{Slice, SliceMut};

/// Read-side capability interface over an immutable, fixed-length buffer.
///
/// A frozen buffer is never mutated after creation. It is produced either
/// by a copying freeze (the source mutable buffer remains usable) or by
/// consuming a mutable buffer outright via
/// [`ContiguousMut::into_frozen`], which transfers the storage without
/// copying.
pub trait Contiguous: Sized {
    /// Element type stored by this representation.
    type Item: Element;

    /// The exclusively-owned mutable counterpart of this buffer type.
    type Mutable: ContiguousMut<Item = Self::Item, Frozen = Self>;

    /// The empty buffer.
    fn empty() -> Self;

    /// A one-element buffer, built without a separate allocate/write/freeze
    /// round trip.
    fn singleton(a: Self::Item) -> Self;

    /// A two-element buffer.
    fn doubleton(a: Self::Item, b: Self::Item) -> Self;

    /// A three-element buffer.
    fn tripleton(a: Self::Item, b: Self::Item, c: Self::Item) -> Self;

    /// A four-element buffer.
    fn quadrupleton(a: Self::Item, b: Self::Item, c: Self::Item, d: Self::Item) -> Self;

    /// Number of elements. O(1) and immutable for the buffer's lifetime.
    fn len(&self) -> usize;

    /// Whether the buffer holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`, or `None` if out of range.
    ///
    /// This is the non-retaining access form: the returned value is an
    /// owned element, so callers (generic copy code, iterators) hold no
    /// borrow of the source buffer afterwards.
    fn get(&self, index: usize) -> Option<Self::Item>;

    /// Element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> Self::Item {
        match self.get(index) {
            Some(item) => item,
            None => panic!(
                "index {index} out of bounds for buffer of length {}",
                self.len()
            ),
        }
    }

    /// Copy the window `[offset, offset + len)` into a brand-new,
    /// independently-owned buffer of exactly `len` elements.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len > self.len()`.
    fn clone_range(&self, offset: usize, len: usize) -> Self;

    /// Copy the window `[offset, offset + len)` into a freshly allocated
    /// mutable buffer.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len > self.len()`.
    fn thaw_range(&self, offset: usize, len: usize) -> Self::Mutable;

    /// Copy the whole buffer into a freshly allocated mutable buffer.
    fn thaw(&self) -> Self::Mutable {
        self.thaw_range(0, self.len())
    }

    /// O(1) read-only view of the window `[offset, offset + len)`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len > self.len()`.
    fn slice(&self, offset: usize, len: usize) -> Slice<'_, Self> {
        Slice::new(self, offset, len)
    }

    /// O(1) read-only view of the whole buffer.
    fn as_slice(&self) -> Slice<'_, Self> {
        Slice::new(self, 0, self.len())
    }

    /// Full structural content equality.
    ///
    /// Backends with a cheaper equality basis override this (the flat
    /// representation compares raw bytes; the pointer-array representation
    /// short-circuits through reference identity per element).
    fn content_eq(&self, other: &Self) -> bool
    where
        Self::Item: PartialEq,
    {
        self.len() == other.len() && (0..self.len()).all(|i| self.index(i) == other.index(i))
    }

    /// New buffer equal to `self` with `item` inserted at `index`
    /// (`0 <= index <= len()`), shifting the tail right by one.
    ///
    /// The generic derivation replicates `item` across the target so the
    /// inserted position needs no separate write, then copies the prefix
    /// and suffix around it. The flat backend overrides this with a fused
    /// byte-level variant.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    fn insert_at(&self, index: usize, item: Self::Item) -> Self {
        let len = self.len();
        assert!(
            index <= len,
            "insert position {index} out of bounds for buffer of length {len}"
        );
        let mut staged = Self::Mutable::replicate(len + 1, item);
        staged.copy_from(0, self, 0, index);
        staged.copy_from(index + 1, self, index, len - index);
        staged.into_frozen()
    }

    /// Execute one delimited construction computation and freeze its
    /// result by move.
    ///
    /// `f` builds the sole mutable buffer of the scope; its product is
    /// consumed here, so no mutable handle survives past the call. The
    /// frozen buffer is the scope's only observable output.
    fn run<F>(f: F) -> Self
    where
        F: FnOnce() -> Self::Mutable,
    {
        f().into_frozen()
    }

    /// Positional walk over every element, front to back.
    ///
    /// Uses the non-retaining [`get`](Contiguous::get) form, so the
    /// iterator yields owned elements and keeps no per-element borrows.
    fn iter(&self) -> Iter<'_, Self> {
        Iter::over(self, 0, self.len())
    }
}

/// Write-side capability interface over an exclusively-owned mutable
/// buffer.
///
/// Exactly one owner may read or write a mutable buffer; Rust ownership
/// enforces this, and the non-copying freeze consumes the buffer so no
/// stale handle can observe the transferred storage.
pub trait ContiguousMut: Sized {
    /// Element type stored by this representation.
    type Item: Element;

    /// The immutable counterpart this buffer freezes into.
    type Frozen: Contiguous<Item = Self::Item, Mutable = Self>;

    /// Allocate a buffer of `len` elements, each set to the element
    /// default.
    fn new(len: usize) -> Self
    where
        Self::Item: Default,
    {
        Self::replicate(len, <Self::Item>::default())
    }

    /// Allocate a buffer of `len` elements, each a clone of `item`.
    fn replicate(len: usize, item: Self::Item) -> Self;

    /// Current number of elements. Changes only through [`Resize::resize`].
    fn len(&self) -> usize;

    /// Whether the buffer holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`, or `None` if out of range.
    fn get(&self, index: usize) -> Option<Self::Item>;

    /// Element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn read(&self, index: usize) -> Self::Item {
        match self.get(index) {
            Some(item) => item,
            None => panic!(
                "read index {index} out of bounds for buffer of length {}",
                self.len()
            ),
        }
    }

    /// Store `item` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn write(&mut self, index: usize, item: Self::Item);

    /// O(1) writable view of the window `[offset, offset + len)`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len > self.len()`.
    fn slice_mut(&mut self, offset: usize, len: usize) -> SliceMut<'_, Self> {
        SliceMut::new(self, offset, len)
    }

    /// O(1) writable view of the whole buffer.
    fn as_slice_mut(&mut self) -> SliceMut<'_, Self> {
        let len = self.len();
        SliceMut::new(self, 0, len)
    }

    /// Copy the window `[offset, offset + len)` into a new immutable
    /// buffer. The source remains valid and usable.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len > self.len()`.
    fn freeze_range(&self, offset: usize, len: usize) -> Self::Frozen;

    /// Copy the whole buffer into a new immutable buffer. The source
    /// remains valid and usable.
    fn freeze(&self) -> Self::Frozen {
        self.freeze_range(0, self.len())
    }

    /// Convert to an immutable buffer without copying, consuming the
    /// mutable handle.
    ///
    /// This is the ownership-transfer point from "exclusively mutable" to
    /// "immutable/shared": after the call the old handle no longer exists,
    /// so use-after-transfer cannot be expressed.
    fn into_frozen(self) -> Self::Frozen;

    /// Truncate the logical length to `len`, then convert by move as in
    /// [`into_frozen`](ContiguousMut::into_frozen).
    ///
    /// # Panics
    ///
    /// Panics if `len > self.len()`.
    fn shrink_and_freeze(self, len: usize) -> Self::Frozen;

    /// Copy the window `[offset, offset + len)` into a brand-new mutable
    /// buffer.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len > self.len()`.
    fn clone_mut_range(&self, offset: usize, len: usize) -> Self;

    /// Copy the whole buffer into a brand-new mutable buffer.
    fn clone_mut(&self) -> Self {
        self.clone_mut_range(0, self.len())
    }

    /// Copy `len` elements from an immutable source (necessarily distinct
    /// storage) starting at `src_offset` into this buffer starting at
    /// `dst_offset`.
    ///
    /// # Panics
    ///
    /// Panics if either range is out of bounds.
    fn copy_from(&mut self, dst_offset: usize, src: &Self::Frozen, src_offset: usize, len: usize) {
        assert!(
            src_offset + len <= src.len(),
            "source range {src_offset}+{len} out of bounds for buffer of length {}",
            src.len()
        );
        assert!(
            dst_offset + len <= self.len(),
            "destination range {dst_offset}+{len} out of bounds for buffer of length {}",
            self.len()
        );
        for i in 0..len {
            self.write(dst_offset + i, src.index(src_offset + i));
        }
    }

    /// Copy `len` elements from another mutable buffer. The two buffers
    /// are distinct storage by exclusivity of `&mut`.
    ///
    /// # Panics
    ///
    /// Panics if either range is out of bounds.
    fn copy_from_mut(&mut self, dst_offset: usize, src: &Self, src_offset: usize, len: usize) {
        assert!(
            src_offset + len <= src.len(),
            "source range {src_offset}+{len} out of bounds for buffer of length {}",
            src.len()
        );
        assert!(
            dst_offset + len <= self.len(),
            "destination range {dst_offset}+{len} out of bounds for buffer of length {}",
            self.len()
        );
        for i in 0..len {
            self.write(dst_offset + i, src.read(src_offset + i));
        }
    }

    /// Move `len` elements from `src_offset` to `dst_offset` within this
    /// buffer. Correct for overlapping ranges in either direction: the
    /// destination region afterwards equals the source region before the
    /// call.
    ///
    /// The generic derivation stages the source window before writing.
    /// The flat backend overrides this with a byte-level overlap-aware
    /// move.
    ///
    /// # Panics
    ///
    /// Panics if either range is out of bounds.
    fn copy_within(&mut self, src_offset: usize, len: usize, dst_offset: usize) {
        assert!(
            src_offset + len <= self.len(),
            "source range {src_offset}+{len} out of bounds for buffer of length {}",
            self.len()
        );
        assert!(
            dst_offset + len <= self.len(),
            "destination range {dst_offset}+{len} out of bounds for buffer of length {}",
            self.len()
        );
        let staged: Vec<Self::Item> = (0..len).map(|i| self.read(src_offset + i)).collect();
        for (i, item) in staged.into_iter().enumerate() {
            self.write(dst_offset + i, item);
        }
    }

    /// Whether `self` and `other` are backed by the same storage.
    ///
    /// This is reference identity, never a content comparison. Two
    /// zero-capacity buffers share the dangling sentinel allocation and
    /// therefore compare identical.
    fn same_storage(&self, other: &Self) -> bool;
}

/// Operations valid only on an unsliced, exclusively-owned mutable
/// buffer.
///
/// A windowed view shares its backing storage and therefore cannot resize
/// it; this extension exists on the buffer types alone.
pub trait Resize: ContiguousMut {
    /// Grow or shrink the buffer to `new_len` elements, in place or by
    /// reallocation. Elements exposed by growth are set to the element
    /// default.
    fn resize(&mut self, new_len: usize)
    where
        Self::Item: Default;
}

#[cfg(test)]
mod tests {
    use crate::testing::{VecArray, VecArrayMut};

    use super::*;

    #[test]
    fn small_constructors_agree_with_lengths() {
        assert_eq!(VecArray::<u32>::empty().len(), 0);
        assert_eq!(VecArray::singleton(1u32).len(), 1);
        assert_eq!(VecArray::doubleton(1u32, 2).len(), 2);
        assert_eq!(VecArray::tripleton(1u32, 2, 3).len(), 3);
        assert_eq!(VecArray::quadrupleton(1u32, 2, 3, 4).len(), 4);
    }

    #[test]
    fn index_reads_what_constructors_wrote() {
        let buf = VecArray::quadrupleton(10u32, 20, 30, 40);
        assert_eq!(buf.index(0), 10);
        assert_eq!(buf.index(3), 40);
        assert_eq!(buf.get(4), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_range_panics() {
        VecArray::singleton(1u32).index(1);
    }

    #[test]
    fn new_is_default_filled() {
        let m = VecArrayMut::<u32>::new(4);
        assert_eq!(m.len(), 4);
        assert!((0..4).all(|i| m.read(i) == 0));
    }

    #[test]
    fn replicate_fills_with_clones() {
        let m = VecArrayMut::replicate(3, String::from("x"));
        assert!((0..3).all(|i| m.read(i) == "x"));
    }

    #[test]
    fn write_then_into_frozen_preserves_content() {
        let mut m = VecArrayMut::<u32>::new(5);
        m.write(2, 7);
        let frozen = m.into_frozen();
        let expected: Vec<u32> = vec![0, 0, 7, 0, 0];
        assert!((0..5).all(|i| frozen.index(i) == expected[i]));
    }

    #[test]
    fn copying_freeze_leaves_source_usable() {
        let mut m = VecArrayMut::replicate(3, 1u32);
        let frozen = m.freeze();
        m.write(0, 9);
        assert_eq!(frozen.index(0), 1);
        assert_eq!(m.read(0), 9);
    }

    #[test]
    fn insert_at_default_derivation() {
        let buf = VecArray::quadrupleton(10u32, 20, 30, 40);
        let grown = buf.insert_at(2, 99);
        let expected = [10u32, 20, 99, 30, 40];
        assert_eq!(grown.len(), 5);
        assert!((0..5).all(|i| grown.index(i) == expected[i]));
    }

    #[test]
    fn insert_at_front_and_back() {
        let buf = VecArray::doubleton(2u32, 3);
        let front = buf.insert_at(0, 1);
        let back = buf.insert_at(2, 4);
        assert!((0..3).all(|i| front.index(i) == [1u32, 2, 3][i]));
        assert!((0..3).all(|i| back.index(i) == [2u32, 3, 4][i]));
    }

    #[test]
    #[should_panic(expected = "insert position")]
    fn insert_past_end_panics() {
        VecArray::singleton(1u32).insert_at(2, 0);
    }

    #[test]
    fn run_freezes_the_scope_product() {
        let buf = VecArray::run(|| {
            let mut m = VecArrayMut::<u32>::new(3);
            m.write(0, 1);
            m.write(1, 2);
            m.write(2, 3);
            m
        });
        assert!((0..3).all(|i| buf.index(i) == (i as u32) + 1));
    }

    #[test]
    fn content_eq_is_structural() {
        let a = VecArray::tripleton(1u32, 2, 3);
        let b = VecArray::tripleton(1u32, 2, 3);
        let c = VecArray::tripleton(1u32, 2, 4);
        assert!(a.content_eq(&b));
        assert!(b.content_eq(&a));
        assert!(!a.content_eq(&c));
        assert!(!a.content_eq(&VecArray::doubleton(1u32, 2)));
    }

    #[test]
    fn copy_within_overlapping_forward_and_backward() {
        let mut m = VecArrayMut::<u32>::new(6);
        for i in 0..6 {
            m.write(i, i as u32);
        }
        // Forward overlap: [0,1,2,3] -> positions 2..6.
        m.copy_within(0, 4, 2);
        assert!((0..6).all(|i| m.read(i) == [0, 1, 0, 1, 2, 3][i]));

        // Backward overlap on fresh data.
        let mut m = VecArrayMut::<u32>::new(6);
        for i in 0..6 {
            m.write(i, i as u32);
        }
        m.copy_within(2, 4, 0);
        assert!((0..6).all(|i| m.read(i) == [2, 3, 4, 5, 4, 5][i]));
    }

    #[test]
    fn copy_from_mut_between_distinct_buffers() {
        let src = VecArrayMut::replicate(4, 7u32);
        let mut dst = VecArrayMut::<u32>::new(4);
        dst.copy_from_mut(1, &src, 0, 3);
        assert!((0..4).all(|i| dst.read(i) == [0, 7, 7, 7][i]));
    }

    #[test]
    fn shrink_and_freeze_truncates() {
        let mut m = VecArrayMut::<u32>::new(5);
        for i in 0..5 {
            m.write(i, i as u32);
        }
        let frozen = m.shrink_and_freeze(3);
        assert_eq!(frozen.len(), 3);
        assert!((0..3).all(|i| frozen.index(i) == i as u32));
    }

    #[test]
    fn resize_grows_with_defaults_and_shrinks() {
        let mut m = VecArrayMut::replicate(2, 5u32);
        m.resize(4);
        assert_eq!(m.len(), 4);
        assert!((0..4).all(|i| m.read(i) == [5, 5, 0, 0][i]));
        m.resize(1);
        assert_eq!(m.len(), 1);
        assert_eq!(m.read(0), 5);
    }

    #[test]
    fn same_storage_is_identity_not_content() {
        let a = VecArrayMut::replicate(3, 1u32);
        let b = VecArrayMut::replicate(3, 1u32);
        assert!(a.same_storage(&a));
        assert!(!a.same_storage(&b));
    }

    #[test]
    fn iter_walks_every_position() {
        let buf = VecArray::tripleton(4u32, 5, 6);
        let collected: Vec<u32> = buf.iter().collect();
        assert_eq!(collected, vec![4, 5, 6]);
        assert_eq!(buf.iter().len(), 3);
    }
}
