//! Storage for elements that are themselves shared references.
//!
//! [`PtrArray`] holds `Arc`/`Rc`-style references directly in its backing
//! block — one slot per reference, no intervening indirection cell — which
//! makes it the natural representation for arrays of arrays. Every copy
//! operation duplicates references, never payloads, so clones and freezes
//! of these buffers share their payload allocations.

use silt_core::{Contiguous, ContiguousMut, RefElement, Resize};

/// Immutable buffer of shared-reference elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PtrArray<P> {
    items: Box<[P]>,
}

/// Exclusively-owned writable counterpart of [`PtrArray`].
#[derive(Clone, Debug)]
pub struct PtrArrayMut<P> {
    items: Vec<P>,
}

impl<P: RefElement> Contiguous for PtrArray<P> {
    type Item = P;
    type Mutable = PtrArrayMut<P>;

    fn empty() -> Self {
        Self {
            items: Vec::new().into_boxed_slice(),
        }
    }

    fn singleton(a: P) -> Self {
        Self {
            items: Box::new([a]),
        }
    }

    fn doubleton(a: P, b: P) -> Self {
        Self {
            items: Box::new([a, b]),
        }
    }

    fn tripleton(a: P, b: P, c: P) -> Self {
        Self {
            items: Box::new([a, b, c]),
        }
    }

    fn quadrupleton(a: P, b: P, c: P, d: P) -> Self {
        Self {
            items: Box::new([a, b, c, d]),
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<P> {
        self.items.get(index).cloned()
    }

    fn clone_range(&self, offset: usize, len: usize) -> Self {
        Self {
            items: self.items[offset..offset + len].to_vec().into_boxed_slice(),
        }
    }

    fn thaw_range(&self, offset: usize, len: usize) -> PtrArrayMut<P> {
        PtrArrayMut {
            items: self.items[offset..offset + len].to_vec(),
        }
    }

    // Per-element comparison short-circuits through reference identity
    // before falling back to structural equality of the payloads.
    fn content_eq(&self, other: &Self) -> bool
    where
        P: PartialEq,
    {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(other.items.iter())
                .all(|(a, b)| a.shares(b) || a == b)
    }
}

impl<P: RefElement> ContiguousMut for PtrArrayMut<P> {
    type Item = P;
    type Frozen = PtrArray<P>;

    fn replicate(len: usize, item: P) -> Self {
        Self {
            items: vec![item; len],
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<P> {
        self.items.get(index).cloned()
    }

    fn write(&mut self, index: usize, item: P) {
        self.items[index] = item;
    }

    fn freeze_range(&self, offset: usize, len: usize) -> PtrArray<P> {
        PtrArray {
            items: self.items[offset..offset + len].to_vec().into_boxed_slice(),
        }
    }

    fn into_frozen(self) -> PtrArray<P> {
        PtrArray {
            items: self.items.into_boxed_slice(),
        }
    }

    fn shrink_and_freeze(mut self, len: usize) -> PtrArray<P> {
        assert!(
            len <= self.items.len(),
            "cannot shrink buffer of length {} to {len}",
            self.items.len()
        );
        self.items.truncate(len);
        self.into_frozen()
    }

    fn clone_mut_range(&self, offset: usize, len: usize) -> Self {
        Self {
            items: self.items[offset..offset + len].to_vec(),
        }
    }

    fn copy_from(&mut self, dst_offset: usize, src: &PtrArray<P>, src_offset: usize, len: usize) {
        self.items[dst_offset..dst_offset + len]
            .clone_from_slice(&src.items[src_offset..src_offset + len]);
    }

    fn copy_from_mut(&mut self, dst_offset: usize, src: &Self, src_offset: usize, len: usize) {
        self.items[dst_offset..dst_offset + len]
            .clone_from_slice(&src.items[src_offset..src_offset + len]);
    }

    fn same_storage(&self, other: &Self) -> bool {
        std::ptr::eq(self.items.as_ptr(), other.items.as_ptr())
            && self.items.len() == other.items.len()
    }
}

impl<P: RefElement> Resize for PtrArrayMut<P> {
    fn resize(&mut self, new_len: usize)
    where
        P: Default,
    {
        self.items.resize_with(new_len, P::default);
    }
}
