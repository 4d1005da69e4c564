//! Small-count-optimized heap storage.
//!
//! [`SmallBoxed`] has exactly the semantics of [`Boxed`](crate::Boxed)
//! with different allocation tuning: up to [`INLINE_CAPACITY`] elements
//! live inline in the buffer value itself and only larger buffers spill
//! to the heap. Choose it when most buffers are short-lived and small;
//! nothing else about the interface changes.

use silt_core::{Contiguous, ContiguousMut, Element, Resize};
use smallvec::{smallvec, SmallVec};

/// Number of elements stored inline before spilling to the heap.
pub const INLINE_CAPACITY: usize = 8;

type Inline<T> = SmallVec<[T; INLINE_CAPACITY]>;

/// Immutable buffer with inline storage for small element counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmallBoxed<T> {
    items: Inline<T>,
}

/// Exclusively-owned writable counterpart of [`SmallBoxed`].
#[derive(Clone, Debug)]
pub struct SmallBoxedMut<T> {
    items: Inline<T>,
}

impl<T: Element> Contiguous for SmallBoxed<T> {
    type Item = T;
    type Mutable = SmallBoxedMut<T>;

    fn empty() -> Self {
        Self {
            items: SmallVec::new(),
        }
    }

    fn singleton(a: T) -> Self {
        Self {
            items: smallvec![a],
        }
    }

    fn doubleton(a: T, b: T) -> Self {
        Self {
            items: smallvec![a, b],
        }
    }

    fn tripleton(a: T, b: T, c: T) -> Self {
        Self {
            items: smallvec![a, b, c],
        }
    }

    fn quadrupleton(a: T, b: T, c: T, d: T) -> Self {
        Self {
            items: smallvec![a, b, c, d],
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<T> {
        self.items.get(index).cloned()
    }

    fn clone_range(&self, offset: usize, len: usize) -> Self {
        Self {
            items: self.items[offset..offset + len].iter().cloned().collect(),
        }
    }

    fn thaw_range(&self, offset: usize, len: usize) -> SmallBoxedMut<T> {
        SmallBoxedMut {
            items: self.items[offset..offset + len].iter().cloned().collect(),
        }
    }

    fn content_eq(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        self.items == other.items
    }
}

impl<T: Element> ContiguousMut for SmallBoxedMut<T> {
    type Item = T;
    type Frozen = SmallBoxed<T>;

    fn replicate(len: usize, item: T) -> Self {
        Self {
            items: smallvec![item; len],
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<T> {
        self.items.get(index).cloned()
    }

    fn write(&mut self, index: usize, item: T) {
        self.items[index] = item;
    }

    fn freeze_range(&self, offset: usize, len: usize) -> SmallBoxed<T> {
        SmallBoxed {
            items: self.items[offset..offset + len].iter().cloned().collect(),
        }
    }

    fn into_frozen(self) -> SmallBoxed<T> {
        SmallBoxed { items: self.items }
    }

    fn shrink_and_freeze(mut self, len: usize) -> SmallBoxed<T> {
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
            items: self.items[offset..offset + len].iter().cloned().collect(),
        }
    }

    fn copy_from(&mut self, dst_offset: usize, src: &SmallBoxed<T>, src_offset: usize, len: usize) {
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

impl<T: Element> Resize for SmallBoxedMut<T> {
    fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        if new_len <= self.items.len() {
            self.items.truncate(new_len);
        } else {
            self.items.reserve(new_len - self.items.len());
            while self.items.len() < new_len {
                self.items.push(T::default());
            }
        }
    }
}
