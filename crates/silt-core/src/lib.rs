//! Capability interface and windowed views for contiguous array storage.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! element capability markers, the [`Contiguous`] / [`ContiguousMut`] /
//! [`Resize`] traits with their shared default-method derivations, and the
//! generic [`Slice`] / [`SliceMut`] views that work over any backend.
//!
//! Concrete storage representations live in `silt-store`; algorithms
//! written against the traits in this crate run unmodified over all of
//! them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod iter;
pub mod slice;
pub mod traits;

pub use element::{Element, RefElement, Scalar};
pub use iter::Iter;
pub use slice::{Slice, SliceMut};
pub use traits::{Contiguous, ContiguousMut, Resize};

/// Minimal `Vec`-backed reference backend for exercising the trait
/// default bodies and the view types without depending on `silt-store`.
#[cfg(test)]
pub(crate) mod testing {
    use crate::element::Element;
    use crate::traits::{Contiguous, ContiguousMut, Resize};

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct VecArray<T> {
        items: Vec<T>,
    }

    #[derive(Clone, Debug)]
    pub struct VecArrayMut<T> {
        items: Vec<T>,
    }

    impl<T: Element> Contiguous for VecArray<T> {
        type Item = T;
        type Mutable = VecArrayMut<T>;

        fn empty() -> Self {
            Self { items: Vec::new() }
        }

        fn singleton(a: T) -> Self {
            Self { items: vec![a] }
        }

        fn doubleton(a: T, b: T) -> Self {
            Self { items: vec![a, b] }
        }

        fn tripleton(a: T, b: T, c: T) -> Self {
            Self { items: vec![a, b, c] }
        }

        fn quadrupleton(a: T, b: T, c: T, d: T) -> Self {
            Self {
                items: vec![a, b, c, d],
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
                items: self.items[offset..offset + len].to_vec(),
            }
        }

        fn thaw_range(&self, offset: usize, len: usize) -> VecArrayMut<T> {
            VecArrayMut {
                items: self.items[offset..offset + len].to_vec(),
            }
        }
    }

    impl<T: Element> ContiguousMut for VecArrayMut<T> {
        type Item = T;
        type Frozen = VecArray<T>;

        fn replicate(len: usize, item: T) -> Self {
            Self {
                items: vec![item; len],
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

        fn freeze_range(&self, offset: usize, len: usize) -> VecArray<T> {
            VecArray {
                items: self.items[offset..offset + len].to_vec(),
            }
        }

        fn into_frozen(self) -> VecArray<T> {
            VecArray { items: self.items }
        }

        fn shrink_and_freeze(mut self, len: usize) -> VecArray<T> {
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

        fn same_storage(&self, other: &Self) -> bool {
            std::ptr::eq(self.items.as_ptr(), other.items.as_ptr())
                && self.items.len() == other.items.len()
        }
    }

    impl<T: Element> Resize for VecArrayMut<T> {
        fn resize(&mut self, new_len: usize)
        where
            T: Default,
        {
            self.items.resize_with(new_len, T::default);
        }
    }
}
