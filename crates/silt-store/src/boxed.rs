//! Heap storage for unconstrained element types.
//!
//! [`Boxed`] keeps its elements behind one heap allocation (`Box<[T]>`);
//! [`BoxedMut`] is the owned writable counterpart (`Vec<T>` with exact,
//! non-amortized sizing). Any cloneable element type is admitted — this is
//! the general-purpose representation the others specialize.

use silt_core::{Contiguous, ContiguousMut, Element, Resize};

/// Immutable heap-allocated buffer of arbitrary elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Boxed<T> {
    items: Box<[T]>,
}

/// Exclusively-owned writable counterpart of [`Boxed`].
#[derive(Clone, Debug)]
pub struct BoxedMut<T> {
    items: Vec<T>,
}

impl<T: Element> Contiguous for Boxed<T> {
    type Item = T;
    type Mutable = BoxedMut<T>;

    fn empty() -> Self {
        Self {
            items: Vec::new().into_boxed_slice(),
        }
    }

    fn singleton(a: T) -> Self {
        Self {
            items: Box::new([a]),
        }
    }

    fn doubleton(a: T, b: T) -> Self {
        Self {
            items: Box::new([a, b]),
        }
    }

    fn tripleton(a: T, b: T, c: T) -> Self {
        Self {
            items: Box::new([a, b, c]),
        }
    }

    fn quadrupleton(a: T, b: T, c: T, d: T) -> Self {
        Self {
            items: Box::new([a, b, c, d]),
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
            items: self.items[offset..offset + len].to_vec().into_boxed_slice(),
        }
    }

    fn thaw_range(&self, offset: usize, len: usize) -> BoxedMut<T> {
        BoxedMut {
            items: self.items[offset..offset + len].to_vec(),
        }
    }

    // Slice equality short-circuits on length and avoids per-element
    // cloning, unlike the positional default.
    fn content_eq(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        self.items == other.items
    }

    // Single pass, no filler clones: splice directly into a vector of the
    // target length instead of replicate-then-overwrite.
    fn insert_at(&self, index: usize, item: T) -> Self {
        let len = self.items.len();
        assert!(
            index <= len,
            "insert position {index} out of bounds for buffer of length {len}"
        );
        let mut items = Vec::with_capacity(len + 1);
        items.extend_from_slice(&self.items[..index]);
        items.push(item);
        items.extend_from_slice(&self.items[index..]);
        Self {
            items: items.into_boxed_slice(),
        }
    }
}

impl<T: Element> ContiguousMut for BoxedMut<T> {
    type Item = T;
    type Frozen = Boxed<T>;

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

    fn freeze_range(&self, offset: usize, len: usize) -> Boxed<T> {
        Boxed {
            items: self.items[offset..offset + len].to_vec().into_boxed_slice(),
        }
    }

    fn into_frozen(self) -> Boxed<T> {
        Boxed {
            items: self.items.into_boxed_slice(),
        }
    }

    fn shrink_and_freeze(mut self, len: usize) -> Boxed<T> {
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

    fn copy_from(&mut self, dst_offset: usize, src: &Boxed<T>, src_offset: usize, len: usize) {
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

impl<T: Element> Resize for BoxedMut<T> {
    fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.items.resize_with(new_len, T::default);
    }
}

#[cfg(test)]
mod tests {
    use silt_core::Slice;
    use silt_test_utils::check_all;

    use super::*;

    #[test]
    fn conformance() {
        check_all::<Boxed<u32>>(|n| n as u32);
    }

    #[test]
    fn conformance_with_heap_elements() {
        check_all::<Boxed<String>>(|n| n.to_string());
    }

    #[test]
    fn into_frozen_does_not_move_elements() {
        let mut m = BoxedMut::replicate(3, String::from("a"));
        m.write(1, String::from("b"));
        let ptr = m.items.as_ptr();
        let frozen = m.into_frozen();
        assert!(std::ptr::eq(ptr, frozen.items.as_ptr()));
    }

    #[test]
    fn insert_at_splices_in_one_pass() {
        let buf = Boxed::quadrupleton(10u32, 20, 30, 40);
        let grown = buf.insert_at(2, 99);
        assert!(grown.content_eq(&Boxed {
            items: Box::new([10, 20, 99, 30, 40]),
        }));
    }

    #[test]
    fn slice_of_boxed_reads_through() {
        let buf = Boxed::quadrupleton(10u32, 20, 30, 40);
        let s = Slice::new(&buf, 1, 2);
        assert_eq!(s.index(0), 20);
        assert_eq!(s.index(1), 30);
    }

    mod properties {
        use proptest::prelude::*;
        use silt_core::{Contiguous, ContiguousMut};

        use super::super::{Boxed, BoxedMut};

        fn arb_buffer() -> impl Strategy<Value = (Vec<u32>, Boxed<u32>)> {
            prop::collection::vec(any::<u32>(), 0..64).prop_map(|items| {
                let buf = Boxed::run(|| {
                    let mut m = BoxedMut::replicate(items.len(), 0);
                    for (i, &x) in items.iter().enumerate() {
                        m.write(i, x);
                    }
                    m
                });
                (items, buf)
            })
        }

        proptest! {
            #[test]
            fn indexes_match_the_model((model, buf) in arb_buffer()) {
                prop_assert_eq!(buf.len(), model.len());
                for (i, &x) in model.iter().enumerate() {
                    prop_assert_eq!(buf.index(i), x);
                }
            }

            #[test]
            fn insert_matches_vec_insert(
                (mut model, buf) in arb_buffer(),
                pos_seed in any::<usize>(),
                x in any::<u32>(),
            ) {
                let pos = pos_seed % (model.len() + 1);
                let grown = buf.insert_at(pos, x);
                model.insert(pos, x);
                prop_assert_eq!(grown.len(), model.len());
                for (i, &expected) in model.iter().enumerate() {
                    prop_assert_eq!(grown.index(i), expected);
                }
            }

            #[test]
            fn copy_within_matches_slice_model(
                (mut model, buf) in arb_buffer(),
                src_seed in any::<usize>(),
                dst_seed in any::<usize>(),
                len_seed in any::<usize>(),
            ) {
                prop_assume!(!model.is_empty());
                let len = len_seed % model.len();
                let src = src_seed % (model.len() - len + 1);
                let dst = dst_seed % (model.len() - len + 1);

                let mut m = buf.thaw();
                m.copy_within(src, len, dst);
                model.copy_within(src..src + len, dst);
                for (i, &expected) in model.iter().enumerate() {
                    prop_assert_eq!(m.read(i), expected);
                }
            }
        }
    }
}
