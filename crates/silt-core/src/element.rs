//! Element capability markers.
//!
//! Each storage representation constrains its elements through one of the
//! traits in this module. [`Element`] is the unconstrained marker used by
//! the heap-indirected representations; [`Scalar`] admits fixed-width
//! values into flat byte-block storage; [`RefElement`] admits elements
//! that are themselves shared references.

use std::rc::Rc;
use std::sync::Arc;

/// Marker for elements storable in the general (boxed) representations.
///
/// Blanket-implemented for every cloneable type — boxed storage imposes
/// no constraint of its own beyond the ability to duplicate element
/// values during copies and clones.
pub trait Element: Clone {}

impl<T: Clone> Element for T {}

/// A fixed-width scalar representable as a little-endian byte pattern.
///
/// Implementors are stored in flat byte-block buffers at
/// `index * WIDTH` byte offsets. Equality of flat buffers is equality of
/// the encoded bytes, so two values that encode identically (for example
/// two NaNs with the same bit pattern) are indistinguishable in storage.
pub trait Scalar: Copy + Default + PartialEq {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Write the little-endian encoding of `self` into `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `dst.len() != WIDTH`.
    fn store(self, dst: &mut [u8]);

    /// Decode a value from the little-endian bytes in `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src.len() != WIDTH`.
    fn load(src: &[u8]) -> Self;
}

impl Scalar for u8 {
    const WIDTH: usize = 1;

    fn store(self, dst: &mut [u8]) {
        dst.copy_from_slice(&[self]);
    }

    fn load(src: &[u8]) -> Self {
        let mut buf = [0u8; 1];
        buf.copy_from_slice(src);
        buf[0]
    }
}

impl Scalar for i8 {
    const WIDTH: usize = 1;

    fn store(self, dst: &mut [u8]) {
        dst.copy_from_slice(&self.to_le_bytes());
    }

    fn load(src: &[u8]) -> Self {
        let mut buf = [0u8; 1];
        buf.copy_from_slice(src);
        Self::from_le_bytes(buf)
    }
}

impl Scalar for u16 {
    const WIDTH: usize = 2;

    fn store(self, dst: &mut [u8]) {
        dst.copy_from_slice(&self.to_le_bytes());
    }

    fn load(src: &[u8]) -> Self {
        let mut buf = [0u8; 2];
        buf.copy_from_slice(src);
        Self::from_le_bytes(buf)
    }
}

impl Scalar for i16 {
    const WIDTH: usize = 2;

    fn store(self, dst: &mut [u8]) {
        dst.copy_from_slice(&self.to_le_bytes());
    }

    fn load(src: &[u8]) -> Self {
        let mut buf = [0u8; 2];
        buf.copy_from_slice(src);
        Self::from_le_bytes(buf)
    }
}

impl Scalar for u32 {
    const WIDTH: usize = 4;

    fn store(self, dst: &mut [u8]) {
        dst.copy_from_slice(&self.to_le_bytes());
    }

    fn load(src: &[u8]) -> Self {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(src);
        Self::from_le_bytes(buf)
    }
}

impl Scalar for i32 {
    const WIDTH: usize = 4;

    fn store(self, dst: &mut [u8]) {
        dst.copy_from_slice(&self.to_le_bytes());
    }

    fn load(src: &[u8]) -> Self {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(src);
        Self::from_le_bytes(buf)
    }
}

impl Scalar for u64 {
    const WIDTH: usize = 8;

    fn store(self, dst: &mut [u8]) {
        dst.copy_from_slice(&self.to_le_bytes());
    }

    fn load(src: &[u8]) -> Self {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(src);
        Self::from_le_bytes(buf)
    }
}

impl Scalar for i64 {
    const WIDTH: usize = 8;

    fn store(self, dst: &mut [u8]) {
        dst.copy_from_slice(&self.to_le_bytes());
    }

    fn load(src: &[u8]) -> Self {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(src);
        Self::from_le_bytes(buf)
    }
}

impl Scalar for usize {
    const WIDTH: usize = std::mem::size_of::<usize>();

    fn store(self, dst: &mut [u8]) {
        dst.copy_from_slice(&self.to_le_bytes());
    }

    fn load(src: &[u8]) -> Self {
        let mut buf = [0u8; std::mem::size_of::<usize>()];
        buf.copy_from_slice(src);
        Self::from_le_bytes(buf)
    }
}

impl Scalar for isize {
    const WIDTH: usize = std::mem::size_of::<isize>();

    fn store(self, dst: &mut [u8]) {
        dst.copy_from_slice(&self.to_le_bytes());
    }

    fn load(src: &[u8]) -> Self {
        let mut buf = [0u8; std::mem::size_of::<isize>()];
        buf.copy_from_slice(src);
        Self::from_le_bytes(buf)
    }
}

impl Scalar for f32 {
    const WIDTH: usize = 4;

    fn store(self, dst: &mut [u8]) {
        dst.copy_from_slice(&self.to_le_bytes());
    }

    fn load(src: &[u8]) -> Self {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(src);
        Self::from_le_bytes(buf)
    }
}

impl Scalar for f64 {
    const WIDTH: usize = 8;

    fn store(self, dst: &mut [u8]) {
        dst.copy_from_slice(&self.to_le_bytes());
    }

    fn load(src: &[u8]) -> Self {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(src);
        Self::from_le_bytes(buf)
    }
}

/// An element that is itself a shared reference to its payload.
///
/// Cloning a `RefElement` duplicates the reference, never the payload —
/// an array of these shares its payloads with every copy made from it.
/// Used by the pointer-array representation to hold arrays of arrays
/// without an intervening indirection cell per element.
pub trait RefElement: Clone {
    /// Whether `self` and `other` point to the same payload allocation.
    fn shares(&self, other: &Self) -> bool;
}

impl<T: ?Sized> RefElement for Arc<T> {
    fn shares(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> RefElement for Rc<T> {
    fn shares(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}
