//! Concrete storage backends for the silt contiguous-array interface.
//!
//! Four representations implement the `silt-core` capability traits, each
//! trading differently between generality and copy cost:
//!
//! | Backend | Element constraint | Storage |
//! |---------|--------------------|---------|
//! | [`Boxed`] | none (`Clone`) | one heap block of elements |
//! | [`SmallBoxed`] | none (`Clone`) | inline up to [`INLINE_CAPACITY`](small::INLINE_CAPACITY), heap beyond |
//! | [`Flat`] | fixed-width scalar | raw little-endian byte block |
//! | [`PtrArray`] | shared reference | references held without a per-element cell |
//!
//! Generic code written against `silt_core::Contiguous` runs unchanged
//! over all four; pick the backend by element shape and allocation
//! profile.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boxed;
pub mod flat;
pub mod ptrarray;
pub mod small;

pub use boxed::{Boxed, BoxedMut};
pub use flat::{Flat, FlatMut};
pub use ptrarray::{PtrArray, PtrArrayMut};
pub use small::{SmallBoxed, SmallBoxedMut};
