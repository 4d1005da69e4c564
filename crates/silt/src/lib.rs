//! Silt: one capability interface over interchangeable contiguous array
//! representations.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the silt sub-crates. For most users, adding `silt` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use silt::prelude::*;
//!
//! // Generic over any backend: sum a window of a buffer.
//! fn window_sum<A: Contiguous<Item = u32>>(buf: &A, offset: usize, len: usize) -> u32 {
//!     buf.slice(offset, len).iter().sum()
//! }
//!
//! // Build a frozen buffer inside one construction scope.
//! let flat: Flat<u32> = Flat::run(|| {
//!     let mut staged = FlatMut::replicate(5, 0);
//!     staged.write(2, 7);
//!     staged
//! });
//! let boxed = Boxed::quadrupleton(1u32, 2, 3, 4);
//!
//! // The same algorithm runs over both representations.
//! assert_eq!(window_sum(&flat, 1, 3), 7);
//! assert_eq!(window_sum(&boxed, 1, 3), 9);
//!
//! // Zero-copy windows compose without nesting.
//! let window = flat.slice(1, 3).slice(1, 1);
//! assert_eq!(window.offset(), 2);
//! assert_eq!(window.index(0), 7);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `silt-core` | Capability traits, element markers, windowed views |
//! | [`store`] | `silt-store` | The concrete backends (`Boxed`, `SmallBoxed`, `Flat`, `PtrArray`) |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Capability traits, element markers, and windowed views (`silt-core`).
///
/// The traits ([`types::Contiguous`], [`types::ContiguousMut`],
/// [`types::Resize`]) are the surface generic algorithms are written
/// against; the views ([`types::Slice`], [`types::SliceMut`]) work over
/// any backend.
pub use silt_core as types;

/// Concrete storage backends (`silt-store`).
///
/// Pick by element shape and allocation profile: [`store::Boxed`] for
/// arbitrary elements, [`store::SmallBoxed`] when most buffers are
/// small, [`store::Flat`] for fixed-width scalars, [`store::PtrArray`]
/// for arrays of arrays.
pub use silt_store as store;

/// Common imports for typical silt usage.
///
/// ```rust
/// use silt::prelude::*;
/// ```
///
/// This imports the capability traits, the view types, and all four
/// backends.
pub mod prelude {
    // Capability traits and element markers
    pub use silt_core::{Contiguous, ContiguousMut, Element, RefElement, Resize, Scalar};

    // Windowed views and iteration
    pub use silt_core::{Iter, Slice, SliceMut};

    // Backends
    pub use silt_store::{
        Boxed, BoxedMut, Flat, FlatMut, PtrArray, PtrArrayMut, SmallBoxed, SmallBoxedMut,
    };
}
