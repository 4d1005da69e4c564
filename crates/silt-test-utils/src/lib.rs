//! Generic conformance checks for silt storage backends.
//!
//! Every observable law of the capability interface is written here once,
//! generic over the backend, and instantiated from each backend's test
//! module via [`check_all`]. A backend that passes the full suite is
//! interchangeable with every other backend under generic algorithms.
//!
//! The `make` argument maps small integer seeds to element values; it
//! must be injective over the seeds used here (distinct seeds produce
//! elements that compare unequal).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt::Debug;

use silt_core::{Contiguous, ContiguousMut, Resize, SliceMut};

/// Build a buffer holding `make(seed)` for each seed, through the
/// replicate/write/freeze construction path.
fn build<A, F>(make: &F, seeds: &[u64]) -> A
where
    A: Contiguous,
    F: Fn(u64) -> A::Item,
{
    let Some(&first) = seeds.first() else {
        return A::empty();
    };
    A::run(|| {
        let mut staged = A::Mutable::replicate(seeds.len(), make(first));
        for (i, &seed) in seeds.iter().enumerate() {
            staged.write(i, make(seed));
        }
        staged
    })
}

/// Small-buffer constructors agree with positional reads.
pub fn check_small_constructors<A, F>(make: &F)
where
    A: Contiguous,
    A::Item: PartialEq + Debug,
    F: Fn(u64) -> A::Item,
{
    let empty = A::empty();
    assert_eq!(empty.len(), 0);
    assert!(empty.is_empty());
    assert_eq!(empty.get(0), None);

    let one = A::singleton(make(1));
    assert_eq!(one.len(), 1);
    assert_eq!(one.index(0), make(1));

    let two = A::doubleton(make(1), make(2));
    assert_eq!(two.len(), 2);
    assert_eq!(two.index(1), make(2));

    let three = A::tripleton(make(1), make(2), make(3));
    assert_eq!(three.len(), 3);
    assert_eq!(three.index(2), make(3));

    let four = A::quadrupleton(make(1), make(2), make(3), make(4));
    assert_eq!(four.len(), 4);
    assert!((0..4).all(|i| four.index(i) == make(i as u64 + 1)));
}

/// `new(n)` allocates exactly `n` default elements for every `n`, and a
/// move-freeze preserves that length.
pub fn check_default_allocation<A, F>(_make: &F)
where
    A: Contiguous,
    A::Item: PartialEq + Debug + Default,
    F: Fn(u64) -> A::Item,
{
    for n in [0usize, 1, 2, 7, 33] {
        let staged = A::Mutable::new(n);
        assert_eq!(staged.len(), n);
        assert!((0..n).all(|i| staged.read(i) == <A::Item>::default()));
        assert_eq!(staged.freeze().len(), n);
        let frozen = staged.into_frozen();
        assert_eq!(frozen.len(), n);
    }
}

/// Windowing laws: length, offset indexing, full-extent identity, and
/// slice-of-slice composition.
pub fn check_slicing<A, F>(make: &F)
where
    A: Contiguous,
    A::Item: PartialEq + Debug,
    F: Fn(u64) -> A::Item,
{
    let buf: A = build(make, &[0, 1, 2, 3, 4, 5, 6, 7]);

    let window = buf.slice(2, 4);
    assert_eq!(window.len(), 4);
    assert!((0..4).all(|i| window.index(i) == buf.index(2 + i)));
    assert_eq!(window.get(4), None);

    let full = buf.as_slice();
    assert_eq!(full.len(), buf.len());
    assert!((0..buf.len()).all(|i| full.index(i) == buf.index(i)));

    // slice(slice(b, 1, 3), 1, 1) == slice(b, 2, 1)
    let composed = buf.slice(1, 3).slice(1, 1);
    assert_eq!(composed.offset(), 2);
    assert!(composed.content_eq(&buf.slice(2, 1)));

    // The concrete vector from the interface contract.
    let concrete: A = build(make, &[10, 20, 30, 40]);
    let s = concrete.slice(1, 2);
    assert_eq!(s.index(0), make(20));
    assert_eq!(s.index(1), make(30));
}

/// A cloned window is content-equal, exactly sized, and independent of
/// the original storage.
pub fn check_clone_independence<A, F>(make: &F)
where
    A: Contiguous,
    A::Item: PartialEq + Debug,
    F: Fn(u64) -> A::Item,
{
    let buf: A = build(make, &[0, 1, 2, 3, 4]);
    let copy = buf.slice(1, 3).to_buffer();
    assert_eq!(copy.len(), 3);
    assert!((0..3).all(|i| copy.index(i) == buf.index(1 + i)));

    // Mutating a thaw of the clone never affects the original.
    let mut thawed = copy.thaw();
    thawed.write(0, make(99));
    assert_eq!(buf.index(1), make(1));
    assert_eq!(copy.index(0), make(1));
}

/// Freeze/thaw round trips preserve content in both directions, and the
/// copying freeze leaves its source usable.
pub fn check_freeze_thaw<A, F>(make: &F)
where
    A: Contiguous,
    A::Item: PartialEq + Debug,
    F: Fn(u64) -> A::Item,
{
    let buf: A = build(make, &[3, 1, 4, 1, 5]);

    // freeze(thaw(s)) == s
    let refrozen = buf.slice(1, 3).thaw().into_frozen();
    assert!(refrozen.as_slice().content_eq(&buf.slice(1, 3)));

    // A fresh thaw of freeze(m) equals m at freeze time.
    let mut staged = buf.thaw();
    let snapshot = staged.freeze();
    staged.write(0, make(77));
    let reread = snapshot.thaw();
    assert_eq!(reread.read(0), make(3));
    assert_eq!(staged.read(0), make(77));

    // clone_mut produces an independent mutable copy.
    let copied = staged.clone_mut();
    assert!(!copied.same_storage(&staged));
    assert!((0..5).all(|i| copied.read(i) == staged.read(i)));
}

/// Copy-operation laws: immutable-to-mutable, mutable-to-mutable, and
/// the overlap-safe in-buffer move in both directions.
pub fn check_copy_ops<A, F>(make: &F)
where
    A: Contiguous,
    A::Item: PartialEq + Debug,
    F: Fn(u64) -> A::Item,
{
    let src: A = build(make, &[10, 20, 30, 40]);

    // copy_from an immutable source.
    let mut dst = A::Mutable::replicate(6, make(0));
    dst.copy_from(1, &src, 0, 4);
    let expected = [0u64, 10, 20, 30, 40, 0];
    assert!((0..6).all(|i| dst.read(i) == make(expected[i])));

    // copy_from_mut between distinct mutable buffers.
    let other = A::Mutable::replicate(3, make(7));
    dst.copy_from_mut(0, &other, 0, 3);
    let expected = [7u64, 7, 7, 30, 40, 0];
    assert!((0..6).all(|i| dst.read(i) == make(expected[i])));

    // Overlapping forward move.
    let mut m = build::<A, F>(make, &[0, 1, 2, 3, 4, 5]).thaw();
    m.copy_within(0, 4, 2);
    let expected = [0u64, 1, 0, 1, 2, 3];
    assert!((0..6).all(|i| m.read(i) == make(expected[i])));

    // Overlapping backward move.
    let mut m = build::<A, F>(make, &[0, 1, 2, 3, 4, 5]).thaw();
    m.copy_within(2, 4, 0);
    let expected = [2u64, 3, 4, 5, 4, 5];
    assert!((0..6).all(|i| m.read(i) == make(expected[i])));

    // The same laws hold through mutable windows.
    let mut m = build::<A, F>(make, &[0, 1, 2, 3, 4, 5]).thaw();
    let mut w = SliceMut::new(&mut m, 1, 4);
    w.copy_from(0, src.slice(0, 2));
    w.copy_within(0, 2, 2);
    let expected = [0u64, 10, 20, 10, 20, 5];
    assert!((0..6).all(|i| m.read(i) == make(expected[i])));
}

/// Insert laws: length, prefix, inserted element, shifted suffix, plus
/// the concrete contract vector.
pub fn check_insert_at<A, F>(make: &F)
where
    A: Contiguous,
    A::Item: PartialEq + Debug,
    F: Fn(u64) -> A::Item,
{
    let buf: A = build(make, &[10, 20, 30, 40]);

    for at in 0..=buf.len() {
        let grown = buf.insert_at(at, make(99));
        assert_eq!(grown.len(), buf.len() + 1);
        assert!((0..at).all(|i| grown.index(i) == buf.index(i)));
        assert_eq!(grown.index(at), make(99));
        assert!((at..buf.len()).all(|i| grown.index(i + 1) == buf.index(i)));
    }

    // insertAt([10,20,30,40], 2, 99) == [10,20,99,30,40]
    let grown = buf.insert_at(2, make(99));
    let expected = [10u64, 20, 99, 30, 40];
    assert!((0..5).all(|i| grown.index(i) == make(expected[i])));

    // Empty-buffer insert.
    let single = A::empty().insert_at(0, make(5));
    assert_eq!(single.len(), 1);
    assert_eq!(single.index(0), make(5));
}

/// Content equality is reflexive and symmetric, and unequal lengths are
/// never equal.
pub fn check_equality<A, F>(make: &F)
where
    A: Contiguous,
    A::Item: PartialEq + Debug,
    F: Fn(u64) -> A::Item,
{
    let a: A = build(make, &[1, 2, 3]);
    let b: A = build(make, &[1, 2, 3]);
    let c: A = build(make, &[1, 2, 4]);
    let short: A = build(make, &[1, 2]);

    assert!(a.content_eq(&a));
    assert!(a.content_eq(&b));
    assert!(b.content_eq(&a));
    assert!(!a.content_eq(&c));
    assert!(!a.content_eq(&short));
    assert!(!short.content_eq(&a));
    assert!(A::empty().content_eq(&A::empty()));
}

/// Reference identity of mutable storage: `same_storage` and
/// `same_region` are true only for the same allocation, offset, and
/// length — never by content.
pub fn check_identity<A, F>(make: &F)
where
    A: Contiguous,
    A::Item: PartialEq + Debug,
    F: Fn(u64) -> A::Item,
{
    let mut a = A::Mutable::replicate(4, make(1));
    let mut b = A::Mutable::replicate(4, make(1));
    assert!(a.same_storage(&a));
    assert!(!a.same_storage(&b));

    let wa = SliceMut::new(&mut a, 1, 2);
    let wb = SliceMut::new(&mut b, 1, 2);
    assert!(wa.same_region(&wa));
    assert!(!wa.same_region(&wb));
    drop((wa, wb));

    // Same storage, different window.
    let w1 = SliceMut::new(&mut a, 0, 2);
    assert!(w1.same_region(&w1));
    drop(w1);
    let w2 = SliceMut::new(&mut a, 1, 2);
    let w3 = SliceMut::new(&mut b, 1, 2);
    assert!(!w2.same_region(&w3));
}

/// Shrink laws: window truncation is purely logical, and both
/// shrink-and-freeze forms take exactly the requested prefix.
pub fn check_shrink_ops<A, F>(make: &F)
where
    A: Contiguous,
    A::Item: PartialEq + Debug,
    F: Fn(u64) -> A::Item,
{
    let buf: A = build(make, &[0, 1, 2, 3, 4]);

    // Owned truncate-then-move.
    let frozen = buf.thaw().shrink_and_freeze(3);
    assert_eq!(frozen.len(), 3);
    assert!((0..3).all(|i| frozen.index(i) == make(i as u64)));

    // Shrinking to the full length is the identity.
    let same = buf.thaw().shrink_and_freeze(5);
    assert!(same.content_eq(&buf));

    // Window shrink leaves the base length untouched.
    let mut staged = buf.thaw();
    let mut w = SliceMut::new(&mut staged, 1, 4);
    w.shrink(2);
    assert_eq!(w.len(), 2);
    assert_eq!(w.read(1), make(2));
    drop(w);
    assert_eq!(staged.len(), 5);

    // Copying shrink-and-freeze through a window.
    let prefix = SliceMut::new(&mut staged, 1, 4).shrink_and_freeze(2);
    assert_eq!(prefix.len(), 2);
    assert!((0..2).all(|i| prefix.index(i) == make(i as u64 + 1)));
    // The base buffer survives the copying path.
    assert_eq!(staged.len(), 5);
}

/// Resize grows with default fill and shrinks to a prefix; only the
/// unsliced buffer exposes it.
pub fn check_resize<A, F>(make: &F)
where
    A: Contiguous,
    A::Mutable: Resize,
    A::Item: PartialEq + Debug + Default,
    F: Fn(u64) -> A::Item,
{
    let mut staged = A::Mutable::replicate(2, make(9));
    staged.resize(5);
    assert_eq!(staged.len(), 5);
    assert_eq!(staged.read(1), make(9));
    assert!((2..5).all(|i| staged.read(i) == <A::Item>::default()));

    staged.resize(1);
    assert_eq!(staged.len(), 1);
    assert_eq!(staged.read(0), make(9));

    staged.resize(0);
    assert!(staged.is_empty());
}

/// The positional walk visits every element in order, over buffers and
/// windows alike.
pub fn check_iteration<A, F>(make: &F)
where
    A: Contiguous,
    A::Item: PartialEq + Debug,
    F: Fn(u64) -> A::Item,
{
    let buf: A = build(make, &[5, 6, 7, 8]);
    let walked: Vec<A::Item> = buf.iter().collect();
    assert_eq!(walked.len(), 4);
    assert!((0..4).all(|i| walked[i] == buf.index(i)));

    let windowed: Vec<A::Item> = buf.slice(1, 2).iter().collect();
    assert_eq!(windowed.len(), 2);
    assert_eq!(windowed[0], make(6));
    assert_eq!(windowed[1], make(7));

    assert_eq!(A::empty().iter().count(), 0);
}

/// The full conformance suite.
pub fn check_all<A>(make: impl Fn(u64) -> A::Item)
where
    A: Contiguous,
    A::Mutable: Resize,
    A::Item: PartialEq + Debug + Default,
{
    check_small_constructors::<A, _>(&make);
    check_default_allocation::<A, _>(&make);
    check_slicing::<A, _>(&make);
    check_clone_independence::<A, _>(&make);
    check_freeze_thaw::<A, _>(&make);
    check_copy_ops::<A, _>(&make);
    check_insert_at::<A, _>(&make);
    check_equality::<A, _>(&make);
    check_identity::<A, _>(&make);
    check_shrink_ops::<A, _>(&make);
    check_resize::<A, _>(&make);
    check_iteration::<A, _>(&make);
}
