//! Internal arena for [`UnitString`]: exact capacity bookkeeping plus the
//! growth policy.
//!
//! The arena is an `Option<Box<[T]>>` whose slice length *is* the
//! capacity. Allocation sizes come out of [`grown_capacity`] and are never
//! rounded behind the container's back, which is what makes the capacity
//! curve (and the clone-preserves-capacity law) observable exactly.
//!
//! [`UnitString`]: crate::UnitString

use alloc::{boxed::Box, vec};

use crate::unit::Unit;

/// Maximum representable unit count for the platform size type.
pub(crate) const MAX_UNITS: usize = usize::MAX;

/// Growth policy: 1.5× the current capacity, with an exact-fit fallback
/// when that is still short of `min`, clamped to [`MAX_UNITS`] once the
/// 1.5× step would overflow.
pub(crate) fn grown_capacity(cap: usize, min: usize) -> usize {
    if cap > MAX_UNITS - cap / 2 {
        return MAX_UNITS;
    }
    let candidate = cap + cap / 2;
    if candidate < min { min } else { candidate }
}

/// An owned, exactly-sized arena of units plus the logical length.
///
/// Invariants:
/// - `data` is `None` only in the never-allocated state, where `len == 0`.
/// - When allocated, `data.len() >= len + 1` and `data[len] == T::NUL`.
#[derive(Debug)]
pub(crate) struct UnitBuf<T> {
    data: Option<Box<[T]>>,
    len: usize,
}

impl<T: Unit> UnitBuf<T> {
    pub(crate) const fn new() -> Self {
        Self { data: None, len: 0 }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.data.as_ref().map_or(0, |data| data.len())
    }

    /// Content view: `len` units, terminator excluded.
    pub(crate) fn units(&self) -> &[T] {
        self.data.as_ref().map_or(&[], |data| &data[..self.len])
    }

    pub(crate) fn units_mut(&mut self) -> &mut [T] {
        match self.data.as_mut() {
            Some(data) => &mut data[..self.len],
            None => &mut [],
        }
    }

    /// Content plus the trailing terminator; `None` when never allocated.
    pub(crate) fn terminated(&self) -> Option<&[T]> {
        self.data.as_ref().map(|data| &data[..=self.len])
    }

    /// Full-arena mutable view (capacity units, slack included).
    pub(crate) fn arena_mut(&mut self) -> &mut [T] {
        match self.data.as_mut() {
            Some(data) => data,
            None => &mut [],
        }
    }

    /// Grows the arena so it can hold `required` units in total, content
    /// plus terminator. No-op when the capacity already suffices.
    pub(crate) fn grow_to(&mut self, required: usize) {
        if required > self.capacity() {
            self.reallocate(required);
        }
    }

    /// Sets the logical length and restores the terminator invariant.
    /// Caller must have grown the arena to at least `len + 1` units first.
    pub(crate) fn set_len(&mut self, len: usize) {
        debug_assert!(len == 0 || self.capacity() > len);
        if let Some(data) = self.data.as_mut() {
            data[len] = T::NUL;
        }
        self.len = len;
    }

    /// The only path that changes capacity; it never shrinks. Allocates a
    /// fresh zero-filled arena of `grown_capacity(capacity, min)` units,
    /// copies the current content across, and releases the old buffer. The
    /// fresh arena is NUL-filled, so the terminator at `len` needs no
    /// separate write.
    fn reallocate(&mut self, min: usize) {
        debug_assert!(min > self.capacity());
        let mut next = vec![T::NUL; grown_capacity(self.capacity(), min)].into_boxed_slice();
        if let Some(old) = self.data.take() {
            next[..self.len].copy_from_slice(&old[..self.len]);
        }
        self.data = Some(next);
    }
}

impl<T: Unit> Clone for UnitBuf<T> {
    // Fresh storage sized to the source's exact capacity; buffers are
    // never shared between two live instances.
    fn clone(&self) -> Self {
        let mut next = Self::new();
        if self.capacity() > 0 {
            next.grow_to(self.capacity());
            next.arena_mut()[..self.len].copy_from_slice(self.units());
            next.set_len(self.len);
        }
        next
    }
}

impl<T: Unit> Default for UnitBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}
