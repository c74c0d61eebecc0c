//! Removal-aware traversal.
//!
//! A `StrideVec` carries one embedded cursor. [`StrideVec::rewind`] starts a
//! traversal and [`StrideVec::step`] yields indices; between steps the caller
//! may remove elements through the container and the cursor is adjusted so
//! that nothing is skipped or visited twice:
//!
//! ```
//! # use stridevec::StrideVec;
//! let mut vec = StrideVec::new(8, 1).unwrap();
//! for byte in [1u8, 2, 3, 4, 5, 6] {
//!     vec.push_back(&[byte]).unwrap();
//! }
//!
//! vec.rewind();
//! while let Some(index) = vec.step() {
//!     if vec.get(index).unwrap()[0] % 2 == 0 {
//!         vec.remove(index);
//!     }
//! }
//! assert_eq!(vec.as_bytes(), &[1, 3, 5]);
//! ```
//!
//! Only one embedded traversal can be in flight per container. Insertions at
//! or before the cursor are not tracked: the traversal yields the shifted
//! current element again and never yields the inserted one.
//!
//! [`CursorMut`] is the external form: it borrows the container, applies the
//! same adjustment rule to its own position and leaves the embedded cursor
//! untouched.

use std::ops::ControlFlow;

use crate::core::StrideVec;

/// State of the embedded cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorState {
    /// No traversal has been started
    #[default]
    Inactive,
    /// A traversal is in progress; the value is the index the next step yields
    Active(usize),
    /// The last traversal ran off the end
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Removal {
    /// Later elements shift left by one
    Ordered,
    /// The last element moves into the vacated slot
    SwapLast,
}

/// Position of the next element to yield after `index` was removed, given
/// that the previous step yielded `next - 1`.
///
/// Both removal kinds decrement when `index` is at or before the element just
/// yielded. A swap-last removal further back moves the last element into a
/// visited slot, so the traversal yields the current element again and never
/// yields the moved one.
fn adjust_next(next: usize, index: usize) -> usize {
    if index < next {
        next - 1
    } else {
        next
    }
}

impl CursorState {
    pub(crate) fn after_remove(self, index: usize) -> Self {
        match self {
            CursorState::Active(next) => CursorState::Active(adjust_next(next, index)),
            other => other,
        }
    }
}

impl StrideVec {
    #[must_use]
    pub fn cursor_state(&self) -> CursorState {
        self.cursor
    }

    /// Starts a new embedded traversal at index 0, abandoning any previous one.
    pub fn rewind(&mut self) {
        self.cursor = CursorState::Active(0);
    }

    /// Advances the embedded cursor and returns the index of the element to visit.
    ///
    /// Returns `None` once the end is reached (the cursor becomes `Finished`)
    /// or when no traversal was started.
    pub fn step(&mut self) -> Option<usize> {
        match self.cursor {
            CursorState::Active(next) if next < self.len() => {
                self.cursor = CursorState::Active(next + 1);
                Some(next)
            }
            CursorState::Active(_) => {
                self.cursor = CursorState::Finished;
                None
            }
            CursorState::Inactive | CursorState::Finished => None,
        }
    }

    /// Runs a full embedded traversal, calling `visit` with the container and
    /// the index of each element.
    ///
    /// `visit` may remove elements (including the current one). Returning
    /// `ControlFlow::Break` stops early and leaves the cursor where it was.
    pub fn traverse<B, F>(&mut self, mut visit: F) -> ControlFlow<B>
    where
        F: FnMut(&mut Self, usize) -> ControlFlow<B>,
    {
        self.rewind();
        while let Some(index) = self.step() {
            visit(self, index)?;
        }
        ControlFlow::Continue(())
    }

    /// Keeps only the elements for which `keep` returns `true`, preserving order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[u8]) -> bool,
    {
        let _ = self.traverse(|vec, index| {
            if !keep(vec.slot(index)) {
                vec.remove(index);
            }
            ControlFlow::<()>::Continue(())
        });
    }

    /// Creates an external cursor positioned before the first element.
    pub fn cursor_mut(&mut self) -> CursorMut<'_> {
        CursorMut {
            vec: self,
            next: 0,
            current: None,
        }
    }
}

/// External traversal that borrows a `StrideVec` mutably.
///
/// ```
/// # use stridevec::StrideVec;
/// let mut vec = StrideVec::new(4, 1).unwrap();
/// for byte in [10u8, 20, 30] {
///     vec.push_back(&[byte]).unwrap();
/// }
///
/// let mut cursor = vec.cursor_mut();
/// while let Some(value) = cursor.next() {
///     if value[0] == 20 {
///         cursor.remove_current();
///     }
/// }
/// assert_eq!(vec.as_bytes(), &[10, 30]);
/// ```
#[derive(Debug)]
pub struct CursorMut<'a> {
    vec: &'a mut StrideVec,
    next: usize,
    current: Option<usize>,
}

impl CursorMut<'_> {
    /// Moves to the next element and returns it, or `None` at the end.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&[u8]> {
        if self.next >= self.vec.len() {
            self.current = None;
            return None;
        }
        let index = self.next;
        self.current = Some(index);
        self.next += 1;
        Some(self.vec.slot(index))
    }

    /// Index of the element last returned by `next`, if it is still present.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.current
    }

    #[must_use]
    pub fn current(&self) -> Option<&[u8]> {
        self.current.map(|index| self.vec.slot(index))
    }

    pub fn current_mut(&mut self) -> Option<&mut [u8]> {
        let index = self.current?;
        Some(self.vec.slot_mut(index))
    }

    /// Removes the current element, preserving order. The next call to
    /// `next` yields the element that followed it.
    pub fn remove_current(&mut self) -> bool {
        self.remove_with(Removal::Ordered)
    }

    /// Removes the current element by moving the last element into its slot.
    /// The next call to `next` yields the moved element.
    pub fn remove_current_fast(&mut self) -> bool {
        self.remove_with(Removal::SwapLast)
    }

    fn remove_with(&mut self, removal: Removal) -> bool {
        let Some(index) = self.current.take() else {
            return false;
        };
        match removal {
            Removal::Ordered => self.vec.shift_out(index),
            Removal::SwapLast => self.vec.swap_out(index),
        }
        self.next = adjust_next(self.next, index);
        true
    }
}
