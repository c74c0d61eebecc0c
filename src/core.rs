use std::cmp::Ordering;
use std::ops::Range;

use log::{debug, trace, warn};

use crate::builder::StrideVecBuilder;
use crate::cursor::CursorState;
use crate::error::StrideVecError;
use crate::hooks::{GrowthContext, Hooks};
use crate::iter::{StrideVecIter, StrideVecRevIter};

pub const DEFAULT_CAPACITY: usize = 10;

/// Outcome of [`StrideVec::append`]
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AppendStatus {
    /// Every source element was appended
    Complete,
    /// Nothing was appended
    Failed(StrideVecError),
    /// Growth failed after `appended` elements were already copied
    Partial {
        appended: usize,
        error: StrideVecError,
    },
}

/// A growable vector of fixed-size records whose type is known only by its byte stride.
///
/// Storage is one contiguous buffer of `capacity * elem_size` bytes. The first
/// `len * elem_size` bytes are live; freshly grown slots are zero-filled.
#[derive(Debug)]
pub struct StrideVec {
    data: Vec<u8>,
    len: usize,
    capacity: usize,
    elem_size: usize,
    hooks: Hooks,
    pub(crate) cursor: CursorState,
}

impl StrideVec {
    /// Creates a container with room for `capacity` elements of `elem_size` bytes.
    ///
    /// # Errors
    ///
    /// Returns `StrideVecError::InvalidConfiguration` if `elem_size` is 0, or an
    /// allocation error if the initial buffer cannot be reserved.
    pub fn new(capacity: usize, elem_size: usize) -> Result<Self, StrideVecError> {
        Self::builder(elem_size).capacity(capacity).build()
    }

    /// Creates a container with the default capacity (10).
    ///
    /// # Errors
    ///
    /// Same as [`StrideVec::new`].
    pub fn with_default_capacity(elem_size: usize) -> Result<Self, StrideVecError> {
        Self::builder(elem_size).build()
    }

    pub fn builder(elem_size: usize) -> StrideVecBuilder {
        StrideVecBuilder::new(elem_size)
    }

    pub(crate) fn empty(elem_size: usize, hooks: Hooks) -> Self {
        Self {
            data: Vec::new(),
            len: 0,
            capacity: 0,
            elem_size,
            hooks,
            cursor: CursorState::Inactive,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn elem_size(&self) -> usize {
        self.elem_size
    }

    #[must_use]
    pub fn has_comparator(&self) -> bool {
        self.hooks.comparator.is_some()
    }

    #[must_use]
    pub fn has_destructor(&self) -> bool {
        self.hooks.destructor.is_some()
    }

    /// The live region: exactly `len * elem_size` bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len * self.elem_size]
    }

    fn span(&self, index: usize) -> Range<usize> {
        let start = index * self.elem_size;
        start..start + self.elem_size
    }

    pub(crate) fn slot(&self, index: usize) -> &[u8] {
        let span = self.span(index);
        &self.data[span]
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut [u8] {
        let span = self.span(index);
        &mut self.data[span]
    }

    fn bytes_for(&self, capacity: usize) -> Result<usize, StrideVecError> {
        capacity
            .checked_mul(self.elem_size)
            .ok_or(StrideVecError::CapacityOverflow {
                capacity,
                elem_size: self.elem_size,
            })
    }

    fn check_value(&self, value: &[u8]) -> Result<(), StrideVecError> {
        if value.len() != self.elem_size {
            return Err(StrideVecError::ElementSizeMismatch {
                expected: self.elem_size,
                provided: value.len(),
            });
        }
        Ok(())
    }

    fn destroy_range(&mut self, range: Range<usize>) {
        if let Some(destructor) = self.hooks.destructor.clone() {
            for index in range {
                destructor(self.slot_mut(index));
            }
        }
    }

    /// Gets the element at `index`.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if index >= self.len {
            return None;
        }
        Some(self.slot(index))
    }

    /// Gets the element at `index` for in-place modification.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        if index >= self.len {
            return None;
        }
        Some(self.slot_mut(index))
    }

    #[must_use]
    pub fn first(&self) -> Option<&[u8]> {
        self.get(0)
    }

    #[must_use]
    pub fn last(&self) -> Option<&[u8]> {
        self.get(self.len.checked_sub(1)?)
    }

    /// Reallocates the buffer to hold exactly `target_capacity` elements.
    ///
    /// A target of 0 is treated as 1, so the buffer always backs at least one
    /// slot. New slots are zero-filled. Shrinking below `len` truncates the
    /// live region and runs the destructor on the dropped elements.
    ///
    /// # Errors
    ///
    /// Returns `StrideVecError::CapacityOverflow` if the byte size does not fit
    /// in `usize`, or `StrideVecError::OutOfMemory` if the allocator refuses.
    /// The container is unchanged on error.
    pub fn resize(&mut self, target_capacity: usize) -> Result<(), StrideVecError> {
        let target = target_capacity.max(1);
        if target == self.capacity {
            return Ok(());
        }
        let target_bytes = self.bytes_for(target)?;

        if target_bytes > self.data.len() {
            if self
                .data
                .try_reserve_exact(target_bytes - self.data.len())
                .is_err()
            {
                debug!(
                    "allocation of {target_bytes} bytes failed, capacity stays {}",
                    self.capacity
                );
                return Err(StrideVecError::OutOfMemory {
                    requested_bytes: target_bytes,
                });
            }
            self.data.resize(target_bytes, 0);
        } else {
            if target < self.len {
                self.destroy_range(target..self.len);
                self.len = target;
            }
            self.data.truncate(target_bytes);
            self.data.shrink_to_fit();
        }

        debug!(
            "capacity {} -> {target} ({} bytes per element)",
            self.capacity, self.elem_size
        );
        self.capacity = target;
        Ok(())
    }

    /// Shrinks capacity to exactly `len` (or 1 when empty). The growth policy
    /// is not consulted.
    pub fn clamp(&mut self) {
        let target = self.len.max(1);
        if target == self.capacity {
            return;
        }
        // Shrinking never allocates, and `len` bytes are already addressable.
        self.data.truncate(target * self.elem_size);
        self.data.shrink_to_fit();
        debug!("clamped capacity {} -> {target}", self.capacity);
        self.capacity = target;
    }

    fn grow_if_full(&mut self) -> Result<(), StrideVecError> {
        if self.len < self.capacity {
            return Ok(());
        }
        let context = GrowthContext {
            len: self.len,
            capacity: self.capacity,
            elem_size: self.elem_size,
        };
        let proposed = (self.hooks.growth)(&context);
        trace!("growth policy proposed {proposed} for {context:?}");
        let target = if proposed > self.capacity {
            proposed
        } else {
            self.capacity.saturating_add(1)
        };
        self.resize(target)
    }

    /// Copies `value` into a new slot at the end, growing first if needed.
    ///
    /// An empty slice stands for "no value" and is ignored.
    ///
    /// # Errors
    ///
    /// Returns `StrideVecError::ElementSizeMismatch` if `value` is not exactly
    /// `elem_size` bytes, or the growth errors of [`StrideVec::resize`].
    pub fn push_back(&mut self, value: &[u8]) -> Result<(), StrideVecError> {
        if value.is_empty() {
            return Ok(());
        }
        self.check_value(value)?;
        self.grow_if_full()?;

        let len = self.len;
        self.slot_mut(len).copy_from_slice(value);
        self.len += 1;
        Ok(())
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// Ignored if `index > len` or `value` is empty. Inserting at or before an
    /// active embedded cursor makes the traversal revisit the element it just
    /// yielded and never yield the inserted one.
    ///
    /// # Errors
    ///
    /// Same as [`StrideVec::push_back`].
    pub fn insert(&mut self, index: usize, value: &[u8]) -> Result<(), StrideVecError> {
        if value.is_empty() || index > self.len {
            return Ok(());
        }
        self.check_value(value)?;
        self.grow_if_full()?;

        let size = self.elem_size;
        self.data
            .copy_within(index * size..self.len * size, (index + 1) * size);
        self.slot_mut(index).copy_from_slice(value);
        self.len += 1;
        Ok(())
    }

    pub(crate) fn shift_out(&mut self, index: usize) {
        let size = self.elem_size;
        self.data
            .copy_within((index + 1) * size..self.len * size, index * size);
        self.len -= 1;
    }

    pub(crate) fn swap_out(&mut self, index: usize) {
        let last = self.len - 1;
        if index != last {
            let span = self.span(last);
            self.data.copy_within(span, index * self.elem_size);
        }
        self.len -= 1;
    }

    /// Removes the element at `index`, preserving the order of the rest.
    ///
    /// Returns `false` (and changes nothing) if `index >= len`.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.shift_out(index);
        self.cursor = self.cursor.after_remove(index);
        true
    }

    /// Removes the element at `index` in O(1) by moving the last element into
    /// its slot. Order is not preserved.
    ///
    /// An active embedded cursor is adjusted as for [`StrideVec::remove`]. When
    /// `index` is before the element just visited, the traversal yields that
    /// element again and skips the moved last element.
    ///
    /// Returns `false` (and changes nothing) if `index >= len`.
    pub fn remove_fast(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.swap_out(index);
        self.cursor = self.cursor.after_remove(index);
        true
    }

    /// Removes and returns the last element.
    ///
    /// Returns `None` if the vector is empty.
    pub fn pop_back(&mut self) -> Option<Vec<u8>> {
        let last = self.len.checked_sub(1)?;
        let value = self.slot(last).to_vec();
        self.shift_out(last);
        self.cursor = self.cursor.after_remove(last);
        Some(value)
    }

    /// Removes and returns the first element. Costs an O(len) shift.
    ///
    /// Returns `None` if the vector is empty.
    pub fn pop_front(&mut self) -> Option<Vec<u8>> {
        let value = self.first()?.to_vec();
        self.remove(0);
        Some(value)
    }

    /// Removes every element, keeping the allocation.
    ///
    /// The destructor, if any, runs once per live element through the embedded
    /// cursor, which is left `Finished`. The whole buffer is then zero-filled.
    pub fn clear(&mut self) {
        if let Some(destructor) = self.hooks.destructor.clone() {
            self.rewind();
            while let Some(index) = self.step() {
                destructor(self.slot_mut(index));
            }
        }
        self.data.fill(0);
        self.len = 0;
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let size = self.elem_size;
        let (head, tail) = self.data.split_at_mut(high * size);
        head[low * size..(low + 1) * size].swap_with_slice(&mut tail[..size]);
    }

    /// Exchanges two elements. Returns `false` if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a >= self.len || b >= self.len {
            return false;
        }
        if a != b {
            self.swap_slots(a, b);
        }
        true
    }

    /// Reverses the order of the live elements. Bytes inside an element and
    /// the unused tail are left alone.
    pub fn reverse(&mut self) {
        let len = self.len;
        for index in 0..len / 2 {
            self.swap_slots(index, len - 1 - index);
        }
    }

    /// Index of the first element equal to `value` under the configured comparator.
    ///
    /// Without a comparator this logs a warning and returns `None`.
    #[must_use]
    pub fn position(&self, value: &[u8]) -> Option<usize> {
        let Some(comparator) = self.hooks.comparator.as_ref() else {
            warn!("find: no comparator configured, nothing can match");
            return None;
        };
        if value.len() != self.elem_size {
            return None;
        }
        (0..self.len).find(|&index| comparator(self.slot(index), value) == Ordering::Equal)
    }

    /// First element equal to `value` under the configured comparator.
    ///
    /// Without a comparator this logs a warning and returns `None`.
    #[must_use]
    pub fn find(&self, value: &[u8]) -> Option<&[u8]> {
        self.position(value).map(|index| self.slot(index))
    }

    #[must_use]
    pub fn contains(&self, value: &[u8]) -> bool {
        self.position(value).is_some()
    }

    /// Sorts the live elements with the configured comparator. Not stable.
    ///
    /// Without a comparator this logs a warning and leaves the order unchanged.
    pub fn sort(&mut self) {
        let Some(comparator) = self.hooks.comparator.clone() else {
            warn!("sort: no comparator configured, order left unchanged");
            return;
        };
        self.sort_by(|a, b| comparator(a, b));
    }

    /// Sorts the live elements with an explicit comparator. Not stable.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        if self.len < 2 {
            return;
        }
        let mut order: Vec<usize> = (0..self.len).collect();
        order.sort_unstable_by(|&a, &b| compare(self.slot(a), self.slot(b)));

        let live = self.len * self.elem_size;
        let mut sorted = Vec::with_capacity(live);
        for index in order {
            sorted.extend_from_slice(self.slot(index));
        }
        self.data[..live].copy_from_slice(&sorted);
    }

    /// Duplicates the container: same capacity, stride and hooks, byte-for-byte
    /// copy of the whole buffer. Elements holding pointers or handles are
    /// copied as raw bits only. The copy's cursor starts inactive.
    ///
    /// # Errors
    ///
    /// Returns `StrideVecError::OutOfMemory` if the new buffer cannot be reserved.
    pub fn try_clone(&self) -> Result<Self, StrideVecError> {
        let mut data = Vec::new();
        data.try_reserve_exact(self.data.len())
            .map_err(|_| StrideVecError::OutOfMemory {
                requested_bytes: self.data.len(),
            })?;
        data.extend_from_slice(&self.data);

        Ok(Self {
            data,
            len: self.len,
            capacity: self.capacity,
            elem_size: self.elem_size,
            hooks: self.hooks.clone(),
            cursor: CursorState::Inactive,
        })
    }

    /// Copies every live element of `source` onto the end of `self`, in order.
    #[must_use]
    pub fn append(&mut self, source: &StrideVec) -> AppendStatus {
        if source.elem_size != self.elem_size {
            return AppendStatus::Failed(StrideVecError::ElementSizeMismatch {
                expected: self.elem_size,
                provided: source.elem_size,
            });
        }
        for (appended, value) in source.iter().enumerate() {
            if let Err(error) = self.push_back(value) {
                return if appended == 0 {
                    AppendStatus::Failed(error)
                } else {
                    AppendStatus::Partial { appended, error }
                };
            }
        }
        AppendStatus::Complete
    }

    /// Exports the live elements into a new buffer of exactly `len * elem_size`
    /// bytes owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns `StrideVecError::OutOfMemory` if the buffer cannot be reserved.
    pub fn to_vec(&self) -> Result<Vec<u8>, StrideVecError> {
        let live = self.as_bytes();
        let mut out = Vec::new();
        out.try_reserve_exact(live.len())
            .map_err(|_| StrideVecError::OutOfMemory {
                requested_bytes: live.len(),
            })?;
        out.extend_from_slice(live);
        Ok(out)
    }

    /// Consumes the container and hands its live bytes to the caller.
    ///
    /// The destructor is not run: ownership of the elements moves with the bytes.
    #[must_use]
    pub fn into_bytes(mut self) -> Vec<u8> {
        let mut data = std::mem::take(&mut self.data);
        data.truncate(self.len * self.elem_size);
        self.len = 0;
        data
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> StrideVecIter<'_> {
        self.into_iter()
    }

    /// Returns an iterator over the elements, last to first.
    #[must_use]
    pub fn iter_rev(&self) -> StrideVecRevIter<'_> {
        StrideVecRevIter::new(self)
    }
}

impl Drop for StrideVec {
    fn drop(&mut self) {
        self.destroy_range(0..self.len);
    }
}
