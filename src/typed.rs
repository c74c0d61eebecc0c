use std::marker::PhantomData;

use crate::comparators::cmp_element;
use crate::core::{AppendStatus, StrideVec, DEFAULT_CAPACITY};
use crate::element::Element;
use crate::error::StrideVecError;
use crate::iter::StrideVecIter;

/// Typed view over a `StrideVec` whose stride is `T::SIZE`.
///
/// Values are encoded on the way in and decoded on the way out; the
/// underlying container, its hooks and its cursor stay reachable through
/// [`TypedVec::as_inner`] and [`TypedVec::as_inner_mut`].
#[derive(Debug)]
pub struct TypedVec<T: Element> {
    inner: StrideVec,
    _marker: PhantomData<T>,
}

impl<T: Element> TypedVec<T> {
    /// # Errors
    ///
    /// Returns an allocation error if the initial buffer cannot be reserved.
    pub fn new() -> Result<Self, StrideVecError> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// # Errors
    ///
    /// Returns an allocation error if the initial buffer cannot be reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self, StrideVecError> {
        Self::from_inner(StrideVec::new(capacity, T::SIZE)?)
    }

    /// Wraps an existing container, e.g. one built with custom hooks.
    ///
    /// # Errors
    ///
    /// Returns `StrideVecError::ElementSizeMismatch` if the stride is not `T::SIZE`.
    pub fn from_inner(inner: StrideVec) -> Result<Self, StrideVecError> {
        if inner.elem_size() != T::SIZE {
            return Err(StrideVecError::ElementSizeMismatch {
                expected: T::SIZE,
                provided: inner.elem_size(),
            });
        }
        Ok(Self {
            inner,
            _marker: PhantomData,
        })
    }

    #[must_use]
    pub fn as_inner(&self) -> &StrideVec {
        &self.inner
    }

    pub fn as_inner_mut(&mut self) -> &mut StrideVec {
        &mut self.inner
    }

    #[must_use]
    pub fn into_inner(self) -> StrideVec {
        self.inner
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// # Errors
    ///
    /// Returns the growth errors of [`StrideVec::push_back`].
    pub fn push(&mut self, value: &T) -> Result<(), StrideVecError> {
        self.inner.push_back(&value.to_bytes())
    }

    /// # Errors
    ///
    /// Returns the growth errors of [`StrideVec::insert`].
    pub fn insert(&mut self, index: usize, value: &T) -> Result<(), StrideVecError> {
        self.inner.insert(index, &value.to_bytes())
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.inner.get(index).map(T::from_bytes)
    }

    /// Overwrites the element at `index`. Returns `false` if out of bounds.
    pub fn set(&mut self, index: usize, value: &T) -> bool {
        match self.inner.get_mut(index) {
            Some(slot) => {
                slot.copy_from_slice(&value.to_bytes());
                true
            }
            None => false,
        }
    }

    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop_back().map(|bytes| T::from_bytes(&bytes))
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.inner.pop_front().map(|bytes| T::from_bytes(&bytes))
    }

    pub fn remove(&mut self, index: usize) -> bool {
        self.inner.remove(index)
    }

    pub fn remove_fast(&mut self, index: usize) -> bool {
        self.inner.remove_fast(index)
    }

    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        self.inner.swap(a, b)
    }

    pub fn reverse(&mut self) {
        self.inner.reverse();
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.inner.retain(|bytes| keep(&T::from_bytes(bytes)));
    }

    #[must_use]
    pub fn append(&mut self, source: &TypedVec<T>) -> AppendStatus {
        self.inner.append(&source.inner)
    }

    /// Copies the container, hooks included.
    ///
    /// # Errors
    ///
    /// Returns `StrideVecError::OutOfMemory` if the copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, StrideVecError> {
        Self::from_inner(self.inner.try_clone()?)
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        TypedIter {
            inner: self.inner.iter(),
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Finds with the container's comparator; see [`StrideVec::find`].
    #[must_use]
    pub fn find(&self, value: &T) -> Option<T> {
        self.inner.find(&value.to_bytes()).map(T::from_bytes)
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.inner.contains(&value.to_bytes())
    }

    /// Sorts with the container's comparator; see [`StrideVec::sort`].
    pub fn sort(&mut self) {
        self.inner.sort();
    }
}

impl<T: Element + Ord> TypedVec<T> {
    /// A vector whose comparator is `T`'s natural order, so `find` and `sort`
    /// work without further configuration.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the initial buffer cannot be reserved.
    pub fn ordered() -> Result<Self, StrideVecError> {
        let inner = StrideVec::builder(T::SIZE)
            .comparator(cmp_element::<T>)
            .build()?;
        Self::from_inner(inner)
    }
}

struct TypedIter<'a, T> {
    inner: StrideVecIter<'a>,
    _marker: PhantomData<T>,
}

impl<T: Element> Iterator for TypedIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(T::from_bytes)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
