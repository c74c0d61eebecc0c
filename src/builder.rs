use std::cmp::Ordering;
use std::rc::Rc;

use crate::core::{StrideVec, DEFAULT_CAPACITY};
use crate::error::StrideVecError;
use crate::hooks::{GrowthContext, Hooks};

/// Construction options for a `StrideVec`.
///
/// Every option except the element size has a default: a capacity of
/// `DEFAULT_CAPACITY`, doubling growth, no comparator and no destructor.
///
/// ```
/// # use stridevec::{comparators, StrideVec};
/// let vec = StrideVec::builder(4)
///     .capacity(32)
///     .comparator(comparators::cmp_int)
///     .build()
///     .unwrap();
/// assert_eq!(vec.capacity(), 32);
/// assert!(vec.has_comparator());
/// ```
#[derive(Debug)]
#[must_use]
pub struct StrideVecBuilder {
    elem_size: usize,
    capacity: usize,
    hooks: Hooks,
}

impl StrideVecBuilder {
    pub(crate) fn new(elem_size: usize) -> Self {
        Self {
            elem_size,
            capacity: DEFAULT_CAPACITY,
            hooks: Hooks::default(),
        }
    }

    /// Initial number of slots. Zero is allocated as one slot.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn comparator<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&[u8], &[u8]) -> Ordering + 'static,
    {
        self.hooks.comparator = Some(Rc::new(comparator));
        self
    }

    pub fn growth_policy<F>(mut self, growth: F) -> Self
    where
        F: Fn(&GrowthContext) -> usize + 'static,
    {
        self.hooks.growth = Rc::new(growth);
        self
    }

    pub fn destructor<F>(mut self, destructor: F) -> Self
    where
        F: Fn(&mut [u8]) + 'static,
    {
        self.hooks.destructor = Some(Rc::new(destructor));
        self
    }

    /// Allocates the container.
    ///
    /// # Errors
    ///
    /// Returns `StrideVecError::InvalidConfiguration` if the element size is 0,
    /// and the allocation errors of [`StrideVec::resize`] otherwise.
    pub fn build(self) -> Result<StrideVec, StrideVecError> {
        if self.elem_size == 0 {
            return Err(StrideVecError::InvalidConfiguration {
                parameter: "elem_size",
                value: self.elem_size,
            });
        }
        let mut vec = StrideVec::empty(self.elem_size, self.hooks);
        vec.resize(self.capacity)?;
        Ok(vec)
    }
}
