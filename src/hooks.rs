//! Capability hooks a `StrideVec` is configured with.
//!
//! Hooks are shared between a container and its copies through `Rc`. A
//! container is used from one thread, so hooks may capture `Rc`/`Cell` state.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// Three-way comparison over two element slots of `elem_size` bytes each.
pub type Comparator = Rc<dyn Fn(&[u8], &[u8]) -> Ordering>;

/// Computes the next capacity when an append or insert needs more room.
pub type GrowthPolicy = Rc<dyn Fn(&GrowthContext) -> usize>;

/// Per-element cleanup, called once per live element on clear, truncation and drop.
pub type Destructor = Rc<dyn Fn(&mut [u8])>;

/// Snapshot of the container handed to a growth policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthContext {
    /// Number of live elements
    pub len: usize,
    /// Allocated slots
    pub capacity: usize,
    /// Element stride in bytes
    pub elem_size: usize,
}

/// Doubles the capacity, growing an empty allocation to one slot.
#[must_use]
pub fn default_growth(context: &GrowthContext) -> usize {
    context.capacity.saturating_mul(2).max(1)
}

#[derive(Clone)]
pub(crate) struct Hooks {
    pub(crate) comparator: Option<Comparator>,
    pub(crate) growth: GrowthPolicy,
    pub(crate) destructor: Option<Destructor>,
}

impl Default for Hooks {
    fn default() -> Self {
        Self {
            comparator: None,
            growth: Rc::new(default_growth),
            destructor: None,
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("comparator", &self.comparator.is_some())
            .field("destructor", &self.destructor.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_growth_doubles() {
        let context = GrowthContext {
            len: 4,
            capacity: 4,
            elem_size: 8,
        };
        assert_eq!(default_growth(&context), 8);
    }

    #[test]
    fn test_default_growth_from_zero() {
        let context = GrowthContext {
            len: 0,
            capacity: 0,
            elem_size: 8,
        };
        assert_eq!(default_growth(&context), 1);
    }

    #[test]
    fn test_default_growth_saturates() {
        let context = GrowthContext {
            len: usize::MAX,
            capacity: usize::MAX,
            elem_size: 1,
        };
        assert_eq!(default_growth(&context), usize::MAX);
    }
}
