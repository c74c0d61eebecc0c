//! `StrideVec`: a growable vector of fixed-size records known only by their byte stride.
//!
//! `StrideVec` gives any fixed-size record dynamic-array semantics: contiguous
//! storage, amortized O(1) append, ordered and unordered removal, insertion,
//! search, sort and a traversal cursor that survives removals. The container
//! never learns the element type; it copies `elem_size` bytes in and hands
//! byte slices out. [`TypedVec`] layers a typed API on top for types that
//! implement [`Element`].
//!
//! Buffer layout: `capacity * elem_size` bytes, the first `len * elem_size`
//! of which are live. Newly grown slots are zero-filled.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push_back()`: amortized O(1) with the default doubling growth
//! - `get()`, `swap()`, `remove_fast()`, `pop_back()`: O(1)
//! - `insert()`, `remove()`, `pop_front()`: O(len) - shifts the tail
//! - `find()`: O(len) - linear scan with the comparator
//! - `sort()`: O(len log len) - not stable
//! - `clear()`: O(capacity) - zero-fills the buffer, keeps the allocation
//!
//! ## Memory
//! - One allocation of `capacity * elem_size` bytes; a capacity of 0 still
//!   backs one slot
//! - `clamp()` shrinks the allocation to exactly `len` slots
//! - Any slice obtained from the container is invalidated by the next
//!   mutating call (the borrow checker enforces this)
//!
//! # Hooks
//!
//! Three optional capabilities are set through [`StrideVecBuilder`]:
//! a three-way comparator used by `find` and `sort`, a growth policy deciding
//! the next capacity, and a destructor run once per live element on `clear`,
//! truncation and drop.
//!
//! ```
//! # use stridevec::{comparators, StrideVec};
//! let mut vec = StrideVec::builder(4)
//!     .capacity(2)
//!     .comparator(comparators::cmp_int)
//!     .growth_policy(|ctx| ctx.capacity + 8)
//!     .build()
//!     .unwrap();
//!
//! for value in [3i32, 1, 2] {
//!     vec.push_back(&value.to_le_bytes()).unwrap();
//! }
//! assert_eq!(vec.capacity(), 10);
//!
//! vec.sort();
//! assert_eq!(vec.first(), Some(&1i32.to_le_bytes()[..]));
//! assert!(vec.find(&2i32.to_le_bytes()).is_some());
//! assert!(vec.find(&5i32.to_le_bytes()).is_none());
//! ```
//!
//! # Removal-aware Traversal
//!
//! The container embeds one cursor. Elements may be removed while it walks,
//! including the one being visited, without skipping or revisiting anything:
//!
//! ```
//! # use stridevec::StrideVec;
//! let mut vec = StrideVec::new(5, 1).unwrap();
//! for byte in 0..5u8 {
//!     vec.push_back(&[byte]).unwrap();
//! }
//!
//! let mut visited = Vec::new();
//! vec.rewind();
//! while let Some(index) = vec.step() {
//!     visited.push(vec.get(index).unwrap()[0]);
//!     vec.remove(index);
//! }
//! assert_eq!(visited, vec![0, 1, 2, 3, 4]);
//! assert!(vec.is_empty());
//! ```
//!
//! [`CursorMut`] is the external form: it borrows the container and keeps
//! its own position, leaving the embedded cursor alone.
//!
//! # Typed Access
//!
//! ```
//! # use stridevec::TypedVec;
//! let mut vec = TypedVec::<i32>::ordered().unwrap();
//! for value in 0..=10 {
//!     vec.push(&value).unwrap();
//! }
//! vec.insert(5, &100).unwrap();
//! assert_eq!(vec.to_vec(), vec![0, 1, 2, 3, 4, 100, 5, 6, 7, 8, 9, 10]);
//! assert_eq!(vec.find(&100), Some(100));
//! ```
//!
//! # Errors
//!
//! Allocation failure and capacity overflow are returned as
//! [`StrideVecError`] and leave the container unchanged. Out-of-range
//! indices are ignored and reported through `bool`/`Option` return values.
//! Calling `find` or `sort` without a comparator logs a warning through the
//! `log` facade and does nothing.

mod builder;
pub mod comparators;
mod core;
mod cursor;
mod element;
mod error;
mod hooks;
mod iter;
mod typed;

// Re-export public types and traits
pub use crate::builder::StrideVecBuilder;
pub use crate::core::{AppendStatus, StrideVec, DEFAULT_CAPACITY};
pub use crate::cursor::{CursorMut, CursorState};
pub use crate::element::Element;
pub use crate::error::StrideVecError;
pub use crate::hooks::{default_growth, Comparator, Destructor, GrowthContext, GrowthPolicy};
pub use crate::iter::{StrideVecIter, StrideVecRevIter};
pub use crate::typed::TypedVec;
