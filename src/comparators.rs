//! Ready-made comparators for the common primitive element types.
//!
//! Each function has the comparator shape `fn(&[u8], &[u8]) -> Ordering` and
//! can be handed straight to [`StrideVecBuilder::comparator`](crate::StrideVecBuilder::comparator).
//! Slots are decoded with the [`Element`] encoding.

use std::cmp::Ordering;

use crate::element::Element;

/// Compares two slots holding a `T`.
#[must_use]
pub fn cmp_element<T: Element + Ord>(a: &[u8], b: &[u8]) -> Ordering {
    T::from_bytes(a).cmp(&T::from_bytes(b))
}

/// One-byte characters, ordered as unsigned bytes.
#[must_use]
pub fn cmp_char(a: &[u8], b: &[u8]) -> Ordering {
    cmp_element::<u8>(a, b)
}

/// 32-bit signed integers.
#[must_use]
pub fn cmp_int(a: &[u8], b: &[u8]) -> Ordering {
    cmp_element::<i32>(a, b)
}

/// 32-bit unsigned integers.
#[must_use]
pub fn cmp_uint(a: &[u8], b: &[u8]) -> Ordering {
    cmp_element::<u32>(a, b)
}

/// 64-bit signed integers.
#[must_use]
pub fn cmp_long(a: &[u8], b: &[u8]) -> Ordering {
    cmp_element::<i64>(a, b)
}

/// 64-bit unsigned integers.
#[must_use]
pub fn cmp_ulong(a: &[u8], b: &[u8]) -> Ordering {
    cmp_element::<u64>(a, b)
}
