use std::iter::Rev;
use std::slice::ChunksExact;

use crate::core::StrideVec;

/// Iterator over elements in a `StrideVec`
///
/// This iterator implements `Clone`.
#[derive(Clone, Debug)]
pub struct StrideVecIter<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl<'a> Iterator for StrideVecIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl DoubleEndedIterator for StrideVecIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.chunks.next_back()
    }
}

impl ExactSizeIterator for StrideVecIter<'_> {}

impl<'a> IntoIterator for &'a StrideVec {
    type Item = &'a [u8];
    type IntoIter = StrideVecIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        StrideVecIter {
            chunks: self.as_bytes().chunks_exact(self.elem_size()),
        }
    }
}

/// Reverse iterator over elements in a `StrideVec`
///
/// This iterator implements `Clone`.
#[derive(Clone, Debug)]
pub struct StrideVecRevIter<'a> {
    chunks: Rev<ChunksExact<'a, u8>>,
}

impl<'a> StrideVecRevIter<'a> {
    pub(crate) fn new(vec: &'a StrideVec) -> Self {
        Self {
            chunks: vec.as_bytes().chunks_exact(vec.elem_size()).rev(),
        }
    }
}

impl<'a> Iterator for StrideVecRevIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for StrideVecRevIter<'_> {}
