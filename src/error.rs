use thiserror::Error;

/// Error types for `StrideVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum StrideVecError {
    /// The allocator refused to grow the backing buffer
    #[error("Out of memory: failed to allocate {requested_bytes} bytes")]
    OutOfMemory {
        /// Total number of bytes the buffer would have needed
        requested_bytes: usize,
    },
    /// `capacity * elem_size` does not fit in `usize`
    #[error("Capacity overflow: {capacity} elements of {elem_size} bytes")]
    CapacityOverflow {
        /// Requested capacity in elements
        capacity: usize,
        /// Element stride in bytes
        elem_size: usize,
    },
    /// Caller bytes do not match the element stride
    #[error("Element size mismatch: expected {expected} bytes, got {provided}")]
    ElementSizeMismatch {
        /// Stride of the container
        expected: usize,
        /// Length of the slice that was provided
        provided: usize,
    },
    /// Invalid parameter passed to the builder
    #[error("Invalid configuration: {parameter} = {value}")]
    InvalidConfiguration {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Provided value
        value: usize,
    },
}
