//! Status codes shared by the list and stack containers.

use thiserror::Error;

/// Failure conditions reported by container operations.
///
/// Every operation validates its arguments and preconditions before
/// mutating anything, so a reported failure always leaves the container
/// in its prior state. Callers should check the status before trusting
/// any returned value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
  /// A node or record allocation failed.
  #[error("memory allocation failed")]
  AllocationFailure,

  /// The operation was invoked on a freed (unallocated) handle.
  #[error("container is not allocated")]
  NotAllocated,

  /// The operation requires at least one element and found none.
  #[error("container is empty")]
  Empty,

  /// The position argument is outside the valid range for the operation.
  #[error("position is out of range")]
  InvalidPosition,

  /// An argument other than a position failed validation.
  #[error("invalid argument")]
  InvalidArgument,
}

/// Result type used by every fallible container operation.
pub type Result<T> = std::result::Result<T, ListError>;
