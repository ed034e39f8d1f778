use crate::collections::queue::{QueueBase, QueueError};

/// Opportunistic retraction of the most recently enqueued element.
pub trait QueueStealer<E>: QueueBase<E> {
  /// Removes the element at the tail of the queue without blocking.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::WouldBlock`] when a producer currently holds the write side.
  fn steal(&self) -> Result<Option<E>, QueueError<E>>;
}
