use crate::collections::queue::{EnqueueOutcome, QueueBase, QueueError};

/// Producer-side operations.
pub trait QueueWriter<E>: QueueBase<E> {
  /// Adds an element to the tail of the queue.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] with the element when the queue is full and cannot grow.
  fn enqueue(&self, element: E) -> Result<EnqueueOutcome, QueueError<E>>;
}
