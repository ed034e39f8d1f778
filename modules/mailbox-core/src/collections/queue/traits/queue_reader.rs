use crate::collections::queue::QueueBase;

/// Consumer-side operations.
pub trait QueueReader<E>: QueueBase<E> {
  /// Removes the element at the head of the queue.
  fn dequeue(&self) -> Option<E>;

  /// Runs `f` against the head element without removing it.
  fn peek_with<R>(&self, f: impl FnOnce(&E) -> R) -> Option<R>;

  /// Drops every pending element and returns how many were released.
  fn clear(&self) -> usize;

  /// Reports emptiness while holding both locks.
  fn mark_empty(&self) -> bool;
}
