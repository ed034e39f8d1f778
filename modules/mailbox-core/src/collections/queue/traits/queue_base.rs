/// Advisory size information shared by every queue role.
///
/// The values are snapshots taken without locking; they may be stale by the time they are used
/// and must not drive correctness decisions under concurrency.
pub trait QueueBase<E> {
  /// Returns the number of stored elements.
  fn len(&self) -> usize;

  /// Returns the number of elements the queue can hold before it is full.
  fn capacity(&self) -> usize;

  /// Indicates whether the queue is empty.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Indicates whether the queue is full.
  fn is_full(&self) -> bool {
    self.len() >= self.capacity()
  }
}
