use std::fmt;

use cellex_mailbox_core_rs::{
  ArcShared, EnqueueOutcome, MailboxQueue, MailboxQueueConfig, PeekGuard, QueueBase, QueueError, QueueReader,
  QueueStealer, QueueWriter, DEFAULT_CAPACITY,
};

use crate::sync::StdSyncMutex;

#[cfg(test)]
mod tests;

/// Mailbox queue whose read and write locks are [`StdSyncMutex`] instances.
pub type StdMailboxQueue<E> = MailboxQueue<E, StdSyncMutex<()>>;

/// Shared handle to a [`StdMailboxQueue`].
///
/// Clones refer to the same queue, so producers, the consumer and a stealer running on different
/// threads can each hold their own handle.
pub struct ArcMailboxQueue<E> {
  inner: ArcShared<StdMailboxQueue<E>>,
}

impl<E> ArcMailboxQueue<E> {
  /// Creates a resizable queue that holds `capacity` elements before it grows.
  #[must_use]
  pub fn new(capacity: usize) -> Self {
    Self::with_config(MailboxQueueConfig::new(capacity, true))
  }

  /// Creates a queue from the provided configuration.
  #[must_use]
  pub fn with_config(config: MailboxQueueConfig) -> Self {
    Self { inner: ArcShared::new(MailboxQueue::with_config(config)) }
  }

  /// Adds an element to the tail of the queue.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] with the element when the queue is full and not resizable.
  pub fn enqueue(&self, element: E) -> Result<EnqueueOutcome, QueueError<E>> {
    self.inner.enqueue(element)
  }

  /// Removes the element at the head of the queue.
  pub fn dequeue(&self) -> Option<E> {
    self.inner.dequeue()
  }

  /// Borrows the head element; the read lock is held until the guard is dropped.
  pub fn peek(&self) -> Option<PeekGuard<'_, E, StdSyncMutex<()>>> {
    self.inner.peek()
  }

  /// Runs `f` against the head element without removing it.
  pub fn peek_with<R>(&self, f: impl FnOnce(&E) -> R) -> Option<R> {
    self.inner.peek_with(f)
  }

  /// Removes the most recently enqueued element without blocking.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::WouldBlock`] when a producer holds the write lock.
  pub fn steal(&self) -> Result<Option<E>, QueueError<E>> {
    self.inner.steal()
  }

  /// Drops every pending element and returns how many were released.
  pub fn clear(&self) -> usize {
    self.inner.clear()
  }

  /// Reports emptiness while holding both locks.
  pub fn mark_empty(&self) -> bool {
    self.inner.mark_empty()
  }

  /// Returns the number of stored elements (advisory).
  #[must_use]
  pub fn len(&self) -> usize {
    self.inner.len()
  }

  /// Returns the number of elements the queue holds before it is full (advisory).
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.inner.capacity()
  }

  /// Indicates whether the queue is empty (advisory).
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  /// Indicates whether the queue is full (advisory).
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.inner.is_full()
  }

  /// Whether the queue grows instead of rejecting elements when full.
  #[must_use]
  pub fn is_resizable(&self) -> bool {
    self.inner.is_resizable()
  }
}

impl<E> Clone for ArcMailboxQueue<E> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<E> Default for ArcMailboxQueue<E> {
  fn default() -> Self {
    Self::new(DEFAULT_CAPACITY)
  }
}

impl<E> fmt::Debug for ArcMailboxQueue<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ArcMailboxQueue").field("len", &self.len()).field("capacity", &self.capacity()).finish()
  }
}

impl<E> QueueBase<E> for ArcMailboxQueue<E> {
  fn len(&self) -> usize {
    ArcMailboxQueue::len(self)
  }

  fn capacity(&self) -> usize {
    ArcMailboxQueue::capacity(self)
  }

  fn is_empty(&self) -> bool {
    ArcMailboxQueue::is_empty(self)
  }

  fn is_full(&self) -> bool {
    ArcMailboxQueue::is_full(self)
  }
}

impl<E> QueueWriter<E> for ArcMailboxQueue<E> {
  fn enqueue(&self, element: E) -> Result<EnqueueOutcome, QueueError<E>> {
    ArcMailboxQueue::enqueue(self, element)
  }
}

impl<E> QueueReader<E> for ArcMailboxQueue<E> {
  fn dequeue(&self) -> Option<E> {
    ArcMailboxQueue::dequeue(self)
  }

  fn peek_with<R>(&self, f: impl FnOnce(&E) -> R) -> Option<R> {
    ArcMailboxQueue::peek_with(self, f)
  }

  fn clear(&self) -> usize {
    ArcMailboxQueue::clear(self)
  }

  fn mark_empty(&self) -> bool {
    ArcMailboxQueue::mark_empty(self)
  }
}

impl<E> QueueStealer<E> for ArcMailboxQueue<E> {
  fn steal(&self) -> Result<Option<E>, QueueError<E>> {
    ArcMailboxQueue::steal(self)
  }
}
