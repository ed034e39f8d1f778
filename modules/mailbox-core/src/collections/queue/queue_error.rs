#[cfg(test)]
mod tests;

/// Errors that may arise while operating on a mailbox queue.
///
/// An empty queue is not an error; it is reported as `None` by the reading operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueueError<E> {
  /// The queue is full and cannot grow. The rejected element is handed back to the caller.
  #[error("mailbox queue is full")]
  Full(E),
  /// The write lock is held by a producer and the operation refused to wait for it.
  #[error("mailbox queue is busy; retry later")]
  WouldBlock,
}

impl<E> QueueError<E> {
  /// Returns the element carried by the error, if any.
  pub fn into_inner(self) -> Option<E> {
    match self {
      | QueueError::Full(element) => Some(element),
      | QueueError::WouldBlock => None,
    }
  }

  /// Indicates whether the error was caused by a full queue.
  #[must_use]
  pub const fn is_full(&self) -> bool {
    matches!(self, QueueError::Full(_))
  }
}
