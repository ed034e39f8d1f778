/// Result of a successful enqueue.
///
/// Schedulers use [`EnqueueOutcome::WasEmpty`] as the signal that the consumer has to be
/// (re)activated: only the producer that turns an empty mailbox into a non-empty one wakes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnqueueOutcome {
  /// The queue held no element before this one was stored.
  WasEmpty,
  /// The element was appended behind elements that were already pending.
  Appended,
}

impl EnqueueOutcome {
  pub(crate) const fn from_was_empty(was_empty: bool) -> Self {
    if was_empty {
      EnqueueOutcome::WasEmpty
    } else {
      EnqueueOutcome::Appended
    }
  }

  /// Indicates whether the queue was empty before the element was stored.
  #[must_use]
  pub const fn was_empty(self) -> bool {
    matches!(self, EnqueueOutcome::WasEmpty)
  }
}
