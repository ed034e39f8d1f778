use core::{fmt, ops::Deref};

use crate::sync::{SyncMutexLike, SyncMutexLikeGuard};

/// Borrowed view of the head element of a [`MailboxQueue`](super::MailboxQueue).
///
/// The guard keeps the queue's read lock held, so the element cannot be dequeued, stolen,
/// cleared or moved by growth while the view exists. Producers that do not need to grow keep
/// running. Drop the guard before calling any consumer-side operation on the same thread.
pub struct PeekGuard<'a, E, M>
where
  M: SyncMutexLike<()> + 'a, {
  _read:   SyncMutexLikeGuard<'a, M, ()>,
  element: &'a E,
}

impl<'a, E, M> PeekGuard<'a, E, M>
where
  M: SyncMutexLike<()> + 'a,
{
  pub(crate) fn new(read: SyncMutexLikeGuard<'a, M, ()>, element: &'a E) -> Self {
    Self { _read: read, element }
  }
}

impl<'a, E, M> Deref for PeekGuard<'a, E, M>
where
  M: SyncMutexLike<()> + 'a,
{
  type Target = E;

  fn deref(&self) -> &Self::Target {
    self.element
  }
}

impl<'a, E, M> fmt::Debug for PeekGuard<'a, E, M>
where
  E: fmt::Debug,
  M: SyncMutexLike<()> + 'a,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("PeekGuard").field(self.element).finish()
  }
}
