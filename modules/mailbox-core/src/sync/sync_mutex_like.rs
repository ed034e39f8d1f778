use core::ops::{Deref, DerefMut};

mod spin_sync_mutex;

pub use spin_sync_mutex::SpinSyncMutex;

/// Generic mutex abstraction for runtime-agnostic code.
///
/// Besides blocking acquisition the trait requires a non-blocking [`SyncMutexLike::try_lock`], which
/// the mailbox queue's steal path relies on to never wait for a busy producer.
pub trait SyncMutexLike<T> {
  /// Guard type returned by [`SyncMutexLike::lock`].
  type Guard<'a>: Deref<Target = T> + DerefMut
  where
    Self: 'a,
    T: 'a;

  /// Creates a new mutex instance wrapping the provided value.
  fn new(value: T) -> Self;

  /// Locks the mutex and returns a guard to the protected value.
  fn lock(&self) -> Self::Guard<'_>;

  /// Attempts to lock the mutex without blocking.
  ///
  /// Returns `None` when another holder currently owns the lock.
  fn try_lock(&self) -> Option<Self::Guard<'_>>;
}

/// Convenience alias for guards produced by [`SyncMutexLike`].
pub type SyncMutexLikeGuard<'a, M, T> = <M as SyncMutexLike<T>>::Guard<'a>;
