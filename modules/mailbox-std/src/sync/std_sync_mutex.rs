//! Wrapper around `std::sync::Mutex` implementing the core `SyncMutexLike` trait.

use std::sync::TryLockError;

use cellex_mailbox_core_rs::SyncMutexLike;

#[cfg(test)]
mod tests;

/// Thin wrapper over [`std::sync::Mutex`] for synchronous std environments.
///
/// Poisoning is ignored: a panic while a guard was held leaves the protected value usable.
pub struct StdSyncMutex<T>(std::sync::Mutex<T>);

impl<T> StdSyncMutex<T> {
  /// Creates a new mutex guarding the provided value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(std::sync::Mutex::new(value))
  }

  /// Locks the mutex and returns the guard.
  pub fn lock(&self) -> StdMutexGuard<'_, T> {
    self.0.lock().unwrap_or_else(|err| err.into_inner())
  }

  /// Attempts to lock the mutex without blocking.
  pub fn try_lock(&self) -> Option<StdMutexGuard<'_, T>> {
    match self.0.try_lock() {
      | Ok(guard) => Some(guard),
      | Err(TryLockError::Poisoned(err)) => Some(err.into_inner()),
      | Err(TryLockError::WouldBlock) => None,
    }
  }
}

impl<T> SyncMutexLike<T> for StdSyncMutex<T> {
  type Guard<'a>
    = StdMutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    StdSyncMutex::new(value)
  }

  fn lock(&self) -> Self::Guard<'_> {
    StdSyncMutex::lock(self)
  }

  fn try_lock(&self) -> Option<Self::Guard<'_>> {
    StdSyncMutex::try_lock(self)
  }
}

/// Convenience alias for guards produced by [`StdSyncMutex`].
pub type StdMutexGuard<'a, T> = std::sync::MutexGuard<'a, T>;
