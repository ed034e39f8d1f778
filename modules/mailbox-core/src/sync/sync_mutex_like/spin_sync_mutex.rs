use crate::sync::sync_mutex_like::SyncMutexLike;


/// Thin wrapper around [`spin::Mutex`] implementing [`SyncMutexLike`].
pub struct SpinSyncMutex<T>(spin::Mutex<T>);

impl<T> SpinSyncMutex<T> {
  /// Creates a new spinlock-protected value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(spin::Mutex::new(value))
  }

  /// Locks the mutex and returns a guard to the protected value.
  pub fn lock(&self) -> spin::MutexGuard<'_, T> {
    self.0.lock()
  }

  /// Attempts to lock the mutex without spinning.
  pub fn try_lock(&self) -> Option<spin::MutexGuard<'_, T>> {
    self.0.try_lock()
  }
}

impl<T> SyncMutexLike<T> for SpinSyncMutex<T> {
  type Guard<'a>
    = spin::MutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    SpinSyncMutex::new(value)
  }

  fn lock(&self) -> Self::Guard<'_> {
    SpinSyncMutex::lock(self)
  }

  fn try_lock(&self) -> Option<Self::Guard<'_>> {
    SpinSyncMutex::try_lock(self)
  }
}
