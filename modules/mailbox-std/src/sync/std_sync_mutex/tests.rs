use std::{panic, thread};

use super::*;

#[test]
fn try_lock_returns_none_while_held() {
  let mutex = StdSyncMutex::new(());
  let guard = mutex.lock();
  assert!(mutex.try_lock().is_none());
  drop(guard);
  assert!(mutex.try_lock().is_some());
}

#[test]
fn poisoned_mutex_stays_usable() {
  let mutex = StdSyncMutex::new(5_u32);
  thread::scope(|scope| {
    let handle = scope.spawn(|| {
      let _guard = mutex.lock();
      panic::panic_any("poison the lock");
    });
    assert!(handle.join().is_err());
  });

  *mutex.lock() += 1;
  assert_eq!(mutex.try_lock().map(|guard| *guard), Some(6));
}

#[test]
fn trait_methods_delegate_to_inherent_ones() {
  let mutex = <StdSyncMutex<Vec<u8>> as SyncMutexLike<Vec<u8>>>::new(Vec::new());
  SyncMutexLike::lock(&mutex).push(1);
  assert_eq!(SyncMutexLike::try_lock(&mutex).map(|guard| guard.clone()), Some(vec![1]));
}
