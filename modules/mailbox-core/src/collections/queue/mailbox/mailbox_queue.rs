use core::{cell::UnsafeCell, fmt};

use portable_atomic::{AtomicUsize, Ordering};

use super::{
  enqueue_outcome::EnqueueOutcome, mailbox_queue_config::MailboxQueueConfig, peek_guard::PeekGuard,
  slot_array::SlotArray,
};
use crate::{
  collections::queue::{QueueBase, QueueError, QueueReader, QueueStealer, QueueWriter},
  sync::{SpinSyncMutex, SyncMutexLike},
};


/// Growable ring buffer used as an actor mailbox.
///
/// Any number of producers call [`MailboxQueue::enqueue`]; a single logical consumer calls
/// [`MailboxQueue::dequeue`], [`MailboxQueue::peek`] and [`MailboxQueue::clear`]; a stealer may
/// retract the most recently enqueued element with [`MailboxQueue::steal`].
///
/// Two locks coordinate the roles. The write lock serialises producers and growth, the read lock
/// serialises consumer-side operations. Whenever both are needed they are taken in the order
/// write, then read. Enqueue and dequeue therefore do not contend with each other unless the
/// queue has to grow.
///
/// One slot of the backing array always stays free so that a full queue can be told apart from an
/// empty one; a queue created with capacity `k` allocates `k + 1` slots.
pub struct MailboxQueue<E, M = SpinSyncMutex<()>>
where
  M: SyncMutexLike<()>, {
  write_lock: M,
  read_lock:  M,
  // Read only while at least one lock is held; replaced only while both are held.
  slots:      UnsafeCell<SlotArray<E>>,
  // Mirrors of the cursor pair and slot count. Written under the locks, read lock-free by the
  // advisory accessors.
  write_idx:  AtomicUsize,
  read_idx:   AtomicUsize,
  slot_count: AtomicUsize,
  resizable:  bool,
}

// SAFETY: every access to `slots` happens while holding `read_lock` or `write_lock`, and the array
// is only replaced while holding both, so sharing the queue never yields unsynchronised access to
// an element. Elements move between threads, hence `E: Send`.
unsafe impl<E: Send, M: SyncMutexLike<()> + Sync> Sync for MailboxQueue<E, M> {}

impl<E, M> MailboxQueue<E, M>
where
  M: SyncMutexLike<()>,
{
  /// Creates a resizable queue that holds `capacity` elements before it grows.
  #[must_use]
  pub fn new(capacity: usize) -> Self {
    Self::with_config(MailboxQueueConfig::new(capacity, true))
  }

  /// Creates a queue from the provided configuration.
  #[must_use]
  pub fn with_config(config: MailboxQueueConfig) -> Self {
    let slot_count = config.slot_count();
    Self {
      write_lock: M::new(()),
      read_lock:  M::new(()),
      slots:      UnsafeCell::new(SlotArray::with_len(slot_count)),
      write_idx:  AtomicUsize::new(0),
      read_idx:   AtomicUsize::new(0),
      slot_count: AtomicUsize::new(slot_count),
      resizable:  config.resizable(),
    }
  }

  /// Whether the queue grows instead of rejecting elements when full.
  #[must_use]
  pub const fn is_resizable(&self) -> bool {
    self.resizable
  }

  /// Returns the number of stored elements.
  ///
  /// The value is read without locking and is advisory only.
  #[must_use]
  pub fn len(&self) -> usize {
    let read = self.read_idx.load(Ordering::Acquire);
    let write = self.write_idx.load(Ordering::Acquire);
    let slot_count = self.slot_count.load(Ordering::Acquire);
    (write + slot_count - read) % slot_count
  }

  /// Returns the number of elements the queue holds before it is full.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.slot_count.load(Ordering::Acquire) - 1
  }

  /// Indicates whether the queue is empty. Advisory only; see [`MailboxQueue::mark_empty`].
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.write_idx.load(Ordering::Acquire) == self.read_idx.load(Ordering::Acquire)
  }

  /// Indicates whether the queue is full. Advisory only.
  #[must_use]
  pub fn is_full(&self) -> bool {
    let read = self.read_idx.load(Ordering::Acquire);
    let write = self.write_idx.load(Ordering::Acquire);
    let slot_count = self.slot_count.load(Ordering::Acquire);
    (write + 1) % slot_count == read
  }

  /// Adds an element to the tail of the queue.
  ///
  /// When the queue is full a resizable queue doubles its backing array; a fixed queue hands the
  /// element back. On success the outcome tells whether the queue was empty before the insert,
  /// which is the signal to (re)activate the consumer.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] with the element when the queue is full and not resizable.
  pub fn enqueue(&self, element: E) -> Result<EnqueueOutcome, QueueError<E>> {
    let _write = self.write_lock.lock();

    let was_empty = self.is_empty();
    while self.is_full() {
      if !self.resizable {
        tracing::debug!(capacity = self.capacity(), "mailbox queue is full; rejecting element");
        return Err(QueueError::Full(element));
      }
      self.grow();
    }

    // SAFETY: the write lock is held.
    let slots = unsafe { self.slots() };
    let write = self.write_idx.load(Ordering::Relaxed);
    slots.put(write, element);
    self.write_idx.store(slots.next_index(write), Ordering::Release);

    Ok(EnqueueOutcome::from_was_empty(was_empty))
  }

  /// Doubles the backing array, preserving FIFO order. Must be called with the write lock held.
  ///
  /// Waits for the read lock, so a growing producer stalls until an outstanding [`PeekGuard`] is
  /// dropped.
  fn grow(&self) {
    let _read = self.read_lock.lock();

    // SAFETY: both locks are held, so no other reference into the slot array exists.
    let slots = unsafe { &mut *self.slots.get() };
    let old_len = slots.len();
    let grown = SlotArray::with_len(old_len.saturating_mul(2));

    let write = self.write_idx.load(Ordering::Relaxed);
    let mut read = self.read_idx.load(Ordering::Relaxed);
    let mut moved = 0;
    while read != write {
      grown.transfer_from(slots, read, moved);
      read = slots.next_index(read);
      moved += 1;
    }

    let new_len = grown.len();
    *slots = grown;
    self.slot_count.store(new_len, Ordering::Release);
    self.read_idx.store(0, Ordering::Release);
    self.write_idx.store(moved, Ordering::Release);

    tracing::debug!(old_capacity = old_len - 1, new_capacity = new_len - 1, len = moved, "mailbox queue grew");
  }

  /// Removes the element at the head of the queue.
  ///
  /// Returns `None` when no element is available.
  pub fn dequeue(&self) -> Option<E> {
    let _read = self.read_lock.lock();

    // SAFETY: the read lock is held.
    let slots = unsafe { self.slots() };
    let read = self.read_idx.load(Ordering::Relaxed);
    let element = slots.take(read)?;
    self.read_idx.store(slots.next_index(read), Ordering::Release);
    Some(element)
  }

  /// Borrows the element at the head of the queue without removing it.
  ///
  /// The returned guard holds the read lock until it is dropped. While it is alive, consumer-side
  /// operations and growing producers wait for it, and [`MailboxQueue::steal`] reports
  /// [`QueueError::WouldBlock`]. Keep the guard short-lived or use [`MailboxQueue::peek_with`].
  pub fn peek(&self) -> Option<PeekGuard<'_, E, M>> {
    let read_guard = self.read_lock.lock();

    // SAFETY: the read lock is held and moves into the returned guard, so no consumer-side
    // operation or growth can empty the head slot while the borrow is alive.
    let element = unsafe { self.slots().get(self.read_idx.load(Ordering::Relaxed)) }?;
    Some(PeekGuard::new(read_guard, element))
  }

  /// Runs `f` against the head element without removing it, releasing the read lock afterwards.
  pub fn peek_with<R>(&self, f: impl FnOnce(&E) -> R) -> Option<R> {
    self.peek().map(|guard| f(&*guard))
  }

  /// Removes the most recently enqueued element without blocking.
  ///
  /// Returns `Ok(None)` when the queue is empty.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::WouldBlock`] when a producer holds the write lock or the consumer side
  /// holds the read lock; the caller should try again later.
  pub fn steal(&self) -> Result<Option<E>, QueueError<E>> {
    if self.is_empty() {
      return Ok(None);
    }

    let Some(_write) = self.write_lock.try_lock() else {
      tracing::trace!("mailbox queue steal skipped; write lock is busy");
      return Err(QueueError::WouldBlock);
    };
    let Some(_read) = self.read_lock.try_lock() else {
      tracing::trace!("mailbox queue steal skipped; read lock is busy");
      return Err(QueueError::WouldBlock);
    };

    // SAFETY: both locks are held.
    let slots = unsafe { self.slots() };
    let read = self.read_idx.load(Ordering::Relaxed);
    let write = self.write_idx.load(Ordering::Relaxed);
    if read == write {
      return Ok(None);
    }

    let last = slots.prev_index(write);
    let element = slots.take(last);
    if element.is_some() {
      self.write_idx.store(last, Ordering::Release);
    }
    Ok(element)
  }

  /// Drops every pending element and returns how many were released.
  ///
  /// Element destructors run while the read lock is held and must not call back into this queue.
  /// The head cursor moves past each element before it is dropped, so a panicking destructor
  /// leaves the remaining elements in place for later dequeues.
  pub fn clear(&self) -> usize {
    let _read = self.read_lock.lock();

    // SAFETY: the read lock is held.
    let slots = unsafe { self.slots() };
    let mut read = self.read_idx.load(Ordering::Relaxed);
    let mut released = 0;
    while let Some(element) = slots.take(read) {
      read = slots.next_index(read);
      self.read_idx.store(read, Ordering::Release);
      released += 1;
      drop(element);
    }
    released
  }

  /// Reports emptiness while holding both locks.
  ///
  /// Unlike [`MailboxQueue::is_empty`] the answer never reflects a half-applied enqueue, dequeue
  /// or steal.
  pub fn mark_empty(&self) -> bool {
    let _write = self.write_lock.lock();
    let _read = self.read_lock.lock();
    self.write_idx.load(Ordering::Relaxed) == self.read_idx.load(Ordering::Relaxed)
  }

  /// # Safety
  ///
  /// The caller must hold the read lock or the write lock for the lifetime of the reference.
  unsafe fn slots(&self) -> &SlotArray<E> {
    // SAFETY: the array is only replaced in `grow`, which holds both locks.
    unsafe { &*self.slots.get() }
  }
}

impl<E, M> Default for MailboxQueue<E, M>
where
  M: SyncMutexLike<()>,
{
  fn default() -> Self {
    Self::with_config(MailboxQueueConfig::default())
  }
}

impl<E, M> Drop for MailboxQueue<E, M>
where
  M: SyncMutexLike<()>,
{
  fn drop(&mut self) {
    let released = self.clear();
    if released > 0 {
      tracing::trace!(released, "mailbox queue dropped pending elements");
    }
  }
}

impl<E, M> fmt::Debug for MailboxQueue<E, M>
where
  M: SyncMutexLike<()>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MailboxQueue")
      .field("len", &self.len())
      .field("capacity", &self.capacity())
      .field("resizable", &self.resizable)
      .finish()
  }
}

impl<E, M> QueueBase<E> for MailboxQueue<E, M>
where
  M: SyncMutexLike<()>,
{
  fn len(&self) -> usize {
    MailboxQueue::len(self)
  }

  fn capacity(&self) -> usize {
    MailboxQueue::capacity(self)
  }

  fn is_empty(&self) -> bool {
    MailboxQueue::is_empty(self)
  }

  fn is_full(&self) -> bool {
    MailboxQueue::is_full(self)
  }
}

impl<E, M> QueueWriter<E> for MailboxQueue<E, M>
where
  M: SyncMutexLike<()>,
{
  fn enqueue(&self, element: E) -> Result<EnqueueOutcome, QueueError<E>> {
    MailboxQueue::enqueue(self, element)
  }
}

impl<E, M> QueueReader<E> for MailboxQueue<E, M>
where
  M: SyncMutexLike<()>,
{
  fn dequeue(&self) -> Option<E> {
    MailboxQueue::dequeue(self)
  }

  fn peek_with<R>(&self, f: impl FnOnce(&E) -> R) -> Option<R> {
    MailboxQueue::peek_with(self, f)
  }

  fn clear(&self) -> usize {
    MailboxQueue::clear(self)
  }

  fn mark_empty(&self) -> bool {
    MailboxQueue::mark_empty(self)
  }
}

impl<E, M> QueueStealer<E> for MailboxQueue<E, M>
where
  M: SyncMutexLike<()>,
{
  fn steal(&self) -> Result<Option<E>, QueueError<E>> {
    MailboxQueue::steal(self)
  }
}
