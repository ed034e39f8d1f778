use std::{
  sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
  },
  thread,
};

use super::*;

#[test]
fn clones_observe_the_same_queue() {
  let queue = ArcMailboxQueue::new(4);
  let cloned = queue.clone();

  assert!(queue.enqueue(10).unwrap().was_empty());
  assert!(!cloned.enqueue(11).unwrap().was_empty());

  assert_eq!(cloned.len(), 2);
  assert_eq!(cloned.dequeue(), Some(10));
  assert_eq!(queue.dequeue(), Some(11));
  assert_eq!(queue.dequeue(), None);
}

#[test]
fn fixed_queue_accepts_exactly_its_capacity() {
  let queue = ArcMailboxQueue::with_config(MailboxQueueConfig::new(2, false));
  queue.enqueue(1).unwrap();
  queue.enqueue(2).unwrap();
  assert!(queue.is_full());
  assert_eq!(queue.enqueue(3), Err(QueueError::Full(3)));
  assert_eq!(queue.len(), 2);

  assert_eq!(queue.dequeue(), Some(1));
  assert_eq!(queue.dequeue(), Some(2));
  assert!(queue.mark_empty());
}

#[test]
fn peek_and_steal_through_handle() {
  let queue = ArcMailboxQueue::default();
  assert_eq!(queue.capacity(), DEFAULT_CAPACITY);
  assert!(queue.is_resizable());

  queue.enqueue("a").unwrap();
  queue.enqueue("b").unwrap();
  assert_eq!(queue.peek().map(|head| *head), Some("a"));
  assert_eq!(queue.peek_with(|head| head.to_uppercase()), Some("A".to_string()));
  assert_eq!(queue.steal(), Ok(Some("b")));
  assert_eq!(queue.clear(), 1);
  assert!(queue.is_empty());
}

#[test]
fn steal_on_empty_handle_returns_none() {
  let queue: ArcMailboxQueue<u32> = ArcMailboxQueue::new(4);
  assert_eq!(queue.steal(), Ok(None));

  queue.enqueue(1).unwrap();
  assert_eq!(queue.dequeue(), Some(1));
  assert_eq!(queue.steal(), Ok(None));
}

#[test]
fn producers_and_consumer_on_separate_threads() {
  let producers = 4_usize;
  let per_producer = 1_000_usize;
  let total = producers * per_producer;
  let queue = ArcMailboxQueue::new(8);
  let wakeups = Arc::new(AtomicUsize::new(0));

  let handles: Vec<_> = (0..producers)
    .map(|producer| {
      let queue = queue.clone();
      let wakeups = wakeups.clone();
      thread::spawn(move || {
        for offset in 0..per_producer {
          if queue.enqueue(producer * per_producer + offset).unwrap().was_empty() {
            wakeups.fetch_add(1, Ordering::SeqCst);
          }
        }
      })
    })
    .collect();

  let consumer = {
    let queue = queue.clone();
    thread::spawn(move || {
      let mut received = Vec::with_capacity(total);
      while received.len() < total {
        match queue.dequeue() {
          | Some(value) => received.push(value),
          | None => thread::yield_now(),
        }
      }
      received
    })
  };

  for handle in handles {
    handle.join().unwrap();
  }
  let mut received = consumer.join().unwrap();

  received.sort_unstable();
  assert_eq!(received, (0..total).collect::<Vec<_>>());
  assert!(wakeups.load(Ordering::SeqCst) >= 1);
  assert!(queue.mark_empty());
}

#[test]
fn handle_is_usable_through_role_traits() {
  fn forward<Q, R>(source: &Q, target: &R) -> usize
  where
    Q: QueueReader<u32>,
    R: QueueWriter<u32>, {
    let mut moved = 0;
    while let Some(value) = source.dequeue() {
      target.enqueue(value).unwrap();
      moved += 1;
    }
    moved
  }

  let source = ArcMailboxQueue::new(4);
  let target = ArcMailboxQueue::new(1);
  for value in 0..6 {
    source.enqueue(value).unwrap();
  }

  assert_eq!(forward(&source, &target), 6);
  assert!(QueueReader::mark_empty(&source));
  assert_eq!(QueueBase::len(&target), 6);
  assert_eq!(QueueStealer::steal(&target), Ok(Some(5)));
}

#[test]
fn dropping_last_handle_releases_elements() {
  struct Flagged(Arc<AtomicBool>);

  impl Drop for Flagged {
    fn drop(&mut self) {
      self.0.store(true, Ordering::SeqCst);
    }
  }

  let dropped = Arc::new(AtomicBool::new(false));
  let queue = ArcMailboxQueue::new(2);
  let cloned = queue.clone();
  assert!(queue.enqueue(Flagged(dropped.clone())).is_ok());

  drop(queue);
  assert!(!dropped.load(Ordering::SeqCst));
  drop(cloned);
  assert!(dropped.load(Ordering::SeqCst));
}
