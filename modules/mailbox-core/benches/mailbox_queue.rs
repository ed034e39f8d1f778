use cellex_mailbox_core_rs::{MailboxQueue, MailboxQueueConfig, SpinSyncMutex};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

type SpinMailboxQueue = MailboxQueue<u32, SpinSyncMutex<()>>;

fn make_fixed_queue(capacity: usize) -> SpinMailboxQueue {
  MailboxQueue::with_config(MailboxQueueConfig::new(capacity, false))
}

fn make_growing_queue() -> SpinMailboxQueue {
  MailboxQueue::new(1)
}

fn bench_mailbox_queue_enqueue_dequeue(c: &mut Criterion) {
  let mut group = c.benchmark_group("mailbox_queue_enqueue_dequeue");
  let batch = 128_u32;

  group.bench_function("fixed_capacity", |b| {
    b.iter_batched(
      || make_fixed_queue(batch as usize),
      |queue: SpinMailboxQueue| {
        for value in 0..batch {
          queue.enqueue(value).unwrap();
        }
        for _ in 0..batch {
          let _ = queue.dequeue().unwrap();
        }
      },
      BatchSize::SmallInput,
    );
  });

  group.bench_function("growing_from_one", |b| {
    b.iter_batched(
      make_growing_queue,
      |queue: SpinMailboxQueue| {
        for value in 0..batch {
          queue.enqueue(value).unwrap();
        }
        for _ in 0..batch {
          let _ = queue.dequeue().unwrap();
        }
      },
      BatchSize::SmallInput,
    );
  });

  group.finish();
}

fn bench_mailbox_queue_steal(c: &mut Criterion) {
  let mut group = c.benchmark_group("mailbox_queue_steal");
  let batch = 128_u32;

  group.bench_function("steal_all", |b| {
    b.iter_batched(
      || {
        let queue = make_fixed_queue(batch as usize);
        for value in 0..batch {
          queue.enqueue(value).unwrap();
        }
        queue
      },
      |queue: SpinMailboxQueue| while let Ok(Some(_)) = queue.steal() {},
      BatchSize::SmallInput,
    );
  });

  group.finish();
}

criterion_group!(benches, bench_mailbox_queue_enqueue_dequeue, bench_mailbox_queue_steal);
criterion_main!(benches);
