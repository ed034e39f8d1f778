mod enqueue_outcome;
mod mailbox_queue;
mod mailbox_queue_config;
mod peek_guard;
mod slot_array;

pub use enqueue_outcome::EnqueueOutcome;
pub use mailbox_queue::MailboxQueue;
pub use mailbox_queue_config::{MailboxQueueConfig, DEFAULT_CAPACITY};
pub use peek_guard::PeekGuard;
