//! no_std-friendly mailbox queue primitives.

mod mailbox;
mod queue_error;
mod traits;

pub use mailbox::{EnqueueOutcome, MailboxQueue, MailboxQueueConfig, PeekGuard, DEFAULT_CAPACITY};
pub use queue_error::QueueError;
pub use traits::{QueueBase, QueueReader, QueueStealer, QueueWriter};
