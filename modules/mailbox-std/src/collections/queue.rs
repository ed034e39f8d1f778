//! Queue variants available in the std build.

mod arc_mailbox_queue;

pub use arc_mailbox_queue::{ArcMailboxQueue, StdMailboxQueue};
