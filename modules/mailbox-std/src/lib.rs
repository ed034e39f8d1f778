#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]

//! Mailbox queue bindings for std runtimes.
//!
//! This crate binds the abstractions defined in `cellex_mailbox_core_rs` to `std::sync::Mutex`,
//! providing an `Arc`-shared mailbox handle for use across threads and the process-wide runtime
//! lifecycle flag the scheduler toggles around queue usage.

/// Collection data structures tailored for std environments.
pub mod collections;
/// Process-wide runtime lifecycle.
pub mod runtime;
/// Mutex implementations backed by the standard library.
pub mod sync;

pub use cellex_mailbox_core_rs::{
  EnqueueOutcome, MailboxQueue, MailboxQueueConfig, PeekGuard, QueueBase, QueueError, QueueReader, QueueStealer,
  QueueWriter, DEFAULT_CAPACITY,
};
pub use collections::queue::{ArcMailboxQueue, StdMailboxQueue};
pub use runtime::MailboxRuntime;
pub use sync::{StdMutexGuard, StdSyncMutex};

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
  pub use cellex_mailbox_core_rs::{
    EnqueueOutcome, MailboxQueueConfig, QueueBase, QueueError, QueueReader, QueueStealer, QueueWriter,
    DEFAULT_CAPACITY,
  };

  pub use crate::{
    collections::queue::{ArcMailboxQueue, StdMailboxQueue},
    runtime::MailboxRuntime,
    sync::StdSyncMutex,
  };
}
