#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
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
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]

//! Mailbox queue primitives shared between runtimes.
//!
//! The crate provides [`MailboxQueue`], a growable ring buffer with one consumer role, many
//! producers and an opportunistic stealer. Producers and the consumer are coordinated through two
//! independent locks abstracted by [`SyncMutexLike`], so the same queue runs on top of spin locks in
//! `no_std` builds and on `std::sync::Mutex` in `cellex-mailbox-std-rs`.

extern crate alloc;

/// Collection data structures.
pub mod collections;
/// Lock abstractions and the shared ownership wrapper.
pub mod sync;

pub use collections::queue::{
  EnqueueOutcome, MailboxQueue, MailboxQueueConfig, PeekGuard, QueueBase, QueueError, QueueReader, QueueStealer,
  QueueWriter, DEFAULT_CAPACITY,
};
pub use sync::{ArcShared, SpinSyncMutex, SyncMutexLike, SyncMutexLikeGuard};

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
  pub use crate::{
    collections::queue::{
      EnqueueOutcome, MailboxQueue, MailboxQueueConfig, PeekGuard, QueueBase, QueueError, QueueReader,
      QueueStealer, QueueWriter, DEFAULT_CAPACITY,
    },
    sync::{ArcShared, SpinSyncMutex, SyncMutexLike},
  };
}
