//! Collection modules exposed by `cellex-mailbox-std-rs`.

/// Queue implementations for std environments.
pub mod queue;
