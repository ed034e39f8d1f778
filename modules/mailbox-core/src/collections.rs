/// Queue primitives used as actor mailboxes.
pub mod queue;
