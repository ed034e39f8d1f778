use alloc::string::ToString;

use super::*;

#[test]
fn full_error_returns_rejected_element() {
  let error = QueueError::Full("message");
  assert!(error.is_full());
  assert_eq!(error.into_inner(), Some("message"));
}

#[test]
fn would_block_carries_no_element() {
  let error: QueueError<u32> = QueueError::WouldBlock;
  assert!(!error.is_full());
  assert_eq!(error.into_inner(), None);
}

#[test]
fn display_describes_condition() {
  assert_eq!(QueueError::Full(1_u8).to_string(), "mailbox queue is full");
  assert_eq!(QueueError::<u8>::WouldBlock.to_string(), "mailbox queue is busy; retry later");
}
