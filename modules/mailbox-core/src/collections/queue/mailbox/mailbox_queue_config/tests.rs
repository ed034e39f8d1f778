use super::*;

#[test]
fn default_is_resizable_with_default_capacity() {
  let config = MailboxQueueConfig::default();
  assert_eq!(config.capacity(), DEFAULT_CAPACITY);
  assert!(config.resizable());
  assert_eq!(config.slot_count(), DEFAULT_CAPACITY + 1);
}

#[test]
fn zero_capacity_is_raised_to_one() {
  let config = MailboxQueueConfig::new(0, false);
  assert_eq!(config.capacity(), 1);
  assert_eq!(config.with_capacity(0).capacity(), 1);
}

#[test]
fn builders_replace_single_fields() {
  let config = MailboxQueueConfig::default().with_capacity(4).with_resizable(false);
  assert_eq!(config, MailboxQueueConfig::new(4, false));
}
