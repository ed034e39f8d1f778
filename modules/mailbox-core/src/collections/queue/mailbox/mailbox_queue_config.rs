#[cfg(test)]
mod tests;

/// Capacity used when none is specified.
pub const DEFAULT_CAPACITY: usize = 32;

/// Construction-time settings of a [`MailboxQueue`](super::MailboxQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailboxQueueConfig {
  capacity:  usize,
  resizable: bool,
}

impl MailboxQueueConfig {
  /// Creates a configuration with the given capacity and growth mode.
  ///
  /// A capacity of zero is raised to one.
  #[must_use]
  pub const fn new(capacity: usize, resizable: bool) -> Self {
    let capacity = if capacity == 0 { 1 } else { capacity };
    Self { capacity, resizable }
  }

  /// Returns a copy with the given capacity.
  #[must_use]
  pub const fn with_capacity(self, capacity: usize) -> Self {
    Self::new(capacity, self.resizable)
  }

  /// Returns a copy with the given growth mode.
  #[must_use]
  pub const fn with_resizable(self, resizable: bool) -> Self {
    Self::new(self.capacity, resizable)
  }

  /// Number of elements the queue holds before it is full (or grows).
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Whether the queue grows instead of rejecting elements when full.
  #[must_use]
  pub const fn resizable(&self) -> bool {
    self.resizable
  }

  /// Number of slots backing the configured capacity; one slot stays free to tell full from empty.
  pub(crate) const fn slot_count(&self) -> usize {
    self.capacity.saturating_add(1)
  }
}

impl Default for MailboxQueueConfig {
  fn default() -> Self {
    Self::new(DEFAULT_CAPACITY, true)
  }
}
