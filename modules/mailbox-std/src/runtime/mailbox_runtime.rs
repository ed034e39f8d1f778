use std::{
  num::NonZeroUsize,
  sync::atomic::{AtomicBool, Ordering},
  thread,
};


static GLOBAL_RUNTIME: MailboxRuntime = MailboxRuntime::new();

/// Lifecycle flag for the scheduling substrate that drains mailbox queues.
///
/// The queues themselves never consult the runtime. A scheduler calls [`MailboxRuntime::startup`]
/// once before any queue is used and [`MailboxRuntime::shutdown`] after every queue is drained.
/// Both transitions are idempotent.
#[derive(Debug)]
pub struct MailboxRuntime {
  started: AtomicBool,
}

impl MailboxRuntime {
  /// Creates a runtime in the stopped state.
  #[must_use]
  pub const fn new() -> Self {
    Self { started: AtomicBool::new(false) }
  }

  /// Returns the process-wide runtime.
  #[must_use]
  pub fn global() -> &'static MailboxRuntime {
    &GLOBAL_RUNTIME
  }

  /// Marks the runtime as started.
  ///
  /// Returns `true` if this call performed the transition, `false` if it was already running.
  pub fn startup(&self) -> bool {
    let transitioned = self.started.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_ok();
    if transitioned {
      tracing::info!(cores = Self::core_count(), "mailbox runtime started");
    } else {
      tracing::debug!("mailbox runtime already started");
    }
    transitioned
  }

  /// Marks the runtime as stopped.
  ///
  /// Returns `true` if this call performed the transition, `false` if it was not running.
  pub fn shutdown(&self) -> bool {
    let transitioned = self.started.compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire).is_ok();
    if transitioned {
      tracing::info!("mailbox runtime stopped");
    } else {
      tracing::debug!("mailbox runtime already stopped");
    }
    transitioned
  }

  /// Indicates whether the runtime is started.
  #[must_use]
  pub fn is_started(&self) -> bool {
    self.started.load(Ordering::Acquire)
  }

  /// Returns the number of hardware threads available to the process, at least one.
  #[must_use]
  pub fn core_count() -> usize {
    thread::available_parallelism().map_or(1, NonZeroUsize::get)
  }
}

impl Default for MailboxRuntime {
  fn default() -> Self {
    Self::new()
  }
}
