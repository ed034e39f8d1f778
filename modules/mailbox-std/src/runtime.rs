mod mailbox_runtime;

pub use mailbox_runtime::MailboxRuntime;
