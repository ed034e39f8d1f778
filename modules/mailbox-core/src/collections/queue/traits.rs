mod queue_base;
mod queue_reader;
mod queue_stealer;
mod queue_writer;

pub use queue_base::QueueBase;
pub use queue_reader::QueueReader;
pub use queue_stealer::QueueStealer;
pub use queue_writer::QueueWriter;
