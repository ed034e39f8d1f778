mod arc_shared;
/// Mutex abstraction used for the queue's read and write locks.
pub mod sync_mutex_like;

pub use arc_shared::ArcShared;
pub use sync_mutex_like::{SpinSyncMutex, SyncMutexLike, SyncMutexLikeGuard};
