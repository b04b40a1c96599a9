//! Prelude.

// Re-export locks
pub use parking_lot::{Mutex, MutexGuard};

// Re-export `log`.
pub use log::{debug, error, info, trace, warn};

// Re-export `coord`.
pub use crate::coord::*;
pub use crate::results::*;

// Re-export `lock`.
pub use crate::{arc_mutex_ptr, bail, lock};
pub use paste::paste;

// Re-export `foldhash`.
pub type FoldMap<K, V> =
  std::collections::HashMap<K, V, foldhash::fast::RandomState>;
pub type FoldSet<K> = std::collections::HashSet<K, foldhash::fast::RandomState>;

// Re-export `geo`.
pub use geo::{self, coord, point};
