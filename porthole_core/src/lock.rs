//! Mutex utility.

/// Generate `Arc<Mutex<T>>` pointer aliases and the `to_arc` constructor.
#[macro_export]
macro_rules! arc_mutex_ptr {
  ($name:ident) => {
    $crate::prelude::paste! {
      pub type [<$name Arc>] = std::sync::Arc<$crate::prelude::Mutex<$name>>;
      pub type [<$name Wk>] = std::sync::Weak<$crate::prelude::Mutex<$name>>;
      pub type [<$name MutexGuard>]<'a> = $crate::prelude::MutexGuard<'a, $name>;

      impl $name {
        pub fn to_arc(value: $name) -> [<$name Arc>] {
          std::sync::Arc::new($crate::prelude::Mutex::new(value))
        }
      }
    }
  };
}

/// Lock a mutex with [`MUTEX_TIMEOUT`](crate::envar::MUTEX_TIMEOUT).
///
/// Panics when the lock cannot be acquired in time, which means a dead lock.
#[macro_export]
macro_rules! lock {
  ($id:expr) => {
    ($id)
      .try_lock_for($crate::envar::MUTEX_TIMEOUT())
      .expect("dead lock")
  };
}
