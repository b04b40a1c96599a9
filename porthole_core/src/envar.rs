//! Environment variables.

#![allow(non_snake_case)]

use crate::constant::PORTHOLE_CHANNEL_BUF_SIZE;
use crate::constant::PORTHOLE_MUTEX_TIMEOUT_SECS;
use std::sync::OnceLock;
use std::time::Duration;

/// Mutex locking timeout in seconds, by default is [`u64::MAX`].
///
/// NOTE: This constant can be configured through `PORTHOLE_MUTEX_TIMEOUT_SECS` environment variable.
pub fn MUTEX_TIMEOUT_SECS() -> u64 {
  static VALUE: OnceLock<u64> = OnceLock::new();

  *VALUE.get_or_init(|| {
    std::env::var(PORTHOLE_MUTEX_TIMEOUT_SECS)
      .map(|v| v.parse::<u64>().unwrap_or(u64::MAX))
      .unwrap_or(u64::MAX)
  })
}

/// Mutex locking timeout duration, by default is [`u64::MAX`] seconds.
pub fn MUTEX_TIMEOUT() -> Duration {
  Duration::from_secs(MUTEX_TIMEOUT_SECS())
}

/// Buffer size for the pointer event channel, by default is 1000.
///
/// NOTE: This constant can be configured through `PORTHOLE_CHANNEL_BUF_SIZE` environment variable.
pub fn CHANNEL_BUF_SIZE() -> usize {
  static VALUE: OnceLock<usize> = OnceLock::new();

  *VALUE.get_or_init(|| {
    std::env::var(PORTHOLE_CHANNEL_BUF_SIZE)
      .map(|v| v.parse::<usize>().unwrap_or(1000_usize))
      .unwrap_or(1000_usize)
      .max(1)
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mutex_timeout1() {
    assert!(MUTEX_TIMEOUT_SECS() > 0);
  }

  #[test]
  fn channel_buf_size1() {
    assert!(CHANNEL_BUF_SIZE() > 0);
  }
}
