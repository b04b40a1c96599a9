//! Global constants.

/// Environment variable that controls the logging level, i.e. `PORTHOLE_LOG=debug`.
pub const PORTHOLE_LOG: &str = "PORTHOLE_LOG";

/// Environment variable that overrides the mutex locking timeout (in seconds).
pub const PORTHOLE_MUTEX_TIMEOUT_SECS: &str = "PORTHOLE_MUTEX_TIMEOUT_SECS";

/// Environment variable that overrides the event loop channel buffer size.
pub const PORTHOLE_CHANNEL_BUF_SIZE: &str = "PORTHOLE_CHANNEL_BUF_SIZE";

/// Default canvas width used by the command line host.
pub const DEFAULT_CANVAS_WIDTH: u32 = 640;

/// Default canvas height used by the command line host.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 480;

/// Default background color painted by the root interactor.
pub const DEFAULT_BACKGROUND: &str = "#eee9e9";

/// Default color for strokes and fills until a node sets its own.
pub const DEFAULT_INK: &str = "#000000";
