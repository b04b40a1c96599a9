//! Messages used inside [`EventLoop`](crate::evloop::EventLoop).

use crate::event::PointerEvent;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Message sent to the event loop.
pub enum EventLoopMessage {
  /// Pointer event, in the surface space.
  Pointer(PointerEvent),

  /// Redraw without any event.
  Redraw,

  /// Exit the loop.
  Quit,
}
