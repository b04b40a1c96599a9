//! Interactor and its capabilities.
//!
//! An interactor is the value held by each tree node. It can opt into any
//! subset of the capabilities below, the engine falls back to the default
//! behavior (for draw/pick) or simply skips the callback (for mouse events)
//! when a capability is missing.
//!
//! Use the [`interactor_impl`](crate::interactor_impl) macro to implement the
//! [`Interactor`] trait and wire the capabilities a type implements:
//!
//! ```ignore
//! #[derive(Debug)]
//! struct Button;
//!
//! impl DrawsSelf for Button { /* ... */ }
//! impl ClicksSelf for Button { /* ... */ }
//!
//! interactor_impl!(Button, "Button", DrawsSelf, ClicksSelf);
//! ```

use crate::event::PointerEvent;
use crate::prelude::*;
use crate::ui::draw::DrawContext;
use crate::ui::pick::PickContext;
use crate::ui::pick::PickList;
use std::any::Any;
use std::fmt::Debug;

/// Base trait for all tree node values.
pub trait Interactor: Debug + Send {
  /// Short name for logging.
  fn name(&self) -> &'static str;

  fn as_any(&self) -> &dyn Any;

  fn as_any_mut(&mut self) -> &mut dyn Any;

  fn as_draws_self(&self) -> Option<&dyn DrawsSelf> {
    None
  }

  fn as_picks_self(&self) -> Option<&dyn PicksSelf> {
    None
  }

  fn as_clicks_self(&mut self) -> Option<&mut dyn ClicksSelf> {
    None
  }

  fn as_drags_self(&mut self) -> Option<&mut dyn DragsSelf> {
    None
  }

  fn as_mouse_down_self(&mut self) -> Option<&mut dyn MouseDownSelf> {
    None
  }

  fn as_mouse_move_self(&mut self) -> Option<&mut dyn MouseMoveSelf> {
    None
  }

  fn as_mouse_up_self(&mut self) -> Option<&mut dyn MouseUpSelf> {
    None
  }
}

/// Draw the node itself.
pub trait DrawsSelf {
  /// The surface origin is at the node's own origin. Children are NOT drawn
  /// unless [`DrawContext::draw_children`] is called.
  fn draw(&self, ctx: &mut DrawContext<'_>) -> TheResult<()>;
}

/// Custom hit-test, i.e. non-rectangular regions.
pub trait PicksSelf {
  /// The event is in the node's local space. Children are NOT picked unless
  /// [`PickContext::pick_children`] is called, and the node must append
  /// itself to `picks` when it is struck.
  fn pick(
    &self,
    ctx: &PickContext<'_>,
    event: &PointerEvent,
    picks: Option<&mut PickList>,
  ) -> TheResult<bool>;
}

/// Mouse down and up on the same node, without dragging in between.
pub trait ClicksSelf {
  fn click(&mut self);
}

/// Press and move.
///
/// The offsets passed to [`drag`](DragsSelf::drag) are always relative to the
/// position where the mouse was pressed, not the previous move, so replaying
/// the same move is idempotent.
pub trait DragsSelf {
  fn drag_start(&mut self, coords: &mut Coordinates);

  fn drag(&mut self, coords: &mut Coordinates, dx: i32, dy: i32);

  fn drag_end(&mut self, coords: &mut Coordinates);
}

/// Low-level mouse callbacks, the event is in the node's local space.
pub trait MouseDownSelf {
  fn mouse_down(&mut self, event: &PointerEvent);
}

pub trait MouseMoveSelf {
  fn mouse_move(&mut self, event: &PointerEvent);
}

pub trait MouseUpSelf {
  fn mouse_up(&mut self, event: &PointerEvent);
}

/// Implement [`Interactor`] for a type, and expose the listed capabilities.
///
/// Capabilities: `DrawsSelf`, `PicksSelf`, `ClicksSelf`, `DragsSelf`,
/// `MouseDownSelf`, `MouseMoveSelf`, `MouseUpSelf`.
#[macro_export]
macro_rules! interactor_impl {
  (@capability DrawsSelf) => {
    fn as_draws_self(
      &self,
    ) -> Option<&dyn $crate::ui::interactor::DrawsSelf> {
      Some(self)
    }
  };
  (@capability PicksSelf) => {
    fn as_picks_self(
      &self,
    ) -> Option<&dyn $crate::ui::interactor::PicksSelf> {
      Some(self)
    }
  };
  (@capability ClicksSelf) => {
    fn as_clicks_self(
      &mut self,
    ) -> Option<&mut dyn $crate::ui::interactor::ClicksSelf> {
      Some(self)
    }
  };
  (@capability DragsSelf) => {
    fn as_drags_self(
      &mut self,
    ) -> Option<&mut dyn $crate::ui::interactor::DragsSelf> {
      Some(self)
    }
  };
  (@capability MouseDownSelf) => {
    fn as_mouse_down_self(
      &mut self,
    ) -> Option<&mut dyn $crate::ui::interactor::MouseDownSelf> {
      Some(self)
    }
  };
  (@capability MouseMoveSelf) => {
    fn as_mouse_move_self(
      &mut self,
    ) -> Option<&mut dyn $crate::ui::interactor::MouseMoveSelf> {
      Some(self)
    }
  };
  (@capability MouseUpSelf) => {
    fn as_mouse_up_self(
      &mut self,
    ) -> Option<&mut dyn $crate::ui::interactor::MouseUpSelf> {
      Some(self)
    }
  };
  ($name:ty, $label:literal $(, $capability:ident)* $(,)?) => {
    impl $crate::ui::interactor::Interactor for $name {
      fn name(&self) -> &'static str {
        $label
      }

      fn as_any(&self) -> &dyn std::any::Any {
        self
      }

      fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
      }

      $(
        $crate::interactor_impl!(@capability $capability);
      )*
    }
  };
}
