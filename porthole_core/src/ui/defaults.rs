//! Default behaviors for nodes that don't implement their own.

use crate::event::PointerEvent;
use crate::prelude::*;
use crate::ui::draw;
use crate::ui::draw::DrawContext;
use crate::ui::pick;
use crate::ui::pick::PickContext;
use crate::ui::pick::PickList;
use std::fmt;
use std::sync::Arc;

/// Draw function for nodes that don't implement
/// [`DrawsSelf`](crate::ui::interactor::DrawsSelf).
pub type DrawFn = Arc<dyn Fn(&mut DrawContext<'_>) -> TheResult<()> + Send + Sync>;

/// Pick function for nodes that don't implement
/// [`PicksSelf`](crate::ui::interactor::PicksSelf).
pub type PickFn = Arc<
  dyn Fn(&PickContext<'_>, &PointerEvent, Option<&mut PickList>) -> TheResult<bool>
    + Send
    + Sync,
>;

#[derive(Clone)]
/// Default-behavior table.
///
/// It's passed along every draw and pick pass, so a host can replace the
/// fallbacks at any time and the next pass picks up the change.
pub struct Defaults {
  draw: DrawFn,
  pick: PickFn,
}

impl Default for Defaults {
  /// Draw children only, pick by the half-open rectangle.
  fn default() -> Self {
    Self {
      draw: Arc::new(draw::default_draw),
      pick: Arc::new(pick::default_pick),
    }
  }
}

impl fmt::Debug for Defaults {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Defaults").finish_non_exhaustive()
  }
}

impl Defaults {
  pub fn draw(&self) -> &DrawFn {
    &self.draw
  }

  pub fn pick(&self) -> &PickFn {
    &self.pick
  }

  pub fn set_draw(&mut self, draw: DrawFn) {
    self.draw = draw;
  }

  pub fn set_pick(&mut self, pick: PickFn) {
    self.pick = pick;
  }

  pub fn with_draw(mut self, draw: DrawFn) -> Self {
    self.draw = draw;
    self
  }

  pub fn with_pick(mut self, pick: PickFn) -> Self {
    self.pick = pick;
    self
  }
}
