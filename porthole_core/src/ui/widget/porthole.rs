//! Porthole is a circular window onto its single child.

use crate::event::PointerEvent;
use crate::interactor_impl;
use crate::prelude::*;
use crate::ui::canvas::Color;
use crate::ui::draw::DrawContext;
use crate::ui::interactor::DrawsSelf;
use crate::ui::interactor::PicksSelf;
use crate::ui::pick::PickContext;
use crate::ui::pick::PickList;
use std::f64::consts::TAU;

#[derive(Debug, Clone, Default)]
/// Porthole.
///
/// It clips its child to the circle inscribed in its width, centered in its
/// bounds, and is only struck inside that circle. The child is appended to
/// the pick list before the porthole itself, so the porthole is the topmost
/// hit.
///
/// NOTE: Insert it with [`Tree::insert_single`](crate::ui::tree::Tree::insert_single)
/// so it never holds more than one child.
pub struct Porthole {
  border: Option<Color>,
}

impl Porthole {
  pub fn new() -> Self {
    Self { border: None }
  }

  /// Stroke the circle with `color` after the child is drawn.
  pub fn with_border(color: Color) -> Self {
    Self {
      border: Some(color),
    }
  }

  /// Circle center and radius in local space.
  pub fn circle(coords: &Coordinates) -> (f64, f64, f64) {
    let (cx, cy) = coords.center();
    (cx, cy, f64::from(coords.width()) / 2.0)
  }
}

impl DrawsSelf for Porthole {
  fn draw(&self, ctx: &mut DrawContext<'_>) -> TheResult<()> {
    let (cx, cy, radius) = Self::circle(&ctx.coordinates());

    ctx.scoped(|ctx| {
      let surface = ctx.surface();
      surface.begin_path();
      surface.arc(cx, cy, radius, 0.0, TAU);
      surface.clip();
      ctx.draw_children()
    })?;

    if let Some(border) = &self.border {
      let surface = ctx.surface();
      surface.begin_path();
      surface.arc(cx, cy, radius, 0.0, TAU);
      surface.set_stroke_color(border);
      surface.stroke();
    }
    Ok(())
  }
}

impl PicksSelf for Porthole {
  fn pick(
    &self,
    ctx: &PickContext<'_>,
    event: &PointerEvent,
    mut picks: Option<&mut PickList>,
  ) -> TheResult<bool> {
    let (cx, cy, radius) = Self::circle(&ctx.coordinates());
    let distance = (f64::from(event.x()) - cx).hypot(f64::from(event.y()) - cy);
    if distance > radius {
      return Ok(false);
    }

    ctx.pick_children(event, picks.as_deref_mut())?;
    if let Some(picks) = picks {
      picks.push(ctx.id());
    }
    Ok(true)
  }
}

interactor_impl!(Porthole, "Porthole", DrawsSelf, PicksSelf);
