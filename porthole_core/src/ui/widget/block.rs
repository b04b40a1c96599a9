//! Colored block.

use crate::event::PointerEvent;
use crate::interactor_impl;
use crate::prelude::*;
use crate::ui::canvas::Color;
use crate::ui::draw::DrawContext;
use crate::ui::interactor::ClicksSelf;
use crate::ui::interactor::DragsSelf;
use crate::ui::interactor::DrawsSelf;
use crate::ui::interactor::MouseMoveSelf;

#[derive(Debug, Clone)]
/// A filled rectangle that can be clicked and dragged around its parent.
pub struct Block {
  color: Color,
  clicks: usize,
  hovers: usize,

  // Position when the drag started, `None` if not dragging.
  drag_origin: Option<IPos>,
}

impl Block {
  pub fn new(color: Color) -> Self {
    Self {
      color,
      clicks: 0,
      hovers: 0,
      drag_origin: None,
    }
  }

  pub fn color(&self) -> &Color {
    &self.color
  }

  /// How many times it's been clicked.
  pub fn clicks(&self) -> usize {
    self.clicks
  }

  /// How many move events it's received without a pressed button.
  pub fn hovers(&self) -> usize {
    self.hovers
  }

  pub fn is_dragging(&self) -> bool {
    self.drag_origin.is_some()
  }
}

impl DrawsSelf for Block {
  fn draw(&self, ctx: &mut DrawContext<'_>) -> TheResult<()> {
    let (width, height) = ctx.coordinates().size();
    let surface = ctx.surface();
    surface.set_fill_color(&self.color);
    surface.fill_rectangle(0, 0, width, height);
    ctx.draw_children()
  }
}

impl ClicksSelf for Block {
  fn click(&mut self) {
    self.clicks += 1;
    debug!("Block clicked {} time(s)", self.clicks);
  }
}

impl DragsSelf for Block {
  fn drag_start(&mut self, coords: &mut Coordinates) {
    self.drag_origin = Some(coords.pos());
  }

  fn drag(&mut self, coords: &mut Coordinates, dx: i32, dy: i32) {
    if let Some(origin) = self.drag_origin {
      coords.move_to(
        origin.x().saturating_add(dx),
        origin.y().saturating_add(dy),
      );
    }
  }

  fn drag_end(&mut self, coords: &mut Coordinates) {
    self.drag_origin = None;
    debug!("Block dropped at {:?}", coords.pos());
  }
}

impl MouseMoveSelf for Block {
  fn mouse_move(&mut self, _event: &PointerEvent) {
    self.hovers += 1;
  }
}

interactor_impl!(
  Block,
  "Block",
  DrawsSelf,
  ClicksSelf,
  DragsSelf,
  MouseMoveSelf
);
