//! Root container is the root node in the interactor tree.

use crate::constant::DEFAULT_BACKGROUND;
use crate::interactor_impl;
use crate::prelude::*;
use crate::ui::canvas::Color;
use crate::ui::draw::DrawContext;
use crate::ui::interactor::DrawsSelf;

#[derive(Debug, Clone)]
/// Root container, it paints the whole background then its children.
pub struct RootContainer {
  background: Color,
}

impl RootContainer {
  pub fn new(background: Color) -> Self {
    Self { background }
  }

  pub fn background(&self) -> &Color {
    &self.background
  }
}

impl Default for RootContainer {
  fn default() -> Self {
    Self::new(Color::new(DEFAULT_BACKGROUND))
  }
}

impl DrawsSelf for RootContainer {
  fn draw(&self, ctx: &mut DrawContext<'_>) -> TheResult<()> {
    let (width, height) = ctx.coordinates().size();
    let surface = ctx.surface();
    surface.set_fill_color(&self.background);
    surface.fill_rectangle(0, 0, width, height);
    ctx.draw_children()
  }
}

interactor_impl!(RootContainer, "RootContainer", DrawsSelf);
