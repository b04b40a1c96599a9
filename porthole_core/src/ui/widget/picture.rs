//! Picture.

use crate::interactor_impl;
use crate::prelude::*;
use crate::ui::draw::DrawContext;
use crate::ui::interactor::DrawsSelf;
use compact_str::CompactString;

#[derive(Debug, Clone)]
/// Draws an image registered on the surface, at the node's origin.
pub struct Picture {
  image_id: CompactString,
}

impl Picture {
  pub fn new(image_id: &str) -> Self {
    Self {
      image_id: CompactString::new(image_id),
    }
  }

  pub fn image_id(&self) -> &str {
    &self.image_id
  }
}

impl DrawsSelf for Picture {
  fn draw(&self, ctx: &mut DrawContext<'_>) -> TheResult<()> {
    ctx.surface().draw_image_by_id(&self.image_id, 0, 0)?;
    ctx.draw_children()
  }
}

interactor_impl!(Picture, "Picture", DrawsSelf);
