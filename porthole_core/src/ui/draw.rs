//! Draw pipeline.
//!
//! Every node is drawn with the surface origin at its own origin. The
//! pipeline saves the surface before a node is drawn and restores it after,
//! and children are only drawn when a node asks for it with
//! [`DrawContext::draw_children`].

use crate::prelude::*;
use crate::ui::canvas::Surface;
use crate::ui::canvas::SurfaceGuard;
use crate::ui::defaults::Defaults;
use crate::ui::tree::NodeId;
use crate::ui::tree::Tree;

/// Everything a node needs when drawing itself.
pub struct DrawContext<'a> {
  tree: &'a Tree,
  id: NodeId,
  coords: Coordinates,
  surface: &'a mut dyn Surface,
  defaults: &'a Defaults,
}

impl<'a> DrawContext<'a> {
  pub fn new(
    tree: &'a Tree,
    id: NodeId,
    coords: Coordinates,
    surface: &'a mut dyn Surface,
    defaults: &'a Defaults,
  ) -> Self {
    Self {
      tree,
      id,
      coords,
      surface,
      defaults,
    }
  }

  /// The node that is drawing.
  pub fn id(&self) -> NodeId {
    self.id
  }

  pub fn tree(&self) -> &'a Tree {
    self.tree
  }

  pub fn defaults(&self) -> &'a Defaults {
    self.defaults
  }

  /// The node's coordinates, the surface origin is at its `(x, y)`.
  pub fn coordinates(&self) -> Coordinates {
    self.coords
  }

  pub fn surface(&mut self) -> &mut dyn Surface {
    &mut *self.surface
  }

  /// Draw all children of the node, in their order.
  pub fn draw_children(&mut self) -> TheResult<()> {
    draw_children(self.tree, self.id, &mut *self.surface, self.defaults)
  }

  /// Run `f` between a save and a restore of the surface, i.e. a clip or a
  /// translate made inside `f` doesn't leak out. The restore happens on every
  /// exit path, including an error or a panic in `f`.
  pub fn scoped<F>(&mut self, f: F) -> TheResult<()>
  where
    F: FnOnce(&mut DrawContext<'_>) -> TheResult<()>,
  {
    let mut guard = SurfaceGuard::new(&mut *self.surface);
    let mut ctx =
      DrawContext::new(self.tree, self.id, self.coords, &mut *guard, self.defaults);
    f(&mut ctx)
  }
}

/// Draw a node, the surface origin must be at the node's origin.
///
/// The surface state is balanced when it returns, either ok or error.
pub fn draw(
  tree: &Tree,
  id: NodeId,
  surface: &mut dyn Surface,
  defaults: &Defaults,
) -> TheResult<()> {
  let inode = tree.inode(id).ok_or(TheErr::NodeNotFound(id))?;
  let mut guard = SurfaceGuard::new(surface);
  let mut ctx =
    DrawContext::new(tree, id, *inode.coordinates(), &mut *guard, defaults);

  let result = match inode.value().as_draws_self() {
    Some(node) => node.draw(&mut ctx),
    None => (defaults.draw())(&mut ctx),
  };
  if let Err(e) = &result {
    trace!("Failed to draw {}({:?}):{:?}", inode.value().name(), id, e);
  }
  result
}

/// Draw all children of a node, each one is translated to its own origin.
pub fn draw_children(
  tree: &Tree,
  id: NodeId,
  surface: &mut dyn Surface,
  defaults: &Defaults,
) -> TheResult<()> {
  for child_id in tree.children(id) {
    let coords = tree
      .coordinates(*child_id)
      .ok_or(TheErr::NodeNotFound(*child_id))?;
    let mut guard = SurfaceGuard::new(&mut *surface);
    guard.translate(coords.x(), coords.y());
    draw(tree, *child_id, &mut *guard, defaults)?;
  }
  Ok(())
}

/// The default draw: the node itself is invisible, only its children are
/// drawn.
pub fn default_draw(ctx: &mut DrawContext<'_>) -> TheResult<()> {
  ctx.draw_children()
}

/// Alternative default draw that strokes the node's bounds before drawing
/// its children, useful for debugging a scene.
pub fn outline_draw(ctx: &mut DrawContext<'_>) -> TheResult<()> {
  let (width, height) = ctx.coordinates().size();
  let surface = ctx.surface();
  surface.begin_path();
  surface.rectangle(0, 0, width, height);
  surface.stroke();
  ctx.draw_children()
}
