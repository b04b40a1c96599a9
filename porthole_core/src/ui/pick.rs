//! Pick (hit-test) pipeline.
//!
//! Every node receives the pointer event in its own local space. A struck
//! node appends itself to the [`PickList`] before its children, so the last
//! entry is the topmost node.

use crate::event::PointerEvent;
use crate::prelude::*;
use crate::ui::defaults::Defaults;
use crate::ui::tree::NodeId;
use crate::ui::tree::Tree;

use itertools::Itertools;
use std::fmt;
use std::slice::Iter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Nodes struck by one pick, in the order they're appended.
pub struct PickList {
  ids: Vec<NodeId>,
}

impl PickList {
  pub fn new() -> Self {
    Self { ids: vec![] }
  }

  pub fn push(&mut self, id: NodeId) {
    self.ids.push(id);
  }

  pub fn len(&self) -> usize {
    self.ids.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ids.is_empty()
  }

  pub fn iter(&self) -> Iter<'_, NodeId> {
    self.ids.iter()
  }

  pub fn as_slice(&self) -> &[NodeId] {
    &self.ids
  }

  /// The last appended node, i.e. the one on top.
  pub fn topmost(&self) -> Option<NodeId> {
    self.ids.last().copied()
  }

  pub fn contains(&self, id: NodeId) -> bool {
    self.ids.contains(&id)
  }

  pub fn into_vec(self) -> Vec<NodeId> {
    self.ids
  }
}

impl fmt::Display for PickList {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}]", self.ids.iter().join(", "))
  }
}

/// Everything a node needs when picking itself.
pub struct PickContext<'a> {
  tree: &'a Tree,
  id: NodeId,
  coords: Coordinates,
  defaults: &'a Defaults,
}

impl<'a> PickContext<'a> {
  pub fn new(
    tree: &'a Tree,
    id: NodeId,
    coords: Coordinates,
    defaults: &'a Defaults,
  ) -> Self {
    Self {
      tree,
      id,
      coords,
      defaults,
    }
  }

  pub fn id(&self) -> NodeId {
    self.id
  }

  pub fn tree(&self) -> &'a Tree {
    self.tree
  }

  pub fn defaults(&self) -> &'a Defaults {
    self.defaults
  }

  pub fn coordinates(&self) -> Coordinates {
    self.coords
  }

  /// Pick all children of the node, `event` is in the node's local space.
  pub fn pick_children(
    &self,
    event: &PointerEvent,
    picks: Option<&mut PickList>,
  ) -> TheResult<bool> {
    pick_children(self.tree, self.id, event, picks, self.defaults)
  }
}

/// Pick a node, `event` is in the node's local space. Returns whether the
/// node is struck.
///
/// When `picks` is `None` this is a pure membership test.
pub fn pick(
  tree: &Tree,
  id: NodeId,
  event: &PointerEvent,
  picks: Option<&mut PickList>,
  defaults: &Defaults,
) -> TheResult<bool> {
  let inode = tree.inode(id).ok_or(TheErr::NodeNotFound(id))?;
  let ctx = PickContext::new(tree, id, *inode.coordinates(), defaults);
  match inode.value().as_picks_self() {
    Some(node) => node.pick(&ctx, event, picks),
    None => (defaults.pick())(&ctx, event, picks),
  }
}

/// Pick all children of a node in their order, the event is translated into
/// each child's local space. Returns whether any child is struck.
pub fn pick_children(
  tree: &Tree,
  id: NodeId,
  event: &PointerEvent,
  mut picks: Option<&mut PickList>,
  defaults: &Defaults,
) -> TheResult<bool> {
  let mut struck = false;
  for child_id in tree.children(id) {
    let coords = tree
      .coordinates(*child_id)
      .ok_or(TheErr::NodeNotFound(*child_id))?;
    let child_event = event.relative_to(coords.pos());
    if pick(tree, *child_id, &child_event, picks.as_deref_mut(), defaults)? {
      struck = true;
    }
  }
  Ok(struck)
}

/// The default pick: struck inside `[0, width) x [0, height)`, then append
/// self and pick children.
pub fn default_pick(
  ctx: &PickContext<'_>,
  event: &PointerEvent,
  mut picks: Option<&mut PickList>,
) -> TheResult<bool> {
  if !ctx.coordinates().contains(event.x(), event.y()) {
    return Ok(false);
  }
  if let Some(picks) = picks.as_deref_mut() {
    picks.push(ctx.id());
  }
  ctx.pick_children(event, picks)?;
  Ok(true)
}
