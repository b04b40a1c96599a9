//! Mouse dispatch.
//!
//! A finite-state machine that routes pointer events to the interactors in
//! the tree, and turns down/move/up sequences into clicks and drags:
//!
//! ```text
//!            down (hit)                move (DragsSelf)
//!   Idle ---------------> Pressed -------------------> Dragging
//!    ^                       |                            |
//!    |       up (click)      |       up/down (drag_end)   |
//!    +-----------------------+----------------------------+
//! ```
//!
//! Events are in the root's local space, each callback receives the event
//! translated into the target node's local space.

use crate::event::PointerEvent;
use crate::event::PointerKind;
use crate::prelude::*;
use crate::ui::defaults::Defaults;
use crate::ui::pick;
use crate::ui::pick::PickList;
use crate::ui::tree::NodeId;
use crate::ui::tree::Tree;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
/// Dispatch state.
pub enum DispatchState {
  #[default]
  Idle,

  /// Mouse is pressed on `node`, `anchor` is the pressed position.
  Pressed { node: NodeId, anchor: IPos },

  /// `node` is being dragged, offsets are relative to `anchor`.
  Dragging { node: NodeId, anchor: IPos },
}

impl DispatchState {
  /// The pressed or dragged node.
  pub fn node(&self) -> Option<NodeId> {
    match self {
      DispatchState::Idle => None,
      DispatchState::Pressed { node, .. } | DispatchState::Dragging { node, .. } => {
        Some(*node)
      }
    }
  }
}

#[derive(Debug, Default)]
/// Mouse dispatch state machine.
pub struct MouseDispatch {
  state: DispatchState,

  // Topmost node under the last move without a pressed node.
  hover: Option<NodeId>,
}

impl MouseDispatch {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn state(&self) -> DispatchState {
    self.state
  }

  pub fn hover(&self) -> Option<NodeId> {
    self.hover
  }

  /// Back to idle, without any callbacks.
  pub fn reset(&mut self) {
    self.state = DispatchState::Idle;
  }

  /// Handle one event, makes exactly one state transition.
  ///
  /// A down while dragging ends the drag before the new press.
  pub fn handle(
    &mut self,
    tree: &mut Tree,
    defaults: &Defaults,
    event: &PointerEvent,
  ) -> TheResult<()> {
    let next = match (self.state, event.kind()) {
      (DispatchState::Dragging { node, .. }, PointerKind::Down) => {
        self.on_dragging_up(tree, node);
        self.on_down(tree, defaults, event)?
      }
      (_, PointerKind::Down) => self.on_down(tree, defaults, event)?,
      (DispatchState::Idle, PointerKind::Move) => {
        self.on_idle_move(tree, defaults, event)?
      }
      (DispatchState::Pressed { node, anchor }, PointerKind::Move) => {
        self.on_pressed_move(tree, node, anchor, event)
      }
      (DispatchState::Dragging { node, anchor }, PointerKind::Move) => {
        self.on_dragging_move(tree, node, anchor, event)
      }
      (DispatchState::Idle, PointerKind::Up) => {
        self.on_idle_up(tree, defaults, event)?
      }
      (DispatchState::Pressed { node, .. }, PointerKind::Up) => {
        self.on_pressed_up(tree, defaults, node, event)?
      }
      (DispatchState::Dragging { node, .. }, PointerKind::Up) => {
        self.on_dragging_up(tree, node)
      }
    };

    if next != self.state {
      trace!("Dispatch {} moves {:?} => {:?}", event, self.state, next);
    }
    self.state = next;
    Ok(())
  }
}

// Transitions {
impl MouseDispatch {
  fn topmost(
    tree: &Tree,
    defaults: &Defaults,
    event: &PointerEvent,
  ) -> TheResult<Option<NodeId>> {
    let mut picks = PickList::new();
    tree.pick(event, Some(&mut picks), defaults)?;
    trace!("Picked {} at {}", picks, event);
    Ok(picks.topmost())
  }

  // Translate the event into node's local space, `None` if the node is not
  // attached any more.
  fn local_event(
    tree: &Tree,
    node: NodeId,
    event: &PointerEvent,
  ) -> Option<PointerEvent> {
    let root_id = tree.root_id()?;
    let origin = tree.origin_in(root_id, node)?;
    Some(event.relative_to(origin))
  }

  fn forward_move(tree: &mut Tree, node: NodeId, event: &PointerEvent) {
    let Some(local) = Self::local_event(tree, node, event) else {
      return;
    };
    if let Some(n) = tree.node_mut(node).and_then(|n| n.as_mouse_move_self()) {
      n.mouse_move(&local);
    }
  }

  fn forward_up(tree: &mut Tree, node: NodeId, event: &PointerEvent) {
    let Some(local) = Self::local_event(tree, node, event) else {
      return;
    };
    if let Some(n) = tree.node_mut(node).and_then(|n| n.as_mouse_up_self()) {
      n.mouse_up(&local);
    }
  }

  fn vanished(&mut self, node: NodeId) -> DispatchState {
    warn!("Dispatch target {:?} no longer in tree, reset", node);
    DispatchState::Idle
  }

  fn on_down(
    &mut self,
    tree: &mut Tree,
    defaults: &Defaults,
    event: &PointerEvent,
  ) -> TheResult<DispatchState> {
    let Some(node) = Self::topmost(tree, defaults, event)? else {
      debug!("Dropped {}, nothing struck", event);
      return Ok(DispatchState::Idle);
    };
    let Some(local) = Self::local_event(tree, node, event) else {
      return Ok(self.vanished(node));
    };
    if let Some(n) = tree.node_mut(node).and_then(|n| n.as_mouse_down_self()) {
      n.mouse_down(&local);
    }
    Ok(DispatchState::Pressed {
      node,
      anchor: event.pos(),
    })
  }

  fn on_idle_move(
    &mut self,
    tree: &mut Tree,
    defaults: &Defaults,
    event: &PointerEvent,
  ) -> TheResult<DispatchState> {
    let target = Self::topmost(tree, defaults, event)?;
    if target != self.hover {
      debug!("Hover {:?} => {:?}", self.hover, target);
      self.hover = target;
    }
    if let Some(node) = target {
      Self::forward_move(tree, node, event);
    }
    Ok(DispatchState::Idle)
  }

  fn on_pressed_move(
    &mut self,
    tree: &mut Tree,
    node: NodeId,
    anchor: IPos,
    event: &PointerEvent,
  ) -> DispatchState {
    let Some(local) = Self::local_event(tree, node, event) else {
      return self.vanished(node);
    };
    let Some(inode) = tree.inode_mut(node) else {
      return self.vanished(node);
    };

    let (coords, value) = inode.split_mut();
    if let Some(draggable) = value.as_drags_self() {
      let (dx, dy) = offset(anchor, event);
      draggable.drag_start(coords);
      draggable.drag(coords, dx, dy);
      return DispatchState::Dragging { node, anchor };
    }
    if let Some(n) = value.as_mouse_move_self() {
      n.mouse_move(&local);
    }
    DispatchState::Pressed { node, anchor }
  }

  fn on_dragging_move(
    &mut self,
    tree: &mut Tree,
    node: NodeId,
    anchor: IPos,
    event: &PointerEvent,
  ) -> DispatchState {
    if !tree.is_attached(node) {
      return self.vanished(node);
    }
    let Some(inode) = tree.inode_mut(node) else {
      return self.vanished(node);
    };
    let (coords, value) = inode.split_mut();
    if let Some(draggable) = value.as_drags_self() {
      let (dx, dy) = offset(anchor, event);
      draggable.drag(coords, dx, dy);
    }
    DispatchState::Dragging { node, anchor }
  }

  fn on_idle_up(
    &mut self,
    tree: &mut Tree,
    defaults: &Defaults,
    event: &PointerEvent,
  ) -> TheResult<DispatchState> {
    if let Some(node) = Self::topmost(tree, defaults, event)? {
      Self::forward_up(tree, node, event);
    }
    Ok(DispatchState::Idle)
  }

  fn on_pressed_up(
    &mut self,
    tree: &mut Tree,
    defaults: &Defaults,
    node: NodeId,
    event: &PointerEvent,
  ) -> TheResult<DispatchState> {
    let Some(local) = Self::local_event(tree, node, event) else {
      return Ok(self.vanished(node));
    };
    let inside = pick::pick(tree, node, &local, None, defaults)?;
    let Some(value) = tree.node_mut(node) else {
      return Ok(self.vanished(node));
    };

    if inside {
      if let Some(clickable) = value.as_clicks_self() {
        clickable.click();
        return Ok(DispatchState::Idle);
      }
    }
    if let Some(n) = value.as_mouse_up_self() {
      n.mouse_up(&local);
    }
    Ok(DispatchState::Idle)
  }

  fn on_dragging_up(&mut self, tree: &mut Tree, node: NodeId) -> DispatchState {
    if !tree.is_attached(node) {
      return self.vanished(node);
    }
    let Some(inode) = tree.inode_mut(node) else {
      return self.vanished(node);
    };
    let (coords, value) = inode.split_mut();
    if let Some(draggable) = value.as_drags_self() {
      draggable.drag_end(coords);
    }
    DispatchState::Idle
  }
}
// Transitions }

// Absolute offset from the pressed position.
fn offset(anchor: IPos, event: &PointerEvent) -> (i32, i32) {
  (
    event.x().saturating_sub(anchor.x()),
    event.y().saturating_sub(anchor.y()),
  )
}
