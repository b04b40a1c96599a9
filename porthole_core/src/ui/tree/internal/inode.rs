//! Internal tree node.

use crate::prelude::*;
use crate::ui::interactor::Interactor;
use std::sync::atomic::AtomicI32;
use std::sync::atomic::Ordering;

/// Stable handle of a node inside the [`Tree`](crate::ui::tree::Tree) arena.
pub type NodeId = i32;

/// Next unique node ID.
///
/// NOTE: Start from 100001, so IDs are never mistaken for coordinates in logs.
pub fn next_node_id() -> TheResult<NodeId> {
  static VALUE: AtomicI32 = AtomicI32::new(100001);
  take_node_id(&VALUE)
}

/// Take the current ID from `counter` and advance it. Fails instead of
/// wrapping around, so an ID is never handed out twice.
pub fn take_node_id(counter: &AtomicI32) -> TheResult<NodeId> {
  counter
    .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| id.checked_add(1))
    .map_err(|_| TheErr::NodeIdExhausted)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// How many children a node accepts.
pub enum Manipulator {
  /// Arbitrary number of children, i.e. generic containers.
  Multi,
  /// At most one child, i.e. a mask that assumes exactly one visual child.
  Single,
}

impl Manipulator {
  /// Whether one more child can be appended when there're already `len`
  /// children.
  pub fn accepts(&self, len: usize) -> bool {
    match self {
      Manipulator::Multi => true,
      Manipulator::Single => len == 0,
    }
  }
}

#[derive(Debug)]
/// The value holder for each node in the arena.
pub struct Inode {
  id: NodeId,
  coords: Coordinates,
  manipulator: Manipulator,
  value: Box<dyn Interactor>,
}

impl Inode {
  pub fn new(
    coords: Coordinates,
    manipulator: Manipulator,
    value: Box<dyn Interactor>,
  ) -> TheResult<Self> {
    Ok(Self {
      id: next_node_id()?,
      coords,
      manipulator,
      value,
    })
  }

  pub fn id(&self) -> NodeId {
    self.id
  }

  pub fn coordinates(&self) -> &Coordinates {
    &self.coords
  }

  pub fn coordinates_mut(&mut self) -> &mut Coordinates {
    &mut self.coords
  }

  pub fn manipulator(&self) -> Manipulator {
    self.manipulator
  }

  pub fn value(&self) -> &dyn Interactor {
    self.value.as_ref()
  }

  pub fn value_mut(&mut self) -> &mut dyn Interactor {
    self.value.as_mut()
  }

  /// Borrow coordinates and the interactor at the same time, so callbacks
  /// such as dragging can move their own node.
  pub fn split_mut(&mut self) -> (&mut Coordinates, &mut dyn Interactor) {
    (&mut self.coords, self.value.as_mut())
  }

  pub fn into_value(self) -> Box<dyn Interactor> {
    self.value
  }
}
