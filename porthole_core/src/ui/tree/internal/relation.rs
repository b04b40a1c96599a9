//! Parent/children relationships of the tree.

use crate::prelude::*;
use crate::ui::tree::internal::inode::NodeId;

pub const INVALID_ROOT_ID: NodeId = -1;

#[derive(Debug, Clone)]
/// Maintains all nodes relationship of the tree.
///
/// Each parent stores the ordered list of its children (the order is also the
/// z-order: later children are on top), each child stores its parent ID as a
/// non-owning back reference.
///
/// NOTE: This struct only maintains the IDs, it never validates the
/// ownership invariants, the [`Tree`](crate::ui::tree::Tree) does it before
/// mutating.
pub struct Relation {
  parent: FoldMap<NodeId, NodeId>,
  children: FoldMap<NodeId, Vec<NodeId>>,
  root: NodeId,
}

impl Default for Relation {
  fn default() -> Self {
    Self::new()
  }
}

impl Relation {
  pub fn new() -> Self {
    Self {
      parent: FoldMap::default(),
      children: FoldMap::default(),
      root: INVALID_ROOT_ID,
    }
  }

  pub fn is_empty(&self) -> bool {
    self.children.is_empty()
  }

  pub fn len(&self) -> usize {
    self.children.len()
  }

  #[cfg(not(test))]
  fn _internal_check(&self) {}

  #[cfg(test)]
  fn _internal_check(&self) {
    for (child_id, parent_id) in self.parent.iter() {
      debug_assert!(self.children.contains_key(parent_id));
      debug_assert_eq!(
        self
          .children
          .get(parent_id)
          .unwrap()
          .iter()
          .filter(|c| **c == *child_id)
          .count(),
        1
      );
      debug_assert_ne!(*child_id, self.root);
    }
    for (parent_id, children_ids) in self.children.iter() {
      for c in children_ids.iter() {
        debug_assert_eq!(self.parent.get(c), Some(parent_id));
      }
    }
  }

  pub fn root(&self) -> Option<NodeId> {
    if self.root == INVALID_ROOT_ID {
      None
    } else {
      Some(self.root)
    }
  }

  pub fn contains(&self, id: NodeId) -> bool {
    self.children.contains_key(&id)
  }

  /// Register a node without any relationship.
  pub fn add_node(&mut self, id: NodeId) {
    self._internal_check();
    debug_assert!(!self.children.contains_key(&id));
    self.children.insert(id, vec![]);
  }

  /// Register the root node.
  pub fn add_root(&mut self, id: NodeId) {
    debug_assert_eq!(self.root, INVALID_ROOT_ID);
    self.add_node(id);
    self.root = id;
  }

  pub fn parent(&self, id: NodeId) -> Option<NodeId> {
    self.parent.get(&id).copied()
  }

  pub fn children(&self, id: NodeId) -> &[NodeId] {
    self
      .children
      .get(&id)
      .map(|c| c.as_slice())
      .unwrap_or_default()
  }

  /// Append `child_id` to the end of `parent_id`'s children.
  pub fn add_child(&mut self, parent_id: NodeId, child_id: NodeId) {
    self._internal_check();
    debug_assert!(self.children.contains_key(&parent_id));
    debug_assert!(self.children.contains_key(&child_id));
    debug_assert!(!self.parent.contains_key(&child_id));

    self.parent.insert(child_id, parent_id);
    if let Some(children_ids) = self.children.get_mut(&parent_id) {
      children_ids.push(child_id);
    }
    self._internal_check();
  }

  /// Unlink `child_id` from its parent, returns the old parent ID.
  pub fn remove_parent(&mut self, child_id: NodeId) -> Option<NodeId> {
    self._internal_check();
    let parent_id = self.parent.remove(&child_id)?;
    if let Some(children_ids) = self.children.get_mut(&parent_id) {
      children_ids.retain(|c| *c != child_id);
    }
    self._internal_check();
    Some(parent_id)
  }

  /// Forget a node that no longer has a parent or any children.
  pub fn remove_node(&mut self, id: NodeId) {
    debug_assert!(!self.parent.contains_key(&id));
    debug_assert!(self.children(id).is_empty());
    self.children.remove(&id);
    if self.root == id {
      self.root = INVALID_ROOT_ID;
    }
  }

  /// Whether `ancestor_id` is `id` itself or one of its ancestors.
  pub fn is_ancestor_or_self(&self, ancestor_id: NodeId, id: NodeId) -> bool {
    let mut current = Some(id);
    while let Some(c) = current {
      if c == ancestor_id {
        return true;
      }
      current = self.parent(c);
    }
    false
  }

  /// Collect `id` and all its descendants in pre-order.
  pub fn subtree(&self, id: NodeId) -> Vec<NodeId> {
    let mut result = vec![];
    let mut stack = vec![id];
    while let Some(c) = stack.pop() {
      result.push(c);
      stack.extend(self.children(c).iter().rev().copied());
    }
    result
  }
}
