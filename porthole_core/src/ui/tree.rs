//! The interactor tree that owns all the nodes.

pub mod internal;

use crate::event::PointerEvent;
use crate::prelude::*;
use crate::ui::canvas::Surface;
use crate::ui::defaults::Defaults;
use crate::ui::draw;
use crate::ui::interactor::Interactor;
use crate::ui::pick;
use crate::ui::pick::PickList;
pub use internal::*;

#[derive(Debug, Default)]
/// The interactor tree (scene graph).
///
/// The tree is an arena: each node is addressed by a stable [`NodeId`], the
/// parent stores the ordered list of its children, and each child stores its
/// parent ID as a non-owning back reference. The tree has one root node, all
/// other attached nodes are the root node's descendants.
///
/// # Terms
///
/// * Parent: The parent node.
/// * Child: The child node.
/// * Ancestor: Either the parent, or the parent of some ancestor of the node.
/// * Descendant: Either the child, or the child of some descendant of the node.
/// * Detached: A node that is neither the root nor attached under a parent.
///   Detached nodes are never drawn or picked.
///
/// # Ownership
///
/// Parent owns its children:
///
/// * A node has exactly one parent (except the root and detached nodes), and
///   it appears in its parent's children exactly once.
/// * Children will be destroyed when their parent is removed.
/// * The tree is acyclic, appending a node under one of its own descendants
///   is refused.
///
/// # Priority
///
/// Children are drawn in their sequence order, i.e. the last child is drawn
/// on top of its siblings. Pick follows the same order, so the last node
/// appended to a [`PickList`] is the topmost one.
pub struct Tree {
  // Nodes collection, maps from node ID to its node struct.
  nodes: FoldMap<NodeId, Inode>,

  // Parent/children relationships.
  relation: Relation,
}

arc_mutex_ptr!(Tree);

// Node {
impl Tree {
  /// Make an empty tree, the root is created later with
  /// [`add_root`](Tree::add_root).
  pub fn new() -> Self {
    Self {
      nodes: FoldMap::default(),
      relation: Relation::new(),
    }
  }

  fn _internal_check(&self) {
    debug_assert_eq!(self.nodes.len(), self.relation.len());
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  pub fn contains(&self, id: NodeId) -> bool {
    self.nodes.contains_key(&id)
  }

  /// Root node ID, or `None` if root is not created yet.
  pub fn root_id(&self) -> Option<NodeId> {
    self.relation.root()
  }

  /// Parent node ID, or `None` for the root and detached nodes.
  pub fn parent(&self, id: NodeId) -> Option<NodeId> {
    self.relation.parent(id)
  }

  /// Children node IDs, in drawing order.
  pub fn children(&self, id: NodeId) -> &[NodeId] {
    self.relation.children(id)
  }

  /// All ancestors of a node, from its parent up to the top.
  pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
    let mut result = vec![];
    let mut current = self.parent(id);
    while let Some(c) = current {
      result.push(c);
      current = self.parent(c);
    }
    result
  }

  /// Whether a node is the root or a descendant of the root.
  pub fn is_attached(&self, id: NodeId) -> bool {
    match self.root_id() {
      Some(root_id) => self.relation.is_ancestor_or_self(root_id, id),
      None => false,
    }
  }

  pub fn inode(&self, id: NodeId) -> Option<&Inode> {
    self.nodes.get(&id)
  }

  pub fn inode_mut(&mut self, id: NodeId) -> Option<&mut Inode> {
    self.nodes.get_mut(&id)
  }

  /// Get the interactor by its `id`.
  pub fn node(&self, id: NodeId) -> Option<&dyn Interactor> {
    self.nodes.get(&id).map(Inode::value)
  }

  /// Get the mutable interactor by its `id`.
  pub fn node_mut(&mut self, id: NodeId) -> Option<&mut dyn Interactor> {
    self.nodes.get_mut(&id).map(Inode::value_mut)
  }

  /// Get the interactor as its concrete type.
  pub fn downcast_ref<T: Interactor + 'static>(&self, id: NodeId) -> Option<&T> {
    self.node(id)?.as_any().downcast_ref::<T>()
  }

  /// Get the mutable interactor as its concrete type.
  pub fn downcast_mut<T: Interactor + 'static>(
    &mut self,
    id: NodeId,
  ) -> Option<&mut T> {
    self.node_mut(id)?.as_any_mut().downcast_mut::<T>()
  }

  pub fn coordinates(&self, id: NodeId) -> Option<&Coordinates> {
    self.nodes.get(&id).map(Inode::coordinates)
  }

  pub fn coordinates_mut(&mut self, id: NodeId) -> Option<&mut Coordinates> {
    self.nodes.get_mut(&id).map(Inode::coordinates_mut)
  }

  pub fn manipulator(&self, id: NodeId) -> Option<Manipulator> {
    self.nodes.get(&id).map(Inode::manipulator)
  }

  /// Accumulated position of `id` inside the local space of `ancestor_id`.
  ///
  /// The ancestor's own position is not included, i.e. for a direct child
  /// this is the child's `(x, y)`. Returns `None` if `ancestor_id` is not an
  /// ancestor of `id` (or `id` itself, which gives `(0, 0)`).
  pub fn origin_in(&self, ancestor_id: NodeId, id: NodeId) -> Option<IPos> {
    let mut x = 0_i32;
    let mut y = 0_i32;
    let mut current = id;
    while current != ancestor_id {
      let coords = self.coordinates(current)?;
      x = x.saturating_add(coords.x());
      y = y.saturating_add(coords.y());
      current = self.parent(current)?;
    }
    Some(point!(x: x, y: y))
  }

  /// Iterates all attached nodes in pre-order that starts from the root.
  pub fn iter(&self) -> TreeIter<'_> {
    TreeIter::new(self, self.root_id())
  }
}
// Node }

// Insert/Remove {
impl Tree {
  fn new_inode<T>(
    &mut self,
    coords: Coordinates,
    manipulator: Manipulator,
    value: T,
  ) -> TheResult<NodeId>
  where
    T: Interactor + 'static,
  {
    let inode = Inode::new(coords, manipulator, Box::new(value))?;
    let id = inode.id();
    self.relation.add_node(id);
    self.nodes.insert(id, inode);
    self._internal_check();
    Ok(id)
  }

  /// Create the root node, which is the first attached node in the tree.
  /// Returns the root node ID.
  pub fn add_root<T>(&mut self, coords: Coordinates, value: T) -> TheResult<NodeId>
  where
    T: Interactor + 'static,
  {
    if let Some(root_id) = self.root_id() {
      bail!(TheErr::RootAlreadyExists(root_id));
    }
    let inode = Inode::new(coords, Manipulator::Multi, Box::new(value))?;
    let id = inode.id();
    self.relation.add_root(id);
    self.nodes.insert(id, inode);
    self._internal_check();
    trace!("Added root node {:?}", id);
    Ok(id)
  }

  /// Create a detached multi-child node, it can be attached later with
  /// [`append_child`](Tree::append_child).
  pub fn new_detached<T>(
    &mut self,
    coords: Coordinates,
    value: T,
  ) -> TheResult<NodeId>
  where
    T: Interactor + 'static,
  {
    self.new_inode(coords, Manipulator::Multi, value)
  }

  /// Same with [`new_detached`](Tree::new_detached), but the node accepts at
  /// most one child.
  pub fn new_detached_single<T>(
    &mut self,
    coords: Coordinates,
    value: T,
  ) -> TheResult<NodeId>
  where
    T: Interactor + 'static,
  {
    self.new_inode(coords, Manipulator::Single, value)
  }

  /// Create a new multi-child node and append it under a parent node.
  /// Returns the child node ID.
  ///
  /// NOTE: If the parent refuses the child, the new node is dropped and the
  /// tree is not changed.
  pub fn insert<T>(
    &mut self,
    parent_id: NodeId,
    coords: Coordinates,
    value: T,
  ) -> TheResult<NodeId>
  where
    T: Interactor + 'static,
  {
    self.insert_with(parent_id, coords, Manipulator::Multi, value)
  }

  /// Same with [`insert`](Tree::insert), but the new node accepts at most one
  /// child.
  pub fn insert_single<T>(
    &mut self,
    parent_id: NodeId,
    coords: Coordinates,
    value: T,
  ) -> TheResult<NodeId>
  where
    T: Interactor + 'static,
  {
    self.insert_with(parent_id, coords, Manipulator::Single, value)
  }

  fn insert_with<T>(
    &mut self,
    parent_id: NodeId,
    coords: Coordinates,
    manipulator: Manipulator,
    value: T,
  ) -> TheResult<NodeId>
  where
    T: Interactor + 'static,
  {
    self.check_parent(parent_id)?;
    let id = self.new_inode(coords, manipulator, value)?;
    if let Err(e) = self.append_child(parent_id, id) {
      self.relation.remove_node(id);
      self.nodes.remove(&id);
      self._internal_check();
      return Err(e);
    }
    Ok(id)
  }

  fn check_parent(&self, parent_id: NodeId) -> TheResult<()> {
    let manipulator = self
      .manipulator(parent_id)
      .ok_or(TheErr::NodeNotFound(parent_id))?;
    let children_ids = self.children(parent_id);
    if !manipulator.accepts(children_ids.len()) {
      bail!(TheErr::SingleChildOccupied(parent_id, children_ids[0]));
    }
    Ok(())
  }

  /// Append a node to the end of a parent's children.
  ///
  /// It fails without changing the tree when:
  ///
  /// * Either node doesn't exist.
  /// * The child is the root, or it already has a parent.
  /// * The child is the parent itself or one of its ancestors.
  /// * The parent is a single-child node that already has a child.
  pub fn append_child(&mut self, parent_id: NodeId, child_id: NodeId) -> TheResult<()> {
    self._internal_check();
    if !self.contains(child_id) {
      bail!(TheErr::NodeNotFound(child_id));
    }
    self.check_parent(parent_id)?;
    if self.root_id() == Some(child_id) {
      bail!(TheErr::CannotAppendRoot(child_id));
    }
    if let Some(old_parent_id) = self.parent(child_id) {
      bail!(TheErr::AlreadyHasParent(child_id, old_parent_id));
    }
    if self.relation.is_ancestor_or_self(child_id, parent_id) {
      bail!(TheErr::CyclicAppend(child_id, parent_id));
    }

    self.relation.add_child(parent_id, child_id);
    trace!("Appended node {:?} under {:?}", child_id, parent_id);
    Ok(())
  }

  /// Unlink a node (and its descendants) from its parent, the detached
  /// subtree is kept in the tree and can be appended again.
  ///
  /// NOTE: Detaching a node that has no parent does nothing.
  pub fn detach(&mut self, id: NodeId) -> TheResult<()> {
    if !self.contains(id) {
      bail!(TheErr::NodeNotFound(id));
    }
    if self.root_id() == Some(id) {
      bail!(TheErr::CannotRemoveRoot(id));
    }
    if let Some(parent_id) = self.relation.remove_parent(id) {
      trace!("Detached node {:?} from {:?}", id, parent_id);
    }
    Ok(())
  }

  /// Remove a node and all its descendants from the tree.
  ///
  /// Returns the removed interactors in pre-order, i.e. the first one is the
  /// node itself.
  pub fn remove(&mut self, id: NodeId) -> TheResult<Vec<Box<dyn Interactor>>> {
    self.detach(id)?;

    let subtree = self.relation.subtree(id);
    // Unlink bottom-up so every node is childless when it's forgotten.
    for c in subtree.iter().rev() {
      self.relation.remove_parent(*c);
      self.relation.remove_node(*c);
    }
    let removed = subtree
      .iter()
      .filter_map(|c| self.nodes.remove(c))
      .map(Inode::into_value)
      .collect::<Vec<_>>();
    self._internal_check();
    trace!("Removed {} node(s) under {:?}", removed.len(), id);
    Ok(removed)
  }
}
// Insert/Remove }

// Draw/Pick {
impl Tree {
  /// Draw the whole tree from the root, the surface origin must be the root's
  /// origin.
  pub fn draw(&self, surface: &mut dyn Surface, defaults: &Defaults) -> TheResult<()> {
    let root_id = self.root_id().ok_or(TheErr::NoRoot)?;
    draw::draw(self, root_id, surface, defaults)
  }

  /// Pick the whole tree from the root, the event is in the root's local
  /// space.
  pub fn pick(
    &self,
    event: &PointerEvent,
    picks: Option<&mut PickList>,
    defaults: &Defaults,
  ) -> TheResult<bool> {
    let root_id = self.root_id().ok_or(TheErr::NoRoot)?;
    pick::pick(self, root_id, event, picks, defaults)
  }
}
// Draw/Pick }

#[derive(Debug)]
/// Iterate all the attached tree nodes in pre-order.
///
/// For each node, it first visits the node itself, then visits all its
/// children by their order. This also follows the order when drawing the
/// tree.
pub struct TreeIter<'a> {
  tree: &'a Tree,
  stack: Vec<NodeId>,
}

impl Iterator for TreeIter<'_> {
  type Item = NodeId;

  fn next(&mut self) -> Option<Self::Item> {
    let id = self.stack.pop()?;
    self
      .stack
      .extend(self.tree.children(id).iter().rev().copied());
    Some(id)
  }
}

impl<'a> TreeIter<'a> {
  pub fn new(tree: &'a Tree, start_node_id: Option<NodeId>) -> Self {
    let mut stack = vec![];
    if let Some(id) = start_node_id {
      stack.push(id);
    }
    Self { tree, stack }
  }
}
