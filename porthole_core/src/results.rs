//! Errors and results.

use crate::ui::tree::NodeId;
use compact_str::CompactString;

// std::io {

/// [`std::io::Error`]
pub type IoErr = std::io::Error;

/// [`std::io::ErrorKind`]
pub type IoErrKind = std::io::ErrorKind;

/// [`std::io::Result`] with `T` if ok.
pub type IoResult<T> = std::io::Result<T>;

// std::io }

// thiserror {

/// All error codes.
#[derive(Debug, thiserror::Error)]
pub enum TheErr {
  // tree {
  #[error("node `{0}` not exist")]
  /// Node not found in the tree.
  NodeNotFound(NodeId),

  #[error("tree already has a root node `{0}`")]
  /// The root node can only be created once.
  RootAlreadyExists(NodeId),

  #[error("tree doesn't have a root node")]
  /// The tree is empty.
  NoRoot,

  #[error("node `{0}` already has parent `{1}`")]
  /// A node can only be owned by one parent.
  AlreadyHasParent(NodeId, NodeId),

  #[error("root node `{0}` cannot be a child")]
  /// The root node never has a parent.
  CannotAppendRoot(NodeId),

  #[error("appending node `{0}` under `{1}` creates a cycle")]
  /// The child is the parent itself, or one of its ancestors.
  CyclicAppend(NodeId, NodeId),

  #[error("single-child node `{0}` already has child `{1}`")]
  /// A single-child container can hold at most one child.
  SingleChildOccupied(NodeId, NodeId),

  #[error("root node `{0}` cannot be detached or removed")]
  /// The root node owns the whole tree.
  CannotRemoveRoot(NodeId),

  #[error("node IDs are exhausted")]
  /// No more unique node IDs can be allocated.
  NodeIdExhausted,
  // tree }

  // surface {
  #[error("image `{0}` not found")]
  /// Image reference is not resolvable by the drawing surface.
  ImageNotFound(CompactString),

  #[error("surface restore without a matching save")]
  /// The save/restore stack is unbalanced.
  SurfaceStackUnderflow,
  // surface }

  // interactor {
  #[error("failed to draw node `{0}`: {1}")]
  /// A self-draw implementation failed.
  Draw(NodeId, String),

  #[error("failed to pick node `{0}`: {1}")]
  /// A self-pick implementation failed.
  Pick(NodeId, String),
  // interactor }

  // event {
  #[error("invalid pointer event `{0}`")]
  /// Pointer event script line cannot be parsed.
  InvalidPointerEvent(String),
  // event }

  // io {
  #[error("io error: {0}")]
  /// I/O failure, i.e. reading the event script.
  Io(#[from] IoErr),
  // io }
}

/// [`Result`] with `T` if ok, [`TheErr`] if error.
pub type TheResult<T> = Result<T, TheErr>;

// thiserror }

#[macro_export]
macro_rules! bail {
  ($e:expr) => {
    return Err($e)
  };
}
