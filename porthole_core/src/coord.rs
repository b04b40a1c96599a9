//! Cartesian coordinate system.
//!
//! Like most 2D drawing surfaces, the Y-axis is upside down compared with the
//! coordinate system in mathematics:
//!
//! ```text
//!  (left,top)
//!   (0,0)------------------(width,0)--------X
//!     |                         |
//!     |  Node                   |
//!     |                         |
//!   (0,height)-------------(width,height)
//!     |                    (right,bottom)
//!     Y
//! ```
//!
//! Every node owns a [`Coordinates`]: its top-left position is relative to
//! its parent's origin, and its own origin is the `(0,0)` of the local space
//! in which its children are placed, drawn and picked.

use geo::coord;
use geo::point;
use num_traits::ToPrimitive;

pub use geo::Point;
pub use geo::Rect;

/// Position that uses [`i32`] as internal type.
pub type IPos = Point<i32>;

/// Rectangle that uses [`i32`] as internal type.
pub type IRect = Rect<i32>;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
/// Position and size of a node, in its parent's local space.
///
/// NOTE: The size is fixed once a node is created, only the position can
/// change (i.e. dragging).
pub struct Coordinates {
  x: i32,
  y: i32,
  width: u32,
  height: u32,
}

impl Coordinates {
  pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
    Self {
      x,
      y,
      width,
      height,
    }
  }

  pub fn x(&self) -> i32 {
    self.x
  }

  pub fn y(&self) -> i32 {
    self.y
  }

  pub fn width(&self) -> u32 {
    self.width
  }

  pub fn height(&self) -> u32 {
    self.height
  }

  /// `(width, height)`.
  pub fn size(&self) -> (u32, u32) {
    (self.width, self.height)
  }

  pub fn set_x(&mut self, x: i32) {
    self.x = x;
  }

  pub fn set_y(&mut self, y: i32) {
    self.y = y;
  }

  /// Set both `x` and `y`.
  pub fn move_to(&mut self, x: i32, y: i32) {
    self.x = x;
    self.y = y;
  }

  /// Top-left position in parent's space.
  pub fn pos(&self) -> IPos {
    point!(x: self.x, y: self.y)
  }

  /// The shape in parent's space, `max` is exclusive.
  pub fn shape(&self) -> IRect {
    let right = self.x.saturating_add(clamp_i32(self.width));
    let bottom = self.y.saturating_add(clamp_i32(self.height));
    IRect::new(coord! {x: self.x, y: self.y}, coord! {x: right, y: bottom})
  }

  /// Whether a point in this node's *local* space is inside the half-open
  /// area `[0, width) x [0, height)`.
  pub fn contains(&self, x: i32, y: i32) -> bool {
    x >= 0
      && y >= 0
      && i64::from(x) < i64::from(self.width)
      && i64::from(y) < i64::from(self.height)
  }

  /// Center point in local space.
  pub fn center(&self) -> (f64, f64) {
    (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
  }
}

fn clamp_i32(value: u32) -> i32 {
  value.to_i32().unwrap_or(i32::MAX)
}

impl From<Coordinates> for IRect {
  fn from(coords: Coordinates) -> Self {
    coords.shape()
  }
}
