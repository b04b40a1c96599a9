//! Canvas state, saved and restored with stack discipline.

use crate::constant::DEFAULT_INK;
use crate::prelude::*;
use crate::ui::canvas::command::Color;
use crate::ui::canvas::command::PathSegment;

#[derive(Debug, Clone, PartialEq)]
/// A clip shape in device space.
pub enum ClipShape {
  Rect(IRect),
  Circle { cx: f64, cy: f64, radius: f64 },
  /// Arbitrary path, only recorded.
  Path(Vec<PathSegment>),
}

impl ClipShape {
  /// Make a clip shape from the current path.
  ///
  /// A single rectangle or a single full arc is kept as its exact shape,
  /// everything else is kept as an opaque path.
  pub fn from_path(path: &[PathSegment]) -> Self {
    match path {
      [PathSegment::Rectangle(rect)] => ClipShape::Rect(*rect),
      [
        PathSegment::Arc {
          cx,
          cy,
          radius,
          start,
          end,
        },
      ] if (end - start).abs() >= std::f64::consts::TAU => ClipShape::Circle {
        cx: *cx,
        cy: *cy,
        radius: *radius,
      },
      _ => ClipShape::Path(path.to_vec()),
    }
  }

  /// Whether a device point is visible through this clip. Opaque paths are
  /// treated as fully visible.
  pub fn contains(&self, x: i32, y: i32) -> bool {
    match self {
      ClipShape::Rect(rect) => {
        x >= rect.min().x
          && y >= rect.min().y
          && x < rect.max().x
          && y < rect.max().y
      }
      ClipShape::Circle { cx, cy, radius } => {
        (f64::from(x) - cx).hypot(f64::from(y) - cy) <= *radius
      }
      ClipShape::Path(_) => true,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
/// The part of the canvas that is saved by `save` and restored by `restore`.
pub struct CanvasState {
  origin: IPos,
  clips: Vec<ClipShape>,
  fill_color: Color,
  stroke_color: Color,
}

impl Default for CanvasState {
  fn default() -> Self {
    Self {
      origin: point!(x: 0, y: 0),
      clips: vec![],
      fill_color: Color::new(DEFAULT_INK),
      stroke_color: Color::new(DEFAULT_INK),
    }
  }
}

impl CanvasState {
  /// Current origin in device space.
  pub fn origin(&self) -> IPos {
    self.origin
  }

  /// Active clips, the visible area is their intersection.
  pub fn clips(&self) -> &[ClipShape] {
    &self.clips
  }

  pub fn fill_color(&self) -> &Color {
    &self.fill_color
  }

  pub fn stroke_color(&self) -> &Color {
    &self.stroke_color
  }

  /// Whether a device point is visible through all the active clips.
  pub fn visible(&self, x: i32, y: i32) -> bool {
    self.clips.iter().all(|c| c.contains(x, y))
  }

  pub(crate) fn translate(&mut self, dx: i32, dy: i32) {
    self.origin = point!(
      x: self.origin.x().saturating_add(dx),
      y: self.origin.y().saturating_add(dy)
    );
  }

  pub(crate) fn push_clip(&mut self, clip: ClipShape) {
    self.clips.push(clip);
  }

  pub(crate) fn set_fill_color(&mut self, color: Color) {
    self.fill_color = color;
  }

  pub(crate) fn set_stroke_color(&mut self, color: Color) {
    self.stroke_color = color;
  }
}
