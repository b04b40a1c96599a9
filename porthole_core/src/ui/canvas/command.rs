//! Commands recorded by the canvas.

use crate::prelude::*;
use compact_str::CompactString;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Color token, i.e. `#eee9e9` or `red`. The canvas never interprets it.
pub struct Color(CompactString);

impl Color {
  pub fn new(value: &str) -> Self {
    Self(CompactString::new(value))
  }

  pub fn as_str(&self) -> &str {
    self.0.as_str()
  }
}

impl From<&str> for Color {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[derive(Debug, Clone, PartialEq)]
/// A drawing surface call, the coordinates are the ones passed by the caller,
/// i.e. in the local space of the node that is drawing.
pub enum CanvasCommand {
  Save,
  Restore,
  Translate { dx: i32, dy: i32 },
  BeginPath,
  Clip,
  SetFillColor(Color),
  SetStrokeColor(Color),
  Rectangle { x: i32, y: i32, width: u32, height: u32 },
  FillRectangle { x: i32, y: i32, width: u32, height: u32 },
  MoveTo { x: i32, y: i32 },
  LineTo { x: i32, y: i32 },
  Arc { cx: f64, cy: f64, radius: f64, start: f64, end: f64 },
  Stroke,
  Fill,
  DrawImage { id: CompactString, dx: i32, dy: i32 },
}

impl CanvasCommand {
  /// Whether this command puts pixels on the surface.
  pub fn is_paint(&self) -> bool {
    matches!(
      self,
      CanvasCommand::FillRectangle { .. }
        | CanvasCommand::Stroke
        | CanvasCommand::Fill
        | CanvasCommand::DrawImage { .. }
    )
  }
}

#[derive(Debug, Clone, PartialEq)]
/// A path segment in device space.
pub enum PathSegment {
  Rectangle(IRect),
  MoveTo(IPos),
  LineTo(IPos),
  Arc {
    cx: f64,
    cy: f64,
    radius: f64,
    start: f64,
    end: f64,
  },
}
