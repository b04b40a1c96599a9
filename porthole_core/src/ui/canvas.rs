//! Drawing surface.
//!
//! The engine never rasterizes, it only talks to a [`Surface`]. The bundled
//! [`Canvas`] is a recording surface: it keeps every command of the current
//! frame together with the state (origin, clips, colors) it was issued in.

use crate::prelude::*;
use compact_str::CompactString;
use std::ops::Deref;
use std::ops::DerefMut;

// Re-export
pub use command::*;
pub use state::*;

pub mod command;
pub mod state;

/// The abstract 2D drawing surface.
///
/// The surface has a current origin (changed by [`translate`]), a current
/// clip and current colors. [`save`] pushes all of them onto a stack,
/// [`restore`] pops them back.
///
/// [`translate`]: Surface::translate
/// [`save`]: Surface::save
/// [`restore`]: Surface::restore
pub trait Surface {
  fn save(&mut self);

  /// Fails with [`TheErr::SurfaceStackUnderflow`] when there's no matching
  /// save.
  fn restore(&mut self) -> TheResult<()>;

  fn translate(&mut self, dx: i32, dy: i32);

  fn begin_path(&mut self);

  /// Intersect the current clip with the current path.
  fn clip(&mut self);

  fn set_fill_color(&mut self, color: &Color);

  fn set_stroke_color(&mut self, color: &Color);

  fn rectangle(&mut self, x: i32, y: i32, width: u32, height: u32);

  fn fill_rectangle(&mut self, x: i32, y: i32, width: u32, height: u32);

  fn move_to(&mut self, x: i32, y: i32);

  fn line_to(&mut self, x: i32, y: i32);

  /// Angles are in radians.
  fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64);

  fn stroke(&mut self);

  fn fill(&mut self);

  /// Draw a registered image with its top-left corner at `(dx, dy)`.
  fn draw_image_by_id(&mut self, id: &str, dx: i32, dy: i32) -> TheResult<()>;
}

/// Scoped save/restore.
///
/// It saves the surface when created and restores it when dropped, so the
/// surface state is balanced on every exit path, including `?` and panics.
pub struct SurfaceGuard<'a> {
  surface: &'a mut dyn Surface,
}

impl<'a> SurfaceGuard<'a> {
  pub fn new(surface: &'a mut dyn Surface) -> Self {
    surface.save();
    Self { surface }
  }
}

impl<'a> Deref for SurfaceGuard<'a> {
  type Target = dyn Surface + 'a;

  fn deref(&self) -> &Self::Target {
    &*self.surface
  }
}

impl<'a> DerefMut for SurfaceGuard<'a> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut *self.surface
  }
}

impl Drop for SurfaceGuard<'_> {
  fn drop(&mut self) {
    if let Err(e) = self.surface.restore() {
      error!("Failed to restore surface:{:?}", e);
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
/// A recorded command, with the canvas state right after it's applied.
pub struct CanvasEntry {
  pub command: CanvasCommand,
  pub state: CanvasState,
}

#[derive(Debug, Clone)]
/// Recording canvas.
///
/// It records all the commands of the current frame, and keeps the last
/// finished frame as a screenshot. Starting a new frame resets the state
/// stack, the path and the origin, registered images are kept.
pub struct Canvas {
  width: u32,
  height: u32,

  state: CanvasState,
  stack: Vec<CanvasState>,
  path: Vec<PathSegment>,

  entries: Vec<CanvasEntry>,
  prev_entries: Vec<CanvasEntry>,
  frame_count: usize,

  // Maps image ID to its size.
  images: FoldMap<CompactString, (u32, u32)>,
}

arc_mutex_ptr!(Canvas);

impl Canvas {
  pub fn new(width: u32, height: u32) -> Self {
    Self {
      width,
      height,
      state: CanvasState::default(),
      stack: vec![],
      path: vec![],
      entries: vec![],
      prev_entries: vec![],
      frame_count: 0,
      images: FoldMap::default(),
    }
  }

  pub fn width(&self) -> u32 {
    self.width
  }

  pub fn height(&self) -> u32 {
    self.height
  }

  // Frame {

  /// Finish the current frame and start a new one.
  pub fn begin_frame(&mut self) {
    if !self.stack.is_empty() {
      warn!(
        "Frame {} finished with {} unbalanced save(s)",
        self.frame_count,
        self.stack.len()
      );
    }
    self.prev_entries = std::mem::take(&mut self.entries);
    self.state = CanvasState::default();
    self.stack.clear();
    self.path.clear();
    self.frame_count += 1;
  }

  /// How many frames have been started.
  pub fn frame_count(&self) -> usize {
    self.frame_count
  }

  /// Current frame entries.
  pub fn entries(&self) -> &[CanvasEntry] {
    &self.entries
  }

  /// Current frame commands.
  pub fn commands(&self) -> Vec<&CanvasCommand> {
    self.entries.iter().map(|e| &e.command).collect()
  }

  /// Previous frame entries.
  pub fn prev_entries(&self) -> &[CanvasEntry] {
    &self.prev_entries
  }

  /// Current state.
  pub fn state(&self) -> &CanvasState {
    &self.state
  }

  /// Current save/restore stack depth.
  pub fn depth(&self) -> usize {
    self.stack.len()
  }

  // Frame }

  // Images {

  /// Register an image that can be drawn with
  /// [`draw_image_by_id`](Surface::draw_image_by_id).
  pub fn register_image(&mut self, id: &str, width: u32, height: u32) {
    self.images.insert(CompactString::new(id), (width, height));
  }

  /// Image size, or `None` if the image is not registered.
  pub fn image_size(&self, id: &str) -> Option<(u32, u32)> {
    self.images.get(id).copied()
  }

  // Images }

  fn record(&mut self, command: CanvasCommand) {
    self.entries.push(CanvasEntry {
      command,
      state: self.state.clone(),
    });
  }

  // Maps a local point into device space.
  fn device(&self, x: i32, y: i32) -> IPos {
    let origin = self.state.origin();
    point!(
      x: origin.x().saturating_add(x),
      y: origin.y().saturating_add(y)
    )
  }

  fn device_rect(&self, x: i32, y: i32, width: u32, height: u32) -> IRect {
    let pos = self.device(x, y);
    Coordinates::new(pos.x(), pos.y(), width, height).shape()
  }
}

impl Surface for Canvas {
  fn save(&mut self) {
    self.stack.push(self.state.clone());
    self.record(CanvasCommand::Save);
  }

  fn restore(&mut self) -> TheResult<()> {
    match self.stack.pop() {
      Some(state) => {
        self.state = state;
        self.record(CanvasCommand::Restore);
        Ok(())
      }
      None => bail!(TheErr::SurfaceStackUnderflow),
    }
  }

  fn translate(&mut self, dx: i32, dy: i32) {
    self.state.translate(dx, dy);
    self.record(CanvasCommand::Translate { dx, dy });
  }

  fn begin_path(&mut self) {
    self.path.clear();
    self.record(CanvasCommand::BeginPath);
  }

  fn clip(&mut self) {
    self.state.push_clip(ClipShape::from_path(&self.path));
    self.record(CanvasCommand::Clip);
  }

  fn set_fill_color(&mut self, color: &Color) {
    self.state.set_fill_color(color.clone());
    self.record(CanvasCommand::SetFillColor(color.clone()));
  }

  fn set_stroke_color(&mut self, color: &Color) {
    self.state.set_stroke_color(color.clone());
    self.record(CanvasCommand::SetStrokeColor(color.clone()));
  }

  fn rectangle(&mut self, x: i32, y: i32, width: u32, height: u32) {
    let rect = self.device_rect(x, y, width, height);
    self.path.push(PathSegment::Rectangle(rect));
    self.record(CanvasCommand::Rectangle {
      x,
      y,
      width,
      height,
    });
  }

  fn fill_rectangle(&mut self, x: i32, y: i32, width: u32, height: u32) {
    self.record(CanvasCommand::FillRectangle {
      x,
      y,
      width,
      height,
    });
  }

  fn move_to(&mut self, x: i32, y: i32) {
    let pos = self.device(x, y);
    self.path.push(PathSegment::MoveTo(pos));
    self.record(CanvasCommand::MoveTo { x, y });
  }

  fn line_to(&mut self, x: i32, y: i32) {
    let pos = self.device(x, y);
    self.path.push(PathSegment::LineTo(pos));
    self.record(CanvasCommand::LineTo { x, y });
  }

  fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
    let origin = self.state.origin();
    self.path.push(PathSegment::Arc {
      cx: cx + f64::from(origin.x()),
      cy: cy + f64::from(origin.y()),
      radius,
      start,
      end,
    });
    self.record(CanvasCommand::Arc {
      cx,
      cy,
      radius,
      start,
      end,
    });
  }

  fn stroke(&mut self) {
    self.record(CanvasCommand::Stroke);
  }

  fn fill(&mut self) {
    self.record(CanvasCommand::Fill);
  }

  fn draw_image_by_id(&mut self, id: &str, dx: i32, dy: i32) -> TheResult<()> {
    if !self.images.contains_key(id) {
      bail!(TheErr::ImageNotFound(CompactString::new(id)));
    }
    self.record(CanvasCommand::DrawImage {
      id: CompactString::new(id),
      dx,
      dy,
    });
    Ok(())
  }
}
