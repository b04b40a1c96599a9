//! Pointer events.

use crate::prelude::*;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Pointer event kind.
pub enum PointerKind {
  Down,
  Move,
  Up,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
/// Mouse button.
pub enum MouseButton {
  #[default]
  Left,
  Middle,
  Right,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Pointer event.
///
/// The position is always in the local space of the node receiving the
/// event, it's translated when passed down the tree.
pub struct PointerEvent {
  kind: PointerKind,
  x: i32,
  y: i32,
  button: MouseButton,
}

impl PointerEvent {
  pub fn new(kind: PointerKind, x: i32, y: i32, button: MouseButton) -> Self {
    Self { kind, x, y, button }
  }

  /// Left button down.
  pub fn down(x: i32, y: i32) -> Self {
    Self::new(PointerKind::Down, x, y, MouseButton::Left)
  }

  /// Move, with left button.
  pub fn moved(x: i32, y: i32) -> Self {
    Self::new(PointerKind::Move, x, y, MouseButton::Left)
  }

  /// Left button up.
  pub fn up(x: i32, y: i32) -> Self {
    Self::new(PointerKind::Up, x, y, MouseButton::Left)
  }

  pub fn kind(&self) -> PointerKind {
    self.kind
  }

  pub fn x(&self) -> i32 {
    self.x
  }

  pub fn y(&self) -> i32 {
    self.y
  }

  pub fn pos(&self) -> IPos {
    point!(x: self.x, y: self.y)
  }

  pub fn button(&self) -> MouseButton {
    self.button
  }

  /// Same event, with the position translated into a space whose origin is
  /// `origin` in the current space.
  pub fn relative_to(&self, origin: IPos) -> Self {
    Self {
      x: self.x.saturating_sub(origin.x()),
      y: self.y.saturating_sub(origin.y()),
      ..*self
    }
  }
}

impl fmt::Display for PointerEvent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let kind = match self.kind {
      PointerKind::Down => "down",
      PointerKind::Move => "move",
      PointerKind::Up => "up",
    };
    let button = match self.button {
      MouseButton::Left => "left",
      MouseButton::Middle => "middle",
      MouseButton::Right => "right",
    };
    write!(f, "{} {} {} {}", kind, self.x, self.y, button)
  }
}

impl FromStr for PointerEvent {
  type Err = TheErr;

  /// Parse one line of the pointer event script:
  ///
  /// ```text
  /// down|move|up X Y [left|middle|right]
  /// ```
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let invalid = || TheErr::InvalidPointerEvent(s.trim().to_string());

    let mut words = s.split_whitespace();
    let kind = match words.next().ok_or_else(invalid)? {
      "down" => PointerKind::Down,
      "move" => PointerKind::Move,
      "up" => PointerKind::Up,
      _ => bail!(invalid()),
    };
    let x = words
      .next()
      .and_then(|w| w.parse::<i32>().ok())
      .ok_or_else(invalid)?;
    let y = words
      .next()
      .and_then(|w| w.parse::<i32>().ok())
      .ok_or_else(invalid)?;
    let button = match words.next() {
      None | Some("left") => MouseButton::Left,
      Some("middle") => MouseButton::Middle,
      Some("right") => MouseButton::Right,
      Some(_) => bail!(invalid()),
    };
    if words.next().is_some() {
      bail!(invalid());
    }

    Ok(Self::new(kind, x, y, button))
  }
}

/// Parse one script line, returns `None` for blank lines and `#` comments.
pub fn parse_script_line(line: &str) -> Option<TheResult<PointerEvent>> {
  let line = line.trim();
  if line.is_empty() || line.starts_with('#') {
    None
  } else {
    Some(line.parse::<PointerEvent>())
  }
}
