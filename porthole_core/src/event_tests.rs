use super::event::*;

use crate::prelude::*;

#[test]
fn parse1() {
  let actual = "down 10 20".parse::<PointerEvent>().unwrap();
  assert_eq!(actual, PointerEvent::down(10, 20));
  assert_eq!(actual.kind(), PointerKind::Down);
  assert_eq!(actual.button(), MouseButton::Left);

  let actual = "  move -3 7 right ".parse::<PointerEvent>().unwrap();
  assert_eq!(
    actual,
    PointerEvent::new(PointerKind::Move, -3, 7, MouseButton::Right)
  );

  let actual = "up 0 0 middle".parse::<PointerEvent>().unwrap();
  assert_eq!(actual.kind(), PointerKind::Up);
  assert_eq!(actual.button(), MouseButton::Middle);
}

#[test]
fn parse_failed1() {
  let inputs = [
    "",
    "down",
    "down 1",
    "down x 2",
    "press 1 2",
    "up 1 2 side",
    "up 1 2 left extra",
    "move 1.5 2",
  ];
  for input in inputs {
    let actual = input.parse::<PointerEvent>();
    assert!(
      matches!(actual, Err(TheErr::InvalidPointerEvent(_))),
      "input:{:?}",
      input
    );
  }
}

#[test]
fn display1() {
  let event = PointerEvent::new(PointerKind::Move, -3, 7, MouseButton::Right);
  assert_eq!(event.to_string(), "move -3 7 right");
  assert_eq!(PointerEvent::up(1, 2).to_string(), "up 1 2 left");

  // Printed events parse back to themselves.
  let actual = event.to_string().parse::<PointerEvent>().unwrap();
  assert_eq!(actual, event);
}

#[test]
fn relative_to1() {
  let event = PointerEvent::down(40, 30);
  let actual = event.relative_to(point!(x: 10, y: 20));
  assert_eq!(actual.pos(), point!(x: 30, y: 10));
  assert_eq!(actual.kind(), PointerKind::Down);
  assert_eq!(actual.button(), MouseButton::Left);

  let actual = event.relative_to(point!(x: -10, y: 50));
  assert_eq!(actual.pos(), point!(x: 50, y: -20));

  let actual = PointerEvent::moved(i32::MIN, 0).relative_to(point!(x: 1, y: 0));
  assert_eq!(actual.x(), i32::MIN);
}

#[test]
fn parse_script_line1() {
  assert!(parse_script_line("").is_none());
  assert!(parse_script_line("   ").is_none());
  assert!(parse_script_line("# drag the block").is_none());
  assert!(parse_script_line("  # indented comment").is_none());

  let actual = parse_script_line(" up 5 6\n").unwrap().unwrap();
  assert_eq!(actual, PointerEvent::up(5, 6));

  let actual = parse_script_line("jump 1 2").unwrap();
  assert!(actual.is_err());
}
