use super::porthole::*;

use crate::prelude::*;
use crate::tests::log::init as test_log_init;
use crate::tests::tree::Painter;
use crate::tests::tree::make_tree_with_porthole;
use crate::ui::canvas::Canvas;
use crate::ui::canvas::CanvasCommand;
use crate::ui::canvas::ClipShape;
use crate::ui::canvas::Color;
use crate::ui::defaults::Defaults;
use crate::ui::tree::Tree;
use crate::ui::widget::Container;

#[test]
fn circle1() {
  let coords = Coordinates::new(5, 5, 80, 80);
  assert_eq!(Porthole::circle(&coords), (40.0, 40.0, 40.0));
}

#[test]
fn draw1() {
  test_log_init();
  let mut tree = Tree::new();
  let root_id = tree
    .add_root(Coordinates::new(0, 0, 300, 300), Container::new())
    .unwrap();
  let porthole_id = tree
    .insert_single(
      root_id,
      Coordinates::new(100, 100, 80, 80),
      Porthole::with_border(Color::new("black")),
    )
    .unwrap();
  tree
    .insert(porthole_id, Coordinates::new(-10, -10, 100, 100), Painter::new("child"))
    .unwrap();

  let mut canvas = Canvas::new(300, 300);
  tree.draw(&mut canvas, &Defaults::default()).unwrap();
  assert_eq!(canvas.depth(), 0);

  // The child is painted inside the circular clip.
  let fill = canvas
    .entries()
    .iter()
    .find(|e| matches!(e.command, CanvasCommand::FillRectangle { .. }))
    .unwrap();
  assert_eq!(fill.state.origin(), point!(x: 90, y: 90));
  assert_eq!(
    fill.state.clips(),
    &[ClipShape::Circle {
      cx: 140.0,
      cy: 140.0,
      radius: 40.0
    }]
  );
  assert!(fill.state.visible(140, 140));
  assert!(!fill.state.visible(101, 101));

  // The border is stroked outside the clip.
  let stroke = canvas
    .entries()
    .iter()
    .find(|e| e.command == CanvasCommand::Stroke)
    .unwrap();
  assert!(stroke.state.clips().is_empty());
  assert_eq!(stroke.state.stroke_color().as_str(), "black");
}

#[test]
fn draw_without_child1() {
  let mut tree = Tree::new();
  let root_id = tree
    .add_root(Coordinates::new(0, 0, 300, 300), Container::new())
    .unwrap();
  tree
    .insert_single(root_id, Coordinates::new(0, 0, 80, 80), Porthole::new())
    .unwrap();
  let mut canvas = Canvas::new(300, 300);
  tree.draw(&mut canvas, &Defaults::default()).unwrap();
  assert_eq!(canvas.depth(), 0);
  assert!(!canvas.entries().iter().any(|e| e.command.is_paint()));
}

#[test]
fn single_child1() {
  let (mut tree, _root_id, porthole_id, _child_id) = make_tree_with_porthole();
  let actual =
    tree.insert(porthole_id, Coordinates::new(0, 0, 10, 10), Container::new());
  assert!(matches!(actual, Err(TheErr::SingleChildOccupied(_, _))));
}
