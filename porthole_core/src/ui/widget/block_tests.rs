use super::block::*;

use crate::prelude::*;
use crate::ui::canvas::Canvas;
use crate::ui::canvas::CanvasCommand;
use crate::ui::canvas::Color;
use crate::ui::defaults::Defaults;
use crate::ui::interactor::Interactor;
use crate::ui::tree::Tree;
use crate::ui::widget::Picture;
use crate::ui::widget::RootContainer;

#[test]
fn capabilities1() {
  let mut block = Block::new(Color::new("red"));
  assert_eq!(block.name(), "Block");
  assert!(block.as_draws_self().is_some());
  assert!(block.as_picks_self().is_none());
  assert!(block.as_clicks_self().is_some());
  assert!(block.as_drags_self().is_some());
  assert!(block.as_mouse_move_self().is_some());
  assert!(block.as_mouse_down_self().is_none());
  assert!(block.as_mouse_up_self().is_none());
}

#[test]
fn drag1() {
  let mut block = Block::new(Color::new("red"));
  let mut coords = Coordinates::new(10, 20, 30, 30);
  let draggable = block.as_drags_self().unwrap();
  draggable.drag_start(&mut coords);
  draggable.drag(&mut coords, 5, 5);
  // Offsets are absolute, replaying a move is idempotent.
  draggable.drag(&mut coords, 5, 5);
  assert_eq!(coords.pos(), point!(x: 15, y: 25));
  draggable.drag(&mut coords, -10, 0);
  assert_eq!(coords.pos(), point!(x: 0, y: 20));
  draggable.drag_end(&mut coords);
  assert!(!block.is_dragging());
  assert_eq!(coords.size(), (30, 30));
}

#[test]
fn click1() {
  let mut block = Block::new(Color::new("red"));
  block.as_clicks_self().unwrap().click();
  block.as_clicks_self().unwrap().click();
  assert_eq!(block.clicks(), 2);
}

#[test]
fn draw1() {
  let mut tree = Tree::new();
  let root_id = tree
    .add_root(
      Coordinates::new(0, 0, 100, 100),
      RootContainer::new(Color::new("white")),
    )
    .unwrap();
  let block_id = tree
    .insert(
      root_id,
      Coordinates::new(10, 10, 20, 20),
      Block::new(Color::new("red")),
    )
    .unwrap();
  tree
    .insert(block_id, Coordinates::new(1, 1, 5, 5), Picture::new("moon"))
    .unwrap();

  let mut canvas = Canvas::new(100, 100);
  canvas.register_image("moon", 5, 5);
  tree.draw(&mut canvas, &Defaults::default()).unwrap();

  let paints = canvas
    .entries()
    .iter()
    .filter(|e| e.command.is_paint())
    .map(|e| (e.command.clone(), e.state.origin()))
    .collect::<Vec<_>>();
  assert_eq!(paints.len(), 3);
  assert_eq!(
    paints[0].0,
    CanvasCommand::FillRectangle {
      x: 0,
      y: 0,
      width: 100,
      height: 100
    }
  );
  assert_eq!(paints[1].1, point!(x: 10, y: 10));
  assert!(matches!(paints[2].0, CanvasCommand::DrawImage { .. }));
  assert_eq!(paints[2].1, point!(x: 11, y: 11));
}

#[test]
fn picture_missing1() {
  let mut tree = Tree::new();
  let root_id = tree
    .add_root(Coordinates::new(0, 0, 100, 100), RootContainer::default())
    .unwrap();
  tree
    .insert(root_id, Coordinates::new(0, 0, 5, 5), Picture::new("sun"))
    .unwrap();

  let mut canvas = Canvas::new(100, 100);
  let actual = tree.draw(&mut canvas, &Defaults::default());
  assert!(matches!(actual, Err(TheErr::ImageNotFound(id)) if id == "sun"));
  assert_eq!(canvas.depth(), 0);
}
