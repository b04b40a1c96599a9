use super::dispatch::*;

use crate::event::PointerEvent;
use crate::prelude::*;
use crate::tests::log::init as test_log_init;
use crate::tests::tree::Probe;
use crate::tests::tree::calls;
use crate::tests::tree::make_call_log;
use crate::tests::tree::make_tree_with_probes;
use crate::ui::canvas::Color;
use crate::ui::defaults::Defaults;
use crate::ui::tree::Tree;
use crate::ui::widget::Block;

fn handle_all(
  dispatch: &mut MouseDispatch,
  tree: &mut Tree,
  events: &[PointerEvent],
) {
  let defaults = Defaults::default();
  for event in events {
    dispatch.handle(tree, &defaults, event).unwrap();
  }
}

#[test]
fn click1() {
  test_log_init();
  let log = make_call_log();
  let (mut tree, _root_id, probe_id, _listener_id) = make_tree_with_probes(&log);
  let mut dispatch = MouseDispatch::new();

  handle_all(&mut dispatch, &mut tree, &[PointerEvent::down(100, 100)]);
  assert_eq!(
    dispatch.state(),
    DispatchState::Pressed {
      node: probe_id,
      anchor: point!(x: 100, y: 100)
    }
  );

  handle_all(&mut dispatch, &mut tree, &[PointerEvent::up(100, 100)]);
  assert_eq!(dispatch.state(), DispatchState::Idle);
  assert_eq!(calls(&log), vec!["probe:mouse_down 50 50", "probe:click"]);
  assert_eq!(tree.coordinates(probe_id).unwrap().pos(), point!(x: 50, y: 50));
}

#[test]
fn click_outside1() {
  test_log_init();
  let log = make_call_log();
  let (mut tree, _root_id, _probe_id, _listener_id) = make_tree_with_probes(&log);
  let mut dispatch = MouseDispatch::new();

  // Released outside of the pressed node, it's not a click.
  handle_all(
    &mut dispatch,
    &mut tree,
    &[PointerEvent::down(100, 100), PointerEvent::up(250, 250)],
  );
  assert_eq!(dispatch.state(), DispatchState::Idle);
  assert_eq!(
    calls(&log),
    vec!["probe:mouse_down 50 50", "probe:mouse_up 200 200"]
  );
}

#[test]
fn drag1() {
  test_log_init();
  let log = make_call_log();
  let (mut tree, _root_id, probe_id, _listener_id) = make_tree_with_probes(&log);
  let mut dispatch = MouseDispatch::new();

  handle_all(
    &mut dispatch,
    &mut tree,
    &[PointerEvent::down(100, 100), PointerEvent::moved(110, 105)],
  );
  assert_eq!(
    dispatch.state(),
    DispatchState::Dragging {
      node: probe_id,
      anchor: point!(x: 100, y: 100)
    }
  );
  assert_eq!(tree.coordinates(probe_id).unwrap().pos(), point!(x: 60, y: 55));

  // Offsets are relative to the pressed position, not the previous move.
  handle_all(
    &mut dispatch,
    &mut tree,
    &[
      PointerEvent::moved(120, 90),
      PointerEvent::moved(120, 90),
      PointerEvent::up(120, 90),
    ],
  );
  assert_eq!(dispatch.state(), DispatchState::Idle);
  assert_eq!(tree.coordinates(probe_id).unwrap().pos(), point!(x: 70, y: 40));
  assert_eq!(
    calls(&log),
    vec![
      "probe:mouse_down 50 50",
      "probe:drag_start",
      "probe:drag 10 5",
      "probe:drag 20 -10",
      "probe:drag 20 -10",
      "probe:drag_end",
    ]
  );
}

#[test]
fn listener1() {
  test_log_init();
  let log = make_call_log();
  let (mut tree, _root_id, _probe_id, listener_id) = make_tree_with_probes(&log);
  let mut dispatch = MouseDispatch::new();

  // The listener is at (60,60) in root's space, it's topmost there.
  handle_all(&mut dispatch, &mut tree, &[PointerEvent::down(65, 65)]);
  assert_eq!(dispatch.state().node(), Some(listener_id));

  // Not draggable, moves are forwarded while pressed.
  handle_all(&mut dispatch, &mut tree, &[PointerEvent::moved(70, 68)]);
  assert_eq!(dispatch.state().node(), Some(listener_id));

  // Not clickable, gets a mouse up instead.
  handle_all(&mut dispatch, &mut tree, &[PointerEvent::up(70, 68)]);
  assert_eq!(dispatch.state(), DispatchState::Idle);
  assert_eq!(
    calls(&log),
    vec![
      "listener:mouse_down 5 5",
      "listener:mouse_move 10 8",
      "listener:mouse_up 10 8",
    ]
  );
}

#[test]
fn hover1() {
  test_log_init();
  let log = make_call_log();
  let (mut tree, root_id, probe_id, listener_id) = make_tree_with_probes(&log);
  let mut dispatch = MouseDispatch::new();
  assert_eq!(dispatch.hover(), None);

  handle_all(&mut dispatch, &mut tree, &[PointerEvent::moved(100, 100)]);
  assert_eq!(dispatch.hover(), Some(probe_id));
  assert_eq!(dispatch.state(), DispatchState::Idle);

  handle_all(&mut dispatch, &mut tree, &[PointerEvent::moved(61, 61)]);
  assert_eq!(dispatch.hover(), Some(listener_id));

  // The root is a plain container, it doesn't listen to moves.
  handle_all(&mut dispatch, &mut tree, &[PointerEvent::moved(10, 10)]);
  assert_eq!(dispatch.hover(), Some(root_id));

  handle_all(&mut dispatch, &mut tree, &[PointerEvent::moved(500, 500)]);
  assert_eq!(dispatch.hover(), None);

  assert_eq!(
    calls(&log),
    vec!["probe:mouse_move 50 50", "listener:mouse_move 1 1"]
  );
}

#[test]
fn missed1() {
  test_log_init();
  let log = make_call_log();
  let (mut tree, _root_id, _probe_id, _listener_id) = make_tree_with_probes(&log);
  let mut dispatch = MouseDispatch::new();

  handle_all(
    &mut dispatch,
    &mut tree,
    &[
      PointerEvent::down(400, 400),
      PointerEvent::moved(100, 100),
      PointerEvent::up(400, 400),
    ],
  );
  assert_eq!(dispatch.state(), DispatchState::Idle);
  // Only the idle move reaches the probe.
  assert_eq!(calls(&log), vec!["probe:mouse_move 50 50"]);
}

#[test]
fn idle_up1() {
  test_log_init();
  let log = make_call_log();
  let (mut tree, _root_id, _probe_id, _listener_id) = make_tree_with_probes(&log);
  let mut dispatch = MouseDispatch::new();

  handle_all(&mut dispatch, &mut tree, &[PointerEvent::up(100, 100)]);
  assert_eq!(dispatch.state(), DispatchState::Idle);
  assert_eq!(calls(&log), vec!["probe:mouse_up 50 50"]);
}

#[test]
fn vanished1() {
  test_log_init();
  let log = make_call_log();
  let (mut tree, _root_id, probe_id, _listener_id) = make_tree_with_probes(&log);
  let mut dispatch = MouseDispatch::new();

  handle_all(&mut dispatch, &mut tree, &[PointerEvent::down(100, 100)]);
  assert_eq!(dispatch.state().node(), Some(probe_id));

  let removed = tree.remove(probe_id).unwrap();
  assert_eq!(removed.len(), 2);

  handle_all(&mut dispatch, &mut tree, &[PointerEvent::moved(110, 110)]);
  assert_eq!(dispatch.state(), DispatchState::Idle);

  handle_all(&mut dispatch, &mut tree, &[PointerEvent::up(110, 110)]);
  assert_eq!(dispatch.state(), DispatchState::Idle);
  assert_eq!(calls(&log), vec!["probe:mouse_down 50 50"]);
}

#[test]
fn vanished_dragging1() {
  test_log_init();
  let log = make_call_log();
  let (mut tree, _root_id, probe_id, _listener_id) = make_tree_with_probes(&log);
  let mut dispatch = MouseDispatch::new();

  handle_all(
    &mut dispatch,
    &mut tree,
    &[PointerEvent::down(100, 100), PointerEvent::moved(101, 101)],
  );
  assert!(matches!(
    dispatch.state(),
    DispatchState::Dragging { node, .. } if node == probe_id
  ));

  tree.detach(probe_id).unwrap();
  handle_all(&mut dispatch, &mut tree, &[PointerEvent::moved(120, 120)]);
  assert_eq!(dispatch.state(), DispatchState::Idle);
}

#[test]
fn reset1() {
  test_log_init();
  let log = make_call_log();
  let (mut tree, _root_id, probe_id, _listener_id) = make_tree_with_probes(&log);
  let mut dispatch = MouseDispatch::new();

  handle_all(&mut dispatch, &mut tree, &[PointerEvent::down(100, 100)]);
  dispatch.reset();
  assert_eq!(dispatch.state(), DispatchState::Idle);

  // The release no longer belongs to a press.
  handle_all(&mut dispatch, &mut tree, &[PointerEvent::up(100, 100)]);
  assert_eq!(
    calls(&log),
    vec!["probe:mouse_down 50 50", "probe:mouse_up 50 50"]
  );
  assert!(tree.downcast_ref::<Probe>(probe_id).is_some());
}

#[test]
fn down_while_dragging1() {
  test_log_init();
  let log = make_call_log();
  let (mut tree, root_id, probe_id, _listener_id) = make_tree_with_probes(&log);
  let mut dispatch = MouseDispatch::new();

  handle_all(
    &mut dispatch,
    &mut tree,
    &[
      PointerEvent::down(100, 100),
      PointerEvent::moved(110, 105),
      PointerEvent::down(250, 250),
    ],
  );
  assert_eq!(
    dispatch.state(),
    DispatchState::Pressed {
      node: root_id,
      anchor: point!(x: 250, y: 250)
    }
  );
  assert_eq!(
    calls(&log),
    vec![
      "probe:mouse_down 50 50",
      "probe:drag_start",
      "probe:drag 10 5",
      "probe:drag_end",
    ]
  );
  assert_eq!(tree.coordinates(probe_id).unwrap().pos(), point!(x: 60, y: 55));
}

#[test]
fn down_while_dragging_block1() {
  test_log_init();
  let mut tree = Tree::new();
  let root_id = tree
    .add_root(Coordinates::new(0, 0, 300, 300), Block::new(Color::new("white")))
    .unwrap();
  let block_id = tree
    .insert(
      root_id,
      Coordinates::new(10, 10, 50, 50),
      Block::new(Color::new("red")),
    )
    .unwrap();
  let mut dispatch = MouseDispatch::new();

  handle_all(
    &mut dispatch,
    &mut tree,
    &[PointerEvent::down(20, 20), PointerEvent::moved(30, 30)],
  );
  assert!(tree.downcast_ref::<Block>(block_id).unwrap().is_dragging());

  // Pressing again on the same block starts over.
  handle_all(&mut dispatch, &mut tree, &[PointerEvent::down(25, 25)]);
  assert!(!tree.downcast_ref::<Block>(block_id).unwrap().is_dragging());
  assert_eq!(dispatch.state().node(), Some(block_id));

  handle_all(
    &mut dispatch,
    &mut tree,
    &[PointerEvent::moved(35, 25), PointerEvent::up(35, 25)],
  );
  let block = tree.downcast_ref::<Block>(block_id).unwrap();
  assert!(!block.is_dragging());
  assert_eq!(tree.coordinates(block_id).unwrap().pos(), point!(x: 30, y: 20));
}
