use super::inode::*;

use crate::prelude::*;
use crate::ui::widget::Container;
use std::sync::atomic::AtomicI32;
use std::sync::atomic::Ordering;

#[test]
fn next_node_id1() {
  let a = next_node_id().unwrap();
  let b = next_node_id().unwrap();
  assert!(b > a);
}

#[test]
fn take_node_id_exhausted1() {
  let counter = AtomicI32::new(i32::MAX - 2);
  assert_eq!(take_node_id(&counter).unwrap(), i32::MAX - 2);
  assert_eq!(take_node_id(&counter).unwrap(), i32::MAX - 1);

  // Never wraps around to a used ID.
  for _ in 0..3 {
    assert!(matches!(
      take_node_id(&counter),
      Err(TheErr::NodeIdExhausted)
    ));
  }
  assert_eq!(counter.load(Ordering::Relaxed), i32::MAX);
}

#[test]
fn manipulator1() {
  assert!(Manipulator::Multi.accepts(0));
  assert!(Manipulator::Multi.accepts(100));
  assert!(Manipulator::Single.accepts(0));
  assert!(!Manipulator::Single.accepts(1));
}

#[test]
fn new1() {
  let mut inode = Inode::new(
    Coordinates::new(1, 2, 3, 4),
    Manipulator::Single,
    Box::new(Container::new()),
  )
  .unwrap();
  let other = Inode::new(
    Coordinates::default(),
    Manipulator::Multi,
    Box::new(Container::new()),
  )
  .unwrap();
  assert_ne!(inode.id(), other.id());
  assert_eq!(*inode.coordinates(), Coordinates::new(1, 2, 3, 4));
  assert_eq!(inode.manipulator(), Manipulator::Single);
  assert_eq!(inode.value().name(), "Container");

  let (coords, value) = inode.split_mut();
  coords.move_to(10, 20);
  assert_eq!(value.name(), "Container");
  assert_eq!(inode.coordinates().pos(), point!(x: 10, y: 20));

  let value = inode.into_value();
  assert!(value.as_any().downcast_ref::<Container>().is_some());
}
