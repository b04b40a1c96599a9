//! Plain container.

use crate::interactor_impl;

#[derive(Debug, Clone, Copy, Default)]
/// Invisible container that only groups its children, it's drawn and picked
/// by the defaults.
pub struct Container {}

impl Container {
  pub fn new() -> Self {
    Self {}
  }
}

interactor_impl!(Container, "Container");
