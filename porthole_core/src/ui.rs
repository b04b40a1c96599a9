//! User interface.

pub mod canvas;
pub mod defaults;
pub mod draw;
pub mod interactor;
pub mod pick;
pub mod tree;
pub mod widget;
