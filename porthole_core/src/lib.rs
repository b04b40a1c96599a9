//! The core library for the porthole scene-graph engine.
//!
//! A retained-mode tree of interactors (drawable, pickable nodes with
//! optional mouse callbacks), rendered onto an abstract drawing surface and
//! driven by a pointer-event loop.

pub mod cli;
pub mod constant;
pub mod coord;
pub mod dispatch;
pub mod envar;
pub mod event;
pub mod evloop;
pub mod lock;
pub mod log;
pub mod prelude;
pub mod results;
pub mod ui;

// Only for unit test.
#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod dispatch_tests;
#[cfg(test)]
mod event_tests;
