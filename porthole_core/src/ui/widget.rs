//! Built-in interactors.

// Re-export
pub use crate::ui::widget::block::Block;
pub use crate::ui::widget::container::Container;
pub use crate::ui::widget::picture::Picture;
pub use crate::ui::widget::porthole::Porthole;
pub use crate::ui::widget::root::RootContainer;

pub mod block;
pub mod container;
pub mod picture;
pub mod porthole;
pub mod root;

#[cfg(test)]
mod block_tests;
#[cfg(test)]
mod porthole_tests;
