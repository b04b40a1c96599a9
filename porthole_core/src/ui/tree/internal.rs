//! Internal tree structure.

pub mod inode;
pub mod relation;

#[cfg(test)]
mod inode_tests;

pub use inode::*;
pub use relation::*;
