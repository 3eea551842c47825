//! High-level operations: completed fill runs and order verification.

pub mod fill;
pub mod verify;

pub use fill::{FillEngine, FillParams, FillReport};
pub use verify::{is_breadth_first, is_depth_first};
