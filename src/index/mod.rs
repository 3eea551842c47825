//! Secondary lookup structures keyed on immutable vertex attributes.

pub mod coord_index;

pub use coord_index::CoordIndex;
