//! All data types for the flood-graph library.

pub mod color;
pub mod error;
pub mod vertex;

pub use color::{Color, PALETTE};
pub use error::{GraphError, GraphResult};
pub use vertex::Vertex;
