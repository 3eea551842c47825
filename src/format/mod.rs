//! Reading and writing the line-oriented figure text format.

pub mod parser;
pub mod writer;

pub use parser::FigureParser;
pub use writer::FigureWriter;
