//! Writes figures back out as canonical figure text.

use std::io::Write;
use std::path::Path;

use crate::graph::Figure;
use crate::types::GraphResult;

/// Writer producing canonical figure text.
///
/// Vertices appear in index order and each edge is listed once, on its
/// lower-indexed endpoint, ascending. Re-parsing the output reproduces the
/// same vertex attributes, edge sets, and start designation; neighbor
/// enumeration order is canonicalized in the process, so the output is a
/// fixed point of further reformatting.
pub struct FigureWriter;

impl FigureWriter {
    /// Render a figure as canonical text.
    pub fn write_to_string(figure: &Figure) -> String {
        let mut out = String::new();
        for v in figure.graph.vertices() {
            out.push_str(&format!("vertex {} {} {} {}", v.index, v.color, v.x, v.y));
            let mut uppers: Vec<usize> = v.edges.iter().copied().filter(|&n| n > v.index).collect();
            uppers.sort_unstable();
            for n in uppers {
                out.push_str(&format!(" {}", n));
            }
            out.push('\n');
        }
        out.push_str(&format!("start {} {}\n", figure.start, figure.color));
        out
    }

    /// Write canonical text to a file.
    pub fn write_to_file(figure: &Figure, path: &Path) -> GraphResult<()> {
        let mut file = std::fs::File::create(path)?;
        file.write_all(Self::write_to_string(figure).as_bytes())?;
        Ok(())
    }
}
