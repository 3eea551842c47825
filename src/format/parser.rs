//! Parses figure text into an in-memory graph.

use std::path::Path;

use log::debug;

use crate::graph::{Figure, FigureGraph};
use crate::types::{Color, GraphError, GraphResult};

/// Parser for line-oriented figure text.
///
/// One record per line, `#` starts a comment, blank lines are ignored:
///
/// ```text
/// vertex <index> <color> <x> <y> [<neighbor>...]
/// start <index> <color>
/// ```
///
/// Vertex indices are assigned in declaration order and each record must
/// carry its own index explicitly. Neighbor entries may name vertices
/// declared later in the file; each contributes one undirected edge,
/// applied in text order once all vertices are known. Exactly one start
/// record must appear, anywhere in the file.
///
/// Parsing is total and deterministic: the same text always yields the same
/// figure or the same error, and malformed input never panics. Every error
/// reports the offending 1-based line.
pub struct FigureParser;

impl FigureParser {
    /// Parse a figure file.
    pub fn parse_file(path: &Path) -> GraphResult<Figure> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse figure text into a [`Figure`].
    pub fn parse(text: &str) -> GraphResult<Figure> {
        let mut graph = FigureGraph::new();
        // Edge endpoints may be declared later, so edges wait until the
        // vertex table is complete. (line, from, to) keeps error reporting
        // and insertion order tied to the text.
        let mut pending_edges: Vec<(usize, usize, usize)> = Vec::new();
        let mut start: Option<(usize, usize, Color)> = None;

        for (number, raw) in text.lines().enumerate() {
            let line = number + 1;
            let content = match raw.find('#') {
                Some(pos) => &raw[..pos],
                None => raw,
            };
            let fields: Vec<&str> = content.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }

            match fields[0] {
                "vertex" => {
                    let record = parse_vertex_record(line, &fields[1..])?;
                    let expected = graph.vertex_count();
                    if record.index != expected {
                        return Err(GraphError::IndexMismatch {
                            line,
                            found: record.index,
                            expected,
                        });
                    }
                    match graph.add_vertex(record.color, record.x, record.y) {
                        Ok(_) => {}
                        Err(GraphError::CoordinateTaken { x, y, by }) => {
                            return Err(GraphError::DuplicateCoordinate { line, x, y, first: by })
                        }
                        Err(e) => return Err(e),
                    }
                    for neighbor in record.neighbors {
                        if neighbor == record.index {
                            return Err(malformed(line, "vertex lists itself as a neighbor"));
                        }
                        pending_edges.push((line, record.index, neighbor));
                    }
                }
                "start" => {
                    if fields.len() != 3 {
                        return Err(malformed(line, "start takes <index> <color>"));
                    }
                    if let Some((first, _, _)) = start {
                        return Err(GraphError::DuplicateStart { line, first });
                    }
                    let index = parse_index(line, fields[1])?;
                    let color = parse_color(line, fields[2])?;
                    start = Some((line, index, color));
                }
                other => {
                    return Err(malformed(line, format!("unknown record kind {:?}", other)));
                }
            }
        }

        let (start_line, start_index, start_color) = start.ok_or(GraphError::MissingStart)?;

        for (line, from, to) in pending_edges {
            if to >= graph.vertex_count() {
                return Err(GraphError::UndeclaredNeighbor { line, index: to });
            }
            graph.add_edge(from, to)?;
        }

        if start_index >= graph.vertex_count() {
            return Err(GraphError::StartOutOfRange {
                line: start_line,
                index: start_index,
                count: graph.vertex_count(),
            });
        }

        debug!(
            "parsed figure: {} vertices, {} edges, start {} over {}",
            graph.vertex_count(),
            graph.edge_count(),
            start_index,
            start_color
        );

        Ok(Figure {
            graph,
            start: start_index,
            color: start_color,
        })
    }
}

/// The fields of one `vertex` record.
struct VertexRecord {
    index: usize,
    color: Color,
    x: i64,
    y: i64,
    neighbors: Vec<usize>,
}

/// Parse the fields after the `vertex` keyword.
fn parse_vertex_record(line: usize, fields: &[&str]) -> GraphResult<VertexRecord> {
    if fields.len() < 4 {
        return Err(malformed(
            line,
            "vertex takes <index> <color> <x> <y> [<neighbor>...]",
        ));
    }
    let index = parse_index(line, fields[0])?;
    let color = parse_color(line, fields[1])?;
    let x = parse_coord(line, fields[2])?;
    let y = parse_coord(line, fields[3])?;
    let mut neighbors = Vec::with_capacity(fields.len() - 4);
    for field in &fields[4..] {
        neighbors.push(parse_index(line, field)?);
    }
    Ok(VertexRecord {
        index,
        color,
        x,
        y,
        neighbors,
    })
}

fn parse_index(line: usize, field: &str) -> GraphResult<usize> {
    field
        .parse()
        .map_err(|_| malformed(line, format!("expected a vertex index, got {:?}", field)))
}

fn parse_coord(line: usize, field: &str) -> GraphResult<i64> {
    field
        .parse()
        .map_err(|_| malformed(line, format!("expected a coordinate, got {:?}", field)))
}

fn parse_color(line: usize, field: &str) -> GraphResult<Color> {
    Color::from_name(field).ok_or_else(|| GraphError::UnknownColor {
        line,
        name: field.to_string(),
    })
}

fn malformed(line: usize, reason: impl Into<String>) -> GraphError {
    GraphError::MalformedRecord {
        line,
        reason: reason.into(),
    }
}
