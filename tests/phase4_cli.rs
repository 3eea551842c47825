//! Phase 4 tests: CLI integration and end-to-end flows.

use std::collections::HashSet;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

use flood_graph::engine::{is_breadth_first, is_depth_first, FillEngine, FillParams};
use flood_graph::format::{FigureParser, FigureWriter};
use flood_graph::graph::{build_matrix, GraphBuilder, Strategy};
use flood_graph::types::Color;

// ==================== CLI Helpers ====================

const STRIP: &str = "\
vertex 0 white 0 0
vertex 1 white 1 0 0
vertex 2 black 2 0 1
start 0 white
";

/// Locate the `fgraph` binary built alongside test binaries.
fn fgraph_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove "deps"
    path.push("fgraph");
    path
}

/// Run the `fgraph` CLI with the given arguments and return the output.
fn run_fgraph(args: &[&str]) -> Output {
    Command::new(fgraph_bin())
        .args(args)
        .output()
        .expect("Failed to run fgraph")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "fgraph failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Helper: write figure text into a fresh temp file.
fn write_figure(text: &str) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), text).unwrap();
    file
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_info() {
    let file = write_figure(STRIP);
    let path = file.path().to_str().unwrap();

    let output = run_fgraph(&["info", path]);
    assert_success(&output);
    let info_out = stdout_str(&output);

    assert!(
        info_out.contains("Vertices: 3"),
        "Expected 'Vertices: 3' in info output: {}",
        info_out
    );
    assert!(
        info_out.contains("Edges: 2"),
        "Expected 'Edges: 2' in info output: {}",
        info_out
    );
    assert!(
        info_out.contains("Start: 0 over white"),
        "Expected start line in info output: {}",
        info_out
    );
    assert!(
        info_out.contains("white: 2"),
        "Expected color counts in info output: {}",
        info_out
    );
}

#[test]
fn test_cli_get() {
    let file = write_figure(STRIP);
    let path = file.path().to_str().unwrap();

    let output = run_fgraph(&["get", path, "1"]);
    assert_success(&output);
    let get_out = stdout_str(&output);

    assert!(
        get_out.contains("Vertex 1"),
        "Expected 'Vertex 1' in get output: {}",
        get_out
    );
    assert!(
        get_out.contains("white"),
        "Expected color in get output: {}",
        get_out
    );
    assert!(
        get_out.contains("(1, 0)"),
        "Expected position in get output: {}",
        get_out
    );
    assert!(
        get_out.contains("[0, 2]"),
        "Expected neighbors in get output: {}",
        get_out
    );
}

#[test]
fn test_cli_get_missing_vertex() {
    let file = write_figure(STRIP);
    let path = file.path().to_str().unwrap();

    let output = run_fgraph(&["get", path, "9"]);
    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error"),
        "Expected error message on stderr: {}",
        stderr
    );
}

#[test]
fn test_cli_at() {
    let file = write_figure(STRIP);
    let path = file.path().to_str().unwrap();

    let output = run_fgraph(&["at", path, "2", "0"]);
    assert_success(&output);
    assert!(
        stdout_str(&output).contains("Vertex 2 at (2, 0)"),
        "Expected lookup line, got: {}",
        stdout_str(&output)
    );

    let output = run_fgraph(&["at", path, "9", "9"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_cli_matrix() {
    let file = write_figure(STRIP);
    let path = file.path().to_str().unwrap();

    let output = run_fgraph(&["matrix", path]);
    assert_success(&output);
    assert_eq!(stdout_str(&output), "0 1 0\n1 0 1\n0 1 0\n");
}

#[test]
fn test_cli_fill_bfs() {
    let file = write_figure(STRIP);
    let path = file.path().to_str().unwrap();

    let output = run_fgraph(&["fill", path]);
    assert_success(&output);
    let fill_out = stdout_str(&output);

    assert!(
        fill_out.contains("Visited vertex 0\nVisited vertex 1\n"),
        "Expected visits in order in fill output: {}",
        fill_out
    );
    assert!(
        !fill_out.contains("Visited vertex 2"),
        "The black vertex must never be visited: {}",
        fill_out
    );
    assert!(
        fill_out.contains("bfs fill from 0 over white: 2 vertices, max depth 1"),
        "Expected summary line in fill output: {}",
        fill_out
    );
}

#[test]
fn test_cli_fill_dfs() {
    let file = write_figure(STRIP);
    let path = file.path().to_str().unwrap();

    let output = run_fgraph(&["fill", path, "--strategy", "dfs"]);
    assert_success(&output);
    let fill_out = stdout_str(&output);

    assert!(
        fill_out.contains("Visited vertex 0\nVisited vertex 1\n"),
        "Expected visits in fill output: {}",
        fill_out
    );
    assert!(
        fill_out.contains("dfs fill from 0 over white"),
        "Expected dfs summary in fill output: {}",
        fill_out
    );
}

#[test]
fn test_cli_fill_override_start_and_color() {
    let file = write_figure(STRIP);
    let path = file.path().to_str().unwrap();

    let output = run_fgraph(&["fill", path, "--start", "2", "--color", "black"]);
    assert_success(&output);
    let fill_out = stdout_str(&output);

    assert!(
        fill_out.contains("Visited vertex 2"),
        "Expected override start in fill output: {}",
        fill_out
    );
    assert!(
        fill_out.contains("bfs fill from 2 over black: 1 vertices, max depth 0"),
        "Expected summary for the one-vertex region: {}",
        fill_out
    );
}

#[test]
fn test_cli_fill_invalid_strategy() {
    let file = write_figure(STRIP);
    let path = file.path().to_str().unwrap();

    let output = run_fgraph(&["fill", path, "--strategy", "both"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_cli_fill_invalid_color() {
    let file = write_figure(STRIP);
    let path = file.path().to_str().unwrap();

    let output = run_fgraph(&["fill", path, "--color", "mauve"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_cli_fill_bad_start_index() {
    let file = write_figure(STRIP);
    let path = file.path().to_str().unwrap();

    let output = run_fgraph(&["fill", path, "--start", "42"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_cli_check_passes() {
    let file = write_figure(STRIP);
    let path = file.path().to_str().unwrap();

    let output = run_fgraph(&["check", path]);
    assert_success(&output);
    let check_out = stdout_str(&output);

    assert!(
        check_out.contains("PASS"),
        "Expected PASS in check output: {}",
        check_out
    );
    assert!(
        check_out.contains("Region size: 2"),
        "Expected region size in check output: {}",
        check_out
    );
}

#[test]
fn test_cli_fmt_stdout() {
    let messy = "\
# scattered neighbor mentions
vertex   0 white 0 0
vertex 1 white 1 0   0
vertex 2 black 2 0 1
start 0   white
";
    let file = write_figure(messy);
    let path = file.path().to_str().unwrap();

    let output = run_fgraph(&["fmt", path]);
    assert_success(&output);
    assert_eq!(
        stdout_str(&output),
        "vertex 0 white 0 0 1\nvertex 1 white 1 0 2\nvertex 2 black 2 0\nstart 0 white\n"
    );
}

#[test]
fn test_cli_fmt_to_file() {
    let file = write_figure(STRIP);
    let path = file.path().to_str().unwrap();
    let out_file = NamedTempFile::new().unwrap();
    let out_path = out_file.path().to_str().unwrap();

    let output = run_fgraph(&["fmt", path, "--output", out_path]);
    assert_success(&output);
    assert!(
        stdout_str(&output).contains("Wrote"),
        "Expected confirmation line: {}",
        stdout_str(&output)
    );

    let written = std::fs::read_to_string(out_file.path()).unwrap();
    assert_eq!(
        written,
        "vertex 0 white 0 0 1\nvertex 1 white 1 0 2\nvertex 2 black 2 0\nstart 0 white\n"
    );
}

#[test]
fn test_cli_json_format() {
    let file = write_figure(STRIP);
    let path = file.path().to_str().unwrap();

    let output = run_fgraph(&["--format", "json", "info", path]);
    assert_success(&output);
    let json_out = stdout_str(&output);
    let parsed: serde_json::Value = serde_json::from_str(&json_out).unwrap_or_else(|e| {
        panic!(
            "Failed to parse info --format json output as JSON: {}\nOutput was: {}",
            e, json_out
        )
    });
    assert_eq!(parsed["vertices"], 3);
    assert_eq!(parsed["edges"], 2);
    assert_eq!(parsed["color"], "white");
    assert_eq!(parsed["colors"]["white"], 2);

    let output = run_fgraph(&["--format", "json", "fill", path]);
    assert_success(&output);
    let parsed: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(parsed["strategy"], "bfs");
    assert_eq!(parsed["max_depth"], 1);
    let visits = parsed["visits"].as_array().unwrap();
    assert_eq!(visits.len(), 2);
    assert_eq!(visits[0]["index"], 0);
    assert_eq!(visits[0]["depth"], 0);
    assert_eq!(visits[1]["index"], 1);

    let output = run_fgraph(&["--format", "json", "matrix", path]);
    assert_success(&output);
    let parsed: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(parsed["size"], 3);
    assert_eq!(parsed["rows"][0], serde_json::json!([0, 1, 0]));

    let output = run_fgraph(&["--format", "json", "check", path]);
    assert_success(&output);
    let parsed: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(parsed["passed"], true);
}

#[test]
fn test_cli_missing_file() {
    let output = run_fgraph(&["info", "/nonexistent/figure.fig"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_malformed_figure() {
    let file = write_figure("vertex 0 white 0 0\nvertex 1 mauve 1 0\nstart 0 white\n");
    let path = file.path().to_str().unwrap();

    let output = run_fgraph(&["info", path]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("line 2"),
        "Expected the offending line on stderr: {}",
        stderr
    );
}

// ==================== End-to-End Tests ====================

#[test]
fn test_full_lifecycle() {
    // Build a figure programmatically: a white blob, a black border
    // vertex, and a disconnected stray.
    let mut builder = GraphBuilder::new();
    builder.vertex(Color::White, 0, 0);
    builder.vertex(Color::White, 1, 0);
    builder.vertex(Color::Black, 2, 0);
    builder.vertex(Color::White, 0, 1);
    builder.vertex(Color::White, 1, 1);
    builder.vertex(Color::White, 5, 5);
    builder
        .edge(0, 1)
        .edge(1, 2)
        .edge(0, 3)
        .edge(3, 4)
        .edge(4, 1)
        .start(0, Color::White);
    let figure = builder.build_figure().unwrap();

    // Persist, then reload.
    let file = NamedTempFile::new().unwrap();
    FigureWriter::write_to_file(&figure, file.path()).unwrap();
    let reloaded = FigureParser::parse_file(file.path()).unwrap();
    assert_eq!(reloaded.graph.vertex_count(), 6);
    assert_eq!(reloaded.graph.edge_count(), 5);
    assert_eq!(reloaded.start, 0);

    // The matrix of the reloaded graph is well formed.
    let matrix = build_matrix(&reloaded.graph).unwrap();
    assert_eq!(matrix.size(), 6);
    assert!(matrix.is_symmetric());
    assert!(matrix.get(0, 1) && matrix.get(1, 0));

    // Run both fills on fresh copies of the reloaded graph.
    let engine = FillEngine::new();
    let mut bfs_graph = reloaded.graph.clone();
    let bfs_report = engine
        .fill(
            &mut bfs_graph,
            FillParams {
                start: reloaded.start,
                color: reloaded.color,
                strategy: Strategy::Bfs,
            },
        )
        .unwrap();
    let mut dfs_graph = reloaded.graph.clone();
    let dfs_report = engine
        .fill(
            &mut dfs_graph,
            FillParams {
                start: reloaded.start,
                color: reloaded.color,
                strategy: Strategy::Dfs,
            },
        )
        .unwrap();

    // Both orders verify against the untouched reference graph.
    let bfs_order = bfs_report.order();
    let dfs_order = dfs_report.order();
    assert!(is_breadth_first(
        &reloaded.graph,
        reloaded.start,
        reloaded.color,
        &bfs_order
    ));
    assert!(is_depth_first(
        &reloaded.graph,
        reloaded.start,
        reloaded.color,
        &dfs_order
    ));

    // Same region either way: the white blob, without the black border
    // vertex or the stray.
    let bfs_set: HashSet<usize> = bfs_order.iter().copied().collect();
    let dfs_set: HashSet<usize> = dfs_order.iter().copied().collect();
    assert_eq!(bfs_set, dfs_set);
    assert_eq!(bfs_set, HashSet::from([0, 1, 3, 4]));

    // Canonical text is stable across another round trip.
    let text = FigureWriter::write_to_string(&reloaded);
    let again = FigureWriter::write_to_string(&FigureParser::parse(&text).unwrap());
    assert_eq!(text, again);
}
