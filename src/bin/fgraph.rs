//! CLI entry point for the `fgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use flood_graph::cli::commands;
use flood_graph::graph::Strategy;
use flood_graph::types::{Color, GraphError};

#[derive(Parser)]
#[command(
    name = "fgraph",
    about = "Flood-fill traversal over colored figure graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about a figure file
    Info {
        /// Path to the figure file
        file: PathBuf,
    },
    /// Get a specific vertex by index
    Get {
        /// Path to the figure file
        file: PathBuf,
        /// Vertex index
        index: usize,
    },
    /// Look up the vertex at given coordinates
    At {
        /// Path to the figure file
        file: PathBuf,
        /// X coordinate
        x: i64,
        /// Y coordinate
        y: i64,
    },
    /// Print the adjacency matrix
    Matrix {
        /// Path to the figure file
        file: PathBuf,
    },
    /// Run a flood fill and print each visit
    Fill {
        /// Path to the figure file
        file: PathBuf,
        /// Traversal strategy: bfs or dfs
        #[arg(long, default_value = "bfs")]
        strategy: String,
        /// Start from this vertex instead of the figure's designation
        #[arg(long)]
        start: Option<usize>,
        /// Fill over this color instead of the figure's designation
        #[arg(long)]
        color: Option<String>,
    },
    /// Verify both traversal orders against recomputed properties
    Check {
        /// Path to the figure file
        file: PathBuf,
    },
    /// Rewrite a figure in canonical form
    Fmt {
        /// Path to the figure file
        file: PathBuf,
        /// Write here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Get { file, index } => commands::cmd_get(&file, index, json),
        Commands::At { file, x, y } => commands::cmd_at(&file, x, y, json),
        Commands::Matrix { file } => commands::cmd_matrix(&file, json),
        Commands::Fill {
            file,
            strategy,
            start,
            color,
        } => {
            let strat = match Strategy::from_name(&strategy) {
                Some(s) => s,
                None => {
                    eprintln!("Invalid strategy: {}", strategy);
                    process::exit(3);
                }
            };
            let fill_color = match color {
                Some(name) => match Color::from_name(&name) {
                    Some(c) => Some(c),
                    None => {
                        eprintln!("Invalid color: {}", name);
                        process::exit(3);
                    }
                },
                None => None,
            };
            commands::cmd_fill(&file, strat, start, fill_color, json)
        }
        Commands::Check { file } => match commands::cmd_check(&file, json) {
            Ok(true) => Ok(()),
            Ok(false) => process::exit(6),
            Err(e) => Err(e),
        },
        Commands::Fmt { file, output } => commands::cmd_fmt(&file, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::MalformedRecord { .. }
            | GraphError::UnknownColor { .. }
            | GraphError::IndexMismatch { .. }
            | GraphError::DuplicateCoordinate { .. }
            | GraphError::UndeclaredNeighbor { .. }
            | GraphError::MissingStart
            | GraphError::DuplicateStart { .. }
            | GraphError::StartOutOfRange { .. } => 2,
            GraphError::VertexNotFound(_)
            | GraphError::NoVertexAt { .. }
            | GraphError::StartNotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
