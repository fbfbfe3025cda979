//! CLI entry point for the `ratg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use rat_graph::cli::commands;
use rat_graph::RatError;

#[derive(Parser)]
#[command(
    name = "ratg",
    about = "Build, traverse, export and analyse user/story influence graphs"
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
    /// Display vertex, arc, user and story counts for a dataset
    Info {
        /// Path to the dataset file
        data: PathBuf,
    },
    /// Export the dataset's graph as TGF
    Export {
        /// Path to the dataset file
        data: PathBuf,
        /// Path of the .tgf file to write
        out: PathBuf,
    },
    /// Breadth-first traversal from a vertex
    Bfs {
        /// Path to the dataset file
        data: PathBuf,
        /// Starting vertex (account name or story id)
        vertex: String,
    },
    /// Depth-first walk from a vertex
    Dfs {
        /// Path to the dataset file
        data: PathBuf,
        /// Starting vertex (account name or story id)
        vertex: String,
    },
    /// List the successors of a vertex
    Successors {
        /// Path to the dataset file
        data: PathBuf,
        /// Vertex to inspect
        vertex: String,
    },
    /// List the predecessors of a vertex
    Predecessors {
        /// Path to the dataset file
        data: PathBuf,
        /// Vertex to inspect
        vertex: String,
    },
    /// User/story level distance between two vertices
    Distance {
        /// Path to the dataset file
        data: PathBuf,
        /// Starting vertex
        from: String,
        /// Target vertex
        to: String,
    },
    /// Most central vertices of the largest connected component
    Central {
        /// Path to the dataset file
        data: PathBuf,
        /// Tab-separated story id / title table
        #[arg(long)]
        titles: Option<PathBuf>,
    },
    /// Full investigation report
    Report {
        /// Path to the dataset file
        data: PathBuf,
        /// Tab-separated story id / title table
        #[arg(long)]
        titles: Option<PathBuf>,
    },
    /// Display counts for an exported .tgf file
    TgfInfo {
        /// Path to the .tgf file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Info { data } => commands::cmd_info(&data, json),
        Commands::Export { data, out } => commands::cmd_export(&data, &out, json),
        Commands::Bfs { data, vertex } => commands::cmd_bfs(&data, &vertex, json),
        Commands::Dfs { data, vertex } => commands::cmd_dfs(&data, &vertex, json),
        Commands::Successors { data, vertex } => commands::cmd_successors(&data, &vertex, json),
        Commands::Predecessors { data, vertex } => {
            commands::cmd_predecessors(&data, &vertex, json)
        }
        Commands::Distance { data, from, to } => commands::cmd_distance(&data, &from, &to, json),
        Commands::Central { data, titles } => {
            commands::cmd_central(&data, titles.as_deref(), json)
        }
        Commands::Report { data, titles } => commands::cmd_report(&data, titles.as_deref(), json),
        Commands::TgfInfo { file } => commands::cmd_tgf_info(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let RatError::SourceUnavailable { .. } = e {
            eprintln!("The program terminates.");
        }
        let code = match &e {
            RatError::Io(_) | RatError::SourceUnavailable { .. } => 1,
            RatError::Parse { .. } => 2,
            RatError::VertexNotFound(_) => 4,
        };
        process::exit(code);
    }
}
