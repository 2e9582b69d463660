//! Edgewise CLI: label-scoped edge transposition over JSON-lines graphs.
//!
//! Usage:
//!   edgewise transpose --input g.jsonl --output out.jsonl \
//!       --label knows --new-label knownBy --action drop
//!   edgewise inspect --input g.jsonl

use clap::{Parser, Subcommand};
use edgewise::{
    read_vertices, Action, AtomicCounter, JsonLinesSink, TransposeConfig, TransposePipeline,
};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "edgewise",
    version,
    about = "Bulk-synchronous property graph rewriting"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reverse and relabel every edge matching a label
    Transpose {
        /// Input graph, one vertex document per line
        #[arg(long)]
        input: PathBuf,
        /// Where to write the rebuilt graph
        #[arg(long)]
        output: PathBuf,
        /// Edge label selected for transposition
        #[arg(long)]
        label: String,
        /// Label assigned to every reversed edge
        #[arg(long)]
        new_label: String,
        /// Whether matching edges are kept in original form (keep|drop)
        #[arg(long, default_value = "drop")]
        action: String,
    },
    /// Print vertex, edge, and label statistics for a graph
    Inspect {
        /// Input graph, one vertex document per line
        #[arg(long)]
        input: PathBuf,
    },
}

fn open_graph(path: &Path) -> Result<Vec<edgewise::Vertex>, String> {
    let file = File::open(path)
        .map_err(|e| format!("cannot open '{}': {}", path.display(), e))?;
    read_vertices(BufReader::new(file))
        .map_err(|e| format!("cannot read '{}': {}", path.display(), e))
}

async fn cmd_transpose(
    input: &Path,
    output: &Path,
    label: String,
    new_label: String,
    action: &str,
) -> i32 {
    let action: Action = match action.parse() {
        Ok(action) => action,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let vertices = match open_graph(input) {
        Ok(vertices) => vertices,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let out_file = match File::create(output) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error: cannot create '{}': {}", output.display(), e);
            return 1;
        }
    };

    let pipeline = TransposePipeline::new(TransposeConfig::new(label, new_label, action));
    let sink = JsonLinesSink::new(BufWriter::new(out_file));
    let counter = AtomicCounter::new();

    let report = match pipeline.run(vertices.into_iter(), &sink, &counter).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    if let Err(e) = sink.into_inner() {
        eprintln!("Error: cannot flush '{}': {}", output.display(), e);
        return 1;
    }

    println!(
        "Transposed {} edge copies across {} vertices ({} written)",
        report.edges_transposed, report.vertices_read, report.vertices_written
    );
    0
}

fn cmd_inspect(input: &Path) -> i32 {
    let vertices = match open_graph(input) {
        Ok(vertices) => vertices,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let mut outgoing = 0usize;
    let mut incoming = 0usize;
    let mut labels: BTreeMap<&str, usize> = BTreeMap::new();
    for vertex in &vertices {
        outgoing += vertex.outgoing.len();
        incoming += vertex.incoming.len();
        for edge in vertex.outgoing.iter().chain(vertex.incoming.iter()) {
            *labels.entry(edge.label.as_str()).or_default() += 1;
        }
    }

    println!("Vertices: {}", vertices.len());
    println!("Edge copies: {} out, {} in", outgoing, incoming);
    if !labels.is_empty() {
        println!("{:<24}  {:>7}", "LABEL", "COPIES");
        println!("{}", "-".repeat(33));
        for (label, count) in labels {
            println!("{:<24}  {:>7}", label, count);
        }
    }
    0
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Transpose {
            input,
            output,
            label,
            new_label,
            action,
        } => cmd_transpose(&input, &output, label, new_label, &action).await,
        Commands::Inspect { input } => cmd_inspect(&input),
    };
    std::process::exit(code);
}
