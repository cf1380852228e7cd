use std::path::PathBuf;

use clap::Parser;
use dijkstra_visu::{
    graphs::{graph_factory::GraphFactory, graph_functions::resolve_vertex},
    highlight::Selection,
    utility::init_tracing,
};
use tracing::info;

/// Loads a graph description and prints the shortest path between two of its
/// vertices.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph description in `.json` format
    #[arg(short, long)]
    graph: PathBuf,
    /// Label or id of the start vertex
    #[arg(short, long)]
    start: String,
    /// Label or id of the end vertex
    #[arg(short, long)]
    end: String,
    /// Log filter, overrides `RUST_LOG`
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    let graph = GraphFactory::from_json_file(&args.graph)?;

    let mut selection = Selection::new();
    selection.set_start(resolve_vertex(&graph, &args.start)?);
    selection.set_end(resolve_vertex(&graph, &args.end)?);
    info!(?selection, "searching shortest path");

    match selection.shortest_path(&graph)? {
        Some(highlight) => {
            println!("{}", highlight.summary());
            info!(vertices = ?highlight.vertices, edges = ?highlight.edges, "highlighted path");
        }
        None => println!("No path found."),
    }

    Ok(())
}
