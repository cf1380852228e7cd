use clap::Parser;
use dijkstra_visu::{
    dijkstra_one_to_one_wrapped,
    graphs::{
        graph_functions::{brute_force_distance, random_graph, validate_path},
        VertexId,
    },
    search::path::{ShortestPathRequest, ShortestPathTestCase},
    utility::{get_progressbar_long_jobs, init_tracing},
};
use indicatif::ParallelProgressIterator;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{error, info};

/// Compares Dijkstra against brute-force enumeration of all simple paths on
/// `number_of_graphs` random graphs. Keep `vertices` small, the brute force
/// is exponential.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of random graphs, one query each
    #[arg(short, long, default_value = "1000")]
    number_of_graphs: u64,
    /// Vertices per graph
    #[arg(short, long, default_value = "7", value_parser = clap::value_parser!(u32).range(1..=12))]
    vertices: u32,
    /// Probability that a pair of vertices is connected
    #[arg(short, long, default_value = "0.3", value_parser = parse_probability)]
    edge_probability: f64,
    /// Largest edge distance
    #[arg(short, long, default_value = "10")]
    max_weight: u32,
    /// Seed of the first graph, random if not given
    #[arg(short, long)]
    seed: Option<u64>,
    /// Log filter, overrides `RUST_LOG`
    #[arg(long)]
    log_level: Option<String>,
}

fn parse_probability(value: &str) -> Result<f64, String> {
    let probability: f64 = value.parse().map_err(|error| format!("{}", error))?;
    if !(0.0..=1.0).contains(&probability) {
        return Err(format!("{} is not within 0 and 1", value));
    }
    Ok(probability)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, graphs = args.number_of_graphs, "validating dijkstra");

    let bar = get_progressbar_long_jobs("Validating", args.number_of_graphs);
    let failures: Vec<anyhow::Error> = (0..args.number_of_graphs)
        .into_par_iter()
        .progress_with(bar)
        .map(|index| -> anyhow::Result<()> {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index));
            let graph = random_graph(
                &mut rng,
                args.vertices,
                args.edge_probability,
                args.max_weight,
            );

            let request = ShortestPathRequest {
                source: VertexId::new(rng.gen_range(0..args.vertices)),
                target: VertexId::new(rng.gen_range(0..args.vertices)),
            };
            let test_case = ShortestPathTestCase {
                request,
                distance: brute_force_distance(&graph, request.source, request.target)?,
            };
            let path = dijkstra_one_to_one_wrapped(&graph, request.source, request.target)?;

            validate_path(&graph, &test_case, &path)
                .map_err(|reason| anyhow::anyhow!("graph {} ({:?}): {}", index, request, reason))
        })
        .filter_map(|result| result.err())
        .collect();

    for failure in failures.iter() {
        error!("{}", failure);
    }

    if !failures.is_empty() {
        anyhow::bail!(
            "{} of {} queries disagree with brute force (seed {})",
            failures.len(),
            args.number_of_graphs,
            seed
        );
    }

    info!("all {} queries agree with brute force", args.number_of_graphs);
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Args;

    #[test]
    fn edge_probability_has_to_be_a_probability() {
        let args = Args::try_parse_from(["validate_dijkstra", "--edge-probability", "0.5"]).unwrap();
        assert_eq!(args.edge_probability, 0.5);

        for value in ["NaN", "inf", "-0.1", "1.5", "often"] {
            assert!(
                Args::try_parse_from(["validate_dijkstra", "--edge-probability", value]).is_err(),
                "{} was accepted",
                value
            );
        }
    }
}
