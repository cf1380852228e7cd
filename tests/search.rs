use std::io::Write;

use dijkstra_visu::{
    dijkstra_one_to_one_wrapped,
    graphs::{
        graph_factory::GraphFactory,
        graph_functions::{brute_force_distance, random_graph, resolve_vertex, validate_path},
        Graph, VertexId,
    },
    highlight::Selection,
    search::path::{ShortestPathRequest, ShortestPathTestCase},
    Dijkstra, PathFinding,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

const AUSTRIA: &str = r#"{
    "vertices": [
        { "label": "Wien" },
        { "label": "Linz" },
        { "label": "Salzburg" },
        { "label": "Graz" },
        { "label": "Klagenfurt" },
        { "label": "Innsbruck" },
        { "label": "Bregenz" }
    ],
    "edges": [
        { "from": 0, "to": 1, "distance": 185 },
        { "from": 1, "to": 2, "distance": 135 },
        { "from": 0, "to": 3, "distance": 200 },
        { "from": 3, "to": 4, "distance": 135 },
        { "from": 4, "to": 2, "distance": 225 },
        { "from": 2, "to": 5, "distance": 185 },
        { "from": 1, "to": 3, "distance": 220 }
    ]
}"#;

fn test_case(graph: &dyn Graph, source: VertexId, target: VertexId) -> ShortestPathTestCase {
    ShortestPathTestCase {
        request: ShortestPathRequest { source, target },
        distance: brute_force_distance(graph, source, target).unwrap(),
    }
}

#[test]
fn dijkstra_random_graphs() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..300 {
        let number_of_vertices = rng.gen_range(1..8);
        let graph = random_graph(&mut rng, number_of_vertices, 0.35, 10);
        let source = VertexId::new(rng.gen_range(0..number_of_vertices));
        let target = VertexId::new(rng.gen_range(0..number_of_vertices));

        let validation = test_case(&graph, source, target);
        let path = dijkstra_one_to_one_wrapped(&graph, source, target).unwrap();

        if let Err(reason) = validate_path(&graph, &validation, &path) {
            panic!("{:?}: {}", validation.request, reason);
        }
    }
}

#[test]
fn json_graph_through_selection() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(AUSTRIA.as_bytes()).unwrap();
    let graph = GraphFactory::from_json_file(file.path()).unwrap();

    let mut selection = Selection::new();
    selection.set_start(resolve_vertex(&graph, "Wien").unwrap());
    selection.set_end(resolve_vertex(&graph, "Innsbruck").unwrap());

    let highlight = selection.shortest_path(&graph).unwrap().unwrap();
    assert_eq!(highlight.route(), "Wien-Linz-Salzburg-Innsbruck");
    assert_eq!(highlight.distance, 505.0);
    assert_eq!(highlight.edges.len(), 3);
    assert_eq!(
        highlight.summary(),
        "Result for Wien to Innsbruck\nTotal Distance: 505.0 km\nPath: Wien-Linz-Salzburg-Innsbruck"
    );

    selection.set_end(resolve_vertex(&graph, "Bregenz").unwrap());
    assert_eq!(selection.shortest_path(&graph).unwrap(), None);
}

#[test]
fn path_finding_over_trait_object() {
    let graph = GraphFactory::from_json_str(AUSTRIA).unwrap();
    let dijkstra = Dijkstra::new(&graph);
    let pathfinder: &dyn PathFinding = &dijkstra;

    let request = ShortestPathRequest {
        source: resolve_vertex(&graph, "Graz").unwrap(),
        target: resolve_vertex(&graph, "Salzburg").unwrap(),
    };
    // Graz-Linz-Salzburg beats Graz-Klagenfurt-Salzburg by five
    assert_eq!(pathfinder.shortest_path_distance(&request).unwrap(), Some(355.0));
}

proptest! {
    #[test]
    fn dijkstra_agrees_with_brute_force(
        seed in any::<u64>(),
        number_of_vertices in 1u32..6,
        edge_probability in 0.0f64..=1.0,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(&mut rng, number_of_vertices, edge_probability, 20);

        for source in 0..number_of_vertices {
            for target in 0..number_of_vertices {
                let (source, target) = (VertexId::new(source), VertexId::new(target));
                let validation = test_case(&graph, source, target);
                let path = dijkstra_one_to_one_wrapped(&graph, source, target).unwrap();

                prop_assert_eq!(validate_path(&graph, &validation, &path), Ok(()));
                prop_assert_eq!(
                    dijkstra_one_to_one_wrapped(&graph, source, target).unwrap(),
                    path
                );
            }
        }
    }
}
