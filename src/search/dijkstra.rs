use tracing::debug;

use super::{
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataVec},
        vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
        vertex_expanded_data::{VertexExpandedData, VertexExpandedDataVec},
    },
    path::{Path, ShortestPathRequest},
    PathFinding,
};
use crate::{
    error::{Error, Result},
    graphs::{graph_functions::is_connected, is_valid_distance, Graph, VertexId},
};

/// Dijkstra over a borrowed graph. Every query allocates fresh search data.
pub struct Dijkstra<'a> {
    pub graph: &'a dyn Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a dyn Graph) -> Self {
        Dijkstra { graph }
    }
}

impl<'a> PathFinding for Dijkstra<'a> {
    fn shortest_path(&self, request: &ShortestPathRequest) -> Result<Option<Path>> {
        dijkstra_one_to_one_wrapped(self.graph, request.source, request.target)
    }
}

/// Shortest path from `source` to `target`, `Ok(None)` if `target` is not
/// reachable.
pub fn dijkstra_one_to_one_wrapped(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
) -> Result<Option<Path>> {
    let mut data = DijkstraDataVec::new(graph);
    let mut expanded = VertexExpandedDataVec::new(graph);
    let mut queue = VertexDistanceQueueBinaryHeap::new();

    dijkstra_one_to_one(graph, &mut data, &mut expanded, &mut queue, source, target)?;

    Ok(data.get_path(target))
}

/// Runs the search until `target` is settled or the frontier is exhausted.
/// The search data is expected to be cleared.
pub fn dijkstra_one_to_one(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    expanded: &mut dyn VertexExpandedData,
    queue: &mut dyn VertexDistanceQueue,
    source: VertexId,
    target: VertexId,
) -> Result<()> {
    for vertex in [source, target] {
        if !graph.contains_vertex(vertex) {
            return Err(Error::UnknownVertex(vertex));
        }
    }

    data.set_distance(source, 0.0);
    queue.insert(source, 0.0);

    while let Some(tail) = queue.pop() {
        // stale entry of an already settled vertex
        if expanded.expand(tail) {
            continue;
        }
        if tail == target {
            break;
        }

        let distance_tail = data.get_distance(tail);

        for edge in graph.incident_edges(tail)? {
            let weight = edge.distance();
            if !is_valid_distance(weight) {
                return Err(Error::NegativeWeight {
                    edge: edge.id(),
                    weight,
                });
            }

            let head = graph.opposite(tail, edge)?;
            let alternative_distance_head = distance_tail + weight;
            if alternative_distance_head < data.get_distance(head) {
                data.set_distance(head, alternative_distance_head);
                data.set_predecessor(head, tail);
                queue.insert(head, alternative_distance_head);
            }
        }
    }

    debug!(
        %source,
        %target,
        expanded = expanded.number_of_expanded(),
        distance = data.get_distance(target),
        "dijkstra finished"
    );

    // Only reached when the frontier ran dry. A connected target then lies
    // beyond the largest representable distance.
    if data.get_distance(target).is_infinite() && is_connected(graph, source, target)? {
        return Err(Error::DistanceOverflow { vertex: target });
    }

    Ok(())
}
