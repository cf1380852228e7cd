//! Maps the result of a shortest path query onto what a view highlights: the
//! vertices and edges on the route, its total distance and a readable route
//! description.

use itertools::Itertools;
use serde::Serialize;

use crate::{
    error::{Error, Result},
    graphs::{graph_functions::lightest_edge_between, Distance, EdgeId, Graph, VertexId},
    search::{dijkstra::dijkstra_one_to_one_wrapped, path::Path},
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathHighlight {
    pub vertices: Vec<VertexId>,
    pub edges: Vec<EdgeId>,
    pub distance: Distance,
    pub labels: Vec<String>,
}

impl PathHighlight {
    /// Resolves the edges traversed by `path`. Between two consecutive
    /// vertices the lightest connecting edge is taken.
    pub fn from_path(graph: &dyn Graph, path: &Path) -> Result<PathHighlight> {
        let labels = path
            .vertices
            .iter()
            .map(|&vertex| {
                graph
                    .vertex(vertex)
                    .map(|vertex| vertex.label().to_string())
                    .ok_or(Error::UnknownVertex(vertex))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut edges = Vec::with_capacity(path.vertices.len().saturating_sub(1));
        let mut distance = 0.0;
        for (tail, head) in path.vertices.iter().copied().tuple_windows() {
            let edge = lightest_edge_between(graph, tail, head)?
                .ok_or(Error::NotAdjacent { tail, head })?;
            distance += edge.distance();
            edges.push(edge.id());
        }

        Ok(PathHighlight {
            vertices: path.vertices.clone(),
            edges,
            distance,
            labels,
        })
    }

    /// Labels joined by `-`, e.g. `A-C-D`.
    pub fn route(&self) -> String {
        self.labels.join("-")
    }

    pub fn summary(&self) -> String {
        format!(
            "Result for {} to {}\nTotal Distance: {:?} km\nPath: {}",
            self.labels.first().map(String::as_str).unwrap_or_default(),
            self.labels.last().map(String::as_str).unwrap_or_default(),
            self.distance,
            self.route()
        )
    }
}

/// Start and end vertex picked by the user, held by the caller between
/// queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    start: Option<VertexId>,
    end: Option<VertexId>,
}

impl Selection {
    pub fn new() -> Selection {
        Selection::default()
    }

    pub fn start(&self) -> Option<VertexId> {
        self.start
    }

    pub fn end(&self) -> Option<VertexId> {
        self.end
    }

    pub fn set_start(&mut self, vertex: VertexId) {
        self.start = Some(vertex);
    }

    pub fn set_end(&mut self, vertex: VertexId) {
        self.end = Some(vertex);
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Runs the query for the current selection. `Ok(None)` means the end
    /// is not reachable from the start.
    pub fn shortest_path(&self, graph: &dyn Graph) -> Result<Option<PathHighlight>> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(Error::IncompleteSelection);
        };

        dijkstra_one_to_one_wrapped(graph, start, end)?
            .map(|path| PathHighlight::from_path(graph, &path))
            .transpose()
    }
}
