use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod edge;
pub mod graph_factory;
pub mod graph_functions;
pub mod vec_graph;

use edge::UndirectedEdge;

pub type Distance = f64;

/// Edge distances have to be finite and non-negative. NaN is rejected too.
pub fn is_valid_distance(distance: Distance) -> bool {
    distance >= 0.0 && distance.is_finite()
}

/// Opaque handle of a vertex, stable for the lifetime of its graph.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VertexId(u32);

impl VertexId {
    pub fn new(index: u32) -> VertexId {
        VertexId(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EdgeId(u32);

impl EdgeId {
    pub fn new(index: u32) -> EdgeId {
        EdgeId(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    id: VertexId,
    label: String,
}

impl Vertex {
    pub fn new(id: VertexId, label: impl Into<String>) -> Vertex {
        Vertex {
            id,
            label: label.into(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Read access to an undirected, weighted graph.
///
/// Vertex ids are dense: every vertex of the graph has an id in
/// `0..number_of_vertices()`.
pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32;

    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = &Vertex> + Send + '_>;

    fn vertex(&self, vertex: VertexId) -> Option<&Vertex>;

    fn edge(&self, edge: EdgeId) -> Option<&UndirectedEdge>;

    /// Returns every edge touching `vertex`. A self-loop is reported once.
    fn incident_edges(
        &self,
        vertex: VertexId,
    ) -> Result<Box<dyn ExactSizeIterator<Item = &UndirectedEdge> + Send + '_>>;

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertex(vertex).is_some()
    }

    /// Returns the endpoint of `edge` that is not `vertex`.
    fn opposite(&self, vertex: VertexId, edge: &UndirectedEdge) -> Result<VertexId> {
        edge.opposite(vertex).ok_or(Error::InvalidEdge {
            vertex,
            edge: edge.id(),
        })
    }
}
