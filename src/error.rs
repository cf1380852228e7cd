use thiserror::Error;

use crate::graphs::{Distance, EdgeId, VertexId};

/// Failures reported by the graph store, the path finder and the loaders.
///
/// A query that finds no route is not an error, it yields `Ok(None)`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("vertex {0} is not part of the graph")]
    UnknownVertex(VertexId),

    #[error("edge {edge} does not touch vertex {vertex}")]
    InvalidEdge { vertex: VertexId, edge: EdgeId },

    #[error("no edge connects vertex {tail} and vertex {head}")]
    NotAdjacent { tail: VertexId, head: VertexId },

    #[error("edge {edge} has a negative or non-finite distance {weight}")]
    NegativeWeight { edge: EdgeId, weight: Distance },

    #[error("distance to vertex {vertex} exceeds the representable range")]
    DistanceOverflow { vertex: VertexId },

    #[error("no vertex labeled {0:?}")]
    UnknownLabel(String),

    #[error("both a start and an end vertex have to be selected")]
    IncompleteSelection,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
