//! Shortest paths on small, undirected, weighted graphs with Dijkstra's
//! algorithm, plus the bookkeeping a view needs to highlight the result.

pub mod error;
pub mod graphs;
pub mod highlight;
pub mod search;
pub mod utility;

pub use error::{Error, Result};
pub use graphs::{vec_graph::VecGraph, Distance, EdgeId, Graph, VertexId};
pub use search::{
    dijkstra::{dijkstra_one_to_one_wrapped, Dijkstra},
    path::Path,
    PathFinding,
};
