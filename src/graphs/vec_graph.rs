use serde::{Deserialize, Serialize};

use super::{
    edge::UndirectedEdge, is_valid_distance, Distance, EdgeId, Graph, Vertex, VertexId,
};
use crate::error::{Error, Result};

/// Graph stored as vertex, edge and incidence vectors indexed by id.
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct VecGraph {
    vertices: Vec<Vertex>,
    edges: Vec<UndirectedEdge>,
    incidence: Vec<Vec<EdgeId>>,
}

impl VecGraph {
    pub fn new() -> VecGraph {
        VecGraph::default()
    }

    pub fn add_vertex(&mut self, label: impl Into<String>) -> VertexId {
        let id = VertexId::new(self.vertices.len() as u32);
        self.vertices.push(Vertex::new(id, label));
        self.incidence.push(Vec::new());
        id
    }

    /// Connects `a` and `b`. Parallel edges and self-loops are kept as given.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, distance: Distance) -> Result<EdgeId> {
        for endpoint in [a, b] {
            if !self.contains_vertex(endpoint) {
                return Err(Error::UnknownVertex(endpoint));
            }
        }

        let id = EdgeId::new(self.edges.len() as u32);
        if !is_valid_distance(distance) {
            return Err(Error::NegativeWeight {
                edge: id,
                weight: distance,
            });
        }

        self.edges.push(UndirectedEdge::new(id, a, b, distance));
        self.incidence[a.index()].push(id);
        if a != b {
            self.incidence[b.index()].push(id);
        }

        Ok(id)
    }
}

impl Graph for VecGraph {
    fn number_of_vertices(&self) -> u32 {
        self.vertices.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        self.edges.len() as u32
    }

    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = &Vertex> + Send + '_> {
        Box::new(self.vertices.iter())
    }

    fn vertex(&self, vertex: VertexId) -> Option<&Vertex> {
        self.vertices.get(vertex.index())
    }

    fn edge(&self, edge: EdgeId) -> Option<&UndirectedEdge> {
        self.edges.get(edge.index())
    }

    fn incident_edges(
        &self,
        vertex: VertexId,
    ) -> Result<Box<dyn ExactSizeIterator<Item = &UndirectedEdge> + Send + '_>> {
        // Resolves edge ids against the edge vector while iterating.
        struct IncidentEdges<'a> {
            ids: std::slice::Iter<'a, EdgeId>,
            edges: &'a [UndirectedEdge],
        }

        impl<'a> Iterator for IncidentEdges<'a> {
            type Item = &'a UndirectedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                let edges = self.edges;
                self.ids.next().map(move |id| &edges[id.index()])
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.ids.size_hint()
            }
        }

        impl<'a> ExactSizeIterator for IncidentEdges<'a> {
            fn len(&self) -> usize {
                self.ids.len()
            }
        }

        let ids = self
            .incidence
            .get(vertex.index())
            .ok_or(Error::UnknownVertex(vertex))?;

        Ok(Box::new(IncidentEdges {
            ids: ids.iter(),
            edges: &self.edges,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::VecGraph;
    use crate::{
        error::Error,
        graphs::{Graph, VertexId},
    };

    #[test]
    fn incident_edges_of_both_endpoints() {
        let mut graph = VecGraph::new();
        let a = graph.add_vertex("A");
        let b = graph.add_vertex("B");
        let c = graph.add_vertex("C");
        let ab = graph.add_edge(a, b, 1.0).unwrap();
        let bc = graph.add_edge(b, c, 2.0).unwrap();

        let ids = |vertex| {
            graph
                .incident_edges(vertex)
                .unwrap()
                .map(|edge| edge.id())
                .collect::<Vec<_>>()
        };

        assert_eq!(ids(a), vec![ab]);
        assert_eq!(ids(b), vec![ab, bc]);
        assert_eq!(ids(c), vec![bc]);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.incident_edges(b).unwrap().len(), 2);
    }

    #[test]
    fn self_loop_is_listed_once() {
        let mut graph = VecGraph::new();
        let a = graph.add_vertex("A");
        graph.add_edge(a, a, 4.0).unwrap();

        assert_eq!(graph.incident_edges(a).unwrap().len(), 1);
    }

    #[test]
    fn unknown_vertex_is_rejected() {
        let mut graph = VecGraph::new();
        let a = graph.add_vertex("A");
        let missing = VertexId::new(5);

        assert!(matches!(
            graph.incident_edges(missing),
            Err(Error::UnknownVertex(vertex)) if vertex == missing
        ));
        assert!(matches!(
            graph.add_edge(a, missing, 1.0),
            Err(Error::UnknownVertex(vertex)) if vertex == missing
        ));
    }

    #[test]
    fn negative_and_non_finite_weights_are_rejected() {
        let mut graph = VecGraph::new();
        let a = graph.add_vertex("A");
        let b = graph.add_vertex("B");

        assert!(matches!(
            graph.add_edge(a, b, -1.0),
            Err(Error::NegativeWeight { .. })
        ));
        assert!(matches!(
            graph.add_edge(a, b, f64::NAN),
            Err(Error::NegativeWeight { .. })
        ));
        assert!(matches!(
            graph.add_edge(a, b, f64::INFINITY),
            Err(Error::NegativeWeight { weight, .. }) if weight == f64::INFINITY
        ));
        assert_eq!(graph.number_of_edges(), 0);
        assert!(graph.add_edge(a, b, 0.0).is_ok());
    }

    #[test]
    fn opposite_requires_touching_edge() {
        let mut graph = VecGraph::new();
        let a = graph.add_vertex("A");
        let b = graph.add_vertex("B");
        let c = graph.add_vertex("C");
        let ab = graph.add_edge(a, b, 1.0).unwrap();
        let edge = graph.edge(ab).unwrap();

        assert_eq!(graph.opposite(a, edge).unwrap(), b);
        assert_eq!(graph.opposite(b, edge).unwrap(), a);
        assert!(matches!(
            graph.opposite(c, edge),
            Err(Error::InvalidEdge { vertex, edge }) if vertex == c && edge == ab
        ));
    }

    #[test]
    fn labels_need_not_be_unique() {
        let mut graph = VecGraph::new();
        let first = graph.add_vertex("Linz");
        let second = graph.add_vertex("Linz");

        assert_ne!(first, second);
        assert_eq!(
            graph.vertices().map(|vertex| vertex.label()).collect::<Vec<_>>(),
            vec!["Linz", "Linz"]
        );
    }
}
