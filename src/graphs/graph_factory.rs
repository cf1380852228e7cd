use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{vec_graph::VecGraph, Distance, Graph, VertexId};
use crate::error::Result;

/// Serializable description of a graph. Edges refer to vertices by their
/// position in `vertices`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GraphDescription {
    pub vertices: Vec<VertexDescription>,
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VertexDescription {
    pub label: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EdgeDescription {
    pub from: VertexId,
    pub to: VertexId,
    pub distance: Distance,
}

pub struct GraphFactory {}

impl GraphFactory {
    pub fn from_description(description: &GraphDescription) -> Result<VecGraph> {
        let mut graph = VecGraph::new();

        for vertex in description.vertices.iter() {
            graph.add_vertex(vertex.label.clone());
        }

        for edge in description.edges.iter() {
            graph.add_edge(edge.from, edge.to, edge.distance)?;
        }

        Ok(graph)
    }

    pub fn from_json_str(json: &str) -> Result<VecGraph> {
        let description: GraphDescription = serde_json::from_str(json)?;
        GraphFactory::from_description(&description)
    }

    pub fn from_json_file(file: &Path) -> Result<VecGraph> {
        let reader = BufReader::new(File::open(file)?);
        let description: GraphDescription = serde_json::from_reader(reader)?;
        let graph = GraphFactory::from_description(&description)?;

        info!(
            file = %file.display(),
            vertices = graph.number_of_vertices(),
            edges = graph.number_of_edges(),
            "loaded graph"
        );

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::GraphFactory;
    use crate::{
        error::Error,
        graphs::{Graph, VertexId},
    };

    #[test]
    fn builds_graph_from_json() {
        let graph = GraphFactory::from_json_str(
            r#"{
                "vertices": [{ "label": "A" }, { "label": "B" }],
                "edges": [{ "from": 0, "to": 1, "distance": 4.5 }]
            }"#,
        )
        .unwrap();

        assert_eq!(graph.number_of_vertices(), 2);
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.vertex(VertexId::new(1)).unwrap().label(), "B");
        let edge = graph.incident_edges(VertexId::new(0)).unwrap().next().unwrap();
        assert_eq!(edge.distance(), 4.5);
    }

    #[test]
    fn edges_are_optional() {
        let graph = GraphFactory::from_json_str(r#"{ "vertices": [{ "label": "A" }] }"#).unwrap();

        assert_eq!(graph.number_of_vertices(), 1);
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn dangling_edge_is_rejected() {
        let result = GraphFactory::from_json_str(
            r#"{
                "vertices": [{ "label": "A" }],
                "edges": [{ "from": 0, "to": 3, "distance": 1.0 }]
            }"#,
        );

        assert!(matches!(result, Err(Error::UnknownVertex(vertex)) if vertex == VertexId::new(3)));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            GraphFactory::from_json_str("{ not json"),
            Err(Error::Json(_))
        ));
    }
}
