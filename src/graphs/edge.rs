use serde::{Deserialize, Serialize};

use super::{Distance, EdgeId, VertexId};

/// An undirected edge, traversable from either endpoint.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UndirectedEdge {
    id: EdgeId,
    endpoints: [VertexId; 2],
    distance: Distance,
}

impl UndirectedEdge {
    pub fn new(id: EdgeId, a: VertexId, b: VertexId, distance: Distance) -> UndirectedEdge {
        UndirectedEdge {
            id,
            endpoints: [a, b],
            distance,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn is_self_loop(&self) -> bool {
        self.endpoints[0] == self.endpoints[1]
    }

    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        let [a, b] = self.endpoints;
        if vertex == a {
            Some(b)
        } else if vertex == b {
            Some(a)
        } else {
            None
        }
    }
}
