use ahash::{HashMap, HashMapExt};

use crate::{
    graphs::{Distance, Graph, VertexId},
    search::path::Path,
};

/// Trait for handling data access in Dijkstra's algorithm.
pub trait DijkstraData {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Retrieves the predecessor of a given vertex, if any.
    fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId>;

    /// Sets the predecessor for a given vertex.
    fn set_predecessor(&mut self, vertex: VertexId, predecessor: VertexId);

    /// Retrieves the best known distance to a given vertex, infinity if it
    /// was not reached yet.
    fn get_distance(&self, vertex: VertexId) -> Distance;

    /// Sets the distance to a given vertex.
    fn set_distance(&mut self, vertex: VertexId, distance: Distance);

    /// Constructs the path to a target vertex, if reachable.
    ///
    /// This function traces back from the target vertex using
    /// predecessor data to build the full path. Returns `None`
    /// if the target vertex is unreachable.
    fn get_path(&self, target: VertexId) -> Option<Path> {
        let distance = self.get_distance(target);
        if distance == Distance::INFINITY {
            return None;
        }

        let mut vertices = vec![target];
        let mut predecessor = target;
        while let Some(new_predecessor) = self.get_predecessor(predecessor) {
            predecessor = new_predecessor;
            vertices.push(predecessor);
        }
        vertices.reverse();

        Some(Path { vertices, distance })
    }
}

/// Predecessors and distances stored in vectors indexed by vertex id.
pub struct DijkstraDataVec {
    predecessors: Vec<Option<VertexId>>,
    distances: Vec<Distance>,
}

impl DijkstraDataVec {
    pub fn new(graph: &dyn Graph) -> Self {
        DijkstraDataVec {
            predecessors: vec![None; graph.number_of_vertices() as usize],
            distances: vec![Distance::INFINITY; graph.number_of_vertices() as usize],
        }
    }
}

impl DijkstraData for DijkstraDataVec {
    fn clear(&mut self) {
        self.predecessors.fill(None);
        self.distances.fill(Distance::INFINITY);
    }

    fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors[vertex.index()]
    }

    fn set_predecessor(&mut self, vertex: VertexId, predecessor: VertexId) {
        self.predecessors[vertex.index()] = Some(predecessor);
    }

    fn get_distance(&self, vertex: VertexId) -> Distance {
        self.distances[vertex.index()]
    }

    fn set_distance(&mut self, vertex: VertexId, distance: Distance) {
        self.distances[vertex.index()] = distance
    }
}

/// Predecessors and distances of the reached vertices only.
#[derive(Default)]
pub struct DijkstraDataHashMap {
    predecessors: HashMap<VertexId, VertexId>,
    distances: HashMap<VertexId, Distance>,
}

impl DijkstraDataHashMap {
    pub fn new() -> Self {
        DijkstraDataHashMap {
            predecessors: HashMap::new(),
            distances: HashMap::new(),
        }
    }
}

impl DijkstraData for DijkstraDataHashMap {
    fn clear(&mut self) {
        self.predecessors.clear();
        self.distances.clear();
    }

    fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(&vertex).copied()
    }

    fn set_predecessor(&mut self, vertex: VertexId, predecessor: VertexId) {
        self.predecessors.insert(vertex, predecessor);
    }

    fn get_distance(&self, vertex: VertexId) -> Distance {
        *self.distances.get(&vertex).unwrap_or(&Distance::INFINITY)
    }

    fn set_distance(&mut self, vertex: VertexId, distance: Distance) {
        self.distances.insert(vertex, distance);
    }
}
