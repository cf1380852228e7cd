use ahash::{HashSet, HashSetExt};

use crate::graphs::{Graph, VertexId};

/// Tracks which vertices were already settled by a search.
pub trait VertexExpandedData {
    /// Marks `vertex` as expanded and returns whether it already was.
    fn expand(&mut self, vertex: VertexId) -> bool;

    fn clear(&mut self);

    fn number_of_expanded(&self) -> usize;
}

pub struct VertexExpandedDataVec {
    expanded: Vec<bool>,
    number_of_expanded: usize,
}

impl VertexExpandedDataVec {
    pub fn new(graph: &dyn Graph) -> Self {
        VertexExpandedDataVec {
            expanded: vec![false; graph.number_of_vertices() as usize],
            number_of_expanded: 0,
        }
    }
}

impl VertexExpandedData for VertexExpandedDataVec {
    fn expand(&mut self, vertex: VertexId) -> bool {
        let is_expanded = self.expanded[vertex.index()];
        self.expanded[vertex.index()] = true;
        if !is_expanded {
            self.number_of_expanded += 1;
        }
        is_expanded
    }

    fn clear(&mut self) {
        self.expanded.fill(false);
        self.number_of_expanded = 0;
    }

    fn number_of_expanded(&self) -> usize {
        self.number_of_expanded
    }
}

#[derive(Default)]
pub struct VertexExpandedDataHashSet {
    expanded: HashSet<VertexId>,
}

impl VertexExpandedDataHashSet {
    pub fn new() -> Self {
        VertexExpandedDataHashSet {
            expanded: HashSet::new(),
        }
    }
}

impl VertexExpandedData for VertexExpandedDataHashSet {
    fn expand(&mut self, vertex: VertexId) -> bool {
        !self.expanded.insert(vertex)
    }

    fn clear(&mut self) {
        self.expanded.clear()
    }

    fn number_of_expanded(&self) -> usize {
        self.expanded.len()
    }
}
