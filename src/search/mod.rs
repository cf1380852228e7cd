use path::{Path, ShortestPathRequest};

use crate::{error::Result, graphs::Distance};

pub mod collections;
pub mod dijkstra;
pub mod path;

/// A single-pair shortest path query. `Ok(None)` means the target cannot be
/// reached from the source.
pub trait PathFinding: Send + Sync {
    fn shortest_path(&self, request: &ShortestPathRequest) -> Result<Option<Path>>;

    fn shortest_path_distance(&self, request: &ShortestPathRequest) -> Result<Option<Distance>> {
        Ok(self.shortest_path(request)?.map(|path| path.distance))
    }
}
