use std::collections::VecDeque;

use ahash::{HashSet, HashSetExt};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use rand::Rng;

use super::{edge::UndirectedEdge, vec_graph::VecGraph, Distance, Graph, VertexId};
use crate::{
    error::{Error, Result},
    search::path::{Path, ShortestPathTestCase},
};

const DISTANCE_TOLERANCE: Distance = 1e-9;

fn same_distance(a: Distance, b: Distance) -> bool {
    (a - b).abs() <= DISTANCE_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// Returns the lightest edge connecting `tail` and `head`, if there is one.
pub fn lightest_edge_between(
    graph: &dyn Graph,
    tail: VertexId,
    head: VertexId,
) -> Result<Option<&UndirectedEdge>> {
    Ok(graph
        .incident_edges(tail)?
        .filter(|edge| edge.opposite(tail) == Some(head))
        .min_by_key(|edge| OrderedFloat(edge.distance())))
}

/// Sum of the lightest edges between consecutive vertices, or `None` if two
/// consecutive vertices are not adjacent.
pub fn path_distance(graph: &dyn Graph, vertices: &[VertexId]) -> Result<Option<Distance>> {
    let mut distance = 0.0;
    for (tail, head) in vertices.iter().copied().tuple_windows() {
        match lightest_edge_between(graph, tail, head)? {
            Some(edge) => distance += edge.distance(),
            None => return Ok(None),
        }
    }
    Ok(Some(distance))
}

/// Whether any sequence of edges joins `source` and `target`, ignoring
/// distances.
pub fn is_connected(graph: &dyn Graph, source: VertexId, target: VertexId) -> Result<bool> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([source]);
    visited.insert(source);

    while let Some(tail) = queue.pop_front() {
        if tail == target {
            return Ok(true);
        }
        for edge in graph.incident_edges(tail)? {
            let head = graph.opposite(tail, edge)?;
            if visited.insert(head) {
                queue.push_back(head);
            }
        }
    }

    Ok(false)
}

/// Resolves a vertex by its label first and by its numeric id second.
pub fn resolve_vertex(graph: &dyn Graph, label_or_id: &str) -> Result<VertexId> {
    if let Some(vertex) = graph
        .vertices()
        .find(|vertex| vertex.label() == label_or_id)
    {
        return Ok(vertex.id());
    }

    match label_or_id.parse::<u32>() {
        Ok(index) if graph.contains_vertex(VertexId::new(index)) => Ok(VertexId::new(index)),
        _ => Err(Error::UnknownLabel(label_or_id.to_string())),
    }
}

/// Check if a path is correct for a given test case.
pub fn validate_path(
    graph: &dyn Graph,
    validation: &ShortestPathTestCase,
    path: &Option<Path>,
) -> std::result::Result<(), String> {
    let Some(path) = path else {
        if validation.distance.is_some() {
            return Err("no path is found but there should be one".to_string());
        }
        return Ok(());
    };

    let Some(distance) = validation.distance else {
        return Err("a path was found where there should be none".to_string());
    };

    if !same_distance(path.distance, distance) {
        return Err(format!(
            "wrong path distance {}, expected {}",
            path.distance, distance
        ));
    }

    if path.vertices.first() != Some(&validation.request.source) {
        return Err("first vertex of path is not source of request".to_string());
    }
    if path.vertices.last() != Some(&validation.request.target) {
        return Err("last vertex of path is not target of request".to_string());
    }

    // check if there is an edge between consecutive path vertices.
    let true_distance = path_distance(graph, &path.vertices)
        .map_err(|error| error.to_string())?
        .ok_or_else(|| "consecutive path vertices are not adjacent".to_string())?;
    if !same_distance(path.distance, true_distance) {
        return Err(format!(
            "path distance {} does not match its edges {}",
            path.distance, true_distance
        ));
    }

    Ok(())
}

/// Minimum distance over all simple paths from `source` to `target`. Explores
/// every simple path, so only use it on small graphs.
pub fn brute_force_distance(
    graph: &dyn Graph,
    source: VertexId,
    target: VertexId,
) -> Result<Option<Distance>> {
    for vertex in [source, target] {
        if !graph.contains_vertex(vertex) {
            return Err(Error::UnknownVertex(vertex));
        }
    }

    let mut on_path = HashSet::new();
    on_path.insert(source);
    let mut best = None;
    explore_simple_paths(graph, source, target, 0.0, &mut on_path, &mut best)?;

    match best {
        Some(distance) if distance.is_infinite() => {
            Err(Error::DistanceOverflow { vertex: target })
        }
        _ => Ok(best),
    }
}

fn explore_simple_paths(
    graph: &dyn Graph,
    current: VertexId,
    target: VertexId,
    distance: Distance,
    on_path: &mut HashSet<VertexId>,
    best: &mut Option<Distance>,
) -> Result<()> {
    if current == target {
        if best.map_or(true, |best| distance < best) {
            *best = Some(distance);
        }
        return Ok(());
    }

    for edge in graph.incident_edges(current)? {
        let head = graph.opposite(current, edge)?;
        if !on_path.insert(head) {
            continue;
        }
        explore_simple_paths(
            graph,
            head,
            target,
            distance + edge.distance(),
            on_path,
            best,
        )?;
        on_path.remove(&head);
    }

    Ok(())
}

/// Random graph with integral distances in `0..=max_weight`. Every vertex pair,
/// including a vertex with itself, is connected with `edge_probability`, and
/// connected pairs get a parallel edge with a quarter of that probability.
pub fn random_graph<R: Rng>(
    rng: &mut R,
    number_of_vertices: u32,
    edge_probability: f64,
    max_weight: u32,
) -> VecGraph {
    let mut graph = VecGraph::new();
    let vertices = (0..number_of_vertices)
        .map(|index| graph.add_vertex(format!("v{}", index)))
        .collect_vec();

    let edge_probability = if edge_probability.is_nan() {
        0.0
    } else {
        edge_probability.clamp(0.0, 1.0)
    };
    for (i, &a) in vertices.iter().enumerate() {
        for &b in vertices[i..].iter() {
            if !rng.gen_bool(edge_probability) {
                continue;
            }
            let copies = if rng.gen_bool(edge_probability / 4.0) { 2 } else { 1 };
            for _ in 0..copies {
                let distance = rng.gen_range(0..=max_weight) as Distance;
                graph
                    .add_edge(a, b, distance)
                    .expect("endpoints exist and distance is non-negative");
            }
        }
    }

    graph
}
