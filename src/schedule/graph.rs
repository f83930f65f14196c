// src/schedule/graph.rs

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use tracing::debug;

/// Simple in-memory directed graph keyed by vertex identifier.
///
/// Each vertex owns the list of vertices it points at, kept in insertion
/// order. For course planning an edge `A -> B` reads "A lists B as a
/// prerequisite".
///
/// Invariants:
/// - both endpoints of every edge were vertices when the edge was added
/// - no ordered pair appears twice in an adjacency list
#[derive(Debug, Clone)]
pub struct DirectedGraph<V> {
    adjacency: HashMap<V, Vec<V>>,
}

impl<V> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }
}

impl<V> DirectedGraph<V>
where
    V: Eq + Hash + Clone,
{
    /// Construct an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `vertex` if it is not already present.
    ///
    /// Returns `true` if the graph changed.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    /// Remove `vertex` together with its outgoing edges.
    ///
    /// Incoming edges held by other vertices are left untouched.
    pub fn remove_vertex<Q>(&mut self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.remove(vertex).is_some()
    }

    /// Append `to` to the adjacency list of `from`.
    ///
    /// No-op when either endpoint is missing or the edge already exists.
    pub fn add_edge(&mut self, from: &V, to: &V) -> bool {
        if !self.has_vertex(to) || self.has_edge(from, to) {
            debug!("add_edge: skipping missing endpoint or duplicate edge");
            return false;
        }
        match self.adjacency.get_mut(from) {
            Some(adjacent) => {
                adjacent.push(to.clone());
                true
            }
            None => {
                debug!("add_edge: source vertex not in graph");
                false
            }
        }
    }

    /// Remove the first occurrence of `to` from the adjacency list of `from`.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        if !self.has_vertex(to) {
            return false;
        }
        let Some(adjacent) = self.adjacency.get_mut(from) else {
            return false;
        };
        match adjacent.iter().position(|v| v == to) {
            Some(idx) => {
                adjacent.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn has_vertex<Q>(&self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.contains_key(vertex)
    }

    /// The stored identifier equal to `vertex`, if present.
    pub fn get_vertex<Q>(&self, vertex: &Q) -> Option<&V>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.get_key_value(vertex).map(|(v, _)| v)
    }

    /// Whether the ordered edge `from -> to` exists.
    pub fn has_edge<Q>(&self, from: &Q, to: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency
            .get(from)
            .is_some_and(|adjacent| adjacent.iter().any(|v| Borrow::<Q>::borrow(v) == to))
    }

    /// Set of all vertex identifiers. Unordered; callers sort if they need to.
    pub fn all_vertices(&self) -> HashSet<&V> {
        self.adjacency.keys().collect()
    }

    /// Iterate over all vertex identifiers in arbitrary order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Outgoing edges of `vertex` in insertion order, or `None` if `vertex`
    /// is not in the graph.
    pub fn adjacent_vertices_of<Q>(&self, vertex: &Q) -> Option<&[V]>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Every edge as a `(from, to)` pair.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
        self.adjacency
            .iter()
            .flat_map(|(from, adjacent)| adjacent.iter().map(move |to| (from, to)))
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// One line per edge (`A -> B`), or `A -> ` for a vertex without edges.
/// Vertices are printed in sorted order.
impl<V> fmt::Display for DirectedGraph<V>
where
    V: Eq + Hash + Clone + Ord + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vertices: Vec<&V> = self.vertices().collect();
        vertices.sort();

        for vertex in vertices {
            let adjacent = self.adjacent_vertices_of(vertex).unwrap_or(&[]);
            if adjacent.is_empty() {
                writeln!(f, "{vertex} -> ")?;
            }
            for to in adjacent {
                writeln!(f, "{vertex} -> {to}")?;
            }
        }
        Ok(())
    }
}
