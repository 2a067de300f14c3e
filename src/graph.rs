//! # Relation Graphs
//!
//! A [`RelationGraph`] is a finite directed graph read as a binary relation over
//! its vertex set: an edge `(a, b)` says "`a` is related to `b`". It is built
//! once and never mutated afterwards.
//!
//! On construction the graph sorts its vertices by their `Ord` and assigns each
//! one a [`VertexIndex`] (its rank). It then derives the *adjacency index*: for
//! every vertex, the indices of its direct successors in ascending order. Every
//! ordered output of the crate is read off this index, so results never depend
//! on hash-set iteration order.
//!
//! Edges whose endpoints are not in the vertex set are a caller error. [`RelationGraph::new`]
//! keeps them in the edge set but leaves them out of the adjacency index;
//! [`RelationGraph::try_new`] rejects them with [`GraphError::UnknownVertex`].

use std::hash::Hash;

use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    edge::Edge,
    vertex::{VertexIndex, VertexVec},
};

pub mod builder;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<V> {
    #[error("edge {edge:?} names a vertex outside the vertex set")]
    UnknownVertex { edge: Edge<V> },
}

#[derive(Debug, Clone)]
pub struct RelationGraph<V> {
    /// All vertices, ascending.
    vertices: VertexVec<V>,
    lookup: AHashMap<V, VertexIndex>,
    edges: AHashSet<Edge<V>>,
    /// Successors of each vertex, ascending.
    adjacency: VertexVec<Vec<VertexIndex>>,
}

impl<V: Ord + Hash + Clone> RelationGraph<V> {
    /// Builds the graph and its adjacency index.
    ///
    /// Both inputs have set semantics: repeated vertices or edges collapse.
    pub fn new(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = Edge<V>>,
    ) -> Self {
        let vertices: VertexVec<V> = vertices.into_iter().sorted().dedup().collect();
        let lookup: AHashMap<V, VertexIndex> = vertices
            .iter()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        let edges: AHashSet<Edge<V>> = edges.into_iter().collect();

        let mut adjacency: VertexVec<Vec<VertexIndex>> =
            vertices.values().map(|_| Vec::new()).collect();
        let mut dangling = 0usize;
        for edge in &edges {
            match (lookup.get(edge.source()), lookup.get(edge.destination())) {
                (Some(&s), Some(&d)) => adjacency[s].push(d),
                _ => dangling += 1,
            }
        }
        for successors in adjacency.values_mut() {
            successors.sort_unstable();
        }

        if dangling > 0 {
            warn!(
                dangling,
                "edges name vertices outside the vertex set; left out of the adjacency index"
            );
        }
        debug!(
            vertices = vertices.len(),
            edges = edges.len(),
            "built adjacency index"
        );

        RelationGraph {
            vertices,
            lookup,
            edges,
            adjacency,
        }
    }

    /// Like [`RelationGraph::new`], but fails on the first edge that names a
    /// vertex outside the vertex set.
    pub fn try_new(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = Edge<V>>,
    ) -> Result<Self, GraphError<V>> {
        let vertices: AHashSet<V> = vertices.into_iter().collect();
        let edges: Vec<Edge<V>> = edges.into_iter().collect();

        if let Some(edge) = edges
            .iter()
            .find(|e| !vertices.contains(e.source()) || !vertices.contains(e.destination()))
        {
            return Err(GraphError::UnknownVertex { edge: edge.clone() });
        }

        Ok(Self::new(vertices, edges))
    }

    pub fn index_of(&self, vertex: &V) -> Option<VertexIndex> {
        self.lookup.get(vertex).copied()
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.lookup.contains_key(vertex)
    }

    pub fn contains_edge(&self, source: &V, destination: &V) -> bool {
        self.edges
            .contains(&Edge::new(source.clone(), destination.clone()))
    }

    /// Destinations of the edges leaving `vertex`, ascending. Empty for a
    /// vertex that is not in the graph.
    pub fn successors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.index_of(vertex)
            .into_iter()
            .flat_map(move |i| self.neighbors(i).iter().map(move |&d| &self.vertices[d]))
    }

    /// Number of edges in the edge set that end at `vertex`.
    pub fn in_degree(&self, vertex: &V) -> usize {
        self.edges
            .iter()
            .filter(|e| e.destination() == vertex)
            .count()
    }

    /// Number of edges in the edge set that start at `vertex`.
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.edges.iter().filter(|e| e.source() == vertex).count()
    }
}

impl<V> RelationGraph<V> {
    /// All vertices in ascending order.
    pub fn vertices(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.vertices.values()
    }

    pub fn vertex_indices(&self) -> impl DoubleEndedIterator<Item = VertexIndex> + ExactSizeIterator {
        (0..self.vertices.len()).map(VertexIndex)
    }

    /// The vertex at `index`. Panics if `index` does not come from this graph.
    pub fn vertex(&self, index: VertexIndex) -> &V {
        &self.vertices[index]
    }

    /// The edge set, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<V>> {
        self.edges.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The adjacency index: every vertex with its successors, both ascending.
    pub fn adjacency(&self) -> impl Iterator<Item = (&V, Vec<&V>)> {
        self.adjacency.iter().map(move |(i, successors)| {
            (
                &self.vertices[i],
                successors.iter().map(|&d| &self.vertices[d]).collect(),
            )
        })
    }

    pub(crate) fn neighbors(&self, index: VertexIndex) -> &[VertexIndex] {
        &self.adjacency[index]
    }
}

impl<V: Ord + Hash + Clone> FromIterator<Edge<V>> for RelationGraph<V> {
    /// Collects edges into a graph whose vertex set is exactly their endpoints.
    fn from_iter<I: IntoIterator<Item = Edge<V>>>(iter: I) -> Self {
        let edges: Vec<Edge<V>> = iter.into_iter().collect();
        let vertices: Vec<V> = edges
            .iter()
            .flat_map(|e| [e.source().clone(), e.destination().clone()])
            .collect();
        RelationGraph::new(vertices, edges)
    }
}
