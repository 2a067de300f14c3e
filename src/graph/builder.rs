use std::hash::Hash;

use crate::edge::Edge;

use super::RelationGraph;

/// Incrementally collects vertices and edges, then builds a [`RelationGraph`].
///
/// Adding an edge adds both of its endpoints, so a builder can never produce
/// a graph with edges outside its vertex set.
#[derive(Clone, Debug)]
pub struct RelationGraphBuilder<V> {
    vertices: Vec<V>,
    edges: Vec<Edge<V>>,
}

impl<V> RelationGraphBuilder<V> {
    pub fn new() -> Self {
        RelationGraphBuilder {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn add_vertex(&mut self, vertex: V) -> &mut Self {
        self.vertices.push(vertex);
        self
    }

    pub fn add_edge(&mut self, source: V, destination: V) -> &mut Self
    where
        V: Clone,
    {
        self.vertices.push(source.clone());
        self.vertices.push(destination.clone());
        self.edges.push(Edge::new(source, destination));
        self
    }
}

impl<V: Ord + Hash + Clone> RelationGraphBuilder<V> {
    pub fn build(self) -> RelationGraph<V> {
        self.into()
    }
}

impl<V> Default for RelationGraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Ord + Hash + Clone> From<RelationGraphBuilder<V>> for RelationGraph<V> {
    fn from(builder: RelationGraphBuilder<V>) -> Self {
        RelationGraph::new(builder.vertices, builder.edges)
    }
}
