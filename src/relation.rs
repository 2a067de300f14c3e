//! # Relation Properties
//!
//! Reads a [`RelationGraph`] as a binary relation and answers the classic
//! questions about it: reflexivity, symmetry, transitivity, anti-symmetry and
//! whether it is an equivalence relation. The predicates only look at edge-set
//! membership.
//!
//! Roots and equivalence classes are derived on top of those predicates and
//! come back as ordered sets, ascending by the vertex order.

use std::{collections::BTreeSet, hash::Hash};

use ahash::AHashSet;
use itertools::Itertools;
use tracing::trace;

use crate::{graph::RelationGraph, vertex::VertexIndex};

impl<V: Ord + Hash + Clone> RelationGraph<V> {
    /// True when the number of self-loops equals the number of vertices, i.e.
    /// every vertex is related to itself.
    pub fn is_reflexive(&self) -> bool {
        self.edges().filter(|e| e.is_self_loop()).count() == self.vertex_count()
    }

    pub fn is_symmetric(&self) -> bool {
        self.edges()
            .all(|e| self.contains_edge(e.destination(), e.source()))
    }

    pub fn is_transitive(&self) -> bool {
        let successors = self
            .edges()
            .map(|e| (e.source(), e.destination()))
            .into_group_map();

        self.edges().all(|ab| {
            successors
                .get(ab.destination())
                .into_iter()
                .flatten()
                .all(|c| self.contains_edge(ab.source(), c))
        })
    }

    /// True when no two distinct vertices are related both ways. Self-loops
    /// are allowed.
    pub fn is_anti_symmetric(&self) -> bool {
        self.edges()
            .filter(|e| !e.is_self_loop())
            .all(|e| !self.contains_edge(e.destination(), e.source()))
    }

    pub fn is_equivalence(&self) -> bool {
        self.is_reflexive() && self.is_symmetric() && self.is_transitive()
    }

    /// The roots of the graph, ascending.
    ///
    /// A vertex is a root when nothing points at it and it points at
    /// something. If the graph is an equivalence relation the smallest member
    /// of every equivalence class is added as well.
    pub fn roots(&self) -> BTreeSet<V> {
        let mut targets = AHashSet::new();
        let mut sources = AHashSet::new();
        for e in self.edges() {
            sources.insert(e.source());
            targets.insert(e.destination());
        }

        let mut roots: BTreeSet<V> = self
            .vertices()
            .filter(|v| !targets.contains(v) && sources.contains(v))
            .cloned()
            .collect();

        if self.is_equivalence() {
            // Successors are sorted, so the first one is the class minimum.
            roots.extend(
                self.vertex_indices()
                    .filter_map(|i| self.neighbors(i).first())
                    .map(|&min| self.vertex(min).clone()),
            );
        }

        trace!(roots = roots.len(), "derived roots");
        roots
    }

    /// Every vertex equivalent to `vertex`, including itself.
    ///
    /// Empty when the graph is not an equivalence relation or `vertex` is not
    /// in the graph.
    pub fn equivalence_class(&self, vertex: &V) -> BTreeSet<V> {
        if !self.is_equivalence() {
            return BTreeSet::new();
        }
        self.successors(vertex).cloned().collect()
    }

    /// All equivalence classes, ordered by their smallest member. Empty when
    /// the graph is not an equivalence relation.
    pub fn equivalence_classes(&self) -> Vec<BTreeSet<V>> {
        if !self.is_equivalence() {
            return Vec::new();
        }
        self.vertex_indices()
            .filter(|&i| self.neighbors(i).first() == Some(&i))
            .map(|i| {
                self.neighbors(i)
                    .iter()
                    .map(|&d| self.vertex(d).clone())
                    .collect()
            })
            .collect()
    }

    pub(crate) fn root_indices(&self) -> Vec<VertexIndex> {
        self.roots()
            .iter()
            .filter_map(|r| self.index_of(r))
            .collect()
    }
}
