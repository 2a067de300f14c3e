//! # Relgraph
//!
//! Relgraph models a finite directed graph over a totally ordered vertex type
//! and reads it as a binary relation. It answers the relation questions
//! (reflexive, symmetric, transitive, anti-symmetric, equivalence), derives
//! roots and equivalence classes, and walks the graph breadth-first or
//! depth-first, iteratively or recursively.
//!
//! Every ordered result is sorted by the vertex order, never by hash-set
//! iteration order, so repeated calls and different search flavours of the
//! same family always agree.
//!
//! ```
//! use relgraph::{edge::Edge, graph::RelationGraph};
//!
//! let g = RelationGraph::new([1, 2, 3, 4], [(1, 2), (1, 3), (3, 4)].map(Edge::from));
//! assert_eq!(g.roots().into_iter().collect::<Vec<_>>(), vec![1]);
//! assert_eq!(g.iterative_dfs(), vec![1, 2, 3, 4]);
//! assert_eq!(g.iterative_bfs(), g.recursive_bfs());
//! ```

pub mod collections;
pub mod edge;
pub mod graph;
pub mod relation;
pub mod traversal;
pub mod vertex;

#[cfg(test)]
mod proptest_tests;
