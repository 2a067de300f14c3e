//! Property-based tests over random relations.

use std::collections::BTreeSet;

use itertools::Itertools;
use proptest::prelude::*;

use crate::{edge::Edge, graph::RelationGraph};

/// Strategy for an arbitrary relation over `0..n`.
fn arb_graph() -> impl Strategy<Value = RelationGraph<u8>> {
    (1u8..12).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..40)
            .prop_map(move |pairs| RelationGraph::new(0..n, pairs.into_iter().map(Edge::from)))
    })
}

/// Strategy for an equivalence relation: vertex `i` lands in class `classes[i]`
/// and is related to every vertex of the same class.
fn arb_equivalence() -> impl Strategy<Value = RelationGraph<u8>> {
    prop::collection::vec(0u8..4, 1..10).prop_map(|classes| {
        let n = classes.len() as u8;
        let edges = (0..n)
            .cartesian_product(0..n)
            .filter(|&(a, b)| classes[a as usize] == classes[b as usize])
            .map(Edge::from);
        RelationGraph::new(0..n, edges)
    })
}

/// Everything reachable from the roots, found by a plain fixpoint.
fn reachable_from_roots(g: &RelationGraph<u8>) -> BTreeSet<u8> {
    let mut reached: BTreeSet<u8> = g.roots();
    loop {
        let next: BTreeSet<u8> = reached
            .iter()
            .flat_map(|v| g.successors(v).copied())
            .chain(reached.iter().copied())
            .collect();
        if next.len() == reached.len() {
            return reached;
        }
        reached = next;
    }
}

proptest! {
    #[test]
    fn equivalence_is_the_conjunction(g in arb_graph()) {
        prop_assert_eq!(
            g.is_equivalence(),
            g.is_reflexive() && g.is_symmetric() && g.is_transitive()
        );
    }

    #[test]
    fn roots_are_strictly_ascending(g in arb_graph()) {
        let roots: Vec<u8> = g.roots().into_iter().collect();
        prop_assert!(roots.iter().tuple_windows().all(|(a, b)| a < b));
    }

    #[test]
    fn flavours_agree_and_repeat(g in arb_graph()) {
        let bfs = g.iterative_bfs();
        let dfs = g.iterative_dfs();
        prop_assert_eq!(&bfs, &g.recursive_bfs());
        prop_assert_eq!(&dfs, &g.recursive_dfs());
        prop_assert_eq!(&bfs, &g.iterative_bfs());
        prop_assert_eq!(&dfs, &g.recursive_dfs());
    }

    #[test]
    fn every_reachable_vertex_is_visited_once(g in arb_graph()) {
        let reachable = reachable_from_roots(&g);
        for order in [g.iterative_bfs(), g.iterative_dfs()] {
            prop_assert!(order.len() <= g.vertex_count());
            prop_assert!(order.iter().all_unique());
            let visited: BTreeSet<u8> = order.into_iter().collect();
            prop_assert_eq!(&visited, &reachable);
        }
    }

    #[test]
    fn equivalence_classes_are_consistent(g in arb_equivalence()) {
        prop_assert!(g.is_equivalence());

        for v in g.vertices() {
            let class = g.equivalence_class(v);
            let successors: BTreeSet<u8> = g.successors(v).copied().collect();
            prop_assert!(class.contains(v));
            prop_assert_eq!(&class, &successors);
            for member in &class {
                prop_assert_eq!(&g.equivalence_class(member), &class);
            }
        }

        let minima: BTreeSet<u8> = g
            .equivalence_classes()
            .iter()
            .filter_map(|class| class.first().copied())
            .collect();
        prop_assert_eq!(g.roots(), minima);

        // Every vertex sits in some class, so every vertex is visited.
        prop_assert_eq!(g.iterative_bfs().len(), g.vertex_count());
        prop_assert_eq!(g.recursive_dfs().len(), g.vertex_count());
    }
}
