//! # Traversals
//!
//! Breadth-first and depth-first search over a [`RelationGraph`], each in an
//! iterative and a recursive flavour.
//!
//! Every search starts from the [roots](RelationGraph::roots) in ascending
//! order and offers the successors of a vertex in ascending order, as stored
//! in the adjacency index. A vertex is marked *found* the moment it is put on
//! the work list and is never put there twice, so each vertex shows up at most
//! once in the output. Vertices unreachable from every root do not show up.
//!
//! The two flavours share one step function per search family: the iterative
//! flavour calls it in a loop, the recursive one calls itself once per step.
//! Their outputs are therefore identical.
//!
//! Depth-first search pushes the unfound successors of a vertex in descending
//! order, so they come off the stack ascending. A vertex is emitted when it is
//! popped, before any of its successors.

use std::hash::Hash;

use bitvec::vec::BitVec;
use tracing::trace;

use crate::{
    collections::{Queue, Stack},
    graph::RelationGraph,
    vertex::VertexIndex,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOrder {
    BreadthFirst,
    DepthFirst,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    Iterative,
    Recursive,
}

/// Found-set and output shared by both search families.
struct Visit {
    found: BitVec,
    order: Vec<VertexIndex>,
}

impl Visit {
    fn new(n: usize) -> Self {
        Visit {
            found: BitVec::repeat(false, n),
            order: Vec::with_capacity(n),
        }
    }

    fn is_found(&self, v: VertexIndex) -> bool {
        self.found[v.0]
    }

    /// Marks `v` as found, returning `false` if it already was.
    fn mark(&mut self, v: VertexIndex) -> bool {
        if self.is_found(v) {
            return false;
        }
        self.found.set(v.0, true);
        true
    }

    fn emit(&mut self, v: VertexIndex) {
        self.order.push(v);
    }
}

trait Search {
    fn visit(&self) -> &Visit;

    /// Puts `root` on the work list and marks it found.
    fn seed(&mut self, root: VertexIndex);

    /// Takes one vertex off the work list. Returns `false` if the list was
    /// empty.
    fn step(&mut self) -> bool;

    fn into_order(self) -> Vec<VertexIndex>;
}

struct BreadthFirst<'a, V> {
    graph: &'a RelationGraph<V>,
    queue: Queue<VertexIndex>,
    visit: Visit,
}

impl<'a, V> BreadthFirst<'a, V> {
    fn new(graph: &'a RelationGraph<V>) -> Self {
        BreadthFirst {
            graph,
            queue: Queue::new(),
            visit: Visit::new(graph.vertex_count()),
        }
    }
}

impl<V> Search for BreadthFirst<'_, V> {
    fn visit(&self) -> &Visit {
        &self.visit
    }

    fn seed(&mut self, root: VertexIndex) {
        self.visit.mark(root);
        self.queue.enqueue(root);
    }

    fn step(&mut self) -> bool {
        let Ok(current) = self.queue.dequeue() else {
            return false;
        };
        self.visit.emit(current);

        for &next in self.graph.neighbors(current) {
            if self.visit.mark(next) {
                self.queue.enqueue(next);
            }
        }
        true
    }

    fn into_order(self) -> Vec<VertexIndex> {
        self.visit.order
    }
}

struct DepthFirst<'a, V> {
    graph: &'a RelationGraph<V>,
    stack: Stack<VertexIndex>,
    visit: Visit,
}

impl<'a, V> DepthFirst<'a, V> {
    fn new(graph: &'a RelationGraph<V>) -> Self {
        DepthFirst {
            graph,
            stack: Stack::new(),
            visit: Visit::new(graph.vertex_count()),
        }
    }
}

impl<V> Search for DepthFirst<'_, V> {
    fn visit(&self) -> &Visit {
        &self.visit
    }

    fn seed(&mut self, root: VertexIndex) {
        self.visit.mark(root);
        self.stack.push(root);
    }

    fn step(&mut self) -> bool {
        let Ok(&top) = self.stack.peek() else {
            return false;
        };
        let successors = self.graph.neighbors(top);

        if let Ok(current) = self.stack.pop() {
            self.visit.emit(current);
        }

        if successors.is_empty() {
            // Only an unfound vertex may be emitted on the way past; anything
            // pushed by a step is already found and waits for its own step.
            let unfound_next = self
                .stack
                .peek()
                .is_ok_and(|&next| !self.visit.is_found(next));
            if unfound_next {
                if let Ok(next) = self.stack.pop() {
                    self.visit.mark(next);
                    self.visit.emit(next);
                }
            }
        } else {
            for &next in successors.iter().rev() {
                if self.visit.mark(next) {
                    self.stack.push(next);
                }
            }
        }
        true
    }

    fn into_order(self) -> Vec<VertexIndex> {
        self.visit.order
    }
}

fn drain_recursive<S: Search>(search: &mut S) {
    if search.step() {
        drain_recursive(search);
    }
}

fn run<S: Search>(mut search: S, roots: &[VertexIndex], strategy: Strategy) -> Vec<VertexIndex> {
    for &root in roots {
        if search.visit().is_found(root) {
            continue;
        }
        search.seed(root);
        match strategy {
            Strategy::Iterative => while search.step() {},
            Strategy::Recursive => drain_recursive(&mut search),
        }
    }
    search.into_order()
}

impl<V: Ord + Hash + Clone> RelationGraph<V> {
    /// Runs the requested search and returns the vertices in visiting order.
    pub fn search(&self, order: SearchOrder, strategy: Strategy) -> Vec<V> {
        let roots = self.root_indices();
        let visited = match order {
            SearchOrder::BreadthFirst => run(BreadthFirst::new(self), &roots, strategy),
            SearchOrder::DepthFirst => run(DepthFirst::new(self), &roots, strategy),
        };
        trace!(
            ?order,
            ?strategy,
            roots = roots.len(),
            visited = visited.len(),
            "search finished"
        );
        visited.into_iter().map(|v| self.vertex(v).clone()).collect()
    }

    pub fn iterative_bfs(&self) -> Vec<V> {
        self.search(SearchOrder::BreadthFirst, Strategy::Iterative)
    }

    pub fn recursive_bfs(&self) -> Vec<V> {
        self.search(SearchOrder::BreadthFirst, Strategy::Recursive)
    }

    pub fn iterative_dfs(&self) -> Vec<V> {
        self.search(SearchOrder::DepthFirst, Strategy::Iterative)
    }

    pub fn recursive_dfs(&self) -> Vec<V> {
        self.search(SearchOrder::DepthFirst, Strategy::Recursive)
    }
}
