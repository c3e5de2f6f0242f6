//! Directed graph over string labels with iterative depth-first traversal.
//!
//! Graphs are described by adjacency lines, `label neighbor neighbor ...`.
//! Node ids follow first appearance: every line's head label is registered
//! first, in line order, then unseen neighbor labels in line/column order.
//! That fixes both the order in which traversal roots are tried and the
//! order of the emitted labels.
//!
//! ## Traversal
//!
//! ```text
//!   for root in 0..n (skipping visited):
//!     stack = [root]
//!     while let Some(node) = stack.pop():
//!       if visited[node]: continue
//!       visit(node)
//!       push unvisited neighbors in REVERSE, so the first-listed
//!       neighbor is popped (explored) first
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use algokit::graph::Graph;
//!
//! let graph = Graph::from_adjacency_lines(&["A B C", "B D", "C", "D"]);
//! assert_eq!(graph.depth_first_labels(), vec!["A", "B", "D", "C"]);
//! ```

use crate::ds::LabelInterner;

/// Adjacency-list graph with interned node labels.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    labels: LabelInterner,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from adjacency lines. Blank lines contribute nothing.
    ///
    /// Labels are split on any run of whitespace, so repeated separators never
    /// produce an empty label.
    pub fn from_adjacency_lines(lines: &[&str]) -> Self {
        let mut graph = Self::new();
        for line in lines {
            if let Some(head) = line.split_whitespace().next() {
                graph.add_node(head);
            }
        }
        for line in lines {
            let mut tokens = line.split_whitespace();
            let Some(head) = tokens.next() else {
                continue;
            };
            for neighbor in tokens {
                graph.add_edge(head, neighbor);
            }
        }
        graph
    }

    /// Registers `label` (if new) and returns its id.
    pub fn add_node(&mut self, label: &str) -> usize {
        let id = self.labels.intern(label);
        if id == self.adjacency.len() {
            self.adjacency.push(Vec::new());
        }
        id
    }

    /// Adds a directed edge, registering either endpoint if new.
    ///
    /// Parallel edges are kept.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let from = self.add_node(from);
        let to = self.add_node(to);
        self.adjacency[from].push(to);
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Out-neighbors of `id` in insertion order; empty for unknown ids.
    pub fn neighbors(&self, id: usize) -> &[usize] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn label(&self, id: usize) -> Option<&str> {
        self.labels.resolve(id)
    }

    pub fn id_of(&self, label: &str) -> Option<usize> {
        self.labels.get(label)
    }

    /// Node ids in depth-first visit order, covering every node once.
    pub fn depth_first_order(&self) -> Vec<usize> {
        let n = self.node_count();
        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);
        let mut stack = Vec::new();

        for root in 0..n {
            if visited[root] {
                continue;
            }
            stack.push(root);
            while let Some(node) = stack.pop() {
                if visited[node] {
                    continue;
                }
                visited[node] = true;
                order.push(node);
                stack.extend(
                    self.adjacency[node]
                        .iter()
                        .rev()
                        .copied()
                        .filter(|&next| !visited[next]),
                );
            }
        }
        order
    }

    /// Labels in depth-first visit order.
    pub fn depth_first_labels(&self) -> Vec<&str> {
        let labels = self.labels.labels();
        self.depth_first_order()
            .into_iter()
            .map(|id| labels[id].as_str())
            .collect()
    }
}
