//! Directed graph of the dependencies declared by a set of integrations.

use std::collections::HashMap;
use petgraph::prelude::*;

use crate::integration::*;

/// A cycle found in a [`DependencyGraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
	/// The node the search returned to.
	pub entry: Coordinate,
	/// Every node on the search stack when the cycle was found, from the root of the search.
	pub stack: Vec<Coordinate>,
}

impl Cycle {
	/// The nodes forming the cycle itself, starting at `entry`.
	pub fn members(&self) -> &[Coordinate] {
		let start = self.stack.iter().position(|c| c == &self.entry).unwrap_or(0);
		&self.stack[start..]
	}
}

/// One node per coordinate referenced as a subject or a dependency, edges run from subject to dependency.
/// 
/// Dependencies on coordinates that aren't in the set still get a node.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
	pub graph: DiGraph<Coordinate, ()>,
	indices: HashMap<Coordinate, NodeIndex>,
}

impl DependencyGraph {
	pub fn from_integrations<'a>(integrations: impl IntoIterator<Item = &'a IntegrationInfo>) -> Self {
		let mut dep_graph = Self::default();
		for integration in integrations {
			let src = dep_graph.get_or_add_node_index(&integration.coordinate);
			for dependency in &integration.dependencies {
				let target = dep_graph.get_or_add_node_index(&dependency.coordinate);
				dep_graph.graph.add_edge(src, target, ());
			}
		}
		log::debug!("Built dependency graph with {} nodes and {} edges", dep_graph.graph.node_count(), dep_graph.graph.edge_count());
		dep_graph
	}

	/// Returns the index of the existing node or a new node for `coordinate`
	pub fn get_or_add_node_index(&mut self, coordinate: &Coordinate) -> NodeIndex {
		if let Some(i) = self.indices.get(coordinate) {
			return *i
		}
		let i = self.graph.add_node(coordinate.clone());
		self.indices.insert(coordinate.clone(), i);
		i
	}

	pub fn node_index(&self, coordinate: &Coordinate) -> Option<NodeIndex> {
		self.indices.get(coordinate).copied()
	}

	/// Successors in the order the dependencies were declared, reversed so they can be popped.
	fn pending_successors(&self, src: NodeIndex) -> Vec<NodeIndex> {
		/* petgraph yields neighbors newest edge first, which is already the reverse of declaration order */
		self.graph.neighbors_directed(src, Outgoing).collect()
	}

	/// Finds the first cycle using an iterative depth first search.
	/// 
	/// Searches start from each unvisited node in insertion order and stop at the first back edge,
	/// other independent cycles are not looked for.
	pub fn find_cycle(&self) -> Option<Cycle> {
		let node_count = self.graph.node_count();
		let mut visited = vec![false; node_count];
		let mut on_stack = vec![false; node_count];

		for root in self.graph.node_indices() {
			if visited[root.index()] { continue; }

			let mut stack = Vec::<(NodeIndex, Vec<NodeIndex>)>::new();
			visited[root.index()] = true;
			on_stack[root.index()] = true;
			stack.push((root, self.pending_successors(root)));

			loop {
				let (node, next) = match stack.last_mut() {
					Some((node, pending)) => (*node, pending.pop()),
					None => break,
				};

				match next {
					Some(next) if on_stack[next.index()] => {
						let cycle = Cycle {
							entry: self.graph[next].clone(),
							stack: stack.iter().map(|(i, _)| self.graph[*i].clone()).collect(),
						};
						log::debug!("Found dependency cycle returning to {}", cycle.entry);
						return Some(cycle)
					},
					Some(next) => {
						if !visited[next.index()] {
							visited[next.index()] = true;
							on_stack[next.index()] = true;
							stack.push((next, self.pending_successors(next)));
						}
					},
					None => {
						on_stack[node.index()] = false;
						stack.pop();
					},
				}
			}
		}

		None
	}
}
