use std::collections::{HashMap, HashSet};

use log::debug;

use crate::types::GraphData;

/// Dense-index view over a [`GraphData`]: node keys resolved to `usize`
/// indices in input order, links resolved to index pairs.
///
/// Links whose endpoints name a missing key are dropped rather than
/// reported; a graph component should keep drawing whatever resolves.
#[derive(Clone, Debug, Default)]
pub struct GraphIndex {
	key_to_idx: HashMap<String, usize>,
	node_count: usize,
	edges: Vec<(usize, usize)>,
}

impl GraphIndex {
	pub fn new(data: &GraphData) -> Self {
		let mut key_to_idx = HashMap::new();
		let mut edges = Vec::new();

		// Duplicate keys overwrite: the last occurrence wins lookup.
		for (idx, node) in data.nodes.iter().enumerate() {
			key_to_idx.insert(node.key.clone(), idx);
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(key_to_idx.get(&link.from), key_to_idx.get(&link.to))
			{
				edges.push((src, tgt));
			} else {
				debug!("dropping link with unresolved endpoint: {} -> {}", link.from, link.to);
			}
		}

		Self {
			key_to_idx,
			node_count: data.nodes.len(),
			edges,
		}
	}

	pub fn node_count(&self) -> usize {
		self.node_count
	}

	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	pub fn index_of(&self, key: &str) -> Option<usize> {
		self.key_to_idx.get(key).copied()
	}

	/// Resolved links as `(from, to)` index pairs, in input order.
	pub fn edges(&self) -> &[(usize, usize)] {
		&self.edges
	}

	/// Undirected adjacency of a node.
	pub fn neighbors(&self, idx: usize) -> HashSet<usize> {
		let mut neighbors = HashSet::new();
		for &(src, tgt) in &self.edges {
			if src == idx {
				neighbors.insert(tgt);
			} else if tgt == idx {
				neighbors.insert(src);
			}
		}
		neighbors
	}
}
