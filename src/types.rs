use serde::{Deserialize, Serialize};

/// A graph vertex: unique key plus display color (any CSS color string).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
	pub key: String,
	pub color: String,
}

/// A directed edge referencing two node keys. Keys are not checked here;
/// resolution (and dropping of dangling links) happens in [`crate::GraphIndex`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkData {
	pub from: String,
	pub to: String,
}

/// The full data set handed to a graph component.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
	pub nodes: Vec<NodeData>,
	pub links: Vec<LinkData>,
}

impl NodeData {
	pub fn new(key: impl Into<String>, color: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			color: color.into(),
		}
	}
}

impl LinkData {
	pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
		}
	}
}

impl GraphData {
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty() && self.links.is_empty()
	}
}
