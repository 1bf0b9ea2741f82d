use crate::types::{GraphData, LinkData, NodeData};

/// Default node palette (d3 category10).
pub const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

/// Generate sample graph data (random tree similar to the JS example).
pub fn generate(n: usize) -> GraphData {
	let nodes: Vec<NodeData> = (0..n)
		.map(|i| NodeData::new(i.to_string(), COLORS[i % COLORS.len()]))
		.collect();

	let links: Vec<LinkData> = (1..n)
		.map(|i| {
			let target = (rand_simple(i) * (i as f64)) as usize;
			LinkData::new(i.to_string(), target.to_string())
		})
		.collect();

	GraphData { nodes, links }
}

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}
