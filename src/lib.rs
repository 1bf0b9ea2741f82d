//! Data model for a canvas force-directed graph component: node and link
//! descriptors, an axis-aligned rectangle, key-to-index resolution, and
//! deterministic sample data. Rendering, layout simulation, and input
//! handling live with the component that consumes these types.

// Modules
mod index;
mod rect;
pub mod sample;
mod types;

pub use index::GraphIndex;
pub use rect::Rect;
pub use types::{GraphData, LinkData, NodeData};
