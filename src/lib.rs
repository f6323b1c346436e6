//! 名前の付いた頂点 (都市) と非負の距離を持つ無向グラフから, クラスカル法で最小全域木を求める.
//!
//! ```
//! use spantree::{kruskal, parse_adjacency_str, Report};
//!
//! let graph = parse_adjacency_str("A,B,1,C,3\nB,C,2\nC").unwrap();
//! let tree = kruskal(&graph).unwrap();
//! assert_eq!(tree.total_weight(), 3);
//! println!("{}", Report::new(&tree));
//! ```

pub mod adjacency;
pub mod error;
pub mod graph;
pub mod kruskal;
pub mod report;
pub mod unionfind;
pub mod vertexregistry;

pub use adjacency::{parse_adjacency, parse_adjacency_str, ParseError};
pub use error::{MstError, Result};
pub use graph::{Edge, Graph};
pub use kruskal::{kruskal, MstBuilder, MstConfig, SpanningTree};
pub use report::Report;
pub use unionfind::DisjointSet;
pub use vertexregistry::VertexRegistry;
