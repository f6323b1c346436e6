use std::fmt;

use crate::kruskal::SpanningTree;

/// 最小全域木を人が読む形で書き出す.
///
/// ```text
/// Austin to Houston is 165 miles.
/// Austin to Dallas is 195 miles.
///
/// Sum of distances: 360 miles.
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    tree: &'a SpanningTree,
    unit: &'a str,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(tree: &'a SpanningTree) -> Self {
        Self { tree, unit: "miles" }
    }

    /// 距離の単位を変える.
    #[must_use]
    pub fn unit(mut self, unit: &'a str) -> Self {
        self.unit = unit;
        self
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in self.tree {
            writeln!(
                f,
                "{} to {} is {} {}.",
                edge.from(),
                edge.to(),
                edge.weight(),
                self.unit
            )?;
        }
        writeln!(f)?;
        write!(
            f,
            "Sum of distances: {} {}.",
            self.tree.total_weight(),
            self.unit
        )
    }
}
