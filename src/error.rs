use crate::kruskal::SpanningTree;

/// 最小全域木の構築中に起こり得るエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MstError {
    /// 登録されていない頂点名が辺の端点として使われた.
    #[error("unknown vertex: {0:?}")]
    UnknownVertex(String),

    /// `DisjointSet`に範囲外の番号が渡された.
    #[error("index {index} out of range for disjoint set of size {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// 辺を使い切っても全頂点が連結にならなかった.
    ///
    /// `forest`には途中まで構築された最小全域森が入る.
    #[error("graph is disconnected: {components} components remain after {} edges", forest.len())]
    DisconnectedGraph {
        forest: SpanningTree,
        components: usize,
    },
}

/// 最小全域木まわりの`Result`
pub type Result<T> = std::result::Result<T, MstError>;
