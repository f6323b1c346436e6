//! `頂点,隣接頂点,重み,隣接頂点,重み,...`という形式の隣接リストを読む.

use std::io::BufRead;

use tracing::debug;

use crate::error::MstError;
use crate::graph::{Edge, Graph};
use crate::vertexregistry::VertexRegistry;

/// 隣接リストの読み込みで起こり得るエラー
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 行頭の頂点名が空
    #[error("line {line}: missing vertex name")]
    EmptyVertex { line: usize },

    /// 隣接頂点の後に重みが無い
    #[error("line {line}: neighbor {neighbor:?} has no weight")]
    MissingWeight { line: usize, neighbor: String },

    /// 重みが非負整数として読めない
    #[error("line {line}: invalid weight {value:?} for neighbor {neighbor:?}")]
    InvalidWeight {
        line: usize,
        neighbor: String,
        value: String,
    },

    #[error(transparent)]
    Graph(#[from] MstError),
}

/// `reader`から隣接リストを読んでグラフを作る.
///
/// 各行の先頭の頂点を出現順に登録してから辺を検査するので, 後の行で定義される頂点を参照してもよい.
/// 空行は無視する. 各フィールドの前後の空白は取り除く.
///
/// # Errors
///
/// - 読み込みに失敗したら`ParseError::Io`
/// - 行の形が崩れていたら`ParseError::EmptyVertex`, `MissingWeight`, `InvalidWeight`
/// - どの行の先頭にも現れない頂点を参照したら`ParseError::Graph(MstError::UnknownVertex)`
pub fn parse_adjacency<R: BufRead>(reader: R) -> Result<Graph, ParseError> {
    let mut vertices = VertexRegistry::new();
    let mut edges = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let no = i + 1;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split(',').map(str::trim);
        let head = match fields.next() {
            Some(head) if !head.is_empty() => head,
            _ => return Err(ParseError::EmptyVertex { line: no }),
        };
        vertices.register(head);
        while let Some(neighbor) = fields.next() {
            let Some(value) = fields.next() else {
                return Err(ParseError::MissingWeight {
                    line: no,
                    neighbor: neighbor.to_owned(),
                });
            };
            let weight = value.parse().map_err(|_| ParseError::InvalidWeight {
                line: no,
                neighbor: neighbor.to_owned(),
                value: value.to_owned(),
            })?;
            edges.push(Edge::new(head, neighbor, weight));
        }
    }
    debug!(
        vertices = vertices.count(),
        edges = edges.len(),
        "parsed adjacency list"
    );
    Ok(Graph::from_parts(vertices, edges)?)
}

/// 文字列から隣接リストを読む.
///
/// # Errors
///
/// `parse_adjacency`を参照
pub fn parse_adjacency_str(s: &str) -> Result<Graph, ParseError> {
    parse_adjacency(s.as_bytes())
}
