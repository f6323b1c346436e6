use crate::error::Result;
use crate::vertexregistry::VertexRegistry;

/// 無向辺. 端点の頂点名と非負の重みを持つ.
///
/// `(from, to, w)`と`(to, from, w)`は同じ辺を表す.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Edge {
    from: String,
    to: String,
    weight: u32,
}

impl Edge {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: u32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    #[must_use]
    pub fn from(&self) -> &str {
        &self.from
    }

    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }

    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// 向きを逆にした辺を返す.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.to.clone(), self.from.clone(), self.weight)
    }
}

/// 頂点の対応表と, 宣言順に並んだ辺の列
///
/// 全ての辺の端点が対応表に登録されていることが保証される.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Graph {
    vertices: VertexRegistry,
    edges: Vec<Edge>,
}

impl Graph {
    /// 頂点も辺も無いグラフを作る.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 頂点の対応表と辺の列からグラフを作る.
    ///
    /// # Errors
    ///
    /// 端点が`vertices`に登録されていない辺があれば`MstError::UnknownVertex`
    pub fn from_parts(vertices: VertexRegistry, edges: Vec<Edge>) -> Result<Self> {
        for edge in &edges {
            vertices.id_of(&edge.from)?;
            vertices.id_of(&edge.to)?;
        }
        Ok(Self { vertices, edges })
    }

    /// 頂点を登録して番号を返す.
    pub fn add_vertex(&mut self, name: &str) -> usize {
        self.vertices.register(name)
    }

    /// 辺を末尾に追加する.
    ///
    /// # Errors
    ///
    /// 端点が登録されていなければ`MstError::UnknownVertex`. その場合グラフは変化しない.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: u32) -> Result<()> {
        self.vertices.id_of(from)?;
        self.vertices.id_of(to)?;
        self.edges.push(Edge::new(from, to, weight));
        Ok(())
    }

    #[must_use]
    pub fn vertices(&self) -> &VertexRegistry {
        &self.vertices
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.count()
    }
}
