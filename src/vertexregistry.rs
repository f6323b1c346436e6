use std::collections::HashMap;

use crate::error::{MstError, Result};

/// 頂点名と`0`から始まる連番の対応表
///
/// 番号は初めて登録された順に振られ, 振り直されることはない.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct VertexRegistry {
    ids: HashMap<String, usize>,
    names: Vec<String>,
}

impl VertexRegistry {
    /// 空の対応表を作る.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `name`を登録して番号を返す.
    /// 既に登録されていた場合は, 何もせずにその番号を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(|`name`|) (期待値)
    pub fn register(&mut self, name: &str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.ids.insert(name.to_owned(), id);
        self.names.push(name.to_owned());
        id
    }

    /// `name`の番号を返す.
    ///
    /// # Errors
    ///
    /// 登録されていない名前なら`MstError::UnknownVertex`
    pub fn id_of(&self, name: &str) -> Result<usize> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| MstError::UnknownVertex(name.to_owned()))
    }

    /// 番号`id`の頂点名を返す.
    #[must_use]
    pub fn name_of(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// 登録されている頂点の数を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn count(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(番号, 頂点名)`を番号の昇順に列挙する.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().map(String::as_str).enumerate()
    }
}

impl std::fmt::Debug for VertexRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
