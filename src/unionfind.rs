use crate::error::{MstError, Result};

/// 素集合データ構造
///
/// 経路圧縮とランクによる併合を行う. 頂点名や辺の重みは知らず, `0..len`の番号だけを扱う.
#[derive(Clone)]
pub struct DisjointSet {
    parent: Box<[usize]>,
    rank: Box<[u8]>,
    count: usize,
}

impl DisjointSet {
    /// `n`個の要素があり, それぞれ別のグループに属しているDisjointSetを作る.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n].into_boxed_slice(),
            count: n,
        }
    }

    /// 要素の総数を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// 連結成分数を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    fn check(&self, a: usize) -> Result<()> {
        if a < self.len() {
            Ok(())
        } else {
            Err(MstError::IndexOutOfRange {
                index: a,
                len: self.len(),
            })
        }
    }

    /// 要素`a`が属するグループの代表を返す.
    /// 辿った要素の親は全て代表に付け替えられる.
    ///
    /// # Errors
    ///
    /// `a >= self.len()`なら`MstError::IndexOutOfRange`
    ///
    /// # Time complexity
    ///
    /// - *O*(α(*n*))
    pub fn find(&mut self, mut a: usize) -> Result<usize> {
        self.check(a)?;
        let mut root = a;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while a != root {
            let next = self.parent[a];
            self.parent[a] = root;
            a = next;
        }
        Ok(root)
    }

    /// 要素`a`が属するグループの代表を, 経路圧縮をせずに返す.
    ///
    /// # Errors
    ///
    /// `a >= self.len()`なら`MstError::IndexOutOfRange`
    ///
    /// # Time complexity
    ///
    /// - *O*(log(*n*))
    pub fn find_imu(&self, mut a: usize) -> Result<usize> {
        self.check(a)?;
        while self.parent[a] != a {
            a = self.parent[a];
        }
        Ok(a)
    }

    /// 要素`a`が属するグループと要素`b`が属するグループを1つのグループにマージする.
    ///
    /// マージした場合は`true`, 最初から同じグループに属していた場合は何もせずに`false`を返す.
    /// ランクの低い方の代表をランクの高い方の代表の下に付ける. ランクが等しい場合は`a`の代表が残り, そのランクが1増える.
    ///
    /// # Errors
    ///
    /// `a`, `b`のどちらかが範囲外なら`MstError::IndexOutOfRange`
    ///
    /// # Time complexity
    ///
    /// - *O*(α(*n*))
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool> {
        let a = self.find(a)?;
        let b = self.find(b)?;
        if a == b {
            return Ok(false);
        }
        self.count -= 1;
        if self.rank[a] < self.rank[b] {
            self.parent[a] = b;
        } else {
            if self.rank[a] == self.rank[b] {
                self.rank[a] += 1;
            }
            self.parent[b] = a;
        }
        Ok(true)
    }

    /// 要素`a`, `b`が同じグループに属するか判定する.
    ///
    /// # Errors
    ///
    /// `a`, `b`のどちらかが範囲外なら`MstError::IndexOutOfRange`
    ///
    /// # Time complexity
    ///
    /// - *O*(α(*n*))
    pub fn same(&mut self, a: usize, b: usize) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }
}

impl std::fmt::Debug for DisjointSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        struct VecSet(Vec<usize>);
        impl std::fmt::Debug for VecSet {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_set().entries(&self.0).finish()
            }
        }

        let mut q = vec![vec![]; self.len()];
        for i in 0..self.len() {
            let mut g = i;
            while self.parent[g] != g {
                g = self.parent[g];
            }
            q[g].push(i);
        }
        f.debug_set()
            .entries(
                q.into_iter()
                    .filter_map(|v| if v.is_empty() { None } else { Some(VecSet(v)) }),
            )
            .finish()
    }
}

impl Default for DisjointSet {
    fn default() -> Self {
        Self::new(0)
    }
}
