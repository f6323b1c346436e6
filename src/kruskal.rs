use std::collections::HashSet;

use rayon::slice::ParallelSliceMut;
use tracing::{debug, trace};

use crate::error::{MstError, Result};
use crate::graph::{Edge, Graph};
use crate::unionfind::DisjointSet;

/// 最小全域木 (または途中まで作られた最小全域森) の辺の列と重みの和
#[derive(Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    total_weight: u64,
}

impl SpanningTree {
    /// 採用された順の辺を返す.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    fn push(&mut self, edge: Edge) {
        self.total_weight += u64::from(edge.weight());
        self.edges.push(edge);
    }
}

impl<'a> IntoIterator for &'a SpanningTree {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// `MstBuilder`の設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MstConfig {
    /// 候補辺のソートを並列に行うか
    pub parallel_sort: bool,
    /// 並列ソートに切り替える候補辺の数の下限
    pub parallel_threshold: usize,
}

impl Default for MstConfig {
    fn default() -> Self {
        Self {
            parallel_sort: false,
            parallel_threshold: 4096,
        }
    }
}

impl MstConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_parallel_sort(mut self, enabled: bool) -> Self {
        self.parallel_sort = enabled;
        self
    }

    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

/// 端点を番号に直した候補辺. `index`は`Graph::edges`での位置.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    from: usize,
    to: usize,
    weight: u32,
    index: usize,
}

/// クラスカル法で最小全域木を構築する.
///
/// 1回の`build`は, 重複辺の除去, 重みでの整列, 素集合データ構造を使った木の成長の順に進む.
#[derive(Debug, Clone, Copy, Default)]
pub struct MstBuilder {
    config: MstConfig,
}

impl MstBuilder {
    #[must_use]
    pub fn new(config: MstConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &MstConfig {
        &self.config
    }

    /// `graph`の最小全域木を構築する.
    ///
    /// 辺は重みの昇順に採用され, 重みが等しい辺は`graph`に追加された順に採用される.
    /// 頂点数が0または1のときは空の木を返す.
    ///
    /// # Errors
    ///
    /// - グラフが連結でなければ`MstError::DisconnectedGraph`. 最小全域森と連結成分数を持つ.
    /// - 端点が未登録の辺があれば`MstError::UnknownVertex` (`Graph`を経由する限り起こらない)
    ///
    /// # Time complexity
    ///
    /// - *O*(*E* log *E* + *E* α(*V*))
    pub fn build(&self, graph: &Graph) -> Result<SpanningTree> {
        let n = graph.vertex_count();
        let mut candidates = collect_candidates(graph)?;
        debug!(
            vertices = n,
            edges = graph.edges().len(),
            candidates = candidates.len(),
            "collected candidate edges"
        );
        self.order(&mut candidates);

        let mut tree = SpanningTree::default();
        if n <= 1 {
            return Ok(tree);
        }

        let mut ds = DisjointSet::new(n);
        for c in candidates {
            if tree.len() == n - 1 {
                break;
            }
            let edge = &graph.edges()[c.index];
            if ds.union(c.from, c.to)? {
                trace!(from = edge.from(), to = edge.to(), weight = c.weight, "accepted");
                tree.push(edge.clone());
            } else {
                trace!(from = edge.from(), to = edge.to(), weight = c.weight, "discarded");
            }
        }

        if tree.len() < n - 1 {
            let components = ds.count();
            debug!(
                accepted = tree.len(),
                components, "candidate edges exhausted before spanning all vertices"
            );
            return Err(MstError::DisconnectedGraph {
                forest: tree,
                components,
            });
        }
        debug!(
            edges = tree.len(),
            total_weight = tree.total_weight(),
            "spanning tree complete"
        );
        Ok(tree)
    }

    /// 重みの昇順に安定ソートする.
    fn order(&self, candidates: &mut [Candidate]) {
        if self.config.parallel_sort && candidates.len() >= self.config.parallel_threshold {
            candidates.par_sort_by_key(|c| c.weight);
        } else {
            candidates.sort_by_key(|c| c.weight);
        }
    }
}

/// 辺を番号に直し, 既に採用した辺とちょうど逆向きで同じ重みの辺を取り除く.
///
/// 端点の組が同じでも重みが違う辺はそれぞれ残す.
fn collect_candidates(graph: &Graph) -> Result<Vec<Candidate>> {
    let vertices = graph.vertices();
    let mut admitted = HashSet::with_capacity(graph.edges().len());
    let mut candidates = Vec::with_capacity(graph.edges().len());
    for (index, edge) in graph.edges().iter().enumerate() {
        let from = vertices.id_of(edge.from())?;
        let to = vertices.id_of(edge.to())?;
        let weight = edge.weight();
        if admitted.contains(&(to, from, weight)) {
            continue;
        }
        admitted.insert((from, to, weight));
        candidates.push(Candidate {
            from,
            to,
            weight,
            index,
        });
    }
    Ok(candidates)
}

/// `MstBuilder::default().build(graph)`と同じ
///
/// # Errors
///
/// `MstBuilder::build`を参照
pub fn kruskal(graph: &Graph) -> Result<SpanningTree> {
    MstBuilder::default().build(graph)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn graph(vertices: &[&str], edges: &[(&str, &str, u32)]) -> Graph {
        let mut g = Graph::new();
        for v in vertices {
            g.add_vertex(v);
        }
        for &(a, b, w) in edges {
            g.add_edge(a, b, w).unwrap();
        }
        g
    }

    fn triples(tree: &SpanningTree) -> Vec<(&str, &str, u32)> {
        tree.edges()
            .iter()
            .map(|e| (e.from(), e.to(), e.weight()))
            .collect()
    }

    #[test]
    fn test() {
        let g = graph(
            &["0", "1", "2", "3"],
            &[
                ("0", "1", 4),
                ("0", "2", 2),
                ("0", "3", 3),
                ("1", "2", 6),
                ("1", "3", 8),
                ("2", "3", 1),
                ("1", "1", 0),
            ],
        );
        let tree = kruskal(&g).unwrap();
        assert_eq!(
            triples(&tree),
            [("2", "3", 1), ("0", "2", 2), ("0", "1", 4)]
        );
        assert_eq!(tree.total_weight(), 7);
    }

    #[test]
    fn triangle() {
        let g = graph(&["A", "B", "C"], &[("A", "B", 1), ("B", "C", 2), ("A", "C", 3)]);
        let tree = kruskal(&g).unwrap();
        assert_eq!(triples(&tree), [("A", "B", 1), ("B", "C", 2)]);
        assert_eq!(tree.total_weight(), 3);
    }

    #[test]
    fn reverse_duplicate() {
        let g = graph(&["A", "B"], &[("A", "B", 5), ("B", "A", 5)]);
        let candidates = collect_candidates(&g).unwrap();
        assert_eq!(candidates.len(), 1);
        let tree = kruskal(&g).unwrap();
        assert_eq!(triples(&tree), [("A", "B", 5)]);
        assert_eq!(tree.total_weight(), 5);
    }

    #[test]
    fn inconsistent_weights_are_both_candidates() {
        let g = graph(&["A", "B"], &[("A", "B", 5), ("B", "A", 3)]);
        assert_eq!(collect_candidates(&g).unwrap().len(), 2);
        let tree = kruskal(&g).unwrap();
        assert_eq!(triples(&tree), [("B", "A", 3)]);
    }

    #[test]
    fn two_vertices() {
        let g = graph(&["X", "Y"], &[("X", "Y", 7)]);
        let tree = kruskal(&g).unwrap();
        assert_eq!(triples(&tree), [("X", "Y", 7)]);
        assert_eq!(tree.total_weight(), 7);
    }

    #[test]
    fn trivial() {
        assert_eq!(kruskal(&Graph::new()), Ok(SpanningTree::default()));
        let tree = kruskal(&graph(&["Austin"], &[])).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.total_weight(), 0);
        // 自己ループしか無くても1頂点なら連結
        let tree = kruskal(&graph(&["Austin"], &[("Austin", "Austin", 9)])).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn disconnected() {
        let g = graph(&["A", "B", "C", "D"], &[("A", "B", 1), ("C", "D", 1)]);
        match kruskal(&g) {
            Err(MstError::DisconnectedGraph { forest, components }) => {
                assert_eq!(components, 2);
                assert_eq!(triples(&forest), [("A", "B", 1), ("C", "D", 1)]);
                assert_eq!(forest.total_weight(), 2);
            }
            other => panic!("expected DisconnectedGraph, got {other:?}"),
        }

        let g = graph(&["A", "B", "C"], &[]);
        assert!(matches!(
            kruskal(&g),
            Err(MstError::DisconnectedGraph { components: 3, .. })
        ));
    }

    #[test]
    fn ties_follow_declaration_order() {
        let g = graph(
            &["A", "B", "C", "D"],
            &[("C", "D", 2), ("A", "B", 4), ("B", "C", 9), ("C", "D", 4)],
        );
        let tree = kruskal(&g).unwrap();
        assert_eq!(triples(&tree), [("C", "D", 2), ("A", "B", 4), ("B", "C", 9)]);

        let g = graph(
            &["A", "B", "C", "D"],
            &[("A", "B", 4), ("C", "D", 4), ("A", "C", 5)],
        );
        let tree = kruskal(&g).unwrap();
        assert_eq!(triples(&tree), [("A", "B", 4), ("C", "D", 4), ("A", "C", 5)]);
    }

    #[test]
    fn stops_at_spanning() {
        let g = graph(
            &["A", "B", "C"],
            &[("A", "B", 1), ("B", "C", 1), ("A", "C", 1), ("C", "A", 2)],
        );
        let tree = kruskal(&g).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.total_weight(), 2);
    }

    #[test]
    fn parallel_sort_matches_sequential() {
        let mut g = Graph::new();
        let names = (0..50).map(|i| format!("v{i}")).collect::<Vec<_>>();
        for name in &names {
            g.add_vertex(name);
        }
        for i in 0..50usize {
            for j in (i + 1)..50 {
                g.add_edge(&names[i], &names[j], ((i * 7 + j * 13) % 10) as u32)
                    .unwrap();
            }
        }
        let sequential = kruskal(&g).unwrap();
        let parallel = MstBuilder::new(
            MstConfig::new()
                .with_parallel_sort(true)
                .with_parallel_threshold(1),
        )
        .build(&g)
        .unwrap();
        assert_eq!(sequential, parallel);
    }

    /// 小さいグラフについて全ての全域木を列挙し, 最小の重みの和を返す.
    fn brute_force(n: usize, edges: &[(usize, usize, u32)]) -> Option<u64> {
        let m = edges.len();
        let mut best = None;
        for mask in 0u32..(1 << m) {
            if mask.count_ones() as usize != n - 1 {
                continue;
            }
            let mut ds = DisjointSet::new(n);
            let mut sum = 0u64;
            let mut ok = true;
            for (i, &(a, b, w)) in edges.iter().enumerate() {
                if mask >> i & 1 == 1 {
                    if !ds.union(a, b).unwrap() {
                        ok = false;
                        break;
                    }
                    sum += u64::from(w);
                }
            }
            if ok && best.map_or(true, |b| sum < b) {
                best = Some(sum);
            }
        }
        best
    }

    fn small_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
        (2usize..6).prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec((0..n, 0..n, 0u32..10), 0..10),
            )
        })
    }

    fn to_graph(n: usize, edges: &[(usize, usize, u32)]) -> Graph {
        let mut g = Graph::new();
        for i in 0..n {
            g.add_vertex(&i.to_string());
        }
        for &(a, b, w) in edges {
            g.add_edge(&a.to_string(), &b.to_string(), w).unwrap();
        }
        g
    }

    proptest! {
        #[test]
        fn minimal_acyclic_spanning((n, edges) in small_graph()) {
            let g = to_graph(n, &edges);
            match (kruskal(&g), brute_force(n, &edges)) {
                (Ok(tree), Some(best)) => {
                    prop_assert_eq!(tree.len(), n - 1);
                    prop_assert_eq!(tree.total_weight(), best);
                    let mut ds = DisjointSet::new(n);
                    for e in &tree {
                        let a = g.vertices().id_of(e.from()).unwrap();
                        let b = g.vertices().id_of(e.to()).unwrap();
                        prop_assert!(ds.union(a, b).unwrap());
                    }
                    prop_assert_eq!(ds.count(), 1);
                }
                (Err(MstError::DisconnectedGraph { forest, components }), None) => {
                    prop_assert!(components > 1);
                    prop_assert_eq!(forest.len(), n - components);
                }
                (tree, best) => prop_assert!(false, "kruskal {:?} vs brute force {:?}", tree, best),
            }
        }

        #[test]
        fn deterministic((n, edges) in small_graph()) {
            let g = to_graph(n, &edges);
            prop_assert_eq!(kruskal(&g), kruskal(&g.clone()));
        }
    }
}
