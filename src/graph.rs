//! Write-buffered adjacency store with deferred compaction.

use rayon::prelude::*;

use crate::types::{EdgeWeight, VertexKey};

/// Contract the ingestion pipeline depends on.
///
/// Implementations own a vertex domain `[1, span]` plus a per-vertex write
/// buffer; `update` compacts buffered edges into the query-ready adjacency.
/// Between a mutation and the next `update`, `edges` reflects stale data and
/// must not be consulted.
pub trait GraphStore<K: VertexKey, E: EdgeWeight> {
    /// Drops all vertices and edges and resets the span to zero.
    fn clear(&mut self);

    /// Grows the vertex domain to cover keys up to `span`. Never shrinks.
    fn respan(&mut self, span: usize);

    /// Buffers the directed edge `(u, v, w)`, growing the span to cover both
    /// endpoints.
    fn add_edge(&mut self, u: K, v: K, w: E);

    /// Buffers a slice of directed edges. The default goes through
    /// [`GraphStore::add_edge`]; stores with a staged parallel insert path
    /// override this.
    fn add_edge_batch(&mut self, triples: &[(K, K, E)]) {
        for &(u, v, w) in triples {
            self.add_edge(u, v, w);
        }
    }

    /// Compacts buffered edges into the adjacency. No-op on a clean store.
    fn update(&mut self);

    /// Upper bound of the vertex key domain.
    fn span(&self) -> usize;

    /// Number of edges in the compacted adjacency.
    fn size(&self) -> usize;

    /// Compacted out-edges of `u`, sorted by target. Empty for unknown keys.
    fn edges(&self, u: K) -> &[(K, E)];
}

/// In-memory directed graph with per-vertex write buffers and a compacted,
/// target-sorted adjacency.
///
/// Duplicate targets collapse at `update` time keeping the last-seen weight;
/// self-loops are retained.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<K = u32, E = f32> {
    span: usize,
    buffered: Vec<Vec<(K, E)>>,
    adjacency: Vec<Vec<(K, E)>>,
    size: usize,
    dirty: bool,
}

impl<K: VertexKey, E: EdgeWeight> AdjacencyGraph<K, E> {
    /// Creates an empty graph with span 0.
    pub fn new() -> Self {
        Self {
            span: 0,
            buffered: Vec::new(),
            adjacency: Vec::new(),
            size: 0,
            dirty: false,
        }
    }

    /// Creates an empty graph pre-spanned to `span`.
    pub fn with_span(span: usize) -> Self {
        let mut graph = Self::new();
        graph.respan(span);
        graph
    }

    /// True when buffered edges have not been compacted yet.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Iterates the vertex keys `1..=span`.
    pub fn vertices(&self) -> impl Iterator<Item = K> + '_ {
        (1..=self.span).map(K::from_usize)
    }

    /// Out-degree of `u` in the compacted adjacency.
    pub fn degree(&self, u: K) -> usize {
        self.edges(u).len()
    }

    /// Appends each staged per-vertex list onto the shared write buffer.
    ///
    /// Callers merge staging tables in a fixed order so the buffer contents
    /// are independent of worker scheduling.
    pub(crate) fn merge_staged(&mut self, staged: Vec<Vec<(K, E)>>) {
        debug_assert!(staged.len() <= self.buffered.len());
        for (slot, mut list) in staged.into_iter().enumerate() {
            if !list.is_empty() {
                self.buffered[slot].append(&mut list);
                self.dirty = true;
            }
        }
    }
}

impl<K: VertexKey, E: EdgeWeight> GraphStore<K, E> for AdjacencyGraph<K, E> {
    fn clear(&mut self) {
        self.span = 0;
        self.buffered.clear();
        self.adjacency.clear();
        self.size = 0;
        self.dirty = false;
    }

    fn respan(&mut self, span: usize) {
        if self.buffered.len() <= span {
            self.buffered.resize_with(span + 1, Vec::new);
            self.adjacency.resize_with(span + 1, Vec::new);
        }
        self.span = self.span.max(span);
    }

    fn add_edge(&mut self, u: K, v: K, w: E) {
        let hi = u.index().max(v.index());
        if hi > self.span || self.buffered.is_empty() {
            self.respan(hi);
        }
        self.buffered[u.index()].push((v, w));
        self.dirty = true;
    }

    /// Staged parallel bulk insert: each worker scatters a chunk of the slice
    /// into a private span-sized staging table, then tables merge onto the
    /// shared buffer in chunk order. The merge is the only cross-thread
    /// hand-off and costs O(lists), not O(edges).
    fn add_edge_batch(&mut self, triples: &[(K, K, E)]) {
        if triples.is_empty() {
            return;
        }
        let hi = triples
            .par_iter()
            .map(|&(u, v, _)| u.index().max(v.index()))
            .max()
            .unwrap_or(0);
        self.respan(hi);
        let slots = self.span + 1;
        let workers = rayon::current_num_threads().max(1);
        let chunk = triples.len().div_ceil(workers).max(1);
        let staged: Vec<Vec<Vec<(K, E)>>> = triples
            .par_chunks(chunk)
            .map(|part| {
                let mut local: Vec<Vec<(K, E)>> = vec![Vec::new(); slots];
                for &(u, v, w) in part {
                    local[u.index()].push((v, w));
                }
                local
            })
            .collect();
        for local in staged {
            self.merge_staged(local);
        }
    }

    fn update(&mut self) {
        if !self.dirty {
            return;
        }
        self.adjacency
            .par_iter_mut()
            .zip(self.buffered.par_iter_mut())
            .for_each(|(adj, buf)| {
                if buf.is_empty() {
                    return;
                }
                adj.append(buf);
                // Stable sort keeps insertion order among equal targets, so
                // the collapse below sees the newest duplicate last.
                adj.sort_by_key(|&(v, _)| v);
                let mut write = 0;
                for read in 0..adj.len() {
                    let entry = adj[read];
                    if write > 0 && adj[write - 1].0 == entry.0 {
                        adj[write - 1] = entry;
                    } else {
                        adj[write] = entry;
                        write += 1;
                    }
                }
                adj.truncate(write);
            });
        self.size = self.adjacency.par_iter().map(|adj| adj.len()).sum();
        self.dirty = false;
    }

    fn span(&self) -> usize {
        self.span
    }

    fn size(&self) -> usize {
        self.size
    }

    fn edges(&self, u: K) -> &[(K, E)] {
        self.adjacency
            .get(u.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl<K: VertexKey, E: EdgeWeight> Default for AdjacencyGraph<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(graph: &AdjacencyGraph<u32, f32>, u: u32) -> Vec<u32> {
        graph.edges(u).iter().map(|&(v, _)| v).collect()
    }

    #[test]
    fn update_sorts_and_compacts() {
        let mut graph: AdjacencyGraph<u32, f32> = AdjacencyGraph::new();
        graph.add_edge(1, 3, 1.0);
        graph.add_edge(1, 2, 1.0);
        graph.add_edge(2, 3, 1.0);
        graph.update();
        assert_eq!(targets(&graph, 1), vec![2, 3]);
        assert_eq!(targets(&graph, 2), vec![3]);
        assert_eq!(targets(&graph, 3), Vec::<u32>::new());
        assert_eq!(graph.size(), 3);
        assert!(!graph.is_dirty());
    }

    #[test]
    fn update_is_idempotent() {
        let mut graph: AdjacencyGraph<u32, f32> = AdjacencyGraph::new();
        graph.add_edge(1, 2, 1.0);
        graph.add_edge(2, 1, 4.0);
        graph.update();
        let first: Vec<Vec<(u32, f32)>> =
            (1..=graph.span()).map(|u| graph.edges(u as u32).to_vec()).collect();
        graph.update();
        let second: Vec<Vec<(u32, f32)>> =
            (1..=graph.span()).map(|u| graph.edges(u as u32).to_vec()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_targets_keep_last_weight() {
        let mut graph: AdjacencyGraph<u32, f32> = AdjacencyGraph::new();
        graph.add_edge(1, 2, 5.0);
        graph.add_edge(1, 2, 9.0);
        graph.update();
        assert_eq!(graph.edges(1), &[(2, 9.0)]);
        assert_eq!(graph.size(), 1);
    }

    #[test]
    fn self_loops_are_retained() {
        let mut graph: AdjacencyGraph<u32, f32> = AdjacencyGraph::new();
        graph.add_edge(2, 2, 1.0);
        graph.update();
        assert_eq!(graph.edges(2), &[(2, 1.0)]);
    }

    #[test]
    fn span_grows_monotonically() {
        let mut graph: AdjacencyGraph<u32, f32> = AdjacencyGraph::new();
        graph.respan(4);
        assert_eq!(graph.span(), 4);
        graph.respan(2);
        assert_eq!(graph.span(), 4);
        graph.add_edge(3, 9, 1.0);
        assert_eq!(graph.span(), 9);
        graph.add_edge(1, 2, 1.0);
        assert_eq!(graph.span(), 9);
    }

    #[test]
    fn respanned_vertex_has_empty_adjacency() {
        let mut graph: AdjacencyGraph<u32, f32> = AdjacencyGraph::with_span(5);
        graph.add_edge(1, 2, 1.0);
        graph.update();
        assert!(graph.edges(5).is_empty());
        assert_eq!(graph.degree(5), 0);
        // A key equal to the span is valid.
        assert_eq!(graph.span(), 5);
    }

    #[test]
    fn update_on_clean_store_is_noop() {
        let mut graph: AdjacencyGraph<u32, f32> = AdjacencyGraph::with_span(3);
        graph.update();
        assert_eq!(graph.size(), 0);
        assert!(!graph.is_dirty());
    }

    #[test]
    fn clear_resets_everything() {
        let mut graph: AdjacencyGraph<u32, f32> = AdjacencyGraph::new();
        graph.add_edge(1, 2, 1.0);
        graph.update();
        graph.clear();
        assert_eq!(graph.span(), 0);
        assert_eq!(graph.size(), 0);
        assert!(graph.edges(1).is_empty());
    }

    #[test]
    fn batch_insert_matches_sequential_insert() {
        let triples: Vec<(u32, u32, f32)> = (0..1000)
            .map(|i| (i % 37 + 1, i % 53 + 1, i as f32))
            .collect();
        let mut sequential: AdjacencyGraph<u32, f32> = AdjacencyGraph::new();
        for &(u, v, w) in &triples {
            sequential.add_edge(u, v, w);
        }
        sequential.update();
        let mut batched: AdjacencyGraph<u32, f32> = AdjacencyGraph::new();
        batched.add_edge_batch(&triples);
        batched.update();
        assert_eq!(sequential.span(), batched.span());
        for u in 1..=sequential.span() as u32 {
            assert_eq!(sequential.edges(u), batched.edges(u));
        }
    }
}
