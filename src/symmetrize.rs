//! Parallel symmetrization of a finalized directed graph.

use rayon::prelude::*;
use tracing::debug;

use crate::graph::{AdjacencyGraph, GraphStore};
use crate::types::{EdgeWeight, VertexKey};

/// Produces a new graph in which every edge of `x` has a reciprocal
/// counterpart, with the same span.
///
/// Each worker owns a chunk of the source-vertex range and scatters every
/// `(u, v, w)` into private staging slots for both `u` and `v`; the staging
/// tables then merge in chunk order and one compaction pass absorbs pairs
/// that were already reciprocal in the input. A self-loop scatters the same
/// entry twice and collapses back to one.
pub fn symmetrize<K, E, G>(x: &G) -> AdjacencyGraph<K, E>
where
    K: VertexKey,
    E: EdgeWeight,
    G: GraphStore<K, E> + Sync,
{
    let span = x.span();
    let slots = span + 1;
    let workers = rayon::current_num_threads().max(1);
    let chunk = slots.div_ceil(workers).max(1);
    let chunks = slots.div_ceil(chunk);
    debug!(span, workers, "symmetrizing");
    let staged: Vec<Vec<Vec<(K, E)>>> = (0..chunks)
        .into_par_iter()
        .map(|c| {
            let lo = c * chunk;
            let hi = slots.min(lo + chunk);
            let mut local: Vec<Vec<(K, E)>> = vec![Vec::new(); slots];
            for slot in lo..hi {
                let u = K::from_usize(slot);
                for &(v, w) in x.edges(u) {
                    local[slot].push((v, w));
                    local[v.index()].push((u, w));
                }
            }
            local
        })
        .collect();
    let mut out = AdjacencyGraph::with_span(span);
    for local in staged {
        out.merge_staged(local);
    }
    out.update();
    out
}
