//! Chunked parallel ingestion of body lines into a graph store.
//!
//! I/O stays sequential; only the CPU-bound parse step fans out across the
//! rayon pool. Each batch is fully parsed before any triple is replayed, and
//! replay preserves batch order, so a given line always yields the same
//! triples regardless of scheduling.

use std::io::BufRead;

use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::graph::{AdjacencyGraph, GraphStore};
use crate::io::header::{read_coo_header, read_mtx_header};
use crate::io::parse::{parse_record, Triple};
use crate::types::{EdgeWeight, VertexKey};

/// Lines read from the stream per parse batch. Bounds peak memory to one
/// batch of lines and triples rather than the whole file.
pub const LINE_BATCH: usize = 131_072;

/// Streams body lines in batches, parsing each batch in parallel, and hands
/// every parsed triple (plus its reverse when `symmetric`) to `on_edge` in
/// batch order.
pub fn scan_edges<R, F>(
    stream: &mut R,
    weighted: bool,
    symmetric: bool,
    mut on_edge: F,
) -> Result<()>
where
    R: BufRead,
    F: FnMut(u64, u64, f64),
{
    scan_edge_batches(stream, weighted, symmetric, |batch| {
        for &(u, v, w) in batch {
            on_edge(u, v, w);
        }
    })
}

/// Batch-granular variant of [`scan_edges`]: the consumer receives each
/// batch's triples as one slice, reverse triples already interleaved.
pub fn scan_edge_batches<R, F>(
    stream: &mut R,
    weighted: bool,
    symmetric: bool,
    mut on_batch: F,
) -> Result<()>
where
    R: BufRead,
    F: FnMut(&[Triple]),
{
    let mut lines: Vec<String> = Vec::with_capacity(LINE_BATCH);
    let mut triples: Vec<Triple> = Vec::new();
    loop {
        lines.clear();
        for _ in 0..LINE_BATCH {
            let mut line = String::new();
            if stream.read_line(&mut line)? == 0 {
                break;
            }
            lines.push(line);
        }
        if lines.is_empty() {
            break;
        }
        // Parse the whole batch in parallel; malformed lines drop out here
        // rather than aborting the batch.
        let parsed: Vec<Option<Triple>> = lines
            .par_iter()
            .map(|line| parse_record(line, weighted))
            .collect();
        triples.clear();
        for triple in parsed.into_iter().flatten() {
            triples.push(triple);
            if symmetric {
                triples.push((triple.1, triple.0, triple.2));
            }
        }
        on_batch(&triples);
        if lines.len() < LINE_BATCH {
            break;
        }
    }
    Ok(())
}

/// Reads a headerless edgelist/CSV/TSV stream into a graph.
pub fn read_edgelist<K, E, R>(
    stream: &mut R,
    weighted: bool,
    symmetric: bool,
) -> Result<AdjacencyGraph<K, E>>
where
    K: VertexKey,
    E: EdgeWeight,
    R: BufRead,
{
    let mut graph = AdjacencyGraph::new();
    ingest(&mut graph, stream, weighted, symmetric)?;
    graph.update();
    Ok(graph)
}

/// Reads a COO stream into a graph pre-spanned from its header.
pub fn read_coo<K, E, R>(
    stream: &mut R,
    weighted: bool,
    symmetric: bool,
) -> Result<AdjacencyGraph<K, E>>
where
    K: VertexKey,
    E: EdgeWeight,
    R: BufRead,
{
    let (rows, cols, size) = read_coo_header(stream)?;
    debug!(rows, cols, size, "coo header");
    let mut graph = AdjacencyGraph::with_span(rows.max(cols));
    ingest(&mut graph, stream, weighted, symmetric)?;
    graph.update();
    Ok(graph)
}

/// Reads a Matrix-Market stream into a graph. Reciprocal edges are emitted
/// during ingestion when the banner declares symmetric storage.
pub fn read_mtx<K, E, R>(stream: &mut R, weighted: bool) -> Result<AdjacencyGraph<K, E>>
where
    K: VertexKey,
    E: EdgeWeight,
    R: BufRead,
{
    let header = read_mtx_header(stream)?;
    debug!(
        rows = header.rows,
        cols = header.cols,
        size = header.size,
        symmetric = header.symmetric,
        "mtx header"
    );
    let mut graph = AdjacencyGraph::with_span(header.rows.max(header.cols));
    ingest(&mut graph, stream, weighted, header.symmetric)?;
    graph.update();
    Ok(graph)
}

fn ingest<K, E, G, R>(
    graph: &mut G,
    stream: &mut R,
    weighted: bool,
    symmetric: bool,
) -> Result<()>
where
    K: VertexKey,
    E: EdgeWeight,
    G: GraphStore<K, E>,
    R: BufRead,
{
    scan_edge_batches(stream, weighted, symmetric, |batch| {
        let typed: Vec<(K, K, E)> = batch
            .iter()
            .map(|&(u, v, w)| {
                (
                    K::from_usize(u as usize),
                    K::from_usize(v as usize),
                    E::from_f64(w),
                )
            })
            .collect();
        graph.add_edge_batch(&typed);
    })
}
