//! Format-specific graph writers. Each mirrors the framing of the matching
//! reader; every materialized edge is written, so a symmetrized store comes
//! out with both directions.

use std::io::Write;

use crate::error::Result;
use crate::graph::{AdjacencyGraph, GraphStore};
use crate::types::{EdgeWeight, VertexKey};

/// Writes a Matrix-Market banner, dimensions, and body.
///
/// The banner declares `general` symmetry because both edge directions are
/// materialized in the store; the field token is `real` for weighted output
/// and `pattern` otherwise.
pub fn write_mtx<K, E, W>(
    stream: &mut W,
    graph: &AdjacencyGraph<K, E>,
    weighted: bool,
) -> Result<()>
where
    K: VertexKey,
    E: EdgeWeight,
    W: Write,
{
    let field = if weighted { "real" } else { "pattern" };
    writeln!(stream, "%%MatrixMarket matrix coordinate {field} general")?;
    writeln!(stream, "{} {} {}", graph.span(), graph.span(), graph.size())?;
    write_body(stream, graph, weighted, ' ')
}

/// Writes a `rows cols size` header followed by body lines.
pub fn write_coo<K, E, W>(
    stream: &mut W,
    graph: &AdjacencyGraph<K, E>,
    weighted: bool,
) -> Result<()>
where
    K: VertexKey,
    E: EdgeWeight,
    W: Write,
{
    writeln!(stream, "{} {} {}", graph.span(), graph.span(), graph.size())?;
    write_body(stream, graph, weighted, ' ')
}

/// Writes headerless body lines with the given separator (space, comma, or
/// tab for edgelist/CSV/TSV).
pub fn write_edgelist<K, E, W>(
    stream: &mut W,
    graph: &AdjacencyGraph<K, E>,
    weighted: bool,
    separator: char,
) -> Result<()>
where
    K: VertexKey,
    E: EdgeWeight,
    W: Write,
{
    write_body(stream, graph, weighted, separator)
}

fn write_body<K, E, W>(
    stream: &mut W,
    graph: &AdjacencyGraph<K, E>,
    weighted: bool,
    separator: char,
) -> Result<()>
where
    K: VertexKey,
    E: EdgeWeight,
    W: Write,
{
    for u in graph.vertices() {
        for &(v, w) in graph.edges(u) {
            if weighted {
                writeln!(stream, "{u}{separator}{v}{separator}{w}")?;
            } else {
                writeln!(stream, "{u}{separator}{v}")?;
            }
        }
    }
    Ok(())
}
