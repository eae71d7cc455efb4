//! Parallel conversion of edge-list graph files to undirected form.
//!
//! The crate reads Matrix Market, COO, and delimited edgelist/CSV/TSV files
//! into an in-memory adjacency store, adds the reciprocal of every directed
//! edge, and re-serializes the result. Parsing, compaction, and
//! symmetrization are parallelized over a rayon worker pool; I/O stays
//! sequential so memory is bounded to one line batch at a time.

pub mod error;
pub mod graph;
pub mod io;
pub mod pipeline;
pub mod symmetrize;
pub mod types;

pub use error::{Result, UndirectError};
pub use graph::{AdjacencyGraph, GraphStore};
