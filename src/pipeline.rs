//! Driver pipeline: read, symmetrize unless the input is already symmetric,
//! write.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use rayon::ThreadPoolBuilder;
use tracing::info;

use crate::error::{Result, UndirectError};
use crate::graph::{AdjacencyGraph, GraphStore};
use crate::io::{reader, writer, Format};
use crate::symmetrize::symmetrize;
use crate::types::{EdgeWeight, KeyWidth, VertexKey, WeightType};

/// Options controlling a single read-transform-write run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Input file path.
    pub input: PathBuf,
    /// Output file path.
    pub output: PathBuf,
    /// Declared input format.
    pub input_format: Format,
    /// Requested output format.
    pub output_format: Format,
    /// Whether body lines carry a weight column.
    pub weighted: bool,
    /// Whether the input already encodes both edge directions; skips the
    /// symmetrization transform and enables reciprocal emission during read.
    pub symmetric: bool,
    /// Vertex key representation.
    pub key_width: KeyWidth,
    /// Edge weight representation.
    pub weight_type: WeightType,
    /// Worker threads for parsing, compaction, and symmetrization
    /// (0 = one per available core).
    pub max_workers: usize,
}

impl PipelineConfig {
    /// Builds a config with default formats (`mtx`), unweighted, asymmetric,
    /// default representations, and an unbounded worker count.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            input_format: Format::default(),
            output_format: Format::default(),
            weighted: false,
            symmetric: false,
            key_width: KeyWidth::default(),
            weight_type: WeightType::default(),
            max_workers: 0,
        }
    }
}

/// Runs the full pipeline inside a dedicated worker pool sized from the
/// config, monomorphizing over the configured key and weight representations.
pub fn run(config: &PipelineConfig) -> Result<()> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(config.max_workers)
        .build()
        .map_err(|e| UndirectError::InvalidArgument(format!("cannot build worker pool: {e}")))?;
    pool.install(|| match (config.key_width, config.weight_type) {
        (KeyWidth::U32, WeightType::F32) => run_typed::<u32, f32>(config),
        (KeyWidth::U32, WeightType::F64) => run_typed::<u32, f64>(config),
        (KeyWidth::U64, WeightType::F32) => run_typed::<u64, f32>(config),
        (KeyWidth::U64, WeightType::F64) => run_typed::<u64, f64>(config),
    })
}

fn run_typed<K: VertexKey, E: EdgeWeight>(config: &PipelineConfig) -> Result<()> {
    info!(input = %config.input.display(), format = ?config.input_format, "reading graph");
    let mut stream = BufReader::new(File::open(&config.input)?);
    let graph: AdjacencyGraph<K, E> = match config.input_format {
        Format::Mtx => reader::read_mtx(&mut stream, config.weighted)?,
        Format::Coo => reader::read_coo(&mut stream, config.weighted, config.symmetric)?,
        Format::Edgelist | Format::Csv | Format::Tsv => {
            reader::read_edgelist(&mut stream, config.weighted, config.symmetric)?
        }
    };
    info!(span = graph.span(), size = graph.size(), "graph loaded");

    let graph = if config.symmetric {
        graph
    } else {
        let undirected = symmetrize(&graph);
        info!(size = undirected.size(), "graph symmetrized");
        undirected
    };

    info!(output = %config.output.display(), format = ?config.output_format, "writing undirected graph");
    let mut out = BufWriter::new(File::create(&config.output)?);
    match config.output_format {
        Format::Mtx => writer::write_mtx(&mut out, &graph, config.weighted)?,
        Format::Coo => writer::write_coo(&mut out, &graph, config.weighted)?,
        format => writer::write_edgelist(&mut out, &graph, config.weighted, format.separator())?,
    }
    out.flush()?;
    Ok(())
}
