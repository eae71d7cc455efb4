#![allow(missing_docs)]

use std::fs;

use proptest::prelude::*;
use tempfile::tempdir;
use undirect::io::Format;
use undirect::pipeline::{run, PipelineConfig};
use undirect::symmetrize::symmetrize;
use undirect::{AdjacencyGraph, GraphStore};

#[test]
fn weighted_coo_round_trip_symmetrizes() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.coo");
    let output = dir.path().join("out.coo");
    fs::write(&input, "3 3 3\n1 2 1.0\n2 3 1.0\n1 3 1.0\n").unwrap();

    let mut config = PipelineConfig::new(&input, &output);
    config.input_format = Format::Coo;
    config.output_format = Format::Coo;
    config.weighted = true;
    run(&config).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text, "3 3 6\n1 2 1\n1 3 1\n2 1 1\n2 3 1\n3 1 1\n3 2 1\n");
}

#[test]
fn symmetric_mtx_bypasses_the_transform() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.mtx");
    let output = dir.path().join("out.mtx");
    fs::write(
        &input,
        "%%MatrixMarket matrix coordinate pattern symmetric\n2 2 1\n1 2\n",
    )
    .unwrap();

    // The file already encodes both directions via reciprocal emission
    // during read, so the explicit transform is skipped.
    let mut config = PipelineConfig::new(&input, &output);
    config.symmetric = true;
    run(&config).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(
        text,
        "%%MatrixMarket matrix coordinate pattern general\n2 2 2\n1 2\n2 1\n"
    );
}

#[test]
fn csv_to_tsv_conversion() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.tsv");
    fs::write(&input, "1,2\n2,3\n").unwrap();

    let mut config = PipelineConfig::new(&input, &output);
    config.input_format = Format::Csv;
    config.output_format = Format::Tsv;
    run(&config).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text, "1\t2\n2\t1\n2\t3\n3\t2\n");
}

#[test]
fn missing_input_file_fails() {
    let dir = tempdir().unwrap();
    let config = PipelineConfig::new(dir.path().join("absent.mtx"), dir.path().join("out.mtx"));
    assert!(run(&config).is_err());
}

fn build(edges: &[(u32, u32)]) -> AdjacencyGraph<u32, f32> {
    let mut graph: AdjacencyGraph<u32, f32> = AdjacencyGraph::new();
    for &(u, v) in edges {
        graph.add_edge(u, v, 1.0);
    }
    graph.update();
    graph
}

proptest! {
    #[test]
    fn symmetrize_is_complete_and_idempotent(
        edges in proptest::collection::vec((1u32..=16, 1u32..=16), 0..64)
    ) {
        let x = build(&edges);
        let y = symmetrize(&x);
        // Every input edge and its reverse appear in the output.
        for &(u, v) in &edges {
            prop_assert!(y.edges(u).iter().any(|&(t, _)| t == v));
            prop_assert!(y.edges(v).iter().any(|&(t, _)| t == u));
        }
        // A second pass changes nothing.
        let z = symmetrize(&y);
        prop_assert_eq!(y.span(), z.span());
        for u in 1..=y.span() as u32 {
            prop_assert_eq!(y.edges(u), z.edges(u));
        }
    }
}
