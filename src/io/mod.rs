//! On-disk graph format support: headers, record parsing, chunked parallel
//! reading, and writers.

pub mod header;
pub mod parse;
pub mod reader;
pub mod writer;

use std::str::FromStr;

use crate::error::UndirectError;

/// Supported on-disk graph formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Matrix Market coordinate format.
    #[default]
    Mtx,
    /// Coordinate format: `rows cols size` header, then body lines.
    Coo,
    /// Headerless edge list, space separated.
    Edgelist,
    /// Headerless edge list, comma separated.
    Csv,
    /// Headerless edge list, tab separated.
    Tsv,
}

impl Format {
    /// Separator used between fields when writing body lines.
    pub fn separator(self) -> char {
        match self {
            Format::Csv => ',',
            Format::Tsv => '\t',
            _ => ' ',
        }
    }
}

impl FromStr for Format {
    type Err = UndirectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mtx" => Ok(Format::Mtx),
            "coo" => Ok(Format::Coo),
            "edgelist" => Ok(Format::Edgelist),
            "csv" => Ok(Format::Csv),
            "tsv" => Ok(Format::Tsv),
            other => Err(UndirectError::InvalidArgument(format!(
                "unknown format: {other}"
            ))),
        }
    }
}
