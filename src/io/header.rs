//! Leading-metadata readers for COO and Matrix-Market files.

use std::io::BufRead;

use crate::error::{Result, UndirectError};

/// Parsed Matrix-Market banner and dimensions.
#[derive(Debug, Clone)]
pub struct MtxHeader {
    /// Whether the file declares `symmetric` or `skew-symmetric` storage.
    pub symmetric: bool,
    /// Banner field token (`real`, `integer`, `pattern`).
    pub field: String,
    /// Row count.
    pub rows: usize,
    /// Column count.
    pub cols: usize,
    /// Declared number of body lines.
    pub size: usize,
}

/// Reads a COO header, skipping blank lines and `%`/`#` comments, and returns
/// `(rows, cols, size)`.
pub fn read_coo_header<R: BufRead>(stream: &mut R) -> Result<(usize, usize, usize)> {
    let mut line = String::new();
    loop {
        line.clear();
        if stream.read_line(&mut line)? == 0 {
            return Err(UndirectError::Format("missing COO header".into()));
        }
        let body = line.trim();
        if body.is_empty() || body.starts_with('%') || body.starts_with('#') {
            continue;
        }
        return parse_dimensions(body);
    }
}

/// Reads a Matrix-Market banner block and the `rows cols size` line that
/// follows it.
pub fn read_mtx_header<R: BufRead>(stream: &mut R) -> Result<MtxHeader> {
    let mut line = String::new();
    let mut banner: Option<(String, bool)> = None;
    loop {
        line.clear();
        if stream.read_line(&mut line)? == 0 {
            return Err(UndirectError::Format("missing MTX header".into()));
        }
        let body = line.trim();
        if body.starts_with("%%") {
            let mut tokens = body.split_whitespace();
            let _marker = tokens.next();
            let object = tokens.next().unwrap_or("");
            let format = tokens.next().unwrap_or("");
            let field = tokens.next().unwrap_or("").to_string();
            let symmetry = tokens.next().unwrap_or("");
            if object != "matrix" || format != "coordinate" {
                return Err(UndirectError::Format(format!(
                    "unsupported MTX banner: {body}"
                )));
            }
            let symmetric = symmetry == "symmetric" || symmetry == "skew-symmetric";
            banner = Some((field, symmetric));
            continue;
        }
        if body.is_empty() || body.starts_with('%') {
            continue;
        }
        let (field, symmetric) = banner
            .ok_or_else(|| UndirectError::Format("missing %%MatrixMarket banner".into()))?;
        let (rows, cols, size) = parse_dimensions(body)?;
        return Ok(MtxHeader {
            symmetric,
            field,
            rows,
            cols,
            size,
        });
    }
}

fn parse_dimensions(body: &str) -> Result<(usize, usize, usize)> {
    let mut tokens = body.split_whitespace();
    let rows = parse_dimension(tokens.next())?;
    let cols = parse_dimension(tokens.next())?;
    let size = parse_dimension(tokens.next())?;
    Ok((rows, cols, size))
}

fn parse_dimension(token: Option<&str>) -> Result<usize> {
    token
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| UndirectError::Format("expected 'rows cols size' header line".into()))
}
