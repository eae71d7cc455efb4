//! Body record parsing shared by every text format.

/// A parsed body record: source, target, weight.
pub type Triple = (u64, u64, f64);

/// Parses one body line into a triple.
///
/// Comma, tab, and space separators are treated uniformly, so edgelist, CSV,
/// and TSV bodies share this path. Under `weighted` a missing or malformed
/// third token degrades to weight `0`; an unweighted line gets weight `1`.
/// Returns `None` when the line does not yield two integers (blank or
/// malformed lines drop out instead of aborting the run).
pub fn parse_record(line: &str, weighted: bool) -> Option<Triple> {
    let mut tokens = line
        .split([' ', '\t', ','])
        .filter(|token| !token.is_empty());
    let u: u64 = tokens.next()?.trim().parse().ok()?;
    let v: u64 = tokens.next()?.trim().parse().ok()?;
    let w = if weighted {
        tokens
            .next()
            .and_then(|token| token.trim().parse().ok())
            .unwrap_or(0.0)
    } else {
        1.0
    };
    Some((u, v, w))
}
