use crate::error::{Error, Result};
use crate::node::{GridNode, NodeKind, Position};
use crate::shape::PipeShape;

/// Parse one `<symbol> <row> <col>` record. `line_no` is 1-based and only
/// used for error reporting.
pub fn parse_line(line_no: usize, line: &str) -> Result<GridNode> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() < 3 {
        return Err(Error::MissingFields {
            line: line_no,
            found: fields.len(),
        });
    }
    if fields.len() > 3 {
        return Err(Error::TrailingFields { line: line_no });
    }

    let symbol = single_char(fields[0]).ok_or_else(|| Error::UnknownSymbol {
        line: line_no,
        symbol: fields[0].to_string(),
    })?;

    let row: i64 = fields[1].parse().map_err(|_| Error::InvalidRow {
        line: line_no,
        value: fields[1].to_string(),
    })?;

    // The column field may carry a line-ending artifact (a stray `\r` from a
    // CRLF file, for instance); strip any trailing non-digit run before
    // converting.
    let col_field = fields[2].trim_end_matches(|c: char| !c.is_ascii_digit());
    let col: i64 = col_field.parse().map_err(|_| Error::InvalidColumn {
        line: line_no,
        value: fields[2].to_string(),
    })?;

    let kind = classify(symbol).ok_or_else(|| Error::UnknownSymbol {
        line: line_no,
        symbol: fields[0].to_string(),
    })?;

    Ok(GridNode {
        symbol,
        position: Position::new(row, col),
        kind,
    })
}

/// Parse a full grid description. Blank lines are skipped; the first
/// malformed record aborts the parse.
pub fn parse_lines<I, S>(lines: I) -> Result<Vec<GridNode>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut nodes = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        nodes.push(parse_line(idx + 1, line)?);
    }

    tracing::debug!("parsed {} grid cells", nodes.len());

    Ok(nodes)
}

fn single_char(field: &str) -> Option<char> {
    let mut chars = field.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some(first)
}

fn classify(symbol: char) -> Option<NodeKind> {
    if symbol == '*' {
        Some(NodeKind::Source)
    } else if symbol.is_ascii_uppercase() {
        Some(NodeKind::Sink)
    } else {
        PipeShape::from_glyph(symbol).map(NodeKind::Pipe)
    }
}
