//! Reads TGF files back into a graph of string values.

use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::graph::AdjListsGraph;
use crate::types::{RatError, RatResult, TGF_SEPARATOR};

/// Reader for `.tgf` files written by [`super::TgfWriter`].
pub struct TgfReader;

impl TgfReader {
    /// Read a `.tgf` file.
    pub fn read_from_file(path: &Path) -> RatResult<AdjListsGraph<String>> {
        let file = std::fs::File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    /// Read from any buffered reader. Blank lines are ignored.
    pub fn read_from(reader: impl BufRead) -> RatResult<AdjListsGraph<String>> {
        let mut graph = AdjListsGraph::new();
        // Label -> vertex value, for the arc section.
        let mut labels: HashMap<String, String> = HashMap::new();
        let mut in_arcs = false;

        for (n, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = n + 1;
            // Vertex values are kept byte for byte, so only a CRLF ending is stripped.
            let raw = line.strip_suffix('\r').unwrap_or(line.as_str());
            if raw.trim().is_empty() {
                continue;
            }
            if !in_arcs && raw == TGF_SEPARATOR {
                in_arcs = true;
                continue;
            }

            if in_arcs {
                let mut parts = raw.split_whitespace();
                let (Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next())
                else {
                    return Err(parse_error(line_no, "expected `<from> <to>`"));
                };
                let from = lookup(&labels, from, line_no)?;
                let to = lookup(&labels, to, line_no)?;
                graph.add_arc(from, to);
            } else {
                let Some((label, value)) = raw.split_once(' ') else {
                    return Err(parse_error(line_no, "expected `<label> <value>`"));
                };
                let value = value.to_string();
                graph.add_vertex(value.clone());
                labels.insert(label.to_string(), value);
            }
        }

        Ok(graph)
    }
}

fn lookup<'a>(
    labels: &'a HashMap<String, String>,
    label: &str,
    line: usize,
) -> RatResult<&'a String> {
    labels
        .get(label)
        .ok_or_else(|| parse_error(line, &format!("unknown vertex label {}", label)))
}

fn parse_error(line: usize, reason: &str) -> RatError {
    RatError::Parse {
        line,
        reason: reason.to_string(),
    }
}
