//! Writes graphs in TGF (trivial graph format).

use std::fmt::Display;
use std::fs::File;
use std::hash::Hash;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::graph::AdjListsGraph;
use crate::types::{RatError, RatResult, TGF_SEPARATOR};

/// Writer for `.tgf` files.
///
/// Vertices are labelled `1..=n` in insertion order. The file holds one
/// `<label> <value>` line per vertex, a `#` line, then one `<from> <to>` line
/// per arc in out-list order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TgfWriter;

impl TgfWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self
    }

    /// Write `graph` to any writer, propagating I/O errors.
    pub fn write_to<T>(
        &self,
        graph: &AdjListsGraph<T>,
        writer: &mut impl Write,
    ) -> RatResult<()>
    where
        T: Eq + Hash + Clone + Display,
    {
        for (i, vertex) in graph.vertices().iter().enumerate() {
            writeln!(writer, "{} {}", i + 1, vertex)?;
        }
        writeln!(writer, "{}", TGF_SEPARATOR)?;
        for i in 0..graph.vertex_count() {
            for to in graph.out_list(i) {
                // Out-lists only ever hold present vertices.
                if let Some(j) = graph.index_of(to) {
                    writeln!(writer, "{} {}", i + 1, j + 1)?;
                }
            }
        }
        writer.flush()?;
        Ok(())
    }

    /// Write `graph` to a file.
    ///
    /// I/O failures are logged and swallowed: the return value says whether
    /// the file was written, and the caller is never interrupted.
    pub fn save_to_file<T>(&self, graph: &AdjListsGraph<T>, path: &Path) -> bool
    where
        T: Eq + Hash + Clone + Display,
    {
        let result = File::create(path)
            .map_err(RatError::from)
            .and_then(|file| self.write_to(graph, &mut BufWriter::new(file)));
        match result {
            Ok(()) => {
                log::debug!(
                    "Wrote {} vertices to {}",
                    graph.vertex_count(),
                    path.display()
                );
                true
            }
            Err(e) => {
                log::error!("Could not write TGF file {}: {}", path.display(), e);
                false
            }
        }
    }
}
