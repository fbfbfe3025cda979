//! Generic directed graph stored as adjacency lists.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A directed graph over vertex values of type `T`.
///
/// Vertices keep their insertion order. Each vertex owns an ordered out-list
/// of successor values; adding the same arc twice stores it twice. There is
/// no reverse index, so predecessor queries scan every out-list.
#[derive(Debug, Clone)]
pub struct AdjListsGraph<T> {
    /// All vertices, in insertion order.
    vertices: Vec<T>,
    /// Out-lists; `arcs[i]` belongs to `vertices[i]`.
    arcs: Vec<Vec<T>>,
    /// Position of each vertex in `vertices`.
    index: HashMap<T, usize>,
}

impl<T> AdjListsGraph<T>
where
    T: Eq + Hash + Clone,
{
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            arcs: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of arcs, counting repeated arcs once per occurrence.
    pub fn arc_count(&self) -> usize {
        self.arcs.iter().map(|out| out.len()).sum()
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &[T] {
        &self.vertices
    }

    /// True if `vertex` is in the graph.
    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.index.contains_key(vertex)
    }

    /// Position of `vertex` in insertion order.
    pub(crate) fn index_of(&self, vertex: &T) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    /// Out-list at a given position.
    pub(crate) fn out_list(&self, idx: usize) -> &[T] {
        &self.arcs[idx]
    }

    /// Add a vertex. Does nothing if it is already present.
    pub fn add_vertex(&mut self, vertex: T) {
        if self.index.contains_key(&vertex) {
            return;
        }
        self.index.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        self.arcs.push(Vec::new());
    }

    /// Remove a vertex, its out-list, and every arc pointing at it.
    pub fn remove_vertex(&mut self, vertex: &T) {
        let Some(pos) = self.index.remove(vertex) else {
            return;
        };
        self.vertices.remove(pos);
        self.arcs.remove(pos);
        for out in &mut self.arcs {
            out.retain(|v| v != vertex);
        }
        // Positions after the removed vertex shifted down by one.
        for (i, v) in self.vertices.iter().enumerate().skip(pos) {
            self.index.insert(v.clone(), i);
        }
    }

    /// Append `to` to the out-list of `from`. Both vertices must exist.
    pub fn add_arc(&mut self, from: &T, to: &T) {
        if !self.index.contains_key(to) {
            return;
        }
        if let Some(idx) = self.index_of(from) {
            self.arcs[idx].push(to.clone());
        }
    }

    /// Remove one occurrence of the arc `from -> to`, if present.
    pub fn remove_arc(&mut self, from: &T, to: &T) {
        if !self.index.contains_key(to) {
            return;
        }
        if let Some(idx) = self.index_of(from) {
            let out = &mut self.arcs[idx];
            if let Some(at) = out.iter().position(|v| v == to) {
                out.remove(at);
            }
        }
    }

    /// Add arcs in both directions.
    pub fn add_edge(&mut self, a: &T, b: &T) {
        self.add_arc(a, b);
        self.add_arc(b, a);
    }

    /// Remove one arc in each direction.
    pub fn remove_edge(&mut self, a: &T, b: &T) {
        self.remove_arc(a, b);
        self.remove_arc(b, a);
    }

    /// True if `to` appears in the out-list of `from`.
    pub fn is_arc(&self, from: &T, to: &T) -> bool {
        self.successors(from)
            .map(|out| out.contains(to))
            .unwrap_or(false)
    }

    /// True if both `a -> b` and `b -> a` are arcs.
    pub fn is_edge(&self, a: &T, b: &T) -> bool {
        self.is_arc(a, b) && self.is_arc(b, a)
    }

    /// True if every stored arc has its reciprocal.
    pub fn is_undirected(&self) -> bool {
        self.vertices
            .iter()
            .zip(&self.arcs)
            .all(|(from, out)| out.iter().all(|to| self.is_arc(to, from)))
    }

    /// The out-list of `vertex`, or `None` if the vertex is absent.
    pub fn successors(&self, vertex: &T) -> Option<&[T]> {
        self.index_of(vertex).map(|idx| self.arcs[idx].as_slice())
    }

    /// Every vertex with at least one arc into `vertex`, in insertion order.
    ///
    /// Scans all out-lists. An absent vertex simply has no predecessors.
    pub fn predecessors(&self, vertex: &T) -> Vec<T> {
        self.vertices
            .iter()
            .zip(&self.arcs)
            .filter(|(_, out)| out.contains(vertex))
            .map(|(v, _)| v.clone())
            .collect()
    }
}

impl<T> Default for AdjListsGraph<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for AdjListsGraph<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "This graph contains {} vertices", self.vertices.len())?;
        write!(f, "Vertices: [")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        writeln!(f, "]")?;
        for (v, out) in self.vertices.iter().zip(&self.arcs) {
            write!(f, "From {}: [", v)?;
            for (i, to) in out.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", to)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
