pub mod component;
pub mod error;
#[cfg(test)]
pub mod tests;

pub use component::{ComponentResult, ComponentSearch, FrontierSearch, RecursiveDfs};
pub use error::GraphError;

/// VertexId is an index into the graph's adjacency arena.
/// It is lightweight (Copy) and safe (no pointers).
pub type VertexId = usize;

/// An undirected multigraph over a fixed vertex set.
///
/// The vertex count is set at construction and never changes; edges are
/// only ever inserted. Parallel edges and self-loops are allowed, so
/// `adj[v]` may hold the same neighbor more than once and a self-loop
/// contributes 2 to `degree(v)`.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    /// Number of vertices, fixed at construction
    vertices: usize,

    /// Running count of inserted edges
    edges: usize,

    /// Display name; not used by algorithms
    label: String,

    /// adj[v] lists the neighbors of v in insertion order
    adj: Vec<Vec<VertexId>>,
}

impl Graph {
    /// Create a graph with `vertices` isolated vertices.
    ///
    /// The count is taken as a signed integer so that sizes computed from
    /// signed gene arithmetic can be passed through unchanged; negative
    /// counts are rejected.
    ///
    /// ```
    /// use syng::libs::graph::Graph;
    /// let graph = Graph::new(12, "geneA").unwrap();
    /// assert_eq!(graph.vertices(), 12);
    /// assert_eq!(graph.edges(), 0);
    ///
    /// assert!(Graph::new(-1, "bad").is_err());
    /// ```
    pub fn new(vertices: i64, label: &str) -> Result<Self, GraphError> {
        if vertices < 0 {
            return Err(GraphError::InvalidArgument {
                message: "vertex count cannot be less than zero".to_string(),
                value: vertices,
            });
        }
        let vertices = vertices as usize;

        Ok(Self {
            vertices,
            edges: 0,
            label: label.to_string(),
            adj: vec![Vec::new(); vertices],
        })
    }

    /// Number of vertices
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// Number of inserted edges
    pub fn edges(&self) -> usize {
        self.edges
    }

    /// Display name
    pub fn label(&self) -> &str {
        &self.label
    }

    fn check_vertex(&self, v: VertexId) -> Result<(), GraphError> {
        if v >= self.vertices {
            return Err(GraphError::OutOfRange {
                vertex: v,
                bound: self.vertices,
            });
        }
        Ok(())
    }

    /// Insert the undirected edge (v, w).
    ///
    /// Both endpoints are validated before anything is mutated, so a
    /// failed call leaves the graph unchanged. No deduplication: the
    /// gene encoding legitimately produces parallel edges.
    pub fn add_edge(&mut self, v: VertexId, w: VertexId) -> Result<(), GraphError> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;

        self.edges += 1;
        self.adj[v].push(w);
        self.adj[w].push(v);

        Ok(())
    }

    /// Length of v's adjacency list. A self-loop counts twice.
    pub fn degree(&self, v: VertexId) -> Result<usize, GraphError> {
        self.check_vertex(v)?;
        Ok(self.adj[v].len())
    }

    /// Neighbors of v in insertion order.
    pub fn neighbors(&self, v: VertexId) -> Result<&[VertexId], GraphError> {
        self.check_vertex(v)?;
        Ok(&self.adj[v])
    }

    /// Unchecked adjacency access for traversals that scan 0..vertices.
    pub(crate) fn adj(&self, v: VertexId) -> &[VertexId] {
        &self.adj[v]
    }

    // --- Delegation to component ---

    /// Connected components via the frontier strategy, the default for
    /// inputs of unknown size.
    pub fn components(&self) -> ComponentResult {
        FrontierSearch.run(self)
    }
}
