//! Doubled-node encoding of circular gene orders.
//!
//! Every gene occupies two graph vertices, its 5' tail and 3' head.
//! Within a chromosome the head of each gene is joined to the tail of
//! the next gene, the last gene wrapping back to the first, which
//! circularizes the chromosome. Overlaying the edge sets of two genomes
//! over the same gene set yields the breakpoint graph whose connected
//! components expose conserved and rearranged regions.

use crate::libs::gene::parser::gene_count;
use crate::libs::graph::{Graph, GraphError, VertexId};

/// Tail and head vertex ids of a signed gene.
///
/// Orientation flips the pair: gene `i > 0` maps to `(2i-2, 2i-1)`,
/// gene `i < 0` to `(2|i|-1, 2|i|-2)`. Zero has no orientation and is
/// rejected.
///
/// ```
/// use syng::libs::gene::endpoints;
/// assert_eq!(endpoints(1).unwrap(), (0, 1));
/// assert_eq!(endpoints(-3).unwrap(), (5, 4));
/// assert!(endpoints(0).is_err());
/// ```
pub fn endpoints(gene: i32) -> Result<(VertexId, VertexId), GraphError> {
    if gene == 0 {
        return Err(GraphError::InvalidArgument {
            message: "gene id 0 carries no orientation".to_string(),
            value: 0,
        });
    }

    let id = gene.unsigned_abs() as usize;
    if gene > 0 {
        Ok((2 * id - 2, 2 * id - 1))
    } else {
        Ok((2 * id - 1, 2 * id - 2))
    }
}

/// Edges of one circular chromosome as (head, tail) pairs.
///
/// Only the tail list is rotated, by one position to the left; heads
/// stay in place. Edge k joins gene k's head to gene k+1's tail, the
/// last edge wrapping to gene 0's tail. Keep the asymmetry: rotating
/// both lists changes the component structure downstream.
pub fn chromosome_edges(genes: &[i32]) -> Result<Vec<(VertexId, VertexId)>, GraphError> {
    let mut tails = Vec::with_capacity(genes.len());
    let mut heads = Vec::with_capacity(genes.len());
    for &gene in genes {
        let (tail, head) = endpoints(gene)?;
        tails.push(tail);
        heads.push(head);
    }

    if !tails.is_empty() {
        tails.rotate_left(1);
    }

    Ok(heads.into_iter().zip(tails).collect())
}

/// Insert one chromosome's edges into the graph.
pub fn encode_chromosome(graph: &mut Graph, genes: &[i32]) -> Result<(), GraphError> {
    for (head, tail) in chromosome_edges(genes)? {
        graph.add_edge(head, tail)?;
    }

    Ok(())
}

/// Insert every chromosome of a genome into the graph.
pub fn encode_genome(graph: &mut Graph, chromosomes: &[Vec<i32>]) -> Result<(), GraphError> {
    for genes in chromosomes {
        encode_chromosome(graph, genes)?;
    }

    Ok(())
}

/// Build the shared graph of one or more genomes over the same gene set.
///
/// Sized to hold both endpoints of every gene, `2 * gene_count` of the
/// largest genome. A genome referencing gene ids beyond that bound fails
/// with `OutOfRange` during insertion.
pub fn breakpoint_graph(genomes: &[Vec<Vec<i32>>], label: &str) -> Result<Graph, GraphError> {
    let max_genes = genomes.iter().map(|g| gene_count(g)).max().unwrap_or(0);
    let mut graph = Graph::new(2 * max_genes as i64, label)?;

    for genome in genomes {
        encode_genome(&mut graph, genome)?;
    }

    Ok(graph)
}
