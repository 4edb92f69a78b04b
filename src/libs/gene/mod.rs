//! Circular gene orders and their breakpoint-graph encoding.

pub mod encoder;
pub mod parser;

pub use encoder::{breakpoint_graph, chromosome_edges, encode_chromosome, encode_genome, endpoints};
pub use parser::{gene_count, parse_genome, read_genomes};
