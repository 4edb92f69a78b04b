use anyhow::Context;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CHROMOSOME_RE: Regex = Regex::new(r"[()]").unwrap();
}

/// Parse one genome line into its chromosomes.
///
/// A line holds one or more parenthesized chromosomes; whitespace
/// separates signed gene tokens within a chromosome.
///
/// ```
/// let genome = syng::libs::gene::parse_genome("(+1 -3 -6 -5)(+2 -4)").unwrap();
/// assert_eq!(genome, vec![vec![1, -3, -6, -5], vec![2, -4]]);
/// ```
pub fn parse_genome(line: &str) -> anyhow::Result<Vec<Vec<i32>>> {
    let mut chromosomes = vec![];
    for part in CHROMOSOME_RE.split(line) {
        if part.trim().is_empty() {
            continue;
        }
        chromosomes.push(parse_chromosome(part)?);
    }

    Ok(chromosomes)
}

fn parse_chromosome(part: &str) -> anyhow::Result<Vec<i32>> {
    let mut genes = vec![];
    for token in part.split_whitespace() {
        let gene: i32 = token
            .parse()
            .with_context(|| format!("invalid gene token `{}`", token))?;
        genes.push(gene);
    }

    Ok(genes)
}

/// Read a genome file, one genome per non-blank line.
pub fn read_genomes(infile: &str) -> anyhow::Result<Vec<Vec<Vec<i32>>>> {
    let mut genomes = vec![];
    for (i, line) in crate::libs::io::read_genome_lines(infile)?.iter().enumerate() {
        let genome =
            parse_genome(line).with_context(|| format!("genome on line {}", i + 1))?;
        genomes.push(genome);
    }

    Ok(genomes)
}

/// Total genes across a genome's chromosomes
pub fn gene_count(genome: &[Vec<i32>]) -> usize {
    genome.iter().map(|chr| chr.len()).sum()
}
