use clap::*;
use std::io::Write;

use syng::libs::gene;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("edges")
        .about("Edge listing of a breakpoint graph")
        .after_help(
            r###"
Prints every edge of the breakpoint graph, one head/tail pair per line,
in insertion order. Mostly useful for inspecting small graphs.

Notes:
* One genome per line, one or more parenthesized chromosomes per genome
* Supports both plain text and gzipped (.gz) files
* Reads from stdin if input file is 'stdin'

Examples:
1. List the overlaid edges of two genomes:
   syng edges tests/genome/two_genomes.txt

2. Save the output to a file:
   syng edges tests/genome/two_genomes.txt -o output.tsv

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Input genome file to process"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let infile = args.get_one::<String>("infile").unwrap();
    let mut writer = syng::writer(args.get_one::<String>("outfile").unwrap());

    let genomes = gene::read_genomes(infile)?;
    // building the graph validates genes and vertex ranges up front
    let graph = gene::breakpoint_graph(&genomes, infile)?;
    if graph.edges() == 0 {
        eprintln!("No edges in {}", infile);
    }

    for genome in &genomes {
        for chromosome in genome {
            for (head, tail) in gene::chromosome_edges(chromosome)? {
                writer.write_fmt(format_args!("{}\t{}\n", head, tail))?;
            }
        }
    }

    Ok(())
}
