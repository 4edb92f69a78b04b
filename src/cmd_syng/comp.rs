use clap::*;
use itertools::Itertools;
use std::io::Write;

use syng::libs::gene;
use syng::libs::graph::{ComponentSearch, FrontierSearch, RecursiveDfs};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("comp")
        .about("Connected components of a breakpoint graph")
        .after_help(
            r###"
Overlays all genomes of the input file into one breakpoint graph and
reports its connected components as tab-separated key/value lines.

Notes:
* One genome per line, one or more parenthesized chromosomes per genome
* Supports both plain text and gzipped (.gz) files
* Reads from stdin if input file is 'stdin'
* `--method recursive` uses call-stack recursion and can overflow on
  large components; the default frontier expansion has no such bound

Examples:
1. Components of two circular genomes:
   syng comp tests/genome/two_genomes.txt

2. Force the recursive traversal:
   syng comp tests/genome/two_genomes.txt --method recursive

3. Save the output to a file:
   syng comp tests/genome/two_genomes.txt -o output.tsv

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Input genome file to process"),
        )
        .arg(
            Arg::new("method")
                .long("method")
                .num_args(1)
                .default_value("frontier")
                .value_parser(["frontier", "recursive"])
                .help("Component search strategy"),
        )
        .arg(
            Arg::new("ids")
                .long("ids")
                .action(ArgAction::SetTrue)
                .help("Also list the component id of every vertex"),
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
    let label = std::path::Path::new(infile)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(infile);
    let graph = gene::breakpoint_graph(&genomes, label)?;

    let search: Box<dyn ComponentSearch> =
        match args.get_one::<String>("method").unwrap().as_str() {
            "recursive" => Box::new(RecursiveDfs),
            _ => Box::new(FrontierSearch),
        };
    let result = search.run(&graph);

    // first vertex of each component in scan order
    let mut seeds = vec![None; result.count()];
    for (v, &comp) in result.ids().iter().enumerate() {
        if seeds[comp].is_none() {
            seeds[comp] = Some(v);
        }
    }

    writer.write_fmt(format_args!("label\t{}\n", graph.label()))?;
    writer.write_fmt(format_args!("genomes\t{}\n", genomes.len()))?;
    writer.write_fmt(format_args!(
        "genes\t{}\n",
        genomes.iter().map(|g| gene::gene_count(g)).join(",")
    ))?;
    writer.write_fmt(format_args!("vertices\t{}\n", graph.vertices()))?;
    writer.write_fmt(format_args!("edges\t{}\n", graph.edges()))?;
    writer.write_fmt(format_args!("components\t{}\n", result.count()))?;
    writer.write_fmt(format_args!(
        "seeds\t{}\n",
        seeds.iter().flatten().join(",")
    ))?;
    writer.write_fmt(format_args!("sizes\t{}\n", result.sizes().iter().join(",")))?;

    if args.get_flag("ids") {
        for (v, comp) in result.ids().iter().enumerate() {
            writer.write_fmt(format_args!("id\t{}\t{}\n", v, comp))?;
        }
    }

    Ok(())
}
