extern crate clap;
use clap::*;

mod cmd_syng;

fn main() -> anyhow::Result<()> {
    let app = Command::new("syng")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`syng` - SYNteny Graph")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_syng::comp::make_subcommand())
        .subcommand(cmd_syng::edges::make_subcommand())
        .after_help(
            r###"Subcommands:

* comp  - Connected components of a breakpoint graph
* edges - Edge listing of a breakpoint graph

Genome files hold one genome per line, one or more parenthesized
chromosomes per genome:

    (+1 -3 -6 -5)(+2 -4)
    (+1 +2 +3 +4 +5 +6)

All genomes in a file are overlaid into one shared graph.

"###,
        );

    // Check which subcomamnd the user ran...
    match app.get_matches().subcommand() {
        Some(("comp", sub_matches)) => cmd_syng::comp::execute(sub_matches),
        Some(("edges", sub_matches)) => cmd_syng::edges::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
