use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the arguments from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn query_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("post-id")
                .long("post-id")
                .help("Only work on the record with this id")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("post-type")
                .long("post-type")
                .help("Only work on records of this type")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("numberposts")
                .long("numberposts")
                .help("Maximum number of records to retrieve")
                .value_hint(ValueHint::Other),
        )
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("acf2g")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert flexible-content layouts to block editor content")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-kinds")
                .long("list-kinds")
                .help("List layout kinds and the blocks they convert to")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to an acf2g.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .help("Path to the JSON site export")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            query_args(Command::new("analyse").about("Analyse records for use of layout kinds"))
                .arg(
                    Arg::new("show-ids")
                        .long("show-ids")
                        .help("Show the ids of the records using each kind")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            query_args(Command::new("convert").about("Convert layouts in records to blocks")).arg(
                Arg::new("output")
                    .long("output")
                    .short('o')
                    .help("Write the updated store here instead of back to --store")
                    .value_hint(ValueHint::FilePath),
            ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "acf2g", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "acf2g", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "acf2g", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
