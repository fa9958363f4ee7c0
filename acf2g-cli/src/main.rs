// Command-line interface for acf2g
//
// This binary converts posts whose content lives in flexible-content layout fields into block
// editor content, working on a JSON export of the site.
//
// The conversion itself lives in the acf2g-babel crate. This crate only deals with the shell:
// arguments, configuration, reading and writing the store file, and printing reports.
//
// Usage:
//  acf2g analyse [--post-id <id>] [--post-type <type>] [--numberposts <n>] [--show-ids]
//  acf2g convert [--post-id <id>] [--post-type <type>] [--numberposts <n>] [-o <file>]
//  acf2g --list-kinds                    - List layout kinds and how they convert
//
// Records that fail to convert are reported and left untouched; they never fail the command.
// Only configuration and store I/O errors exit with a non-zero status.

mod report;

use acf2g_babel::analysis::analyse;
use acf2g_babel::batch::convert_records;
use acf2g_babel::{ConverterRegistry, JsonStore};
use acf2g_config::{Acf2gConfig, ConfigError, Loader};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::fs;
use std::path::{Path, PathBuf};

fn query_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("post-id")
                .long("post-id")
                .alias("post_id")
                .value_name("ID")
                .help("Only work on the record with this id")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("post-type")
                .long("post-type")
                .alias("post_type")
                .value_name("TYPE")
                .help("Only work on records of this type (default: post)")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("numberposts")
                .long("numberposts")
                .value_name("N")
                .help("Maximum number of records to retrieve (default: 5)")
                .value_parser(clap::value_parser!(usize)),
        )
}

fn build_cli() -> Command {
    Command::new("acf2g")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert flexible-content layouts to block editor content")
        .long_about(
            "acf2g converts posts built from flexible-content layouts into block editor content.\n\n\
            Commands:\n  \
            - analyse: Count how many records use each layout kind\n  \
            - convert: Replace record content with the converted blocks\n\n\
            Records are read from a JSON site export (--store, or store.path in acf2g.toml).\n\n\
            Examples:\n  \
            acf2g analyse --show-ids                     # Layout usage of the first 5 posts\n  \
            acf2g analyse --post-type page --numberposts 50\n  \
            acf2g convert --post-id 12                   # Convert a single record\n  \
            acf2g convert -o converted.json              # Write the result to another file",
        )
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
                .value_name("PATH")
                .help("Path to an acf2g.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .value_name("PATH")
                .help("Path to the JSON site export")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            query_args(
                Command::new("analyse")
                    .about("Analyse records for use of layout kinds")
                    .long_about(
                        "Count, per layout kind, the records using it at least once.\n\n\
                        Kinds the converter does not know are listed after the known ones.\n\n\
                        Examples:\n  \
                        acf2g analyse                      # First 5 posts\n  \
                        acf2g analyse --show-ids           # Also list the record ids",
                    )
                    .alias("analyze"),
            )
            .arg(
                Arg::new("show-ids")
                    .long("show-ids")
                    .alias("show_ids")
                    .help("Show the ids of the records using each kind")
                    .action(ArgAction::SetTrue),
            ),
        )
        .subcommand(
            query_args(
                Command::new("convert")
                    .about("Convert layouts in records to blocks")
                    .long_about(
                        "Convert the layouts of the selected records and replace their content.\n\n\
                        With --post-id exactly that record is converted, otherwise up to\n\
                        --numberposts records of --post-type.\n\
                        Records that fail to convert keep their content and are reported.\n\n\
                        Examples:\n  \
                        acf2g convert --post-id 12\n  \
                        acf2g convert --numberposts 100 -o converted.json",
                    ),
            )
            .arg(
                Arg::new("output")
                    .long("output")
                    .short('o')
                    .value_name("PATH")
                    .help("Write the updated store here instead of back to --store")
                    .value_hint(ValueHint::FilePath),
            ),
        )
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = build_cli().get_matches();

    if matches.get_flag("list-kinds") {
        print!("{}", report::format_kinds(&ConverterRegistry::with_defaults()));
        return;
    }

    let Some((name, sub_matches)) = matches.subcommand() else {
        eprintln!("Unknown subcommand. Use --help for usage information.");
        std::process::exit(1);
    };

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        sub_matches,
    );
    let post_id = sub_matches.get_one::<u64>("post-id").copied();

    match name {
        "analyse" => {
            handle_analyse_command(&config, post_id, sub_matches.get_flag("show-ids"));
        }
        "convert" => {
            let output = sub_matches.get_one::<String>("output").map(PathBuf::from);
            handle_convert_command(&config, post_id, output.as_deref());
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn handle_analyse_command(config: &Acf2gConfig, post_id: Option<u64>, show_ids: bool) {
    let store = read_store(&config.store.path);
    let filter = config.query.filter(post_id);

    let usage = analyse(&store, &filter).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    print!("{}", report::format_usage(&usage, show_ids));
}

fn handle_convert_command(config: &Acf2gConfig, post_id: Option<u64>, output: Option<&Path>) {
    let mut store = read_store(&config.store.path);
    let filter = config.query.filter(post_id);
    let registry = ConverterRegistry::with_defaults();

    let batch = convert_records(&registry, &mut store, &filter, (&config.convert).into())
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    let target = output.unwrap_or(config.store.path.as_path());
    write_store(&store, target, config.store.pretty);

    print!("{}", report::format_batch(&batch));
}

fn read_store(path: &Path) -> JsonStore {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading store '{}': {e}", path.display());
        std::process::exit(1);
    });

    JsonStore::from_json(&source).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn write_store(store: &JsonStore, path: &Path, pretty: bool) {
    let json = store.to_json(pretty).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    if let Err(e) = fs::write(path, json) {
        eprintln!("Error writing store '{}': {e}", path.display());
        std::process::exit(1);
    }
    log::info!("store written to {}", path.display());
}

fn load_cli_config(explicit_path: Option<&str>, matches: &ArgMatches) -> Acf2gConfig {
    let loader = Loader::new().with_optional_file("acf2g.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    apply_cli_overrides(loader, matches)
        .and_then(Loader::build)
        .unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        })
}

/// Command-line flags take precedence over every configuration file.
fn apply_cli_overrides(mut loader: Loader, matches: &ArgMatches) -> Result<Loader, ConfigError> {
    if let Some(path) = matches.get_one::<String>("store") {
        loader = loader.set_override("store.path", path.as_str())?;
    }
    if let Some(post_type) = matches.get_one::<String>("post-type") {
        loader = loader.set_override("query.post_type", post_type.as_str())?;
    }
    if let Some(limit) = matches.get_one::<usize>("numberposts") {
        loader = loader.set_override("query.numberposts", *limit as u64)?;
    }
    Ok(loader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_underscore_aliases() {
        let matches = build_cli()
            .try_get_matches_from([
                "acf2g",
                "analyse",
                "--post_id",
                "12",
                "--post_type",
                "page",
                "--show_ids",
            ])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "analyse");
        assert_eq!(sub.get_one::<u64>("post-id"), Some(&12));
        assert_eq!(sub.get_one::<String>("post-type").unwrap(), "page");
        assert!(sub.get_flag("show-ids"));
    }

    #[test]
    fn test_flags_override_config() {
        let matches = build_cli()
            .try_get_matches_from([
                "acf2g",
                "convert",
                "--store",
                "export.json",
                "--post-type",
                "page",
                "--numberposts",
                "9",
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();

        let config = apply_cli_overrides(Loader::new(), sub)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.store.path, PathBuf::from("export.json"));
        assert_eq!(config.query.post_type, "page");
        assert_eq!(config.query.numberposts, 9);
    }

    #[test]
    fn test_no_flags_keep_defaults() {
        let matches = build_cli()
            .try_get_matches_from(["acf2g", "analyse"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();

        let config = apply_cli_overrides(Loader::new(), sub)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.query.post_type, "post");
        assert_eq!(config.query.numberposts, 5);
    }

    #[test]
    fn test_negative_limit_is_rejected() {
        let result = build_cli().try_get_matches_from(["acf2g", "convert", "--numberposts", "-1"]);
        assert!(result.is_err());
    }
}
