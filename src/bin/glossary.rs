//! Command-line interface for glossary
//! This binary turns a term/definition text file into a folder of cross-linked HTML pages.
//!
//! Usage:
//!   glossary `<input>` `<output>`                    - Publish the glossary into the output folder
//!   glossary                                         - Prompt for the input file and output folder
//!   glossary `<input>` --inspect `<format>`          - Print the parsed glossary (terms, json, yaml)
//!
//! Options:
//!   --config `<file>`       layer a TOML configuration file over the defaults
//!   --separators `<chars>`  replace the separator characters
//!   -v / -vv               more log output (RUST_LOG is honoured as well)

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use glossary::glossary::inspect::{inspect, InspectFormat, AVAILABLE_FORMATS};
use glossary::glossary::{load_glossary, GlossaryError, Publisher};
use glossary_config::{GlossaryConfig, Loader};
use log::LevelFilter;
use std::io::{self, BufRead, Write};

fn main() {
    let matches = Command::new("glossary")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Builds a cross-linked static HTML glossary from a term list")
        .arg(
            Arg::new("input")
                .help("Path to the glossary source file (prompted for when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Folder to write index.html and the term pages into (prompted for when omitted)")
                .index(2),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("separators")
                .long("separators")
                .short('s')
                .help("Characters that separate words in definitions (default: ', .!?-')"),
        )
        .arg(
            Arg::new("inspect")
                .long("inspect")
                .short('i')
                .help("Print the parsed glossary instead of writing pages")
                .value_parser(PossibleValuesParser::new(AVAILABLE_FORMATS.iter().copied())),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log output (-v info, -vv debug)")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), GlossaryError> {
    let config = load_config(matches)?;

    let input = match matches.get_one::<String>("input") {
        Some(path) => path.clone(),
        None => prompt("Enter a input file: ")?,
    };

    if let Some(format) = matches.get_one::<String>("inspect") {
        return handle_inspect_command(&config, &input, format);
    }

    let output = match matches.get_one::<String>("output") {
        Some(path) => path.clone(),
        None => prompt("Enter the folder where you would like to store the output files: ")?,
    };

    let report = Publisher::new(&config).publish(&input, &output)?;
    println!(
        "Wrote {} and {} term pages to {}",
        report.index.display(),
        report.pages.len(),
        output
    );
    Ok(())
}

/// Handle the --inspect flag
fn handle_inspect_command(
    config: &GlossaryConfig,
    input: &str,
    format: &str,
) -> Result<(), GlossaryError> {
    let format: InspectFormat = format.parse()?;
    let glossary = load_glossary(input)?;
    let publisher = Publisher::new(config);
    print!("{}", inspect(&glossary, publisher.separators(), format)?);
    Ok(())
}

fn load_config(matches: &ArgMatches) -> Result<GlossaryConfig, GlossaryError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(separators) = matches.get_one::<String>("separators") {
        loader = loader.set_override("tokenizer.separators", separators.as_str())?;
    }
    Ok(loader.build()?)
}

/// Ask for one line on stdin, without its line ending.
fn prompt(question: &str) -> Result<String, GlossaryError> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", question).map_err(GlossaryError::Prompt)?;
    stdout.flush().map_err(GlossaryError::Prompt)?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(GlossaryError::Prompt)?;
    Ok(answer.trim_end_matches(['\r', '\n']).to_string())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}
