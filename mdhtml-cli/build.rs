use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the format names known to the converter registry.
// Build scripts can't reach the library crate, so they are repeated here.
const AVAILABLE_FORMATS: &[&str] = &["html", "markdown"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let format_arg = |name: &'static str, help: &'static str| {
        Arg::new(name)
            .long(name)
            .help(help)
            .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_FORMATS))
            .value_hint(ValueHint::Other)
    };

    let mut cmd = Command::new("mdhtml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between Markdown and block-editor HTML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdhtml.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log every applied fix to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a file between Markdown and HTML")
                .arg(
                    Arg::new("input")
                        .help("Input file, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(format_arg("from", "Source format (auto-detected from the file extension)"))
                .arg(format_arg("to", "Target format (defaults to the other format)"))
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output file (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("fixes").about("List the built-in HTML fixes").arg(
                Arg::new("json")
                    .long("json")
                    .help("Print the list as JSON")
                    .action(ArgAction::SetTrue),
            ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mdhtml", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mdhtml", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mdhtml", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
