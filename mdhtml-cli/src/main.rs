// Command-line interface for mdhtml
//
// This binary converts documents between Markdown and the HTML flavour the
// block editor accepts, using the mdhtml library converters.
//
// Converting:
//
// The source format is auto-detected from the input file extension and can be
// overridden with --from. The target defaults to the other format, or to the
// format of the -o file when one is given.
// Usage:
//  mdhtml <input> [--to <format>] [--from <format>] [--output <file>]  - Convert (default)
//  mdhtml convert <input> [...]                                         - Same as above (explicit)
//  mdhtml convert - --from markdown                                     - Read from stdin
//  mdhtml fixes [--json]                                                - List the built-in HTML fixes
//
// Extra Parameters:
//
// Converter options can be overridden per run using --extra-<parameter-name> <value>.
// They take precedence over mdhtml.toml and the built-in defaults.
// Example:
//  mdhtml post.md --extra-extension --extra-rules trim,unwrap-single-paragraph

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mdhtml::fixes::fix_infos;
use mdhtml::{
    ConverterRegistry, HtmlToMarkdown, HtmlToMarkdownOptions, MarkdownToHtml,
    MarkdownToHtmlOptions,
};
use mdhtml_config::{Loader, MdhtmlConfig};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "fixes", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>=<value>` (explicit value, may start with '-')
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // `--extra-<key>=<value>` carries values that start with '-'
            if let Some((key, value)) = key.split_once('=') {
                extra_params.insert(key.to_string(), value.to_string());
                i += 1;
                continue;
            }

            // A following argument that is not a flag is the value
            let has_value = i + 1 < args.len() && !args[i + 1].starts_with('-');

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("mdhtml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between Markdown and block-editor HTML")
        .long_about(
            "mdhtml converts documents between Markdown and the HTML accepted by the block editor.\n\n\
            Commands:\n  \
            - convert: Markdown -> HTML or HTML -> Markdown (default command)\n  \
            - fixes:   List the HTML fixes applied after Markdown rendering\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override converter options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n  \
            Values starting with '-' need the --extra-<name>=<value> form.\n\n\
            Examples:\n  \
            mdhtml post.md                              # Markdown to HTML (stdout)\n  \
            mdhtml page.html -o page.md                 # HTML to Markdown file\n  \
            mdhtml post.md --extra-extension            # Enable tables, task lists, strikethrough\n  \
            cat post.md | mdhtml convert - --from markdown",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .about("Convert between Markdown and HTML (default command)")
                .long_about(
                    "Convert a document between Markdown and HTML.\n\n\
                    Supported formats:\n  \
                    - markdown: Markdown (.md, .markdown)\n  \
                    - html:     HTML fragments (.html, .htm)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    mdhtml convert post.md                      # Markdown to HTML (stdout)\n  \
                    mdhtml convert page.html -o page.md         # HTML to Markdown file\n  \
                    mdhtml convert - --from html                # Read HTML from stdin\n  \
                    mdhtml post.md                              # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .long_help(
                            "Source format to convert from.\n\n\
                            If not specified, the format is auto-detected from the file extension.\n\
                            Required when reading from stdin.",
                        )
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (defaults to the other format)")
                        .long_help(
                            "Target format to convert to.\n\n\
                            Available formats: markdown, html\n\
                            If not specified, it is taken from the -o file extension,\n\
                            falling back to the format opposite to the source.",
                        )
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("fixes")
                .about("List the built-in HTML fixes")
                .long_about(
                    "List the fixes that can run after Markdown is rendered to HTML.\n\n\
                    Fixes marked as default run unless markdown_to_html.rules in\n\
                    mdhtml.toml (or --extra-rules) selects a different list.",
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the list as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that looks like a file (or stdin) means "convert"
            if cleaned_args.len() > 1
                && (!cleaned_args[1].starts_with('-') || cleaned_args[1] == "-")
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    init_logging(&config, matches.get_flag("verbose"));
    apply_config_overrides(&mut config, &mut extra_params);

    for key in extra_params.keys() {
        tracing::warn!(parameter = %key, "ignoring unknown --extra parameter");
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => handle_convert_command(sub_matches, &config),
        Some(("fixes", sub_matches)) => handle_fixes_command(sub_matches.get_flag("json")),
        _ => {
            eprintln!("Unknown command");
            std::process::exit(1);
        }
    }
}

fn init_logging(config: &MdhtmlConfig, verbose: bool) {
    // --verbose forces debug, otherwise RUST_LOG wins over the configured level
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn handle_convert_command(matches: &ArgMatches, config: &MdhtmlConfig) {
    let input = matches
        .get_one::<String>("input")
        .map(String::as_str)
        .unwrap_or("-");
    let output = matches.get_one::<String>("output").map(String::as_str);
    let registry = registry_from_config(config);

    let from = match matches.get_one::<String>("from") {
        Some(from) => from.clone(),
        None if input == "-" => {
            eprintln!("Reading from stdin requires --from <format>");
            std::process::exit(1);
        }
        None => registry
            .detect_format_from_filename(input)
            .unwrap_or_else(|| {
                eprintln!("Cannot detect the format of '{input}'. Use --from <format>.");
                std::process::exit(1);
            }),
    };

    let to = matches
        .get_one::<String>("to")
        .cloned()
        .or_else(|| output.and_then(|path| registry.detect_format_from_filename(path)))
        .or_else(|| {
            registry
                .list_formats()
                .into_iter()
                .find(|format| *format != from)
        })
        .unwrap_or_else(|| {
            eprintln!("No target format for '{from}'. Use --to <format>.");
            std::process::exit(1);
        });

    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error reading '{input}': {e}");
        std::process::exit(1);
    });

    let result = registry.convert(&source, &from, &to).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None if result.ends_with('\n') => print!("{result}"),
        None => println!("{result}"),
    }
}

fn handle_fixes_command(json: bool) {
    let infos = fix_infos();

    if json {
        match serde_json::to_string_pretty(&infos) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Serialization error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Available fixes:\n");
    for info in infos {
        let marker = if info.default { " (default)" } else { "" };
        println!("  {}{marker}", info.name);
        println!("      {}", info.description);
    }
}

fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(input)
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MdhtmlConfig {
    let loader = Loader::new().with_optional_file("mdhtml.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Registry holding both converters, configured from `config`
fn registry_from_config(config: &MdhtmlConfig) -> ConverterRegistry {
    let markdown_options = MarkdownToHtmlOptions::try_from(&config.markdown_to_html)
        .unwrap_or_else(|err| {
            eprintln!("Invalid markdown_to_html.rules: {err}");
            std::process::exit(1);
        });
    let html_options = HtmlToMarkdownOptions::from(&config.html_to_markdown);

    let mut registry = ConverterRegistry::new();
    registry.register(HtmlToMarkdown::new(html_options));
    registry.register(MarkdownToHtml::new(markdown_options));
    registry
}

fn apply_config_overrides(config: &mut MdhtmlConfig, extra_params: &mut HashMap<String, String>) {
    let markdown = &mut config.markdown_to_html;
    if let Some(raw) = extra_params.remove("extension") {
        markdown.extension = parse_bool_arg("extension", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["hard-breaks", "hardbreaks"]) {
        markdown.hard_breaks = parse_bool_arg("hard-breaks", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["smart", "smart-punctuation"]) {
        markdown.smart_punctuation = parse_bool_arg("smart-punctuation", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["rules", "fixes"]) {
        markdown.rules = parse_rule_list(&raw);
    }

    let html = &mut config.html_to_markdown;
    if let Some(raw) = take_override(extra_params, &["escape", "escape-markdown"]) {
        html.escape_markdown = parse_bool_arg("escape", &raw);
    }
    if let Some(raw) = extra_params.remove("list-indent") {
        html.list_indent = match raw.parse::<usize>() {
            Ok(indent) if indent > 0 => indent,
            _ => {
                eprintln!("Invalid value '{raw}' for --extra-list-indent: expected a positive number");
                std::process::exit(1);
            }
        };
    }
    if let Some(raw) = take_override(extra_params, &["bullet", "bullet-marker"]) {
        html.bullet_marker = match raw.as_str() {
            "-" | "*" | "+" => raw.chars().next().unwrap_or('-'),
            other => {
                eprintln!("Invalid value '{other}' for --extra-bullet: expected -, * or +");
                std::process::exit(1);
            }
        };
    }
}

/// Comma separated fix names; "none" (or an empty value) disables every fix
fn parse_rule_list(raw: &str) -> Vec<String> {
    if raw.trim().eq_ignore_ascii_case("none") {
        return Vec::new();
    }
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
