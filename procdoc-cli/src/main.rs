// Command-line interface for procdoc
//
// This binary exports procurement documents written in Markdown to Word, and renders HTML or
// plain-text previews of the same source. It is a thin shell over the procdoc-export library:
// all conversion logic lives there, this crate only reads files, layers configuration and
// reports errors.
//
// Exporting:
//
// The input is either a Markdown file or a JSON file holding the wizard's chapters. The target
// format defaults to the one detected from the -o extension, then to the configured format.
// Usage:
//  procdoc <input> [--to <format>] [-o <file> | --out-dir <dir>]          - Export (default)
//  procdoc export <input> [--to <format>] [-o <file> | --out-dir <dir>]   - Same as above (explicit)
//  procdoc outline <input> [--json]                                        - Numbered heading outline
//  procdoc formats                                                         - List output formats
//
// Extra Parameters:
//
// Format-specific parameters and project fields can be passed using --extra-<name> <value>.
// The CLI layer strips the "extra-" prefix; project fields and config knobs are consumed here,
// everything else is handed to the format.
// Example:
//  procdoc tender.md --out-dir out --extra-project-name "Street Lighting" --extra-toc false

use clap::{Arg, ArgAction, Command, ValueHint};
use procdoc_config::{Loader, ProcdocConfig};
use procdoc_export::common::outline::Outline;
use procdoc_export::formats::markdown::MarkdownOptions;
use procdoc_export::formats::DocxFormat;
use procdoc_export::publish::{publish_with, PublishArtifact, PublishSpec};
use procdoc_export::{ExportRequest, FormatRegistry, ProjectInfo, SourceDocument};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["export", "outline", "formats", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
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
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

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
    Command::new("procdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Export Markdown procurement documents to Word")
        .long_about(
            "procdoc turns Markdown chapters into a Word document with a cover page,\n\
            a hyperlinked table of contents and the formatted body.\n\n\
            Commands:\n  \
            - export:  Render to docx, doc, html or text (default command)\n  \
            - outline: Show the numbered heading outline\n  \
            - formats: List output formats\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass project fields and format options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            procdoc tender.md --out-dir out                       # Word file named after the project\n  \
            procdoc chapters.json --project-info project.json -o tender.docx\n  \
            procdoc tender.md --to text                           # Plain text to stdout\n  \
            procdoc outline tender.md                             # Heading anchors"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a procdoc.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline details to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("export")
                .about("Export a document (default command)")
                .long_about(
                    "Render a Markdown file or a chapters JSON file.\n\n\
                    Supported formats:\n  \
                    - docx: Word document with cover page and table of contents\n  \
                    - doc:  HTML page Word opens as a document (content only)\n  \
                    - html: HTML preview (--extra-standalone for a full page)\n  \
                    - text: Plain text\n\n\
                    Text formats go to stdout unless -o or --out-dir is given.\n\
                    docx always needs a destination.\n\n\
                    Project fields:\n  \
                    --extra-project-name, --extra-procurement-unit,\n  \
                    --extra-service-period, --extra-service-location\n\n\
                    Options:\n  \
                    --extra-cover false   Skip the cover page\n  \
                    --extra-toc false     Skip the table of contents\n  \
                    --extra-date DATE     Generation date (YYYY-MM-DD), defaults to today"
                )
                .arg(
                    Arg::new("input")
                        .help("Markdown (.md) or chapters (.json) file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (detected from -o, else the configured default)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
                        .value_hint(ValueHint::FilePath)
                        .conflicts_with("out-dir"),
                )
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .value_name("DIR")
                        .help("Write <projectName>_<date>.<ext> into DIR")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("project-info")
                        .long("project-info")
                        .value_name("FILE")
                        .help("JSON file with projectName, procurementUnit, servicePeriod, serviceLocation")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("outline")
                .about("Print the numbered heading outline")
                .long_about(
                    "Lists every heading with the bookmark the table of contents links to.\n\n\
                    Columns: bookmark, depth, text (indented by depth).\n\n\
                    Examples:\n  \
                    procdoc outline tender.md\n  \
                    procdoc outline chapters.json --json"
                )
                .arg(
                    Arg::new("input")
                        .help("Markdown (.md) or chapters (.json) file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the outline as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // If the first argument is not a subcommand, inject "export"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "export".to_string()];
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

    init_tracing(matches.get_flag("verbose"));

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("export", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let target = ExportTarget {
                to: sub_matches.get_one::<String>("to").map(|s| s.as_str()),
                output: sub_matches.get_one::<String>("output").map(|s| s.as_str()),
                out_dir: sub_matches.get_one::<String>("out-dir").map(|s| s.as_str()),
            };
            let project_info = sub_matches
                .get_one::<String>("project-info")
                .map(|s| s.as_str());
            handle_export_command(input, project_info, target, extra_params, &config);
        }
        Some(("outline", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_outline_command(input, sub_matches.get_flag("json"), &config);
        }
        Some(("formats", _)) => handle_formats_command(&config),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Install the stderr log subscriber. `PROCDOC_LOG` wins over `-v`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("PROCDOC_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Where the export goes.
struct ExportTarget<'a> {
    to: Option<&'a str>,
    output: Option<&'a str>,
    out_dir: Option<&'a str>,
}

/// Handle the export command
fn handle_export_command(
    input: &str,
    project_info_path: Option<&str>,
    target: ExportTarget<'_>,
    mut extra_params: HashMap<String, String>,
    config: &ProcdocConfig,
) {
    let registry = build_registry(config);

    let format = match target.to {
        Some(to) => to.to_string(),
        None => target
            .output
            .and_then(|path| registry.for_path(path))
            .map(|format| format.name().to_string())
            .unwrap_or_else(|| config.export.format.clone()),
    };
    if let Err(e) = registry.get(&format) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let mut info = match project_info_path {
        Some(path) => {
            let json = read_file(path);
            ProjectInfo::from_json(&json).unwrap_or_else(|e| {
                eprintln!("Error reading project info '{path}': {e}");
                std::process::exit(1);
            })
        }
        None => ProjectInfo::default(),
    };
    apply_project_overrides(&mut info, &mut extra_params);

    let mut request = read_request(input, config).with_project_info(info);
    if let Some(raw) = extra_params.remove("date") {
        request = request.with_generated_on(parse_date_arg(&raw));
    }

    let mut spec = PublishSpec::new(&request, &format)
        .with_default_name(config.export.default_project_name.clone())
        .with_options(extra_params);
    if let Some(path) = target.output {
        spec = spec.with_output_path(path);
    } else if let Some(dir) = target.out_dir {
        spec = spec.with_output_dir(dir);
    }

    let result = publish_with(&registry, spec).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    match result.artifact {
        PublishArtifact::InMemory(text) => print!("{text}"),
        PublishArtifact::File(path) => println!("{}", path.display()),
    }
}

/// Handle the outline command
fn handle_outline_command(input: &str, json: bool, config: &ProcdocConfig) {
    let request = read_request(input, config);
    let blocks = request.blocks();
    let outline = Outline::from_blocks(&blocks);

    if json {
        let entries: Vec<serde_json::Value> = outline
            .entries()
            .iter()
            .map(|entry| {
                serde_json::json!({
                    "anchor": entry.anchor.bookmark_name(),
                    "depth": entry.depth,
                    "text": entry.text,
                })
            })
            .collect();
        match serde_json::to_string_pretty(&entries) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    for entry in outline.entries() {
        println!(
            "{}\t{}\t{}{}",
            entry.anchor.bookmark_name(),
            entry.depth,
            "  ".repeat(entry.depth.saturating_sub(1)),
            entry.text
        );
    }
}

/// Handle the formats command
fn handle_formats_command(config: &ProcdocConfig) {
    let registry = build_registry(config);
    for format in registry.formats() {
        println!("  {:<6} {}", format.name(), format.description());
    }
}

/// Default registry with the Word format styled by the configuration.
fn build_registry(config: &ProcdocConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::with_defaults();
    registry.register(DocxFormat::new(config.docx_style(), config.front_matter()));
    registry
}

fn read_file(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

/// Build the request from a Markdown file, or from chapters when the input is JSON.
fn read_request(input: &str, config: &ProcdocConfig) -> ExportRequest {
    let source = read_file(input);
    let is_json = Path::new(input)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let request = if is_json {
        let document = SourceDocument::from_json(&source).unwrap_or_else(|e| {
            eprintln!("Error reading chapters '{input}': {e}");
            std::process::exit(1);
        });
        debug!(chapters = document.chapters.len(), "loaded chapters");
        ExportRequest::from_source(&document)
    } else {
        ExportRequest::new(source)
    };
    request.with_markdown_options(MarkdownOptions::from(&config.markdown))
}

fn load_cli_config(explicit_path: Option<&str>) -> ProcdocConfig {
    let loader = Loader::new().with_optional_file("procdoc.toml");
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

fn apply_config_overrides(config: &mut ProcdocConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("gfm") {
        config.markdown.gfm = parse_bool_arg("gfm", &raw);
    }
    if let Some(raw) = extra_params.remove("breaks") {
        config.markdown.breaks = parse_bool_arg("breaks", &raw);
    }
    if let Some(raw) = extra_params.remove("cover") {
        config.export.include_cover = parse_bool_arg("cover", &raw);
    }
    if let Some(raw) = extra_params.remove("toc") {
        config.export.include_toc = parse_bool_arg("toc", &raw);
    }
    if let Some(name) = take_override(extra_params, &["default-project-name", "default-name"]) {
        config.export.default_project_name = name;
    }
}

fn apply_project_overrides(info: &mut ProjectInfo, extra_params: &mut HashMap<String, String>) {
    if let Some(value) = take_override(extra_params, &["project-name", "name"]) {
        info.project_name = Some(value);
    }
    if let Some(value) = take_override(extra_params, &["procurement-unit", "unit"]) {
        info.procurement_unit = Some(value);
    }
    if let Some(value) = take_override(extra_params, &["service-period", "period"]) {
        info.service_period = Some(value);
    }
    if let Some(value) = take_override(extra_params, &["service-location", "location"]) {
        info.service_location = Some(value);
    }
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

fn parse_date_arg(raw: &str) -> chrono::NaiveDate {
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap_or_else(|_| {
        eprintln!("Invalid date '{raw}' for --extra-date, expected YYYY-MM-DD");
        std::process::exit(1);
    })
}
