use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the format names registered by procdoc-export
// We need to duplicate this here since build scripts can't access the library
const AVAILABLE_FORMATS: &[&str] = &["doc", "docx", "html", "text"];

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Markdown (.md) or chapters (.json) file")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("procdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Export Markdown procurement documents to Word")
        .arg_required_else_help(true)
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
                .arg(input_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_FORMATS,
                        )),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .help("Output directory")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("project-info")
                        .long("project-info")
                        .help("Project info JSON file")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("outline")
                .about("Print the numbered heading outline")
                .arg(input_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the outline as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("formats").about("List available output formats"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "procdoc", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "procdoc", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "procdoc", &outdir)?;

    Ok(())
}
