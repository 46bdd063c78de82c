//! tagtree CLI
//!
//! Usage:
//!   tagtree [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>  Render configuration (TOML format)
//!   -o, --output <FILE>  Write SVG here instead of stdout
//!   --indent <N>         Spaces per nesting level
//!   --standalone         Prefix output with an XML declaration
//!   -d, --debug          Log pipeline progress to stderr
//!   -h, --help           Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use log::{debug, LevelFilter};

use tagtree::{render_scene, RenderConfig};

#[derive(Parser)]
#[command(name = "tagtree")]
#[command(about = "Render TOML scene descriptions to indented SVG")]
struct Cli {
    /// Scene file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Render configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Spaces per nesting level, overriding the config file
    #[arg(long)]
    indent: Option<usize>,

    /// Prefix output with an XML declaration
    #[arg(long)]
    standalone: bool,

    /// Debug mode: log pipeline progress to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    // Load config
    let mut config = match &cli.config {
        Some(path) => match RenderConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => RenderConfig::default(),
    };
    if let Some(indent) = cli.indent {
        config = config.with_indent(indent);
    }
    if cli.standalone {
        config = config.with_standalone(true);
    }
    debug!("using {:?}", config);

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let svg = match render_scene(&source, &config) {
        Ok(svg) => svg,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, format!("{}\n", svg)) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            debug!("wrote {} bytes to {}", svg.len() + 1, path.display());
        }
        None => println!("{}", svg),
    }
}
