//! Golit CLI
//!
//! Reads a JSON document from a file or stdin and prints it as a Go literal.

use std::io::Read;
use std::sync::Once;

use golit::json::from_json;
use golit::{LiteralizeConfig, Literalizer, RenderConfig};

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

fn print_usage() {
    eprintln!("Usage: golit [options] [file.json]");
    eprintln!();
    eprintln!("Reads JSON from the file, or stdin when no file is given.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --max-depth=<n>     Maximum value nesting (default: 512)");
    eprintln!("  --width=<n>         Line width before breaking (default: 100)");
    eprintln!("  --prefix=<name>     Binding name prefix (default: x)");
    eprintln!("  -h, --help          Show this message");
}

/// Parsed command line.
struct Options {
    config: LiteralizeConfig,
    path: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut config = LiteralizeConfig::default();
    let mut path = None;

    for arg in args {
        if let Some(n) = arg.strip_prefix("--max-depth=") {
            config.max_depth = parse_number(n, "--max-depth")?;
        } else if let Some(n) = arg.strip_prefix("--width=") {
            config.render = RenderConfig::with_max_width(parse_number(n, "--width")?);
        } else if let Some(prefix) = arg.strip_prefix("--prefix=") {
            if !is_identifier(prefix) {
                return Err(format!("invalid --prefix '{prefix}': not a Go identifier"));
            }
            config.binding_prefix = prefix.to_string();
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    Ok(Options { config, path })
}

fn parse_number(text: &str, flag: &str) -> Result<usize, String> {
    text.parse()
        .map_err(|_| format!("invalid {flag} '{text}': expected a non-negative integer"))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric())
}

fn read_input(path: Option<&str>) -> Result<String, String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).map_err(|e| format!("cannot read '{path}': {e}"))
        }
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| format!("cannot read stdin: {e}"))?;
            Ok(input)
        }
    }
}

fn run(options: &Options) -> Result<String, String> {
    let input = read_input(options.path.as_deref())?;
    let json: serde_json::Value =
        serde_json::from_str(&input).map_err(|e| format!("invalid JSON: {e}"))?;
    let value = from_json(&json);
    Literalizer::new(options.config.clone())
        .literalize_to_string(&value)
        .map_err(|e| e.to_string())
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    match run(&options) {
        Ok(text) => println!("{text}"),
        Err(message) => {
            eprintln!("error: {message}");
            std::process::exit(1);
        }
    }
}
