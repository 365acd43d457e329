//! CLI entry point for mddir

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use mddir::{ConfigLayer, Error, OptionsBuilder, OutputConfig, generate_tree, resolve_root};
use termcolor::StandardStream;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "mddir")]
#[command(about = "Generate a directory tree for project documentation")]
#[command(version)]
struct Args {
    /// Root directory (defaults to the current directory)
    #[arg(short = 'r', long = "root")]
    root: Option<PathBuf>,

    /// Options object as JSON5, e.g. '{ignore:["target"],buildOptions:{maxDepth:2}}'
    #[arg(short = 'o', long = "options", value_name = "JSON")]
    options: Option<String>,

    /// Config file to read (default: .ignore.json, .ignore.yaml or .ignore.yml)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Descend at most N levels below the root's entries
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Show file and directory sizes
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Show ignored entries as placeholders
    #[arg(short = 'k', long = "keep-ignored")]
    keep_ignored: bool,

    /// Output format: console or json
    #[arg(short = 'f', long = "format", conflicts_with = "json")]
    format: Option<String>,

    /// Output as a JSON document (same as --format json)
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Fold `--options` and the individual flags into one override layer.
/// Flags win over keys of the same name in `--options`.
fn override_layer(args: &Args) -> Result<ConfigLayer, Error> {
    let mut layer = match &args.options {
        Some(json) => ConfigLayer::from_json_str(json)?,
        None => ConfigLayer::default(),
    };

    if let Some(config) = &args.config {
        layer.config_file_path = Some(config.clone());
    }
    if let Some(level) = args.level {
        layer.build_options_mut().max_depth = Some(level);
    }
    if args.size {
        layer.build_options_mut().show_file_size = Some(true);
    }
    if args.keep_ignored {
        layer.build_options_mut().keep_ignored_name = Some(true);
    }
    if args.json {
        layer.build_options_mut().output_format = Some("json".to_string());
    } else if let Some(format) = &args.format {
        layer.build_options_mut().output_format = Some(format.clone());
    }
    Ok(layer)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();

    let root = match resolve_root(args.root.as_deref()) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("mddir: cannot determine current directory: {}", e);
            process::exit(1);
        }
    };
    if !root.exists() {
        eprintln!("mddir: {}", Error::InvalidRoot(root));
        process::exit(1);
    }

    let overrides = override_layer(&args).unwrap_or_else(|e| {
        eprintln!("mddir: {}", e);
        process::exit(1);
    });

    let options = OptionsBuilder::new(&root)
        .overrides(overrides)
        .build()
        .unwrap_or_else(|e| {
            eprintln!("mddir: {}", e);
            process::exit(1);
        });

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
    };
    let mut stdout = StandardStream::stdout(output_config.color_choice());

    // Failures past this point are reported but do not change the exit code.
    if let Err(e) = generate_tree(&root, &options, &mut stdout) {
        log::debug!("generation failed: {:?}", e);
        eprintln!("mddir: an error occurred: {}", e);
    }
}
