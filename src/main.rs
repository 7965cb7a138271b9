//! The `dollarmath` binary.

use dollarmath::{format_html_with_plugins, parse_document, Arena, Options, Plugins};

use std::boxed::Box;
use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

const EXIT_CONFIG_READ: i32 = 2;
const EXIT_CONFIG_PARSE: i32 = 3;

#[derive(Debug, Parser)]
#[command(about, author, version, args_override_self = true)]
#[command(after_help = "\
By default, dollarmath will attempt to read command-line options from a config file specified \
by --config-file. This behaviour can be disabled by passing --config-file none. It is not an \
error if the default config file doesn't exist.")]
struct Cli {
    /// Markdown file(s) to parse; or standard input if none passed
    #[arg(value_name = "FILE")]
    files: Option<Vec<PathBuf>>,

    /// Path to config file containing command-line arguments, or 'none'
    #[arg(short, long, value_name = "PATH", default_value = get_default_config_path())]
    config_file: String,

    /// Treat newlines as hard line breaks
    #[arg(long)]
    hardbreaks: bool,

    /// Specify extension name(s) to use
    ///
    /// Multiple extensions can be delimited with ",", e.g. --extension math-dollars,...
    #[arg(short, long = "extension", value_name = "EXTENSION", value_delimiter = ',')]
    extensions: Vec<Extension>,

    /// Typeset math with KaTeX instead of writing its source
    #[cfg(feature = "katex")]
    #[arg(long)]
    katex: bool,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Extension {
    MathDollars,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut cli = Cli::parse();

    if cli.config_file != "none" {
        let config_file_contents = match fs::read_to_string(&cli.config_file) {
            Ok(contents) => contents,
            Err(err) => {
                if cli.config_file == get_default_config_path() {
                    String::new()
                } else {
                    eprintln!("failed to read config file {}: {}", cli.config_file, err);
                    process::exit(EXIT_CONFIG_READ);
                }
            }
        };

        let mut args = match shell_words::split(&config_file_contents) {
            Ok(args) => args,
            Err(err) => {
                eprintln!("failed to parse config file {}: {}", cli.config_file, err);
                process::exit(EXIT_CONFIG_PARSE);
            }
        };

        // Config file arguments go first so the command line can extend them.
        let mut env_args = env::args();
        if let Some(program) = env_args.next() {
            args.insert(0, program);
        }
        args.extend(env_args);

        cli = Cli::parse_from(args);
    }

    let mut options = Options::default();
    options.render.hardbreaks = cli.hardbreaks;
    for extension in &cli.extensions {
        match extension {
            Extension::MathDollars => options.extension.math_dollars = true,
        }
    }

    let mut s = String::with_capacity(2048);
    match cli.files {
        None => {
            io::stdin().read_to_string(&mut s)?;
        }
        Some(ref paths) => {
            for path in paths {
                s.push_str(&fs::read_to_string(path)?);
            }
        }
    }

    #[cfg(feature = "katex")]
    let katex_adapter = dollarmath::plugins::katex::KatexAdapter::new();

    #[allow(unused_mut)]
    let mut plugins = Plugins::default();
    #[cfg(feature = "katex")]
    {
        if cli.katex {
            plugins.render.math_renderer = Some(&katex_adapter);
        }
    }

    let arena = Arena::new();
    let root = parse_document(&arena, &s, &options);

    let writer: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(fs::File::create(path)?),
        None => Box::new(io::stdout()),
    };
    let mut bw = BufWriter::new(writer);

    fmt2io::write(&mut bw, |w| {
        format_html_with_plugins(root, &options, w, &plugins)
    })?;
    bw.flush()?;

    Ok(())
}

#[cfg(all(not(windows), not(target_arch = "wasm32")))]
fn get_default_config_path() -> String {
    if let Ok(xdg_dirs) = xdg::BaseDirectories::with_prefix("dollarmath") {
        if let Ok(path) = xdg_dirs.place_config_file("config") {
            if let Some(path_str) = path.to_str() {
                return path_str.into();
            }
        }
    }

    "none".into()
}

#[cfg(any(windows, target_arch = "wasm32"))]
fn get_default_config_path() -> String {
    "none".into()
}
