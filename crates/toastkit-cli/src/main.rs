use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use toastkit::{Notification, Payload, WriterConfig};
use tracing::{debug, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

#[derive(Debug, Parser)]
#[command(
    name = "toastkit",
    version,
    about = "Render badge, tile and toast notification payloads as XML"
)]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Input format (json, toml)
    #[arg(short, long, value_enum)]
    from: Option<FormatArg>,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Indent nested elements, two spaces unless N is given
    #[arg(short, long, value_name = "N", num_args = 0..=1, default_missing_value = "2")]
    pretty: Option<usize>,
    /// Prepend an XML declaration
    #[arg(short, long)]
    declaration: bool,
    /// Log verbosity when RUST_LOG is unset (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Json,
    Toml,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let input_data = read_input(&args.input)?;
    let from = match args.from.or_else(|| infer_format(&args.input)) {
        Some(format) => format,
        None if args.input.is_none() => FormatArg::Json,
        None => {
            bail!("could not infer input format; pass --from or use a .json or .toml file");
        }
    };
    debug!(?from, bytes = input_data.len(), "read input");

    let notification = parse_notification(&input_data, from)?;
    let config = WriterConfig {
        declaration: args.declaration,
        indent: args.pretty,
    };
    let mut xml = notification
        .to_xml_with_config(&config)
        .with_context(|| format!("failed to render {} payload", notification.kind()))?;
    xml.push('\n');

    info!(kind = %notification.kind(), bytes = xml.len(), "rendered payload");
    write_output(&args.output, xml.as_bytes())?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

fn parse_notification(data: &str, from: FormatArg) -> Result<Notification> {
    match from {
        FormatArg::Json => serde_json::from_str(data).context("invalid JSON notification"),
        FormatArg::Toml => toml::from_str(data).context("invalid TOML notification"),
    }
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}

fn infer_format(path: &Option<PathBuf>) -> Option<FormatArg> {
    let path = path.as_ref()?;
    let ext = path.extension().and_then(|s| s.to_str())?;
    match ext {
        "json" => Some(FormatArg::Json),
        "toml" => Some(FormatArg::Toml),
        _ => None,
    }
}
