//! vfmt CLI - format vision-model answers into a renderable document tree

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::fmt::Write as _;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use visionfmt::{
    chat::{Message, VisionResponse},
    format_response_with_report, translate_math, Block, Document, FormatOptions, InlineSpan,
    Result,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "vfmt")]
#[command(version)]
#[command(about = "Format vision-model answers into a renderable document tree", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// TOML file with formatting options
    #[arg(short, long)]
    config: Option<String>,

    /// Keep math as raw LaTeX instead of translating it
    #[arg(long)]
    raw_math: bool,

    /// Write a loss report JSON to this path
    #[arg(long)]
    loss_log: Option<String>,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Translate a single LaTeX math expression
    Translate {
        /// Expression, e.g. '\frac{1}{2}'
        expr: String,
    },

    /// Read a vision API JSON response and print the resulting chat message
    Vision {
        /// Input file path (reads from stdin if not provided)
        input: Option<String>,
    },
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON document
    Json,
    /// Indented outline of blocks and spans
    Outline,
}

#[cfg(feature = "cli")]
fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> Result<()> {
    let mut options = match cli.config {
        Some(ref path) => FormatOptions::from_toml_str(&fs::read_to_string(path)?)?,
        None => FormatOptions::default(),
    };
    if cli.raw_math {
        options.translate_math = false;
    }

    match cli.command {
        Some(Commands::Translate { expr }) => {
            println!("{}", translate_math(&expr));
            Ok(())
        }
        Some(Commands::Vision { input }) => {
            let body = read_input(input.as_deref())?;
            let answer = VisionResponse::from_json(&body).and_then(VisionResponse::into_answer);
            let message = Message::from_vision_result(answer, &options);
            write_output(cli.output.as_deref(), &serde_json::to_string_pretty(&message)?)
        }
        None => {
            let input = read_input(cli.input_file.as_deref())?;
            let formatted = format_response_with_report(&input, &options);
            tracing::debug!(
                blocks = formatted.document.len(),
                losses = formatted.report.len(),
                "formatted response"
            );

            if let Some(ref path) = cli.loss_log {
                fs::write(path, serde_json::to_string_pretty(&formatted.report)?)?;
            }

            let rendered = match cli.format {
                OutputFormat::Json => serde_json::to_string_pretty(&formatted.document)?,
                OutputFormat::Outline => outline(&formatted.document),
            };
            write_output(cli.output.as_deref(), &rendered)
        }
    }
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, content)?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", content)?;
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn outline(document: &Document) -> String {
    let mut out = String::new();
    for block in document {
        outline_block(block, 0, &mut out);
    }
    out
}

#[cfg(feature = "cli")]
fn outline_block(block: &Block, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match block {
        Block::Header { level, title, body } => {
            let _ = writeln!(out, "{}header[{}] {}", indent, level, title);
            for child in body {
                outline_block(child, depth + 1, out);
            }
        }
        Block::MathBlock { rendered } => {
            let _ = writeln!(out, "{}math {}", indent, rendered);
        }
        Block::BoxedAnswer { rendered } => {
            let _ = writeln!(out, "{}boxed {}", indent, rendered);
        }
        Block::Paragraph { spans } => {
            let _ = writeln!(out, "{}paragraph", indent);
            for span in spans {
                let kind = match span {
                    InlineSpan::Text(_) => "text",
                    InlineSpan::Bold(_) => "bold",
                    InlineSpan::Italic(_) => "italic",
                    InlineSpan::Code(_) => "code",
                    InlineSpan::InlineMath(_) => "math",
                };
                let _ = writeln!(out, "{}  {} {:?}", indent, kind, span.content());
            }
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
}
