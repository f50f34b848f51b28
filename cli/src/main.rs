//! headtree CLI - numbered heading outlines from Word documents
//!
//! Prints the "1 / 1.1 / 1.1.1" heading hierarchy of a DOCX file as JSON,
//! an indented text outline, or a Markdown list.

use clap::{ArgAction, Parser, ValueEnum};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use headtree::render::{JsonFormat, RenderOptions};
use headtree::ExtractOptions;

/// Document read when no input path is given.
const DEFAULT_INPUT: &str = "example.docx";

/// Extract the numbered heading outline of a Word document
#[derive(Parser)]
#[command(
    name = "headtree",
    author = "iyulab",
    version,
    about = "Extract numbered heading outlines from Word documents",
    long_about = "headtree - extract the \"1 / 1.1 / 1.1.1\" heading hierarchy of a DOCX file.\n\n\
                  Paragraphs whose whole text is a dotted number, whitespace and a title\n\
                  become headings; everything else is ignored."
)]
struct Cli {
    /// Input file path
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Output compact JSON (no indentation)
    #[arg(long)]
    compact: bool,

    /// Spaces per level for text and Markdown output
    #[arg(long, default_value = "2")]
    indent: usize,

    /// Deepest heading level to collect (1-3)
    #[arg(long, default_value = "3", value_parser = clap::value_parser!(u8).range(1..=3))]
    max_depth: u8,

    /// Keep the current level-2 heading when a new level-1 heading starts
    #[arg(long)]
    carry_over_subsection: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Output format
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Nested JSON object
    Json,
    /// Indented plain text outline
    Text,
    /// Nested Markdown list
    Markdown,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let pb = create_spinner("Parsing document...");

    let options = ExtractOptions::new()
        .with_max_depth(cli.max_depth)
        .with_carry_over_subsection(cli.carry_over_subsection);
    let result = headtree::extract_file_with_options(&cli.input, &options);
    pb.finish_and_clear();
    let tree = result?;

    tracing::info!(
        input = %cli.input.display(),
        headings = tree.heading_count(),
        "extracted headings"
    );

    let render_options = RenderOptions::new().with_indent(cli.indent);
    let rendered = match cli.format {
        OutputFormat::Json => {
            let format = if cli.compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            headtree::render::to_json(&tree, format)?
        }
        OutputFormat::Text => headtree::render::to_text(&tree, &render_options)?,
        OutputFormat::Markdown => headtree::render::to_markdown(&tree, &render_options)?,
    };

    write_output(cli.output.as_ref(), &rendered)?;

    if let Some(path) = cli.output {
        eprintln!(
            "{} Wrote {} headings to {}",
            "✓".green().bold(),
            tree.heading_count(),
            path.display()
        );
    }

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}
