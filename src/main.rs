//! md2pptx - Convert markdown slides to PowerPoint

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use md2pptx::{ConvertOptions, markdown_file_to_pptx};

#[derive(Parser)]
#[command(name = "md2pptx")]
#[command(version, about = "Convert markdown slides to PowerPoint", long_about = None)]
#[command(after_help = "EXAMPLES:
    md2pptx talk.md talk.pptx                     16:9 deck
    md2pptx talk.md talk.pptx --width 10 --height 7.5   4:3 deck
    RUST_LOG=debug md2pptx talk.md talk.pptx      Show per-slide diagnostics")]
struct Cli {
    /// Input markdown file; slides are separated by `---` lines
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output .pptx file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Slide width in inches [default: 16.0]
    #[arg(long)]
    width: Option<f64>,

    /// Slide height in inches [default: 9.0]
    #[arg(long)]
    height: Option<f64>,

    /// TOML file with conversion options
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => {
            println!("Presentation saved as {}", cli.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> md2pptx::Result<()> {
    let mut options = match &cli.config {
        Some(path) => ConvertOptions::load(path)?,
        None => ConvertOptions::default(),
    };
    if let Some(width) = cli.width {
        options.slide_width_in = width;
    }
    if let Some(height) = cli.height {
        options.slide_height_in = height;
    }

    markdown_file_to_pptx(&cli.input, &cli.output, &options)
}
