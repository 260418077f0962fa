//! CLI binary for coverlens.
//!
//! A thin shim over the library crate: maps flags to `AnalysisConfig`,
//! runs the pipeline on one PDF, and prints the analysis.

use anyhow::{Context, Result};
use clap::Parser;
use coverlens::{analyze_pdf, format_analysis, AnalysisConfig, ResponseArchive};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Analyse a cover page (key from MOONDREAM_API_KEY)
  coverlens paper.pdf

  # Explicit key, formatted Markdown output
  coverlens paper.pdf --api-key md-... --formatted

  # Relocate the prompt and archive files
  coverlens paper.pdf --prompt-path /etc/coverlens/prompt.md \
                      --archive-path /var/lib/coverlens/responses.json

  # Point at a different OpenAI-compatible endpoint
  coverlens paper.pdf --base-url http://localhost:11434/v1 --model llava

  # List previously archived analyses (no API key needed)
  coverlens --history

ENVIRONMENT VARIABLES:
  MOONDREAM_API_KEY    API key for the vision endpoint
  RUST_LOG             Log filter (e.g. coverlens=debug)
"#;

/// Analyse PDF cover pages with a vision language model.
#[derive(Parser, Debug)]
#[command(
    name = "coverlens",
    version,
    about = "Analyse PDF cover pages with a vision language model",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// PDF file to analyse.
    #[arg(required_unless_present = "history")]
    input: Option<PathBuf>,

    /// API key for the vision endpoint.
    #[arg(long, env = "MOONDREAM_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Prompt template file. Built-in fallback used when absent.
    #[arg(long, default_value = coverlens::config::DEFAULT_PROMPT_PATH)]
    prompt_path: PathBuf,

    /// JSON archive file appended to after each analysis.
    #[arg(long, default_value = coverlens::config::DEFAULT_ARCHIVE_PATH)]
    archive_path: PathBuf,

    /// Base URL of the chat-completions endpoint.
    #[arg(long, default_value = coverlens::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Model identifier sent with the request.
    #[arg(long, default_value = coverlens::config::DEFAULT_MODEL)]
    model: String,

    /// Reshape colon-separated sections into Markdown headers.
    #[arg(long)]
    formatted: bool,

    /// Print archived analyses and exit.
    #[arg(long)]
    history: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = AnalysisConfig::builder()
        .prompt_path(&cli.prompt_path)
        .archive_path(&cli.archive_path)
        .base_url(&cli.base_url)
        .model(&cli.model)
        .build()?;

    if cli.history {
        return print_history(&config);
    }

    let input = cli.input.context("no PDF input given")?;
    let api_key = cli
        .api_key
        .context("no API key: pass --api-key or set MOONDREAM_API_KEY")?;

    let pdf_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    let bytes = std::fs::read(&input)
        .with_context(|| format!("failed to read '{}'", input.display()))?;

    let analysis = analyze_pdf(&api_key, &pdf_name, &bytes, &config).await?;

    if cli.formatted {
        println!("{}", format_analysis(&analysis));
    } else {
        println!("{analysis}");
    }

    Ok(())
}

fn print_history(config: &AnalysisConfig) -> Result<()> {
    let entries = ResponseArchive::new(&config.archive_path).entries()?;
    if entries.is_empty() {
        eprintln!("archive is empty: {}", config.archive_path.display());
        return Ok(());
    }
    for entry in entries {
        println!("── {} ({})", entry.pdf_name, entry.timestamp);
        println!("{}\n", entry.analysis_result);
    }
    Ok(())
}
