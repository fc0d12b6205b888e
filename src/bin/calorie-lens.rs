//! CLI for calorie-lens: analyze a food photo and print the calorie report.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use calorie_lens::{clipboard, encode, LensClient, Rendered};

/// Estimate the calories in a food photo via the Gemini API.
///
/// Requires `GEMINI_API_KEY` (or `GOOGLE_API_KEY`) in the environment.
#[derive(Parser, Debug)]
#[command(name = "calorie-lens", version, about)]
struct Cli {
    /// Path to the food photo.
    image: PathBuf,

    /// Model to use (default: gemini-1.5-flash).
    #[arg(long)]
    model: Option<String>,

    /// Send the file bytes as-is instead of re-encoding to JPEG.
    #[arg(long)]
    raw_upload: bool,

    /// Copy the rendered result to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "calorie_lens=debug"
    } else {
        "calorie_lens=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("calorie-lens: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = LensClient::builder();
    if let Some(model) = &cli.model {
        builder = builder.model(model);
    }
    let client = builder.build()?;

    let photo = if cli.raw_upload {
        encode::read_data_url(&cli.image).await?
    } else {
        encode::reencode_jpeg(&cli.image)?
    };

    let stdout = std::io::stdout();

    // Placeholder while the request is in flight, then the final report
    // with the same thumbnail.
    let mut out = stdout.lock();
    Rendered::analyzing(Some(photo.clone())).write_to(&mut out)?;
    out.flush()?;
    drop(out);

    let report = client.analyze(&photo).await;
    let rendered = Rendered::from_report(&report, Some(photo));

    let mut out = stdout.lock();
    writeln!(out)?;
    rendered.write_to(&mut out)?;

    if cli.copy {
        clipboard::copy(&rendered.clipboard_text())?;
        writeln!(out, "복사됨!")?;
    }

    // Sentinel results still exit 0: failure renders uniformly, it is not
    // a local error.
    Ok(())
}
