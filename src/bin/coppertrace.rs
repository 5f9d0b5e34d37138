use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use coppertrace::{BoardOptions, WireStyle, render_to_file};
use tracing_subscriber::EnvFilter;

/// Generate technical cover art for a blog.
#[derive(Parser, Debug)]
#[command(name = "coppertrace", version)]
struct Cli {
    /// Output image path; the extension picks the format (e.g. cover.png).
    output: PathBuf,

    /// Wire routing style.
    #[arg(long, value_enum, default_value_t = StyleChoice::Grid)]
    style: StyleChoice,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Overlay a nearest-neighbor network between the components.
    #[arg(long)]
    network: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleChoice {
    Grid,
    Random,
    Radial,
    Flow,
}

impl StyleChoice {
    fn to_style(self) -> WireStyle {
        match self {
            StyleChoice::Grid => WireStyle::Grid,
            StyleChoice::Random => WireStyle::Random,
            StyleChoice::Radial => WireStyle::Radial,
            StyleChoice::Flow => WireStyle::Flow,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("coppertrace=info")),
        )
        .init();

    let cli = Cli::parse();

    if let Some(parent) = cli.output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let options = BoardOptions {
        style: cli.style.to_style(),
        seed: cli.seed,
        network: cli.network,
    };
    render_to_file(&cli.output, &options)
        .with_context(|| format!("render '{}'", cli.output.display()))?;

    println!("Art saved to {}", cli.output.display());
    Ok(())
}
