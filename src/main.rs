use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rgb_mosaic::{MosaicBuilder, Neighborhood};

/// Log a progress line once per this many placements.
const REPORT_INTERVAL: usize = 1 << 20;

#[derive(Parser)]
#[command(name = "allrgb")]
#[command(about = "Generates a 4096x4096 mosaic containing every 24-bit RGB color exactly once")]
struct Cli {
    /// Seed controlling the color shuffle and neighbor-slot selection order
    seed: u64,

    /// Output PPM file path
    output: PathBuf,

    /// Pixel adjacency used for growth
    #[arg(long, value_enum, default_value = "adjacent")]
    neighborhood: NeighborhoodArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum NeighborhoodArg {
    /// 8-connected unit offsets
    Adjacent,
    /// Knight's-move offsets (speckled growth texture)
    Knight,
}

impl From<NeighborhoodArg> for Neighborhood {
    fn from(arg: NeighborhoodArg) -> Self {
        match arg {
            NeighborhoodArg::Adjacent => Neighborhood::Adjacent8,
            NeighborhoodArg::Knight => Neighborhood::KnightsMove,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "allrgb=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let mut engine = MosaicBuilder::new()
        .seed(cli.seed)
        .neighborhood(cli.neighborhood.into())
        .build();
    tracing::info!(
        seed = cli.seed,
        total = engine.total(),
        "seeded initial strip, growing mosaic"
    );

    let mut since_report = 0;
    while engine.place_next()?.is_some() {
        since_report += 1;
        if since_report == REPORT_INTERVAL {
            since_report = 0;
            tracing::info!(placed = engine.placed(), total = engine.total(), "growing");
        }
    }

    let image = engine.into_image()?;
    image
        .write_ppm_file(&cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    tracing::info!(path = %cli.output.display(), "mosaic written");
    Ok(())
}
