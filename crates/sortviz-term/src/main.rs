//! Terminal front-end for the sortviz animation engine.
//!
//! Interactive mode animates the five variants as colored bar charts;
//! `--trace <variant>` prints the recorded step table for one offline
//! run instead.

mod app;
mod bars;

use anyhow::{bail, Context, Result};
use clap::Parser;

use sortviz::prelude::*;

use crate::app::App;
use crate::bars::BarPanel;

/// Animated sorting algorithms in the terminal.
#[derive(Debug, Parser)]
#[command(name = "sortviz-term", version, about)]
struct Cli {
    /// Elements per generated array.
    #[arg(long, default_value_t = 20)]
    size: usize,

    /// Inclusive lower value bound.
    #[arg(long, default_value_t = 5)]
    min: u32,

    /// Inclusive upper value bound.
    #[arg(long, default_value_t = 95)]
    max: u32,

    /// Pause between render events, in milliseconds.
    #[arg(long, default_value_t = 100)]
    speed: u64,

    /// Seed for reproducible arrays.
    #[arg(long)]
    seed: Option<u64>,

    /// Print a recorded run for one variant instead of animating
    /// (bubble, selection, insertion, quick, merge).
    #[arg(long, value_name = "VARIANT")]
    trace: Option<String>,
}

fn parse_variant(name: &str) -> Result<Variant> {
    for variant in Variant::ALL {
        if variant.name() == name {
            return Ok(variant);
        }
    }
    bail!("unknown variant '{name}' (expected bubble, selection, insertion, quick, or merge)");
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(name) = &cli.trace {
        let variant = parse_variant(name)?;
        let mut builder = Sortviz::new()
            .array_size(cli.size)
            .min_value(cli.min)
            .max_value(cli.max);
        if let Some(seed) = cli.seed {
            builder = builder.seed(seed);
        }
        let mut viz = builder
            .adapter(Trace)
            .build()
            .context("building trace runner")?;
        print!("{}", viz.run(variant));
        return Ok(());
    }

    let mut builder = Sortviz::new()
        .array_size(cli.size)
        .min_value(cli.min)
        .max_value(cli.max)
        .animation_speed(cli.speed);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    for variant in Variant::ALL {
        builder = builder.sink(variant, BarPanel::new(cli.max));
    }
    let viz = builder
        .adapter(Animated)
        .build()
        .context("building animated runner")?;

    App::new(viz, cli.speed).run()
}
