//! dungen: room-carved dungeon layout generator
//!
//! Generates a layout and writes the text grid to a file or stdout.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use dg_core::{DungeonRng, Generator, GeneratorConfig, RoomAreaPolicy, WorklistOrder};

/// Room-carved dungeon layout generator
#[derive(Parser, Debug)]
#[command(name = "dungen")]
#[command(author, version, about = "Generate a room-carved dungeon layout", long_about = None)]
struct Args {
    /// Dungeon width in cells
    #[arg(short = 'W', long = "width")]
    width: Option<i32>,

    /// Dungeon height in cells
    #[arg(short = 'H', long = "height")]
    height: Option<i32>,

    /// Free areas must be larger than this to receive a room
    #[arg(long = "min-room-area")]
    min_room_area: Option<i32>,

    /// Upper room area bound (only enforced with --bounded-area)
    #[arg(long = "max-room-area")]
    max_room_area: Option<i32>,

    /// Random seed (a fresh one is drawn and logged when omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// JSON configuration file; explicit flags override its values
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Fill the largest free area first instead of the oldest
    #[arg(long = "largest-first")]
    largest_first: bool,

    /// Resample room sizes until they fall inside the area bounds
    #[arg(long = "bounded-area")]
    bounded_area: bool,

    /// Output file (replaced if it exists); stdout when omitted
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Verbose output, repeat for more detail
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Merge the configuration file, if any, with the command-line overrides
fn build_config(args: &Args) -> anyhow::Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("cannot load configuration from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    if let Some(width) = args.width {
        config.dungeon_size.x = width;
    }
    if let Some(height) = args.height {
        config.dungeon_size.y = height;
    }
    if let Some(min) = args.min_room_area {
        config.min_room_area = min;
    }
    if let Some(max) = args.max_room_area {
        config.max_room_area = max;
    }
    if args.largest_first {
        config.worklist_order = WorklistOrder::LargestFirst;
    }
    if args.bounded_area {
        config.room_area_policy = RoomAreaPolicy::Bounded;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = build_config(&args)?;
    let rng = args.seed.map_or_else(DungeonRng::from_entropy, DungeonRng::new);
    info!("seed {}", rng.seed());

    let mut generator = Generator::with_config(config, rng).context("invalid configuration")?;
    generator.generate().context("dungeon generation failed")?;
    info!("{} rooms placed", generator.rooms().len());

    let text = generator.render();
    match &args.output {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("cannot write {}", path.display()))?;
            info!("layout written to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
