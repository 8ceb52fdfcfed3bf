use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use deluge::engine::{Algorithm, EngineConfig, FloodEngine, NoopObserver};
use deluge::render::{render_frame, AnimatedRenderer, RenderStyle};
use deluge::terrain::load_map;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliAlgorithm {
    /// Breadth-first, FIFO frontier
    #[value(name = "queue", alias = "bfs")]
    Queue,
    /// Depth-first, LIFO frontier
    #[value(name = "stack", alias = "dfs")]
    Stack,
    /// Depth-first by recursion
    #[value(name = "recursive")]
    Recursive,
}

impl From<CliAlgorithm> for Algorithm {
    fn from(value: CliAlgorithm) -> Self {
        match value {
            CliAlgorithm::Queue => Algorithm::BreadthFirst,
            CliAlgorithm::Stack => Algorithm::DepthFirst,
            CliAlgorithm::Recursive => Algorithm::DepthFirstRecursive,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliStyle {
    Basic,
    Values,
    Shade,
}

impl From<CliStyle> for RenderStyle {
    fn from(value: CliStyle) -> Self {
        match value {
            CliStyle::Basic => RenderStyle::Basic,
            CliStyle::Values => RenderStyle::Values,
            CliStyle::Shade => RenderStyle::Shade,
        }
    }
}

/// Deluge - flood a terrain map from its sources
#[derive(Parser, Debug)]
#[command(name = "deluge", version, about)]
struct Cli {
    /// Map file: water level, source count, sources, dimensions, elevations
    #[arg(value_name = "MAP")]
    map: PathBuf,

    /// Traversal used to flood the map
    #[arg(long, short, value_enum, default_value_t = CliAlgorithm::Queue)]
    algorithm: CliAlgorithm,

    /// Redraw the map after every flooded cell
    #[arg(long, short)]
    visualize: bool,

    /// How cells are drawn
    #[arg(long, value_enum, default_value_t = CliStyle::Basic)]
    style: CliStyle,

    /// Pause between animation frames, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 100)]
    delay_ms: u64,

    /// Override the water level read from the map
    #[arg(long, value_name = "H", allow_negative_numbers = true)]
    water_level: Option<f64>,

    /// Recursion ceiling for the recursive traversal
    #[arg(long, value_name = "N", default_value_t = EngineConfig::DEFAULT_MAX_RECURSION_DEPTH)]
    max_recursion_depth: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut terrain = load_map(&cli.map)
        .with_context(|| format!("failed to load map {}", cli.map.display()))?;
    if let Some(level) = cli.water_level {
        info!("water level {} overridden to {level}", terrain.water_level());
        terrain = terrain.with_water_level(level);
    }

    let config = EngineConfig {
        max_recursion_depth: cli.max_recursion_depth,
    };
    let mut engine =
        FloodEngine::with_config(&terrain, config).context("invalid engine configuration")?;
    let algorithm = Algorithm::from(cli.algorithm);
    let style = RenderStyle::from(cli.style);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", render_frame(&terrain, engine.state(), style))?;
    out.flush()?;

    let metrics = if cli.visualize {
        let mut renderer = AnimatedRenderer::new(&mut out, &terrain, style)
            .with_frame_delay(Duration::from_millis(cli.delay_ms));
        let metrics = engine
            .run_observed(algorithm, &mut renderer)
            .with_context(|| format!("{algorithm} flood failed"))?;
        renderer.finish().context("failed to draw animation")?;
        metrics
    } else {
        engine
            .run_observed(algorithm, &mut NoopObserver)
            .with_context(|| format!("{algorithm} flood failed"))?
    };

    write!(out, "{}", render_frame(&terrain, engine.state(), style))?;
    writeln!(
        out,
        "{algorithm}: flooded {} of {} cells",
        metrics.admitted,
        terrain.cell_count()
    )?;
    info!(
        "{} expanded, {} rejected, peak frontier {}, max depth {}, {} deferred, {} us",
        metrics.expanded,
        metrics.candidates() - metrics.admitted,
        metrics.peak_frontier,
        metrics.max_depth,
        metrics.deferred,
        metrics.elapsed_us
    );
    Ok(())
}
