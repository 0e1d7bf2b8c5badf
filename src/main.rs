use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use vphys::colormap;
use vphys::config::load_config;
use vphys::logging::init_logging;
use vphys::partition::{Assignment, Partitioner, RemainderPolicy};
use vphys::plot::{render_colormap_strip, render_log_bars, AxesStyle, BarChartSpec, Spine};
use vphys::{mkdir_p, sim};

/// Plotting and parallel post-processing helpers for simulation output
#[derive(Parser, Debug)]
#[command(name = "vphys")]
#[command(version)]
struct Cli {
    /// Configuration file path (defaults to ~/.config/vphys/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show which loop indices each rank processes
    Partition {
        #[arg(long)]
        nprocs: i64,
        #[arg(long)]
        loopsize: i64,
        /// Only print this rank
        #[arg(long)]
        rank: Option<i64>,
        /// Use the legacy remainder numbering
        #[arg(long)]
        legacy: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Create a directory and its parents
    Mkdir { path: PathBuf },
    /// List simulation directories (NNNNN.BQ) in a run directory
    ListSims { bin_dir: PathBuf },
    /// Print the LaTeX (pgf) figure preset as TOML
    Pgf,
    /// Write a PNG preview of the morgenstemning colormap
    Colormap {
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        reversed: bool,
        #[arg(long, default_value_t = 512)]
        width: u32,
        #[arg(long, default_value_t = 32)]
        height: u32,
    },
    /// Write a log-x bar chart PNG
    Bars {
        #[arg(long, value_delimiter = ',', required = true)]
        x: Vec<f64>,
        #[arg(long, value_delimiter = ',', required = true)]
        y: Vec<f64>,
        /// Bar half-width in decades
        #[arg(long, default_value_t = 0.1)]
        width: f64,
        /// Shift in decades
        #[arg(long, default_value_t = 0.0)]
        xdelta: f64,
        /// Spines to keep (left, right, top, bottom)
        #[arg(long, value_delimiter = ',', default_value = "left,bottom")]
        spines: Vec<String>,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = load_config(cli.config.as_deref())?;
    let config = loaded.config;

    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_logging(level)?;
    if let Some((path, e)) = loaded.write_error {
        tracing::warn!(path = %path.display(), error = %e, "could not write default config");
    }

    match cli.command {
        Command::Partition { nprocs, loopsize, rank, legacy, json } => {
            let policy = if legacy { RemainderPolicy::Legacy } else { config.remainder_policy() };
            let partitioner = Partitioner::new(nprocs, loopsize, policy)?;
            if json {
                let rows: Vec<(usize, Assignment)> = match rank {
                    Some(r) => {
                        let assignment = partitioner.assignment(r)?;
                        vec![(r as usize, assignment)]
                    }
                    None => partitioner.all()?.into_iter().enumerate().collect(),
                };
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                // printed per rank without collecting
                let ranks = match rank {
                    Some(r) => r..=r,
                    None => 0..=nprocs - 1,
                };
                for r in ranks {
                    let assignment = partitioner.assignment(r)?;
                    if assignment.is_no_work() {
                        println!("rank {}: no work", r);
                    } else {
                        println!("rank {}: {:?}", r, assignment.indices());
                    }
                }
            }
        }
        Command::Mkdir { path } => {
            mkdir_p(&path).with_context(|| format!("creating {}", path.display()))?;
            tracing::info!(path = %path.display(), "directory created");
        }
        Command::ListSims { bin_dir } => {
            for dir in sim::list_simulation_directories(&bin_dir)? {
                println!("{}", dir);
            }
        }
        Command::Pgf => {
            print!("{}", vphys::plot::default_pgf_configuration().to_toml()?);
        }
        Command::Colormap { out, reversed, width, height } => {
            let cmap = if reversed { &*colormap::INV_MORGENSTEMNING } else { &*colormap::MORGENSTEMNING };
            let rendered = render_colormap_strip(cmap, width, height)?;
            std::fs::write(&out, &rendered.png_bytes)
                .with_context(|| format!("writing {}", out.display()))?;
            tracing::info!(colormap = cmap.name(), path = %out.display(), "colormap written");
        }
        Command::Bars { x, y, width, xdelta, spines, out } => {
            let spines = spines
                .iter()
                .map(|s| Spine::parse(s).with_context(|| format!("unknown spine '{}'", s)))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let mut spec = BarChartSpec::new(x, y, width);
            spec.xdelta = xdelta;
            spec.style = AxesStyle::spartan(&spines, config.spine_outward_points);
            spec.image_width = config.plot_width;
            spec.image_height = config.plot_height;

            let rendered = render_log_bars(&spec)?;
            std::fs::write(&out, &rendered.plot.png_bytes)
                .with_context(|| format!("writing {}", out.display()))?;
            tracing::info!(bars = spec.x.len(), path = %out.display(), "bar chart written");
        }
    }

    Ok(())
}
