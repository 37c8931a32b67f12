//! Coordinate conversion CLI.
//!
//! Converts between world `(x, z)` coordinates and geographic `(lat, lon)`
//! through a configurable projection pipeline:
//! - registered projection, orientation and scale from flags, environment
//!   or a YAML pipeline file
//! - distortion diagnostics (Tissot indicatrix)
//! - plain text or JSON output
//!
//! With no subcommand it converts the world point (3231992, -5296639).

mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use geo_common::{GeoError, Orientation};
use geo_projection::{registry, WorldProjection};
use serde_json::json;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use config::{Overrides, PipelineConfig};

const SMOKE_POINT: (f64, f64) = (3_231_992.0, -5_296_639.0);

#[derive(Parser, Debug)]
#[command(name = "geo-convert")]
#[command(about = "Convert coordinates through the world projection pipeline")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Registered projection name
    #[arg(long, env = "GEO_PROJECTION")]
    projection: Option<String>,

    /// Orientation: none, upright or swapped
    #[arg(long, env = "GEO_ORIENTATION")]
    orientation: Option<Orientation>,

    /// Uniform scale applied to both planar axes
    #[arg(long, env = "GEO_SCALE")]
    scale: Option<f64>,

    /// YAML pipeline file (projection, orientation, scale_x, scale_y)
    #[arg(long, env = "GEO_CONFIG")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// World (x, z) to geographic (lat, lon)
    ToGeo {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,
    },

    /// Geographic (lat, lon) to world (x, z)
    FromGeo {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },

    /// Planar bounds of the pipeline and meters per unit
    Bounds,

    /// Tissot indicatrix at a geographic point
    Tissot {
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Finite-difference step in radians
        #[arg(long, default_value_t = 1e-7)]
        step: f64,
    },

    /// List registered projections
    List,
}

fn main() {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    if let Err(err) = init_tracing(&args.log_level, args.log_json) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }

    if let Err(err) = run(args) {
        eprintln!("error: {err:#}");
        let code = err.downcast_ref::<GeoError>().map_or(1, GeoError::exit_code);
        std::process::exit(code);
    }
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    Ok(())
}

fn run(args: Args) -> Result<()> {
    let overrides = Overrides {
        projection: args.projection,
        orientation: args.orientation,
        scale: args.scale,
    };
    let config_path = args.config;
    let world = move || -> Result<WorldProjection> {
        let pipeline = PipelineConfig::resolve(config_path.as_deref(), overrides)?;
        debug!(?pipeline, "Resolved pipeline");
        Ok(WorldProjection::new(pipeline.build()?))
    };

    let command = args.command.unwrap_or(Command::ToGeo {
        x: SMOKE_POINT.0,
        z: SMOKE_POINT.1,
    });

    match command {
        Command::ToGeo { x, z } => {
            let point = world()?.to_geo(x, z);
            if args.json {
                println!("{}", serde_json::to_string(&point)?);
            } else {
                println!("{} {}", point.lat, point.lon);
            }
        }
        Command::FromGeo { lat, lon } => {
            let point = world()?.from_geo(lat, lon);
            if args.json {
                println!("{}", serde_json::to_string(&point)?);
            } else {
                println!("{} {}", point.x, point.z);
            }
        }
        Command::Bounds => {
            let world = world()?;
            let bounds = world.bounds();
            let meters_per_unit = world.meters_per_unit();
            if args.json {
                let report = json!({ "bounds": bounds, "meters_per_unit": meters_per_unit });
                println!("{}", serde_json::to_string(&report)?);
            } else {
                println!(
                    "{} {} {} {}",
                    bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y
                );
                println!("meters per unit: {meters_per_unit}");
            }
        }
        Command::Tissot { lon, lat, step } => {
            let t = world()?.projection().tissot(lon, lat, step);
            if args.json {
                let report = json!({
                    "areal_scale": t.areal_scale,
                    "max_angular_distortion": t.max_angular_distortion,
                    "semi_major": t.semi_major,
                    "semi_minor": t.semi_minor,
                });
                println!("{}", serde_json::to_string(&report)?);
            } else {
                println!(
                    "{} {} {} {}",
                    t.areal_scale, t.max_angular_distortion, t.semi_major, t.semi_minor
                );
            }
        }
        Command::List => {
            let names = registry::names();
            if args.json {
                println!("{}", serde_json::to_string(&names)?);
            } else {
                for name in names {
                    println!("{name}");
                }
            }
        }
    }

    Ok(())
}
