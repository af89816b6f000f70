use clap::{Parser, Subcommand};
use geo::coord;
use isogrid::{
    app::grid,
    model::{builder::SampleGridConfig, surface::DEFAULT_MAX_WALK_DISTANCE, TimeSurfaceError},
};
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct IsogridAppArguments {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    /// sample vertex arrival times onto a regular grid for isoline extraction
    Grid {
        #[arg(long, help = "CSV file with vertex_id,longitude,latitude,time rows")]
        vertex_file: String,
        #[arg(long, help = "output path for the grid cell CSV")]
        output_file: String,
        #[arg(long, help = "path to .toml or .json file with sample grid parameters")]
        configuration_file: Option<String>,
        #[arg(long, requires = "origin_y", help = "grid origin longitude")]
        origin_x: Option<f64>,
        #[arg(long, requires = "origin_x", help = "grid origin latitude")]
        origin_y: Option<f64>,
        #[arg(long, default_value_t = DEFAULT_MAX_WALK_DISTANCE, help = "network walk limit in meters of the search that produced the vertex times")]
        max_walk_distance: f64,
    },
}

pub fn run(app: &App) -> Result<(), TimeSurfaceError> {
    match app {
        App::Grid {
            vertex_file,
            output_file,
            configuration_file,
            origin_x,
            origin_y,
            max_walk_distance,
        } => {
            let conf = match configuration_file {
                None => Ok(SampleGridConfig::default()),
                Some(f) => {
                    log::info!("reading sample grid configuration from {f}");
                    SampleGridConfig::try_from(f)
                }
            }?;
            let origin = match (origin_x, origin_y) {
                (Some(x), Some(y)) => Some(coord! { x: *x, y: *y }),
                _ => None,
            };
            grid::run(
                Path::new(vertex_file),
                Path::new(output_file),
                origin,
                *max_walk_distance,
                conf,
            )
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("starting isogrid at {}", chrono::Local::now().to_rfc3339());
    let args = IsogridAppArguments::parse();
    match run(&args.app) {
        Ok(_) => eprintln!("finished."),
        Err(e) => {
            log::error!("isogrid failed: {e}");
            std::process::exit(1);
        }
    }
}
