//! dustvol CLI - ray entry/exit against a dust map's bounding volume
//!
//! Resolves single rays or whole camera images against the capped cylinder
//! that bounds the 3D dust map, producing the intervals a ray marcher
//! integrates over.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dustvol_raytrace::{CappedCylinder, Crossing, Endpoints, Ray};

mod camera;
mod maps;
mod settings;
mod trace;

use maps::{MapProps, MapVersion};
use settings::Settings;

#[derive(Parser)]
#[command(name = "dustvol")]
#[command(about = "Ray entry and exit for a capped cylindrical dust volume", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one ray against a capped cylinder
    Endpoints {
        /// Cylinder radius
        #[arg(long)]
        radius: f64,
        /// Cylinder half-height
        #[arg(long)]
        half_height: f64,
        /// Ray origin as x,y,z
        #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
        origin: [f64; 3],
        /// Ray direction as dx,dy,dz (need not be normalized)
        #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
        direction: [f64; 3],
    },
    /// Resolve every camera ray of a view
    Trace {
        /// Settings file (TOML); defaults apply when omitted
        #[arg(short, long)]
        settings: Option<PathBuf>,
        /// Override the map version
        #[arg(long)]
        map: Option<MapVersion>,
        /// Print per-ray records as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// List dust-map versions and their distance ranges
    Maps,
}

fn parse_triple(s: &str) -> Result<[f64; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z, got {s:?}"));
    }
    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|e| format!("invalid component {part:?}: {e}"))?;
    }
    Ok(out)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Endpoints {
            radius,
            half_height,
            origin,
            direction,
        } => {
            show_endpoints(radius, half_height, origin, direction)?;
        }
        Commands::Trace {
            settings,
            map,
            json,
        } => {
            run_trace(settings, map, json)?;
        }
        Commands::Maps => {
            list_maps();
        }
    }

    Ok(())
}

fn describe(crossing: &Crossing) -> String {
    match crossing {
        Crossing::Valid(s) => format!("valid      s = {s}"),
        Crossing::Invalid(miss) => format!("invalid    {miss:?}"),
    }
}

fn show_endpoints(
    radius: f64,
    half_height: f64,
    origin: [f64; 3],
    direction: [f64; 3],
) -> Result<()> {
    let volume = CappedCylinder::new(radius, half_height).context("volume")?;
    let ray = Ray::from_arrays(origin, direction).context("ray")?;
    let endpoints = Endpoints::resolve(&volume, &ray);

    println!("{:?}", endpoints.raw());
    for (name, crossing) in ["top", "bottom", "minus", "plus"]
        .iter()
        .zip(endpoints.crossings())
    {
        println!("{name:<7}{}", describe(&crossing));
    }
    match endpoints.interval() {
        Some(iv) => println!("interval   [{}, {}]", iv.entry, iv.exit),
        None => println!("interval   none"),
    }
    Ok(())
}

fn run_trace(path: Option<PathBuf>, map: Option<MapVersion>, json: bool) -> Result<()> {
    let mut settings = match &path {
        Some(path) => Settings::load(path)?,
        None => {
            log::info!("no settings file given, using defaults");
            Settings::default()
        }
    };
    if let Some(map) = map {
        settings.volume.map = map;
        settings.validate()?;
    }

    let records = trace::trace(&settings)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let summary = trace::summarize(&settings, &records);
    let volume = settings.volume()?;
    println!(
        "volume   r = {:.3} kpc, h = {:.3} kpc ({})",
        volume.radius,
        volume.half_height,
        settings.volume.map.name()
    );
    println!("rays     {} ({} hit)", summary.rays, summary.hits);
    println!("length   {:.4} (mean)", summary.mean_length);
    println!(
        "step     {:.6} (mean, {} steps max)",
        summary.mean_step, settings.integration.n_steps_max
    );
    println!("tau_max  {}", summary.tau_max);
    Ok(())
}

fn list_maps() {
    for version in MapVersion::ALL {
        let props: MapProps = version.props();
        println!(
            "{}  {:>2} textures  {:>3} slices  dm {:.3}..{:.3} (step {:.3})  d {:.3}..{:.3} kpc",
            version.name(),
            props.n_textures,
            props.n_dm,
            props.dm_0,
            props.dm_1,
            props.slice_modulus(1) - props.slice_modulus(0),
            props.near_distance_kpc(),
            props.far_distance_kpc(),
        );
    }
}
