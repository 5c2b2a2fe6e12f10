use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use geocalc::{split_geotrace, Calculator, EARTH_EQUATORIAL_RADIUS_METERS, PRECISION};

#[derive(Parser, Debug)]
#[command(name = "geocalc")]
#[command(about = "Compute the spherical area and path length of a list of geopoints (\"lat lng [alt] [accuracy]\").", long_about = None)]
struct Cli {
    /// Geopoints, one per argument, e.g. "45.5 -73.6" or "45.5 -73.6 30 5"
    geopoints: Vec<String>,

    /// Semicolon-separated geotrace, appended after any positional geopoints
    #[arg(short, long)]
    trace: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Measure::Both)]
    measure: Measure,

    /// Sphere radius in meters
    #[arg(long, default_value_t = EARTH_EQUATORIAL_RADIUS_METERS)]
    radius: f64,

    /// Round results to the nearest 1/precision
    #[arg(long, default_value_t = PRECISION)]
    precision: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Measure {
    Area,
    Distance,
    Both,
}

impl Measure {
    fn includes_area(&self) -> bool {
        matches!(self, Measure::Area | Measure::Both)
    }

    fn includes_distance(&self) -> bool {
        matches!(self, Measure::Distance | Measure::Both)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let calc = Calculator::new(cli.radius, cli.precision)?;

    let mut geopoints: Vec<&str> = cli.geopoints.iter().map(String::as_str).collect();
    if let Some(trace) = &cli.trace {
        geopoints.extend(split_geotrace(trace));
    }

    println!("Geopoints: {}", geopoints.len());

    let mut failure = None;
    if cli.measure.includes_area() {
        match calc.try_area(&geopoints) {
            Ok(area) => println!("area_m2: {}", area),
            Err(e) => {
                println!("area_m2: NaN");
                failure = Some(e);
            }
        }
    }
    if cli.measure.includes_distance() {
        match calc.try_distance(&geopoints) {
            Ok(distance) => println!("distance_m: {}", distance),
            Err(e) => {
                println!("distance_m: NaN");
                failure = Some(e);
            }
        }
    }

    if let Some(e) = failure {
        bail!(e);
    }
    Ok(())
}
