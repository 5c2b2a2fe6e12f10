use anyhow::{anyhow, Context, Result};
use clap::Parser;
use csv::{ReaderBuilder, Writer};
use geocalc::{split_geotrace, Calculator, EARTH_EQUATORIAL_RADIUS_METERS, PRECISION};

#[derive(Parser, Debug)]
#[command(name = "geocalc-csv")]
#[command(about = "Compute area and distance for every geotrace in a CSV file (one row per trace, geopoints joined with ';').", long_about = None)]
struct Cli {
    /// Path to the .csv file
    #[arg(short, long)]
    csv: String,

    /// Column holding the row identifier
    #[arg(long, default_value_t = String::from("id"))]
    id_column: String,

    /// Column holding the geotrace
    #[arg(long, default_value_t = String::from("geotrace"))]
    column: String,

    /// Output CSV (id, area_m2, distance_m). If omitted, prints a summary only.
    #[arg(short, long)]
    out: Option<String>,

    /// Sphere radius in meters
    #[arg(long, default_value_t = EARTH_EQUATORIAL_RADIUS_METERS)]
    radius: f64,

    /// Round results to the nearest 1/precision
    #[arg(long, default_value_t = PRECISION)]
    precision: f64,
}

struct Row {
    id: String,
    area: f64,
    distance: f64,
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| anyhow!("column '{}' not found in header {:?}", name, headers))
}

fn measure_csv(cli: &Cli, calc: &Calculator) -> Result<Vec<Row>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(&cli.csv)
        .with_context(|| format!("opening {}", &cli.csv))?;

    let headers = rdr.headers()?.clone();
    let id_idx = column_index(&headers, &cli.id_column)?;
    let trace_idx = column_index(&headers, &cli.column)?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let id = record.get(id_idx).unwrap_or_default().to_string();
        let geopoints = split_geotrace(record.get(trace_idx).unwrap_or_default());
        rows.push(Row {
            id,
            area: calc.area(&geopoints),
            distance: calc.distance(&geopoints),
        });
    }
    Ok(rows)
}

fn format_value(value: f64) -> String {
    if value.is_nan() {
        String::from("NaN")
    } else {
        value.to_string()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let calc = Calculator::new(cli.radius, cli.precision)?;
    let rows = measure_csv(&cli, &calc)?;

    let invalid = rows.iter().filter(|r| r.area.is_nan()).count();
    println!("Rows: {}", rows.len());
    println!("Valid: {}", rows.len() - invalid);
    println!("Invalid: {}", invalid);

    let total_area: f64 = rows.iter().map(|r| r.area).filter(|a| !a.is_nan()).sum();
    let total_distance: f64 = rows.iter().map(|r| r.distance).filter(|d| !d.is_nan()).sum();
    println!("Total area (m2): {}", calc.round(total_area));
    println!("Total distance (m): {}", calc.round(total_distance));

    if let Some(out_path) = &cli.out {
        let mut wtr =
            Writer::from_path(out_path).with_context(|| format!("creating CSV {}", out_path))?;
        wtr.write_record(["id", "area_m2", "distance_m"])?;
        for row in &rows {
            wtr.write_record(&[
                row.id.clone(),
                format_value(row.area),
                format_value(row.distance),
            ])?;
        }
        wtr.flush()?;
        println!("Wrote {} rows to {}", rows.len(), out_path);
    }

    Ok(())
}
