//! Globe Point Tool
//!
//! Converts geographic coordinates into Cartesian positions on a globe,
//! either a single latitude/longitude pair or every placemark in a JSON
//! catalog.
//!
//! Usage:
//!   cargo run --bin globe_point -- 51.5 -0.12 --radius 6371
//!   cargo run --bin globe_point -- --catalog places.json --json

use clap::{ArgAction, Parser};
use globepoint::{GeoCoordinate, Globe, PlacedFeature, PlacemarkCatalog, ValidationMode};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Globe Point Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Converts latitude/longitude into 3D positions on a sphere",
    long_about = None
)]
struct Args {
    /// Latitude in degrees
    #[arg(allow_negative_numbers = true, required_unless_present = "catalog")]
    latitude: Option<f64>,

    /// Longitude in degrees
    #[arg(allow_negative_numbers = true, required_unless_present = "catalog")]
    longitude: Option<f64>,

    /// Sphere radius
    #[arg(short, long, default_value_t = 1.0)]
    radius: f64,

    /// JSON placemark catalog to convert instead of a single coordinate
    #[arg(short, long, conflicts_with_all = ["latitude", "longitude"])]
    catalog: Option<String>,

    /// Reject out-of-range coordinates instead of converting them as given
    #[arg(short, long, action = ArgAction::SetTrue)]
    strict: bool,

    /// Print JSON instead of a table
    #[arg(short, long, action = ArgAction::SetTrue)]
    json: bool,
}

fn print_feature(feature: &PlacedFeature) {
    let p = feature.position;
    println!(
        "{:<24} {:<28} {:>14.6} {:>14.6} {:>14.6}",
        feature.name,
        feature.coordinate.to_string(),
        p.x,
        p.y,
        p.z
    );
}

fn run(args: Args) -> Result<()> {
    let validation = if args.strict {
        ValidationMode::Strict
    } else {
        ValidationMode::Permissive
    };
    let globe = Globe::try_new(args.radius)?.with_validation(validation);

    let placed = match (&args.catalog, args.latitude, args.longitude) {
        (Some(path), _, _) => {
            let catalog = PlacemarkCatalog::from_json_file(path)?;
            globe.place_catalog(&catalog)?
        }
        (None, Some(lat), Some(lon)) => {
            let coordinate = GeoCoordinate::new(lat, lon);
            vec![PlacedFeature {
                name: "point".to_string(),
                coordinate,
                position: globe.place(&coordinate)?,
            }]
        }
        _ => return Err("either LATITUDE LONGITUDE or --catalog is required".into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&placed)?);
    } else {
        println!(
            "{:<24} {:<28} {:>14} {:>14} {:>14}",
            "Name", "Coordinate", "X", "Y", "Z"
        );
        println!("{}", "-".repeat(98));
        for feature in &placed {
            print_feature(feature);
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
