use clap::{Parser, Subcommand};

use boundary_editor::geometry::{
    point_in_polygon, polygon_area, polygon_perimeter, LatLng, LatLngBounds,
};
use boundary_editor::io::geojson::{read_boundary_geojson, write_boundary_geojson};
use boundary_editor::io::{read_boundary_json, write_boundary_json};
use boundary_editor::zone::PricingZone;
use boundary_editor::zone_db::{ZoneDb, ZoneFilter};

#[derive(Parser)]
#[command(about = "Inspect and manage zone boundary data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a boundary file: vertex count, bounds, area, perimeter.
    Info { path: String },
    /// Check that a boundary file parses and its coordinates are in range.
    Validate { path: String },
    /// Test whether a point lies inside a boundary.
    Contains { path: String, lat: f64, lng: f64 },
    /// Convert a boundary file to a GeoJSON polygon feature.
    ExportGeojson { input: String, output: String },
    /// Convert a GeoJSON polygon back to the form-field encoding.
    ImportGeojson { input: String, output: String },
    /// Add a zone to a registry, optionally seeded from a boundary file.
    ZoneAdd {
        db: String,
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        boundary: Option<String>,
    },
    /// List zones in a registry.
    ZoneList {
        db: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        active_only: bool,
    },
    /// Toggle a zone's active flag.
    ZoneActivate {
        db: String,
        id: i64,
        #[arg(long)]
        off: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Info { path } => match read_boundary_json(&path) {
            Ok(boundary) => {
                println!("Vertices: {}", boundary.len());
                if let Some(b) = LatLngBounds::from_points(&boundary) {
                    println!(
                        "Bounds: south {:.6} west {:.6} north {:.6} east {:.6}",
                        b.south, b.west, b.north, b.east
                    );
                }
                println!("Area: {:.6}", polygon_area(&boundary));
                println!("Perimeter: {:.6}", polygon_perimeter(&boundary));
            }
            Err(e) => eprintln!("Error reading {}: {}", path, e),
        },
        Commands::Validate { path } => match read_boundary_json(&path) {
            Ok(boundary) if boundary.len() >= 3 => {
                println!("OK: {} vertices", boundary.len());
            }
            Ok(boundary) => {
                println!("OK but not a closed area ({} vertices)", boundary.len());
            }
            Err(e) => {
                eprintln!("Invalid boundary {}: {}", path, e);
                std::process::exit(1);
            }
        },
        Commands::Contains { path, lat, lng } => match read_boundary_json(&path) {
            Ok(boundary) => {
                let p = LatLng::new(lat, lng);
                if point_in_polygon(p, &boundary) {
                    println!("Inside");
                } else {
                    println!("Outside");
                }
            }
            Err(e) => eprintln!("Error reading {}: {}", path, e),
        },
        Commands::ExportGeojson { input, output } => match read_boundary_json(&input) {
            Ok(boundary) => match write_boundary_geojson(&output, &boundary) {
                Ok(()) => println!("Wrote {}", output),
                Err(e) => eprintln!("Error writing {}: {}", output, e),
            },
            Err(e) => eprintln!("Error reading {}: {}", input, e),
        },
        Commands::ImportGeojson { input, output } => match read_boundary_geojson(&input) {
            Ok(boundary) => match write_boundary_json(&output, &boundary) {
                Ok(()) => println!("Wrote {} ({} vertices)", output, boundary.len()),
                Err(e) => eprintln!("Error writing {}: {}", output, e),
            },
            Err(e) => eprintln!("Error reading {}: {}", input, e),
        },
        Commands::ZoneAdd {
            db,
            name,
            description,
            boundary,
        } => {
            let boundary_pts = match boundary {
                Some(path) => match read_boundary_json(&path) {
                    Ok(pts) => pts,
                    Err(e) => {
                        eprintln!("Error reading {}: {}", path, e);
                        return;
                    }
                },
                None => Vec::new(),
            };
            match ZoneDb::open(&db) {
                Ok(registry) => {
                    let mut zone = PricingZone::new(name);
                    zone.description = description;
                    zone.boundary = boundary_pts;
                    match registry.insert(&zone) {
                        Ok(id) => println!("Added zone {}: {}", id, zone.name),
                        Err(e) => eprintln!("Error adding zone: {}", e),
                    }
                }
                Err(e) => eprintln!("Error opening {}: {}", db, e),
            }
        }
        Commands::ZoneList {
            db,
            name,
            active_only,
        } => match ZoneDb::open(&db) {
            Ok(registry) => {
                let filter = ZoneFilter {
                    name_contains: name,
                    active_only,
                };
                match registry.query(&filter) {
                    Ok(zones) => {
                        for zone in zones {
                            let state = if zone.is_active { "active" } else { "inactive" };
                            println!(
                                "{} {} [{}] {}",
                                zone.id.unwrap_or_default(),
                                zone.name,
                                state,
                                zone.boundary_summary()
                            );
                        }
                    }
                    Err(e) => eprintln!("Error querying zones: {}", e),
                }
            }
            Err(e) => eprintln!("Error opening {}: {}", db, e),
        },
        Commands::ZoneActivate { db, id, off } => match ZoneDb::open(&db) {
            Ok(registry) => match registry.set_active(id, !off) {
                Ok(true) => println!("Zone {} is now {}", id, if off { "inactive" } else { "active" }),
                Ok(false) => eprintln!("No zone with id {}", id),
                Err(e) => eprintln!("Error updating zone {}: {}", id, e),
            },
            Err(e) => eprintln!("Error opening {}: {}", db, e),
        },
    }
}
