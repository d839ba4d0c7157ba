pub mod angle;
pub mod coordinates;
pub mod geo_3d;
pub mod surface;
pub mod body;
pub mod picking;
pub mod args;
pub mod io;
mod crate_errors;

use itertools::Itertools;
use tracing::debug;

pub use crate_errors::{
    VtargetError,
    VtargetResult,
    err_str,
};

use args::Command;
use body::{Body, GlobalLocation, TerrainChoice};
use coordinates::Coordinates;
use geo_3d::{Ray, line_sphere_intersection};
use picking::TargetPicker;
use surface::SurfaceQuery;

/// Run a parsed command line.
/// Results are printed to stdout.
pub fn run(cli: args::VtargetCli) -> VtargetResult<()> {
    match cli.sub_command {
        Command::Format(format_args) => format_coordinates(format_args),
        Command::Parse(parse_args) => parse_angle(parse_args),
        Command::Resolve(resolve_args) => resolve(resolve_args),
        Command::Pick(pick_args) => pick(pick_args),
        Command::Example(example_args) => example_config(example_args),
    }
}

/// Format a latitude/longitude pair.
pub fn format_coordinates(format_args: args::FormatArgs) -> VtargetResult<()> {
    let coordinates = Coordinates::parse(&format_args.latitude, &format_args.longitude)?;
    if format_args.dms {
        println!("{}", coordinates.to_string_dms(format_args.newline));
    } else {
        println!("{}", coordinates.to_string_decimal(format_args.newline, format_args.precision));
    }
    Ok(())
}

/// Parse an angle into decimal degrees.
pub fn parse_angle(parse_args: args::ParseArgs) -> VtargetResult<()> {
    match coordinates::parse_angle(&parse_args.text) {
        Some(angle) => {
            println!("{:.6}", angle);
            Ok(())
        },
        None => err_str(&format!("Not a DMS or decimal angle: {}", parse_args.text)),
    }
}

/// Build rays from the origin/direction pairs.
fn build_rays(ray_args: &args::BodyRayArgs) -> VtargetResult<Vec<Ray>> {
    let mut rays = Vec::new();
    for (origin, direction) in ray_args.pairs()? {
        match Ray::new(origin, direction) {
            Some(ray) => rays.push(ray),
            None => return err_str(&format!("Ray direction must be non-zero (got {})", direction)),
        }
    }
    Ok(rays)
}

/// Resolve each ray against the body's surface.
pub fn resolve(resolve_args: args::ResolveArgs) -> VtargetResult<()> {
    let body = Body::from_cfg_file(&resolve_args.rays.body_path)?;
    let rays = build_rays(&resolve_args.rays)?;

    if !body.has_surface {
        return err_str(&format!("{} doesn't have a surface", body.name));
    }

    let resolver = body.resolver();
    for ray in rays.iter() {
        let resolution = resolver.resolve_with_stats(ray, |coordinates| body.height_at(coordinates), line_sphere_intersection);
        debug!(iterations = resolution.iterations, "Resolved ray");
        match resolution.query {
            SurfaceQuery::Found(coordinates) => {
                let text = if resolve_args.dms {
                    coordinates.to_string_dms(false)
                } else {
                    coordinates.to_string_decimal(false, 3)
                };
                println!("{} (altitude {:.1} m)", text, body.terrain_altitude(coordinates));
            },
            SurfaceQuery::NotFound => println!("No surface point"),
        }
    }
    Ok(())
}

/// Run the picker over the given rays, one update per ray.
pub fn pick(pick_args: args::PickArgs) -> VtargetResult<()> {
    let body = Body::from_cfg_file(&pick_args.rays.body_path)?;
    let rays = build_rays(&pick_args.rays)?;

    let mut picker = TargetPicker::new(&body);
    picker.start_picking(&body)?;

    for ray in rays.iter() {
        match picker.update(&body, ray) {
            SurfaceQuery::Found(coordinates) => println!("Preview: {}", coordinates),
            SurfaceQuery::NotFound => println!("Preview: off the surface"),
        }
    }

    if pick_args.confirm && picker.confirm().is_none() {
        println!("Nothing to confirm: the last ray missed the surface");
    }
    picker.cancel();

    println!("State: {}", picker.state());
    if let Some(target) = picker.target() {
        print_target(&body, target);
    }
    Ok(())
}

fn print_target(body: &Body, target: &GlobalLocation) {
    println!("Target: {} on {}", target.coordinates.to_string_dms(false), target.body);
    println!("Altitude: {:.1} m", target.altitude);
    println!("Position: {:.1}", target.position(body));
}

/// Display or save an example body config file.
pub fn example_config(example_args: args::ExampleArgs) -> VtargetResult<()> {
    let terrain_name = match example_args.terrain {
        Some(terrain_name) => terrain_name,
        None => {
            println!("Available terrain models: {}", TerrainChoice::names().iter().join(", "));
            return Ok(());
        },
    };

    let body = Body::example(TerrainChoice::from_name(&terrain_name)?);
    let cfg = io::to_cfg_string(&body, example_args.format)?;

    match example_args.output_path {
        Some(output_path) => {
            io::write_to_file(&output_path, &cfg)?;
            println!("Example body config written to {}", output_path);
        },
        None => println!("{}", cfg),
    }
    Ok(())
}
