/*!
 * Minimal 3D geometry for body-local queries.
 *
 * The body-local frame is centered on the body and rotates with it:
 * `+z` points at the north pole, `+x` at latitude 0 / longitude 0,
 * and `+y` at latitude 0 / longitude 90 E.
 */

mod point;
mod vector;
mod ray;

pub use point::Point;
pub use vector::GeoVector;
pub use ray::{
    Ray,
    line_sphere_intersection,
};

/// Parse a comma-separated `x,y,z` triple, as given on the command line.
fn parse_triple(text: &str) -> Result<(f64, f64, f64), String> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("Expected three comma-separated values (x,y,z), got: {text}"));
    }
    let mut values = [0.0; 3];
    for (value, part) in values.iter_mut().zip(parts.iter()) {
        *value = part.parse::<f64>()
            .map_err(|error| format!("Invalid component \"{part}\" in {text}: {error}"))?;
    }
    Ok((values[0], values[1], values[2]))
}

impl std::str::FromStr for Point {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (x, y, z) = parse_triple(text)?;
        Ok(Point::new(x, y, z))
    }
}

impl std::str::FromStr for GeoVector {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (x, y, z) = parse_triple(text)?;
        Ok(GeoVector::new(x, y, z))
    }
}
