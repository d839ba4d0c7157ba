/*!
 * Angle normalization and degrees/minutes/seconds (DMS) notation.
 *
 * All angles are `f64` degrees.
 * The two canonical ranges are `[0, 360)` and `(-180, 180]`.
 */

/// Angle type (alias for f64, in degrees).
pub type Degrees = f64;

/// Clamp an angle into `[0, 360)`.
/// Total over all finite inputs.
pub fn clamp_360(angle: Degrees) -> Degrees {
    // `%` keeps the sign of the dividend
    let angle = angle % 360.0;
    let angle = if angle < 0.0 { angle + 360.0 } else { angle };

    // Tiny negative remainders round up to exactly 360.0
    if angle >= 360.0 {
        0.0
    } else {
        angle
    }
}

/// Clamp an angle into `(-180, 180]`.
pub fn clamp_180(angle: Degrees) -> Degrees {
    let angle = clamp_360(angle);
    if angle > 180.0 {
        angle - 360.0
    } else {
        angle
    }
}

/// Format the magnitude of an angle as `D° MM' SS"`.
/// Each component is floor-truncated, not rounded, so the seconds can be one lower than a rounded value.
/// The sign is dropped; callers append the hemisphere letter.
pub fn format_dms(angle: Degrees) -> String {
    let abs = angle.abs();
    let degrees = abs.floor();
    let minutes = (60.0 * (abs - degrees)).floor();
    let seconds = (3600.0 * (abs - degrees - minutes / 60.0)).floor();

    format!("{}° {:02}' {:02}\"", degrees as u64, minutes as u64, seconds as u64)
}

/// Parse a `D° MM' SS"` string (optionally with a leading `-`) back into decimal degrees.
/// The closing `"` may also be written as two single quotes.
/// Returns `None` if the text does not match that grammar.
pub fn parse_dms(text: &str) -> Option<Degrees> {
    let mut rest = text.trim();

    let sign = match rest.strip_prefix('-') {
        Some(stripped) => {
            rest = stripped;
            -1.0
        },
        None => 1.0,
    };

    let (degrees, rest) = take_digits(rest)?;
    let rest = rest.strip_prefix('°')?.trim_start();
    let (minutes, rest) = take_digits(rest)?;
    let rest = rest.strip_prefix('\'')?.trim_start();
    let (seconds, rest) = take_digits(rest)?;
    let rest = rest.strip_prefix('"').or_else(|| rest.strip_prefix("''"))?;

    if !rest.is_empty() {
        return None;
    }

    Some(sign * (degrees + minutes / 60.0 + seconds / 3600.0))
}

/// Split a leading run of ASCII digits off the text.
/// Fails if the run is empty.
fn take_digits(text: &str) -> Option<(f64, &str)> {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    if end == 0 {
        return None;
    }
    let value = text[..end].parse::<u64>().ok()?;
    Some((value as f64, &text[end..]))
}
