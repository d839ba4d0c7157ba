mod proc_errors;

use clap::{
    Args,
    Parser,
    Subcommand,
};

use crate::geo_3d::{GeoVector, Point};
use crate::io::Format;

pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Virtual targeting tool: pick, resolve, and format surface targets on celestial bodies.
#[derive(Debug, Parser)]
#[command(name = "vtarget")]
pub struct VtargetCli {
    #[clap(subcommand)]
    pub sub_command: Command,
}

/// Parser for the subcommands of the vtarget binary using clap.
#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(name = "format")]
    /// Format a latitude/longitude pair with hemisphere letters.
    Format(FormatArgs),

    #[command(name = "parse")]
    /// Parse an angle in DMS or decimal notation into decimal degrees.
    Parse(ParseArgs),

    #[command(name = "resolve")]
    /// Resolve where a ray meets a body's surface.
    Resolve(ResolveArgs),

    #[command(name = "pick")]
    /// Run the target picker over a sequence of pointer rays.
    Pick(PickArgs),

    #[command(name = "example")]
    /// Print an example body config file.
    Example(ExampleArgs),
}

/// Arguments for the format command.
#[derive(Debug, Args)]
pub struct FormatArgs {
    #[arg(allow_hyphen_values = true)]
    /// Latitude, in decimal degrees or DMS.
    pub latitude: String,

    #[arg(allow_hyphen_values = true)]
    /// Longitude, in decimal degrees or DMS.
    pub longitude: String,

    #[arg(short, long)]
    /// Format in degrees/minutes/seconds instead of decimal degrees.
    pub dms: bool,

    #[arg(short, long, default_value_t = 3)]
    /// Decimal places for decimal output.
    pub precision: usize,

    #[arg(short, long)]
    /// Put latitude and longitude on separate lines.
    pub newline: bool,
}

/// Arguments for the parse command.
#[derive(Debug, Args)]
pub struct ParseArgs {
    #[arg(allow_hyphen_values = true)]
    /// Angle text, e.g. 45° 30' 15" or -12.5.
    pub text: String,
}

/// Ray arguments shared by the resolve and pick commands.
#[derive(Debug, Args)]
pub struct BodyRayArgs {
    #[arg(short, long = "body")]
    /// Path to the body config file (.json/.toml/.yaml/.yml).
    pub body_path: String,

    #[arg(short, long, required = true, allow_hyphen_values = true)]
    /// Ray origin in the body-local frame, as x,y,z (meters). Repeat for several rays.
    pub origin: Vec<Point>,

    #[arg(short = 'r', long, required = true, allow_hyphen_values = true)]
    /// Ray direction in the body-local frame, as x,y,z. One per origin.
    pub direction: Vec<GeoVector>,
}

/// Arguments for the resolve command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub rays: BodyRayArgs,

    #[arg(short, long)]
    /// Print coordinates in degrees/minutes/seconds.
    pub dms: bool,
}

/// Arguments for the pick command.
#[derive(Debug, Args)]
pub struct PickArgs {
    #[command(flatten)]
    pub rays: BodyRayArgs,

    #[arg(short, long)]
    /// Confirm the last preview as the target (otherwise picking is cancelled).
    pub confirm: bool,
}

/// Arguments for the example command.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    #[arg(short, long)]
    /// Terrain model of the example body. Lists the available models if omitted.
    pub terrain: Option<String>,

    #[arg(short, long, value_enum, default_value = "yaml")]
    /// Config file format.
    pub format: Format,

    #[arg(short, long = "output")]
    /// Write the example to this file instead of printing it.
    pub output_path: Option<String>,
}

impl BodyRayArgs {
    /// Pair up origins and directions.
    pub fn pairs(&self) -> ProcResult<Vec<(Point, GeoVector)>> {
        if self.origin.len() != self.direction.len() {
            return err_str(&format!(
                "Got {} ray origins but {} directions; give one --direction per --origin",
                self.origin.len(), self.direction.len(),
            ));
        }
        Ok(self.origin.iter().copied().zip(self.direction.iter().copied()).collect())
    }
}
