use super::{into_geometry, parse_input, read_input};
use geokit::config::GeokitConfig;
use anyhow::{Context, Result, bail, ensure};
use geokit_geometry::{Geometry, Point, geojson::geometry_to_geojson, get_bbox};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, allow_negative_numbers = true)]
pub struct Subcommand {
	/// a WKT or GeoJSON geometry (text or file), or LAT LON of the center when --radius is given
	#[arg(required = true, num_args = 1..=2, value_name = "INPUT")]
	values: Vec<String>,

	/// radius around the center point
	#[arg(long, short)]
	radius: Option<f64>,

	/// unit of the radius: m, km, cm, mm, mi, ft, in, yd, nm
	#[arg(long, short)]
	unit: Option<String>,
}

pub fn run(arguments: &Subcommand, config: &GeokitConfig) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(&geometry_to_geojson(&compute(arguments, config)?))?);
	Ok(())
}

fn compute(arguments: &Subcommand, config: &GeokitConfig) -> Result<Geometry> {
	let polygon = match arguments.radius {
		Some(radius) => {
			let [lat, lon] = arguments.values.as_slice() else {
				bail!("a bounding box by radius needs the LAT and LON of the center");
			};
			ensure!(radius >= 0.0, "radius must not be negative, got {radius}");
			let center = Point::new(
				lat.parse().with_context(|| format!("invalid latitude '{lat}'"))?,
				lon.parse().with_context(|| format!("invalid longitude '{lon}'"))?,
			)?;
			let unit = arguments.unit.as_deref().unwrap_or(config.unit());
			config.to_context()?.bbox_by_radius(&center, radius, unit)?
		}
		None => {
			let [input] = arguments.values.as_slice() else {
				bail!("expected a single geometry, or --radius with LAT and LON");
			};
			get_bbox(&into_geometry(parse_input(&read_input(input)?)?)?)?
		}
	};
	Ok(Geometry::from(polygon))
}
