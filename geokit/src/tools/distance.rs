use geokit::config::GeokitConfig;
use anyhow::{Context, Result};
use geokit_geometry::{Point, geodesy::DistanceFormula};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true, allow_negative_numbers = true)]
pub struct Subcommand {
	/// latitude of the start point in degrees
	lat1: f64,
	/// longitude of the start point in degrees
	lon1: f64,
	/// latitude of the end point in degrees
	lat2: f64,
	/// longitude of the end point in degrees
	lon2: f64,

	/// distance formula: haversine or vincenty
	#[arg(long, short)]
	formula: Option<String>,

	/// distance unit: m, km, cm, mm, mi, ft, in, yd, nm
	#[arg(long, short)]
	unit: Option<String>,
}

pub fn run(arguments: &Subcommand, config: &GeokitConfig) -> Result<()> {
	println!("{}", measure(arguments, config)?);
	Ok(())
}

fn measure(arguments: &Subcommand, config: &GeokitConfig) -> Result<String> {
	let context = config.to_context()?;
	let from = Point::new(arguments.lat1, arguments.lon1).context("invalid start point")?;
	let to = Point::new(arguments.lat2, arguments.lon2).context("invalid end point")?;

	let formula = match &arguments.formula {
		Some(formula) => formula.parse::<DistanceFormula>()?,
		None => context.formula(),
	};
	let unit = arguments.unit.as_deref().unwrap_or(config.unit());

	let distance = context.distance_with(&from, &to, unit, formula)?;
	log::debug!("{formula} distance between {from:?} and {to:?}: {distance}{unit}");

	Ok(format!(
		"distance: {distance} {unit}\ninitial bearing: {}\nfinal bearing: {}",
		context.initial_bearing(&from, &to),
		context.final_bearing(&from, &to)
	))
}
