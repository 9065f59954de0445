mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use geokit::config::GeokitConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// YAML file configuring ellipsoid, default formula and default unit
	#[arg(long, short, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Convert a geometry between WKT and GeoJSON
	Convert(tools::convert::Subcommand),

	/// Measure the distance and bearings between two points
	Distance(tools::distance::Subcommand),

	/// Compute the bounding box of a geometry or around a point
	Bbox(tools::bbox::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	let config = match &cli.config {
		Some(path) => GeokitConfig::from_path(path)?,
		None => GeokitConfig::default(),
	};
	log::trace!("configuration: {config:?}");

	match &cli.command {
		Commands::Convert(arguments) => tools::convert::run(arguments),
		Commands::Distance(arguments) => tools::distance::run(arguments, &config),
		Commands::Bbox(arguments) => tools::bbox::run(arguments, &config),
	}
}
