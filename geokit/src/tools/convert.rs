use super::{into_geometry, parse_input, read_input};
use anyhow::Result;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
	Wkt,
	Geojson,
}

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// WKT or GeoJSON text, or a file containing it. The format is detected automatically.
	#[arg()]
	input: String,

	/// output format, defaults to the other format of the input
	#[arg(long, value_enum)]
	to: Option<Format>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	println!("{}", convert(&read_input(&arguments.input)?, arguments.to)?);
	Ok(())
}

fn convert(text: &str, to: Option<Format>) -> Result<String> {
	let document = parse_input(text)?;
	let is_wkt = !text.trim_start().starts_with('{');
	let to = to.unwrap_or(if is_wkt { Format::Geojson } else { Format::Wkt });
	log::debug!("converting {} input to {to:?}", if is_wkt { "WKT" } else { "GeoJSON" });

	Ok(match to {
		Format::Wkt => into_geometry(document)?.to_wkt(),
		Format::Geojson => serde_json::to_string_pretty(&document.to_json())?,
	})
}
