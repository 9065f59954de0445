use crate::{GeoError, Result};
use std::{
	fmt::{self, Display},
	str::FromStr,
};

/// Hemisphere marker of a DMS angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardinalDirection {
	North,
	South,
	East,
	West,
}

impl CardinalDirection {
	fn is_negative(self) -> bool {
		matches!(self, CardinalDirection::South | CardinalDirection::West)
	}

	#[must_use]
	pub fn as_char(self) -> char {
		match self {
			CardinalDirection::North => 'N',
			CardinalDirection::South => 'S',
			CardinalDirection::East => 'E',
			CardinalDirection::West => 'W',
		}
	}
}

impl FromStr for CardinalDirection {
	type Err = GeoError;

	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_ascii_uppercase().as_str() {
			"N" => Ok(CardinalDirection::North),
			"S" => Ok(CardinalDirection::South),
			"E" => Ok(CardinalDirection::East),
			"W" => Ok(CardinalDirection::West),
			_ => Err(GeoError::Parse {
				message: format!("unknown cardinal direction '{s}'"),
				position: 0,
			}),
		}
	}
}

/// An angle in degrees, minutes and seconds.
///
/// Converting a decimal angle to DMS and back is stable to within floating point
/// rounding, but not bit exact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dms {
	pub degrees: u32,
	pub minutes: u32,
	pub seconds: f64,
	pub direction: Option<CardinalDirection>,
}

impl Dms {
	#[must_use]
	pub fn new(degrees: u32, minutes: u32, seconds: f64, direction: Option<CardinalDirection>) -> Self {
		Self {
			degrees,
			minutes,
			seconds,
			direction,
		}
	}

	/// Decimal degrees, negative for `S` and `W`.
	#[must_use]
	pub fn to_decimal(&self) -> f64 {
		let value = f64::from(self.degrees) + f64::from(self.minutes) / 60.0 + self.seconds / 3600.0;
		match self.direction {
			Some(direction) if direction.is_negative() => -value,
			_ => value,
		}
	}

	/// Decomposes the absolute value of `value`; the sign is dropped.
	pub fn from_decimal(value: f64) -> Result<Self> {
		if !value.is_finite() {
			return Err(GeoError::InvalidCoordinate(format!("cannot convert {value} to DMS")));
		}
		let value = value.abs();
		let degrees = value.floor();
		let rest = (value - degrees) * 60.0;
		let minutes = rest.floor();
		let seconds = (rest - minutes) * 60.0;

		#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
		Ok(Self::new(degrees as u32, minutes as u32, seconds, None))
	}

	/// DMS form of a latitude, marked `N` or `S`.
	pub fn from_latitude(latitude: f64) -> Result<Self> {
		if !(-90.0..=90.0).contains(&latitude) {
			return Err(GeoError::InvalidCoordinate(format!("latitude {latitude} out of range")));
		}
		let direction = if latitude < 0.0 {
			CardinalDirection::South
		} else {
			CardinalDirection::North
		};
		Ok(Self {
			direction: Some(direction),
			..Self::from_decimal(latitude)?
		})
	}

	/// DMS form of a longitude, marked `E` or `W`.
	pub fn from_longitude(longitude: f64) -> Result<Self> {
		if !(-180.0..=180.0).contains(&longitude) {
			return Err(GeoError::InvalidCoordinate(format!("longitude {longitude} out of range")));
		}
		let direction = if longitude < 0.0 {
			CardinalDirection::West
		} else {
			CardinalDirection::East
		};
		Ok(Self {
			direction: Some(direction),
			..Self::from_decimal(longitude)?
		})
	}
}

impl Display for Dms {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}°{}'{}\"", self.degrees, self.minutes, self.seconds)?;
		if let Some(direction) = self.direction {
			write!(f, "{}", direction.as_char())?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use rstest::rstest;

	#[rstest]
	#[case(52, 31, 12.0, Some(CardinalDirection::North), 52.52)]
	#[case(33, 52, 4.8, Some(CardinalDirection::South), -33.868)]
	#[case(122, 25, 9.48, Some(CardinalDirection::West), -122.4193)]
	#[case(0, 30, 0.0, None, 0.5)]
	fn to_decimal(
		#[case] degrees: u32,
		#[case] minutes: u32,
		#[case] seconds: f64,
		#[case] direction: Option<CardinalDirection>,
		#[case] expected: f64,
	) {
		let dms = Dms::new(degrees, minutes, seconds, direction);
		assert_abs_diff_eq!(dms.to_decimal(), expected, epsilon = 1e-9);
	}

	#[test]
	fn from_latitude() {
		let dms = Dms::from_latitude(-33.868).unwrap();
		assert_eq!(dms.degrees, 33);
		assert_eq!(dms.minutes, 52);
		assert_abs_diff_eq!(dms.seconds, 4.8, epsilon = 1e-6);
		assert_eq!(dms.direction, Some(CardinalDirection::South));
		assert!(Dms::from_latitude(91.0).is_err());
	}

	#[test]
	fn from_longitude() {
		let dms = Dms::from_longitude(13.405).unwrap();
		assert_eq!((dms.degrees, dms.minutes), (13, 24));
		assert_abs_diff_eq!(dms.seconds, 18.0, epsilon = 1e-6);
		assert_eq!(dms.direction, Some(CardinalDirection::East));
		assert!(Dms::from_longitude(-180.5).is_err());
	}

	// the round trip holds within rounding, not bit for bit
	#[rstest]
	#[case(52.520_008)]
	#[case(-0.127_758)]
	#[case(179.999_999)]
	fn round_trip_is_stable(#[case] value: f64) {
		let back = Dms::from_longitude(value).unwrap().to_decimal();
		assert_abs_diff_eq!(back, value, epsilon = 1e-9);
	}

	#[test]
	fn parse_direction_and_display() {
		assert_eq!("w".parse::<CardinalDirection>().unwrap(), CardinalDirection::West);
		assert!("X".parse::<CardinalDirection>().is_err());
		let dms = Dms::new(10, 5, 30.0, Some(CardinalDirection::North));
		assert_eq!(dms.to_string(), "10°5'30\"N");
		assert!(Dms::from_decimal(f64::NAN).is_err());
	}
}
