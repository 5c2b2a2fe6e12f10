use std::str::FromStr;

use crate::error::{Error, Field, GeopointError};

/// A parsed `lat lng [alt] [accuracy]` record.
///
/// Only latitude and longitude take part in area and distance; altitude and
/// accuracy are kept so callers can inspect what was validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geopoint {
    pub lat: f64,
    pub lng: f64,
    pub altitude: Option<f64>,
    pub accuracy: Option<f64>,
}

/// Trims surrounding whitespace and splits on single spaces.
///
/// Consecutive spaces yield empty tokens.
pub fn tokenize(raw: &str) -> Vec<&str> {
    raw.trim().split(' ').collect()
}

/// Splits a semicolon-joined geotrace/geoshape into its geopoint strings.
pub fn split_geotrace(trace: &str) -> Vec<&str> {
    trace
        .split(';')
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

fn parse_number(token: &str, field: Field) -> Result<f64, GeopointError> {
    if token.is_empty() {
        return Err(GeopointError::Empty(field));
    }
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        // Only the spelled-out `Infinity` counts; `inf` and friends do not.
        Ok(value) if value.is_infinite() && token.trim_start_matches(['+', '-']) == "Infinity" => {
            Ok(value)
        }
        _ => Err(GeopointError::InvalidFormat {
            field,
            token: token.to_string(),
        }),
    }
}

/// Altitude and accuracy read an empty token as zero.
fn parse_optional_number(token: &str, field: Field) -> Result<f64, GeopointError> {
    if token.is_empty() {
        return Ok(0.0);
    }
    parse_number(token, field)
}

impl Geopoint {
    pub fn from_tokens(tokens: &[&str]) -> Result<Self, GeopointError> {
        if !(2..=4).contains(&tokens.len()) {
            return Err(GeopointError::TokenCount(tokens.len()));
        }

        let lat = parse_number(tokens[0], Field::Latitude)?;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeopointError::LatitudeOutOfRange(lat));
        }

        let lng = parse_number(tokens[1], Field::Longitude)?;
        if !(-180.0..=180.0).contains(&lng) {
            return Err(GeopointError::LongitudeOutOfRange(lng));
        }

        let altitude = tokens
            .get(2)
            .map(|token| parse_optional_number(token, Field::Altitude))
            .transpose()?;

        let accuracy = tokens
            .get(3)
            .map(|token| parse_optional_number(token, Field::Accuracy))
            .transpose()?;
        if let Some(accuracy) = accuracy {
            if accuracy < 0.0 {
                return Err(GeopointError::NegativeAccuracy(accuracy));
            }
        }

        Ok(Self {
            lat,
            lng,
            altitude,
            accuracy,
        })
    }
}

impl FromStr for Geopoint {
    type Err = GeopointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Geopoint::from_tokens(&tokenize(s))
    }
}

/// Parses every geopoint or fails on the first invalid one.
pub fn parse_geopoints<S: AsRef<str>>(geopoints: &[S]) -> Result<Vec<Geopoint>, Error> {
    geopoints
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let raw = raw.as_ref();
            raw.parse::<Geopoint>()
                .map_err(|source| Error::InvalidGeopoint {
                    index,
                    raw: raw.to_string(),
                    source,
                })
        })
        .collect()
}

/// True iff every geopoint in the list is valid. An empty list is valid.
pub fn is_valid<S: AsRef<str>>(geopoints: &[S]) -> bool {
    geopoints
        .iter()
        .all(|raw| raw.as_ref().parse::<Geopoint>().is_ok())
}
