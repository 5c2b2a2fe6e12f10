use std::f64::consts::PI;

use crate::error::Error;
use crate::geopoint::{parse_geopoints, Geopoint};

/// Equatorial radius of the spherical earth model, in meters.
pub const EARTH_EQUATORIAL_RADIUS_METERS: f64 = 6_378_100.0;

/// Results are rounded to the nearest `1 / PRECISION`.
pub const PRECISION: f64 = 100.0;

const D2R: f64 = PI / 180.0;

/// Spherical-earth area and length calculator.
///
/// Both the radius and the rounding precision are fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculator {
    radius_meters: f64,
    precision: f64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            radius_meters: EARTH_EQUATORIAL_RADIUS_METERS,
            precision: PRECISION,
        }
    }
}

/// Half-up rounding to the nearest `1 / precision`, sign preserved.
fn round_half_up(value: f64, precision: f64) -> f64 {
    (value * precision + 0.5).floor() / precision
}

impl Calculator {
    pub fn new(radius_meters: f64, precision: f64) -> Result<Self, Error> {
        if !radius_meters.is_finite() || radius_meters <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "radius must be a positive number of meters, got {}",
                radius_meters
            )));
        }
        if !precision.is_finite() || precision <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "precision must be positive, got {}",
                precision
            )));
        }
        Ok(Self {
            radius_meters,
            precision,
        })
    }

    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Half-up rounding to this calculator's precision.
    pub fn round(&self, value: f64) -> f64 {
        round_half_up(value, self.precision)
    }

    /// Great-circle distance using the haversine formula.
    /// Input lat/lng in degrees. Output in meters, unrounded.
    pub fn haversine_meters(&self, lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
        let (phi1, phi2) = (lat1 * D2R, lat2 * D2R);
        let dphi = (lat2 - lat1) * D2R;
        let dlambda = (lng2 - lng1) * D2R;
        let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
        // Rounding can push `a` a hair past 1 for near-antipodal points.
        let a = a.min(1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        self.radius_meters * c
    }

    /// Approximate area enclosed by `points`, closing the ring from the last
    /// point back to the first. Unrounded and signed by winding direction.
    pub fn signed_area_of(&self, points: &[Geopoint]) -> f64 {
        let n = points.len();
        if n < 3 {
            return 0.0;
        }
        let sum: f64 = (0..n)
            .map(|i| {
                let p1 = &points[i];
                let p2 = &points[(i + 1) % n];
                ((p2.lng - p1.lng) * D2R) * (2.0 + (p1.lat * D2R).sin() + (p2.lat * D2R).sin())
            })
            .sum();
        sum * self.radius_meters * self.radius_meters / 2.0
    }

    /// Length of the open polyline through `points`. Unrounded.
    pub fn length_of(&self, points: &[Geopoint]) -> f64 {
        points
            .windows(2)
            .map(|pair| self.haversine_meters(pair[0].lat, pair[0].lng, pair[1].lat, pair[1].lng))
            .sum()
    }

    /// Area in square meters, or the first validation failure.
    pub fn try_area<S: AsRef<str>>(&self, geopoints: &[S]) -> Result<f64, Error> {
        let points = parse_geopoints(geopoints)?;
        Ok(self.round(self.signed_area_of(&points)).abs())
    }

    /// Distance in meters, or the first validation failure.
    pub fn try_distance<S: AsRef<str>>(&self, geopoints: &[S]) -> Result<f64, Error> {
        let points = parse_geopoints(geopoints)?;
        Ok(self.round(self.length_of(&points)).abs())
    }

    /// Area in square meters; NaN when any geopoint is invalid.
    pub fn area<S: AsRef<str>>(&self, geopoints: &[S]) -> f64 {
        self.try_area(geopoints).unwrap_or(f64::NAN)
    }

    /// Distance in meters; NaN when any geopoint is invalid.
    pub fn distance<S: AsRef<str>>(&self, geopoints: &[S]) -> f64 {
        self.try_distance(geopoints).unwrap_or(f64::NAN)
    }
}

/// Area of the closed polygon through `geopoints`, in square meters rounded
/// to 2 decimals. Returns NaN if any geopoint is invalid.
///
/// ```
/// let area = geocalc::area(&["0 0", "0 1", "1 1", "1 0"]);
/// assert!(area > 1.2e10 && area < 1.3e10);
/// assert!(geocalc::area(&["invalid 0", "0 1", "1 1"]).is_nan());
/// ```
pub fn area<S: AsRef<str>>(geopoints: &[S]) -> f64 {
    Calculator::default().area(geopoints)
}

/// Cumulative haversine length of the polyline through `geopoints`, in
/// meters rounded to 2 decimals. Returns NaN if any geopoint is invalid.
///
/// ```
/// assert_eq!(geocalc::distance(&["45 45"]), 0.0);
/// ```
pub fn distance<S: AsRef<str>>(geopoints: &[S]) -> f64 {
    Calculator::default().distance(geopoints)
}

pub fn try_area<S: AsRef<str>>(geopoints: &[S]) -> Result<f64, Error> {
    Calculator::default().try_area(geopoints)
}

pub fn try_distance<S: AsRef<str>>(geopoints: &[S]) -> Result<f64, Error> {
    Calculator::default().try_distance(geopoints)
}

/// Haversine distance of one segment on the default sphere, unrounded.
pub fn haversine_meters(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    Calculator::default().haversine_meters(lat1, lng1, lat2, lng2)
}
