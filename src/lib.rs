//! Spherical-earth area and length of geopoint lists.
//!
//! A geopoint is a string `"lat lng [alt] [accuracy]"`. Invalid input makes
//! [`area`] and [`distance`] return NaN; [`try_area`] and [`try_distance`]
//! return the reason instead.

mod error;
mod geo;
mod geopoint;

pub use error::{Error, Field, GeopointError};
pub use geo::{
    area, distance, haversine_meters, try_area, try_distance, Calculator,
    EARTH_EQUATORIAL_RADIUS_METERS, PRECISION,
};
pub use geopoint::{is_valid, parse_geopoints, split_geotrace, tokenize, Geopoint};
