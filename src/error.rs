use thiserror::Error;

/// Which token of a geopoint string a [`GeopointError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Latitude,
    Longitude,
    Altitude,
    Accuracy,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::Altitude => "altitude",
            Field::Accuracy => "accuracy",
        };
        f.write_str(name)
    }
}

/// Why a single geopoint string was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeopointError {
    #[error("expected 2 to 4 space-separated tokens, found {0}")]
    TokenCount(usize),

    #[error("{0} is empty")]
    Empty(Field),

    #[error("{field} '{token}' is not a number")]
    InvalidFormat { field: Field, token: String },

    #[error("latitude {0} is out of range (valid: -90..=90)")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is out of range (valid: -180..=180)")]
    LongitudeOutOfRange(f64),

    #[error("accuracy {0} is negative")]
    NegativeAccuracy(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("geopoint {index} ('{raw}'): {source}")]
    InvalidGeopoint {
        index: usize,
        raw: String,
        #[source]
        source: GeopointError,
    },

    #[error("invalid calculator configuration: {0}")]
    InvalidConfig(String),
}
