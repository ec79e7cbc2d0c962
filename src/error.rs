use chrono::NaiveDate;
use thiserror::Error;

use crate::Coordinates;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Transit, sunrise or sunset has no solution for this day, e.g. polar
    /// day or polar night. Computing the same inputs again fails the same way.
    #[error("sun position cannot be resolved on {date} at {coordinates}")]
    Unresolvable {
        date: NaiveDate,
        coordinates: Coordinates,
    },

    #[error("latitude out of range: {0}")]
    LatitudeOutOfRange(f64),

    #[error("longitude out of range: {0}")]
    LongitudeOutOfRange(f64),
}
