/*-------------------------- In the name of God ----------------------------*\

    salat_times (rust)
    Islamic prayer times engine
    Solar events in, a finalized daily prayer table out

----------------------------- Copyright Block --------------------------------

License: GNU GPL v3.0

TERMS OF USE:
    Permission is granted to use this code, with or
    without modification, in any website or application
    provided that credit is given to the original work.

This program is distributed in the hope that it will
be useful, but WITHOUT ANY WARRANTY.

PLEASE DO NOT REMOVE THIS COPYRIGHT BLOCK.

------------------------------------------------------------------------------

Solar and twilight models adapted from Adhan
https://github.com/batoulapps/adhan

    Copyright (c) 2018 Batoul Apps

    Permission is hereby granted, free of charge, to any person obtaining
    a copy of this software and associated documentation files (the
    "Software"), to deal in the Software without restriction, including
    without limitation the rights to use, copy, modify, merge, publish,
    distribute, sublicense, and/or sell copies of the Software, and to
    permit persons to whom the Software is furnished to do so, subject to
    the following conditions:

    The above copyright notice and this permission notice shall be
    included in all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
    EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
    MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
    NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
    LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
    OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
    WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

------------------------------------------------------------------------------

Calculating Formulas:
Jean Meeus, Astronomical Algorithms (2nd ed.), chapters 7, 12, 13, 15, 22, 25
Moonsighting Committee seasonal twilight, as implemented in Adhan

\*--------------------------------------------------------------------------*/

//! Prayer times for a date and a place.
//!
//! [`PrayerTimes::new`] builds one day's table from the built-in solar model,
//! [`PrayerTimes::calculate`] does the same with any [`SolarGeometry`], and
//! [`next_prayer`] looks across yesterday, today and tomorrow for the first
//! prayer after a given instant. Every instant is in UTC; converting to local
//! time is left to the caller.

use std::fmt;

use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod astronomy;
pub mod easy;
mod error;
mod next;
mod params;
mod prayer_times;
mod rounding;
pub mod solar;
pub mod twilight;

pub use error::Error;
pub use next::{next_prayer, next_prayer_with};
pub use params::{
    AdjustingMethod, CalculationMethod, CalculationParameters, JuristicMethod, NightPortions,
    PrayerAdjustments, Shafaq,
};
pub use prayer_times::PrayerTimes;
pub use rounding::{round_minute, Rounding};
pub use solar::{Astronomical, SolarDay, SolarGeometry, SolarTime};

// Prayers, in the order they fall over one civil day
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Prayer {
    Fajr = 0,
    Sunrise,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
    Midnight,
    TwoThirdNight,
}

impl Prayer {
    pub const COUNT: usize = 9;

    pub const ALL: [Prayer; Prayer::COUNT] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Sunset,
        Prayer::Maghrib,
        Prayer::Isha,
        Prayer::Midnight,
        Prayer::TwoThirdNight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Sunset => "Sunset",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
            Prayer::Midnight => "Midnight",
            Prayer::TwoThirdNight => "Two-thirds of the night",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of a [`PrayerTimes`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrayerTime {
    pub prayer: Prayer,
    pub time: DateTime<Utc>,
}

impl PrayerTime {
    pub fn new(prayer: Prayer, time: DateTime<Utc>) -> Self {
        Self { prayer, time }
    }
}

/// A point on the Earth, in degrees. North and east are positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Checked constructor. The engine itself accepts any value, so building
    /// the struct literally skips this check.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, Error> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Coordinates, Error, Prayer};

    #[test]
    fn test_prayer_order_matches_discriminants() {
        for (i, prayer) in Prayer::ALL.iter().enumerate() {
            assert_eq!(*prayer as usize, i);
        }
        assert!(Prayer::Fajr < Prayer::TwoThirdNight);
    }

    #[test]
    fn test_coordinates_validation() {
        assert!(Coordinates::new(35.775, -78.6336).is_ok());
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert_eq!(
            Coordinates::new(91.0, 0.0),
            Err(Error::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            Coordinates::new(0.0, -180.5),
            Err(Error::LongitudeOutOfRange(-180.5))
        );
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Prayer::Maghrib.to_string(), "Maghrib");
        let coordinates = Coordinates {
            latitude: 21.5,
            longitude: 39.25,
        };
        assert_eq!(coordinates.to_string(), "(21.5, 39.25)");
    }
}
