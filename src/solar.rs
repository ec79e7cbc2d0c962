//! Solar events for one day at one place.
//!
//! The engine only talks to the sun through [`SolarGeometry`] and
//! [`SolarDay`], so a different ephemeris (or a fixed table in tests) can be
//! swapped in. [`Astronomical`] is the built-in model.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

use crate::astronomy::{
    approximate_transit, corrected_hour_angle, corrected_transit, darctan, dtan, julian_day,
    SolarCoordinates,
};
use crate::Coordinates;

/// Altitude of the sun's upper limb at sunrise and sunset, with refraction.
const SOLAR_ALTITUDE: f64 = -50.0 / 60.0;

/// Source of solar events.
pub trait SolarGeometry {
    type Day: SolarDay;

    /// Solar events for `date` (a UTC calendar day), or `None` when transit,
    /// sunrise or sunset cannot be found.
    fn resolve(&self, date: NaiveDate, coordinates: Coordinates) -> Option<Self::Day>;
}

/// A day whose transit, sunrise and sunset are known.
pub trait SolarDay {
    fn transit(&self) -> DateTime<Utc>;
    fn sunrise(&self) -> DateTime<Utc>;
    fn sunset(&self) -> DateTime<Utc>;

    /// When an object's shadow reaches `shadow_length` times its height plus
    /// its noon shadow.
    fn afternoon(&self, shadow_length: f64) -> Option<DateTime<Utc>>;

    /// When the sun's altitude equals `angle` degrees (negative below the
    /// horizon), before or after transit.
    fn time_for_solar_angle(&self, angle: f64, after_transit: bool) -> Option<DateTime<Utc>>;
}

/// The built-in low precision solar model.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Astronomical;

impl SolarGeometry for Astronomical {
    type Day = SolarTime;

    fn resolve(&self, date: NaiveDate, coordinates: Coordinates) -> Option<SolarTime> {
        SolarTime::new(date, coordinates)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTime {
    midnight: DateTime<Utc>,
    coordinates: Coordinates,
    approx_transit: f64,
    sidereal_time: f64,
    right_ascension: [f64; 3], // today, yesterday, tomorrow
    declination: [f64; 3],     // today, yesterday, tomorrow
    transit: DateTime<Utc>,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
}

impl SolarTime {
    pub fn new(date: NaiveDate, coordinates: Coordinates) -> Option<Self> {
        let jd = julian_day(date.year(), date.month(), date.day(), 0.0);

        let prev = SolarCoordinates::new(jd - 1.0);
        let solar = SolarCoordinates::new(jd);
        let next = SolarCoordinates::new(jd + 1.0);

        let right_ascension = [
            solar.right_ascension,
            prev.right_ascension,
            next.right_ascension,
        ];
        let declination = [solar.declination, prev.declination, next.declination];

        let sidereal_time = solar.apparent_sidereal_time;
        let approx_transit = approximate_transit(
            coordinates.longitude,
            sidereal_time,
            solar.right_ascension,
        );
        let midnight = date.and_time(NaiveTime::MIN).and_utc();

        let transit = corrected_transit(
            approx_transit,
            coordinates.longitude,
            sidereal_time,
            right_ascension,
        );
        let hour_angle = |after_transit| {
            corrected_hour_angle(
                approx_transit,
                SOLAR_ALTITUDE,
                coordinates.latitude,
                coordinates.longitude,
                after_transit,
                sidereal_time,
                right_ascension,
                declination,
            )
        };

        Some(Self {
            transit: from_hours(midnight, transit)?,
            sunrise: from_hours(midnight, hour_angle(false))?,
            sunset: from_hours(midnight, hour_angle(true))?,
            midnight,
            coordinates,
            approx_transit,
            sidereal_time,
            right_ascension,
            declination,
        })
    }
}

impl SolarDay for SolarTime {
    fn transit(&self) -> DateTime<Utc> {
        self.transit
    }

    fn sunrise(&self) -> DateTime<Utc> {
        self.sunrise
    }

    fn sunset(&self) -> DateTime<Utc> {
        self.sunset
    }

    fn afternoon(&self, shadow_length: f64) -> Option<DateTime<Utc>> {
        let tangent = (self.coordinates.latitude - self.declination[0]).abs();
        let inverse = shadow_length + dtan(tangent);
        let angle = darctan(1.0 / inverse);
        self.time_for_solar_angle(angle, true)
    }

    fn time_for_solar_angle(&self, angle: f64, after_transit: bool) -> Option<DateTime<Utc>> {
        let hours = corrected_hour_angle(
            self.approx_transit,
            angle,
            self.coordinates.latitude,
            self.coordinates.longitude,
            after_transit,
            self.sidereal_time,
            self.right_ascension,
            self.declination,
        );
        from_hours(self.midnight, hours)
    }
}

/* fractional hours after midnight to an instant, truncated to the second */
fn from_hours(midnight: DateTime<Utc>, value: f64) -> Option<DateTime<Utc>> {
    if !value.is_finite() {
        return None;
    }
    let hours = value.floor();
    let minutes = ((value - hours) * 60.0).floor();
    let seconds = ((value - (hours + minutes / 60.0)) * 60.0 * 60.0).floor();
    let offset = Duration::try_seconds((hours * 3600.0 + minutes * 60.0 + seconds) as i64)?;
    midnight.checked_add_signed(offset)
}
