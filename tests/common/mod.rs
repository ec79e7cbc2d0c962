#![allow(dead_code)]

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use salat_times::{
    AdjustingMethod, CalculationParameters, Coordinates, Rounding, SolarDay, SolarGeometry,
};

/// Solar events at fixed hours after each day's 00:00 UTC.
#[derive(Debug, Clone, PartialEq)]
pub struct StubGeometry {
    pub sunrise: f64,
    pub transit: f64,
    pub sunset: f64,
    pub asr: Option<f64>,
    // (altitude in degrees, after transit, hours)
    pub crossings: Vec<(f64, bool, f64)>,
    pub unresolved: Vec<NaiveDate>,
}

impl Default for StubGeometry {
    fn default() -> Self {
        Self {
            sunrise: 6.0,
            transit: 12.0,
            sunset: 18.0,
            asr: Some(15.5),
            crossings: Vec::new(),
            unresolved: Vec::new(),
        }
    }
}

impl StubGeometry {
    pub fn crossing(mut self, angle: f64, after_transit: bool, hours: f64) -> Self {
        self.crossings.push((angle, after_transit, hours));
        self
    }

    pub fn unresolved(mut self, date: NaiveDate) -> Self {
        self.unresolved.push(date);
        self
    }
}

pub struct StubDay {
    midnight: DateTime<Utc>,
    geometry: StubGeometry,
}

impl SolarGeometry for StubGeometry {
    type Day = StubDay;

    fn resolve(&self, date: NaiveDate, _coordinates: Coordinates) -> Option<StubDay> {
        if self.unresolved.contains(&date) {
            return None;
        }
        Some(StubDay {
            midnight: midnight(date),
            geometry: self.clone(),
        })
    }
}

impl SolarDay for StubDay {
    fn transit(&self) -> DateTime<Utc> {
        hours_after(self.midnight, self.geometry.transit)
    }

    fn sunrise(&self) -> DateTime<Utc> {
        hours_after(self.midnight, self.geometry.sunrise)
    }

    fn sunset(&self) -> DateTime<Utc> {
        hours_after(self.midnight, self.geometry.sunset)
    }

    fn afternoon(&self, _shadow_length: f64) -> Option<DateTime<Utc>> {
        self.geometry.asr.map(|hours| hours_after(self.midnight, hours))
    }

    fn time_for_solar_angle(&self, angle: f64, after_transit: bool) -> Option<DateTime<Utc>> {
        self.geometry
            .crossings
            .iter()
            .find(|&&(a, after, _)| a == angle && after == after_transit)
            .map(|&(_, _, hours)| hours_after(self.midnight, hours))
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

pub fn hours_after(midnight: DateTime<Utc>, hours: f64) -> DateTime<Utc> {
    midnight + Duration::milliseconds((hours * 3_600_000.0).round() as i64)
}

pub fn mid_latitude() -> Coordinates {
    Coordinates {
        latitude: 35.0,
        longitude: 0.0,
    }
}

/// Angle-based parameters with nothing applied after the fact: no
/// adjustments, whole seconds instead of minutes, half-night safe limits.
pub fn plain_params() -> CalculationParameters {
    CalculationParameters {
        high_latitude_rule: Some(AdjustingMethod::MidNight),
        rounding: Rounding::None,
        ..CalculationParameters::with_angles(18.0, 17.0)
    }
}
