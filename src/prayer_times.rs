use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use log::{debug, trace};

use crate::solar::{Astronomical, SolarDay, SolarGeometry};
use crate::twilight::{season_adjusted_evening_twilight, season_adjusted_morning_twilight};
use crate::{
    round_minute, CalculationMethod, CalculationParameters, Coordinates, Error, Prayer,
    PrayerTime, Rounding,
};

type TimeMap = [Option<DateTime<Utc>>; Prayer::COUNT];

/// Prayer times for one place on one UTC calendar day.
///
/// A prayer the sun cannot place (Asr near the poles, midnight when the next
/// day fails) is simply missing from the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerTimes {
    coordinates: Coordinates,
    date: NaiveDate,
    params: CalculationParameters,
    times: TimeMap,
}

impl PrayerTimes {
    /// Times from the built-in solar model, midnight included.
    pub fn new(
        coordinates: Coordinates,
        date: NaiveDate,
        params: &CalculationParameters,
    ) -> Result<Self, Error> {
        Self::calculate(&Astronomical, coordinates, date, params, true)
    }

    /// Times from `geometry`. With `extended_night` the next day is computed
    /// too, to place midnight and the last third of the night.
    pub fn calculate<G: SolarGeometry>(
        geometry: &G,
        coordinates: Coordinates,
        date: NaiveDate,
        params: &CalculationParameters,
        extended_night: bool,
    ) -> Result<Self, Error> {
        use Prayer::*;

        let unresolvable = |date| Error::Unresolvable { date, coordinates };
        let year = date.year();
        let day_of_year = date.ordinal();
        let tomorrow = date.succ_opt().ok_or(unresolvable(date))?;

        let solar = geometry
            .resolve(date, coordinates)
            .ok_or(unresolvable(date))?;
        let tomorrow_solar = geometry
            .resolve(tomorrow, coordinates)
            .ok_or(unresolvable(tomorrow))?;

        let sunrise = solar.sunrise();
        let sunset = solar.sunset();

        let mut times: TimeMap = [None; Prayer::COUNT];
        times[Sunrise as usize] = Some(sunrise);
        times[Sunset as usize] = Some(sunset);
        times[Maghrib as usize] = Some(sunset);
        times[Dhuhr as usize] = Some(solar.transit());
        times[Asr as usize] = solar.afternoon(params.madhab.shadow_length());

        // sunset to sunrise
        let night = tomorrow_solar.sunrise() - sunset;
        let moonsighting = params.method == CalculationMethod::MoonsightingCommittee;
        let one_seventh = params.moonsighting_high_latitude(coordinates);
        let portions = params.night_portions(coordinates);
        if one_seventh {
            debug!("{date}: seventh of the night at {coordinates}, twilight angles ignored");
        }

        // Fajr, never earlier than the safe value
        let fajr = if one_seventh {
            Some(sunrise - night / 7)
        } else {
            solar.time_for_solar_angle(-params.fajr_angle, false)
        };
        let safe_fajr = if moonsighting {
            season_adjusted_morning_twilight(coordinates.latitude, day_of_year, year, sunrise)
        } else {
            sunrise - night_fraction(night, portions.fajr)
        };
        times[Fajr as usize] = match fajr {
            Some(fajr) if fajr >= safe_fajr => Some(fajr),
            _ => {
                debug!("{date}: fajr {fajr:?} replaced by safe value {safe_fajr}");
                Some(safe_fajr)
            }
        };

        // Isha, never later than the safe value
        times[Isha as usize] = if params.isha_interval > 0 {
            times[Maghrib as usize].map(|maghrib| maghrib + Duration::minutes(params.isha_interval))
        } else {
            let isha = if one_seventh {
                Some(sunset + night / 7)
            } else {
                solar.time_for_solar_angle(-params.isha_angle, true)
            };
            let safe_isha = if moonsighting {
                season_adjusted_evening_twilight(
                    coordinates.latitude,
                    day_of_year,
                    year,
                    sunset,
                    params.shafaq,
                )
            } else {
                sunset + night_fraction(night, portions.isha)
            };
            match isha {
                Some(isha) if isha <= safe_isha => Some(isha),
                _ => {
                    debug!("{date}: isha {isha:?} replaced by safe value {safe_isha}");
                    Some(safe_isha)
                }
            }
        };

        // Maghrib by angle, only when it lands between sunset and isha
        if let Some(angle) = params.maghrib_angle {
            match solar.time_for_solar_angle(-angle, true) {
                Some(maghrib)
                    if sunset < maghrib
                        && times[Isha as usize].map_or(true, |isha| maghrib < isha) =>
                {
                    times[Maghrib as usize] = Some(maghrib);
                }
                candidate => debug!("{date}: maghrib at {angle} degrees rejected: {candidate:?}"),
            }
        }

        if extended_night {
            let next = Self::calculate(geometry, coordinates, tomorrow, params, false);
            match (next, times[Maghrib as usize]) {
                (Ok(next), Some(maghrib)) => {
                    if let Some(next_fajr) = next.time(Fajr) {
                        let night = next_fajr - maghrib;
                        times[Midnight as usize] =
                            Some(round_minute(maghrib + night / 2, Rounding::Nearest));
                        times[TwoThirdNight as usize] =
                            Some(round_minute(maghrib + night * 2 / 3, Rounding::Nearest));
                    }
                }
                (Err(err), _) => debug!("{date}: no midnight, {err}"),
                (Ok(_), None) => debug!("{date}: no midnight without maghrib"),
            }
        }

        let times = finalize(&times, params);
        trace!("{date} at {coordinates}: {times:?}");

        Ok(Self {
            coordinates,
            date,
            params: *params,
            times,
        })
    }

    pub fn time(&self, prayer: Prayer) -> Option<DateTime<Utc>> {
        self.times[prayer as usize]
    }

    /// One entry per requested prayer, in the order given.
    pub fn prayer_times(&self, prayers: &[Prayer]) -> Vec<Option<PrayerTime>> {
        prayers
            .iter()
            .map(|&prayer| self.time(prayer).map(|time| PrayerTime::new(prayer, time)))
            .collect()
    }

    pub fn fajr(&self) -> Option<DateTime<Utc>> {
        self.time(Prayer::Fajr)
    }

    pub fn sunrise(&self) -> Option<DateTime<Utc>> {
        self.time(Prayer::Sunrise)
    }

    pub fn dhuhr(&self) -> Option<DateTime<Utc>> {
        self.time(Prayer::Dhuhr)
    }

    pub fn asr(&self) -> Option<DateTime<Utc>> {
        self.time(Prayer::Asr)
    }

    pub fn sunset(&self) -> Option<DateTime<Utc>> {
        self.time(Prayer::Sunset)
    }

    pub fn maghrib(&self) -> Option<DateTime<Utc>> {
        self.time(Prayer::Maghrib)
    }

    pub fn isha(&self) -> Option<DateTime<Utc>> {
        self.time(Prayer::Isha)
    }

    pub fn midnight(&self) -> Option<DateTime<Utc>> {
        self.time(Prayer::Midnight)
    }

    pub fn two_third_night(&self) -> Option<DateTime<Utc>> {
        self.time(Prayer::TwoThirdNight)
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn params(&self) -> &CalculationParameters {
        &self.params
    }
}

/* portion of the night, to the millisecond */
fn night_fraction(night: Duration, portion: f64) -> Duration {
    Duration::milliseconds((night.num_milliseconds() as f64 * portion).round() as i64)
}

/* add manual and method adjustments, then round */
fn finalize(times: &TimeMap, params: &CalculationParameters) -> TimeMap {
    let mut finalized: TimeMap = [None; Prayer::COUNT];
    for prayer in Prayer::ALL {
        let minutes =
            params.adjustments.minutes(prayer) + params.method_adjustments.minutes(prayer);
        finalized[prayer as usize] = times[prayer as usize]
            .map(|time| round_minute(time + Duration::minutes(minutes), params.rounding));
    }
    finalized
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    use super::{finalize, night_fraction, TimeMap};
    use crate::{CalculationParameters, Prayer, PrayerAdjustments, Rounding};

    #[test]
    fn test_night_fraction() {
        let night = Duration::hours(12);
        assert_eq!(night_fraction(night, 0.5), Duration::hours(6));
        assert_eq!(night_fraction(night, 1.0 / 7.0), Duration::milliseconds(6_171_429));
        assert_eq!(night_fraction(night, 0.0), Duration::zero());
    }

    #[test]
    fn test_finalize_skips_missing_entries() {
        let time = Utc.with_ymd_and_hms(2024, 1, 1, 5, 0, 40).unwrap();
        let mut times: TimeMap = [None; Prayer::COUNT];
        times[Prayer::Fajr as usize] = Some(time);
        times[Prayer::Dhuhr as usize] = Some(time);

        let params = CalculationParameters {
            adjustments: PrayerAdjustments {
                fajr: 2,
                ..Default::default()
            },
            method_adjustments: PrayerAdjustments {
                fajr: -1,
                dhuhr: 3,
                ..Default::default()
            },
            rounding: Rounding::Nearest,
            ..CalculationParameters::with_angles(18.0, 17.0)
        };
        let finalized = finalize(&times, &params);

        assert_eq!(
            finalized[Prayer::Fajr as usize],
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 5, 2, 0).unwrap())
        );
        assert_eq!(
            finalized[Prayer::Dhuhr as usize],
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 5, 4, 0).unwrap())
        );
        assert_eq!(finalized[Prayer::Asr as usize], None);
        assert_eq!(finalized[Prayer::Midnight as usize], None);
    }

    #[test]
    fn test_date_overflow_is_unresolvable() {
        let params = CalculationParameters::default();
        let coordinates = crate::Coordinates {
            latitude: 21.4225,
            longitude: 39.8262,
        };
        assert!(super::PrayerTimes::new(coordinates, NaiveDate::MAX, &params).is_err());
    }
}
