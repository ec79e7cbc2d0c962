//! Seasonal twilight model of the Moonsighting Committee.
//!
//! Instead of a depression angle, fajr and isha are a number of minutes
//! from sunrise and sunset that grows with latitude and follows the seasons.
//! The model always yields a value, which makes it usable where the sun never
//! reaches the usual twilight angles.

use chrono::{DateTime, Duration, Utc};

use crate::Shafaq;

/// Fajr for the day `day` (1-based day of `year`) with the given sunrise.
pub fn season_adjusted_morning_twilight(
    latitude: f64,
    day: u32,
    year: i32,
    sunrise: DateTime<Utc>,
) -> DateTime<Utc> {
    let a = 75.0 + 28.65 / 55.0 * latitude.abs();
    let b = 75.0 + 19.44 / 55.0 * latitude.abs();
    let c = 75.0 + 32.74 / 55.0 * latitude.abs();
    let d = 75.0 + 48.10 / 55.0 * latitude.abs();

    let minutes = seasonal_minutes([a, b, c, d], days_since_solstice(day, year, latitude));
    sunrise + Duration::seconds((minutes * -60.0).round() as i64)
}

/// Isha for the day `day` (1-based day of `year`) with the given sunset.
pub fn season_adjusted_evening_twilight(
    latitude: f64,
    day: u32,
    year: i32,
    sunset: DateTime<Utc>,
    shafaq: Shafaq,
) -> DateTime<Utc> {
    let (base, coefficients) = match shafaq {
        Shafaq::General => (75.0, [25.60, 2.050, -9.21, 6.14]),
        Shafaq::Ahmer => (62.0, [17.40, -7.16, 5.12, 19.44]),
        Shafaq::Abyad => (75.0, [25.60, 7.16, 36.84, 81.84]),
    };
    let anchors = coefficients.map(|k| base + k / 55.0 * latitude.abs());

    let minutes = seasonal_minutes(anchors, days_since_solstice(day, year, latitude));
    sunset + Duration::seconds((minutes * 60.0).round() as i64)
}

/* piecewise linear walk a -> b -> c -> d -> c -> b -> a over the year */
fn seasonal_minutes([a, b, c, d]: [f64; 4], dyy: u32) -> f64 {
    let dyy = f64::from(dyy);
    if dyy < 91.0 {
        a + (b - a) / 91.0 * dyy
    } else if dyy < 137.0 {
        b + (c - b) / 46.0 * (dyy - 91.0)
    } else if dyy < 183.0 {
        c + (d - c) / 46.0 * (dyy - 137.0)
    } else if dyy < 229.0 {
        d + (c - d) / 46.0 * (dyy - 183.0)
    } else if dyy < 275.0 {
        c + (b - c) / 46.0 * (dyy - 229.0)
    } else {
        b + (a - b) / 91.0 * (dyy - 275.0)
    }
}

/* days since the local winter solstice */
pub(crate) fn days_since_solstice(day: u32, year: i32, latitude: f64) -> u32 {
    let leap = is_leap_year(year);
    let northern_offset = 10;
    let southern_offset = if leap { 173 } else { 172 };
    let days_in_year = if leap { 366 } else { 365 };

    let day = day as i32;
    let days = if latitude >= 0.0 {
        let days = day + northern_offset;
        if days >= days_in_year {
            days - days_in_year
        } else {
            days
        }
    } else {
        let days = day - southern_offset;
        if days < 0 {
            days + days_in_year
        } else {
            days
        }
    };
    days as u32
}

fn is_leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use super::*;

    fn sunrise() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2016, 1, 31, 12, 16, 0).unwrap()
    }

    #[test]
    fn test_days_since_solstice() {
        // northern hemisphere
        assert_eq!(days_since_solstice(1, 2016, 35.0), 11);
        assert_eq!(days_since_solstice(355, 2015, 35.0), 0);
        assert_eq!(days_since_solstice(356, 2016, 35.0), 0);
        assert_eq!(days_since_solstice(365, 2015, 35.0), 10);
        assert_eq!(days_since_solstice(172, 2015, 35.0), 182);

        // southern hemisphere
        assert_eq!(days_since_solstice(172, 2015, -35.0), 0);
        assert_eq!(days_since_solstice(173, 2016, -35.0), 0);
        assert_eq!(days_since_solstice(1, 2015, -35.0), 194);
        assert_eq!(days_since_solstice(1, 2016, -35.0), 194);
    }

    #[test]
    fn test_equator_is_flat() {
        for day in [1, 91, 150, 200, 250, 300, 365] {
            assert_eq!(
                season_adjusted_morning_twilight(0.0, day, 2015, sunrise()),
                sunrise() - Duration::minutes(75)
            );
            assert_eq!(
                season_adjusted_evening_twilight(0.0, day, 2015, sunrise(), Shafaq::Ahmer),
                sunrise() + Duration::minutes(62)
            );
        }
    }

    #[test]
    fn test_seasonal_minutes_anchors() {
        let anchors = [10.0, 20.0, 30.0, 40.0];
        let expected = [
            (0, 10.0),
            (91, 20.0),
            (137, 30.0),
            (183, 40.0),
            (229, 30.0),
            (275, 20.0),
            (366, 10.0),
        ];
        for (dyy, expected) in expected {
            let minutes = seasonal_minutes(anchors, dyy);
            assert!((minutes - expected).abs() < 1e-9, "day {dyy}: {minutes}");
        }
    }

    #[test]
    fn test_twilight_grows_with_latitude() {
        let low = season_adjusted_morning_twilight(30.0, 31, 2016, sunrise());
        let high = season_adjusted_morning_twilight(55.0, 31, 2016, sunrise());
        assert!(high < low && low < sunrise());

        let general =
            season_adjusted_evening_twilight(55.0, 31, 2016, sunrise(), Shafaq::General);
        let abyad = season_adjusted_evening_twilight(55.0, 31, 2016, sunrise(), Shafaq::Abyad);
        assert!(sunrise() < general && general < abyad);
    }
}
