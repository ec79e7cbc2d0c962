// Low precision solar ephemeris (Meeus, Astronomical Algorithms, 2nd ed.)
// All angles are in degrees unless the name says otherwise.

use std::f64::consts::PI;

/* ---------------------- Julian Dates ----------------------- */

pub(crate) fn julian_day(year: i32, month: u32, day: u32, hours: f64) -> f64 {
    let (year, month) = if month > 2 {
        (year, month as i32)
    } else {
        (year - 1, month as i32 + 12)
    };
    let day = day as f64 + hours / 24.0;

    let a = year / 100;
    let b = 2 - a + a / 4;

    let i0 = (365.25 * (year + 4716) as f64) as i64;
    let i1 = (30.6001 * (month + 1) as f64) as i64;

    i0 as f64 + i1 as f64 + day + b as f64 - 1524.5
}

/* julian centuries since J2000.0 */
pub(crate) fn julian_century(jd: f64) -> f64 {
    (jd - 2451545.0) / 36525.0
}

/* ---------------------- Solar Coordinates ----------------------- */

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SolarCoordinates {
    pub declination: f64,
    pub right_ascension: f64,
    pub apparent_sidereal_time: f64,
}

impl SolarCoordinates {
    pub fn new(julian_day: f64) -> Self {
        let t = julian_century(julian_day);
        let l0 = mean_solar_longitude(t);
        let lp = mean_lunar_longitude(t);
        let omega = ascending_lunar_node_longitude(t);
        let lambda = apparent_solar_longitude(t, l0);

        let theta0 = mean_sidereal_time(t);
        let d_psi = nutation_in_longitude(l0, lp, omega);
        let d_epsilon = nutation_in_obliquity(l0, lp, omega);

        let epsilon0 = mean_obliquity_of_the_ecliptic(t);
        let epsilon_app = apparent_obliquity_of_the_ecliptic(t, epsilon0);

        let declination = darcsin(dsin(epsilon_app) * dsin(lambda));
        let right_ascension = fix_angle(darctan2(dcos(epsilon_app) * dsin(lambda), dcos(lambda)));
        let apparent_sidereal_time =
            theta0 + (d_psi * 3600.0) * dcos(epsilon0 + d_epsilon) / 3600.0;

        Self {
            declination,
            right_ascension,
            apparent_sidereal_time,
        }
    }
}

fn mean_solar_longitude(t: f64) -> f64 {
    fix_angle(280.4664567 + 36000.76983 * t + 0.0003032 * t * t)
}

fn mean_lunar_longitude(t: f64) -> f64 {
    fix_angle(218.3165 + 481267.8813 * t)
}

fn ascending_lunar_node_longitude(t: f64) -> f64 {
    fix_angle(125.04452 - 1934.136261 * t + 0.0020708 * t * t + t * t * t / 450000.0)
}

fn mean_solar_anomaly(t: f64) -> f64 {
    fix_angle(357.52911 + 35999.05029 * t - 0.0001537 * t * t)
}

/* equation of the center for mean anomaly m */
fn solar_equation_of_the_center(t: f64, m: f64) -> f64 {
    (1.914602 - 0.004817 * t - 0.000014 * t * t) * dsin(m)
        + (0.019993 - 0.000101 * t) * dsin(2.0 * m)
        + 0.000289 * dsin(3.0 * m)
}

fn apparent_solar_longitude(t: f64, l0: f64) -> f64 {
    let longitude = l0 + solar_equation_of_the_center(t, mean_solar_anomaly(t));
    let omega = 125.04 - 1934.136 * t;
    fix_angle(longitude - 0.00569 - 0.00478 * dsin(omega))
}

fn mean_obliquity_of_the_ecliptic(t: f64) -> f64 {
    23.439291 - 0.013004167 * t - 0.0000001639 * t * t + 0.0000005036 * t * t * t
}

fn apparent_obliquity_of_the_ecliptic(t: f64, epsilon0: f64) -> f64 {
    let o = 125.04 - 1934.136 * t;
    epsilon0 + 0.00256 * dcos(o)
}

fn mean_sidereal_time(t: f64) -> f64 {
    let jd = t * 36525.0 + 2451545.0;
    let theta = 280.46061837 + 360.98564736629 * (jd - 2451545.0) + 0.000387933 * t * t
        - t * t * t / 38710000.0;
    fix_angle(theta)
}

fn nutation_in_longitude(l0: f64, lp: f64, omega: f64) -> f64 {
    (-17.2 / 3600.0) * dsin(omega) - (1.32 / 3600.0) * dsin(2.0 * l0)
        - (0.23 / 3600.0) * dsin(2.0 * lp)
        + (0.21 / 3600.0) * dsin(2.0 * omega)
}

fn nutation_in_obliquity(l0: f64, lp: f64, omega: f64) -> f64 {
    (9.2 / 3600.0) * dcos(omega) + (0.57 / 3600.0) * dcos(2.0 * l0)
        + (0.10 / 3600.0) * dcos(2.0 * lp)
        - (0.09 / 3600.0) * dcos(2.0 * omega)
}

/* ---------------------- Rise, Set and Transit ----------------------- */

pub(crate) fn altitude_of_celestial_body(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    darcsin(
        dsin(latitude) * dsin(declination)
            + dcos(latitude) * dcos(declination) * dcos(hour_angle),
    )
}

/* fraction of the day at which the sun transits, first approximation */
pub(crate) fn approximate_transit(longitude: f64, sidereal_time: f64, right_ascension: f64) -> f64 {
    let lw = -longitude;
    normalize_to_scale((right_ascension + lw - sidereal_time) / 360.0, 1.0)
}

/* transit in hours after 0h UT */
pub(crate) fn corrected_transit(
    m0: f64,
    longitude: f64,
    sidereal_time: f64,
    ra: [f64; 3],
) -> f64 {
    let lw = -longitude;
    let theta = fix_angle(sidereal_time + 360.985647 * m0);
    let alpha = fix_angle(interpolate_angles(ra, m0));
    let h = quadrant_shift(theta - lw - alpha);
    let dm = h / -360.0;
    (m0 + dm) * 24.0
}

/* hours after 0h UT at which the sun's altitude equals h0; NaN when it never does */
#[allow(clippy::too_many_arguments)]
pub(crate) fn corrected_hour_angle(
    m0: f64,
    h0: f64,
    latitude: f64,
    longitude: f64,
    after_transit: bool,
    sidereal_time: f64,
    ra: [f64; 3],
    dec: [f64; 3],
) -> f64 {
    let lw = -longitude;
    let term1 = dsin(h0) - dsin(latitude) * dsin(dec[0]);
    let term2 = dcos(latitude) * dcos(dec[0]);
    let h0_hour_angle = darccos(term1 / term2);

    let m = if after_transit {
        m0 + h0_hour_angle / 360.0
    } else {
        m0 - h0_hour_angle / 360.0
    };
    let theta = fix_angle(sidereal_time + 360.985647 * m);
    let alpha = fix_angle(interpolate_angles(ra, m));
    let delta = interpolate(dec, m);
    let h = theta - lw - alpha;
    let altitude = altitude_of_celestial_body(latitude, delta, h);

    let term3 = altitude - h0;
    let term4 = 360.0 * dcos(delta) * dcos(latitude) * dsin(h);
    let dm = term3 / term4;
    (m + dm) * 24.0
}

/* interpolate [today, yesterday, tomorrow] at day fraction n */
fn interpolate(values: [f64; 3], n: f64) -> f64 {
    let [y2, y1, y3] = values;
    let a = y2 - y1;
    let b = y3 - y2;
    let c = b - a;
    y2 + (n / 2.0) * (a + b + n * c)
}

/* same as interpolate, for angles that may wrap at 360 */
fn interpolate_angles(values: [f64; 3], n: f64) -> f64 {
    let [y2, y1, y3] = values;
    let a = fix_angle(y2 - y1);
    let b = fix_angle(y3 - y2);
    let c = b - a;
    y2 + (n / 2.0) * (a + b + n * c)
}

/* ---------------------- Trigonometric Functions ----------------------- */

/* degree sin */
pub(crate) fn dsin(d: f64) -> f64 {
    deg2rad(d).sin()
}

/* degree cos */
pub(crate) fn dcos(d: f64) -> f64 {
    deg2rad(d).cos()
}

/* degree tan */
pub(crate) fn dtan(d: f64) -> f64 {
    deg2rad(d).tan()
}

/* degree arcsin */
fn darcsin(x: f64) -> f64 {
    rad2deg(x.asin())
}

/* degree arccos */
fn darccos(x: f64) -> f64 {
    rad2deg(x.acos())
}

/* degree arctan */
pub(crate) fn darctan(x: f64) -> f64 {
    rad2deg(x.atan())
}

/* degree arctan2 */
fn darctan2(y: f64, x: f64) -> f64 {
    rad2deg(y.atan2(x))
}

/* degree to radian */
fn deg2rad(d: f64) -> f64 {
    d * PI / 180.0
}

/* radian to degree */
fn rad2deg(r: f64) -> f64 {
    r * 180.0 / PI
}

/* range reduce value to 0..max */
fn normalize_to_scale(a: f64, max: f64) -> f64 {
    a - max * (a / max).floor()
}

/* range reduce angle in degrees. */
fn fix_angle(a: f64) -> f64 {
    normalize_to_scale(a, 360.0)
}

/* range reduce angle to -180..180 */
fn quadrant_shift(a: f64) -> f64 {
    if (-180.0..=180.0).contains(&a) {
        a
    } else {
        a - 360.0 * (a / 360.0).round()
    }
}
