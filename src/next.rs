use chrono::{DateTime, NaiveDate, Utc};
use log::debug;

use crate::solar::{Astronomical, SolarGeometry};
use crate::{CalculationParameters, Coordinates, Error, Prayer, PrayerTime, PrayerTimes};

/// First of `prayers` strictly after `after`, looking at the tables of the day
/// before `date`, `date` itself and the day after, in that order.
///
/// Within a day the prayers are tried in the order given, so the list may be a
/// subset or repeat entries. Yesterday comes first because a prayer late in
/// the previous day's night can still be ahead of an instant just past
/// midnight.
pub fn next_prayer(
    after: DateTime<Utc>,
    prayers: &[Prayer],
    coordinates: Coordinates,
    date: NaiveDate,
    params: &CalculationParameters,
) -> Result<Option<PrayerTime>, Error> {
    next_prayer_with(&Astronomical, after, prayers, coordinates, date, params)
}

/// [`next_prayer`] with an explicit [`SolarGeometry`].
pub fn next_prayer_with<G: SolarGeometry>(
    geometry: &G,
    after: DateTime<Utc>,
    prayers: &[Prayer],
    coordinates: Coordinates,
    date: NaiveDate,
    params: &CalculationParameters,
) -> Result<Option<PrayerTime>, Error> {
    let unresolvable = || Error::Unresolvable { date, coordinates };
    let yesterday = date.pred_opt().ok_or_else(unresolvable)?;
    let tomorrow = date.succ_opt().ok_or_else(unresolvable)?;

    let days = [yesterday, date, tomorrow]
        .into_iter()
        .map(|day| PrayerTimes::calculate(geometry, coordinates, day, params, true))
        .collect::<Result<Vec<_>, _>>()?;

    let next = days.iter().find_map(|times| {
        prayers.iter().find_map(|&prayer| {
            times
                .time(prayer)
                .filter(|&time| time > after)
                .map(|time| PrayerTime::new(prayer, time))
        })
    });
    if next.is_none() {
        debug!("nothing after {after} between {yesterday} and {tomorrow}");
    }
    Ok(next)
}
