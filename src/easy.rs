use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Prayer, PrayerTimes};

impl PrayerTimes {
    /// Every entry of the table as a named field.
    pub fn easy(&self) -> EasyTimes {
        EasyTimes {
            fajr: self.time(Prayer::Fajr),
            sunrise: self.time(Prayer::Sunrise),
            dhuhr: self.time(Prayer::Dhuhr),
            asr: self.time(Prayer::Asr),
            sunset: self.time(Prayer::Sunset),
            maghrib: self.time(Prayer::Maghrib),
            isha: self.time(Prayer::Isha),
            midnight: self.time(Prayer::Midnight),
            two_third_night: self.time(Prayer::TwoThirdNight),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EasyTimes {
    pub fajr: Option<DateTime<Utc>>,
    pub sunrise: Option<DateTime<Utc>>,
    pub dhuhr: Option<DateTime<Utc>>,
    pub asr: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
    pub maghrib: Option<DateTime<Utc>>,
    pub isha: Option<DateTime<Utc>>,
    pub midnight: Option<DateTime<Utc>>,
    pub two_third_night: Option<DateTime<Utc>>,
}
