#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Coordinates, Prayer, Rounding};

// Calculation Methods
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationMethod {
    Jafari,  // Ithna Ashari
    Karachi, // University of Islamic Sciences, Karachi
    ISNA,    // Islamic Society of North America (ISNA)
    #[default]
    MWL, // Muslim World League (MWL)
    Makkah,  // Umm al-Qura, Makkah
    Egypt,   // Egyptian General Authority of Survey
    MoonsightingCommittee, // Moonsighting Committee Worldwide
    Dubai,     // UAE General Authority of Islamic Affairs
    Kuwait,    // Kuwait Ministry of Awqaf
    Qatar,     // Qatar Ministry of Awqaf
    Singapore, // Majlis Ugama Islam Singapura
    Tehran,    // Institute of Geophysics, University of Tehran
    Turkey,    // Diyanet Isleri Baskanligi
    Custom,    // Custom Setting
}

impl CalculationMethod {
    /// Preset parameters for this method. The default madhab, high-latitude
    /// rule, shafaq and manual adjustments are left for the caller to change.
    pub fn params(self) -> CalculationParameters {
        use CalculationMethod::*;

        let base = CalculationParameters {
            method: self,
            ..CalculationParameters::blank()
        };
        match self {
            Jafari => CalculationParameters {
                fajr_angle: 16.0,
                isha_angle: 14.0,
                maghrib_angle: Some(4.0),
                ..base
            },
            Karachi => CalculationParameters {
                fajr_angle: 18.0,
                isha_angle: 18.0,
                method_adjustments: PrayerAdjustments::dhuhr_only(1),
                ..base
            },
            ISNA => CalculationParameters {
                fajr_angle: 15.0,
                isha_angle: 15.0,
                method_adjustments: PrayerAdjustments::dhuhr_only(1),
                ..base
            },
            MWL => CalculationParameters {
                fajr_angle: 18.0,
                isha_angle: 17.0,
                method_adjustments: PrayerAdjustments::dhuhr_only(1),
                ..base
            },
            Makkah => CalculationParameters {
                fajr_angle: 18.5,
                isha_interval: 90,
                ..base
            },
            Egypt => CalculationParameters {
                fajr_angle: 19.5,
                isha_angle: 17.5,
                method_adjustments: PrayerAdjustments::dhuhr_only(1),
                ..base
            },
            MoonsightingCommittee => CalculationParameters {
                fajr_angle: 18.0,
                isha_angle: 18.0,
                method_adjustments: PrayerAdjustments {
                    dhuhr: 5,
                    maghrib: 3,
                    ..Default::default()
                },
                ..base
            },
            Dubai => CalculationParameters {
                fajr_angle: 18.2,
                isha_angle: 18.2,
                method_adjustments: PrayerAdjustments {
                    sunrise: -3,
                    dhuhr: 3,
                    asr: 3,
                    maghrib: 3,
                    ..Default::default()
                },
                ..base
            },
            Kuwait => CalculationParameters {
                fajr_angle: 18.0,
                isha_angle: 17.5,
                ..base
            },
            Qatar => CalculationParameters {
                fajr_angle: 18.0,
                isha_interval: 90,
                ..base
            },
            Singapore => CalculationParameters {
                fajr_angle: 20.0,
                isha_angle: 18.0,
                method_adjustments: PrayerAdjustments::dhuhr_only(1),
                rounding: Rounding::Up,
                ..base
            },
            Tehran => CalculationParameters {
                fajr_angle: 17.7,
                isha_angle: 14.0,
                maghrib_angle: Some(4.5),
                ..base
            },
            Turkey => CalculationParameters {
                fajr_angle: 18.0,
                isha_angle: 17.0,
                method_adjustments: PrayerAdjustments {
                    sunrise: -7,
                    dhuhr: 5,
                    asr: 4,
                    maghrib: 7,
                    ..Default::default()
                },
                ..base
            },
            Custom => base,
        }
    }
}

// Juristic Methods
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JuristicMethod {
    #[default]
    Shafii = 0, // Shafii (standard)
    Hanafi, // Hanafi
}

impl JuristicMethod {
    /// Shadow length, in object lengths, that marks the start of Asr.
    pub fn shadow_length(self) -> f64 {
        (1 + self as usize) as f64
    }
}

// Adjusting Methods for Higher Latitudes
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AdjustingMethod {
    MidNight,   // middle of night
    OneSeventh, // 1/7th of night
    AngleBased, // angle/60th of night
}

impl AdjustingMethod {
    /// Seventh of the night above 48 degrees of latitude, middle of the night
    /// elsewhere.
    pub fn recommended(coordinates: Coordinates) -> Self {
        if coordinates.latitude > 48.0 {
            AdjustingMethod::OneSeventh
        } else {
            AdjustingMethod::MidNight
        }
    }
}

// Twilight colour the evening seasonal model is tuned for
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shafaq {
    #[default]
    General, // blend of red and white
    Ahmer, // red twilight
    Abyad, // white twilight
}

/// Fractions of the night used as the safe limit for fajr and isha.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NightPortions {
    pub fajr: f64,
    pub isha: f64,
}

/// Signed minutes added to each prayer after it is computed.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct PrayerAdjustments {
    pub fajr: i64,
    pub sunrise: i64,
    pub dhuhr: i64,
    pub asr: i64,
    pub maghrib: i64,
    pub isha: i64,
}

impl PrayerAdjustments {
    fn dhuhr_only(minutes: i64) -> Self {
        Self {
            dhuhr: minutes,
            ..Default::default()
        }
    }

    /// Minutes for `prayer`. Sunset, midnight and the last third of the night
    /// are never adjusted.
    pub fn minutes(&self, prayer: Prayer) -> i64 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
            Prayer::Sunset | Prayer::Midnight | Prayer::TwoThirdNight => 0,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationParameters {
    pub method: CalculationMethod,
    pub fajr_angle: f64,             // degrees below the horizon
    pub isha_angle: f64,             // degrees below the horizon
    pub isha_interval: i64,          // minutes after maghrib, 0 to use isha_angle
    pub maghrib_angle: Option<f64>,  // degrees below the horizon, None for sunset
    pub madhab: JuristicMethod,      // Juristic method for Asr
    pub high_latitude_rule: Option<AdjustingMethod>, // None picks the recommended rule
    pub shafaq: Shafaq,
    pub adjustments: PrayerAdjustments,
    pub method_adjustments: PrayerAdjustments,
    pub rounding: Rounding,
}

impl Default for CalculationParameters {
    fn default() -> Self {
        CalculationMethod::default().params()
    }
}

impl CalculationParameters {
    fn blank() -> Self {
        Self {
            method: CalculationMethod::Custom,
            fajr_angle: 0.0,
            isha_angle: 0.0,
            isha_interval: 0,
            maghrib_angle: None,
            madhab: JuristicMethod::default(),
            high_latitude_rule: None,
            shafaq: Shafaq::default(),
            adjustments: PrayerAdjustments::default(),
            method_adjustments: PrayerAdjustments::default(),
            rounding: Rounding::default(),
        }
    }

    /// Custom parameters from a pair of twilight angles.
    pub fn with_angles(fajr_angle: f64, isha_angle: f64) -> Self {
        Self {
            fajr_angle,
            isha_angle,
            ..Self::blank()
        }
    }

    /// Custom parameters with isha a fixed number of minutes after maghrib.
    pub fn with_isha_interval(fajr_angle: f64, isha_interval: i64) -> Self {
        Self {
            fajr_angle,
            isha_interval,
            ..Self::blank()
        }
    }

    /// The night portions in force at `coordinates`.
    pub fn night_portions(&self, coordinates: Coordinates) -> NightPortions {
        let rule = self
            .high_latitude_rule
            .unwrap_or_else(|| AdjustingMethod::recommended(coordinates));
        match rule {
            AdjustingMethod::MidNight => NightPortions {
                fajr: 1.0 / 2.0,
                isha: 1.0 / 2.0,
            },
            AdjustingMethod::OneSeventh => NightPortions {
                fajr: 1.0 / 7.0,
                isha: 1.0 / 7.0,
            },
            AdjustingMethod::AngleBased => NightPortions {
                fajr: self.fajr_angle / 60.0,
                isha: self.isha_angle / 60.0,
            },
        }
    }

    /// Whether the moonsighting committee's one-seventh rule replaces the
    /// twilight angles at this latitude.
    pub(crate) fn moonsighting_high_latitude(&self, coordinates: Coordinates) -> bool {
        self.method == CalculationMethod::MoonsightingCommittee
            && coordinates.latitude.abs() >= 55.0
    }
}
