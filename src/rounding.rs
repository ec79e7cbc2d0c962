use chrono::{DateTime, Duration, SubsecRound, Timelike, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// How finished prayer times are snapped to the minute
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rounding {
    #[default]
    Nearest, // half a minute and up goes to the next minute
    Up,   // any seconds go to the next minute
    None, // whole seconds, no snapping
}

/// Snaps `time` to a whole minute. Sub-second parts are always dropped, and
/// [`Rounding::None`] stops there.
pub fn round_minute(time: DateTime<Utc>, rounding: Rounding) -> DateTime<Utc> {
    let whole = time.trunc_subsecs(0);
    let seconds = i64::from(whole.second());
    let offset = match rounding {
        Rounding::Nearest if seconds >= 30 => 60 - seconds,
        Rounding::Nearest => -seconds,
        Rounding::Up if seconds > 0 => 60 - seconds,
        Rounding::Up => 0,
        Rounding::None => 0,
    };
    whole + Duration::seconds(offset)
}
