//! Day/night classification used for icon selection.
//!
//! Current weather carries an explicit sun window, so it is compared against
//! sunrise/sunset directly. Forecast samples only carry a local-time string;
//! for those a fixed local-hour range is used instead.

use chrono::{DateTime, Timelike, Utc};

use crate::model::{ForecastSample, WeatherData};

/// First local hour considered daytime by the hour heuristic.
pub const DAY_START_HOUR: u32 = 6;
/// First local hour considered night by the hour heuristic.
pub const DAY_END_HOUR: u32 = 18;

pub trait Daytime {
    fn is_daytime(&self) -> bool;
}

impl Daytime for WeatherData {
    fn is_daytime(&self) -> bool {
        within_sun_window(self.dt, self.sys.sunrise, self.sys.sunset)
    }
}

impl Daytime for ForecastSample {
    /// Fails open: an unparsable `dt_txt` counts as daytime.
    fn is_daytime(&self) -> bool {
        match self.local_time() {
            Ok(t) => is_day_hour(t.hour()),
            Err(_) => true,
        }
    }
}

/// `sunrise <= ts < sunset`, compared as UTC instants.
pub fn within_sun_window(ts: i64, sunrise: i64, sunset: i64) -> bool {
    match (unix_to_utc(ts), unix_to_utc(sunrise), unix_to_utc(sunset)) {
        (Some(now), Some(rise), Some(set)) => now >= rise && now < set,
        _ => false,
    }
}

pub fn is_day_hour(hour: u32) -> bool {
    (DAY_START_HOUR..DAY_END_HOUR).contains(&hour)
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}
