use std::fmt;

use serde::Serialize;

use crate::daytime::Daytime;
use crate::model::{ForecastSample, WeatherData};

/// Icon asset identifiers understood by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Icon {
    ClearDay,
    ClearNight,
    Cloudy,
    Rain,
    Storm,
    Snow,
    Fog,
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::ClearDay => "weather_clear_day_icon",
            Icon::ClearNight => "weather_clear_night_icon",
            Icon::Cloudy => "weather_cloudy_icon",
            Icon::Rain => "weather_rain_icon",
            Icon::Storm => "weather_storm_icon",
            Icon::Snow => "weather_snow_icon",
            Icon::Fog => "weather_fog_icon",
        }
    }

    /// Single glyph for terminal output.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::ClearDay => "☀",
            Icon::ClearNight => "☾",
            Icon::Cloudy => "☁",
            Icon::Rain => "☂",
            Icon::Storm => "⚡",
            Icon::Snow => "❄",
            Icon::Fog => "≡",
        }
    }
}

impl From<Icon> for &'static str {
    fn from(icon: Icon) -> Self {
        icon.as_str()
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a condition keyword to an icon. Case-insensitive, exact match;
/// anything unrecognised resolves to [`Icon::Cloudy`].
pub fn icon_for(condition: &str, is_daytime: bool) -> Icon {
    match condition.to_lowercase().as_str() {
        "clear" if is_daytime => Icon::ClearDay,
        "clear" => Icon::ClearNight,
        "clouds" => Icon::Cloudy,
        "rain" => Icon::Rain,
        "storm" | "thunderstorm" => Icon::Storm,
        "snow" => Icon::Snow,
        "fog" | "mist" | "haze" => Icon::Fog,
        _ => Icon::Cloudy,
    }
}

pub fn current_icon(data: &WeatherData) -> Icon {
    icon_for(data.condition().unwrap_or_default(), data.is_daytime())
}

pub fn forecast_icon(sample: &ForecastSample) -> Icon {
    icon_for(sample.condition().unwrap_or_default(), sample.is_daytime())
}
