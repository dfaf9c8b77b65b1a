use chrono::{NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// Format of the provider's local-time `dt_txt` field.
pub const LOCAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a `dt_txt` value such as `2024-09-10 03:00:00`.
pub fn parse_local_time(input: &str) -> Result<NaiveDateTime, WeatherError> {
    NaiveDateTime::parse_from_str(input, LOCAL_TIME_FORMAT).map_err(|source| {
        WeatherError::Timestamp { input: input.to_string(), source }
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Main {
    pub temp: f64,
    pub feels_like: f64,
    pub pressure: u32,
    pub humidity: u8,
}

/// One entry of the provider's `weather[]` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Primary category, e.g. "Clear" or "Rain".
    pub main: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    #[serde(default)]
    pub deg: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunWindow {
    pub sunrise: i64,
    pub sunset: i64,
}

/// Current weather for a single city (`/data/2.5/weather`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub name: String,
    pub dt: i64,
    pub main: Main,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub wind: Wind,
    #[serde(default)]
    pub visibility: u32,
    pub sys: SunWindow,
}

impl WeatherData {
    /// Primary category of the first reported condition.
    pub fn condition(&self) -> Option<&str> {
        self.weather.first().map(|w| w.main.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clouds {
    pub all: u8,
}

/// Day/night period reported by the provider ("d" or "n").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    #[serde(default)]
    pub pod: String,
}

/// One 3-hour entry of the forecast `list[]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub dt: i64,
    pub main: Main,
    #[serde(default)]
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub clouds: Clouds,
    pub wind: Wind,
    #[serde(default)]
    pub visibility: u32,
    /// Probability of precipitation, 0.0..=1.0.
    #[serde(default)]
    pub pop: f64,
    #[serde(default)]
    pub sys: Period,
    pub dt_txt: String,
}

impl ForecastSample {
    pub fn condition(&self) -> Option<&str> {
        self.weather.first().map(|w| w.main.as_str())
    }

    pub fn local_time(&self) -> Result<NaiveDateTime, WeatherError> {
        parse_local_time(&self.dt_txt)
    }

    /// `HH:mm` label for hourly display, `None` when `dt_txt` is malformed.
    pub fn hour_label(&self) -> Option<String> {
        self.local_time().ok().map(|t| t.format("%H:%M").to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub country: String,
    pub coord: Option<Coordinates>,
    #[serde(default)]
    pub population: u64,
    /// Shift in seconds from UTC.
    #[serde(default)]
    pub timezone: i32,
    #[serde(default)]
    pub sunrise: i64,
    #[serde(default)]
    pub sunset: i64,
}

/// Forecast response envelope (`/data/2.5/forecast`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastData {
    #[serde(default)]
    pub cnt: u32,
    pub list: Vec<ForecastSample>,
    pub city: City,
}

/// Forecast samples belonging to one calendar day, ascending in time.
#[derive(Debug, Clone, PartialEq)]
pub struct DayWeather {
    pub weekday: Weekday,
    /// Capitalized weekday name in the requested locale.
    pub day: String,
    pub hourly_forecasts: Vec<ForecastSample>,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_current_weather_payload() {
        let json = r#"{
            "coord": {"lon": 37.62, "lat": 55.75},
            "weather": [{"id": 800, "main": "Clear", "description": "ясно", "icon": "01d"}],
            "main": {"temp": 18.3, "feels_like": 17.9, "temp_min": 17.0, "temp_max": 19.0,
                     "pressure": 1015, "humidity": 60},
            "visibility": 10000,
            "wind": {"speed": 2.5, "deg": 90},
            "dt": 1725955200,
            "sys": {"country": "RU", "sunrise": 1725936000, "sunset": 1725984000},
            "name": "Москва"
        }"#;

        let data: WeatherData = serde_json::from_str(json).expect("valid payload");
        assert_eq!(data.name, "Москва");
        assert_eq!(data.condition(), Some("Clear"));
        assert_eq!(data.main.pressure, 1015);
        assert_eq!(data.sys.sunset, 1725984000);
    }

    #[test]
    fn missing_condition_list_is_tolerated() {
        let json = r#"{
            "main": {"temp": 1.0, "feels_like": 0.0, "pressure": 1000, "humidity": 90},
            "wind": {"speed": 1.0},
            "dt": 10,
            "sys": {"sunrise": 0, "sunset": 20},
            "name": "Калуга"
        }"#;

        let data: WeatherData = serde_json::from_str(json).expect("valid payload");
        assert!(data.weather.is_empty());
        assert_eq!(data.condition(), None);
        assert_eq!(data.visibility, 0);
    }

    #[test]
    fn hour_label_formats_local_time() {
        let s = fixtures::sample("2024-09-10 09:00:00", "Rain");
        assert_eq!(s.hour_label().as_deref(), Some("09:00"));

        let bad = fixtures::sample("not-a-date", "Rain");
        assert_eq!(bad.hour_label(), None);
    }

    #[test]
    fn parse_local_time_reports_input() {
        let err = parse_local_time("2024-09-10T03:00").unwrap_err();
        assert!(matches!(
            err,
            WeatherError::Timestamp { ref input, .. } if input == "2024-09-10T03:00"
        ));
    }
}
