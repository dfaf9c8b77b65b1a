//! Plain-text rendering of weather records for the terminal.

use std::fmt::Write;

use weathery_core::{DayWeather, Locale, WeatherData, WeatherError, current_icon, forecast_icon};

struct Labels {
    feels_like: &'static str,
    pressure: &'static str,
    humidity: &'static str,
    wind_speed: &'static str,
    wind_direction: &'static str,
    visibility: &'static str,
    pressure_unit: &'static str,
    speed_unit: &'static str,
    distance_unit: &'static str,
}

fn labels(locale: Locale) -> Labels {
    match locale {
        Locale::Ru => Labels {
            feels_like: "Ощущается как",
            pressure: "Давление",
            humidity: "Влажность",
            wind_speed: "Скорость ветра",
            wind_direction: "Направление ветра",
            visibility: "Видимость",
            pressure_unit: "hPa",
            speed_unit: "м/с",
            distance_unit: "м",
        },
        Locale::En => Labels {
            feels_like: "Feels like",
            pressure: "Pressure",
            humidity: "Humidity",
            wind_speed: "Wind speed",
            wind_direction: "Wind direction",
            visibility: "Visibility",
            pressure_unit: "hPa",
            speed_unit: "m/s",
            distance_unit: "m",
        },
    }
}

/// Whole degrees, truncated toward zero.
fn degrees(temp: f64) -> String {
    format!("{}°C", temp.trunc() as i64)
}

/// One line of the city list.
pub fn city_row(data: &WeatherData) -> String {
    format!("{} {:<20} {:>6}", current_icon(data).glyph(), data.name, degrees(data.main.temp))
}

pub fn city_failure_row(city: &str, err: &WeatherError) -> String {
    format!("! {city:<20} {err}")
}

/// Header block of the detail view.
pub fn current_details(data: &WeatherData, locale: Locale) -> String {
    let l = labels(locale);
    let mut out = String::new();

    let glyph = current_icon(data).glyph();
    let _ = writeln!(out, "{glyph} {}  {}", data.name, degrees(data.main.temp));
    let _ = writeln!(out, "{}: {}", l.feels_like, degrees(data.main.feels_like));
    let _ = writeln!(out, "{}: {} {}", l.pressure, data.main.pressure, l.pressure_unit);
    let _ = writeln!(out, "{}: {}%", l.humidity, data.main.humidity);
    let _ = writeln!(out, "{}: {} {}", l.wind_speed, data.wind.speed, l.speed_unit);
    let _ = writeln!(out, "{}: {}°", l.wind_direction, data.wind.deg);
    let _ = writeln!(out, "{}: {} {}", l.visibility, data.visibility, l.distance_unit);

    out
}

/// A day header followed by one line per forecast sample.
pub fn day_block(day: &DayWeather) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", day.day);

    for sample in &day.hourly_forecasts {
        let time = sample.hour_label().unwrap_or_else(|| "--:--".to_string());
        let _ = writeln!(
            out,
            "  {time}  {}  {:>6}",
            forecast_icon(sample).glyph(),
            degrees(sample.main.temp)
        );
    }

    out
}
