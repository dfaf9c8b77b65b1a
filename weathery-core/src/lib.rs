//! Core library for the `weathery` client.
//!
//! This crate defines:
//! - OpenWeather access behind the [`WeatherProvider`] trait
//! - Shared domain models (current weather, forecast samples, day buckets)
//! - Day/night classification and icon selection
//! - Grouping of the 3-hour forecast list into per-day buckets
//! - Configuration handling (API key, locale, city list)
//!
//! It is used by `weathery-cli`, but can also be reused by other front ends.

pub mod config;
pub mod daytime;
pub mod error;
pub mod forecast;
pub mod icon;
pub mod model;
pub mod provider;

pub use config::Config;
pub use daytime::Daytime;
pub use error::WeatherError;
pub use forecast::{DayGrouping, Locale, SkippedSample, group_by_day, group_by_day_now};
pub use icon::{Icon, current_icon, forecast_icon, icon_for};
pub use model::{DayWeather, ForecastData, ForecastSample, WeatherData};
pub use provider::{
    CityDetail, CityWeather, WeatherProvider, fetch_cities, fetch_city_detail,
    openweather::OpenWeatherProvider, provider_from_config,
};
