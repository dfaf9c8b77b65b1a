use crate::{
    Config,
    error::WeatherError,
    forecast::{Locale, SkippedSample, group_by_day},
    model::{City, DayWeather, ForecastData, WeatherData},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str, lang: Locale) -> Result<WeatherData, WeatherError>;

    async fn forecast(&self, city: &str, lang: Locale) -> Result<ForecastData, WeatherError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    let api_key = config.api_key().ok_or(WeatherError::MissingApiKey)?;

    let provider = match config.base_url.as_deref() {
        Some(base_url) => OpenWeatherProvider::with_base_url(api_key, base_url),
        None => OpenWeatherProvider::new(api_key),
    };

    Ok(Box::new(provider))
}

/// Outcome of the current-weather request for one city.
#[derive(Debug)]
pub struct CityWeather {
    pub city: String,
    pub result: Result<WeatherData, WeatherError>,
}

/// Fetch current weather for every city concurrently.
///
/// Each city gets its own result; one failing request does not affect the
/// others. Results are returned in the order of `cities`.
pub async fn fetch_cities(
    provider: &dyn WeatherProvider,
    cities: &[String],
    lang: Locale,
) -> Vec<CityWeather> {
    let requests = cities.iter().map(|city| async move {
        let result = provider.current_weather(city, lang).await;
        if let Err(err) = &result {
            tracing::warn!(%city, error = %err, "failed to fetch current weather");
        }
        CityWeather { city: city.clone(), result }
    });

    futures::future::join_all(requests).await
}

/// Everything the detail view needs for one city.
#[derive(Debug)]
pub struct CityDetail {
    pub current: WeatherData,
    pub city: City,
    pub days: Vec<DayWeather>,
    pub skipped: Vec<SkippedSample>,
}

/// Fetch current weather and forecast concurrently and group the forecast by day.
pub async fn fetch_city_detail(
    provider: &dyn WeatherProvider,
    city: &str,
    lang: Locale,
    today: NaiveDate,
) -> Result<CityDetail, WeatherError> {
    let (current, forecast) =
        tokio::join!(provider.current_weather(city, lang), provider.forecast(city, lang));
    let current = current?;
    let forecast = forecast?;

    let grouping = group_by_day(&forecast.list, today, lang);
    if !grouping.skipped.is_empty() {
        tracing::warn!(
            %city,
            skipped = grouping.skipped.len(),
            "forecast samples with invalid dt_txt"
        );
    }

    Ok(CityDetail {
        current,
        city: forecast.city,
        days: grouping.days,
        skipped: grouping.skipped,
    })
}
