//! Error types shared by the provider, aggregation and config layers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("OpenWeather request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to decode OpenWeather response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid forecast timestamp '{input}': {source}")]
    Timestamp {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error(
        "No OpenWeather API key configured.\n\
         Hint: run `weathery configure` or set WEATHERY_API_KEY."
    )]
    MissingApiKey,

    #[error("Config error: {0}")]
    Config(String),
}

impl WeatherError {
    /// True when the city itself could not be resolved by the API.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
