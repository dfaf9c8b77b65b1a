use anyhow::{Context, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use inquire::{Password, Select};
use weathery_core::{
    Config, Locale, WeatherData, WeatherProvider, fetch_cities, fetch_city_detail,
    provider_from_config,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathery", version, about = "Current weather and forecasts for your cities")]
pub struct Cli {
    /// Override the configured locale ("ru" or "en").
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and preferred locale.
    Configure,

    /// Show current weather for every saved city.
    Cities,

    /// Look a city up and add it to the saved list.
    Add {
        /// City name as understood by OpenWeather.
        city: String,
    },

    /// Remove a city from the saved list.
    Remove { city: String },

    /// Show current weather and the forecast grouped by day.
    Show {
        city: String,

        /// Treat this date (YYYY-MM-DD) as today; defaults to the local date.
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load().context("Failed to load configuration")?;
        let locale = self.locale.unwrap_or(config.locale);

        match self.command {
            Command::Configure => configure(&mut config)?,
            Command::Cities => {
                let provider = provider_from_config(&config)?;
                for entry in fetch_cities(provider.as_ref(), &config.cities, locale).await {
                    match entry.result {
                        Ok(data) => println!("{}", render::city_row(&data)),
                        Err(err) => println!("{}", render::city_failure_row(&entry.city, &err)),
                    }
                }
            }
            Command::Add { city } => {
                let city = city_name(&city)?;
                if config.has_city(city) {
                    bail!("'{city}' is already in the list");
                }

                let provider = provider_from_config(&config)?;
                let data = lookup_city(provider.as_ref(), city, locale).await?;

                config.add_city(city);
                config.save()?;
                tracing::info!(%city, "city added");
                println!("{}", render::city_row(&data));
            }
            Command::Remove { city } => {
                if !config.remove_city(&city) {
                    bail!("'{city}' is not in the list");
                }
                config.save()?;
                println!("Removed {city}");
            }
            Command::Show { city, today } => {
                let provider = provider_from_config(&config)?;
                let today = today.unwrap_or_else(|| Local::now().date_naive());
                let detail = fetch_city_detail(provider.as_ref(), &city, locale, today).await?;

                print!("{}", render::current_details(&detail.current, locale));
                for day in &detail.days {
                    println!();
                    print!("{}", render::day_block(day));
                }
                if !detail.skipped.is_empty() {
                    eprintln!(
                        "\n{} forecast entries had an invalid timestamp",
                        detail.skipped.len()
                    );
                }
            }
        }

        Ok(())
    }
}

fn city_name(input: &str) -> anyhow::Result<&str> {
    let city = input.trim();
    if city.is_empty() {
        bail!("City name must not be empty");
    }
    Ok(city)
}

/// Resolve a city through the provider, telling an unknown city apart from
/// transport, auth and decode failures.
async fn lookup_city(
    provider: &dyn WeatherProvider,
    city: &str,
    locale: Locale,
) -> anyhow::Result<WeatherData> {
    match provider.current_weather(city, locale).await {
        Ok(data) => Ok(data),
        Err(err) if err.is_not_found() => bail!("City '{city}' not found"),
        Err(err) => Err(err).with_context(|| format!("Failed to look up '{city}'")),
    }
}

fn configure(config: &mut Config) -> anyhow::Result<()> {
    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("API key prompt cancelled")?;
    if api_key.trim().is_empty() {
        bail!("API key must not be empty");
    }

    let locale = Select::new("Locale:", Locale::all().to_vec())
        .prompt()
        .context("Locale prompt cancelled")?;

    config.set_api_key(api_key.trim().to_string());
    config.locale = locale;
    config.save()?;

    println!("Configuration saved to {}", Config::config_file_path()?.display());
    Ok(())
}
