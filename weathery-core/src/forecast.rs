//! Grouping of the flat 3-hour forecast list into per-day buckets.

use std::{fmt, str::FromStr};

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::{
    error::WeatherError,
    model::{DayWeather, ForecastSample},
};

/// Language used for weekday labels and the provider's `lang` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }

    pub const fn all() -> &'static [Locale] {
        &[Locale::Ru, Locale::En]
    }

    /// Capitalized full weekday name.
    pub fn weekday_name(&self, day: Weekday) -> &'static str {
        match self {
            Locale::Ru => match day {
                Weekday::Mon => "Понедельник",
                Weekday::Tue => "Вторник",
                Weekday::Wed => "Среда",
                Weekday::Thu => "Четверг",
                Weekday::Fri => "Пятница",
                Weekday::Sat => "Суббота",
                Weekday::Sun => "Воскресенье",
            },
            Locale::En => match day {
                Weekday::Mon => "Monday",
                Weekday::Tue => "Tuesday",
                Weekday::Wed => "Wednesday",
                Weekday::Thu => "Thursday",
                Weekday::Fri => "Friday",
                Weekday::Sat => "Saturday",
                Weekday::Sun => "Sunday",
            },
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = WeatherError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            _ => Err(WeatherError::Config(format!(
                "Unknown locale '{value}'. Supported locales: ru, en."
            ))),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = WeatherError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A forecast entry left out of the grouping because its `dt_txt` did not parse.
#[derive(Debug)]
pub struct SkippedSample {
    pub sample: ForecastSample,
    pub error: WeatherError,
}

#[derive(Debug, Default)]
pub struct DayGrouping {
    /// Buckets ordered by calendar day, starting from today.
    pub days: Vec<DayWeather>,
    pub skipped: Vec<SkippedSample>,
}

/// Group forecast samples by day relative to the local calendar date.
pub fn group_by_day_now(samples: &[ForecastSample], locale: Locale) -> DayGrouping {
    group_by_day(samples, Local::now().date_naive(), locale)
}

/// Group forecast samples into weekday buckets, starting at `today`.
///
/// Samples dated before `today` are dropped; earlier hours of `today` itself
/// are kept. Within a bucket samples are in ascending local time, equal times
/// keep their input order. Weekdays without samples are omitted, so the result
/// has at most seven entries. Samples whose `dt_txt` fails to parse end up in
/// [`DayGrouping::skipped`] instead of aborting the grouping.
pub fn group_by_day(samples: &[ForecastSample], today: NaiveDate, locale: Locale) -> DayGrouping {
    let mut skipped = Vec::new();
    let mut parsed: Vec<(NaiveDateTime, &ForecastSample)> = Vec::with_capacity(samples.len());

    for sample in samples {
        match sample.local_time() {
            Ok(time) => parsed.push((time, sample)),
            Err(error) => {
                tracing::warn!(dt_txt = %sample.dt_txt, %error, "skipping forecast sample");
                skipped.push(SkippedSample { sample: sample.clone(), error });
            }
        }
    }

    // stable: equal timestamps keep input order
    parsed.sort_by_key(|(time, _)| *time);

    let mut buckets: [Vec<ForecastSample>; 7] = Default::default();
    for (time, sample) in parsed {
        if time.date() < today {
            continue;
        }
        buckets[time.weekday().num_days_from_monday() as usize].push(sample.clone());
    }

    let days = ordered_weekdays(today.weekday())
        .filter_map(|weekday| {
            let hourly = std::mem::take(&mut buckets[weekday.num_days_from_monday() as usize]);
            (!hourly.is_empty()).then(|| DayWeather {
                weekday,
                day: locale.weekday_name(weekday).to_string(),
                hourly_forecasts: hourly,
            })
        })
        .collect();

    DayGrouping { days, skipped }
}

/// Seven consecutive weekdays starting at `start`.
fn ordered_weekdays(start: Weekday) -> impl Iterator<Item = Weekday> {
    std::iter::successors(Some(start), |day| Some(day.succ())).take(7)
}
