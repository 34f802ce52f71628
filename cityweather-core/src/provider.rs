use crate::{Config, error::LookupError, model::RawWeatherResult};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// A source of raw current-weather payloads.
///
/// Implementations fetch and parse; they never normalize. The payload
/// comes back exactly as the API sent it so that [`crate::normalize`]
/// stays the single defensive boundary.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_by_city(&self, city: &str) -> Result<RawWeatherResult, LookupError>;
}

/// Construct the provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `cityweather configure` and enter your OpenWeather API key."
        )
    })?;

    Ok(Box::new(OpenWeatherProvider::new(api_key.to_owned())))
}
