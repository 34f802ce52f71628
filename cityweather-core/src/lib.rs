//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The raw and display weather models, plus the normalizer that maps
//!   one onto the other
//! - The OpenWeather provider used by the fetch layer
//!
//! It is used by `cityweather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod provider;

pub use config::Config;
pub use error::LookupError;
pub use model::{DisplayWeather, RawWeatherResult};
pub use normalize::{compass_direction, normalize};
pub use provider::{OpenWeatherProvider, WeatherProvider, provider_from_config};
