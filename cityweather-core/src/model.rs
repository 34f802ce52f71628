use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw payload of the current-weather endpoint, kept exactly as the API
/// sent it. Every nested field is optional: the API omits objects
/// freely, so nothing here may assume an intermediate object exists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWeatherResult {
    pub name: Option<String>,
    pub sys: Option<RawSys>,
    pub main: Option<RawMain>,
    #[serde(default)]
    pub weather: Vec<RawCondition>,
    pub wind: Option<RawWind>,
    /// Unix timestamp of the observation.
    pub dt: Option<i64>,
}

impl RawWeatherResult {
    /// Observation time, when the payload carries one.
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        self.dt.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSys {
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMain {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCondition {
    pub icon: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWind {
    /// Meters per second.
    pub speed: Option<f64>,
    /// Degrees, 0 = North, clockwise.
    pub deg: Option<f64>,
}

/// Fully-defaulted, render-safe weather record. `Default` is the
/// "nothing searched yet" state shown before the first lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayWeather {
    pub city_name: String,
    pub country: String,
    pub temp_c: i32,
    pub feels_like_c: i32,
    pub humidity: u8,
    pub icon: String,
    pub description: String,
    pub wind_kmh: i32,
    pub wind_deg: f64,
}

impl DisplayWeather {
    /// URL of the weather icon, following the `<code>@2x.png` hosting
    /// convention. `None` when no icon code is present.
    pub fn icon_url(&self) -> Option<String> {
        if self.icon.is_empty() {
            None
        } else {
            Some(format!("https://openweathermap.org/img/wn/{}@2x.png", self.icon))
        }
    }
}
