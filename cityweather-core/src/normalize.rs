//! Defensive boundary between the untrusted API payload and the UI.
//!
//! Both functions here are total: no input, however partial or
//! malformed, makes them fail or panic.

use crate::model::{DisplayWeather, RawWeatherResult};

const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Map a raw lookup result (or its absence) onto a fully-populated
/// display record. Missing leaves fall back to their defaults one by
/// one; the rest of the payload still comes through.
///
/// Temperatures and wind speed are rounded half away from zero
/// (`f64::round`), wind speed after converting m/s to km/h. Humidity
/// and wind degree pass through untouched.
pub fn normalize(raw: Option<&RawWeatherResult>) -> DisplayWeather {
    let Some(raw) = raw else {
        return DisplayWeather::default();
    };

    let main = raw.main.as_ref();
    let wind = raw.wind.as_ref();
    let first = raw.weather.first();

    DisplayWeather {
        city_name: raw.name.clone().unwrap_or_default(),
        country: raw.sys.as_ref().and_then(|s| s.country.clone()).unwrap_or_default(),
        temp_c: round(main.and_then(|m| m.temp).unwrap_or(0.0)),
        feels_like_c: round(main.and_then(|m| m.feels_like).unwrap_or(0.0)),
        humidity: main.and_then(|m| m.humidity).unwrap_or(0),
        icon: first.and_then(|w| w.icon.clone()).unwrap_or_default(),
        description: first.and_then(|w| w.description.clone()).unwrap_or_default(),
        wind_kmh: round(wind.and_then(|w| w.speed).unwrap_or(0.0) * 3.6),
        wind_deg: wind.and_then(|w| w.deg).unwrap_or(0.0),
    }
}

fn round(value: f64) -> i32 {
    value.round() as i32
}

/// 16-point compass label for a bearing in degrees (0 = North,
/// clockwise). Each label owns a 22.5° sector centered on its nominal
/// bearing, so N covers [-11.25°, 11.25°) and 11.25° already reads NNE.
/// Bearings outside 0–360, including negative ones, wrap.
pub fn compass_direction(degree: f64) -> &'static str {
    let index = ((degree + 11.25) / 22.5).floor() as i64;
    COMPASS[index.rem_euclid(16) as usize]
}
