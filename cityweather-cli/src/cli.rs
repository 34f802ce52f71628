use anyhow::Result;
use chrono::{DateTime, Utc};
use cityweather_core::{
    Config, DisplayWeather, LookupError, compass_direction, normalize, provider_from_config,
};
use clap::{Parser, Subcommand};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "City weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name; prompted for interactively when omitted.
        city: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => show(city).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: Option<String>) -> Result<()> {
    let city = match city {
        Some(city) => city,
        None => inquire::Text::new("Enter a city:").prompt()?,
    };

    let city = city.trim().to_string();
    if city.is_empty() {
        return Err(LookupError::EmptyQuery.into());
    }

    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    tracing::debug!(%city, "looking up weather");

    let raw = provider.current_by_city(&city).await?;

    let observed = raw.observed_at();
    let weather = normalize(Some(&raw));
    println!("{}", render_card(&weather, observed));

    Ok(())
}

/// Plain-text weather card, one detail per line.
fn render_card(weather: &DisplayWeather, observed: Option<DateTime<Utc>>) -> String {
    let mut lines = Vec::new();

    if weather.city_name.is_empty() {
        lines.push("No weather data.".to_string());
    } else if weather.country.is_empty() {
        lines.push(weather.city_name.clone());
    } else {
        lines.push(format!("{}, {}", weather.city_name, weather.country));
    }

    lines.push(format!("{}°C (feels like {}°C)", weather.temp_c, weather.feels_like_c));
    lines.push(format!("humidity: {}%", weather.humidity));
    lines.push(format!(
        "wind: {} km/h {}",
        weather.wind_kmh,
        compass_direction(weather.wind_deg)
    ));

    if !weather.description.is_empty() {
        lines.push(weather.description.clone());
    }
    if let Some(url) = weather.icon_url() {
        lines.push(format!("icon: {url}"));
    }
    if let Some(observed) = observed {
        lines.push(format!("observed: {} UTC", observed.format("%Y-%m-%d %H:%M")));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn london() -> DisplayWeather {
        DisplayWeather {
            city_name: "London".to_string(),
            country: "GB".to_string(),
            temp_c: 16,
            feels_like_c: 14,
            humidity: 80,
            icon: "10d".to_string(),
            description: "light rain".to_string(),
            wind_kmh: 18,
            wind_deg: 200.0,
        }
    }

    #[test]
    fn renders_full_card() {
        let card = render_card(&london(), None);

        assert!(card.contains("London, GB"));
        assert!(card.contains("16°C (feels like 14°C)"));
        assert!(card.contains("humidity: 80%"));
        assert!(card.contains("wind: 18 km/h SSW"));
        assert!(card.contains("light rain"));
        assert!(card.contains("icon: https://openweathermap.org/img/wn/10d@2x.png"));
        assert!(!card.contains("observed:"));
    }

    #[test]
    fn renders_observed_line() {
        let observed = DateTime::from_timestamp(1_700_000_000, 0);
        let card = render_card(&london(), observed);

        assert!(card.contains("observed: 2023-11-14 22:13 UTC"));
    }

    #[test]
    fn defaults_render_without_icon_or_description() {
        let card = render_card(&DisplayWeather::default(), None);

        assert!(card.contains("No weather data."));
        assert!(card.contains("0°C (feels like 0°C)"));
        assert!(card.contains("wind: 0 km/h N"));
        assert!(!card.contains("icon:"));
    }

    #[test]
    fn country_is_skipped_when_absent() {
        let weather = DisplayWeather { city_name: "Springfield".to_string(), ..Default::default() };
        let card = render_card(&weather, None);

        assert!(card.starts_with("Springfield\n"));
    }
}
