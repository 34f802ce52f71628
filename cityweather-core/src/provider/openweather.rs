use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::{error::LookupError, model::RawWeatherResult};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
    base_url: String,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the provider at a different host. Tests run it against a
    /// local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_by_city(&self, city: &str) -> Result<RawWeatherResult, LookupError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        debug!(city, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::CityNotFound { city: city.to_string() });
        }

        if !status.is_success() {
            return Err(LookupError::Api { status, body: truncate_body(&body) });
        }

        debug!(%status, bytes = body.len(), "current weather response");

        let parsed: RawWeatherResult = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const LONDON_BODY: &str = r#"{
        "name": "London",
        "sys": {"country": "GB"},
        "main": {"temp": 15.6, "feels_like": 14.2, "humidity": 80},
        "weather": [{"icon": "10d", "description": "light rain"}],
        "wind": {"speed": 5, "deg": 200},
        "dt": 1700000000
    }"#;

    fn provider_for(server: &MockServer) -> OpenWeatherProvider {
        OpenWeatherProvider::new("KEY".to_string()).with_base_url(server.uri())
    }

    #[tokio::test]
    async fn returns_payload_unmodified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "London"))
            .and(query_param("appid", "KEY"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(LONDON_BODY, "application/json"))
            .mount(&server)
            .await;

        let raw = provider_for(&server)
            .current_by_city("London")
            .await
            .expect("lookup should succeed");

        assert_eq!(raw.name.as_deref(), Some("London"));
        assert_eq!(raw.sys.as_ref().and_then(|s| s.country.as_deref()), Some("GB"));
        assert_eq!(raw.main.as_ref().and_then(|m| m.humidity), Some(80));
        assert_eq!(raw.wind.as_ref().and_then(|w| w.deg), Some(200.0));
        assert_eq!(raw.dt, Some(1_700_000_000));
    }

    #[tokio::test]
    async fn city_names_with_spaces_are_url_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "New York"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
            .mount(&server)
            .await;

        let raw = provider_for(&server)
            .current_by_city("New York")
            .await
            .expect("lookup should succeed");

        assert!(raw.name.is_none());
    }

    #[tokio::test]
    async fn not_found_maps_to_city_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_raw(r#"{"cod":"404","message":"city not found"}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let err = provider_for(&server).current_by_city("Atlantis").await.unwrap_err();

        assert!(matches!(err, LookupError::CityNotFound { ref city } if city == "Atlantis"));
        assert_eq!(err.to_string(), "Could not find \"Atlantis\". Please try again.");
    }

    #[tokio::test]
    async fn server_error_maps_to_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(500).set_body_raw("boom", "text/plain"))
            .mount(&server)
            .await;

        let err = provider_for(&server).current_by_city("London").await.unwrap_err();

        assert!(matches!(err, LookupError::Api { status, .. } if status.as_u16() == 500));
    }

    #[tokio::test]
    async fn garbage_body_maps_to_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
            .mount(&server)
            .await;

        let err = provider_for(&server).current_by_city("London").await.unwrap_err();

        assert!(matches!(err, LookupError::Parse(_)));
    }
}
