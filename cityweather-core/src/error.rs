use thiserror::Error;

/// Classification of lookup failures, each with the short user-facing
/// message the UI prints as-is. The normalizer never raises any of
/// these; they belong entirely to the fetch layer and its callers.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Please enter a city.")]
    EmptyQuery,

    #[error("Could not find \"{city}\". Please try again.")]
    CityNotFound { city: String },

    #[error("Weather request failed with status {status}: {body}")]
    Api { status: reqwest::StatusCode, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse weather response: {0}")]
    Parse(#[from] serde_json::Error),
}
