use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherApiError {
    #[error("Network request failed for place '{0}'")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request for place '{place}' failed with status {status}")]
    HttpStatus {
        place: String,
        status: reqwest::StatusCode,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse JSON response for place '{0}'")]
    JsonParse(String, #[source] serde_json::Error),

    // Neither an error list nor the climate sections were present
    #[error("Response for place '{place}' is missing '{field}'")]
    MissingField { place: String, field: &'static str },

    #[error("Field '{field}' of month {month} for place '{place}' is not a number: '{value}'")]
    InvalidNumber {
        place: String,
        month: String,
        field: &'static str,
        value: String,
    },
}
