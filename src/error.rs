use crate::types::endpoint::Endpoint;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("No API key configured; set OPENWEATHER_API_KEY")]
    MissingCredential,

    #[error("Network request to the {endpoint} endpoint failed")]
    Network {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    #[error("The {endpoint} endpoint returned HTTP status {status}")]
    Upstream {
        endpoint: Endpoint,
        status: reqwest::StatusCode,
    },

    #[error("Failed to decode response from the {endpoint} endpoint")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },

    // Well-formed JSON object, but the one structure the operation needs is absent.
    #[error("Response from the {endpoint} endpoint has no usable '{field}'")]
    UnexpectedFormat {
        endpoint: Endpoint,
        field: &'static str,
    },

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

impl WeatherError {
    /// Returns `true` for failures caused by the response body rather than the transport,
    /// i.e. [`WeatherError::Decode`] and [`WeatherError::UnexpectedFormat`].
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            WeatherError::Decode { .. } | WeatherError::UnexpectedFormat { .. }
        )
    }
}
