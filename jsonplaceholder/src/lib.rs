mod client;
mod model;

pub use self::client::Client;
pub use self::model::Address;
pub use self::model::User;
pub use self::model::MISSING_FIELD;

/// The error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request failed at the transport level
    #[error("network error while calling api: {0}")]
    Network(reqwest::Error),

    /// The api answered with a status other than 200
    #[error("api returned non-200 status code: {0}")]
    InvalidStatus(reqwest::StatusCode),

    /// The response body was not json
    #[error("failed to parse json from response: {0}")]
    InvalidJson(serde_json::Error),

    /// The response body was json, but not a non-empty array
    #[error("api returned empty list or unexpected data")]
    InvalidPayload,
}
