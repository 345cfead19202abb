use crate::Error;
use crate::User;
use std::time::Duration;

/// The public users endpoint.
const API_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// How long a request may take before it is abandoned.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The client
#[derive(Debug, Clone)]
pub struct Client {
    /// The inner http client
    pub client: reqwest::Client,

    /// The users endpoint url
    api_url: String,
}

impl Client {
    /// Make a new client for the public endpoint.
    pub fn new() -> Self {
        Self::with_api_url(API_URL)
    }

    /// Make a new client that calls the given endpoint instead.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("failed to build client"),
            api_url: api_url.into(),
        }
    }

    /// Fetch the list of users.
    ///
    /// The endpoint is called exactly once; failures are not retried.
    /// The payload must be a non-empty json array.
    /// A list element that is not a json object degrades to an
    /// all-missing [`User`] rather than failing the fetch.
    pub async fn get_users(&self) -> Result<Vec<User>, Error> {
        let response = self
            .client
            .get(self.api_url.as_str())
            .send()
            .await
            .map_err(Error::Network)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(Error::InvalidStatus(status));
        }

        let text = response.text().await.map_err(Error::Network)?;
        let data: serde_json::Value = serde_json::from_str(&text).map_err(Error::InvalidJson)?;

        let users = match data {
            serde_json::Value::Array(values) if !values.is_empty() => values
                .into_iter()
                .map(|value| serde_json::from_value(value).unwrap_or_default())
                .collect(),
            _ => return Err(Error::InvalidPayload),
        };

        Ok(users)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> Client {
        Client::with_api_url(server.url("/users"))
    }

    #[tokio::test]
    async fn get_users() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/users");
            then.status(200).header("content-type", "application/json").body(
                r#"[
                    {
                        "name": "Leanne Graham",
                        "username": "Bret",
                        "email": "Sincere@april.biz",
                        "address": {"city": "Gwenborough"}
                    },
                    {
                        "name": "Ervin Howell",
                        "username": "Antonette"
                    }
                ]"#,
            );
        });

        let users = client_for(&server)
            .get_users()
            .await
            .expect("failed to get users");
        mock.assert();

        assert!(users.len() == 2);
        assert!(users[0].display_name() == "Leanne Graham");
        assert!(users[0].city() == Some("Gwenborough"));
        assert!(users[1].display_name() == "Ervin Howell");
        assert!(users[1].city().is_none());
    }

    #[tokio::test]
    async fn non_object_elements_degrade() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users");
            then.status(200).body(r#"[{"name": "Leanne Graham"}, 7]"#);
        });

        let users = client_for(&server)
            .get_users()
            .await
            .expect("failed to get users");

        assert!(users.len() == 2);
        assert!(users[0].display_name() == "Leanne Graham");
        assert!(users[1] == User::default());
    }

    #[tokio::test]
    async fn non_200_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users");
            then.status(500).body("internal server error");
        });

        let error = client_for(&server)
            .get_users()
            .await
            .expect_err("expected a status error");
        assert!(matches!(
            error,
            Error::InvalidStatus(status) if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users");
            then.status(200).body("not json at all");
        });

        let error = client_for(&server)
            .get_users()
            .await
            .expect_err("expected a parse error");
        assert!(matches!(error, Error::InvalidJson(_)));
    }

    #[tokio::test]
    async fn empty_array() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users");
            then.status(200).body("[]");
        });

        let error = client_for(&server)
            .get_users()
            .await
            .expect_err("expected a payload error");
        assert!(matches!(error, Error::InvalidPayload));
    }

    #[tokio::test]
    async fn non_array_payload() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users");
            then.status(200).body(r#"{"users": []}"#);
        });

        let error = client_for(&server)
            .get_users()
            .await
            .expect_err("expected a payload error");
        assert!(matches!(error, Error::InvalidPayload));
    }
}
