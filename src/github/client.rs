// GitHub API HTTP client.
// Handles authentication and request/response processing.

use reqwest::{
    Client, Response,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{RandomStarError, Result};

const GITHUB_API_BASE: &str = "https://api.github.com";

/// GitHub API client with optional token authentication.
pub struct GitHubClient {
    client: Client,
}

impl GitHubClient {
    /// Create a new client. A missing token yields unauthenticated requests.
    pub fn new(token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("randomstar"));

        if let Some(token) = token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("token {}", token))
                    .map_err(|e| RandomStarError::Other(e.to_string()))?,
            );
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(RandomStarError::Api)?;

        Ok(Self { client })
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", GITHUB_API_BASE, endpoint);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(RandomStarError::Api)?;

        check_response(response)
    }
}

/// Check response status; any non-success status is an error.
fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(RandomStarError::ApiStatus {
            status,
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        })
    }
}
