// GitHub API endpoint functions.
// Provides typed methods for fetching data from the GitHub REST API.

use crate::error::Result;

use super::client::GitHubClient;
use super::types::Repository;

impl GitHubClient {
    /// Get one page of repositories starred by a user.
    pub async fn get_starred_page(
        &self,
        user: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Repository>> {
        let params = [
            ("per_page", &per_page.to_string()),
            ("page", &page.to_string()),
        ];
        let response = self
            .get_with_params(&format!("/users/{}/starred", user), &params)
            .await?;
        let repos: Vec<Repository> = response.json().await?;
        Ok(repos)
    }
}
