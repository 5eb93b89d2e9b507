//! GitHub GraphQL plumbing
//!
//! The review mutation and the branch lookup are only available through
//! the GraphQL API, so those calls bypass octocrab and post the query
//! directly.

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::{Error, GitHubClient, Result};

/// GraphQL query response wrapper
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLError>>,
}

/// GraphQL error
#[derive(Debug, Deserialize)]
struct GraphQLError {
    message: String,
}

impl GitHubClient {
    /// Execute a GraphQL query or mutation
    pub(crate) async fn graphql<T: for<'de> Deserialize<'de>>(
        &self,
        query: &str,
        variables: &serde_json::Value,
    ) -> Result<T> {
        let url = "https://api.github.com/graphql";

        debug!(owner = %self.owner(), repo = %self.repo(), "Posting GraphQL request");

        let request_body = json!({
            "query": query,
            "variables": variables,
        });

        let response = self
            .http()
            .post(url)
            .header("Authorization", format!("Bearer {}", self.token()))
            .header("User-Agent", "quill-github")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Other(format!("GraphQL request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response".to_string());
            return Err(Error::Remote(format!(
                "GraphQL request failed with status {}: {}",
                status, text
            )));
        }

        let graphql_response: GraphQLResponse<T> = response
            .json()
            .await
            .map_err(|e| Error::Parse(format!("Failed to parse GraphQL response: {}", e)))?;

        if let Some(errors) = graphql_response.errors {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(Error::Remote(messages.join(", ")));
        }

        graphql_response
            .data
            .ok_or_else(|| Error::Remote("GraphQL response missing data".to_string()))
    }
}
