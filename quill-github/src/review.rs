//! Pull request review submission

use quill_core::review::ReviewInput;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::{Error, GitHubClient, PullRequest, Result};

/// A submitted pull request review
#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    /// GraphQL node id of the review
    pub id: String,
    /// State GitHub recorded (APPROVED, CHANGES_REQUESTED, COMMENTED)
    pub state: String,
    /// Web URL of the review
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddReviewData {
    add_pull_request_review: Option<AddReviewPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddReviewPayload {
    pull_request_review: Option<Review>,
}

impl GitHubClient {
    /// Submit a review against a pull request
    ///
    /// Submission is never retried: review creation is not idempotent,
    /// so a rejection surfaces immediately to the caller.
    pub async fn add_review(&self, pr: &PullRequest, input: &ReviewInput) -> Result<Review> {
        if pr.id.is_empty() {
            return Err(Error::Parse(
                "pull request is missing its GraphQL node id".to_string(),
            ));
        }

        debug!(number = pr.number, event = input.state.event(), "Submitting review");

        let query = r#"
            mutation($pullRequestId: ID!, $event: PullRequestReviewEvent!, $body: String) {
                addPullRequestReview(input: {pullRequestId: $pullRequestId, event: $event, body: $body}) {
                    pullRequestReview {
                        id
                        state
                        url
                    }
                }
            }
        "#;

        let variables = json!({
            "pullRequestId": pr.id,
            "event": input.state.event(),
            "body": input.body,
        });

        let data: AddReviewData = self.graphql(query, &variables).await?;

        let review = data
            .add_pull_request_review
            .and_then(|payload| payload.pull_request_review)
            .ok_or_else(|| Error::Remote("review was not created".to_string()))?;

        info!(number = pr.number, state = %review.state, "Review submitted");

        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_review_response_decoding() {
        let json = r#"
        {
            "addPullRequestReview": {
                "pullRequestReview": {
                    "id": "PRR_node1",
                    "state": "APPROVED",
                    "url": "https://github.com/octo/spoon/pull/7#pullrequestreview-1"
                }
            }
        }
        "#;

        let data: AddReviewData = serde_json::from_str(json).unwrap();
        let review = data
            .add_pull_request_review
            .and_then(|p| p.pull_request_review)
            .unwrap();

        assert_eq!(review.id, "PRR_node1");
        assert_eq!(review.state, "APPROVED");
    }

    #[test]
    fn test_missing_payload_decodes_to_none() {
        let json = r#"{ "addPullRequestReview": null }"#;
        let data: AddReviewData = serde_json::from_str(json).unwrap();
        assert!(data.add_pull_request_review.is_none());
    }
}
