//! Pull request lookup

use chrono::{DateTime, Utc};
use octocrab::models::pulls::PullRequest as OctocrabPR;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::{Error, GitHubClient, Result};

/// Pull request representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// GraphQL node id, required for review mutations
    pub id: String,
    /// PR title
    pub title: String,
    /// Head branch name
    pub head_branch: String,
    /// Owner of the repository the head branch lives in
    pub head_owner: Option<String>,
    /// Web URL of the pull request
    pub url: Option<String>,
    /// When the PR was created
    pub created_at: Option<DateTime<Utc>>,
    /// When the PR was last updated
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<OctocrabPR> for PullRequest {
    fn from(pr: OctocrabPR) -> Self {
        let head_owner = pr
            .head
            .repo
            .as_ref()
            .and_then(|r| r.owner.as_ref())
            .map(|o| o.login.clone());

        PullRequest {
            number: pr.number,
            id: pr.node_id.unwrap_or_default(),
            title: pr.title.unwrap_or_default(),
            head_branch: pr.head.ref_field,
            head_owner,
            url: pr.html_url.map(|u| u.to_string()),
            created_at: pr.created_at,
            updated_at: pr.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
struct BranchLookup {
    repository: Option<RepositoryData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryData {
    pull_requests: PullRequestConnection,
}

#[derive(Debug, Deserialize)]
struct PullRequestConnection {
    nodes: Vec<PullRequestNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullRequestNode {
    id: String,
    number: u64,
    title: String,
    url: Option<String>,
    head_ref_name: String,
    head_repository_owner: Option<OwnerNode>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct OwnerNode {
    login: String,
}

impl From<PullRequestNode> for PullRequest {
    fn from(node: PullRequestNode) -> Self {
        PullRequest {
            number: node.number,
            id: node.id,
            title: node.title,
            head_branch: node.head_ref_name,
            head_owner: node.head_repository_owner.map(|o| o.login),
            url: node.url,
            created_at: node.created_at,
            updated_at: node.updated_at,
        }
    }
}

impl GitHubClient {
    /// Get a pull request by number
    pub async fn pr_by_number(&self, number: u64) -> Result<PullRequest> {
        debug!(number, "Fetching pull request");

        let pr = self
            .client()
            .pulls(self.owner(), self.repo())
            .get(number)
            .await
            .map_err(|e| match &e {
                octocrab::Error::GitHub { source, .. }
                    if source.message.contains("Not Found") =>
                {
                    Error::PrNotFound(number)
                }
                _ => Error::Api(e),
            })?;

        Ok(pr.into())
    }

    /// Find the open pull request whose head is the given branch
    ///
    /// The selector is either a bare branch name or `owner:branch` for
    /// a branch pushed to a fork.
    pub async fn pr_for_branch(&self, selector: &str) -> Result<PullRequest> {
        let (owner_filter, head_ref) = match selector.split_once(':') {
            Some((owner, branch)) => (Some(owner), branch),
            None => (None, selector),
        };

        debug!(branch = %head_ref, owner = ?owner_filter, "Looking up pull request for branch");

        let query = r#"
            query($owner: String!, $repo: String!, $headRefName: String!) {
                repository(owner: $owner, name: $repo) {
                    pullRequests(headRefName: $headRefName, states: OPEN, first: 30) {
                        nodes {
                            id
                            number
                            title
                            url
                            headRefName
                            headRepositoryOwner {
                                login
                            }
                            createdAt
                            updatedAt
                        }
                    }
                }
            }
        "#;

        let variables = json!({
            "owner": self.owner(),
            "repo": self.repo(),
            "headRefName": head_ref,
        });

        let response: BranchLookup = self.graphql(query, &variables).await?;

        let nodes = response
            .repository
            .map(|r| r.pull_requests.nodes)
            .unwrap_or_default();

        pick_branch_node(nodes, owner_filter)
            .map(PullRequest::from)
            .ok_or_else(|| Error::NoPrForBranch(selector.to_string()))
    }
}

/// Pick the pull request matching an optional head-owner qualifier
fn pick_branch_node(
    nodes: Vec<PullRequestNode>,
    owner_filter: Option<&str>,
) -> Option<PullRequestNode> {
    nodes.into_iter().find(|node| match owner_filter {
        Some(owner) => node
            .head_repository_owner
            .as_ref()
            .is_some_and(|o| o.login == owner),
        None => true,
    })
}
