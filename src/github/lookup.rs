use crate::app_config::AppConfig;
use crate::github::domain::{Profile, RepoGet, UserGet};
use reqwest::Client;
use thiserror::Error;
use tracing::{info, instrument};

#[instrument(skip(client, config))]
pub async fn lookup_user(client: &Client, config: &AppConfig, username: &str) -> Result<Profile, GithubError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(GithubError::EmptyUsername);
    }

    info!("Retrieving GitHub user '{}'...", username);
    let base_url = format!("{}/users/{}", config.github().url(), username);

    let user = client
        .get(&base_url)
        .send()
        .await?
        .error_for_status()?
        .json::<UserGet>()
        .await?;

    let repos = client
        .get(format!("{}/repos", base_url))
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<RepoGet>>()
        .await?;

    info!("Retrieving GitHub user '{}'... OK, {} repositories found", username, repos.len());
    Ok(Profile::new(user, repos))
}

#[derive(Error, Debug)]
pub enum GithubError {
    #[error("username is empty")]
    EmptyUsername,
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn lookup_user_returns_the_mapped_profile() -> Result<(), GithubError> {
        let mut server = mockito::Server::new_async().await;

        let user_mock = server
            .mock("GET", "/users/octocat")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/github_user.json"))
            .create_async()
            .await;
        let repos_mock = server
            .mock("GET", "/users/octocat/repos")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/github_repos.json"))
            .create_async()
            .await;

        let config = AppConfigBuilder::new().github_url(server.url()).build();

        let profile = lookup_user(&Client::new(), &config, " octocat ").await?;

        user_mock.assert();
        repos_mock.assert();
        assert_eq!(
            profile,
            Profile {
                login: "octocat".to_string(),
                name: Some("The Octocat".to_string()),
                bio: None,
                followers: 9000,
                following: 9,
                account_type: "User".to_string(),
                avatar_url: "https://avatars.githubusercontent.com/u/583231?v=4".to_string(),
                repositories: vec!["Hello-World".to_string(), "boysenberry-repo-1".to_string()],
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn lookup_user_rejects_an_empty_username() {
        let config = AppConfigBuilder::new().build();

        let result = lookup_user(&Client::new(), &config, "  ").await;

        assert!(matches!(result, Err(GithubError::EmptyUsername)));
    }

    #[tokio::test]
    async fn lookup_user_fails_for_an_unknown_user() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server.mock("GET", "/users/nobody").with_status(404).create_async().await;

        let config = AppConfigBuilder::new().github_url(server.url()).build();

        let result = lookup_user(&Client::new(), &config, "nobody").await;

        assert!(matches!(result, Err(GithubError::Request(_))));
    }
}
