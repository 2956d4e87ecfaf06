use crate::app_config::AppConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the client shared by the info-beamer and GitHub calls. GitHub rejects requests without a user agent.
pub fn new_client(config: &AppConfig) -> Result<Client, HttpClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(config.core().request_timeout())
        .build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum HttpClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;

    #[tokio::test]
    async fn new_client_sets_the_user_agent_and_accept_headers() -> Result<(), HttpClientError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .match_header("user-agent", USER_AGENT)
            .match_header("accept", "application/json")
            .create_async()
            .await;

        let config = AppConfigBuilder::new().build();
        let client = new_client(&config)?;

        client.get(format!("{}{}", server.url(), "/")).send().await?;

        // Verify that the call came in and that the headers are set
        mock.assert();

        Ok(())
    }
}
