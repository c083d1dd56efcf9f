use crate::models::Article;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),

    #[error("malformed article payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Anything that can hand out a random article.
pub trait ArticleSource {
    fn fetch_random(&self) -> Result<Article, FetchError>;
}

pub fn random_summary_endpoint(language: &str) -> String {
    format!("https://{language}.wikipedia.org/api/rest_v1/page/random/summary")
}

pub struct WikipediaClient {
    http: Client,
    endpoint: String,
}

impl WikipediaClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            // wikimedia asks API clients to identify themselves
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ArticleSource for WikipediaClient {
    fn fetch_random(&self) -> Result<Article, FetchError> {
        info!(endpoint = %self.endpoint, "fetching random article");

        let response = self.http.get(&self.endpoint).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text()?;
        debug!(bytes = body.len(), "summary received");
        parse_article(&body)
    }
}

pub fn parse_article(body: &str) -> Result<Article, FetchError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_uses_language_subdomain() {
        assert_eq!(
            random_summary_endpoint("fr"),
            "https://fr.wikipedia.org/api/rest_v1/page/random/summary"
        );
    }

    #[test]
    fn parses_summary_and_ignores_extra_fields() {
        let body = r#"{
            "type": "standard",
            "title": "Bordeaux",
            "description": "commune française",
            "extract": "Bordeaux est une commune du Sud-Ouest de la France.",
            "lang": "fr"
        }"#;
        let article = parse_article(body).unwrap();
        assert_eq!(article.title, "Bordeaux");
        assert_eq!(article.description, "commune française");
        assert!(article.extract.starts_with("Bordeaux est"));
    }

    #[test]
    fn missing_extract_is_malformed() {
        let err = parse_article(r#"{"title": "Bordeaux"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn non_json_is_malformed() {
        let err = parse_article("<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
        assert!(err.to_string().starts_with("malformed article payload"));
    }
}
