use async_trait::async_trait;
use quiz_core::model::ModuleDraft;
use tracing::debug;
use url::Url;

use super::{QuizSource, SourceError};
use crate::document::QuizDocument;

/// Fetches the quiz document over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpSource {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl QuizSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<ModuleDraft>, SourceError> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::HttpStatus {
                url: self.url.clone(),
                status,
            });
        }

        let bytes = response.bytes().await?;
        debug!(url = %self.url, bytes = bytes.len(), "quiz document downloaded");
        Ok(QuizDocument::from_slice(&bytes)?.into_modules())
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
