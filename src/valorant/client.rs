use serde::de::DeserializeOwned;

use super::{ContentTier, Error, Weapon};
use crate::api::ApiResponse;

pub struct Client {
    base_url: String,
    language: Option<String>,
    client: reqwest::Client,
}

impl Client {
    pub fn new(base_url: impl AsRef<str>, language: Option<String>) -> Result<Self, Error> {
        Ok(Self {
            base_url: base_url.as_ref().trim_end_matches('/').to_owned(),
            language,
            client: reqwest::Client::builder()
                .user_agent(concat!("valorant-lootbox/", env!("CARGO_PKG_VERSION")))
                .build()?,
        })
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, Error> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("GET {}", url);
        let mut request = self.client.get(url);
        if let Some(language) = &self.language {
            request = request.query(&[("language", language)]);
        }
        let response = request.send().await?;
        log::trace!("http response status: {}", response.status());
        let body = response.text().await?;
        log::trace!("http response body: {} bytes", body.len());
        match serde_json::from_str(&body)? {
            ApiResponse::Success { data, .. } => Ok(data),
            ApiResponse::Error { status, error } => Err(Error::Api {
                status,
                message: error,
            }),
        }
    }

    pub async fn weapons(&self) -> Result<Vec<Weapon>, Error> {
        self.get("weapons").await
    }

    pub async fn content_tiers(&self) -> Result<Vec<ContentTier>, Error> {
        self.get("contenttiers").await
    }

    pub async fn icon(&self, url: &str) -> Result<Vec<u8>, Error> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
