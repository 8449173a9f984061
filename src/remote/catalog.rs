//! Client for the curated algorithm catalog.

use anyhow::{Context, Result};

use crate::model::{AlgorithmPayload, Category};

use super::http_client::{ensure_ok, with_retries};
use super::types::{AlgorithmResponse, CategoriesResponse};

pub trait CatalogApi {
    fn get_categories(&self) -> Result<Vec<Category>>;
    fn get_algorithm(&self, category_key: &str, algorithm_key: &str) -> Result<AlgorithmPayload>;
}

pub struct CatalogClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("algoviz")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl CatalogApi for CatalogClient {
    fn get_categories(&self) -> Result<Vec<Category>> {
        let resp = with_retries("list categories", || {
            self.client
                .get(self.url("/categories"))
                .send()
                .context("list categories")
        })?;
        let out: CategoriesResponse = ensure_ok(resp, "list categories")?
            .json()
            .context("parse categories")?;
        Ok(out.categories)
    }

    fn get_algorithm(&self, category_key: &str, algorithm_key: &str) -> Result<AlgorithmPayload> {
        let resp = self
            .client
            .get(self.url(&format!("/algorithms/{}/{}", category_key, algorithm_key)))
            .send()
            .context("get algorithm")?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("algorithm {}/{} not found", category_key, algorithm_key);
        }

        let out: AlgorithmResponse = ensure_ok(resp, "get algorithm")?
            .json()
            .context("parse algorithm")?;
        Ok(out.algorithm)
    }
}
