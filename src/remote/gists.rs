//! Client for the gist host backing scratch papers.

use anyhow::{Context, Result};

use crate::model::{AlgorithmPayload, SourceFile, UserProfile};

use super::http_client::ensure_ok;
use super::types::RawGist;

/// Name of the marker file that tags a gist as a scratch paper belonging to
/// this system.
pub const GIST_MARKER_FILE: &str = "algorithm-visualizer";

pub trait GistApi {
    /// Sets (or clears) the bearer token attached to subsequent requests.
    fn authenticate(&mut self, token: Option<&str>) -> Result<()>;
    fn get_current_user(&self) -> Result<UserProfile>;
    fn list_gists(&self, page: usize, per_page: usize, cache_bust: i64) -> Result<Vec<RawGist>>;
    fn get_gist(&self, id: &str, cache_bust: i64) -> Result<RawGist>;
}

pub struct GistClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

impl GistClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("algoviz")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.into(),
            token: None,
            client,
        })
    }

    fn get(&self, path: &str) -> reqwest::blocking::RequestBuilder {
        let mut req = self.client.get(format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            req = req.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token));
        }
        req
    }
}

impl GistApi for GistClient {
    fn authenticate(&mut self, token: Option<&str>) -> Result<()> {
        self.token = token.map(str::to_string);
        Ok(())
    }

    fn get_current_user(&self) -> Result<UserProfile> {
        let resp = self.get("/user").send().context("get current user")?;
        let user: UserProfile = ensure_ok(resp, "get current user")?
            .json()
            .context("parse current user")?;
        Ok(user)
    }

    fn list_gists(&self, page: usize, per_page: usize, cache_bust: i64) -> Result<Vec<RawGist>> {
        let resp = self
            .get("/gists")
            .query(&[
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
                ("timestamp", cache_bust.to_string()),
            ])
            .send()
            .context("list gists")?;
        let out: Vec<RawGist> = ensure_ok(resp, "list gists")?
            .json()
            .context("parse gists")?;
        Ok(out)
    }

    fn get_gist(&self, id: &str, cache_bust: i64) -> Result<RawGist> {
        let resp = self
            .get(&format!("/gists/{}", id))
            .query(&[("timestamp", cache_bust.to_string())])
            .send()
            .context("get gist")?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("gist {} not found", id);
        }

        let out: RawGist = ensure_ok(resp, "get gist")?.json().context("parse gist")?;
        Ok(out)
    }
}

/// Translates a raw gist into the snapshot shape: the description becomes the
/// scratch-paper title and the marker file is dropped from the file list.
pub fn refine_gist(gist: RawGist) -> AlgorithmPayload {
    let title = gist
        .description
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "Untitled".to_string());
    let files = gist
        .files
        .into_values()
        .filter(|f| f.filename != GIST_MARKER_FILE)
        .map(|f| SourceFile::new(f.filename, f.content.unwrap_or_default()))
        .collect();
    AlgorithmPayload {
        titles: vec!["Scratch Paper".to_string(), title],
        files,
    }
}
