use std::collections::BTreeMap;

use serde::Deserialize;

use crate::model::{AlgorithmPayload, Category};

#[derive(Debug, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
pub struct AlgorithmResponse {
    pub algorithm: AlgorithmPayload,
}

/// A gist as the host returns it: a file map keyed by name. List responses
/// omit file contents; fetching a single gist includes them.
#[derive(Clone, Debug, Deserialize)]
pub struct RawGist {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub files: BTreeMap<String, GistFileMeta>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GistFileMeta {
    pub filename: String,
    #[serde(default)]
    pub content: Option<String>,
}
