use serde::{Deserialize, Serialize};

/// Gist id sentinel meaning "open a fresh scratch paper".
pub const NEW_GIST_ID: &str = "new";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub login: String,
    pub avatar_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributors: Option<Vec<Contributor>>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            contributors: None,
        }
    }
}

/// Where the current algorithm was loaded from.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Locator {
    Catalog {
        category_key: String,
        algorithm_key: String,
    },
    Gist {
        gist_id: String,
    },
    #[default]
    None,
}

impl Locator {
    pub fn catalog(category_key: impl Into<String>, algorithm_key: impl Into<String>) -> Self {
        Self::Catalog {
            category_key: category_key.into(),
            algorithm_key: algorithm_key.into(),
        }
    }

    pub fn gist(gist_id: impl Into<String>) -> Self {
        Self::Gist {
            gist_id: gist_id.into(),
        }
    }
}

/// One loadable unit of content: display titles plus its files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmPayload {
    pub titles: Vec<String>,
    pub files: Vec<SourceFile>,
}

#[derive(Clone, Debug)]
pub struct CurrentAlgorithm {
    pub locator: Locator,
    pub titles: Vec<String>,
    pub files: Vec<SourceFile>,
}

/// Deep copy of (titles, files) captured when a load completes. Only ever
/// replaced wholesale; in-editor edits never touch it.
#[derive(Clone, Debug)]
pub struct Baseline {
    pub titles: Vec<String>,
    pub files: Vec<SourceFile>,
}

#[derive(Clone, Debug)]
pub struct PaneState {
    pub navigator_open: bool,
    pub weights: [u16; 3],
    pub active_tab: Option<usize>,
}

impl Default for PaneState {
    fn default() -> Self {
        Self {
            navigator_open: true,
            weights: [1, 2, 2],
            active_tab: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    SignedOut,
    SigningIn,
    SignedIn,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub avatar_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScratchPaper {
    pub key: String,
    pub name: String,
    pub file_names: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub scratch_papers: Vec<ScratchPaper>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub key: String,
    pub name: String,
}
