use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const STORE_DIR: &str = ".algoviz";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub version: u32,
    pub catalog_url: String,
    pub gist_url: String,
    pub preferred_ext: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            catalog_url: "https://algorithm-visualizer.org/api".to_string(),
            gist_url: "https://api.github.com".to_string(),
            preferred_ext: "js".to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct StoredState {
    version: u32,
    #[serde(default)]
    access_token: Option<String>,
}

#[derive(Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn store_dir(home: &Path) -> PathBuf {
        home.join(STORE_DIR)
    }

    /// Opens the store under `home`, creating the directory and default files
    /// on first use.
    pub fn open_or_init(home: &Path) -> Result<Self> {
        let root = Self::store_dir(home);
        fs::create_dir_all(&root)
            .with_context(|| format!("create store dir {}", root.display()))?;
        let store = Self { root };
        if !store.config_path().exists() {
            store.write_config(&AppConfig::default())?;
        }
        if !store.state_path().exists() {
            store.write_state(&StoredState {
                version: 1,
                access_token: None,
            })?;
        }
        Ok(store)
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.json")
    }

    fn state_path(&self) -> PathBuf {
        self.root.join("state.json")
    }

    pub fn read_config(&self) -> Result<AppConfig> {
        let bytes = fs::read(self.config_path()).context("read config.json")?;
        let cfg: AppConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &AppConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.config_path(), &bytes).context("write config.json")?;
        Ok(())
    }

    fn read_state(&self) -> Result<StoredState> {
        let path = self.state_path();
        if !path.exists() {
            return Ok(StoredState {
                version: 1,
                access_token: None,
            });
        }
        let bytes = fs::read(&path).context("read state.json")?;
        let st: StoredState = serde_json::from_slice(&bytes).context("parse state.json")?;
        if st.version != 1 {
            anyhow::bail!("unsupported state version {}", st.version);
        }
        Ok(st)
    }

    fn write_state(&self, st: &StoredState) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(st).context("serialize state")?;
        write_atomic(&self.state_path(), &bytes).context("write state.json")?;
        Ok(())
    }

    pub fn access_token(&self) -> Result<Option<String>> {
        Ok(self.read_state()?.access_token)
    }

    pub fn set_access_token(&self, token: &str) -> Result<()> {
        let mut st = self.read_state()?;
        st.access_token = Some(token.to_string());
        self.write_state(&st)
    }

    pub fn clear_access_token(&self) -> Result<()> {
        let mut st = self.read_state()?;
        st.access_token = None;
        self.write_state(&st)
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_writes_default_config() -> Result<()> {
        let tmp = tempfile::tempdir().context("create tempdir")?;
        let store = LocalStore::open_or_init(tmp.path())?;
        let cfg = store.read_config()?;
        assert_eq!(cfg.preferred_ext, "js");
        assert!(cfg.catalog_url.starts_with("https://"));
        Ok(())
    }

    #[test]
    fn access_token_roundtrip() -> Result<()> {
        let tmp = tempfile::tempdir().context("create tempdir")?;
        let store = LocalStore::open_or_init(tmp.path())?;

        assert_eq!(store.access_token()?, None);
        store.set_access_token("tok-123")?;
        assert_eq!(store.access_token()?, Some("tok-123".to_string()));

        // Reopening reads the persisted value.
        let reopened = LocalStore::open_or_init(tmp.path())?;
        assert_eq!(reopened.access_token()?, Some("tok-123".to_string()));

        reopened.clear_access_token()?;
        assert_eq!(store.access_token()?, None);
        Ok(())
    }
}
