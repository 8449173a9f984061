//! Algorithm loading: locator resolution, the welcome fallback, and the
//! atomic snapshot + baseline commit.

use anyhow::Result;

use crate::model::{AlgorithmPayload, Baseline, Locator, NEW_GIST_ID, SourceFile};
use crate::remote::{cache_bust, refine_gist};
use crate::skeletons::{self, EXECUTABLE_EXTS, extension};

use super::Workbench;

impl Workbench {
    /// Loads the algorithm at `locator`, replacing the current snapshot and
    /// the saved baseline together. Unless `force` is set, unsaved changes
    /// ask the discard prompt first; declining makes the whole call a no-op.
    /// Resolution or fetch failure falls back to the welcome algorithm with
    /// no locator, never to an error.
    ///
    /// Loads are not cancellable; if a caller issues a second load while one
    /// is resolving, the last commit wins.
    pub fn load_algorithm(&mut self, locator: Locator, force: bool) {
        if !force && !self.is_saved() && !self.prompt.confirm_discard() {
            return;
        }

        let (locator, algorithm) = match self.resolve(&locator) {
            Ok(algorithm) => (locator, algorithm),
            Err(_) => (Locator::None, welcome_algorithm()),
        };

        self.current.locator = locator;
        self.current.titles = algorithm.titles.clone();
        self.current.files = algorithm.files.clone();
        self.baseline = Baseline {
            titles: algorithm.titles,
            files: algorithm.files,
        };

        self.select_initial_tab();
    }

    /// First match wins: catalog coordinates, the new-scratch-paper sentinel,
    /// a real gist id, then nothing (which reads as failure to the caller).
    fn resolve(&self, locator: &Locator) -> Result<AlgorithmPayload> {
        match locator {
            Locator::Catalog {
                category_key,
                algorithm_key,
            } => self.catalog.get_algorithm(category_key, algorithm_key),
            Locator::Gist { gist_id } if gist_id == NEW_GIST_ID => {
                Ok(scratch_paper(&self.preferred_ext))
            }
            Locator::Gist { gist_id } => {
                let raw = self.gists.get_gist(gist_id, cache_bust())?;
                Ok(refine_gist(raw))
            }
            Locator::None => anyhow::bail!("no algorithm to load"),
        }
    }

    /// Prefers a file matching the preferred extension, then any executable
    /// extension, then the first file. Runs on every completed load,
    /// fallback included.
    fn select_initial_tab(&mut self) {
        let files = &self.current.files;
        let index = files
            .iter()
            .position(|f| extension(&f.name) == self.preferred_ext)
            .or_else(|| {
                files
                    .iter()
                    .position(|f| EXECUTABLE_EXTS.contains(&extension(&f.name)))
            })
            .or(if files.is_empty() { None } else { Some(0) });

        match index {
            Some(index) => self.set_active_tab(index),
            None => {
                self.panes.active_tab = None;
                self.needs_rebuild = true;
            }
        }
    }
}

/// The canonical default algorithm every failed load lands on.
pub(super) fn welcome_algorithm() -> AlgorithmPayload {
    AlgorithmPayload {
        titles: vec!["Algorithm Visualizer".to_string()],
        files: vec![SourceFile {
            name: "README.md".to_string(),
            content: skeletons::README_MD.to_string(),
            contributors: Some(skeletons::maintainers()),
        }],
    }
}

fn scratch_paper(ext: &str) -> AlgorithmPayload {
    AlgorithmPayload {
        titles: vec!["Scratch Paper".to_string(), "Untitled".to_string()],
        files: vec![
            SourceFile::new("README.md", skeletons::SCRATCH_PAPER_MD),
            SourceFile::new(
                format!("code.{}", ext),
                skeletons::skeleton_for(ext).unwrap_or(""),
            ),
        ],
    }
}
