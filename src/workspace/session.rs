//! Sign-in/sign-out against the gist identity and the paginated
//! scratch-paper listing.

use anyhow::{Context, Result};

use crate::model::{AuthState, ScratchPaper};
use crate::remote::{GIST_MARKER_FILE, cache_bust};

use super::Workbench;

const GISTS_PAGE_SIZE: usize = 100;

impl Workbench {
    /// Authenticates with `token`, loads the user profile, then refreshes the
    /// scratch-paper listing. Any failure along the chain unwinds fully to
    /// signed-out: credential, user, and paper list are all cleared.
    pub fn sign_in(&mut self, token: &str) -> Result<()> {
        self.auth = AuthState::SigningIn;
        if let Err(err) = self.try_sign_in(token) {
            self.sign_out();
            return Err(err);
        }
        self.auth = AuthState::SignedIn;
        Ok(())
    }

    fn try_sign_in(&mut self, token: &str) -> Result<()> {
        self.store
            .set_access_token(token)
            .context("persist access token")?;
        self.gists.authenticate(Some(token))?;
        let user = self.gists.get_current_user()?;
        self.session.user = Some(user);
        self.refresh_scratch_papers()?;
        Ok(())
    }

    /// Clears the session. Remote deauthentication and credential removal are
    /// best-effort; local state is always cleared.
    pub fn sign_out(&mut self) {
        let _ = self.store.clear_access_token();
        let _ = self.gists.authenticate(None);
        self.session.user = None;
        self.session.scratch_papers.clear();
        self.auth = AuthState::SignedOut;
    }

    /// Walks the gist listing page by page, keeping only gists tagged with
    /// the marker file. Pagination stops at the first short page. The
    /// accumulated list replaces the session's papers only once every page
    /// has been fetched; a failing page leaves the previous list untouched.
    pub fn refresh_scratch_papers(&mut self) -> Result<()> {
        let mut papers = Vec::new();
        let mut page = 1;
        loop {
            let gists = self
                .gists
                .list_gists(page, GISTS_PAGE_SIZE, cache_bust())
                .with_context(|| format!("list gists page {}", page))?;
            let count = gists.len();
            papers.extend(
                gists
                    .into_iter()
                    .filter(|gist| gist.files.contains_key(GIST_MARKER_FILE))
                    .map(|gist| ScratchPaper {
                        key: gist.id,
                        name: gist.description.unwrap_or_default(),
                        file_names: gist.files.into_keys().collect(),
                    }),
            );
            if count < GISTS_PAGE_SIZE {
                break;
            }
            page += 1;
        }
        self.session.scratch_papers = papers;
        Ok(())
    }
}
