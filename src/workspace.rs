//! The workbench: single owner of the current algorithm snapshot, the
//! last-loaded baseline, the session, and the pane state. Everything the
//! shell renders is derived from here; everything that mutates workspace
//! state goes through here.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::{
    AuthState, Baseline, Category, CurrentAlgorithm, Locator, PaneState, Session, SourceFile,
};
use crate::remote::{CatalogApi, GistApi};
use crate::store::LocalStore;

mod loader;
mod navigation;
mod session;
mod tabs;

pub use self::navigation::{RouteAction, RouteOrigin, arbitrate, parse_route, route_for};

/// Synchronous user confirmation consulted before discarding unsaved changes.
/// The shell backs this with a blocking prompt; tests use [`AlwaysDiscard`].
pub trait DiscardPrompt {
    fn confirm_discard(&mut self) -> bool;
}

pub struct AlwaysDiscard;

impl DiscardPrompt for AlwaysDiscard {
    fn confirm_discard(&mut self) -> bool {
        true
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

pub struct Workbench {
    catalog: Box<dyn CatalogApi>,
    gists: Box<dyn GistApi>,
    prompt: Box<dyn DiscardPrompt>,
    store: LocalStore,
    preferred_ext: String,

    current: CurrentAlgorithm,
    baseline: Baseline,
    panes: PaneState,
    session: Session,
    auth: AuthState,
    categories: Vec<Category>,

    notices: Vec<Notice>,
    needs_rebuild: bool,
}

impl Workbench {
    pub fn new(
        catalog: Box<dyn CatalogApi>,
        gists: Box<dyn GistApi>,
        prompt: Box<dyn DiscardPrompt>,
        store: LocalStore,
        preferred_ext: impl Into<String>,
    ) -> Self {
        let welcome = loader::welcome_algorithm();
        Self {
            catalog,
            gists,
            prompt,
            store,
            preferred_ext: preferred_ext.into(),
            current: CurrentAlgorithm {
                locator: Locator::None,
                titles: welcome.titles.clone(),
                files: welcome.files.clone(),
            },
            baseline: Baseline {
                titles: welcome.titles,
                files: welcome.files,
            },
            panes: PaneState::default(),
            session: Session::default(),
            auth: AuthState::SignedOut,
            categories: Vec::new(),
            notices: Vec::new(),
            needs_rebuild: false,
        }
    }

    /// Launch sequence: load the requested algorithm, restore a persisted
    /// sign-in, then fetch the category catalog. A stale credential silently
    /// unwinds to signed-out; a catalog failure surfaces as a notice.
    pub fn startup(&mut self, initial: &Locator) {
        self.load_algorithm(initial.clone(), false);

        if let Ok(Some(token)) = self.store.access_token() {
            let _ = self.sign_in(&token);
        }

        match self.catalog.get_categories() {
            Ok(categories) => self.categories = categories,
            Err(err) => self.push_error(format!("{:#}", err)),
        }
    }

    /// True when the workspace matches the last-loaded baseline. Titles
    /// compare in order; files compare on (name, content) only, so
    /// contributor metadata never marks the workspace dirty.
    pub fn is_saved(&self) -> bool {
        self.current.titles == self.baseline.titles
            && self.current.files.len() == self.baseline.files.len()
            && self
                .current
                .files
                .iter()
                .zip(&self.baseline.files)
                .all(|(a, b)| a.name == b.name && a.content == b.content)
    }

    pub fn window_title(&self) -> String {
        let joined = self.current.titles.join(" - ");
        if self.is_saved() {
            joined
        } else {
            format!("(Unsaved) {}", joined)
        }
    }

    /// First non-blank line following the leading `# ` heading of README.md,
    /// or empty when there is no README or no such line.
    pub fn description(&self) -> String {
        static DESCRIPTION_RE: OnceLock<Regex> = OnceLock::new();

        let Some(readme) = self.current.files.iter().find(|f| f.name == "README.md") else {
            return String::new();
        };
        let re = DESCRIPTION_RE
            .get_or_init(|| Regex::new(r"^\s*# .*\n+([^\n]+)").expect("description regex"));
        re.captures(&readme.content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    pub fn locator(&self) -> &Locator {
        &self.current.locator
    }

    pub fn titles(&self) -> &[String] {
        &self.current.titles
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.current.files
    }

    pub fn panes(&self) -> &PaneState {
        &self.panes
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn auth_state(&self) -> AuthState {
        self.auth
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn preferred_ext(&self) -> &str {
        &self.preferred_ext
    }

    pub fn toggle_navigator(&mut self) {
        self.panes.navigator_open = !self.panes.navigator_open;
    }

    pub fn set_pane_weights(&mut self, weights: [u16; 3]) {
        self.panes.weights = weights;
    }

    pub(crate) fn push_error(&mut self, msg: impl Into<String>) {
        self.notices.push(Notice::Error(msg.into()));
    }

    /// Hands pending notices to the shell, clearing the queue.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// True once since the last call if the visualization must rebuild.
    pub fn take_rebuild_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_rebuild)
    }
}


#[cfg(test)]
mod tests {
    use super::testkit::{FakeCatalog, FakeGists, bench, sample_algorithm};
    use crate::model::Locator;

    #[test]
    fn saved_after_load_dirty_after_edit_clean_after_revert() {
        let catalog = FakeCatalog::default().with_algorithm("sorting", "bubble-sort", sample_algorithm());
        let (mut bench, _tmp) = bench(catalog, FakeGists::default());

        bench.load_algorithm(Locator::catalog("sorting", "bubble-sort"), true);
        assert!(bench.is_saved());

        let original = bench.files()[1].content.clone();
        bench.set_active_tab(1);
        bench.set_active_file_content("// edited\n");
        assert!(!bench.is_saved());

        bench.set_active_file_content(original);
        assert!(bench.is_saved());
    }

    #[test]
    fn rename_marks_workspace_dirty() {
        let catalog = FakeCatalog::default().with_algorithm("sorting", "bubble-sort", sample_algorithm());
        let (mut bench, _tmp) = bench(catalog, FakeGists::default());
        bench.load_algorithm(Locator::catalog("sorting", "bubble-sort"), true);

        bench.set_active_tab(1);
        bench.rename_active_file("main.js").expect("rename");
        assert!(!bench.is_saved());
    }

    #[test]
    fn contributor_metadata_does_not_dirty() {
        let catalog = FakeCatalog::default().with_algorithm("sorting", "bubble-sort", sample_algorithm());
        let (mut bench, _tmp) = bench(catalog, FakeGists::default());
        bench.load_algorithm(Locator::catalog("sorting", "bubble-sort"), true);

        bench.current.files[0].contributors = Some(crate::skeletons::maintainers());
        assert!(bench.is_saved());
    }

    #[test]
    fn window_title_prefixes_unsaved() {
        let catalog = FakeCatalog::default().with_algorithm("sorting", "bubble-sort", sample_algorithm());
        let (mut bench, _tmp) = bench(catalog, FakeGists::default());
        bench.load_algorithm(Locator::catalog("sorting", "bubble-sort"), true);

        assert_eq!(bench.window_title(), "Sorting - Bubble Sort");
        bench.set_active_tab(1);
        bench.set_active_file_content("// edited\n");
        assert_eq!(bench.window_title(), "(Unsaved) Sorting - Bubble Sort");
    }

    #[test]
    fn description_comes_from_readme_heading() {
        let catalog = FakeCatalog::default().with_algorithm("sorting", "bubble-sort", sample_algorithm());
        let (mut bench, _tmp) = bench(catalog, FakeGists::default());
        bench.load_algorithm(Locator::catalog("sorting", "bubble-sort"), true);

        assert_eq!(bench.description(), "Swap until sorted.");
    }

    #[test]
    fn description_empty_without_readme_or_heading() {
        let catalog = FakeCatalog::default().with_algorithm("sorting", "bubble-sort", sample_algorithm());
        let (mut bench, _tmp) = bench(catalog, FakeGists::default());
        bench.load_algorithm(Locator::catalog("sorting", "bubble-sort"), true);

        bench.set_active_tab(0);
        bench.set_active_file_content("plain text, no heading\n");
        assert_eq!(bench.description(), "");

        bench.rename_active_file("NOTES.md").expect("rename");
        assert_eq!(bench.description(), "");
    }
}
