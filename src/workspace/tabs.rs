//! Editor tab and file-list consistency: the add-file sentinel, unique
//! untitled naming, rename, and delete.

use anyhow::Result;

use crate::model::SourceFile;

use super::Workbench;

impl Workbench {
    /// Selects an editor tab. Passing the index one past the end (the
    /// synthetic "add" tab) first appends a fresh untitled file, then selects
    /// it. Every change requests a visualization rebuild.
    pub fn set_active_tab(&mut self, index: usize) {
        if index == self.current.files.len() {
            let name = self.unique_untitled();
            self.current.files.push(SourceFile::new(name, ""));
        }
        let last = self.current.files.len().saturating_sub(1);
        self.panes.active_tab = Some(index.min(last));
        self.needs_rebuild = true;
    }

    /// `untitled`, or `untitled-N` for the smallest N not already taken.
    fn unique_untitled(&self) -> String {
        let mut name = "untitled".to_string();
        let mut count = 0;
        while self.current.files.iter().any(|f| f.name == name) {
            count += 1;
            name = format!("untitled-{}", count);
        }
        name
    }

    pub fn active_file(&self) -> Option<&SourceFile> {
        self.panes
            .active_tab
            .and_then(|index| self.current.files.get(index))
    }

    pub fn set_active_file_content(&mut self, content: impl Into<String>) {
        if let Some(index) = self.panes.active_tab
            && let Some(file) = self.current.files.get_mut(index)
        {
            file.content = content.into();
            self.needs_rebuild = true;
        }
    }

    /// Renames the active file. A name already used by a different file is
    /// rejected so names stay pairwise distinct.
    pub fn rename_active_file(&mut self, new_name: &str) -> Result<()> {
        let Some(index) = self.panes.active_tab else {
            anyhow::bail!("no active file");
        };
        if self
            .current
            .files
            .iter()
            .enumerate()
            .any(|(i, f)| i != index && f.name == new_name)
        {
            anyhow::bail!("a file named {} already exists", new_name);
        }
        self.current.files[index].name = new_name.to_string();
        self.needs_rebuild = true;
        Ok(())
    }

    /// Deletes the active file and clamps the selection into the shortened
    /// list. Deleting the only file replaces it with an empty untitled
    /// placeholder so the workspace never empties out.
    pub fn delete_active_file(&mut self) {
        let Some(index) = self.panes.active_tab else {
            return;
        };
        if self.current.files.len() <= 1 {
            self.current.files.clear();
            // The add-tab sentinel: appends a fresh untitled file at 0.
            self.set_active_tab(0);
            return;
        }
        self.current.files.remove(index);
        let last = self.current.files.len() - 1;
        self.panes.active_tab = Some(index.min(last));
        self.needs_rebuild = true;
    }
}
