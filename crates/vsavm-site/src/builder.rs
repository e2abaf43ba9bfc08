//! Site build orchestrator.
//!
//! Sequences the side-effecting steps of a build: precondition check,
//! directory preparation, legacy cleanup, then index and page emission.
//! The precondition check is a strict gate: no directory is created, no
//! file deleted, and no file written unless it passes. After that point
//! failures propagate without rollback; previously written files stay on
//! disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::page::{Page, PageKind};
use crate::registry;
use crate::shell::{Renderer, THEORY_INDEX_INTRO, WIKI_INDEX_INTRO};

/// Filename prefix of stale generator output from an earlier site layout.
/// Only ever accumulated under the theory directory.
const LEGACY_PREFIX: &str = "ds";

/// Configuration for building the documentation tree.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Docs root: the directory holding `assets/`, `theory/`, and `wiki/`.
    pub docs_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
        }
    }
}

/// Result of a completed build.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of individual pages written (indexes not included).
    pub pages: usize,

    /// Total build time in milliseconds.
    pub duration_ms: u64,

    /// Docs root the tree was written under.
    pub docs_dir: PathBuf,
}

/// Errors that can occur during a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("required stylesheet not found: {}", .0.display())]
    MissingStylesheet(PathBuf),

    #[error("failed to render document: {0}")]
    RenderError(String),

    #[error("failed to write output: {0}")]
    WriteError(String),

    #[error("failed to remove legacy pages: {0}")]
    CleanupError(String),
}

/// Builds the static documentation tree from the content registry.
pub struct SiteBuilder {
    config: BuildConfig,
    renderer: Renderer,
}

impl SiteBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            renderer: Renderer::new(),
        }
    }

    /// Run a full build. Steps execute strictly in order; pages are written
    /// in registry order so consecutive builds produce identical trees.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        // Validation phase. No mutating step below is reachable unless the
        // stylesheet precondition holds.
        self.check_stylesheet()?;

        let theory_dir = self.kind_dir(PageKind::Theory);
        let wiki_dir = self.kind_dir(PageKind::Wiki);
        fs::create_dir_all(&theory_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;
        fs::create_dir_all(&wiki_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        remove_legacy_pages(&theory_dir)?;

        let theory_pages = registry::theory_pages();
        let wiki_pages = registry::wiki_pages();

        self.write_index(&theory_dir, "Theory", THEORY_INDEX_INTRO, &theory_pages)?;
        self.write_index(&wiki_dir, "Wiki", WIKI_INDEX_INTRO, &wiki_pages)?;

        for page in theory_pages.iter().chain(wiki_pages.iter()) {
            self.write_page(page)?;
        }

        let pages = theory_pages.len() + wiki_pages.len();
        tracing::info!(
            "Wrote {} pages and 2 indexes under {}",
            pages,
            self.config.docs_dir.display()
        );

        Ok(BuildResult {
            pages,
            duration_ms: start.elapsed().as_millis() as u64,
            docs_dir: self.config.docs_dir.clone(),
        })
    }

    /// The shared stylesheet must already exist; its content is never
    /// inspected.
    fn check_stylesheet(&self) -> Result<(), BuildError> {
        let stylesheet = self.config.docs_dir.join("assets").join("site.css");
        if stylesheet.exists() {
            Ok(())
        } else {
            Err(BuildError::MissingStylesheet(stylesheet))
        }
    }

    fn kind_dir(&self, kind: PageKind) -> PathBuf {
        self.config.docs_dir.join(kind.dir_name())
    }

    fn write_index(
        &self,
        dir: &Path,
        title: &str,
        intro_html: &str,
        pages: &[Page],
    ) -> Result<(), BuildError> {
        let html = self
            .renderer
            .render_index(title, intro_html, pages)
            .map_err(|e| BuildError::RenderError(e.to_string()))?;
        fs::write(dir.join("index.html"), html)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;
        tracing::debug!("Wrote {} index", title);
        Ok(())
    }

    fn write_page(&self, page: &Page) -> Result<(), BuildError> {
        let html = self
            .renderer
            .render_page(page)
            .map_err(|e| BuildError::RenderError(e.to_string()))?;
        let path = self.kind_dir(page.kind).join(page.file_name());
        fs::write(&path, html).map_err(|e| BuildError::WriteError(e.to_string()))?;
        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }
}

/// Delete stale `ds*.html` artifacts from the theory directory. Finding
/// nothing to delete is the normal case, not an error.
fn remove_legacy_pages(theory_dir: &Path) -> Result<(), BuildError> {
    let entries = fs::read_dir(theory_dir).map_err(|e| BuildError::CleanupError(e.to_string()))?;
    for entry in entries {
        let entry = entry.map_err(|e| BuildError::CleanupError(e.to_string()))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.starts_with(LEGACY_PREFIX) && name.ends_with(".html") {
            fs::remove_file(entry.path()).map_err(|e| BuildError::CleanupError(e.to_string()))?;
            tracing::info!("Removed legacy page {}", name);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::{tempdir, TempDir};

    fn docs_root() -> (TempDir, PathBuf) {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        fs::create_dir_all(docs.join("assets")).unwrap();
        fs::write(docs.join("assets/site.css"), ":root {}\n").unwrap();
        (temp, docs)
    }

    fn builder(docs: &Path) -> SiteBuilder {
        SiteBuilder::new(BuildConfig {
            docs_dir: docs.to_path_buf(),
        })
    }

    #[test]
    fn missing_stylesheet_aborts_before_any_mutation() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        fs::create_dir_all(&docs).unwrap();

        let err = builder(&docs).build().unwrap_err();

        assert!(matches!(err, BuildError::MissingStylesheet(_)));
        assert!(!docs.join("theory").exists());
        assert!(!docs.join("wiki").exists());
    }

    #[test]
    fn missing_stylesheet_leaves_existing_files_untouched() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        fs::create_dir_all(docs.join("theory")).unwrap();
        fs::write(docs.join("theory/ds-report.html"), "stale").unwrap();

        builder(&docs).build().unwrap_err();

        // Even legacy files survive a failed precondition check.
        assert!(docs.join("theory/ds-report.html").exists());
    }

    #[test]
    fn build_writes_index_and_every_registered_page() {
        let (_temp, docs) = docs_root();

        let result = builder(&docs).build().unwrap();

        assert!(docs.join("theory/index.html").exists());
        assert!(docs.join("wiki/index.html").exists());
        for page in registry::theory_pages() {
            assert!(docs.join("theory").join(page.file_name()).exists());
        }
        for page in registry::wiki_pages() {
            assert!(docs.join("wiki").join(page.file_name()).exists());
        }
        assert_eq!(
            result.pages,
            registry::theory_pages().len() + registry::wiki_pages().len()
        );
    }

    #[test]
    fn written_page_heading_equals_registered_title() {
        let (_temp, docs) = docs_root();
        builder(&docs).build().unwrap();

        for page in registry::theory_pages() {
            let html = fs::read_to_string(docs.join("theory").join(page.file_name())).unwrap();
            assert!(html.contains(&format!("<h1>{}</h1>", page.title)));
        }
    }

    #[test]
    fn index_card_links_resolve_within_the_same_build() {
        let (_temp, docs) = docs_root();
        builder(&docs).build().unwrap();

        for (dir, pages) in [
            ("theory", registry::theory_pages()),
            ("wiki", registry::wiki_pages()),
        ] {
            let index = fs::read_to_string(docs.join(dir).join("index.html")).unwrap();
            for page in pages {
                assert!(index.contains(&format!("href=\"{}\"", page.file_name())));
                assert!(docs.join(dir).join(page.file_name()).exists());
            }
        }
    }

    #[test]
    fn legacy_theory_pages_are_removed_and_others_kept() {
        let (_temp, docs) = docs_root();
        fs::create_dir_all(docs.join("theory")).unwrap();
        fs::create_dir_all(docs.join("wiki")).unwrap();
        fs::write(docs.join("theory/ds-report.html"), "stale").unwrap();
        fs::write(docs.join("theory/notes.txt"), "keep").unwrap();
        // Cleanup only ever scans the theory directory.
        fs::write(docs.join("wiki/ds-report.html"), "stale").unwrap();

        builder(&docs).build().unwrap();

        assert!(!docs.join("theory/ds-report.html").exists());
        assert_eq!(fs::read_to_string(docs.join("theory/notes.txt")).unwrap(), "keep");
        assert!(docs.join("wiki/ds-report.html").exists());
    }

    #[test]
    fn consecutive_builds_are_byte_identical() {
        let (_temp, docs) = docs_root();
        let site = builder(&docs);

        site.build().unwrap();
        let first_page = fs::read_to_string(docs.join("theory/vision.html")).unwrap();
        let first_index = fs::read_to_string(docs.join("wiki/index.html")).unwrap();

        site.build().unwrap();
        let second_page = fs::read_to_string(docs.join("theory/vision.html")).unwrap();
        let second_index = fs::read_to_string(docs.join("wiki/index.html")).unwrap();

        assert_eq!(first_page, second_page);
        assert_eq!(first_index, second_index);
    }

    #[test]
    fn directory_preparation_is_idempotent() {
        let (_temp, docs) = docs_root();
        fs::create_dir_all(docs.join("theory")).unwrap();
        fs::create_dir_all(docs.join("wiki")).unwrap();

        builder(&docs).build().unwrap();
        assert!(docs.join("theory/index.html").exists());
    }
}
