//! Shared test utilities for the folio test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let cache = ConfigCache::for_content_root(tmp.path());
//! let articles = load_articles(&tmp.path().join("articles")).unwrap();
//!
//! assert_eq!(article_slugs(&articles), vec!["platform-teams", "hello-world"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::articles::Article;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Lookups and extractors
// =========================================================================

/// Slugs in collection order.
pub fn article_slugs(articles: &[Article]) -> Vec<&str> {
    articles.iter().map(|a| a.slug.as_str()).collect()
}

/// Read a generated file relative to the output root. Panics with the path
/// on failure.
pub fn read_output(output: &Path, rel: &str) -> String {
    std::fs::read_to_string(output.join(rel))
        .unwrap_or_else(|e| panic!("cannot read {rel}: {e}"))
}
