//! Article collection.
//!
//! Articles live under `articles/` in the content root, either as a single
//! file or as a directory with an index:
//!
//! ```text
//! articles/
//! ├── hello-world.md            # slug: hello-world
//! └── platform-teams/
//!     ├── index.md              # slug: platform-teams
//!     └── diagram.png           # copied next to the rendered page
//! ```
//!
//! Each article starts with YAML front matter:
//!
//! ```markdown
//! ---
//! title: Platform Teams
//! description: What a platform team owes its users.
//! date: 2024-03-18
//! author: Jordan Rivera   # optional
//! ---
//!
//! Body in markdown.
//! ```
//!
//! A missing `articles/` directory is an empty collection, not an error.
//! Malformed front matter is an error naming the file.

use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory name of the collection inside the content root.
pub const ARTICLES_DIR: &str = "articles";

/// Extensions recognized as article sources.
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "mdx"];

#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Article has no front matter: {0}")]
    MissingFrontMatter(PathBuf),
    #[error("Invalid front matter in {path}: {source}")]
    FrontMatter {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Duplicate article slug '{0}'")]
    DuplicateSlug(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FrontMatter {
    title: String,
    description: String,
    date: NaiveDate,
    #[serde(default)]
    author: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub author: Option<String>,
    /// Markdown body after the front matter.
    pub body: String,
    /// Directory holding the article's companion files, for directory articles.
    pub bundle_dir: Option<PathBuf>,
}

impl Article {
    /// Site-absolute URL of the rendered article.
    pub fn url(&self) -> String {
        format!("/{ARTICLES_DIR}/{}/", self.slug)
    }
}

/// Split `---` delimited front matter from the body.
///
/// Returns `None` when the content does not open with a delimiter line or
/// the closing delimiter is missing.
pub fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let rest = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))?;

    // Empty front matter: closing delimiter right away.
    if let Some(body) = rest.strip_prefix("---") {
        return Some(("", strip_line_end(body)));
    }

    let close = rest.find("\n---")?;
    let yaml = &rest[..close];
    let body = &rest[close + 4..];
    Some((yaml, strip_line_end(body)))
}

fn strip_line_end(s: &str) -> &str {
    s.strip_prefix("\r\n")
        .or_else(|| s.strip_prefix('\n'))
        .unwrap_or(s)
}

/// Parse one article file.
pub fn parse_article(slug: &str, path: &Path, content: &str) -> Result<Article, ArticleError> {
    let (yaml, body) =
        split_front_matter(content).ok_or_else(|| ArticleError::MissingFrontMatter(path.into()))?;
    let meta: FrontMatter =
        serde_yaml::from_str(yaml).map_err(|source| ArticleError::FrontMatter {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Article {
        slug: slug.to_string(),
        title: meta.title,
        description: meta.description,
        date: meta.date,
        author: meta.author,
        body: body.to_string(),
        bundle_dir: None,
    })
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| MARKDOWN_EXTENSIONS.iter().any(|m| e.eq_ignore_ascii_case(m)))
        .unwrap_or(false)
}

fn find_index(dir: &Path) -> Option<PathBuf> {
    MARKDOWN_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("index.{ext}")))
        .find(|p| p.is_file())
}

/// Load every article under `dir`, newest first (ties by slug).
pub fn load_articles(dir: &Path) -> Result<Vec<Article>, ArticleError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();
    entries.sort();

    let mut articles: Vec<Article> = Vec::new();
    for path in entries {
        let name_part = if path.is_dir() {
            path.file_name()
        } else {
            path.file_stem()
        };
        let name = name_part
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        if name.starts_with('.') || name.starts_with('_') {
            continue;
        }

        let (file, bundle_dir) = if path.is_dir() {
            match find_index(&path) {
                Some(index) => (index, Some(path.clone())),
                None => continue,
            }
        } else if is_markdown(&path) {
            (path.clone(), None)
        } else {
            continue;
        };

        if articles.iter().any(|a| a.slug == name) {
            return Err(ArticleError::DuplicateSlug(name));
        }

        let content = fs::read_to_string(&file)?;
        let mut article = parse_article(&name, &file, &content)?;
        article.bundle_dir = bundle_dir;
        articles.push(article);
    }

    sort_newest_first(&mut articles);
    Ok(articles)
}

/// Date descending, then slug ascending.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
}

/// The `max_count` newest articles. Expects a collection already sorted by
/// [`load_articles`].
pub fn latest(articles: &[Article], max_count: usize) -> &[Article] {
    &articles[..articles.len().min(max_count)]
}

/// Human-readable date, e.g. `March 18, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn article_source(title: &str, date: &str) -> String {
        format!("---\ntitle: {title}\ndescription: About {title}\ndate: {date}\n---\n\n# {title}\n\nBody.\n")
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // =========================================================================
    // Front matter
    // =========================================================================

    #[test]
    fn split_front_matter_basic() {
        let (yaml, body) = split_front_matter("---\ntitle: A\n---\n\nBody").unwrap();
        assert_eq!(yaml, "title: A");
        assert_eq!(body, "\nBody");
    }

    #[test]
    fn split_front_matter_empty_block() {
        let (yaml, body) = split_front_matter("---\n---\nBody").unwrap();
        assert_eq!(yaml, "");
        assert_eq!(body, "Body");
    }

    #[test]
    fn split_front_matter_crlf() {
        let (yaml, body) = split_front_matter("---\r\ntitle: A\r\n---\r\nBody").unwrap();
        assert_eq!(yaml.trim(), "title: A");
        assert_eq!(body, "Body");
    }

    #[test]
    fn split_front_matter_absent() {
        assert!(split_front_matter("# Just markdown").is_none());
        assert!(split_front_matter("---\ntitle: unclosed").is_none());
    }

    #[test]
    fn parse_article_fields() {
        let src = "---\ntitle: Hello\ndescription: First post\ndate: 2024-01-02\nauthor: Jordan\n---\nBody **here**";
        let article = parse_article("hello", Path::new("hello.md"), src).unwrap();
        assert_eq!(article.slug, "hello");
        assert_eq!(article.title, "Hello");
        assert_eq!(article.date, date(2024, 1, 2));
        assert_eq!(article.author.as_deref(), Some("Jordan"));
        assert_eq!(article.body, "Body **here**");
        assert_eq!(article.url(), "/articles/hello/");
    }

    #[test]
    fn parse_article_bad_date() {
        let src = "---\ntitle: A\ndescription: B\ndate: yesterday\n---\n";
        let err = parse_article("a", Path::new("a.md"), src).unwrap_err();
        assert!(matches!(err, ArticleError::FrontMatter { .. }));
        assert!(err.to_string().contains("a.md"));
    }

    #[test]
    fn parse_article_without_front_matter() {
        let err = parse_article("a", Path::new("a.md"), "# Title").unwrap_err();
        assert!(matches!(err, ArticleError::MissingFrontMatter(_)));
    }

    // =========================================================================
    // Collection
    // =========================================================================

    #[test]
    fn missing_directory_is_empty() {
        let tmp = TempDir::new().unwrap();
        let articles = load_articles(&tmp.path().join("articles")).unwrap();
        assert!(articles.is_empty());
    }

    #[test]
    fn loads_files_and_bundles_newest_first() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path();
        fs::write(dir.join("older.md"), article_source("Older", "2022-05-01")).unwrap();
        fs::create_dir(dir.join("newest")).unwrap();
        fs::write(dir.join("newest/index.md"), article_source("Newest", "2024-02-01")).unwrap();
        fs::write(dir.join("middle.mdx"), article_source("Middle", "2023-07-15")).unwrap();
        fs::write(dir.join("notes.txt"), "not an article").unwrap();
        fs::create_dir(dir.join("empty-dir")).unwrap();

        let articles = load_articles(dir).unwrap();
        let slugs: Vec<&str> = articles.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newest", "middle", "older"]);
        assert_eq!(articles[0].bundle_dir.as_deref(), Some(dir.join("newest").as_path()));
        assert!(articles[2].bundle_dir.is_none());
    }

    #[test]
    fn same_date_orders_by_slug() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.md"), article_source("B", "2024-01-01")).unwrap();
        fs::write(tmp.path().join("a.md"), article_source("A", "2024-01-01")).unwrap();
        let articles = load_articles(tmp.path()).unwrap();
        assert_eq!(articles[0].slug, "a");
        assert_eq!(articles[1].slug, "b");
    }

    #[test]
    fn hidden_and_underscore_entries_skipped() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("_draft.md"), article_source("Draft", "2024-01-01")).unwrap();
        fs::write(tmp.path().join(".scratch.md"), "junk").unwrap();
        assert!(load_articles(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn duplicate_slug_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("post.md"), article_source("A", "2024-01-01")).unwrap();
        fs::create_dir(tmp.path().join("post")).unwrap();
        fs::write(tmp.path().join("post/index.md"), article_source("B", "2024-01-02")).unwrap();
        let err = load_articles(tmp.path()).unwrap_err();
        assert!(matches!(err, ArticleError::DuplicateSlug(s) if s == "post"));
    }

    #[test]
    fn malformed_article_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("bad.md"), "---\ntitle: [\n---\n").unwrap();
        assert!(load_articles(tmp.path()).is_err());
    }

    // =========================================================================
    // Latest / formatting
    // =========================================================================

    fn fixture_articles(n: usize) -> Vec<Article> {
        let mut articles: Vec<Article> = (0..n)
            .map(|i| Article {
                slug: format!("post-{i}"),
                title: format!("Post {i}"),
                description: String::new(),
                date: date(2020, 1, 1) + chrono::Days::new(i as u64 * 10),
                author: None,
                body: String::new(),
                bundle_dir: None,
            })
            .collect();
        sort_newest_first(&mut articles);
        articles
    }

    #[test]
    fn latest_caps_at_max_count() {
        let articles = fixture_articles(5);
        let top = latest(&articles, 3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].slug, "post-4");
        assert!(top.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn latest_with_fewer_articles_than_max() {
        let articles = fixture_articles(2);
        assert_eq!(latest(&articles, 3).len(), 2);
        assert!(latest(&[], 3).is_empty());
    }

    #[test]
    fn format_date_long_form() {
        assert_eq!(format_date(date(2024, 1, 2)), "January 2, 2024");
        assert_eq!(format_date(date(2023, 11, 30)), "November 30, 2023");
    }
}
