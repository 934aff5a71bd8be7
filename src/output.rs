//! CLI output formatting for `check` and `build`.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Every entity leads
//! with its identity (article title, page title) and positional index;
//! filesystem paths and dates follow as indented context lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Config
//!     config.yaml
//!     Jordan Rivera (Staff Platform Engineer)
//!     4 highlights, 2 skill categories, 1 position, 1 project, 1 community activity
//!
//! Articles
//! 001 Platform Teams
//!     Date: March 1, 2024
//!     Bundle: articles/platform-teams/
//! 002 Hello World
//!     Date: January 2, 2024
//!
//! Pages
//!     about.md
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! Projects → projects/index.html
//! Articles → articles/index.html
//! Platform Teams → articles/platform-teams/index.html
//! Feed → feed.xml
//!
//! Generated 5 pages (2 articles), copied 14 files
//! ```
//!
//! Problems that do not stop the build (unknown icon names, missing asset
//! files) are formatted by [`format_warnings`] and go to stderr.
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::articles::format_date;
use crate::config::CONFIG_FILE;
use crate::generate::{ABOUT_FILE, BuildSummary, SiteReport};
use crate::resume::TEMPLATE_FILE;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 project`, `2 projects`.
fn count(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format the inventory of a content root.
pub fn format_check_output(report: &SiteReport) -> Vec<String> {
    let config = &report.config;
    let mut lines = Vec::new();

    lines.push("Config".to_string());
    lines.push(format!("{}{}", indent(1), CONFIG_FILE));
    lines.push(format!(
        "{}{} ({})",
        indent(1),
        config.personal.name,
        config.personal.title
    ));
    let community = config.community.activities.len();
    lines.push(format!(
        "{}{}, {}, {}, {}, {}",
        indent(1),
        count(config.hero.highlights.len(), "highlight", "highlights"),
        count(config.skills.categories.len(), "skill category", "skill categories"),
        count(config.experience.positions.len(), "position", "positions"),
        count(config.projects.items.len(), "project", "projects"),
        count(community, "community activity", "community activities"),
    ));

    lines.push(String::new());
    lines.push("Articles".to_string());
    if report.articles.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, article) in report.articles.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), article.title));
        lines.push(format!("{}Date: {}", indent(1), format_date(article.date)));
        if !article.description.is_empty() {
            lines.push(format!(
                "{}Description: {}",
                indent(1),
                truncate_desc(&article.description, 60)
            ));
        }
        if article.bundle_dir.is_some() {
            lines.push(format!("{}Bundle: articles/{}/", indent(1), article.slug));
        }
    }

    let mut pages = Vec::new();
    if report.has_about {
        pages.push(ABOUT_FILE);
    }
    if report.has_resume_template {
        pages.push(TEMPLATE_FILE);
    }
    if !pages.is_empty() {
        lines.push(String::new());
        lines.push("Pages".to_string());
        for page in pages {
            lines.push(format!("{}{}", indent(1), page));
        }
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(report: &SiteReport) {
    for line in format_check_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format the pages written by a build, followed by a one-line summary.
pub fn format_build_output(summary: &BuildSummary) -> Vec<String> {
    let mut lines: Vec<String> = summary
        .pages
        .iter()
        .map(|page| format!("{} \u{2192} {}", page.title, page.path))
        .collect();
    if summary.feed {
        lines.push(format!("Feed \u{2192} {}", crate::feed::FEED_PATH));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} ({}), copied {}",
        count(summary.pages.len(), "page", "pages"),
        count(summary.articles, "article", "articles"),
        count(summary.assets_copied, "file", "files"),
    ));
    lines
}

/// Print build output to stdout.
pub fn print_build_output(summary: &BuildSummary) {
    for line in format_build_output(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Warnings
// ============================================================================

/// Non-fatal problems: names that fall back to a default glyph and asset
/// files the pages reference but the bundle lacks.
pub fn format_warnings(unresolved_icons: &[String], missing_assets: &[String]) -> Vec<String> {
    let icons = unresolved_icons
        .iter()
        .map(|name| format!("warning: unknown icon `{name}`, using fallback glyph"));
    let assets = missing_assets
        .iter()
        .map(|path| format!("warning: missing asset assets/{path}"));
    icons.chain(assets).collect()
}

/// Print warnings to stderr.
pub fn print_warnings(unresolved_icons: &[String], missing_assets: &[String]) {
    for line in format_warnings(unresolved_icons, missing_assets) {
        eprintln!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
