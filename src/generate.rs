//! HTML site generation.
//!
//! Reads the cached configuration, the article collection and the optional
//! about page from the content root, and writes a complete static site.
//!
//! ## Generated Pages
//!
//! - **Home** (`/index.html`): hero, strengths, skills, experience, projects,
//!   community and the latest articles
//! - **Projects** (`/projects/index.html`): every project card
//! - **Articles** (`/articles/index.html`): all articles, newest first
//! - **Article pages** (`/articles/{slug}/index.html`): markdown rendered to HTML
//! - **About** (`/about/index.html`): only when `about.md` exists
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── projects/index.html
//! ├── articles/
//! │   ├── index.html
//! │   └── platform-teams/
//! │       ├── index.html
//! │       └── diagram.svg        # copied from the article bundle
//! ├── about/index.html
//! ├── feed.xml                   # only with a site URL
//! ├── header.js
//! └── assets/                    # content assets + built-in glyph sprite
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static files are embedded at compile time:
//! - `static/style.css`: inlined into every page
//! - `static/header.js`: written to the site root, drives the scroll header
//! - `static/glyphs.svg`: default UI glyph sprite
//!
//! The header's scroll-0 state is computed here (see [`crate::header`]) and
//! rendered inline, so the page is correct before the script runs.

use crate::articles::{self, ARTICLES_DIR, Article, ArticleError, format_date};
use crate::config::{AppConfig, ConfigCache, ConfigError};
use crate::feed;
use crate::header::{HeaderMotion, initial_style};
use crate::icons::{self, AVATAR, GLYPH_SPRITE, Glyph};
use crate::sections;
use chrono::{Datelike, Local};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd, html as md_html};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Articles error: {0}")]
    Articles(#[from] ArticleError),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS: &str = include_str!("../static/style.css");
const HEADER_JS: &str = include_str!("../static/header.js");
const GLYPHS_SVG: &str = include_str!("../static/glyphs.svg");

/// Optional markdown page at the content root.
pub const ABOUT_FILE: &str = "about.md";
/// Static asset bundle, copied to `<output>/assets/`.
pub const ASSETS_DIR: &str = "assets";
/// Header script, written to the output root.
pub const HEADER_SCRIPT: &str = "header.js";
/// Resume PDF inside the asset bundle; enables the hero download button.
pub const RESUME_PDF: &str = "resume.pdf";

/// Options that are not part of the content itself.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Public base URL. Enables `feed.xml` and the alternate link.
    pub site_url: Option<String>,
}

/// One written HTML page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub title: String,
    /// Path relative to the output root.
    pub path: String,
}

#[derive(Debug, Default)]
pub struct BuildSummary {
    pub pages: Vec<GeneratedPage>,
    pub articles: usize,
    pub assets_copied: usize,
    pub feed: bool,
    pub missing_assets: Vec<String>,
    pub unresolved_icons: Vec<String>,
}

/// Result of inspecting a content root without writing anything.
#[derive(Debug)]
pub struct SiteReport {
    pub config: std::sync::Arc<AppConfig>,
    pub articles: Vec<Article>,
    pub has_about: bool,
    pub has_resume_template: bool,
    pub missing_assets: Vec<String>,
    pub unresolved_icons: Vec<String>,
}

/// Which top-level page is being rendered, for nav highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Home,
    Projects,
    Articles,
    About,
}

/// Everything page renderers share. Immutable, so article pages can render
/// on the rayon pool.
struct Site<'a> {
    config: &'a AppConfig,
    motion: HeaderMotion,
    has_about: bool,
    feed_url: Option<String>,
    resume_url: Option<String>,
    current_year: i32,
}

/// Validate a content root: config, articles, icon names and assets.
pub fn check_site(cache: &ConfigCache, source: &Path) -> Result<SiteReport, GenerateError> {
    let config = cache.get()?;
    let articles = articles::load_articles(&source.join(ARTICLES_DIR))?;
    let missing = icons::missing_assets(
        &source.join(ASSETS_DIR),
        &icons::referenced_assets(&config),
    );
    Ok(SiteReport {
        unresolved_icons: icons::unresolved_names(&config),
        missing_assets: missing.iter().map(|a| a.path.to_string()).collect(),
        has_about: source.join(ABOUT_FILE).is_file(),
        has_resume_template: source.join(crate::resume::TEMPLATE_FILE).is_file(),
        config,
        articles,
    })
}

pub fn generate(
    cache: &ConfigCache,
    source: &Path,
    output_dir: &Path,
    options: &BuildOptions,
) -> Result<BuildSummary, GenerateError> {
    let report = check_site(cache, source)?;
    let config = report.config.as_ref();
    let articles = &report.articles;
    let assets_src = source.join(ASSETS_DIR);

    let about = if report.has_about {
        Some(fs::read_to_string(source.join(ABOUT_FILE))?)
    } else {
        None
    };
    let site_url = options
        .site_url
        .as_deref()
        .and_then(feed::normalize_site_url);

    let site = Site {
        config,
        motion: HeaderMotion::from_config(&config.header),
        has_about: about.is_some(),
        feed_url: site_url.as_deref().map(feed::feed_url),
        resume_url: assets_src
            .join(RESUME_PDF)
            .is_file()
            .then(|| format!("/{ASSETS_DIR}/{RESUME_PDF}")),
        current_year: Local::now().year(),
    };

    fs::create_dir_all(output_dir)?;
    let mut summary = BuildSummary {
        articles: articles.len(),
        missing_assets: report.missing_assets.clone(),
        unresolved_icons: report.unresolved_icons.clone(),
        ..Default::default()
    };

    // Static files first so pages never reference something absent.
    if assets_src.is_dir() {
        summary.assets_copied = copy_tree(&assets_src, &output_dir.join(ASSETS_DIR), |_| false)?;
    }
    let sprite = output_dir.join(ASSETS_DIR).join(GLYPH_SPRITE);
    if !sprite.is_file() {
        write_file(&sprite, GLYPHS_SVG)?;
    }
    write_file(&output_dir.join(HEADER_SCRIPT), HEADER_JS)?;

    write_page(output_dir, "index.html", render_index(&site, articles))?;
    summary.pages.push(page("Home", "index.html"));

    write_page(output_dir, "projects/index.html", render_projects(&site))?;
    summary.pages.push(page("Projects", "projects/index.html"));

    write_page(output_dir, "articles/index.html", render_articles_index(&site, articles))?;
    summary.pages.push(page("Articles", "articles/index.html"));

    articles.par_iter().try_for_each(|article| {
        write_page(output_dir, &article_path(article), render_article(&site, article))
    })?;
    for article in articles {
        if let Some(bundle) = &article.bundle_dir {
            let dst = output_dir.join(ARTICLES_DIR).join(&article.slug);
            summary.assets_copied += copy_tree(bundle, &dst, is_article_index)?;
        }
        summary.pages.push(page(&article.title, &article_path(article)));
    }

    if let Some(markdown) = &about {
        let title = about_title(markdown);
        write_page(output_dir, "about/index.html", render_about(&site, &title, markdown))?;
        summary.pages.push(page(&title, "about/index.html"));
    }

    if let Some(url) = &site_url {
        let xml = feed::render_feed(&config.site, articles, url);
        write_file(&output_dir.join(feed::FEED_PATH), &xml)?;
        summary.feed = true;
    }

    Ok(summary)
}

fn page(title: &str, path: &str) -> GeneratedPage {
    GeneratedPage {
        title: title.to_string(),
        path: path.to_string(),
    }
}

fn article_path(article: &Article) -> String {
    format!("{ARTICLES_DIR}/{}/index.html", article.slug)
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

fn write_page(output_dir: &Path, rel_path: &str, markup: Markup) -> std::io::Result<()> {
    write_file(&output_dir.join(rel_path), &markup.into_string())
}

/// The article source itself is rendered, not copied.
fn is_article_index(rel: &Path) -> bool {
    rel.parent() == Some(Path::new(""))
        && rel.file_stem().is_some_and(|stem| stem == "index")
        && rel
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| articles::MARKDOWN_EXTENSIONS.iter().any(|m| e.eq_ignore_ascii_case(m)))
}

/// Recursively copy `src` into `dst`, skipping hidden entries and anything
/// `skip` matches (given the path relative to `src`). Returns files copied.
fn copy_tree(src: &Path, dst: &Path, skip: impl Fn(&Path) -> bool) -> Result<usize, GenerateError> {
    let mut copied = 0;
    let walker = WalkDir::new(src)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));
    for entry in walker {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        if skip(rel) {
            continue;
        }
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// Markdown
// ============================================================================

/// Render markdown with tables, strikethrough, footnotes and task lists.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

/// Title of the about page: its first level-1 heading, else "About".
pub fn about_title(markdown: &str) -> String {
    let mut in_heading = false;
    let mut title = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_heading = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                if !title.trim().is_empty() {
                    break;
                }
                in_heading = false;
                title.clear();
            }
            Event::Text(text) | Event::Code(text) if in_heading => title.push_str(&text),
            _ => {}
        }
    }
    match title.trim() {
        "" => "About".to_string(),
        t => t.to_string(),
    }
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(
    site: &Site,
    title: Option<&str>,
    description: &str,
    current: Section,
    content: Markup,
) -> Markup {
    let config = site.config;
    let full_title = match title {
        Some(t) => format!("{t} - {}", config.personal.name),
        None => config.site.title.clone(),
    };
    let home = current == Section::Home;
    html! {
        (DOCTYPE)
        html lang="en" style=(initial_style(&site.motion, home)) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (full_title) }
                meta name="description" content=(description);
                @if let Some(url) = &site.feed_url {
                    link rel="alternate" type="application/rss+xml" title=(config.site.title) href=(url);
                }
                style { (PreEscaped(CSS)) }
            }
            body {
                (site_header(site, current))
                main { (content) }
                (site_footer(site))
                script src={ "/" (HEADER_SCRIPT) } defer {}
            }
        }
    }
}

/// Sticky header: avatar, navigation and social links. The data attributes
/// carry the motion parameters for `header.js`.
fn site_header(site: &Site, current: Section) -> Markup {
    let m = &site.motion;
    let home = current == Section::Home;
    let mut nav = vec![
        ("Home", "/", Section::Home),
        ("Projects", "/projects/", Section::Projects),
        ("Thoughts", "/articles/", Section::Articles),
    ];
    if site.has_about {
        nav.push(("About", "/about/", Section::About));
    }
    html! {
        header.site-header id="site-header"
            data-threshold=(m.threshold)
            data-up-delay=(m.up_delay)
            data-max-scale=(m.max_scale)
            data-min-scale=(m.min_scale)
            data-offset-rem=(m.offset_rem)
            data-home=(if home { "true" } else { "false" })
        {
            div.header-inner {
                a.avatar-link href="/" aria-label="Home" {
                    @if home {
                        span.avatar-border {}
                    }
                    img.avatar src=(AVATAR.url()) alt=(site.config.personal.name);
                }
                nav.site-nav {
                    input.nav-toggle type="checkbox" id="nav-toggle";
                    label.nav-hamburger for="nav-toggle" aria-label="Menu" {
                        (sections::glyph(Glyph::Menu, "glyph-sm"))
                    }
                    ul {
                        @for (label, href, section) in &nav {
                            li class=[(*section == current).then_some("current")] {
                                a href=(href) { (label) }
                            }
                        }
                    }
                }
                div.header-actions {
                    a href=(site.config.contact.github) aria-label="GitHub" rel="noopener" {
                        (sections::glyph(Glyph::Github, "glyph-sm"))
                    }
                    @if site.feed_url.is_some() {
                        a href={ "/" (feed::FEED_PATH) } aria-label="RSS feed" {
                            (sections::glyph(Glyph::Rss, "glyph-sm"))
                        }
                    }
                }
            }
        }
    }
}

fn site_footer(site: &Site) -> Markup {
    let config = site.config;
    html! {
        footer.site-footer {
            p { "© " (site.current_year) " " (config.personal.name) ". All rights reserved." }
            ul.footer-links {
                li { a href={ "mailto:" (config.contact.email) } { "Email" } }
                li { a href=(config.contact.github) rel="noopener" { "GitHub" } }
                li { a href=(config.contact.linkedin) rel="noopener" { "LinkedIn" } }
                @if let Some(website) = &config.contact.website {
                    li { a href=(website) rel="noopener" { "Website" } }
                }
            }
        }
    }
}

/// Page title block used by every page except home.
fn page_intro(title: &str, intro: &str) -> Markup {
    html! {
        header.page-intro {
            h1 { (title) }
            @if !intro.is_empty() {
                p { (intro) }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the home page
fn render_index(site: &Site, articles: &[Article]) -> Markup {
    let config = site.config;
    let latest = &config.sections.latest_articles;
    let content = html! {
        div.home-page {
            (sections::hero(config, site.resume_url.as_deref()))
            (sections::strengths(config))
            (sections::skills(config))
            (sections::experience(config, site.current_year))
            (sections::projects(config))
            (sections::community(config))
            (sections::latest_articles(latest, articles::latest(articles, latest.max_count)))
        }
    };
    base_document(site, None, &config.site.description, Section::Home, content)
}

fn render_projects(site: &Site) -> Markup {
    let intro = "A collection of personal projects: infrastructure, developer tooling and automation.";
    let content = html! {
        div.projects-page {
            (page_intro("Personal Technical Projects", intro))
            div.card-grid.two-columns {
                @for project in &site.config.projects.items {
                    (sections::project_card(project))
                }
            }
        }
    };
    base_document(site, Some("Projects"), intro, Section::Projects, content)
}

fn render_articles_index(site: &Site, articles: &[Article]) -> Markup {
    let description = &site.config.sections.latest_articles.description;
    let content = html! {
        div.articles-page {
            (page_intro("Thoughts", description))
            @if articles.is_empty() {
                p.empty { "Nothing published yet." }
            } @else {
                div.article-list {
                    @for article in articles {
                        (sections::article_card(article))
                    }
                }
            }
        }
    };
    base_document(site, Some("Articles"), description, Section::Articles, content)
}

fn render_article(site: &Site, article: &Article) -> Markup {
    let body = markdown_to_html(&article.body);
    let content = html! {
        div.article-page {
            a.back-link href={ "/" (ARTICLES_DIR) "/" } aria-label="Go back to articles" { "← Back to articles" }
            article {
                header.article-header {
                    time datetime=(article.date.format("%Y-%m-%d").to_string()) {
                        (format_date(article.date))
                    }
                    h1 { (article.title) }
                    @if let Some(author) = &article.author {
                        p.byline { (author) }
                    }
                }
                div.prose {
                    (PreEscaped(body))
                }
            }
        }
    };
    base_document(site, Some(article.title.as_str()), &article.description, Section::Articles, content)
}

/// Renders the about page from markdown content
fn render_about(site: &Site, title: &str, markdown: &str) -> Markup {
    let config = site.config;
    let body = markdown_to_html(markdown);
    let content = html! {
        div.about-page {
            div.about-portrait {
                img.portrait src=(AVATAR.url()) alt=(config.personal.name);
            }
            article.prose {
                (PreEscaped(body))
            }
            ul.about-links {
                li { a href=(config.contact.github) rel="noopener" { (sections::glyph(Glyph::Github, "glyph-sm")) "Follow on GitHub" } }
                li { a href=(config.contact.linkedin) rel="noopener" { (sections::glyph(Glyph::Linkedin, "glyph-sm")) "Follow on LinkedIn" } }
                li { a href={ "mailto:" (config.contact.email) } { (sections::glyph(Glyph::Mail, "glyph-sm")) (config.contact.email) } }
            }
        }
    };
    base_document(site, Some(title), &config.personal.description, Section::About, content)
}
