//! RSS feed for the article collection.
//!
//! The feed needs absolute links, so it is only produced when a public site
//! URL is known (`--site-url` or the `SITE_URL` environment variable).

use crate::articles::Article;
use crate::config::SiteConfig;
use chrono::NaiveTime;
use maud::{PreEscaped, html};

/// Environment variable holding the public site URL.
pub const SITE_URL_ENV: &str = "SITE_URL";

/// Output path of the feed, relative to the site root.
pub const FEED_PATH: &str = "feed.xml";

/// Normalize a site URL: trimmed, no trailing slash. Empty input is `None`.
pub fn normalize_site_url(url: &str) -> Option<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Absolute URL of the feed, for `<link rel="alternate">`.
pub fn feed_url(site_url: &str) -> String {
    format!("{site_url}/{FEED_PATH}")
}

/// RFC 2822 timestamp at midnight UTC of the article date.
fn pub_date(article: &Article) -> String {
    article.date.and_time(NaiveTime::MIN).and_utc().to_rfc2822()
}

/// Render an RSS 2.0 document. `articles` should already be newest first.
pub fn render_feed(site: &SiteConfig, articles: &[Article], site_url: &str) -> String {
    let doc = html! {
        (PreEscaped(r#"<?xml version="1.0" encoding="UTF-8"?>"#))
        rss version="2.0" {
            channel {
                title { (site.title) }
                link { (site_url) "/" }
                description { (site.description) }
                language { "en" }
                @if let Some(newest) = articles.first() {
                    lastBuildDate { (pub_date(newest)) }
                }
                @for article in articles {
                    @let url = format!("{site_url}{}", article.url());
                    item {
                        title { (article.title) }
                        link { (url) }
                        guid isPermaLink="true" { (url) }
                        description { (article.description) }
                        pubDate { (pub_date(article)) }
                        @if let Some(author) = &article.author {
                            author { (author) }
                        }
                    }
                }
            }
        }
    };
    doc.into_string()
}
