//! Home page sections.
//!
//! Each section is a pure function from a slice of the configuration to
//! [`Markup`]. Icons resolve through [`crate::icons`]; a name missing from
//! the table renders a fallback glyph instead.

use crate::articles::{Article, format_date};
use crate::config::{
    AppConfig, CommunityActivity, ExperiencePosition, LatestArticlesConfig, ProjectItem,
    SkillCategory,
};
use crate::icons::{self, AVATAR, Glyph, Icon};
use maud::{Markup, html};

// ============================================================================
// Icons
// ============================================================================

/// Inline SVG referencing a glyph in the sprite sheet.
pub fn glyph(glyph: Glyph, class: &str) -> Markup {
    html! {
        svg class={ "glyph " (class) } aria-hidden="true" focusable="false" {
            use href=(glyph.sprite_href()) {}
        }
    }
}

/// Render a resolved icon: bundled assets as `<img>`, glyphs as SVG.
pub fn icon(icon: Icon, alt: &str, class: &str) -> Markup {
    match icon {
        Icon::Image(asset) => html! {
            img class=(class) src=(asset.url()) alt=(alt) loading="lazy";
        },
        Icon::Glyph(g) => glyph(g, class),
    }
}

/// Render a configured icon name, or `fallback` when the name is unknown.
pub fn icon_or(name: &str, fallback: Glyph, alt: &str, class: &str) -> Markup {
    let resolved = icons::lookup_icon(name).unwrap_or(Icon::Glyph(fallback));
    icon(resolved, alt, class)
}

/// Class carrying a configured accent color, e.g. `accent-green`.
fn accent(color: &str) -> Option<String> {
    let color = color.trim();
    (!color.is_empty()).then(|| format!("accent-{color}"))
}

/// `base` plus the accent class, if any.
fn card_class(base: &str, color: &str) -> String {
    match accent(color) {
        Some(accent) => format!("{base} {accent}"),
        None => base.to_string(),
    }
}

// ============================================================================
// Text helpers
// ============================================================================

/// Split a `"Label: text"` highlight at its first colon.
pub fn split_highlight(highlight: &str) -> (Option<&str>, &str) {
    match highlight.split_once(':') {
        Some((label, rest)) if !label.trim().is_empty() => (Some(label.trim()), rest.trim()),
        _ => (None, highlight.trim()),
    }
}

/// Earliest four-digit year appearing in any position period.
pub fn earliest_year(positions: &[ExperiencePosition]) -> Option<i32> {
    positions
        .iter()
        .flat_map(|p| years_in(&p.period))
        .min()
}

fn years_in(text: &str) -> Vec<i32> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|run| run.len() == 4)
        .filter_map(|run| run.parse().ok())
        .filter(|year| (1900..=2999).contains(year))
        .collect()
}

/// Whole years of experience since the earliest position, if any.
pub fn career_years(positions: &[ExperiencePosition], current_year: i32) -> Option<i32> {
    earliest_year(positions).map(|start| (current_year - start).max(0))
}

/// Blank-line separated paragraphs.
fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split("\n\n").map(str::trim).filter(|p| !p.is_empty())
}

// ============================================================================
// Sections
// ============================================================================

/// Intro block: location, tagline, title, description, portrait, contact.
pub fn hero(config: &AppConfig, resume_url: Option<&str>) -> Markup {
    let personal = &config.personal;
    let contact = &config.contact;
    html! {
        section.hero {
            div.hero-text {
                span.badge {
                    (glyph(Glyph::MapPin, "glyph-sm"))
                    (personal.location)
                }
                h1.hero-tagline { (personal.tagline) }
                h2.hero-title { (personal.title) }
                div.hero-description {
                    @for para in paragraphs(&personal.description) {
                        p { (para) }
                    }
                }
                @if !config.hero.highlights.is_empty() {
                    ul.highlights {
                        @for h in &config.hero.highlights {
                            li class=[accent(&h.color)] {
                                span.highlight-icon { (icon_or(&h.icon, Glyph::Code, "", "glyph-sm")) }
                                span.highlight-name { (h.name) }
                            }
                        }
                    }
                }
            }
            div.hero-portrait {
                img.portrait src=(AVATAR.url()) alt=(personal.name);
                @if personal.availability.active && !personal.availability.status.is_empty() {
                    p.availability {
                        span.availability-dot {}
                        (personal.availability.status)
                    }
                }
                div.hero-actions {
                    a.button.button-primary href={ "mailto:" (contact.email) } {
                        (glyph(Glyph::Mail, "glyph-sm"))
                        "Get in touch"
                    }
                    @if let Some(url) = resume_url {
                        a.button href=(url) download {
                            "Download Resume"
                        }
                    }
                }
                div.social-links {
                    a.button href=(contact.github) aria-label="GitHub" rel="noopener" {
                        (glyph(Glyph::Github, "glyph-sm")) "GitHub"
                    }
                    a.button href=(contact.linkedin) aria-label="LinkedIn" rel="noopener" {
                        (glyph(Glyph::Linkedin, "glyph-sm")) "LinkedIn"
                    }
                }
            }
        }
    }
}

fn section_heading(title: &str, subtitle: Option<&str>) -> Markup {
    html! {
        div.section-heading {
            h2 { (title) }
            @if let Some(sub) = subtitle.filter(|s| !s.is_empty()) {
                p { (sub) }
            }
        }
    }
}

/// Hero highlights repeated as a grid for narrow screens, where the hero
/// list is hidden.
pub fn strengths(config: &AppConfig) -> Markup {
    html! {
        @if !config.hero.highlights.is_empty() {
            section.strengths.mobile-only {
                (section_heading("Core Strengths", Some("Key capabilities that drive platform engineering excellence")))
                div.strength-grid {
                    @for h in &config.hero.highlights {
                        div class=(card_class("strength", &h.color)) {
                            span.strength-icon { (icon_or(&h.icon, Glyph::Code, "", "glyph-md")) }
                            span { (h.name) }
                        }
                    }
                }
            }
        }
    }
}

fn skill_card(category: &SkillCategory) -> Markup {
    html! {
        article class=(card_class("card skill-card", &category.color)) {
            header.card-header {
                span.card-icon { (icon_or(&category.icon, Glyph::Code, &category.title, "glyph-md")) }
                div {
                    h3 { (category.title) }
                    @if !category.experience.is_empty() {
                        span.badge.badge-outline { (category.experience) }
                    }
                }
            }
            @if !category.description.is_empty() {
                p.card-description { (category.description) }
            }
            ul.badge-list {
                @for skill in &category.skills {
                    li.badge {
                        (icon_or(&skill.icon, Glyph::Code, &skill.name, "badge-icon"))
                        span { (skill.name) }
                    }
                }
            }
        }
    }
}

pub fn skills(config: &AppConfig) -> Markup {
    html! {
        @if !config.skills.categories.is_empty() {
            section.skills id="skills" {
                (section_heading("Skills & Expertise", None))
                div.card-grid {
                    @for category in &config.skills.categories {
                        (skill_card(category))
                    }
                }
            }
        }
    }
}

fn experience_card(position: &ExperiencePosition) -> Markup {
    let logo = icons::lookup_logo(&position.logo);
    html! {
        article class=(card_class("card experience-card", &position.color)) {
            div.experience-body {
                div.experience-title {
                    h3 { (position.role) }
                    @if !position.kind.is_empty() {
                        span.badge { (position.kind) }
                    }
                }
                @if position.company_url.is_empty() {
                    span.company { (position.company) }
                } @else {
                    a.company href=(position.company_url) target="_blank" rel="noopener noreferrer" {
                        (position.company)
                    }
                }
                p.meta {
                    span { (glyph(Glyph::Calendar, "glyph-xs")) (position.period) }
                    @if !position.location.is_empty() {
                        span { (glyph(Glyph::MapPin, "glyph-xs")) (position.location) }
                    }
                }
                @if !position.description.is_empty() {
                    p.card-description { (position.description) }
                }
                @if !position.achievements.is_empty() {
                    h4 { "Key Achievements" }
                    ul.achievements {
                        @for achievement in &position.achievements {
                            li { (glyph(Glyph::Zap, "glyph-xs")) (achievement) }
                        }
                    }
                }
                @if !position.technologies.is_empty() {
                    h4 { "Tech Stack" }
                    ul.badge-list {
                        @for tech in &position.technologies {
                            li.badge.badge-outline {
                                (icon(icons::tech_icon(tech), &format!("{tech} icon"), "badge-icon"))
                                span { (tech) }
                            }
                        }
                    }
                }
            }
            div.company-logo {
                @match logo {
                    Some(asset) => {
                        img src=(asset.url()) alt={ (position.company) " logo" } loading="lazy";
                    }
                    None => {
                        (glyph(Glyph::Briefcase, "glyph-lg"))
                    }
                }
            }
        }
    }
}

pub fn experience(config: &AppConfig, current_year: i32) -> Markup {
    let positions = &config.experience.positions;
    let subtitle = career_years(positions, current_year)
        .filter(|years| *years > 0)
        .map(|years| format!("{years}+ years of building scalable software solutions"));
    html! {
        @if !positions.is_empty() {
            section.experience id="experience" {
                (section_heading("Work Experience", subtitle.as_deref()))
                div.card-grid.two-columns {
                    @for position in positions {
                        (experience_card(position))
                    }
                }
            }
        }
    }
}

pub fn project_card(project: &ProjectItem) -> Markup {
    html! {
        article.card.project-card {
            header.card-header {
                span.card-icon { (icon_or(&project.icon, Glyph::Package, &project.name, "glyph-md")) }
                div {
                    h3 { (project.name) }
                    @if !project.tags.is_empty() {
                        ul.badge-list {
                            @for tag in &project.tags {
                                li.badge { (tag) }
                            }
                        }
                    }
                }
            }
            p.card-description { (project.description) }
            @if !project.highlights.is_empty() {
                ul.project-highlights {
                    @for highlight in &project.highlights {
                        @let (label, text) = split_highlight(highlight);
                        li {
                            @if let Some(label) = label {
                                strong { (label) ":" }
                                " "
                            }
                            (text)
                        }
                    }
                }
            }
            footer.project-link {
                span.link-label {
                    (glyph(Glyph::Github, "glyph-sm"))
                    (project.link.label)
                    @if project.link.is_private {
                        span.badge.badge-outline { "Private" }
                    }
                }
                a.button href=(project.link.href) target="_blank" rel="noopener noreferrer" {
                    "View Code" (glyph(Glyph::ExternalLink, "glyph-xs"))
                }
            }
        }
    }
}

pub fn projects(config: &AppConfig) -> Markup {
    html! {
        @if !config.projects.items.is_empty() {
            section.projects id="projects" {
                (section_heading("Personal Projects", None))
                div.card-grid.two-columns {
                    @for project in &config.projects.items {
                        (project_card(project))
                    }
                }
            }
        }
    }
}

fn community_card(activity: &CommunityActivity) -> Markup {
    html! {
        article class=(card_class("card community-card", &activity.color)) {
            header.card-header {
                span.card-icon { (icon_or(&activity.icon, Glyph::Heart, &activity.title, "glyph-md")) }
                div {
                    h3 { (activity.title) }
                    p.meta {
                        @if !activity.role.is_empty() { span { (activity.role) } }
                        @if !activity.duration.is_empty() { span { (activity.duration) } }
                        @if !activity.kind.is_empty() { span.badge { (activity.kind) } }
                    }
                }
            }
            @if !activity.description.is_empty() {
                p.card-description { (activity.description) }
            }
            @if !activity.achievements.is_empty() {
                ul.achievements {
                    @for achievement in &activity.achievements {
                        li { (glyph(Glyph::Zap, "glyph-xs")) (achievement) }
                    }
                }
            }
        }
    }
}

pub fn community(config: &AppConfig) -> Markup {
    let community = &config.community;
    html! {
        @if !community.activities.is_empty() {
            section.community id="community" {
                (section_heading(&community.title, Some(community.description.as_str())))
                div.card-grid.two-columns {
                    @for activity in &community.activities {
                        (community_card(activity))
                    }
                }
            }
        }
    }
}

/// Card linking to one article.
pub fn article_card(article: &Article) -> Markup {
    html! {
        article.card.article-card {
            h3 { a href=(article.url()) { (article.title) } }
            time datetime=(article.date.format("%Y-%m-%d").to_string()) {
                (format_date(article.date))
            }
            p.card-description { (article.description) }
            a.cta href=(article.url()) aria-hidden="true" tabindex="-1" { "Read article" }
        }
    }
}

pub fn latest_articles(section: &LatestArticlesConfig, articles: &[Article]) -> Markup {
    html! {
        section.latest-articles id="articles" {
            (section_heading(&section.title, Some(section.description.as_str())))
            div.card-grid.three-columns {
                @for article in articles {
                    (article_card(article))
                }
            }
            @if !articles.is_empty() {
                p.view-all { a href="/articles/" { "View all articles →" } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, stock_config_yaml};
    use chrono::NaiveDate;

    fn config() -> AppConfig {
        parse_config(stock_config_yaml()).unwrap()
    }

    fn position(period: &str) -> ExperiencePosition {
        let mut p = config().experience.positions[0].clone();
        p.period = period.to_string();
        p
    }

    #[test]
    fn split_highlight_on_first_colon() {
        assert_eq!(
            split_highlight("Design: fast: and small"),
            (Some("Design"), "fast: and small")
        );
        assert_eq!(split_highlight("No label here"), (None, "No label here"));
        assert_eq!(split_highlight(": orphan"), (None, ": orphan"));
    }

    #[test]
    fn career_years_from_earliest_period() {
        let positions = vec![
            position("March 2023 - Present"),
            position("September 2013 - May 2015"),
            position("2015 - 2018"),
        ];
        assert_eq!(earliest_year(&positions), Some(2013));
        assert_eq!(career_years(&positions, 2026), Some(13));
    }

    #[test]
    fn career_years_without_years() {
        assert_eq!(career_years(&[position("Present")], 2026), None);
        assert_eq!(career_years(&[], 2026), None);
        // Phone-number-like runs are not years.
        assert_eq!(earliest_year(&[position("12345 - 0042")]), None);
    }

    #[test]
    fn unknown_icon_renders_fallback_glyph() {
        let html = icon_or("does-not-exist", Glyph::Code, "x", "c").into_string();
        assert!(html.contains("glyphs.svg#code"));
    }

    #[test]
    fn asset_icon_renders_img() {
        let html = icon_or("react", Glyph::Code, "React", "badge-icon").into_string();
        assert!(html.contains(r#"src="/assets/icons/react.png""#));
        assert!(html.contains(r#"alt="React""#));
    }

    #[test]
    fn every_configured_icon_renders() {
        let config = config();
        for name in config.icon_references() {
            let html = icon_or(name, Glyph::Code, name, "c").into_string();
            assert!(html.contains("<img") || html.contains("<svg"), "{name}");
        }
    }

    #[test]
    fn hero_shows_identity_and_contact() {
        let html = hero(&config(), None).into_string();
        assert!(html.contains("Building scalable solutions for complex infrastructure"));
        assert!(html.contains("mailto:jordan@example.dev"));
        assert!(html.contains("Open for new opportunities"));
        assert!(html.contains("Team Management"));
        assert!(html.contains("accent-green"));
        assert!(!html.contains("Download Resume"));
    }

    #[test]
    fn hero_resume_button_when_available() {
        let html = hero(&config(), Some("/assets/resume.pdf")).into_string();
        assert!(html.contains(r#"href="/assets/resume.pdf""#));
    }

    #[test]
    fn hero_hides_inactive_availability() {
        let mut config = config();
        config.personal.availability.active = false;
        assert!(!hero(&config, None).into_string().contains("availability-dot"));
    }

    #[test]
    fn experience_logo_and_fallback() {
        let mut config = config();
        let html = experience(&config, 2026).into_string();
        assert!(html.contains("/assets/logos/bbg.svg"));
        assert!(html.contains("5+ years"));

        config.experience.positions[0].logo = "unknown-co".to_string();
        let html = experience(&config, 2026).into_string();
        assert!(html.contains("glyphs.svg#briefcase"));
    }

    #[test]
    fn experience_tech_badges_use_tech_icons() {
        let html = experience(&config(), 2026).into_string();
        // Golang resolves through the table, not the fallback.
        assert!(html.contains("/assets/icons/go.svg"));
        assert!(html.contains("Key Achievements"));
    }

    #[test]
    fn strengths_repeat_hero_highlights() {
        let html = strengths(&config()).into_string();
        assert!(html.contains("Core Strengths"));
        assert_eq!(html.matches(r#"class="strength "#).count(), 4);
    }

    #[test]
    fn empty_sections_render_nothing() {
        let mut config = config();
        config.hero.highlights.clear();
        assert!(strengths(&config).into_string().is_empty());
        config.skills.categories.clear();
        config.experience.positions.clear();
        config.projects.items.clear();
        config.community.activities.clear();
        assert!(skills(&config).into_string().is_empty());
        assert!(experience(&config, 2026).into_string().is_empty());
        assert!(projects(&config).into_string().is_empty());
        assert!(community(&config).into_string().is_empty());
    }

    #[test]
    fn project_card_splits_highlights_and_marks_private() {
        let html = project_card(&config().projects.items[0]).into_string();
        assert!(html.contains("<strong>Infrastructure Design:</strong>"));
        assert!(html.contains("Private"));
        assert!(html.contains("https://github.com/jordan-rivera/homelab"));
    }

    #[test]
    fn latest_articles_cards() {
        let article = Article {
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            description: "First".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            author: None,
            body: String::new(),
            bundle_dir: None,
        };
        let section = LatestArticlesConfig::default();
        let html = latest_articles(&section, &[article]).into_string();
        assert!(html.contains(r#"href="/articles/hello/""#));
        assert!(html.contains(r#"datetime="2024-01-02""#));
        assert!(html.contains("January 2, 2024"));
        assert!(html.contains("View all articles"));

        let empty = latest_articles(&section, &[]).into_string();
        assert!(!empty.contains("View all articles"));
    }
}
