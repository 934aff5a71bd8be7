//! Site configuration module.
//!
//! Everything a visitor reads on the site comes from one YAML document,
//! `config.yaml`, in the content root. This module defines its typed shape,
//! loads and validates it, and caches the parsed result so every page render
//! reads the same value without touching the filesystem again.
//!
//! ## Document Shape
//!
//! ```yaml
//! personal:          # required
//!   name: Jordan Rivera
//!   title: Staff Platform Engineer
//!   location: Brooklyn, NY
//!   tagline: Building scalable solutions for complex infrastructure
//!   description: ...
//!   availability: { status: Open for new opportunities, active: true }
//! contact:           # required
//!   email: jordan@example.dev
//!   github: https://github.com/jordan-rivera
//!   linkedin: https://www.linkedin.com/in/jordan-rivera/
//! site:              # required
//!   title: Jordan Rivera - Staff Platform Engineer
//!   description: ...
//! hero:       { highlights: [...] }
//! skills:     { categories: [...] }
//! experience: { positions: [...] }
//! projects:   { items: [...] }
//! community:  { title, description, activities: [...] }
//! sections:   { latest_articles: { title, description, max_count } }
//! header:     { avatar_max_scale, avatar_min_scale, ... }
//! ```
//!
//! `personal`, `contact` and `site` must be present. Every other section is
//! optional and falls back to an empty list or stock defaults. Unknown keys
//! are rejected to catch typos early.
//!
//! ## Caching
//!
//! [`ConfigCache`] reads the file on first access and hands out the same
//! [`Arc<AppConfig>`] afterwards. Two threads racing on the first access may
//! both parse the file; the first stored value wins and both get it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// Name of the configuration document inside the content root.
pub const CONFIG_FILE: &str = "config.yaml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    Missing(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// The whole configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub personal: PersonalConfig,
    pub contact: ContactConfig,
    pub site: SiteConfig,
    #[serde(default)]
    pub hero: HeroConfig,
    #[serde(default)]
    pub skills: SkillsConfig,
    #[serde(default)]
    pub experience: ExperienceConfig,
    #[serde(default)]
    pub projects: ProjectsConfig,
    #[serde(default)]
    pub community: CommunityConfig,
    #[serde(default)]
    pub sections: SectionsConfig,
    #[serde(default)]
    pub header: HeaderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonalConfig {
    pub name: String,
    pub title: String,
    pub location: String,
    /// Headline shown in the hero.
    pub tagline: String,
    pub description: String,
    #[serde(default)]
    pub availability: Availability,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Availability {
    pub status: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactConfig {
    pub email: String,
    pub github: String,
    pub linkedin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    pub highlights: Vec<HeroHighlight>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeroHighlight {
    pub name: String,
    pub icon: String,
    /// Accent color name (e.g. `green`, `purple`), used as a CSS class suffix.
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkillsConfig {
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub color: String,
    /// Free-form experience label, e.g. `"10+ years"`.
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<SkillItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillItem {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperienceConfig {
    pub positions: Vec<ExperiencePosition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperiencePosition {
    pub company: String,
    #[serde(default)]
    pub company_url: String,
    pub role: String,
    /// Display period, e.g. `"March 2023 - Present"`.
    pub period: String,
    #[serde(default)]
    pub location: String,
    /// Employment type, e.g. `"Full-time"`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Key into the logo table.
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectsConfig {
    pub items: Vec<ProjectItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectItem {
    pub name: String,
    pub description: String,
    /// `"Label: text"` pairs; the part before the first colon is emphasized.
    #[serde(default)]
    pub highlights: Vec<String>,
    pub link: ProjectLink,
    pub icon: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectLink {
    pub href: String,
    pub label: String,
    #[serde(default)]
    pub is_private: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommunityConfig {
    pub title: String,
    pub description: String,
    pub activities: Vec<CommunityActivity>,
}

impl Default for CommunityConfig {
    fn default() -> Self {
        Self {
            title: "Community".to_string(),
            description: String::new(),
            activities: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommunityActivity {
    pub title: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub duration: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionsConfig {
    pub latest_articles: LatestArticlesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LatestArticlesConfig {
    pub title: String,
    pub description: String,
    /// Maximum number of articles shown on the home page.
    pub max_count: usize,
}

impl Default for LatestArticlesConfig {
    fn default() -> Self {
        Self {
            title: "Latest Articles".to_string(),
            description: "Thoughts on software development, leadership, and technology"
                .to_string(),
            max_count: 3,
        }
    }
}

/// Tuning for the scroll-reactive header. See [`crate::header`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    /// Avatar scale at the top of the page.
    pub avatar_max_scale: f64,
    /// Avatar scale once the page has scrolled past `scroll_threshold`.
    pub avatar_min_scale: f64,
    /// Horizontal avatar offset (rem) once fully collapsed.
    pub avatar_max_offset_rem: f64,
    /// Scroll distance (px) over which the avatar shrinks.
    pub scroll_threshold: f64,
    /// Distance (px) the header may scroll out of view before it follows.
    pub up_delay: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            avatar_max_scale: 1.0,
            avatar_min_scale: 36.0 / 64.0,
            avatar_max_offset_rem: 2.0 / 16.0,
            scroll_threshold: 96.0,
            up_delay: 64.0,
        }
    }
}

impl AppConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.personal.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "personal.name must not be empty".into(),
            ));
        }
        if self.sections.latest_articles.max_count == 0 {
            return Err(ConfigError::Validation(
                "sections.latest_articles.max_count must be at least 1".into(),
            ));
        }
        let header = &self.header;
        let values = [
            ("avatar_max_scale", header.avatar_max_scale),
            ("avatar_min_scale", header.avatar_min_scale),
            ("avatar_max_offset_rem", header.avatar_max_offset_rem),
            ("scroll_threshold", header.scroll_threshold),
            ("up_delay", header.up_delay),
        ];
        if let Some((key, _)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::Validation(format!(
                "header.{key} must be a finite number"
            )));
        }
        if header.avatar_min_scale <= 0.0 || header.avatar_max_scale <= 0.0 {
            return Err(ConfigError::Validation(
                "header avatar scales must be positive".into(),
            ));
        }
        if header.avatar_min_scale > header.avatar_max_scale {
            return Err(ConfigError::Validation(
                "header.avatar_min_scale must not exceed header.avatar_max_scale".into(),
            ));
        }
        if header.scroll_threshold < 0.0 || header.up_delay < 0.0 {
            return Err(ConfigError::Validation(
                "header.scroll_threshold and header.up_delay must not be negative".into(),
            ));
        }
        Ok(())
    }

    /// Every icon key referenced anywhere in the document, in document order.
    ///
    /// Technology names and logos are not included: those resolve through
    /// [`crate::icons::tech_icon`] and [`crate::icons::lookup_logo`].
    pub fn icon_references(&self) -> Vec<&str> {
        let mut names = Vec::new();
        names.extend(self.hero.highlights.iter().map(|h| h.icon.as_str()));
        for category in &self.skills.categories {
            names.push(category.icon.as_str());
            names.extend(category.skills.iter().map(|s| s.icon.as_str()));
        }
        names.extend(self.projects.items.iter().map(|p| p.icon.as_str()));
        names.extend(self.community.activities.iter().map(|a| a.icon.as_str()));
        names
    }
}

// =============================================================================
// Loading and caching
// =============================================================================

/// Parse and validate a configuration document.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_yaml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Read, parse and validate the configuration document at `path`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::Missing(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Lazily loaded, process-lifetime configuration.
///
/// The first successful [`get`](Self::get) reads the file; every later call
/// returns a clone of the same `Arc`. A failed load is not cached, so the
/// next call retries.
#[derive(Debug)]
pub struct ConfigCache {
    path: PathBuf,
    cell: OnceLock<Arc<AppConfig>>,
}

impl ConfigCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
        }
    }

    /// Cache for `config.yaml` inside a content root.
    pub fn for_content_root(root: &Path) -> Self {
        Self::new(root.join(CONFIG_FILE))
    }

    /// Build a cache that is already filled. No file is ever read.
    pub fn preloaded(config: AppConfig) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(Arc::new(config));
        Self {
            path: PathBuf::new(),
            cell,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn get(&self) -> Result<Arc<AppConfig>, ConfigError> {
        if let Some(config) = self.cell.get() {
            return Ok(Arc::clone(config));
        }
        let loaded = Arc::new(load_config(&self.path)?);
        // Losing a first-fill race is fine: keep whichever value landed first.
        let stored = self.cell.get_or_init(|| loaded);
        Ok(Arc::clone(stored))
    }

    pub fn personal(&self) -> Result<PersonalConfig, ConfigError> {
        Ok(self.get()?.personal.clone())
    }

    pub fn contact(&self) -> Result<ContactConfig, ConfigError> {
        Ok(self.get()?.contact.clone())
    }

    pub fn site(&self) -> Result<SiteConfig, ConfigError> {
        Ok(self.get()?.site.clone())
    }

    pub fn hero(&self) -> Result<HeroConfig, ConfigError> {
        Ok(self.get()?.hero.clone())
    }

    pub fn skills(&self) -> Result<SkillsConfig, ConfigError> {
        Ok(self.get()?.skills.clone())
    }

    pub fn experience(&self) -> Result<ExperienceConfig, ConfigError> {
        Ok(self.get()?.experience.clone())
    }

    pub fn projects(&self) -> Result<ProjectsConfig, ConfigError> {
        Ok(self.get()?.projects.clone())
    }

    pub fn community(&self) -> Result<CommunityConfig, ConfigError> {
        Ok(self.get()?.community.clone())
    }

    pub fn sections(&self) -> Result<SectionsConfig, ConfigError> {
        Ok(self.get()?.sections.clone())
    }

    pub fn header(&self) -> Result<HeaderConfig, ConfigError> {
        Ok(self.get()?.header.clone())
    }
}

/// Returns a fully-commented sample `config.yaml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_yaml() -> &'static str {
    r##"# folio configuration
# ====================
# `personal`, `contact` and `site` are required. Every other section is
# optional. Unknown keys cause an error.
#
# Icon names resolve against the built-in icon table: technology slugs
# (react, go, kubernetes, ...), display names (React.js, Node.js, ...) and
# glyph names (Users, Layers, Code, ...). Unknown names render a fallback glyph.

personal:
  name: Jordan Rivera
  title: Staff Platform Engineer
  location: Brooklyn, NY
  tagline: Building scalable solutions for complex infrastructure
  description: >-
    I build the invisible infrastructure that makes everything else possible,
    and the teams that maintain and evolve it.
  availability:
    status: Open for new opportunities
    active: true

contact:
  email: jordan@example.dev
  github: https://github.com/jordan-rivera
  linkedin: https://www.linkedin.com/in/jordan-rivera/
  website: https://jordan.example.dev

site:
  title: Jordan Rivera - Staff Platform Engineer
  description: Platform engineering, distributed systems and team leadership.

# Compact strengths shown under the hero text (and on the resume).
hero:
  highlights:
    - { name: Team Management, icon: Users, color: green }
    - { name: Distributed Systems, icon: Layers, color: purple }
    - { name: API Architecture, icon: Activity, color: orange }
    - { name: Full-Stack Development, icon: Code, color: cyan }

skills:
  categories:
    - title: Platform & Infrastructure
      description: Private cloud, container orchestration and infrastructure as code.
      icon: Server
      color: blue
      experience: 8+ years
      skills:
        - { name: Kubernetes, icon: kubernetes }
        - { name: Terraform, icon: terraform }
        - { name: Docker, icon: docker }
        - { name: OpenStack, icon: openstack }
    - title: Backend Development
      description: APIs and services at scale.
      icon: Database
      color: emerald
      experience: 10+ years
      skills:
        - { name: Go, icon: go }
        - { name: Node.js, icon: nodejs }
        - { name: PostgreSQL, icon: postgresql }
        - { name: GraphQL, icon: graphql }

experience:
  positions:
    - company: Example Corp
      company_url: https://example.com
      role: Platform Engineering Team Lead
      period: March 2021 - Present
      location: New York, NY
      type: Full-time
      logo: bbg
      description: Leading the internal API platform team.
      achievements:
        - Built a centralized API platform for private cloud infrastructure
        - Managed a five-engineer team focused on developer tools
      technologies: [React, Node.js, TypeScript, Kubernetes, Golang]
      color: orange

projects:
  items:
    - name: Home Lab
      description: Personal infrastructure for self-hosted services.
      highlights:
        - "Infrastructure Design: GPU-accelerated inference with monitoring"
      link:
        href: https://github.com/jordan-rivera/homelab
        label: github.com/jordan-rivera/homelab
        is_private: true
      icon: Server
      tags: [Infrastructure, Docker]

community:
  title: Community
  description: Mentoring and giving back.
  activities:
    - title: Code Mentor
      role: Volunteer
      duration: 2019 - Present
      type: Mentorship
      icon: GraduationCap
      color: indigo
      description: Weekly mentoring sessions for early-career engineers.
      achievements:
        - Mentored 20+ engineers into their first roles

sections:
  latest_articles:
    title: Latest Articles
    description: Thoughts on software development, leadership, and technology
    max_count: 3

# Scroll-reactive header. Values shown are the defaults.
header:
  avatar_max_scale: 1.0
  avatar_min_scale: 0.5625   # 36px avatar out of 64px
  avatar_max_offset_rem: 0.125
  scroll_threshold: 96.0     # px of scroll over which the avatar shrinks
  up_delay: 64.0             # px the header may leave the viewport before following
"##
}
