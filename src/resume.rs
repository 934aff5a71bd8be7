//! LaTeX resume generation.
//!
//! The same `config.yaml` that drives the site also fills a LaTeX resume
//! template. The template is ordinary LaTeX containing placeholders, each
//! replaced by a generated block:
//!
//! | Placeholder | Content |
//! |-------------|---------|
//! | `{{HEADER_CONTENT}}` | name, title, tagline, location, contact links, summary |
//! | `{{HIGHLIGHTS_CONTENT}}` | hero highlights as `\highlightbox` rows of four |
//! | `{{EXPERIENCE_CONTENT}}` | `\jobtitle` per position, achievements, technologies |
//! | `{{SKILLS_CONTENT}}` | `\skillcategory` per skill category |
//! | `{{PROJECTS_CONTENT}}` | `\project` per project, with tags |
//!
//! The template defines the macros (`\highlightbox`, `\jobtitle`,
//! `\skillcategory`, `\project`) and the colors `textdark`, `textgray`,
//! `accentblue`.

use crate::config::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default template name inside the content root.
pub const TEMPLATE_FILE: &str = "resume-template.tex";

/// Default output file name.
pub const OUTPUT_FILE: &str = "generated-resume.tex";

const HIGHLIGHTS_PER_ROW: usize = 4;
const ROW_BREAK: &str = "\\\\\n\\vspace{0.4em}\n";

#[derive(Error, Debug)]
pub enum ResumeError {
    #[error("Resume template not found: {0}")]
    MissingTemplate(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Escape LaTeX special characters. Backslash goes first so later
/// replacements are not double-escaped.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '&' => out.push_str(r"\&"),
            '%' => out.push_str(r"\%"),
            '$' => out.push_str(r"\$"),
            '#' => out.push_str(r"\#"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '_' => out.push_str(r"\_"),
            '{' => out.push_str(r"\{"),
            '}' => out.push_str(r"\}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape only what breaks inside `\href{...}`.
fn escape_url(url: &str) -> String {
    url.replace('%', r"\%").replace('#', r"\#")
}

/// Link text for a URL: scheme and trailing slash removed.
pub fn display_url(url: &str) -> &str {
    url.trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
}

pub fn header_block(config: &AppConfig) -> String {
    let personal = &config.personal;
    let contact = &config.contact;

    let mut links = vec![format!(
        r"\faEnvelope\ \href{{mailto:{email}}}{{{label}}}",
        email = escape_url(&contact.email),
        label = escape_latex(&contact.email),
    )];
    if let Some(website) = &contact.website {
        links.push(format!(
            r"\faGlobe\ \href{{{}}}{{{}}}",
            escape_url(website),
            escape_latex(display_url(website))
        ));
    }
    links.push(format!(
        r"\faGithub\ \href{{{}}}{{{}}}",
        escape_url(&contact.github),
        escape_latex(display_url(&contact.github))
    ));
    links.push(format!(
        r"\faLinkedin\ \href{{{}}}{{{}}}",
        escape_url(&contact.linkedin),
        escape_latex(display_url(&contact.linkedin))
    ));

    format!(
        r"% Header Section
{{\Large\bfseries\color{{textdark}} {name}}}

\vspace{{0.1em}}
{{\normalsize\color{{textgray}} {title}}}

\vspace{{0.1em}}
{{\small\color{{textdark}}\textit{{{tagline}}}}}

\vspace{{0.1em}}
{{\small\color{{textgray}} {location}}}

\vspace{{0.3em}}
{{\scriptsize\color{{accentblue}}
    {links}
}}

\vspace{{0.8em}}

{{\small {description}}}

\vspace{{1em}}",
        name = escape_latex(&personal.name),
        title = escape_latex(&personal.title),
        tagline = escape_latex(&personal.tagline),
        location = escape_latex(&personal.location),
        links = links.join(r" \quad
    "),
        description = escape_latex(&personal.description),
    )
}

pub fn highlights_block(config: &AppConfig) -> String {
    let boxes: Vec<String> = config
        .hero
        .highlights
        .iter()
        .map(|h| {
            format!(
                r"\highlightbox{{{}}}{{{}}}{{{}}}",
                escape_latex(&h.icon),
                escape_latex(&h.color),
                escape_latex(&h.name)
            )
        })
        .collect();

    let mut rows = boxes.chunks(HIGHLIGHTS_PER_ROW).map(|row| row.join(r"\hfill"));
    // The first row always closes with a line break and spacer, even when alone.
    let first = rows.next().unwrap_or_default();
    let rest = rows.collect::<Vec<_>>().join(ROW_BREAK);
    format!("{first}{ROW_BREAK}{rest}")
}

pub fn experience_block(config: &AppConfig) -> String {
    let mut out = String::from("% Experience Section\n\\section{Experience}\n\n");
    for position in &config.experience.positions {
        out.push_str(&format!(
            "\\jobtitle{{{}}}{{{}}}{{{}}}{{{}}}\n\n",
            escape_latex(&position.role),
            escape_latex(&position.period),
            escape_latex(&position.company),
            escape_latex(&position.location),
        ));
        if !position.achievements.is_empty() {
            out.push_str("\\begin{itemize}\n");
            for achievement in &position.achievements {
                out.push_str(&format!("    \\item {}\n", escape_latex(achievement)));
            }
            out.push_str("\\end{itemize}\n");
        }
        if !position.technologies.is_empty() {
            let techs: Vec<String> = position.technologies.iter().map(|t| escape_latex(t)).collect();
            out.push_str(&format!(
                "\n\\vspace{{0.2em}}\n{{\\scriptsize\\color{{textgray}} Technologies: {}}}\n\n",
                techs.join(" • ")
            ));
        }
        out.push_str("\\vspace{0.5em}\n\n");
    }
    out
}

pub fn skills_block(config: &AppConfig) -> String {
    let mut out = String::from("% Skills Section\n\\section{Skills}\n\n");
    for category in &config.skills.categories {
        let skills: Vec<String> = category.skills.iter().map(|s| escape_latex(&s.name)).collect();
        out.push_str(&format!(
            "\\skillcategory\n    {{{}}}\n    {{{}}}\n    {{Expert}}\n    {{{}}}\n    {{{}}}\n\n",
            escape_latex(&category.title),
            escape_latex(&category.description),
            escape_latex(&category.experience),
            skills.join(" • "),
        ));
    }
    out
}

pub fn projects_block(config: &AppConfig) -> String {
    let mut out = String::from("% Projects Section\n\\section{Projects}\n\n");
    for project in &config.projects.items {
        out.push_str(&format!(
            "\\project{{{}}}{{{}}}{{{}}}\n\n",
            escape_latex(&project.name),
            escape_latex(&project.description),
            escape_url(&project.link.href),
        ));
        if !project.tags.is_empty() {
            let tags: Vec<String> = project.tags.iter().map(|t| escape_latex(t)).collect();
            out.push_str(&format!(
                "\\vspace{{0.1em}}\n{{\\scriptsize\\color{{textgray}} {}}}\n\n",
                tags.join(", ")
            ));
        }
        out.push_str("\\vspace{0.4em}\n\n");
    }
    out
}

/// Substitute every placeholder in `template`.
pub fn render_resume(template: &str, config: &AppConfig) -> String {
    let substitutions = [
        ("{{HEADER_CONTENT}}", header_block(config)),
        ("{{HIGHLIGHTS_CONTENT}}", highlights_block(config)),
        ("{{EXPERIENCE_CONTENT}}", experience_block(config)),
        ("{{SKILLS_CONTENT}}", skills_block(config)),
        ("{{PROJECTS_CONTENT}}", projects_block(config)),
    ];
    substitutions
        .iter()
        .fold(template.to_string(), |doc, (placeholder, content)| {
            doc.replace(placeholder, content)
        })
}

/// Read `template_path`, render, and write the result to `output_path`.
pub fn write_resume(
    template_path: &Path,
    output_path: &Path,
    config: &AppConfig,
) -> Result<(), ResumeError> {
    if !template_path.is_file() {
        return Err(ResumeError::MissingTemplate(template_path.to_path_buf()));
    }
    let template = fs::read_to_string(template_path)?;
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, render_resume(&template, config))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, stock_config_yaml};
    use tempfile::TempDir;

    fn config() -> AppConfig {
        parse_config(stock_config_yaml()).unwrap()
    }

    #[test]
    fn escape_latex_specials() {
        assert_eq!(escape_latex("R&D 100%"), r"R\&D 100\%");
        assert_eq!(escape_latex("a_b {c}"), r"a\_b \{c\}");
        assert_eq!(escape_latex(r"\n"), r"\textbackslash{}n");
        assert_eq!(escape_latex("~^$#"), r"\textasciitilde{}\textasciicircum{}\$\#");
        assert_eq!(escape_latex("plain"), "plain");
    }

    #[test]
    fn display_url_strips_scheme() {
        assert_eq!(display_url("https://github.com/jordan/"), "github.com/jordan");
        assert_eq!(display_url("http://example.dev"), "example.dev");
    }

    #[test]
    fn header_contains_identity_and_links() {
        let header = header_block(&config());
        assert!(header.contains("Jordan Rivera"));
        assert!(header.contains(r"\href{mailto:jordan@example.dev}"));
        assert!(header.contains(r"\faGlobe\ \href{https://jordan.example.dev}{jordan.example.dev}"));
        assert!(header.contains("github.com/jordan-rivera"));
    }

    #[test]
    fn header_omits_missing_website() {
        let mut config = config();
        config.contact.website = None;
        assert!(!header_block(&config).contains(r"\faGlobe"));
    }

    #[test]
    fn highlights_split_into_rows_of_four() {
        let mut config = config();
        let extra = config.hero.highlights[0].clone();
        config.hero.highlights.push(extra);
        let block = highlights_block(&config);
        let rows: Vec<&str> = block.split("\\vspace{0.4em}").collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].matches(r"\highlightbox").count(), 4);
        assert_eq!(rows[1].matches(r"\highlightbox").count(), 1);
    }

    #[test]
    fn single_highlight_row_keeps_break_and_spacer() {
        let mut config = config();
        config.hero.highlights.truncate(2);
        let block = highlights_block(&config);
        assert!(block.ends_with("\\\\\n\\vspace{0.4em}\n"));
        assert_eq!(block.matches(r"\highlightbox").count(), 2);
        assert_eq!(block.matches(r"\vspace{0.4em}").count(), 1);
    }

    #[test]
    fn experience_lists_achievements_and_technologies() {
        let block = experience_block(&config());
        assert!(block.contains(r"\jobtitle{Platform Engineering Team Lead}{March 2021 - Present}{Example Corp}{New York, NY}"));
        assert!(block.contains(r"\begin{itemize}"));
        assert!(block.contains("Technologies: React • Node.js"));
    }

    #[test]
    fn skills_and_projects_blocks() {
        let config = config();
        let skills = skills_block(&config);
        assert!(skills.contains(r"\skillcategory"));
        assert!(skills.contains("Kubernetes • Terraform"));
        assert!(skills.contains(r"{Platform \& Infrastructure}"));

        let projects = projects_block(&config);
        assert!(projects.contains(r"\project{Home Lab}"));
        assert!(projects.contains("Infrastructure, Docker"));
    }

    #[test]
    fn render_replaces_all_placeholders() {
        let template = "\\begin{document}\n{{HEADER_CONTENT}}\n{{HIGHLIGHTS_CONTENT}}\n{{EXPERIENCE_CONTENT}}\n{{SKILLS_CONTENT}}\n{{PROJECTS_CONTENT}}\n\\end{document}";
        let doc = render_resume(template, &config());
        assert!(!doc.contains("{{"));
        assert!(doc.starts_with("\\begin{document}"));
        assert!(doc.contains(r"\section{Experience}"));
    }

    #[test]
    fn write_resume_missing_template() {
        let tmp = TempDir::new().unwrap();
        let result = write_resume(
            &tmp.path().join(TEMPLATE_FILE),
            &tmp.path().join(OUTPUT_FILE),
            &config(),
        );
        assert!(matches!(result, Err(ResumeError::MissingTemplate(_))));
    }

    #[test]
    fn write_resume_writes_output() {
        let tmp = TempDir::new().unwrap();
        let template = tmp.path().join(TEMPLATE_FILE);
        fs::write(&template, "{{SKILLS_CONTENT}}").unwrap();
        let out = tmp.path().join("out/resume.tex");
        write_resume(&template, &out, &config()).unwrap();
        let written = fs::read_to_string(out).unwrap();
        assert!(written.starts_with("% Skills Section"));
    }
}
