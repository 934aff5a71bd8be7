//! # Folio
//!
//! A static site generator for an engineer's portfolio. One YAML document
//! describes the person (profile, contact, strengths, skills, work history,
//! projects, community work); a directory of markdown files holds articles.
//! `folio build` turns both into a plain HTML site.
//!
//! # Content Layout
//!
//! ```text
//! content/
//! ├── config.yaml             # required
//! ├── about.md                # optional about page
//! ├── resume-template.tex     # optional, for `folio resume`
//! ├── articles/
//! │   ├── hello-world.md      # slug = file stem
//! │   └── platform-teams/
//! │       ├── index.md        # slug = directory name
//! │       └── diagram.svg     # bundle files are copied next to the page
//! └── assets/                 # copied verbatim to dist/assets/
//!     ├── profile.jpeg
//!     ├── icons/…
//!     └── logos/…
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.yaml` schema, validation and the per-process [`config::ConfigCache`] |
//! | [`icons`] | Icon and logo name tables; technology badge heuristics |
//! | [`header`] | Scroll-reactive header math, shared with `static/header.js` |
//! | [`articles`] | Front-matter parsing and the newest-first article collection |
//! | [`feed`] | RSS 2.0 feed, written when a public site URL is known |
//! | [`sections`] | Home page sections as Maud components |
//! | [`generate`] | Page rendering and the output tree |
//! | [`resume`] | LaTeX resume from a template with placeholders |
//! | [`output`] | CLI output formatting for `check` and `build` |
//!
//! # Design Decisions
//!
//! ## One Document, Read Once
//!
//! Every page reads the same configuration. [`config::ConfigCache`] parses it
//! on first access and hands out the same `Arc` afterwards; a failed load is
//! not cached, so the next access retries. The cache is owned by whoever
//! drives the build, not a global.
//!
//! ## Names, Not Paths
//!
//! Configuration refers to icons by name (`kubernetes`, `Users`). Unknown
//! names never fail a build: they render a fallback glyph and `check` lists
//! them.
//!
//! ## Server-Rendered First Frame
//!
//! The header's scroll-0 state is computed in Rust and written into the
//! page as CSS custom properties. `header.js` only takes over on scroll.
//!
//! ## Maud Templates
//!
//! HTML (and the RSS feed) is generated with [Maud](https://maud.lambda.xyz/).
//! All interpolation is escaped; markdown output is the only pre-escaped input.

pub mod articles;
pub mod config;
pub mod feed;
pub mod generate;
pub mod header;
pub mod icons;
pub mod output;
pub mod resume;
pub mod sections;

#[cfg(test)]
pub(crate) mod test_helpers;
