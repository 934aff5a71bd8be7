//! Icon and logo lookup.
//!
//! Configuration refers to visuals by name (`icon: kubernetes`,
//! `icon: Users`, `logo: paxos`). This module maps those names to either a
//! bundled asset file under `assets/` or a UI glyph from the sprite sheet
//! `assets/glyphs.svg` (built in; a content-provided sheet takes precedence).
//!
//! Lookups are pure. An unknown name yields `None` and the caller picks a
//! fallback glyph; nothing here ever fails.

use crate::config::AppConfig;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

/// A file in the static asset bundle, addressed relative to `assets/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub path: &'static str,
}

impl Asset {
    const fn new(path: &'static str) -> Self {
        Self { path }
    }

    /// Site-absolute URL of the copied asset.
    pub fn url(&self) -> String {
        format!("/assets/{}", self.path)
    }
}

/// UI glyphs available in the sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Activity,
    Box,
    Briefcase,
    Calendar,
    CheckSquare,
    Cloud,
    Code,
    Cog,
    Crown,
    Database,
    ExternalLink,
    Github,
    GraduationCap,
    Heart,
    Home,
    Layers,
    Linkedin,
    ListTodo,
    Mail,
    MapPin,
    Menu,
    Network,
    Package,
    Palette,
    PlayCircle,
    Rss,
    Server,
    Settings,
    Users,
    Zap,
}

impl Glyph {
    /// Symbol id inside `glyphs.svg`.
    pub fn id(self) -> &'static str {
        match self {
            Glyph::Activity => "activity",
            Glyph::Box => "box",
            Glyph::Briefcase => "briefcase",
            Glyph::Calendar => "calendar",
            Glyph::CheckSquare => "check-square",
            Glyph::Cloud => "cloud",
            Glyph::Code => "code",
            Glyph::Cog => "cog",
            Glyph::Crown => "crown",
            Glyph::Database => "database",
            Glyph::ExternalLink => "external-link",
            Glyph::Github => "github",
            Glyph::GraduationCap => "graduation-cap",
            Glyph::Heart => "heart",
            Glyph::Home => "home",
            Glyph::Layers => "layers",
            Glyph::Linkedin => "linkedin",
            Glyph::ListTodo => "list-todo",
            Glyph::Mail => "mail",
            Glyph::MapPin => "map-pin",
            Glyph::Menu => "menu",
            Glyph::Network => "network",
            Glyph::Package => "package",
            Glyph::Palette => "palette",
            Glyph::PlayCircle => "play-circle",
            Glyph::Rss => "rss",
            Glyph::Server => "server",
            Glyph::Settings => "settings",
            Glyph::Users => "users",
            Glyph::Zap => "zap",
        }
    }

    /// `href` for an SVG `<use>` element referencing this glyph.
    pub fn sprite_href(self) -> String {
        format!("/assets/{GLYPH_SPRITE}#{}", self.id())
    }
}

/// What a configured icon name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Image(Asset),
    Glyph(Glyph),
}

/// Sprite sheet holding every [`Glyph`], relative to `assets/`.
pub const GLYPH_SPRITE: &str = "glyphs.svg";

/// Profile photo used in the header and hero.
pub const AVATAR: Asset = Asset::new("profile.jpeg");

const REACT: Asset = Asset::new("icons/react.png");
const NEXTJS: Asset = Asset::new("icons/next-js.png");
const TYPESCRIPT: Asset = Asset::new("icons/typescript.png");
const NODEJS: Asset = Asset::new("icons/nodejs.png");
const DOCKER: Asset = Asset::new("icons/docker.png");
const TAILWINDCSS: Asset = Asset::new("icons/tailwindcss.png");
const GIT: Asset = Asset::new("icons/git.png");
const GO: Asset = Asset::new("icons/go.svg");
const PYTHON: Asset = Asset::new("icons/python.png");
const POSTGRESQL: Asset = Asset::new("icons/postgresql.svg");
const GRAPHQL: Asset = Asset::new("icons/graphql.svg");
const TERRAFORM: Asset = Asset::new("icons/terraform.svg");
const PACKER: Asset = Asset::new("icons/packer.svg");
const PROXMOX: Asset = Asset::new("icons/proxmox.svg");
const OPENSTACK: Asset = Asset::new("icons/openstack.svg");
const TRUENAS: Asset = Asset::new("icons/truenas.svg");
const KUBERNETES: Asset = Asset::new("icons/kubernetes.svg");
const REDIS: Asset = Asset::new("icons/redis.svg");
const KAFKA: Asset = Asset::new("icons/kafka.svg");
const AIRFLOW: Asset = Asset::new("icons/airflow.svg");
const MONGODB: Asset = Asset::new("icons/mongodb.svg");
const JAVASCRIPT: Asset = Asset::new("icons/javascript.svg");
const CSS: Asset = Asset::new("icons/css.svg");
const AWS: Asset = Asset::new("icons/aws.svg");
const ANGULAR: Asset = Asset::new("icons/angular.svg");
const WEBPACK: Asset = Asset::new("icons/webpack.svg");
const HOMEASSISTANT: Asset = Asset::new("icons/homeassistant.svg");
const JELLYFIN: Asset = Asset::new("icons/jellyfin.svg");

const ICON_TABLE: &[(&str, Icon)] = &[
    ("react", Icon::Image(REACT)),
    ("React", Icon::Image(REACT)),
    ("React.js", Icon::Image(REACT)),
    ("nextjs", Icon::Image(NEXTJS)),
    ("Next.js", Icon::Image(NEXTJS)),
    ("typescript", Icon::Image(TYPESCRIPT)),
    ("TypeScript", Icon::Image(TYPESCRIPT)),
    ("nodejs", Icon::Image(NODEJS)),
    ("Node.js", Icon::Image(NODEJS)),
    ("docker", Icon::Image(DOCKER)),
    ("Docker", Icon::Image(DOCKER)),
    ("tailwindcss", Icon::Image(TAILWINDCSS)),
    ("Tailwind CSS", Icon::Image(TAILWINDCSS)),
    ("TailwindCSS", Icon::Image(TAILWINDCSS)),
    ("git", Icon::Image(GIT)),
    ("Git", Icon::Image(GIT)),
    ("go", Icon::Image(GO)),
    ("Go", Icon::Image(GO)),
    ("Golang", Icon::Image(GO)),
    ("python", Icon::Image(PYTHON)),
    ("Python", Icon::Image(PYTHON)),
    ("postgresql", Icon::Image(POSTGRESQL)),
    ("PostgreSQL", Icon::Image(POSTGRESQL)),
    ("graphql", Icon::Image(GRAPHQL)),
    ("GraphQL", Icon::Image(GRAPHQL)),
    ("terraform", Icon::Image(TERRAFORM)),
    ("Terraform", Icon::Image(TERRAFORM)),
    ("packer", Icon::Image(PACKER)),
    ("Packer", Icon::Image(PACKER)),
    ("proxmox", Icon::Image(PROXMOX)),
    ("Proxmox", Icon::Image(PROXMOX)),
    ("openstack", Icon::Image(OPENSTACK)),
    ("OpenStack", Icon::Image(OPENSTACK)),
    ("truenas", Icon::Image(TRUENAS)),
    ("TrueNAS", Icon::Image(TRUENAS)),
    ("kubernetes", Icon::Image(KUBERNETES)),
    ("Kubernetes", Icon::Image(KUBERNETES)),
    ("K8s", Icon::Image(KUBERNETES)),
    ("redis", Icon::Image(REDIS)),
    ("Redis", Icon::Image(REDIS)),
    ("kafka", Icon::Image(KAFKA)),
    ("Apache Kafka", Icon::Image(KAFKA)),
    ("airflow", Icon::Image(AIRFLOW)),
    ("Apache Airflow", Icon::Image(AIRFLOW)),
    ("mongodb", Icon::Image(MONGODB)),
    ("MongoDB", Icon::Image(MONGODB)),
    ("javascript", Icon::Image(JAVASCRIPT)),
    ("JavaScript", Icon::Image(JAVASCRIPT)),
    ("css", Icon::Image(CSS)),
    ("CSS", Icon::Image(CSS)),
    ("aws", Icon::Image(AWS)),
    ("AWS", Icon::Image(AWS)),
    ("angular", Icon::Image(ANGULAR)),
    ("Angular", Icon::Image(ANGULAR)),
    ("webpack", Icon::Image(WEBPACK)),
    ("Webpack", Icon::Image(WEBPACK)),
    ("Home Assistant", Icon::Image(HOMEASSISTANT)),
    ("Jellyfin", Icon::Image(JELLYFIN)),
    // Tools without a bundled logo
    ("Neovim", Icon::Glyph(Glyph::Code)),
    ("Zsh", Icon::Glyph(Glyph::Code)),
    ("Shell", Icon::Glyph(Glyph::Code)),
    ("Tmux", Icon::Glyph(Glyph::Code)),
    ("macOS", Icon::Glyph(Glyph::Settings)),
    ("Linux", Icon::Glyph(Glyph::Settings)),
    ("Vite", Icon::Glyph(Glyph::Zap)),
    ("Module Federation", Icon::Glyph(Glyph::Network)),
    // Glyphs by name
    ("Users", Icon::Glyph(Glyph::Users)),
    ("Layers", Icon::Glyph(Glyph::Layers)),
    ("Activity", Icon::Glyph(Glyph::Activity)),
    ("Code", Icon::Glyph(Glyph::Code)),
    ("Crown", Icon::Glyph(Glyph::Crown)),
    ("CheckSquare", Icon::Glyph(Glyph::CheckSquare)),
    ("Package", Icon::Glyph(Glyph::Package)),
    ("Palette", Icon::Glyph(Glyph::Palette)),
    ("Zap", Icon::Glyph(Glyph::Zap)),
    ("Database", Icon::Glyph(Glyph::Database)),
    ("Network", Icon::Glyph(Glyph::Network)),
    ("Server", Icon::Glyph(Glyph::Server)),
    ("Settings", Icon::Glyph(Glyph::Settings)),
    ("Cog", Icon::Glyph(Glyph::Cog)),
    ("Box", Icon::Glyph(Glyph::Box)),
    ("Calendar", Icon::Glyph(Glyph::Calendar)),
    ("Tasks", Icon::Glyph(Glyph::ListTodo)),
    ("GraduationCap", Icon::Glyph(Glyph::GraduationCap)),
    ("Heart", Icon::Glyph(Glyph::Heart)),
    ("PlayCircle", Icon::Glyph(Glyph::PlayCircle)),
    ("Home", Icon::Glyph(Glyph::Home)),
    ("Cloud", Icon::Glyph(Glyph::Cloud)),
];

const LOGO_TABLE: &[(&str, Asset)] = &[
    ("bbg", Asset::new("logos/bbg.svg")),
    ("paxos", Asset::new("logos/paxos.svg")),
    ("madison-reed", Asset::new("logos/madison-reed.svg")),
];

static ICONS: LazyLock<HashMap<&'static str, Icon>> =
    LazyLock::new(|| ICON_TABLE.iter().copied().collect());

static LOGOS: LazyLock<HashMap<&'static str, Asset>> =
    LazyLock::new(|| LOGO_TABLE.iter().copied().collect());

/// Resolve a configured icon name. Keys are case-sensitive.
pub fn lookup_icon(name: &str) -> Option<Icon> {
    ICONS.get(name).copied()
}

/// Resolve a company logo key.
pub fn lookup_logo(name: &str) -> Option<Asset> {
    LOGOS.get(name).copied()
}

/// Icon for a technology badge. Never absent.
///
/// Tries the exact table first, then loose substring matching on the
/// lowercased name, and finally falls back to [`Glyph::Code`].
pub fn tech_icon(name: &str) -> Icon {
    if let Some(icon) = lookup_icon(name) {
        return icon;
    }
    let lower = name.to_lowercase();
    let has = |needle: &str| lower.contains(needle);

    if has("react") {
        Icon::Image(REACT)
    } else if has("node") {
        Icon::Image(NODEJS)
    } else if has("typescript") {
        Icon::Image(TYPESCRIPT)
    } else if has("docker") {
        Icon::Image(DOCKER)
    } else if has("python") {
        Icon::Image(PYTHON)
    } else if has("postgres") {
        Icon::Image(POSTGRESQL)
    } else if has("graphql") {
        Icon::Image(GRAPHQL)
    } else if lower == "golang" || lower.split_whitespace().any(|w| w == "go") {
        Icon::Image(GO)
    } else if has("kubernetes") || lower == "k8s" {
        Icon::Glyph(Glyph::Box)
    } else if has("aws") || has("cloud") || has("openstack") {
        Icon::Glyph(Glyph::Cloud)
    } else if has("database") || has("mongodb") || has("redis") {
        Icon::Glyph(Glyph::Database)
    } else if has("terraform") || has("api") {
        Icon::Glyph(Glyph::Network)
    } else {
        Icon::Glyph(Glyph::Code)
    }
}

/// Assets a rendered site will request for `config`, sorted and deduplicated.
///
/// Covers the avatar, image icons, technology badges and company logos.
/// The glyph sprite is not listed: the generator ships its own copy.
pub fn referenced_assets(config: &AppConfig) -> Vec<Asset> {
    let icons = config.icon_references().into_iter().filter_map(lookup_icon);
    let techs = config
        .experience
        .positions
        .iter()
        .flat_map(|p| p.technologies.iter())
        .map(|t| tech_icon(t));
    let logos = config
        .experience
        .positions
        .iter()
        .filter_map(|p| lookup_logo(&p.logo));

    let mut assets: Vec<Asset> = icons
        .chain(techs)
        .filter_map(|icon| match icon {
            Icon::Image(asset) => Some(asset),
            Icon::Glyph(_) => None,
        })
        .chain(logos)
        .chain([AVATAR])
        .collect();
    assets.sort_by_key(|a| a.path);
    assets.dedup();
    assets
}

/// Icon and logo names in `config` that resolve to nothing.
///
/// These still render (with a fallback glyph); they are reported so typos
/// get noticed. Logos are prefixed with `logo:`.
pub fn unresolved_names(config: &AppConfig) -> Vec<String> {
    let icons = config
        .icon_references()
        .into_iter()
        .filter(|name| !name.is_empty() && lookup_icon(name).is_none())
        .map(str::to_string);
    let logos = config
        .experience
        .positions
        .iter()
        .filter(|p| !p.logo.is_empty() && lookup_logo(&p.logo).is_none())
        .map(|p| format!("logo:{}", p.logo));
    let mut seen = HashSet::new();
    icons.chain(logos).filter(|name| seen.insert(name.clone())).collect()
}

/// The subset of `assets` not present under `assets_dir`.
pub fn missing_assets(assets_dir: &Path, assets: &[Asset]) -> Vec<Asset> {
    assets
        .iter()
        .filter(|asset| !assets_dir.join(asset.path).is_file())
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn slug_and_display_keys_share_asset() {
        assert_eq!(lookup_icon("react"), lookup_icon("React.js"));
        assert_eq!(lookup_icon("kubernetes"), lookup_icon("K8s"));
        assert_eq!(lookup_icon("go"), Some(Icon::Image(GO)));
    }

    #[test]
    fn glyph_names_resolve_to_glyphs() {
        assert_eq!(lookup_icon("Users"), Some(Icon::Glyph(Glyph::Users)));
        assert_eq!(lookup_icon("Tasks"), Some(Icon::Glyph(Glyph::ListTodo)));
        assert_eq!(lookup_icon("Neovim"), Some(Icon::Glyph(Glyph::Code)));
    }

    #[test]
    fn unknown_icon_is_none() {
        assert_eq!(lookup_icon("cobol"), None);
        assert_eq!(lookup_icon(""), None);
        // case-sensitive
        assert_eq!(lookup_icon("users"), None);
    }

    #[test]
    fn logos() {
        assert_eq!(lookup_logo("paxos").unwrap().path, "logos/paxos.svg");
        assert_eq!(lookup_logo("madison-reed").unwrap().url(), "/assets/logos/madison-reed.svg");
        assert_eq!(lookup_logo("acme"), None);
    }

    #[test]
    fn tech_icon_exact_then_fuzzy() {
        assert_eq!(tech_icon("React"), Icon::Image(REACT));
        assert_eq!(tech_icon("React Native"), Icon::Image(REACT));
        assert_eq!(tech_icon("Postgres"), Icon::Image(POSTGRESQL));
        assert_eq!(tech_icon("golang"), Icon::Image(GO));
        assert_eq!(tech_icon("k8s"), Icon::Glyph(Glyph::Box));
        assert_eq!(tech_icon("Google Cloud"), Icon::Glyph(Glyph::Cloud));
        assert_eq!(tech_icon("REST API"), Icon::Glyph(Glyph::Network));
    }

    #[test]
    fn tech_icon_does_not_match_go_inside_words() {
        // "MongoDB" is in the table, but "Mongoose" must not become the Go gopher.
        assert_eq!(tech_icon("Mongoose"), Icon::Glyph(Glyph::Code));
        assert_eq!(tech_icon("Django"), Icon::Glyph(Glyph::Code));
    }

    #[test]
    fn tech_icon_falls_back_to_code() {
        assert_eq!(tech_icon("COBOL"), Icon::Glyph(Glyph::Code));
    }

    #[test]
    fn sprite_sheet_defines_every_glyph() {
        use Glyph::*;
        let sheet = include_str!("../static/glyphs.svg");
        let all = [
            Activity, Box, Briefcase, Calendar, CheckSquare, Cloud, Code, Cog, Crown, Database,
            ExternalLink, Github, GraduationCap, Heart, Home, Layers, Linkedin, ListTodo, Mail,
            MapPin, Menu, Network, Package, Palette, PlayCircle, Rss, Server, Settings, Users, Zap,
        ];
        for glyph in all {
            assert!(
                sheet.contains(&format!(r#"<symbol id="{}""#, glyph.id())),
                "{glyph:?}"
            );
        }
    }

    #[test]
    fn glyph_sprite_href() {
        assert_eq!(
            Glyph::GraduationCap.sprite_href(),
            "/assets/glyphs.svg#graduation-cap"
        );
    }

    fn stock() -> AppConfig {
        crate::config::parse_config(crate::config::stock_config_yaml()).unwrap()
    }

    #[test]
    fn referenced_assets_cover_icons_techs_and_logos() {
        let assets = referenced_assets(&stock());
        let paths: Vec<&str> = assets.iter().map(|a| a.path).collect();
        assert!(paths.contains(&"icons/kubernetes.svg"));
        // technologies: React, Node.js, TypeScript, Golang
        assert!(paths.contains(&"icons/react.png"));
        assert!(paths.contains(&"icons/typescript.png"));
        assert!(paths.contains(&"logos/bbg.svg"));
        assert!(paths.contains(&AVATAR.path));
        assert!(!paths.contains(&GLYPH_SPRITE));
        let mut sorted = paths.clone();
        sorted.dedup();
        assert_eq!(sorted, paths);
    }

    #[test]
    fn stock_config_has_no_unresolved_names() {
        assert!(unresolved_names(&stock()).is_empty());
    }

    #[test]
    fn unresolved_names_reports_icons_and_logos() {
        let mut config = stock();
        config.hero.highlights[0].icon = "users".to_string();
        config.experience.positions[0].logo = "acme".to_string();
        assert_eq!(unresolved_names(&config), vec!["users", "logo:acme"]);
    }

    #[test]
    fn unresolved_names_reported_once() {
        let mut config = stock();
        config.hero.highlights[0].icon = "Rocket".to_string();
        config.hero.highlights[1].icon = "Foo".to_string();
        config.hero.highlights[2].icon = "Rocket".to_string();
        assert_eq!(unresolved_names(&config), vec!["Rocket", "Foo"]);
    }

    #[test]
    fn missing_assets_reports_absent_files() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("icons")).unwrap();
        std::fs::write(tmp.path().join("icons/react.png"), b"png").unwrap();

        let wanted = [REACT, GO, AVATAR];
        let missing = missing_assets(tmp.path(), &wanted);
        assert_eq!(missing, vec![GO, AVATAR]);
    }
}
