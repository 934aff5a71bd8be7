use clap::{Parser, Subcommand};
use folio::config::{self, ConfigCache};
use folio::{feed, generate, output, resume};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("FOLIO_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("FOLIO_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Static site generator for an engineer's portfolio")]
#[command(long_about = "\
Static site generator for an engineer's portfolio

One YAML file describes you; a directory of markdown files holds your
articles. folio turns both into a plain HTML site.

Content structure:

  content/
  ├── config.yaml                  # Profile, contact, skills, experience, projects (required)
  ├── about.md                     # About page (optional)
  ├── resume-template.tex          # LaTeX template for 'folio resume' (optional)
  ├── articles/
  │   ├── hello-world.md           # Front matter: title, description, date, author
  │   └── platform-teams/
  │       ├── index.md             # Bundle: slug is the directory name
  │       └── diagram.svg          # Copied next to the article page
  └── assets/                      # Copied to dist/assets/
      ├── profile.jpeg             # Avatar and portrait
      ├── icons/                   # Technology icons
      └── logos/                   # Company logos

Icons are referenced by name in config.yaml. Unknown names render a
fallback glyph; 'folio check' lists them.

Run 'folio gen-config' to generate a documented config.yaml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the site into the output directory
    Build {
        /// Public base URL; enables feed.xml
        #[arg(long, env = "SITE_URL")]
        site_url: Option<String>,
    },
    /// Validate content directory without building
    Check,
    /// Print a stock config.yaml with all options documented
    GenConfig,
    /// Print the resolved configuration as JSON
    ShowConfig,
    /// Fill the LaTeX resume template from config.yaml
    Resume {
        /// Template path [default: <source>/resume-template.tex]
        #[arg(long)]
        template: Option<PathBuf>,
        /// Output path [default: generated-resume.tex]
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    // One cache per process; every command below reads through it.
    let cache = ConfigCache::for_content_root(&cli.source);

    match cli.command {
        Command::Build { site_url } => {
            println!("==> Generating HTML → {}", cli.output.display());
            let options = generate::BuildOptions { site_url };
            let summary = generate::generate(&cache, &cli.source, &cli.output, &options)?;
            output::print_build_output(&summary);
            output::print_warnings(&summary.unresolved_icons, &summary.missing_assets);
            if !summary.feed {
                println!("No site URL set ({}); skipped {}", feed::SITE_URL_ENV, feed::FEED_PATH);
            }

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let report = generate::check_site(&cache, &cli.source)?;
            output::print_check_output(&report);
            output::print_warnings(&report.unresolved_icons, &report.missing_assets);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_yaml());
        }
        Command::ShowConfig => {
            let config = cache.get()?;
            println!("{}", serde_json::to_string_pretty(config.as_ref())?);
        }
        Command::Resume { template, out } => {
            let template = template.unwrap_or_else(|| cli.source.join(resume::TEMPLATE_FILE));
            let out = out.unwrap_or_else(|| PathBuf::from(resume::OUTPUT_FILE));
            println!("==> Rendering {}", template.display());
            let config = cache.get()?;
            resume::write_resume(&template, &out, &config)?;
            println!("==> Resume written: {}", out.display());
        }
    }

    Ok(())
}
