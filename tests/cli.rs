//! End-to-end tests for the `folio` binary against `fixtures/site`.
//!
//! Run with: `cargo test --test cli`

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixture_site() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/site")
}

fn folio(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_folio"));
    cmd.args(args).env_remove("SITE_URL");
    cmd
}

fn run(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("failed to run folio");
    assert!(
        out.status.success(),
        "folio failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn build_renders_fixture_site() {
    let dist = TempDir::new().unwrap();
    let out = run(&mut folio(&[
        "build",
        "--source",
        fixture_site().to_str().unwrap(),
        "--output",
        dist.path().to_str().unwrap(),
    ]));

    for page in [
        "index.html",
        "projects/index.html",
        "articles/index.html",
        "articles/hello-world/index.html",
        "articles/platform-teams/index.html",
        "articles/notes-on-oncall/index.html",
        "about/index.html",
        "header.js",
        "assets/glyphs.svg",
    ] {
        assert!(dist.path().join(page).is_file(), "missing {page}");
    }
    assert!(!dist.path().join("feed.xml").exists());

    let text = stdout(&out);
    assert!(text.contains("==> Build complete"));
    assert!(text.contains("Platform Teams \u{2192} articles/platform-teams/index.html"));
}

#[test]
fn build_reads_site_url_from_environment() {
    let dist = TempDir::new().unwrap();
    run(folio(&[
        "build",
        "--source",
        fixture_site().to_str().unwrap(),
        "--output",
        dist.path().to_str().unwrap(),
    ])
    .env("SITE_URL", "https://casey.example.org"));

    let feed = std::fs::read_to_string(dist.path().join("feed.xml")).unwrap();
    assert!(feed.contains("<title>Platform Teams</title>"));
}

#[test]
fn check_lists_articles() {
    let out = run(&mut folio(&["check", "--source", fixture_site().to_str().unwrap()]));
    let text = stdout(&out);
    assert!(text.contains("001 Platform Teams"));
    assert!(text.contains("003 Notes on On-Call"));
    assert!(!text.contains("Unfinished"));
    assert!(text.contains("==> Content is valid"));
    assert!(out.stderr.is_empty());
}

#[test]
fn check_fails_without_config() {
    let empty = TempDir::new().unwrap();
    let out = folio(&["check", "--source", empty.path().to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("config.yaml"));
}

#[test]
fn gen_config_output_is_a_valid_config() {
    let out = run(&mut folio(&["gen-config"]));
    let config = folio::config::parse_config(&stdout(&out)).unwrap();
    assert_eq!(config.personal.name, "Jordan Rivera");
}

#[test]
fn show_config_prints_json() {
    let out = run(&mut folio(&["show-config", "--source", fixture_site().to_str().unwrap()]));
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["personal"]["name"], "Casey Morgan");
    assert_eq!(json["sections"]["latest_articles"]["max_count"], 2);
    assert_eq!(json["experience"]["positions"][0]["type"], "Full-time");
}

#[test]
fn resume_fills_template() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("out/resume.tex");
    run(&mut folio(&[
        "resume",
        "--source",
        fixture_site().to_str().unwrap(),
        "--out",
        target.to_str().unwrap(),
    ]));

    let tex = std::fs::read_to_string(&target).unwrap();
    assert!(!tex.contains("{{"));
    assert!(tex.contains("Casey Morgan"));
    assert!(tex.contains("\\jobtitle{Senior Platform Engineer}{June 2019 - Present}"));
}
