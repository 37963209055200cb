// tests/wayback_files.rs
//
// Fallback insertion over strings and over files on disk.
//
use std::fs;
use std::path::PathBuf;

use sitecheck::config::options::WaybackOptions;
use sitecheck::wayback::{self, insert_fallbacks, WaybackOutcome};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("sitecheck_wayback_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

const ARCHIVED: &str = r#" <a class="archived-link" href="https://web.archive.org/web/*/https://gone.example/page" target="_blank" rel="noopener noreferrer">(archived)</a>"#;

#[test]
fn appends_archive_anchor_after_matching_link() {
    let urls = vec!["https://gone.example/page".to_string()];
    let html = r#"<p>See <a class="ext" href="https://gone.example/page">the page</a>.</p>"#;
    let out = insert_fallbacks(html, &urls);
    let expected = format!(
        r#"<p>See <a class="ext" href="https://gone.example/page">the page</a>{ARCHIVED}.</p>"#
    );
    assert_eq!(out, expected);
}

#[test]
fn second_pass_changes_nothing() {
    let urls = vec!["https://gone.example/page".to_string()];
    let html = "<a href='https://gone.example/page'>x</a>\n<a href=\"https://gone.example/page\">y</a>";
    let once = insert_fallbacks(html, &urls);
    assert_eq!(once.matches("archived-link").count(), 2);
    assert_eq!(insert_fallbacks(&once, &urls), once);
}

#[test]
fn other_links_left_alone() {
    let urls = vec!["https://gone.example/page".to_string()];
    let html = r#"<a href="https://gone.example/page/2">x</a><a href="https://ok.example">y</a>"#;
    assert_eq!(insert_fallbacks(html, &urls), html);
}

#[test]
fn anchor_mentioning_archived_is_skipped() {
    let urls = vec!["https://gone.example/page".to_string()];
    let html = r#"<a href="https://gone.example/page">Archived page</a>"#;
    assert_eq!(insert_fallbacks(html, &urls), html);
}

#[test]
fn run_reports_missing_report_without_error() {
    let dir = tmp_dir("no_report");
    let mut opts = WaybackOptions::default();
    opts.site_root = dir.clone();
    let out = wayback::run(&opts, &[]).unwrap();
    assert_eq!(out, WaybackOutcome::NoReport(dir.join("BROKEN_EXTERNAL_LINKS.md")));
    assert!(out.describe(&dir).ends_with("not found"));
}

#[test]
fn run_rewrites_only_changed_files() {
    let dir = tmp_dir("rewrite");
    fs::write(dir.join("BROKEN_EXTERNAL_LINKS.md"), "# Broken\n- https://gone.example/page\n").unwrap();
    let hit = dir.join("a.html");
    let miss = dir.join("b.html");
    fs::write(&hit, r#"<a href="https://gone.example/page">x</a>"#).unwrap();
    fs::write(&miss, "<p>nothing here</p>").unwrap();

    let mut opts = WaybackOptions::default();
    opts.site_root = dir.clone();
    let files = vec![hit.clone(), miss.clone()];

    let out = wayback::run(&opts, &files).unwrap();
    assert_eq!(out, WaybackOutcome::Updated(vec![hit.clone()]));
    assert!(fs::read_to_string(&hit).unwrap().contains("archived-link"));
    assert_eq!(fs::read_to_string(&miss).unwrap(), "<p>nothing here</p>");

    // already archived: nothing left to do
    let again = wayback::run(&opts, &files).unwrap();
    assert_eq!(again.describe(&dir), "No HTML files required updates.");
}

#[test]
fn dry_run_leaves_files_untouched() {
    let dir = tmp_dir("dry");
    let report = dir.join("custom.md");
    fs::write(&report, "- https://gone.example/page").unwrap();
    let page = dir.join("index.html");
    let html = r#"<a href="https://gone.example/page">x</a>"#;
    fs::write(&page, html).unwrap();

    let mut opts = WaybackOptions::default();
    opts.site_root = dir.clone();
    opts.set_report(&report);
    opts.dry_run = true;

    let out = wayback::run(&opts, &[page.clone()]).unwrap();
    assert_eq!(out, WaybackOutcome::Updated(vec![page.clone()]));
    assert_eq!(fs::read_to_string(&page).unwrap(), html);
}
