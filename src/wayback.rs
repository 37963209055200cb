// src/wayback.rs
// Append a Wayback Machine fallback link after every anchor that points at a URL listed
// in the broken-links report. Running it again over its own output changes nothing.

use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::consts::{ARCHIVE_CLASS, ARCHIVE_MARKER, ARCHIVE_PREFIX};
use crate::config::options::WaybackOptions;
use crate::core::html::{find_ci, to_lower};

/// Every `- http(s)://...` entry in the report, first occurrence wins.
pub fn parse_report(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for (at, _) in text.match_indices("- http") {
        let rest = &text[at + 2..];
        if !(rest.starts_with("http://") || rest.starts_with("https://")) {
            continue;
        }
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let url = &rest[..end];
        if seen.insert(url) {
            urls.push(s!(url));
        }
    }
    urls
}

pub fn archive_link(url: &str) -> String {
    format!("{ARCHIVE_PREFIX}{url}")
}

fn archived_anchor(url: &str) -> String {
    format!(
        r#"<a class="{}" href="{}" target="_blank" rel="noopener noreferrer">(archived)</a>"#,
        ARCHIVE_CLASS,
        archive_link(url)
    )
}

/// `tag` is the text after `<a` up to (not including) `>`.
/// Needs at least one char before `href=`, and the URL compares case-insensitively.
fn tag_has_href(tag: &str, url: &str) -> bool {
    let b = tag.as_bytes();
    let mut from = 1;
    while let Some(h) = find_ci(tag, "href=", from) {
        let q = h + "href=".len();
        let u_end = q + 1 + url.len();
        if matches!(b.get(q), Some(b'"' | b'\''))
            && tag.get(q + 1..u_end).is_some_and(|u| u.eq_ignore_ascii_case(url))
            && matches!(b.get(u_end), Some(b'"' | b'\''))
        {
            return true;
        }
        from = h + 1;
    }
    false
}

/// The anchor itself mentions "archived", or the next tag after it is an archived link.
fn already_archived(anchor: &str, after: &str) -> bool {
    if to_lower(anchor).contains(ARCHIVE_MARKER) {
        return true;
    }
    let next = after.trim_start();
    if !next.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("<a")) {
        return false;
    }
    let tag_end = next.find('>').unwrap_or(next.len());
    to_lower(&next[..tag_end]).contains(ARCHIVE_MARKER)
}

fn insert_for_url(content: &str, url: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut copied = 0;
    let mut i = 0;

    while let Some(a) = find_ci(content, "<a", i) {
        i = a + 1;
        let Some(gt) = content[a..].find('>').map(|r| a + r) else { break };
        if !tag_has_href(&content[a + 2..gt], url) {
            continue;
        }
        let Some(close) = find_ci(content, "</a>", gt + 1) else { break };
        let end = close + "</a>".len();

        out.push_str(&content[copied..end]);
        copied = end;
        i = end;

        if already_archived(&content[a..end], &content[end..]) {
            continue;
        }
        logd!("Wayback: fallback for {}", url);
        out.push(' ');
        out.push_str(&archived_anchor(url));
    }
    out.push_str(&content[copied..]);
    out
}

/// Pure transform over one document.
pub fn insert_fallbacks(content: &str, urls: &[String]) -> String {
    urls.iter()
        .fold(s!(content), |acc, url| insert_for_url(&acc, url))
}

/// Rewrite changed files (unless `dry_run`) and return their paths.
pub fn apply(files: &[PathBuf], urls: &[String], dry_run: bool) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut changed = Vec::new();
    for f in files {
        let orig = fs::read_to_string(f)
            .map_err(|e| format!("Failed to read {}: {}", f.display(), e))?;
        let updated = insert_fallbacks(&orig, urls);
        if updated == orig {
            continue;
        }
        if !dry_run {
            fs::write(f, updated)?;
        }
        logf!("Wayback: updated {}", f.display());
        changed.push(f.clone());
    }
    Ok(changed)
}

#[derive(Debug, PartialEq, Eq)]
pub enum WaybackOutcome {
    NoReport(PathBuf),
    NoUrls,
    Updated(Vec<PathBuf>),
}

impl WaybackOutcome {
    /// Human summary; `root` shortens the listed paths.
    pub fn describe(&self, root: &Path) -> String {
        match self {
            Self::NoReport(p) => format!("{} not found", p.display()),
            Self::NoUrls => s!("No URLs found in report"),
            Self::Updated(v) if v.is_empty() => s!("No HTML files required updates."),
            Self::Updated(v) => {
                let mut out = s!("Updated files:");
                for p in v {
                    out.push_str(&format!("\n- {}", p.strip_prefix(root).unwrap_or(p).display()));
                }
                out
            }
        }
    }
}

/// A missing report or an empty one is not an error, just nothing to do.
pub fn run(opts: &WaybackOptions, files: &[PathBuf]) -> Result<WaybackOutcome, Box<dyn Error>> {
    let report = opts.report_path();
    if !report.exists() {
        logf!("Wayback: no report at {}", report.display());
        return Ok(WaybackOutcome::NoReport(report));
    }
    let urls = parse_report(&fs::read_to_string(&report)?);
    if urls.is_empty() {
        return Ok(WaybackOutcome::NoUrls);
    }
    logf!("Wayback: {} broken urls, {} files", urls.len(), files.len());
    Ok(WaybackOutcome::Updated(apply(files, &urls, opts.dry_run)?))
}
