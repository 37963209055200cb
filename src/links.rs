// src/links.rs
// Link-reference checker, local half: pull href/src values out of each page, verify
// local targets exist under the site root, and inventory external URLs. Reachability
// of external URLs is not checked here.

use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::options::LinkOptions;
use crate::core::html::find_ci;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefKind {
    Fragment,
    Mailto,
    External,
    Local,
}

pub fn classify(reference: &str) -> RefKind {
    if reference.starts_with('#') {
        RefKind::Fragment
    } else if reference.starts_with("mailto:") {
        RefKind::Mailto
    } else if reference.starts_with("http://") || reference.starts_with("https://") {
        RefKind::External
    } else {
        RefKind::Local
    }
}

/// Values of `href="..."` / `src='...'` in document order.
/// A value ends at the first quote of either kind.
pub fn extract_refs(text: &str) -> Vec<&str> {
    let b = text.as_bytes();
    let mut refs = Vec::new();
    let mut pos = 0;
    let mut next_href = find_ci(text, "href=", 0);
    let mut next_src = find_ci(text, "src=", 0);

    loop {
        if next_href.is_some_and(|i| i < pos) {
            next_href = find_ci(text, "href=", pos);
        }
        if next_src.is_some_and(|i| i < pos) {
            next_src = find_ci(text, "src=", pos);
        }
        let Some(at) = next_href.into_iter().chain(next_src).min() else { break };
        let attr_len = if b[at].eq_ignore_ascii_case(&b'h') { 5 } else { 4 };
        let q = at + attr_len;
        pos = at + 1;

        if !matches!(b.get(q), Some(b'"' | b'\'')) {
            continue;
        }
        // the value can't span lines
        let Some(rel) = text[q + 1..].find(['"', '\'', '\n']) else { break };
        let end = q + 1 + rel;
        if b[end] == b'\n' {
            continue;
        }
        refs.push(&text[q + 1..end]);
        pos = end + 1;
    }
    refs
}

/// Filesystem target for a local reference: query and fragment dropped, leading '/'
/// stripped so absolute-looking paths resolve under the site root.
/// A protocol-relative `//host/path` keeps only its path.
pub fn local_target(site_root: &Path, reference: &str) -> PathBuf {
    let mut path = reference.split(['?', '#']).next().unwrap_or_default();
    if let Some(rest) = path.strip_prefix("//") {
        path = rest.find('/').map_or("", |i| &rest[i..]);
    }
    site_root.join(path.trim_start_matches('/'))
}

#[derive(Debug, Default)]
pub struct LinkReport {
    pub missing: BTreeSet<(String, String)>,          // (reference, file)
    pub external: BTreeMap<String, Vec<String>>,      // url -> files, in scan order
}

impl LinkReport {
    /// Fold one document into the report. `file` is how the page is named in output.
    pub fn add_document(&mut self, site_root: &Path, file: &str, text: &str) {
        for r in extract_refs(text) {
            match classify(r) {
                RefKind::Fragment | RefKind::Mailto => {}
                RefKind::External => {
                    self.external.entry(s!(r)).or_default().push(s!(file));
                }
                RefKind::Local => {
                    if !local_target(site_root, r).exists() {
                        logd!("Links: missing '{}' in {}", r, file);
                        self.missing.insert((s!(r), s!(file)));
                    }
                }
            }
        }
    }

    pub fn render(&self, refs_shown: usize) -> String {
        let mut out = s!("Checking local asset references...\n");
        if self.missing.is_empty() {
            out.push_str("  All local assets referenced exist.\n");
        } else {
            for (r, file) in &self.missing {
                let _ = writeln!(out, "  MISSING: {} referenced in {}", r, file);
            }
        }

        out.push_str("\nExternal links (not fetched):\n");
        if self.external.is_empty() {
            out.push_str("  None.\n");
        }
        for (url, files) in &self.external {
            let shown = files.iter().take(refs_shown).cloned().collect::<Vec<_>>().join(", ");
            let more = if files.len() > refs_shown { ",..." } else { "" };
            let _ = writeln!(out, "  {}  (found in: {}{})", url, shown, more);
        }
        out
    }
}

/// Read every file and build the report. A file that can't be read fails the run.
pub fn scan_site(opts: &LinkOptions, files: &[PathBuf]) -> Result<LinkReport, Box<dyn Error>> {
    let mut report = LinkReport::default();
    for f in files {
        let text = fs::read_to_string(f)
            .map_err(|e| format!("Failed to read {}: {}", f.display(), e))?;
        let name = f
            .strip_prefix(&opts.site_root)
            .unwrap_or(f)
            .to_string_lossy()
            .into_owned();
        report.add_document(&opts.site_root, &name, &text);
    }
    logf!(
        "Links: {} files, {} missing local, {} external",
        files.len(),
        report.missing.len(),
        report.external.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_finds_both_attrs_and_quote_styles() {
        let html = r#"<a HREF="a.html">x</a><img src='i.png'><script src="/j.js?v=2"></script>"#;
        assert_eq!(extract_refs(html), vec!["a.html", "i.png", "/j.js?v=2"]);
    }

    #[test]
    fn extract_skips_unquoted_values() {
        assert_eq!(extract_refs("<a href=x.html><a href=\"y.html\">"), vec!["y.html"]);
    }

    #[test]
    fn extract_stops_at_first_quote_of_either_kind() {
        assert_eq!(extract_refs(r#"<a href="it's.html">"#), vec!["it"]);
    }

    #[test]
    fn extract_skips_values_broken_across_lines() {
        assert_eq!(extract_refs("<a href=\"x\n.html\"><img src=\"y.png\">"), vec!["y.png"]);
    }

    #[test]
    fn classify_variants() {
        assert_eq!(classify("#top"), RefKind::Fragment);
        assert_eq!(classify("mailto:a@b.c"), RefKind::Mailto);
        assert_eq!(classify("https://x.org"), RefKind::External);
        assert_eq!(classify("http://x.org"), RefKind::External);
        assert_eq!(classify("css/site.css"), RefKind::Local);
        assert_eq!(classify("//cdn.example/x.js"), RefKind::Local);
    }

    #[test]
    fn local_target_drops_query_fragment_and_root_slash() {
        let root = Path::new("site");
        assert_eq!(local_target(root, "/css/a.css?v=1"), root.join("css/a.css"));
        assert_eq!(local_target(root, "about.html#team"), root.join("about.html"));
    }

    #[test]
    fn protocol_relative_reference_drops_host() {
        let root = Path::new("site");
        assert_eq!(local_target(root, "//cdn.example/x.js"), root.join("x.js"));
        assert_eq!(local_target(root, "//cdn.example/js/x.js?v=2"), root.join("js/x.js"));
        assert_eq!(local_target(root, "//cdn.example"), root.to_path_buf());
    }
}
