// src/config/options.rs
use std::collections::BTreeSet;
use std::path::{ Path, PathBuf };
use super::consts::*;

/// Set of element names that never take a closing tag.
/// Names are stored lowercased.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoidTags(BTreeSet<String>);

impl Default for VoidTags {
    fn default() -> Self {
        Self(VOID_TAGS.iter().map(|t| s!(*t)).collect())
    }
}

impl VoidTags {
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(&name.to_ascii_lowercase())
    }

    pub fn insert(&mut self, name: &str) {
        self.0.insert(name.to_ascii_lowercase());
    }

    pub fn remove(&mut self, name: &str) {
        self.0.remove(&name.to_ascii_lowercase());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOptions {
    pub void_tags: VoidTags,
    pub unclosed_tail: usize,
    pub stop_at_first_mismatch: bool, // trace mode: give up after the first mismatch
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            void_tags: VoidTags::default(),
            unclosed_tail: UNCLOSED_TAIL,
            stop_at_first_mismatch: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkOptions {
    pub site_root: PathBuf,
    pub refs_shown: usize,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from(DEFAULT_SITE_ROOT),
            refs_shown: REFS_SHOWN,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaybackOptions {
    pub site_root: PathBuf,
    report: Option<PathBuf>,
    pub dry_run: bool,
}

impl Default for WaybackOptions {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from(DEFAULT_SITE_ROOT),
            report: None,
            dry_run: false,
        }
    }
}

impl WaybackOptions {
    /// Report path; falls back to `<root>/BROKEN_EXTERNAL_LINKS.md` unless set.
    pub fn report_path(&self) -> PathBuf {
        match &self.report {
            Some(p) => p.clone(),
            None => self.site_root.join(DEFAULT_REPORT),
        }
    }

    pub fn set_report(&mut self, p: &Path) {
        self.report = Some(p.to_path_buf());
    }
}
