// src/report.rs
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::check::Issue;

pub struct FileReport {
    pub path: PathBuf,
    pub issues: Vec<Issue>,
}

impl FileReport {
    pub fn new(path: impl Into<PathBuf>, issues: Vec<Issue>) -> Self {
        Self { path: path.into(), issues }
    }
}

pub const CLEAN_MESSAGE: &str = "No issues found by lightweight checker.";

/// Group issues by file, skipping files that came back clean.
pub fn render(reports: &[FileReport]) -> String {
    let mut out = s!();
    for r in reports.iter().filter(|r| !r.issues.is_empty()) {
        let _ = writeln!(out, "== {} ({} issue(s)) ==", r.path.display(), r.issues.len());
        for issue in &r.issues {
            let _ = writeln!(out, " -  {}", issue);
        }
        out.push('\n');
    }
    if out.is_empty() {
        out.push_str(CLEAN_MESSAGE);
        out.push('\n');
    }
    out
}

pub fn total_issues(reports: &[FileReport]) -> usize {
    reports.iter().map(|r| r.issues.len()).sum()
}

/// Reporting only: 0 unless `strict` and something was found.
pub fn exit_code(reports: &[FileReport], strict: bool) -> i32 {
    if strict && total_issues(reports) > 0 { 1 } else { 0 }
}
