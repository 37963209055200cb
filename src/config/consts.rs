// src/config/consts.rs

// Tag balance
pub const VOID_TAGS: [&str; 15] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];
pub const UNCLOSED_TAIL: usize = 8; // entries shown in the EOF issue
pub const SINGLETON_TAGS: [&str; 3] = ["html", "head", "body"];

// Trace
pub const TRACE_CONTEXT: usize = 30; // chars either side of a mismatch

// Links
pub const REFS_SHOWN: usize = 3;

// Wayback
pub const DEFAULT_REPORT: &str = "BROKEN_EXTERNAL_LINKS.md";
pub const ARCHIVE_PREFIX: &str = "https://web.archive.org/web/*/";
pub const ARCHIVE_CLASS: &str = "archived-link";
pub const ARCHIVE_MARKER: &str = "archived";

// Site
pub const DEFAULT_SITE_ROOT: &str = ".";
pub const HTML_EXT: &str = "html";

// Logging
pub const LOG_FILE: &str = ".sitecheck/debug.log";
pub const LOG_ENV: &str = "SITECHECK_LOG";
