// src/check.rs
// Lightweight structural checker: tag balance over a flat token scan, plus two
// document-level checks (footer nested in nav, html/head/body counts).
//
// An empty result means "nothing this checker can see", not HTML5 conformance.
// There is no resynchronization on a mismatch: the top is popped anyway, so one stray
// close tag can cascade into further mismatches for the rest of the document.

use std::fmt;

use crate::config::consts::SINGLETON_TAGS;
use crate::config::options::CheckOptions;
use crate::core::html::{count_ci, find_close_tag_ci, find_open_tag_ci};
use crate::core::{tokenize, TokenKind};
use crate::trace::{NullTrace, Trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueKind {
    UnexpectedClose,
    MismatchedClose,
    Unclosed,
    FooterInNav,
    ElementCount,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Issue {
    pub kind: IssueKind,
    pub message: String,
    pub position: Option<usize>, // char offset into the document
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Issues plus whatever was still open when the scan ended.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub issues: Vec<Issue>,
    pub remaining: Vec<String>, // bottom -> top
}

impl Outcome {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

pub fn validate(text: &str, opts: &CheckOptions) -> Vec<Issue> {
    validate_with(text, opts, &mut NullTrace).issues
}

pub fn validate_with(text: &str, opts: &CheckOptions, trace: &mut dyn Trace) -> Outcome {
    let mut out = balance(text, opts, trace);
    out.issues.extend(footer_in_nav(text));
    out.issues.extend(singleton_counts(text));
    out
}

/// Steps the open-tag stack across every token.
pub fn balance(text: &str, opts: &CheckOptions, trace: &mut dyn Trace) -> Outcome {
    let mut stack: Vec<String> = Vec::new();
    let mut issues = Vec::new();
    let mut stopped = false;

    for (i, tok) in tokenize(text).enumerate() {
        let index = i + 1;

        if tok.kind != TokenKind::Element {
            trace.skip(index, &tok);
            continue;
        }

        // void and self-closed tokens never move the stack, closing form included
        if opts.void_tags.contains(&tok.name) || tok.slash_closed() {
            trace.void(index, &tok);
            continue;
        }

        if tok.closing {
            trace.close(index, &tok, stack.last().map(String::as_str));
            match stack.pop() {
                None => {
                    trace.unexpected(&tok);
                    issues.push(issue!(
                        UnexpectedClose,
                        Some(tok.start),
                        "Unexpected closing tag </{}> at pos {}",
                        tok.name, tok.start
                    ));
                }
                Some(top) if top != tok.name => {
                    trace.mismatch(&tok, &top, &stack);
                    issues.push(issue!(
                        MismatchedClose,
                        Some(tok.start),
                        "Mismatched closing tag </{}> at pos {} (expected </{}>)",
                        tok.name, tok.start, top
                    ));
                    if opts.stop_at_first_mismatch {
                        stopped = true;
                        break;
                    }
                }
                Some(_) => {}
            }
            continue;
        }

        stack.push(tok.name.clone());
        trace.open(index, &tok, stack.len());
    }

    if !stopped {
        trace.finish(&stack);
    }

    if !stopped && !stack.is_empty() {
        let tail = &stack[stack.len().saturating_sub(opts.unclosed_tail)..];
        issues.push(issue!(Unclosed, None, "Unclosed tags at EOF: {}", tail.join(", ")));
    }

    Outcome { issues, remaining: stack }
}

/// One issue per `<nav>` whose span (up to the first `</nav>` after it) holds a `<footer>`.
/// The close is found by forward search, not nesting.
pub fn footer_in_nav(text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut from = 0;

    while let Some(nav) = find_open_tag_ci(text, "nav", from) {
        from = nav + 1;
        let Some((_, nav_end)) = find_close_tag_ci(text, "nav", nav) else {
            continue;
        };
        if find_open_tag_ci(&text[..nav_end], "footer", nav).is_some() {
            let pos = text[..nav].chars().count();
            issues.push(issue!(
                FooterInNav,
                Some(pos),
                "<footer> found inside <nav>: footer should be positioned after navigation, not nested inside it"
            ));
        }
    }
    issues
}

/// `<html`, `<head`, `<body` must each appear exactly once (plain substring count).
pub fn singleton_counts(text: &str) -> Vec<Issue> {
    SINGLETON_TAGS
        .iter()
        .filter_map(|tag| {
            let n = count_ci(text, &format!("<{tag}"));
            (n != 1).then(|| issue!(ElementCount, None, "Found {} <{}> tags", n, tag))
        })
        .collect()
}
