// src/trace.rs
// Observers for the tag-balance walk. The checker calls these hooks as it folds each
// token into the open-tag stack; the default for every hook is to do nothing.

use std::io::{self, Write};
use std::ops::Range;

use crate::config::consts::TRACE_CONTEXT;
use crate::core::TagToken;

/// `index` is the 1-based position of the token in the scan.
pub trait Trace {
    fn skip(&mut self, _index: usize, _tok: &TagToken) {}
    fn void(&mut self, _index: usize, _tok: &TagToken) {}
    fn open(&mut self, _index: usize, _tok: &TagToken, _depth: usize) {}
    fn close(&mut self, _index: usize, _tok: &TagToken, _top: Option<&str>) {}
    fn unexpected(&mut self, _tok: &TagToken) {}
    fn mismatch(&mut self, _tok: &TagToken, _expected: &str, _stack: &[String]) {}
    fn finish(&mut self, _stack: &[String]) {}
}

/// A no-op trace you can pass when you don't care.
pub struct NullTrace;
impl Trace for NullTrace {}

/// Up to `width` chars either side of `span`, newlines flattened to spaces.
pub fn context_snippet(text: &str, span: Range<usize>, width: usize) -> String {
    let from = text[..span.start]
        .char_indices()
        .rev()
        .take(width)
        .last()
        .map_or(span.start, |(i, _)| i);
    let to = text[span.end..]
        .char_indices()
        .nth(width)
        .map_or(text.len(), |(i, _)| span.end + i);
    text[from..to].replace(['\r', '\n'], " ")
}

/// Verbose token-by-token trace, one line per token.
pub struct TraceWriter<'a, W: Write> {
    text: &'a str,
    out: W,
    context: usize,
    error: Option<io::Error>,
}

impl<'a, W: Write> TraceWriter<'a, W> {
    pub fn new(text: &'a str, out: W) -> Self {
        Self { text, out, context: TRACE_CONTEXT, error: None }
    }

    /// Hand back the writer, or the first write error hit while tracing.
    pub fn into_inner(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn line(&mut self, line: std::fmt::Arguments) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_fmt(line).and_then(|_| self.out.write_all(b"\n")) {
            self.error = Some(e);
        }
    }
}

impl<W: Write> Trace for TraceWriter<'_, W> {
    fn skip(&mut self, index: usize, tok: &TagToken) {
        self.line(format_args!("{} SKIP {} ({}, {})", index, tok.name, tok.start, tok.end));
    }

    fn void(&mut self, index: usize, tok: &TagToken) {
        self.line(format_args!("{} VOID {} ({}, {})", index, tok.name, tok.start, tok.end));
    }

    fn open(&mut self, index: usize, tok: &TagToken, depth: usize) {
        self.line(format_args!(
            "{} OPEN {} ({}, {}) stack-size={}",
            index, tok.name, tok.start, tok.end, depth
        ));
    }

    fn close(&mut self, index: usize, tok: &TagToken, top: Option<&str>) {
        let top = match top {
            Some(t) => format!("Some({t})"),
            None => s!("None"),
        };
        self.line(format_args!(
            "{} CLOSE {} ({}, {}) top-of-stack-before={}",
            index, tok.name, tok.start, tok.end, top
        ));
    }

    fn unexpected(&mut self, tok: &TagToken) {
        self.line(format_args!("  Unexpected closing {} at {}", tok.name, tok.start));
    }

    fn mismatch(&mut self, tok: &TagToken, expected: &str, stack: &[String]) {
        let snippet = context_snippet(self.text, tok.span.clone(), self.context);
        self.line(format_args!("  MISMATCH: closing {} expected {}", tok.name, expected));
        self.line(format_args!("  context: {}", snippet));
        self.line(format_args!("  stack snapshot (bottom->top): {:?}", stack));
    }

    fn finish(&mut self, stack: &[String]) {
        let tail = &stack[stack.len().saturating_sub(20)..];
        self.line(format_args!("Done. Remaining stack (top last): {:?}", tail));
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    Skip(String),
    Void(String),
    Open { name: String, depth: usize },
    Close { name: String, top: Option<String> },
    Unexpected { name: String, pos: usize },
    Mismatch { name: String, expected: String },
    Finish(Vec<String>),
}

/// Collects events in order; mostly for tests.
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<TraceEvent>,
}

impl Trace for Recorder {
    fn skip(&mut self, _index: usize, tok: &TagToken) {
        self.events.push(TraceEvent::Skip(tok.name.clone()));
    }
    fn void(&mut self, _index: usize, tok: &TagToken) {
        self.events.push(TraceEvent::Void(tok.name.clone()));
    }
    fn open(&mut self, _index: usize, tok: &TagToken, depth: usize) {
        self.events.push(TraceEvent::Open { name: tok.name.clone(), depth });
    }
    fn close(&mut self, _index: usize, tok: &TagToken, top: Option<&str>) {
        self.events.push(TraceEvent::Close { name: tok.name.clone(), top: top.map(String::from) });
    }
    fn unexpected(&mut self, tok: &TagToken) {
        self.events.push(TraceEvent::Unexpected { name: tok.name.clone(), pos: tok.start });
    }
    fn mismatch(&mut self, tok: &TagToken, expected: &str, _stack: &[String]) {
        self.events.push(TraceEvent::Mismatch { name: tok.name.clone(), expected: s!(expected) });
    }
    fn finish(&mut self, stack: &[String]) {
        self.events.push(TraceEvent::Finish(stack.to_vec()));
    }
}
