// src/runner.rs
use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{
    check,
    cli::{CheckArgs, Command, TraceArgs},
    config::options::{CheckOptions, LinkOptions, WaybackOptions},
    file::{html_files, read_document, resolve_inputs},
    links,
    report::{self, FileReport},
    trace::TraceWriter,
    wayback,
};

/// Top-level runner: dispatch on command, write human output to `out`,
/// return the process exit code.
pub fn run(cmd: &Command, out: &mut dyn Write) -> Result<i32, Box<dyn Error>> {
    match cmd {
        Command::Help => {
            writeln!(out, "{}", include_str!("cli_help.txt"))?;
            Ok(0)
        }
        Command::Check(args) => run_check(args, out),
        Command::Trace(args) => run_trace(args, out),
        Command::Links(opts) => run_links(opts, out),
        Command::Wayback(opts) => run_wayback(opts, out),
    }
}

/* ---------------- check ---------------- */

/// Validate each file. Any unreadable file aborts before its report is built.
pub fn check_files(files: &[PathBuf], opts: &CheckOptions) -> Result<Vec<FileReport>, Box<dyn Error>> {
    let mut reports = Vec::with_capacity(files.len());
    for f in files {
        let text = read_document(f)?;
        let issues = check::validate(&text, opts);
        logf!("Check: {} -> {} issue(s)", f.display(), issues.len());
        reports.push(FileReport::new(f, issues));
    }
    Ok(reports)
}

fn run_check(args: &CheckArgs, out: &mut dyn Write) -> Result<i32, Box<dyn Error>> {
    let files = resolve_inputs(&args.root, &args.files, false)?;
    if files.is_empty() {
        writeln!(out, "No HTML files found in {}.", args.root.display())?;
        return Ok(0);
    }
    let reports = check_files(&files, &args.options)?;
    let shown: Vec<FileReport> = reports
        .into_iter()
        .map(|r| FileReport::new(display_path(&args.root, &r.path), r.issues))
        .collect();
    write!(out, "{}", report::render(&shown))?;
    Ok(report::exit_code(&shown, args.strict))
}

fn display_path(root: &Path, p: &Path) -> PathBuf {
    p.strip_prefix(root).unwrap_or(p).to_path_buf()
}

/* ---------------- trace ---------------- */

fn run_trace(args: &TraceArgs, out: &mut dyn Write) -> Result<i32, Box<dyn Error>> {
    let text = read_document(&args.file)?;
    writeln!(out, "Parsing {}", args.file.display())?;

    let mut tracer = TraceWriter::new(&text, &mut *out);
    let outcome = check::validate_with(&text, &args.options, &mut tracer);
    tracer.into_inner()?;

    for issue in &outcome.issues {
        writeln!(out, " -  {}", issue)?;
    }
    Ok(0)
}

/* ---------------- links ---------------- */

fn run_links(opts: &LinkOptions, out: &mut dyn Write) -> Result<i32, Box<dyn Error>> {
    let files = html_files(&opts.site_root, false)?;
    if files.is_empty() {
        writeln!(out, "No HTML files found in site root.")?;
        return Ok(0);
    }
    let report = links::scan_site(opts, &files)?;
    write!(out, "{}", report.render(opts.refs_shown))?;
    writeln!(out, "\nDone.")?;
    Ok(0)
}

/* ---------------- wayback ---------------- */

fn run_wayback(opts: &WaybackOptions, out: &mut dyn Write) -> Result<i32, Box<dyn Error>> {
    let files = html_files(&opts.site_root, true)?;
    let outcome = wayback::run(opts, &files)?;
    writeln!(out, "{}", outcome.describe(&opts.site_root))?;
    Ok(0)
}
