// src/cli.rs
use std::{env, error::Error, io, path::PathBuf};

use crate::config::consts::DEFAULT_SITE_ROOT;
use crate::config::options::{CheckOptions, LinkOptions, WaybackOptions};

#[derive(Debug, PartialEq, Eq)]
pub struct CheckArgs {
    pub root: PathBuf,
    pub files: Vec<PathBuf>,
    pub strict: bool,
    pub options: CheckOptions,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TraceArgs {
    pub file: PathBuf,
    pub options: CheckOptions,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Check(CheckArgs),
    Trace(TraceArgs),
    Links(LinkOptions),
    Wayback(WaybackOptions),
    Help,
}

/// A parsed command line: what to run, plus process-wide settings applied by `run`.
#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub log: Option<PathBuf>,
}

pub fn run() -> Result<i32, Box<dyn Error>> {
    let inv = parse_invocation(env::args().skip(1))?;
    if let Some(p) = &inv.log {
        crate::log::set_path(p);
    }
    let stdout = io::stdout();
    let mut out = stdout.lock();
    crate::runner::run(&inv.command, &mut out).inspect_err(|e| loge!("{}", e))
}

/// Parse everything after the program name, dropping global settings.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, Box<dyn Error>> {
    Ok(parse_invocation(args)?.command)
}

/// Parse everything after the program name. Touches no global state.
pub fn parse_invocation<I: IntoIterator<Item = String>>(args: I) -> Result<Invocation, Box<dyn Error>> {
    let mut args = args.into_iter();

    let mut sub: Option<String> = None;
    let mut root = PathBuf::from(DEFAULT_SITE_ROOT);
    let mut files: Vec<PathBuf> = Vec::new();
    let mut strict = false;
    let mut all = false;
    let mut dry_run = false;
    let mut report: Option<PathBuf> = None;
    let mut extra_void: Vec<String> = Vec::new();
    let mut log: Option<PathBuf> = None;

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-h" | "--help" => return Ok(Invocation { command: Command::Help, log }),
            "--root" => root = PathBuf::from(args.next().ok_or("Missing value for --root")?),
            "--report" => report = Some(PathBuf::from(args.next().ok_or("Missing value for --report")?)),
            "--log" => log = Some(PathBuf::from(args.next().ok_or("Missing value for --log")?)),
            "--void" => {
                let v = args.next().ok_or("Missing value for --void")?;
                extra_void.extend(v.split(',').map(str::trim).filter(|t| !t.is_empty()).map(String::from)); }
            "--strict" => strict = true,
            "--all" => all = true,
            "--dry-run" => dry_run = true,
            flag if flag.starts_with('-') => return Err(format!("Unknown arg: {}", flag).into()),
            word if sub.is_none() => sub = Some(word.to_ascii_lowercase()),
            path => files.push(PathBuf::from(path)),
        }
    }

    let mut options = CheckOptions::default();
    for t in &extra_void {
        options.void_tags.insert(t);
    }

    let command = match sub.as_deref() {
        None => Command::Help,
        Some("check") => Command::Check(CheckArgs { root, files, strict, options }),
        Some("trace") => {
            let mut files = files.into_iter();
            let file = files.next().ok_or("trace needs a FILE")?;
            if files.next().is_some() {
                return Err("trace takes a single FILE".into());
            }
            options.stop_at_first_mismatch = !all;
            Command::Trace(TraceArgs { file, options })
        }
        Some("links") => {
            no_files("links", &files)?;
            Command::Links(LinkOptions { site_root: root, ..LinkOptions::default() })
        }
        Some("wayback") => {
            no_files("wayback", &files)?;
            let mut w = WaybackOptions::default();
            w.site_root = root;
            w.dry_run = dry_run;
            if let Some(p) = report {
                w.set_report(&p);
            }
            Command::Wayback(w)
        }
        Some(other) => return Err(format!("Unknown command: {}", other).into()),
    };
    Ok(Invocation { command, log })
}

fn no_files(cmd: &str, files: &[PathBuf]) -> Result<(), Box<dyn Error>> {
    match files.first() {
        Some(f) => Err(format!("{} takes no FILE arguments (got {}); use --root", cmd, f.display()).into()),
        None => Ok(()),
    }
}
