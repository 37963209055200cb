// src/lib.rs

#[macro_use]
pub mod macros;

#[macro_use]
pub mod log;
pub mod config;
pub mod core;

pub mod check;
pub mod trace;
pub mod report;
pub mod links;
pub mod wayback;

pub mod cli;
pub mod file;
pub mod runner;

pub use check::{validate, validate_with, Issue, IssueKind, Outcome};
