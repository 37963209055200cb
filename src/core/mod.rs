// src/core/mod.rs

pub mod html;
pub mod tokenizer;

pub use tokenizer::{tokenize, TagToken, TokenKind};
