//! Recognize small calculations written inside the inline code spans of a
//! Markdown document, compute them, and decide which of them to display in
//! rendered form given where the cursor is.

#[macro_use]
mod regex;

pub mod cache;
pub mod classify;
pub mod config;
pub mod engine;
pub mod evaluator;
pub mod formatting;
pub mod rendering;
pub mod scanning;
pub mod spans;
pub mod visibility;
