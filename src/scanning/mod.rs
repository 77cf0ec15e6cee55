//! The per-edit pass over a document: find the snippets, compute what they
//! ask for (or recall it), and decide which of them to show rendered.

mod decoration;
mod scanner;

// Re-export all public symbols
pub use decoration::*;
pub use scanner::*;
