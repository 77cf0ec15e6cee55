//! Recognizing what computation, if any, a snippet of inline code asks for.

mod patterns;
mod types;

// Re-export all public symbols
pub use patterns::*;
pub use types::*;
