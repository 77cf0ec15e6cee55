// Reporting on snippets that could not be computed, and on files that could
// not be loaded.

mod format;
mod messages;

// Re-export all public symbols
pub use format::*;
