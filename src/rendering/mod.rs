//! Turning display strings into widgets, and splicing those widgets into the
//! document text in place of the snippets they stand for.

mod html;
mod latex;
mod renderer;
mod splice;
mod terminal;

// Re-export all public symbols
pub use html::*;
pub use latex::*;
pub use renderer::*;
pub use splice::*;
pub use terminal::*;
