//! Turning numbers into display text.

mod numbers;
mod prefixes;

// Re-export all public symbols
pub use numbers::*;
pub use prefixes::*;
