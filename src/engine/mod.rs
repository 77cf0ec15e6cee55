//! The computer algebra boundary. Everything above this module treats the
//! engine as opaque: it hands over expression text and gets back numbers or
//! an error. [`Calculator`] is the engine that ships with the crate.

mod calculator;
mod error;
mod expression;
mod parser;
mod roots;

// Re-export all public symbols
pub use calculator::*;
pub use error::*;
pub use expression::*;
pub use parser::parse_expression;

/// Operations the evaluator needs from an algebra engine. Implementations
/// own their symbol and function tables; declarations made through one
/// instance are visible to every later call on that same instance.
pub trait Engine {
    /// Evaluate `value` and bind the result to `name`.
    fn set_variable(&mut self, name: &str, value: &str) -> Result<Value, EngineError>;

    /// Find the values of `variable` satisfying `equation`.
    fn solve(&mut self, equation: &str, variable: &str) -> Result<Vec<Value>, EngineError>;

    /// Evaluate an expression to a number.
    fn evaluate(&mut self, expression: &str) -> Result<Value, EngineError>;

    /// Register a single parameter function for use by later expressions.
    fn set_function(&mut self, name: &str, parameter: &str, body: &str) -> Result<(), EngineError>;
}

/// A numeric result handed back by an engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Value(pub f64);

impl Value {
    pub fn number(&self) -> f64 {
        self.0
    }

    /// Fixed point text with the given number of decimal places.
    pub fn decimals(&self, precision: usize) -> String {
        format!("{:.*}", precision, self.0)
    }

    /// Scientific notation with the given number of decimal places in the
    /// mantissa, for example `1.23450e4`.
    pub fn scientific(&self, precision: usize) -> String {
        format!("{:.*e}", precision, self.0)
    }
}
