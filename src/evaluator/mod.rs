//! Running a classified snippet through the algebra engine and producing
//! the text to display in its place.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

use crate::classify::{Classification, Intent};
use crate::config::Settings;
use crate::engine::{Calculator, Engine, Value};
use crate::formatting::{expand_prefixes, NumberFormat};

mod error;

pub use error::*;

/// Separates a question from its answer in display strings.
pub const ARROW: &str = "⇒";

/// Which solutions of an equation to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Roots {
    /// The largest real root only.
    #[default]
    Principal,
    /// Every real root found, largest first.
    All,
}

/// Owns the engine, and with it every variable and function declared so far.
#[derive(Debug)]
pub struct Evaluator<E = Calculator> {
    engine: E,
    format: NumberFormat,
    precision: usize,
    roots: Roots,
    expand_prefixes: bool,
}

impl Evaluator<Calculator> {
    pub fn new() -> Evaluator<Calculator> {
        Evaluator::with_engine(Calculator::new())
    }
}

impl Default for Evaluator<Calculator> {
    fn default() -> Self {
        Evaluator::new()
    }
}

impl<E: Engine> Evaluator<E> {
    pub fn with_engine(engine: E) -> Evaluator<E> {
        let settings = Settings::default();
        Evaluator {
            engine,
            format: settings.number_format,
            precision: settings.precision,
            roots: settings.roots,
            expand_prefixes: settings.expand_prefixes,
        }
    }

    pub fn configure(&mut self, settings: &Settings) {
        self.format = settings.number_format;
        self.precision = settings.precision;
        self.roots = settings.roots;
        self.expand_prefixes = settings.expand_prefixes;
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Compute the display string for a classified snippet. Gives `None`
    /// for unrecognized snippets, which have nothing to compute.
    pub fn compute(
        &mut self,
        classification: &Classification,
    ) -> Option<Result<String, EvaluationError>> {
        let result = match *classification {
            Classification::VariableDeclaration { name, value } => {
                self.declare_variable(name, value)
            }
            Classification::Solve { equation, variable } => self.solve(equation, variable),
            Classification::Evaluate { expression } => self.evaluate(expression),
            Classification::FunctionDefinition {
                name,
                parameter,
                body,
            } => self.define_function(name, parameter, body),
            Classification::Unrecognized => return None,
        };
        Some(result)
    }

    /// `name := value`, displayed with the value as computed.
    pub fn declare_variable(&mut self, name: &str, value: &str) -> Result<String, EvaluationError> {
        let name = name.trim();
        let input = self.input(value);
        let result = self
            .engine
            .set_variable(name, &input)
            .map_err(|e| EvaluationError::new(Intent::Variable, e))?;

        Ok(format!("{} := {}", name, self.number(result)))
    }

    pub fn solve(&mut self, equation: &str, variable: &str) -> Result<String, EvaluationError> {
        let variable = variable.trim();
        let input = self.input(equation);
        let roots = self
            .engine
            .solve(&input, variable)
            .map_err(|e| EvaluationError::new(Intent::Solve, e))?;

        let text = match self.roots {
            Roots::Principal => roots
                .iter()
                .copied()
                .reduce(|a, b| if b.number() > a.number() { b } else { a })
                .map(|root| self.number(root))
                .unwrap_or_default(),
            Roots::All => roots
                .iter()
                .map(|root| self.number(*root))
                .collect::<Vec<String>>()
                .join(", "),
        };
        debug!("Solved {} for {}: {}", equation, variable, text);

        Ok(format!("{} {} {} = {}", equation.trim(), ARROW, variable, text))
    }

    pub fn evaluate(&mut self, expression: &str) -> Result<String, EvaluationError> {
        let input = self.input(expression);
        let result = self
            .engine
            .evaluate(&input)
            .map_err(|e| EvaluationError::new(Intent::Evaluate, e))?;

        Ok(format!("{} {} {}", expression.trim(), ARROW, self.number(result)))
    }

    /// `name(parameter) = body`; the body is shown as written.
    pub fn define_function(
        &mut self,
        name: &str,
        parameter: &str,
        body: &str,
    ) -> Result<String, EvaluationError> {
        let (name, parameter, body) = (name.trim(), parameter.trim(), body.trim());
        let input = self.input(body);
        self.engine
            .set_function(name, parameter, &input)
            .map_err(|e| EvaluationError::new(Intent::Function, e))?;

        Ok(format!("{}({}) = {}", name, parameter, body))
    }

    fn input<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.expand_prefixes {
            expand_prefixes(text)
        } else {
            Cow::Borrowed(text)
        }
    }

    fn number(&self, value: Value) -> String {
        self.format
            .render(value, self.precision)
    }
}
