use std::fmt;

use crate::classify::Intent;
use crate::engine::EngineError;

/// The engine rejected the computation a snippet asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationError {
    pub intent: Intent,
    pub cause: EngineError,
}

impl EvaluationError {
    pub fn new(intent: Intent, cause: EngineError) -> EvaluationError {
        EvaluationError { intent, cause }
    }
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self.intent {
            Intent::Variable => "declare variable",
            Intent::Solve => "solve",
            Intent::Evaluate => "evaluate",
            Intent::Function => "define function",
        };
        write!(f, "unable to {}: {}", action, self.cause)
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}
