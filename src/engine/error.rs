use std::fmt;

/// Why the engine refused an expression. Syntax problems carry the byte
/// offset into the expression text where they were noticed.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    EmptyExpression,
    UnexpectedCharacter(usize, char),
    UnexpectedEndOfInput(usize),
    Expected(usize, &'static str),
    InvalidNumber(usize),
    InvalidIdentifier(String),
    UndefinedSymbol(String),
    UndefinedFunction(String),
    WrongArity(String, usize, usize),
    NestingTooDeep(String),
    TooDeeplyNested(usize),
    NotFinite,
    NotAnEquation(String),
    Unsolvable(String),
    NoSolution(String),
}

impl EngineError {
    /// Offset into the expression text, for errors raised while parsing.
    pub fn offset(&self) -> Option<usize> {
        match self {
            EngineError::UnexpectedCharacter(offset, _) => Some(*offset),
            EngineError::UnexpectedEndOfInput(offset) => Some(*offset),
            EngineError::Expected(offset, _) => Some(*offset),
            EngineError::InvalidNumber(offset) => Some(*offset),
            EngineError::TooDeeplyNested(offset) => Some(*offset),
            _ => None,
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::EmptyExpression => write!(f, "empty expression"),
            EngineError::UnexpectedCharacter(_, c) => write!(f, "unexpected character '{}'", c),
            EngineError::UnexpectedEndOfInput(_) => write!(f, "unexpected end of expression"),
            EngineError::Expected(_, what) => write!(f, "expected {}", what),
            EngineError::InvalidNumber(_) => write!(f, "invalid number"),
            EngineError::InvalidIdentifier(name) => write!(f, "invalid identifier '{}'", name),
            EngineError::UndefinedSymbol(name) => write!(f, "undefined symbol '{}'", name),
            EngineError::UndefinedFunction(name) => write!(f, "undefined function '{}'", name),
            EngineError::WrongArity(name, expected, actual) => write!(
                f,
                "function '{}' takes {} argument{}, given {}",
                name,
                expected,
                if *expected == 1 { "" } else { "s" },
                actual
            ),
            EngineError::NestingTooDeep(name) => {
                write!(f, "calls to '{}' nest too deeply", name)
            }
            EngineError::TooDeeplyNested(_) => write!(f, "expression nests too deeply"),
            EngineError::NotFinite => write!(f, "result is not a finite number"),
            EngineError::NotAnEquation(text) => write!(f, "'{}' is not an equation", text),
            EngineError::Unsolvable(variable) => {
                write!(f, "equation does not depend on '{}'", variable)
            }
            EngineError::NoSolution(variable) => {
                write!(f, "no real solution found for '{}'", variable)
            }
        }
    }
}

impl std::error::Error for EngineError {}
