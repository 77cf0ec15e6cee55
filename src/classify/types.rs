use std::fmt;

/// The computation a snippet is asking for, with the pieces of the snippet
/// text each one needs. Fields borrow from the snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'i> {
    /// `name := expr`
    VariableDeclaration { name: &'i str, value: &'i str },
    /// `solve(equation, variable)`
    Solve {
        equation: &'i str,
        variable: &'i str,
    },
    /// `expr=?`
    Evaluate { expression: &'i str },
    /// `name(param) := body`
    FunctionDefinition {
        name: &'i str,
        parameter: &'i str,
        body: &'i str,
    },
    /// Ordinary inline code, left alone.
    Unrecognized,
}

impl<'i> Classification<'i> {
    pub fn intent(&self) -> Option<Intent> {
        match self {
            Classification::VariableDeclaration { .. } => Some(Intent::Variable),
            Classification::Solve { .. } => Some(Intent::Solve),
            Classification::Evaluate { .. } => Some(Intent::Evaluate),
            Classification::FunctionDefinition { .. } => Some(Intent::Function),
            Classification::Unrecognized => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Classification::Unrecognized)
    }

    /// Declarations change what later snippets compute to.
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            Classification::VariableDeclaration { .. } | Classification::FunctionDefinition { .. }
        )
    }
}

/// Which kind of computation was requested, without the captured text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Variable,
    Solve,
    Evaluate,
    Function,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::Variable => "variable",
            Intent::Solve => "solve",
            Intent::Evaluate => "evaluate",
            Intent::Function => "function",
        };
        f.write_str(name)
    }
}
