use lapel::engine::EngineError;
use lapel::evaluator::EvaluationError;

/// Generate problem and detail messages for a failed computation
pub fn generate_error_message(error: &EvaluationError) -> (String, String) {
    let problem = format!("Unable to {}", action(error));

    let details = match &error.cause {
        EngineError::EmptyExpression => {
            "There is nothing to compute on one side of the snippet.".to_string()
        }
        EngineError::UnexpectedCharacter(_, c) => format!(
            "The character '{}' does not belong in an expression here.",
            c
        ),
        EngineError::UnexpectedEndOfInput(_) => {
            "The expression stops before it is complete. Is an operand missing?".to_string()
        }
        EngineError::Expected(_, what) => {
            format!("The expression was expected to continue with {}.", what)
        }
        EngineError::InvalidNumber(_) => {
            "A number here could not be read. Numbers are written like 42, 0.5, or 6.02e23."
                .to_string()
        }
        EngineError::InvalidIdentifier(name) => format!(
            r#"
'{}' cannot be used as a name. Names begin with a letter or
underscore and continue with letters, digits, or underscores.
            "#,
            name
        )
        .trim_ascii()
        .to_string(),
        EngineError::UndefinedSymbol(name) => format!(
            r#"
'{}' has no value at this point in the document. Declare it in a
snippet earlier on, for example `{} := 1`.
            "#,
            name, name
        )
        .trim_ascii()
        .to_string(),
        EngineError::UndefinedFunction(name) => format!(
            r#"
There is no function named '{}'. Define it in a snippet earlier
on, for example `{}(x) := x^2`.
            "#,
            name, name
        )
        .trim_ascii()
        .to_string(),
        EngineError::WrongArity(name, expected, actual) => format!(
            "The function '{}' takes {} argument{} but was given {}.",
            name,
            expected,
            if *expected == 1 { "" } else { "s" },
            actual
        ),
        EngineError::NestingTooDeep(name) => format!(
            "Calls to '{}' nest too deeply. Does the function refer to itself?",
            name
        ),
        EngineError::TooDeeplyNested(_) => {
            "The expression nests too deeply to compute. Try splitting it into declarations."
                .to_string()
        }
        EngineError::NotFinite => {
            "The result is infinite or undefined. Is there a division by zero?".to_string()
        }
        EngineError::NotAnEquation(text) => format!(
            "'{}' is not an equation. Write at most one '=' between two expressions.",
            text
        ),
        EngineError::Unsolvable(variable) => format!(
            "The equation does not mention '{}', so there is nothing to solve for.",
            variable
        ),
        EngineError::NoSolution(variable) => {
            format!("No real value of '{}' satisfies the equation.", variable)
        }
    };

    (problem, details)
}

fn action(error: &EvaluationError) -> &'static str {
    use lapel::classify::Intent;

    match error.intent {
        Intent::Variable => "declare variable",
        Intent::Solve => "solve equation",
        Intent::Evaluate => "evaluate expression",
        Intent::Function => "define function",
    }
}
