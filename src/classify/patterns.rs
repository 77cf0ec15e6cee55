use crate::classify::Classification;

/// Work out which computation the given snippet text is asking for. The
/// grammars are tried in a fixed order (variable declaration, solve,
/// evaluate, function definition) and the first one to match wins.
pub fn classify(text: &str) -> Classification<'_> {
    if let Some(result) = read_variable_declaration(text) {
        return result;
    }
    if let Some(result) = read_solve(text) {
        return result;
    }
    if let Some(result) = read_evaluate(text) {
        return result;
    }
    if let Some(result) = read_function_definition(text) {
        return result;
    }
    Classification::Unrecognized
}

fn read_variable_declaration(text: &str) -> Option<Classification<'_>> {
    let re = regex!(r"^([a-z_][A-Za-z0-9_]*)\s*:=\s*(.+)$");

    let cap = re.captures(text)?;
    Some(Classification::VariableDeclaration {
        name: cap.get(1)?
            .as_str(),
        value: cap.get(2)?
            .as_str(),
    })
}

fn read_solve(text: &str) -> Option<Classification<'_>> {
    let re = regex!(r"^(?i:solve)\(([^,]+),\s*([^)]+)\)$");

    let cap = re.captures(text)?;
    Some(Classification::Solve {
        equation: cap.get(1)?
            .as_str(),
        variable: cap.get(2)?
            .as_str(),
    })
}

fn read_evaluate(text: &str) -> Option<Classification<'_>> {
    let re = regex!(r"^([^=]+)=\?$");

    let cap = re.captures(text)?;
    Some(Classification::Evaluate {
        expression: cap.get(1)?
            .as_str(),
    })
}

fn read_function_definition(text: &str) -> Option<Classification<'_>> {
    let re = regex!(r"^([A-Za-z_][A-Za-z0-9_]*)\s*\(\s*([^)]+)\s*\)\s*:=\s*([^$]+)$");

    let cap = re.captures(text)?;
    Some(Classification::FunctionDefinition {
        name: cap.get(1)?
            .as_str(),
        parameter: cap.get(2)?
            .as_str(),
        body: cap.get(3)?
            .as_str(),
    })
}

#[cfg(test)]
mod check {
    use super::*;
    use crate::classify::Intent;

    #[test]
    fn variable_declarations() {
        assert_eq!(
            classify("x:=5"),
            Classification::VariableDeclaration {
                name: "x",
                value: "5"
            }
        );
        assert_eq!(
            classify("pi := 3.14159"),
            Classification::VariableDeclaration {
                name: "pi",
                value: "3.14159"
            }
        );
        assert_eq!(
            classify("_rate2 := 0.5 * g"),
            Classification::VariableDeclaration {
                name: "_rate2",
                value: "0.5 * g"
            }
        );
    }

    #[test]
    fn variable_names_start_lowercase() {
        // an uppercase start is not a declaration, and without parenthesis
        // it is not a function either.
        assert_eq!(classify("Pi := 3"), Classification::Unrecognized);
        assert_eq!(classify("2x := 3"), Classification::Unrecognized);
    }

    #[test]
    fn solve_requests() {
        assert_eq!(
            classify("solve(x^2-4=0, x)"),
            Classification::Solve {
                equation: "x^2-4=0",
                variable: "x"
            }
        );
        assert_eq!(
            classify("Solve(2*y=8,y)"),
            Classification::Solve {
                equation: "2*y=8",
                variable: "y"
            }
        );
        assert_eq!(classify("solve(x^2-4=0)"), Classification::Unrecognized);
    }

    #[test]
    fn evaluate_requests() {
        assert_eq!(
            classify("pi=?"),
            Classification::Evaluate { expression: "pi" }
        );
        assert_eq!(
            classify("1 + 2 =?"),
            Classification::Evaluate {
                expression: "1 + 2 "
            }
        );
        assert_eq!(classify("a=b=?"), Classification::Unrecognized);
        assert_eq!(classify("=?"), Classification::Unrecognized);
    }

    #[test]
    fn function_definitions() {
        assert_eq!(
            classify("f(x) := x^2 + 1"),
            Classification::FunctionDefinition {
                name: "f",
                parameter: "x",
                body: "x^2 + 1"
            }
        );
        assert_eq!(
            classify("Area(r):=pi*r^2"),
            Classification::FunctionDefinition {
                name: "Area",
                parameter: "r",
                body: "pi*r^2"
            }
        );
    }

    #[test]
    fn ordinary_code_is_unrecognized() {
        assert_eq!(classify("just some code"), Classification::Unrecognized);
        assert_eq!(classify("let x = 5;"), Classification::Unrecognized);
        assert_eq!(classify(""), Classification::Unrecognized);
        assert_eq!(classify("cargo build --release"), Classification::Unrecognized);
    }

    #[test]
    fn no_trimming_beyond_patterns() {
        // leading whitespace is not part of any grammar
        assert_eq!(classify(" x := 5"), Classification::Unrecognized);
        assert_eq!(classify("x=? "), Classification::Unrecognized);
    }

    #[test]
    fn priority_when_grammars_overlap() {
        // satisfies both the solve and the function definition grammars
        let text = "solve(a) := g(c, d)";
        assert!(regex!(r"^([A-Za-z_][A-Za-z0-9_]*)\s*\(\s*([^)]+)\s*\)\s*:=\s*([^$]+)$").is_match(text));
        assert_eq!(
            classify(text),
            Classification::Solve {
                equation: "a) := g(c",
                variable: "d"
            }
        );
    }

    #[test]
    fn classification_is_deterministic() {
        for text in ["x := 5", "solve(x=1, x)", "x=?", "f(x) := x", "plain"] {
            assert_eq!(classify(text), classify(text));
        }
    }

    #[test]
    fn intents() {
        assert_eq!(classify("x := 5").intent(), Some(Intent::Variable));
        assert_eq!(classify("f(x) := x").intent(), Some(Intent::Function));
        assert_eq!(classify("plain").intent(), None);
        assert!(!classify("plain").is_recognized());
        assert_eq!(Intent::Solve.to_string(), "solve");
    }
}
