use std::collections::HashMap;
use tracing::debug;

use crate::engine::roots::find_roots;
use crate::engine::{parse_expression, Engine, EngineError, Expression, Operator, Value};

/// How many levels of the expression tree, counted through the bodies of
/// user defined functions, an evaluation may descend before it is
/// abandoned. Parsed expressions are themselves shallow, so only calls
/// into user functions can reach this.
const MAX_DEPTH: usize = 512;

#[derive(Debug, Clone)]
struct Function {
    parameter: String,
    body: Expression,
}

/// A small numeric engine: arithmetic, the usual elementary functions, user
/// variables and single parameter user functions, and equation solving by
/// root finding. Each instance has its own symbol and function tables.
#[derive(Debug, Default)]
pub struct Calculator {
    variables: HashMap<String, f64>,
    functions: HashMap<String, Function>,
}

impl Calculator {
    pub fn new() -> Calculator {
        Calculator::default()
    }

    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables
            .get(name)
            .copied()
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions
            .contains_key(name)
    }

    /// Forget every declared variable and function.
    pub fn reset(&mut self) {
        self.variables
            .clear();
        self.functions
            .clear();
    }

    fn value_of(
        &self,
        expression: &Expression,
        binding: Option<(&str, f64)>,
        depth: usize,
    ) -> Result<f64, EngineError> {
        match expression {
            Expression::Number(number) => Ok(*number),
            Expression::Symbol(name) => {
                if let Some((parameter, value)) = binding {
                    if parameter == name {
                        return Ok(value);
                    }
                }
                if let Some(value) = self.variable(name) {
                    return Ok(value);
                }
                constant(name).ok_or_else(|| EngineError::UndefinedSymbol(name.clone()))
            }
            Expression::Negate(inner) => Ok(-self.value_of(inner, binding, depth + 1)?),
            Expression::Binary(operator, left, right) => {
                let left = self.value_of(left, binding, depth + 1)?;
                let right = self.value_of(right, binding, depth + 1)?;
                Ok(operator.apply(left, right))
            }
            Expression::Call(name, arguments) => {
                let values = arguments
                    .iter()
                    .map(|argument| self.value_of(argument, binding, depth + 1))
                    .collect::<Result<Vec<f64>, EngineError>>()?;

                if let Some(function) = self
                    .functions
                    .get(name)
                {
                    let argument = match values.as_slice() {
                        [argument] => *argument,
                        _ => {
                            return Err(EngineError::WrongArity(name.clone(), 1, values.len()));
                        }
                    };
                    if depth >= MAX_DEPTH {
                        return Err(EngineError::NestingTooDeep(name.clone()));
                    }
                    // the body sees its own parameter and the global tables,
                    // not the caller's binding.
                    return self.value_of(
                        &function.body,
                        Some((function.parameter.as_str(), argument)),
                        depth + 1,
                    );
                }

                match builtin(name, &values) {
                    Some(result) => result,
                    None => Err(EngineError::UndefinedFunction(name.clone())),
                }
            }
        }
    }
}

impl Engine for Calculator {
    fn set_variable(&mut self, name: &str, value: &str) -> Result<Value, EngineError> {
        let name = identifier(name)?;
        let expression = parse_expression(value)?;
        let number = finite(self.value_of(&expression, None, 0)?)?;

        debug!("Setting variable {} to {}", name, number);
        self.variables
            .insert(name.to_string(), number);

        Ok(Value(number))
    }

    fn solve(&mut self, equation: &str, variable: &str) -> Result<Vec<Value>, EngineError> {
        let variable = identifier(variable)?;
        let expression = read_equation(equation)?;

        if !expression.mentions(variable) {
            return Err(EngineError::Unsolvable(variable.to_string()));
        }

        let roots = find_roots(|x| self.value_of(&expression, Some((variable, x)), 0))?;
        debug!(
            "Found {} root{} for {}",
            roots.len(),
            if roots.len() == 1 { "" } else { "s" },
            variable
        );

        if roots.is_empty() {
            return Err(EngineError::NoSolution(variable.to_string()));
        }

        Ok(roots
            .into_iter()
            .map(Value)
            .collect())
    }

    fn evaluate(&mut self, expression: &str) -> Result<Value, EngineError> {
        let expression = parse_expression(expression)?;
        let number = finite(self.value_of(&expression, None, 0)?)?;
        Ok(Value(number))
    }

    fn set_function(&mut self, name: &str, parameter: &str, body: &str) -> Result<(), EngineError> {
        let name = identifier(name)?;
        let parameter = identifier(parameter)?;
        let body = parse_expression(body)?;

        debug!("Setting function {}({})", name, parameter);
        self.functions.insert(
            name.to_string(),
            Function {
                parameter: parameter.to_string(),
                body,
            },
        );

        Ok(())
    }
}

/// An equation `lhs = rhs` becomes the expression `lhs - rhs`, whose roots
/// are the solutions. Text without `=` is taken to mean `= 0`.
fn read_equation(equation: &str) -> Result<Expression, EngineError> {
    let sides: Vec<&str> = equation
        .split('=')
        .collect();

    let (left, right) = match sides.as_slice() {
        [left] => (parse_expression(left)?, Expression::Number(0.0)),
        [left, right] => (parse_expression(left)?, parse_expression(right)?),
        _ => return Err(EngineError::NotAnEquation(equation.to_string())),
    };

    Ok(Expression::Binary(
        Operator::Subtract,
        Box::new(left),
        Box::new(right),
    ))
}

fn identifier(text: &str) -> Result<&str, EngineError> {
    let re = regex!(r"^[\p{Alphabetic}_][\p{Alphabetic}0-9_]*$");

    let name = text.trim();
    if re.is_match(name) {
        Ok(name)
    } else {
        Err(EngineError::InvalidIdentifier(name.to_string()))
    }
}

fn finite(number: f64) -> Result<f64, EngineError> {
    if number.is_finite() {
        Ok(number)
    } else {
        Err(EngineError::NotFinite)
    }
}

fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" | "π" => Some(std::f64::consts::PI),
        "e" => Some(std::f64::consts::E),
        _ => None,
    }
}

fn builtin(name: &str, arguments: &[f64]) -> Option<Result<f64, EngineError>> {
    let unary: Option<fn(f64) -> f64> = match name {
        "sqrt" => Some(f64::sqrt),
        "abs" => Some(f64::abs),
        "exp" => Some(f64::exp),
        "ln" | "log" => Some(f64::ln),
        "log10" => Some(f64::log10),
        "sin" => Some(f64::sin),
        "cos" => Some(f64::cos),
        "tan" => Some(f64::tan),
        "asin" => Some(f64::asin),
        "acos" => Some(f64::acos),
        "atan" => Some(f64::atan),
        "sinh" => Some(f64::sinh),
        "cosh" => Some(f64::cosh),
        "tanh" => Some(f64::tanh),
        "floor" => Some(f64::floor),
        "ceil" => Some(f64::ceil),
        "round" => Some(f64::round),
        _ => None,
    };
    if let Some(function) = unary {
        return Some(match arguments {
            [x] => Ok(function(*x)),
            _ => Err(EngineError::WrongArity(name.to_string(), 1, arguments.len())),
        });
    }

    let binary: Option<fn(f64, f64) -> f64> = match name {
        "min" => Some(f64::min),
        "max" => Some(f64::max),
        _ => None,
    };
    if let Some(function) = binary {
        return Some(match arguments {
            [x, y] => Ok(function(*x, *y)),
            _ => Err(EngineError::WrongArity(name.to_string(), 2, arguments.len())),
        });
    }

    None
}
