/// Parsed form of an arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Symbol(String),
    Negate(Box<Expression>),
    Binary(Operator, Box<Expression>, Box<Expression>),
    Call(String, Vec<Expression>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
            Operator::Power => power(left, right),
        }
    }
}

// Integer exponents go through powi so that 2^2 is exactly 4.
fn power(base: f64, exponent: f64) -> f64 {
    if exponent.fract() == 0.0 && exponent.abs() <= i32::MAX as f64 {
        base.powi(exponent as i32)
    } else {
        base.powf(exponent)
    }
}

impl Expression {
    /// Whether the named symbol appears anywhere in this expression,
    /// including inside call arguments.
    pub fn mentions(&self, name: &str) -> bool {
        match self {
            Expression::Number(_) => false,
            Expression::Symbol(symbol) => symbol == name,
            Expression::Negate(inner) => inner.mentions(name),
            Expression::Binary(_, left, right) => left.mentions(name) || right.mentions(name),
            Expression::Call(_, arguments) => arguments
                .iter()
                .any(|argument| argument.mentions(name)),
        }
    }
}
