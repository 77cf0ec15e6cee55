use crate::engine::{EngineError, Expression, Operator};

/// How many levels of parentheses, signs, powers, calls and chained
/// operators an expression may nest before it is refused.
const MAX_NESTING: usize = 128;

/// Parse arithmetic expression text into an [`Expression`].
pub fn parse_expression(content: &str) -> Result<Expression, EngineError> {
    let mut input = Parser::new();
    input.initialize(content);
    input.parse_from_start()
}

#[derive(Debug)]
struct Parser<'i> {
    source: &'i str,
    offset: usize,
    depth: usize,
}

impl<'i> Parser<'i> {
    fn new() -> Parser<'i> {
        Parser {
            source: "",
            offset: 0,
            depth: 0,
        }
    }

    fn initialize(&mut self, content: &'i str) {
        self.source = content;
        self.offset = 0;
        self.depth = 0;
    }

    fn advance(&mut self, width: usize) {
        self.source = &self.source[width..];
        self.offset += width;
    }

    fn peek(&self) -> Option<char> {
        self.source
            .chars()
            .next()
    }

    fn is_finished(&self) -> bool {
        self.source
            .is_empty()
    }

    fn trim_whitespace(&mut self) {
        let trimmed = self
            .source
            .trim_start();
        let width = self.source.len() - trimmed.len();
        self.advance(width);
    }

    // Every recursive step of the grammar, and every operator added to a
    // chain, goes one level deeper. The nesting of the parsed tree, and so
    // the recursion needed to evaluate it, stays bounded.
    fn descend(&mut self) -> Result<(), EngineError> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(EngineError::TooDeeplyNested(self.offset));
        }
        Ok(())
    }

    fn parse_from_start(&mut self) -> Result<Expression, EngineError> {
        self.trim_whitespace();
        if self.is_finished() {
            return Err(EngineError::EmptyExpression);
        }

        let expression = self.read_sum()?;

        self.trim_whitespace();
        match self.peek() {
            None => Ok(expression),
            Some(c) => Err(EngineError::UnexpectedCharacter(self.offset, c)),
        }
    }

    // sum := product (('+' | '-') product)*
    fn read_sum(&mut self) -> Result<Expression, EngineError> {
        let depth = self.depth;
        let mut left = self.read_product()?;

        loop {
            self.trim_whitespace();
            let operator = match self.peek() {
                Some('+') => Operator::Add,
                Some('-') => Operator::Subtract,
                _ => break,
            };
            self.advance(1);
            self.descend()?;

            let right = self.read_product()?;
            left = Expression::Binary(operator, Box::new(left), Box::new(right));
        }

        self.depth = depth;
        Ok(left)
    }

    // product := unary (('*' | '/') unary | power)*
    //
    // The second alternative is implicit multiplication, as in `2x` or
    // `2(x + 1)`.
    fn read_product(&mut self) -> Result<Expression, EngineError> {
        let depth = self.depth;
        let mut left = self.read_unary()?;

        loop {
            self.trim_whitespace();
            let right = match self.peek() {
                Some(c @ ('*' | '·' | '×')) => {
                    self.advance(c.len_utf8());
                    self.descend()?;
                    left = Expression::Binary(
                        Operator::Multiply,
                        Box::new(left),
                        Box::new(self.read_unary()?),
                    );
                    continue;
                }
                Some('/') => {
                    self.advance(1);
                    self.descend()?;
                    left = Expression::Binary(
                        Operator::Divide,
                        Box::new(left),
                        Box::new(self.read_unary()?),
                    );
                    continue;
                }
                Some(c) if c.is_alphanumeric() || c == '_' || c == '(' => {
                    self.descend()?;
                    self.read_power()?
                }
                _ => break,
            };
            left = Expression::Binary(Operator::Multiply, Box::new(left), Box::new(right));
        }

        self.depth = depth;
        Ok(left)
    }

    fn read_unary(&mut self) -> Result<Expression, EngineError> {
        self.trim_whitespace();
        match self.peek() {
            Some('-') => {
                self.advance(1);
                self.descend()?;
                let inner = self.read_unary()?;
                self.depth -= 1;
                Ok(Expression::Negate(Box::new(inner)))
            }
            Some('+') => {
                self.advance(1);
                self.descend()?;
                let inner = self.read_unary()?;
                self.depth -= 1;
                Ok(inner)
            }
            _ => self.read_power(),
        }
    }

    // power := primary ('^' unary)?, which makes `^` right associative and
    // binding tighter than a leading minus: -2^2 is -4.
    fn read_power(&mut self) -> Result<Expression, EngineError> {
        let base = self.read_primary()?;

        self.trim_whitespace();
        if self.peek() == Some('^') {
            self.advance(1);
            self.descend()?;
            let exponent = self.read_unary()?;
            self.depth -= 1;
            return Ok(Expression::Binary(
                Operator::Power,
                Box::new(base),
                Box::new(exponent),
            ));
        }

        Ok(base)
    }

    fn read_primary(&mut self) -> Result<Expression, EngineError> {
        self.trim_whitespace();
        match self.peek() {
            None => Err(EngineError::UnexpectedEndOfInput(self.offset)),
            Some('(') => {
                self.advance(1);
                self.descend()?;
                let inner = self.read_sum()?;
                self.trim_whitespace();
                if self.peek() != Some(')') {
                    return Err(EngineError::Expected(self.offset, "closing parenthesis"));
                }
                self.advance(1);
                self.depth -= 1;
                Ok(inner)
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.read_number(),
            Some(c) if c.is_alphabetic() || c == '_' => self.read_identifier(),
            Some(c) => Err(EngineError::UnexpectedCharacter(self.offset, c)),
        }
    }

    fn read_number(&mut self) -> Result<Expression, EngineError> {
        let re = regex!(r"^(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?");

        let found = match re.find(self.source) {
            Some(found) => found,
            None => return Err(EngineError::InvalidNumber(self.offset)),
        };
        let number = found
            .as_str()
            .parse::<f64>()
            .map_err(|_| EngineError::InvalidNumber(self.offset))?;

        self.advance(found.end());
        Ok(Expression::Number(number))
    }

    // A name immediately followed by an opening parenthesis is a call.
    fn read_identifier(&mut self) -> Result<Expression, EngineError> {
        let re = regex!(r"^[\p{Alphabetic}_][\p{Alphabetic}0-9_]*");

        let name = match re.find(self.source) {
            Some(found) => found
                .as_str()
                .to_string(),
            None => return Err(EngineError::Expected(self.offset, "identifier")),
        };
        self.advance(name.len());

        if self.peek() != Some('(') {
            return Ok(Expression::Symbol(name));
        }
        self.advance(1);

        self.descend()?;
        let mut arguments = Vec::new();
        self.trim_whitespace();
        if self.peek() == Some(')') {
            self.advance(1);
            self.depth -= 1;
            return Ok(Expression::Call(name, arguments));
        }

        loop {
            arguments.push(self.read_sum()?);
            self.trim_whitespace();
            match self.peek() {
                Some(',') => self.advance(1),
                Some(')') => {
                    self.advance(1);
                    break;
                }
                Some(_) => return Err(EngineError::Expected(self.offset, "',' or ')'")),
                None => return Err(EngineError::UnexpectedEndOfInput(self.offset)),
            }
        }

        self.depth -= 1;
        Ok(Expression::Call(name, arguments))
    }
}
