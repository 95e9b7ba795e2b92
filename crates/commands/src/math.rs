//! `math` — arithmetic expression evaluation.
//!
//! Small recursive-descent evaluator: `+ - * / %`, right-associative `^`,
//! unary minus, parentheses, f64 arithmetic.

use anyhow::{bail, Result};
use async_trait::async_trait;

use adjutant_core::{argument, Command, CommandResult, EngineError};

use crate::render::banner;

const USAGE: &str = "Usage: math <expression>\nExample: math 5+3*2";

pub struct MathCommand;

#[async_trait]
impl Command for MathCommand {
    fn name(&self) -> &str {
        "math"
    }

    fn description(&self) -> &str {
        "Evaluate a mathematical expression"
    }

    async fn execute(&self, input: &str) -> Result<CommandResult, EngineError> {
        let expression = argument(input, self.name());
        if expression.is_empty() {
            return CommandResult::failure(USAGE);
        }

        match evaluate(expression) {
            Ok(value) => {
                let body = format!(
                    "📝 Expression: {expression}\n✓  Result:     {}",
                    format_number(value)
                );
                CommandResult::success(banner("MATH CALCULATOR", &body))
            }
            Err(err) => CommandResult::failure(format!(
                "Invalid math expression: {err}\nExample: math 5+3*2"
            )),
        }
    }
}

fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

// ---------------------------------------------------------------------------
// Evaluator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LParen,
    RParen,
}

pub(crate) fn evaluate(expression: &str) -> Result<f64> {
    let tokens = tokenize(expression)?;
    if tokens.is_empty() {
        bail!("empty expression");
    }
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expr()?;
    if parser.pos != parser.tokens.len() {
        bail!("unexpected trailing input");
    }
    Ok(value)
}

fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let bytes = expression.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i] as char;
        match c {
            ' ' | '\t' => i += 1,
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                tokens.push(Token::Star);
                i += 1;
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '%' => {
                tokens.push(Token::Percent);
                i += 1;
            }
            '^' => {
                tokens.push(Token::Caret);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            '0'..='9' | '.' => {
                let start = i;
                while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                    i += 1;
                }
                let literal = &expression[start..i];
                let value: f64 = literal
                    .parse()
                    .map_err(|_| anyhow::anyhow!("bad number '{literal}'"))?;
                tokens.push(Token::Number(value));
            }
            other => bail!("unexpected character '{other}'"),
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expr(&mut self) -> Result<f64> {
        let mut value = self.term()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Plus => {
                    self.next();
                    value += self.term()?;
                }
                Token::Minus => {
                    self.next();
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64> {
        let mut value = self.factor()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Star => {
                    self.next();
                    value *= self.factor()?;
                }
                Token::Slash => {
                    self.next();
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        bail!("division by zero");
                    }
                    value /= divisor;
                }
                Token::Percent => {
                    self.next();
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        bail!("modulo by zero");
                    }
                    value %= divisor;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    /// `^` binds tighter than `*` and is right-associative: 2^3^2 == 512.
    fn factor(&mut self) -> Result<f64> {
        let base = self.unary()?;
        if self.peek() == Some(Token::Caret) {
            self.next();
            let exponent = self.factor()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn unary(&mut self) -> Result<f64> {
        if self.peek() == Some(Token::Minus) {
            self.next();
            return Ok(-self.unary()?);
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<f64> {
        match self.next() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::LParen) => {
                let value = self.expr()?;
                match self.next() {
                    Some(Token::RParen) => Ok(value),
                    _ => bail!("missing closing parenthesis"),
                }
            }
            Some(other) => bail!("unexpected token {other:?}"),
            None => bail!("unexpected end of expression"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_and_parens() {
        assert_eq!(evaluate("5+3*2").unwrap(), 11.0);
        assert_eq!(evaluate("(5+3)*2").unwrap(), 16.0);
        assert_eq!(evaluate("100/5").unwrap(), 20.0);
        assert_eq!(evaluate("10 % 3").unwrap(), 1.0);
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(evaluate("2^8").unwrap(), 256.0);
        assert_eq!(evaluate("2^3^2").unwrap(), 512.0);
    }

    #[test]
    fn unary_minus() {
        assert_eq!(evaluate("-4+10").unwrap(), 6.0);
        assert_eq!(evaluate("2*-3").unwrap(), -6.0);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(evaluate("").is_err());
        assert!(evaluate("2+").is_err());
        assert!(evaluate("(1+2").is_err());
        assert!(evaluate("1/0").is_err());
        assert!(evaluate("two plus two").is_err());
        assert!(evaluate("1 2").is_err());
    }

    #[tokio::test]
    async fn missing_expression_returns_usage() {
        let result = MathCommand.execute("math").await.unwrap();
        assert!(!result.is_success());
        assert!(result.render().contains("Usage: math"));
    }

    #[tokio::test]
    async fn whole_results_render_without_decimals() {
        let result = MathCommand.execute("math 2^8").await.unwrap();
        assert!(result.render().contains("Result:     256"));
    }
}
