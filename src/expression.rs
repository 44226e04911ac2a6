//! Safe arithmetic for typed dimension values.
//!
//! Accepts plain numbers and flat `+ - * /` expressions such as `100 + 50`
//! or `1200 / 3`. No parentheses, no unary operators inside an expression,
//! no identifiers: anything else is rejected before tokenizing.

/// Why a dimension expression was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExprError {
    #[error("empty expression")]
    Empty,

    #[error("character {0:?} is not allowed")]
    InvalidCharacter(char),

    #[error("{0:?} is not a number")]
    InvalidNumber(String),

    /// Tokens do not alternate number, operator, number, ...
    #[error("expected alternating numbers and operators")]
    Malformed,

    #[error("division by zero")]
    DivisionByZero,

    #[error("result is not finite")]
    NotFinite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ExprError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div if rhs == 0.0 => Err(ExprError::DivisionByZero),
            Self::Div => Ok(lhs / rhs),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Op(Op),
}

/// Evaluate `text`, returning NaN for anything that is not a valid expression.
pub fn evaluate(text: &str) -> f64 {
    try_evaluate(text).unwrap_or(f64::NAN)
}

/// Evaluate `text`, reporting why it was rejected.
pub fn try_evaluate(text: &str) -> Result<f64, ExprError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ExprError::Empty);
    }

    if is_plain_number(text) {
        return text
            .parse::<f64>()
            .map_err(|_| ExprError::InvalidNumber(text.to_string()))
            .and_then(finite);
    }

    if let Some(ch) = text.chars().find(|&ch| !is_allowed(ch)) {
        return Err(ExprError::InvalidCharacter(ch));
    }

    let tokens = tokenize(text)?;
    let (first, rest) = split_terms(&tokens)?;
    finite(reduce(first, &rest)?)
}

/// `[+-]?digits(.digits)?`
fn is_plain_number(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(int) && frac.map_or(true, all_digits)
}

fn is_allowed(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.' || ch.is_whitespace() || Op::from_char(ch).is_some()
}

fn tokenize(text: &str) -> Result<Vec<Token>, ExprError> {
    let mut tokens = Vec::new();
    let mut literal = String::new();

    for ch in text.chars() {
        if ch.is_ascii_digit() || ch == '.' {
            literal.push(ch);
            continue;
        }
        flush_literal(&mut literal, &mut tokens)?;
        if let Some(op) = Op::from_char(ch) {
            tokens.push(Token::Op(op));
        }
    }
    flush_literal(&mut literal, &mut tokens)?;
    Ok(tokens)
}

fn flush_literal(literal: &mut String, tokens: &mut Vec<Token>) -> Result<(), ExprError> {
    if literal.is_empty() {
        return Ok(());
    }
    let value = literal
        .parse::<f64>()
        .map_err(|_| ExprError::InvalidNumber(literal.clone()))?;
    tokens.push(Token::Number(value));
    literal.clear();
    Ok(())
}

/// Split `n op n op n ...` into the leading operand and `(op, operand)` pairs.
fn split_terms(tokens: &[Token]) -> Result<(f64, Vec<(Op, f64)>), ExprError> {
    if tokens.len() % 2 == 0 {
        return Err(ExprError::Malformed);
    }
    let mut iter = tokens.iter();
    let Some(&Token::Number(first)) = iter.next() else {
        return Err(ExprError::Malformed);
    };
    let mut rest = Vec::with_capacity(tokens.len() / 2);
    while let Some(token) = iter.next() {
        match (token, iter.next()) {
            (&Token::Op(op), Some(&Token::Number(n))) => rest.push((op, n)),
            _ => return Err(ExprError::Malformed),
        }
    }
    Ok((first, rest))
}

/// Two passes: `*` and `/` left to right, then `+` and `-` left to right.
fn reduce(first: f64, rest: &[(Op, f64)]) -> Result<f64, ExprError> {
    let mut head = first;
    let mut sums: Vec<(Op, f64)> = Vec::with_capacity(rest.len());
    for &(op, n) in rest {
        match op {
            Op::Mul | Op::Div => {
                let lhs = sums.last_mut().map_or(&mut head, |(_, v)| v);
                *lhs = op.apply(*lhs, n)?;
            }
            Op::Add | Op::Sub => sums.push((op, n)),
        }
    }
    sums.into_iter()
        .try_fold(head, |acc, (op, n)| op.apply(acc, n))
}

fn finite(value: f64) -> Result<f64, ExprError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExprError::NotFinite)
    }
}
