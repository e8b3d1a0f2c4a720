//! Symbolic value expressions and filters.
//!
//! Expressions are kept symbolic: the model records *what* a value is
//! (a literal, an attribute reference, a function call) and leaves evaluation
//! to the renderer.

use crate::color::Color;
use crate::style::Transformation;
use serde::Serialize;
use std::fmt;

/// Name of the string-concatenation function.
pub const CONCATENATE: &str = "Concatenate";

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    String(String),
    Number(f64),
    Bool(bool),
    Color(Color),
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expression {
    /// The null literal.
    Nil,
    Literal { value: Literal },
    Property { name: String },
    Function { name: String, args: Vec<Expression> },
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// A rendering transformation used as an argument of another one.
    Process { transformation: Box<Transformation> },
}

impl Expression {
    pub fn string(value: impl Into<String>) -> Self {
        Expression::Literal { value: Literal::String(value.into()) }
    }

    pub fn number(value: f64) -> Self {
        Expression::Literal { value: Literal::Number(value) }
    }

    pub fn bool(value: bool) -> Self {
        Expression::Literal { value: Literal::Bool(value) }
    }

    pub fn color(value: Color) -> Self {
        Expression::Literal { value: Literal::Color(value) }
    }

    pub fn property(name: impl Into<String>) -> Self {
        Expression::Property { name: name.into() }
    }

    pub fn function(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::Function { name: name.into(), args }
    }

    pub fn concatenate(args: Vec<Expression>) -> Self {
        Self::function(CONCATENATE, args)
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Expression::Nil)
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Expression::Literal { value } => Some(value),
            _ => None,
        }
    }

    /// True for the concatenation function, under either of its names.
    pub fn is_concatenation(&self) -> bool {
        matches!(self, Expression::Function { name, .. }
            if name.eq_ignore_ascii_case(CONCATENATE) || name == "strConcat")
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Color(c) => write!(f, "'{c}'"),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Nil => f.write_str("null"),
            Expression::Literal { value } => write!(f, "{value}"),
            Expression::Property { name } => f.write_str(name),
            Expression::Function { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
            Expression::Binary { op, left, right } => {
                write!(f, "({left} {} {right})", op.symbol())
            }
            Expression::Process { transformation } => write!(f, "{}(...)", transformation.name),
        }
    }
}

/// A feature filter in CQL text form. The grammar is not evaluated here.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Filter {
    cql: String,
}

impl Filter {
    pub fn new(cql: impl Into<String>) -> Self {
        Self { cql: cql.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.cql
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = Expression::function(
            "recode",
            vec![Expression::property("MAPCOLOR7"), Expression::number(1.0), Expression::string("it's")],
        );
        assert_eq!(e.to_string(), "recode(MAPCOLOR7, 1, 'it''s')");
    }

    #[test]
    fn test_concatenation_names() {
        assert!(Expression::concatenate(vec![]).is_concatenation());
        assert!(Expression::function("strConcat", vec![]).is_concatenation());
        assert!(!Expression::function("env", vec![]).is_concatenation());
    }
}
