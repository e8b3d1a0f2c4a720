//! A small CQL expression parser for the contents of `${...}` blocks.
//!
//! Covers attribute references, literals, function calls and arithmetic.
//! Filters are not parsed here; they are kept as text.

use crate::error::ParseError;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while, take_while1};
use nom::character::complete::{char, multispace0, none_of, one_of};
use nom::combinator::{all_consuming, map, map_res, opt, recognize};
use nom::multi::{many0, separated_list0};
use nom::number::complete::recognize_float;
use nom::sequence::{delimited, pair, preceded};
use nom::{IResult, Parser};
use ysld_model::{BinaryOp, Expression, Literal};

/// Parses one complete expression; trailing input is an error.
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::expression(input, "empty expression"));
    }
    all_consuming(ws(additive))
        .parse(input)
        .map(|(_, expression)| expression)
        .map_err(|e| ParseError::expression(input, e.to_string()))
}

// --- Helper Parsers ---

fn ws<'a, O, F>(inner: F) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

fn binary_op(symbol: char) -> BinaryOp {
    match symbol {
        '+' => BinaryOp::Add,
        '-' => BinaryOp::Subtract,
        '*' => BinaryOp::Multiply,
        _ => BinaryOp::Divide,
    }
}

fn fold(first: Expression, rest: Vec<(char, Expression)>) -> Expression {
    rest.into_iter().fold(first, |left, (symbol, right)| Expression::Binary {
        op: binary_op(symbol),
        left: Box::new(left),
        right: Box::new(right),
    })
}

fn negate(expression: Expression) -> Expression {
    match expression {
        Expression::Literal { value: Literal::Number(n) } => Expression::number(-n),
        other => Expression::Binary {
            op: BinaryOp::Subtract,
            left: Box::new(Expression::number(0.0)),
            right: Box::new(other),
        },
    }
}

// --- Grammar ---

fn additive(input: &str) -> IResult<&str, Expression> {
    let (input, first) = multiplicative(input)?;
    let (input, rest) = many0(pair(ws(one_of("+-")), multiplicative)).parse(input)?;
    Ok((input, fold(first, rest)))
}

fn multiplicative(input: &str) -> IResult<&str, Expression> {
    let (input, first) = unary(input)?;
    let (input, rest) = many0(pair(ws(one_of("*/")), unary)).parse(input)?;
    Ok((input, fold(first, rest)))
}

fn unary(input: &str) -> IResult<&str, Expression> {
    alt((map(preceded(ws(char('-')), unary), negate), primary)).parse(input)
}

fn primary(input: &str) -> IResult<&str, Expression> {
    ws(alt((
        map(number, Expression::number),
        map(string_literal, |s: String| Expression::string(s)),
        map(quoted_attribute, |name: &str| Expression::property(name)),
        function_or_name,
        delimited(char('('), ws(additive), char(')')),
    )))
    .parse(input)
}

fn number(input: &str) -> IResult<&str, f64> {
    map_res(recognize_float, |s: &str| s.parse::<f64>()).parse(input)
}

/// A single-quoted string; a doubled quote stands for one quote.
fn string_literal(input: &str) -> IResult<&str, String> {
    delimited(
        char('\''),
        map(many0(alt((map(tag("''"), |_| '\''), none_of("'")))), |chars: Vec<char>| {
            chars.into_iter().collect()
        }),
        char('\''),
    )
    .parse(input)
}

fn quoted_attribute(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_while(|c: char| c != '"'), char('"')).parse(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_alphabetic() || c == '_'),
        take_while(|c: char| c.is_alphanumeric() || matches!(c, '_' | ':' | '.')),
    ))
    .parse(input)
}

fn function_or_name(input: &str) -> IResult<&str, Expression> {
    let (input, name) = identifier(input)?;
    let (input, args) = opt(delimited(
        ws(char('(')),
        separated_list0(ws(char(',')), ws(additive)),
        char(')'),
    ))
    .parse(input)?;
    let expression = match args {
        Some(args) => Expression::function(name, args),
        None => match name {
            "null" | "NULL" => Expression::Nil,
            "true" | "TRUE" => Expression::bool(true),
            "false" | "FALSE" => Expression::bool(false),
            _ => Expression::property(name),
        },
    };
    Ok((input, expression))
}
