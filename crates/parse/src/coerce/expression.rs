//! Expressions embedded in text.
//!
//! Plain text is a string literal. `${...}` blocks hold CQL expressions, and
//! text mixing both becomes a concatenation. `\$`, `\}` and `\\` escape the
//! special characters.

use crate::coerce::cql;
use crate::error::ParseError;
use serde_json::Value;
use std::mem;
use ysld_model::{Expression, Filter, Literal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    /// The source of a `${...}` block, without the delimiters.
    Expression(String),
}

pub fn split_embedded(text: &str) -> Result<Vec<Segment>, ParseError> {
    let mut segments = Vec::new();
    let mut buf = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some(&next @ ('$' | '}' | '\\')) => {
                    buf.push(next);
                    chars.next();
                }
                _ => buf.push(c),
            },
            '$' if chars.peek() == Some(&'{') => {
                chars.next();
                if !buf.is_empty() {
                    segments.push(Segment::Text(mem::take(&mut buf)));
                }
                let mut body = String::new();
                let mut quoted = false;
                let mut closed = false;
                while let Some(c) = chars.next() {
                    match c {
                        '\\' if matches!(chars.peek(), Some('$' | '}' | '\\')) => {
                            body.extend(chars.next());
                        }
                        '\'' => {
                            quoted = !quoted;
                            body.push(c);
                        }
                        '}' if !quoted => {
                            closed = true;
                            break;
                        }
                        _ => body.push(c),
                    }
                }
                if !closed {
                    return Err(ParseError::expression(text, "unterminated ${ block"));
                }
                segments.push(Segment::Expression(body));
            }
            _ => buf.push(c),
        }
    }
    if !buf.is_empty() {
        segments.push(Segment::Text(buf));
    }
    Ok(segments)
}

/// Parses text with embedded expressions into one flattened expression.
pub fn parse_expression(text: &str) -> Result<Expression, ParseError> {
    let parts = split_embedded(text)?
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => Ok(Expression::string(text)),
            Segment::Expression(source) => cql::parse(&source),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(flatten(parts))
}

/// Like [`parse_expression`], but `None` for anything unparseable.
pub fn parse_expression_safe(text: &str) -> Option<Expression> {
    match parse_expression(text) {
        Ok(Expression::Nil) => None,
        Ok(expression) => Some(expression),
        Err(e) => {
            log::debug!("Not an expression: {e}");
            None
        }
    }
}

/// Collapses nested concatenations into a single argument list, dropping
/// null and empty-string arguments. No arguments give `Nil`, one argument is
/// returned as is.
pub fn flatten(parts: Vec<Expression>) -> Expression {
    let mut flat = Vec::with_capacity(parts.len());
    for part in parts {
        collect_concatenated(part, &mut flat);
    }
    match flat.len() {
        0 => Expression::Nil,
        1 => flat.pop().unwrap_or(Expression::Nil),
        _ => Expression::concatenate(flat),
    }
}

fn collect_concatenated(expression: Expression, out: &mut Vec<Expression>) {
    if expression.is_concatenation() {
        if let Expression::Function { args, .. } = expression {
            for arg in args {
                collect_concatenated(arg, out);
            }
        }
        return;
    }
    match expression {
        Expression::Nil => {}
        Expression::Literal { value: Literal::String(ref s) } if s.is_empty() => {}
        other => out.push(other),
    }
}

/// A document value as an expression; null and empty text give `None`.
pub fn expression_from_value(value: &Value) -> Result<Option<Expression>, ParseError> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(Expression::bool(*b))),
        Value::Number(n) => match n.as_f64() {
            Some(n) => Ok(Some(Expression::number(n))),
            None => Err(ParseError::shape(value, "a number")),
        },
        Value::String(text) => match parse_expression(text)? {
            Expression::Nil => Ok(None),
            expression => Ok(Some(expression)),
        },
        Value::Array(_) | Value::Object(_) => Err(ParseError::shape(value, "a scalar expression")),
    }
}

/// A tuple slot as an expression: numbers become number literals.
pub fn slot_expression(slot: &str) -> Result<Expression, ParseError> {
    match slot.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Expression::number(n)),
        _ => parse_expression(slot),
    }
}

/// Filter text, with an enclosing `${...}` and escapes removed. The CQL
/// itself is kept as text.
pub fn filter_from_text(text: &str) -> Result<Filter, ParseError> {
    let segments = split_embedded(text)?;
    let mut cql = None;
    let mut plain = String::new();
    for segment in segments {
        match segment {
            Segment::Text(t) => plain.push_str(&t),
            Segment::Expression(source) if cql.is_none() => cql = Some(source),
            Segment::Expression(_) => {
                return Err(ParseError::expression(text, "a filter holds a single expression"));
            }
        }
    }
    match cql {
        Some(_) if !plain.trim().is_empty() => Err(ParseError::expression(
            text,
            "a filter cannot mix text and embedded expressions",
        )),
        Some(source) => Ok(Filter::new(source.trim())),
        None if plain.trim().is_empty() => Err(ParseError::expression(text, "empty filter")),
        None => Ok(Filter::new(plain.trim())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn concat(args: Vec<Expression>) -> Expression {
        Expression::concatenate(args)
    }

    #[test]
    fn test_split_with_escapes() {
        let segments = split_embedded(r"cost: \$${price}\}").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Text("cost: $".into()),
                Segment::Expression("price".into()),
                Segment::Text("}".into()),
            ]
        );
        assert!(split_embedded("${open").is_err());
        let segments = split_embedded("${'}'}").unwrap();
        assert_eq!(segments, vec![Segment::Expression("'}'".into())]);
    }

    #[test]
    fn test_plain_text_and_attributes() {
        assert_eq!(parse_expression("Arial").unwrap(), Expression::string("Arial"));
        assert_eq!(parse_expression("${NAME}").unwrap(), Expression::property("NAME"));
        assert_eq!(parse_expression("").unwrap(), Expression::Nil);
        assert_eq!(
            parse_expression("${NAME} (${POP})").unwrap(),
            concat(vec![
                Expression::property("NAME"),
                Expression::string(" ("),
                Expression::property("POP"),
                Expression::string(")"),
            ])
        );
    }

    #[test]
    fn test_nested_concatenation_is_flattened() {
        let parsed = parse_expression("${strConcat('', NAME)}${Concatenate(strConcat(A, null), B)}").unwrap();
        assert_eq!(
            parsed,
            concat(vec![Expression::property("NAME"), Expression::property("A"), Expression::property("B")])
        );
        assert_eq!(parse_expression("${strConcat('', null)}").unwrap(), Expression::Nil);
        assert_eq!(parse_expression("${strConcat('', NAME)}").unwrap(), Expression::property("NAME"));
    }

    #[test]
    fn test_flatten_is_idempotent_and_associative() {
        let (a, b, c) = (Expression::property("a"), Expression::property("b"), Expression::property("c"));
        let left = flatten(vec![concat(vec![concat(vec![a.clone(), b.clone()]), c.clone()])]);
        let right = flatten(vec![concat(vec![a.clone(), concat(vec![b.clone(), c.clone()])])]);
        assert_eq!(left, right);
        assert_eq!(flatten(vec![left.clone()]), left);
        assert_eq!(flatten(vec![a.clone()]), a);
    }

    #[test]
    fn test_safe_mode() {
        assert_eq!(parse_expression_safe("${foo(}"), None);
        assert_eq!(parse_expression_safe("${a}"), Some(Expression::property("a")));
    }

    #[test]
    fn test_values() {
        assert_eq!(expression_from_value(&json!(2.5)).unwrap(), Some(Expression::number(2.5)));
        assert_eq!(expression_from_value(&json!(null)).unwrap(), None);
        assert_eq!(expression_from_value(&json!(true)).unwrap(), Some(Expression::bool(true)));
        assert!(expression_from_value(&json!([1])).is_err());
        assert_eq!(slot_expression("10").unwrap(), Expression::number(10.0));
        assert_eq!(slot_expression("${VALUE}").unwrap(), Expression::property("VALUE"));
        assert_eq!(slot_expression("nan").unwrap(), Expression::string("nan"));
    }

    #[test]
    fn test_filters() {
        assert_eq!(filter_from_text("${type = 'road'}").unwrap().as_str(), "type = 'road'");
        assert_eq!(filter_from_text("pop > 1000").unwrap().as_str(), "pop > 1000");
        assert_eq!(filter_from_text(r"${a = '\}'}").unwrap().as_str(), "a = '}'");
        assert!(filter_from_text("x ${a = 1}").is_err());
        assert!(filter_from_text("  ").is_err());
    }
}
