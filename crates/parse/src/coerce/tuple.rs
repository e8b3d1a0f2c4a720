use crate::error::{ParseError, display_raw};
use serde_json::Value;

/// An ordered list of named slots, of which the first `min` are required.
///
/// A tuple value may be written as a sequence, as a bracketed string such as
/// `"[1000, max]"`, or as a single scalar.
#[derive(Debug, Clone, Copy)]
pub struct Tuple {
    names: &'static [&'static str],
    min: usize,
}

impl Tuple {
    pub const fn exact(names: &'static [&'static str]) -> Self {
        Self { names, min: names.len() }
    }

    pub const fn bounded(names: &'static [&'static str], min: usize) -> Self {
        Self { names, min }
    }

    pub fn max(&self) -> usize {
        self.names.len()
    }

    /// The bracketed form used in error messages, optional slots marked `?`.
    pub fn expected(&self) -> String {
        let slots: Vec<String> = self
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| if i < self.min { name.to_string() } else { format!("{name}?") })
            .collect();
        format!("[{}]", slots.join(", "))
    }

    /// Splits `value` into exactly `max()` slots. Trailing optional slots
    /// that were not given are `None`; any other count is a shape error.
    pub fn parse(&self, value: &Value) -> Result<Vec<Option<String>>, ParseError> {
        let mut slots = match value {
            Value::Array(items) => items
                .iter()
                .map(|item| self.scalar_slot(value, item))
                .collect::<Result<Vec<_>, _>>()?,
            Value::String(text) => split_elements(text),
            Value::Number(n) => vec![Some(n.to_string())],
            Value::Bool(b) => vec![Some(b.to_string())],
            Value::Null => Vec::new(),
            Value::Object(_) => return Err(ParseError::shape(value, self.expected())),
        };
        if slots.len() < self.min || slots.len() > self.max() {
            return Err(ParseError::Shape { value: display_raw(value), expected: self.expected() });
        }
        slots.resize(self.max(), None);
        Ok(slots)
    }

    fn scalar_slot(&self, whole: &Value, item: &Value) -> Result<Option<String>, ParseError> {
        match item {
            Value::Null => Ok(None),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            Value::Number(n) => Ok(Some(n.to_string())),
            Value::Bool(b) => Ok(Some(b.to_string())),
            Value::Array(_) | Value::Object(_) => Err(ParseError::shape(whole, self.expected())),
        }
    }
}

/// Splits a delimited string on the commas that sit outside quotes,
/// parentheses and `${...}` blocks. Surrounding brackets are optional.
fn split_elements(text: &str) -> Vec<Option<String>> {
    let mut inner = text.trim();
    if let Some(stripped) = inner
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .or_else(|| inner.strip_prefix('(').and_then(|s| s.strip_suffix(')')))
    {
        inner = stripped;
    }
    if inner.trim().is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;
    let mut prev = '\0';
    for (i, c) in inner.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '\'' | '"' => quote = Some(c),
                '(' => depth += 1,
                '{' if prev == '$' => depth += 1,
                ')' | '}' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    parts.push(&inner[start..i]);
                    start = i + 1;
                }
                _ => {}
            },
        }
        prev = c;
    }
    parts.push(&inner[start..]);

    parts.into_iter().map(element).collect()
}

fn element(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let unquoted = ['\'', '"']
        .iter()
        .find_map(|q| trimmed.strip_prefix(*q).and_then(|s| s.strip_suffix(*q)))
        .unwrap_or(trimmed);
    if unquoted.is_empty() || (unquoted == trimmed && unquoted.eq_ignore_ascii_case("null")) {
        None
    } else {
        Some(unquoted.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const RANGE: Tuple = Tuple::exact(&["min", "max"]);
    const ENTRY: Tuple = Tuple::bounded(&["color", "opacity", "quantity", "label"], 1);

    fn some(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some(v.to_string())).collect()
    }

    #[test]
    fn test_all_shapes_agree() {
        let expected = some(&["1000", "max"]);
        assert_eq!(RANGE.parse(&json!([1000, "max"])).unwrap(), expected);
        assert_eq!(RANGE.parse(&json!("[1000, max]")).unwrap(), expected);
        assert_eq!(RANGE.parse(&json!("(1000,'max')")).unwrap(), expected);
        assert_eq!(RANGE.parse(&json!("1000, max")).unwrap(), expected);
    }

    #[test]
    fn test_optional_trailing_slots() {
        let slots = ENTRY.parse(&json!(["#ff0000"])).unwrap();
        assert_eq!(slots, vec![Some("#ff0000".to_string()), None, None, None]);
        let slots = ENTRY.parse(&json!("#00ff00")).unwrap();
        assert_eq!(slots[0].as_deref(), Some("#00ff00"));
        let slots = ENTRY.parse(&json!(["#00ff00", null, 20, null])).unwrap();
        assert_eq!(slots, vec![Some("#00ff00".to_string()), None, Some("20".to_string()), None]);
    }

    #[test]
    fn test_arity_mismatch() {
        let err = RANGE.parse(&json!([1, 2, 3])).unwrap_err();
        match err {
            ParseError::Shape { value, expected } => {
                assert_eq!(value, "[1, 2, 3]");
                assert_eq!(expected, "[min, max]");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(RANGE.parse(&json!(5)).is_err());
        assert!(RANGE.parse(&json!("[1,2,3]")).is_err());
        assert!(ENTRY.parse(&json!([])).is_err());
        assert_eq!(ENTRY.expected(), "[color, opacity?, quantity?, label?]");
    }

    #[test]
    fn test_nested_values_are_rejected() {
        assert!(RANGE.parse(&json!([[1], 2])).is_err());
        assert!(RANGE.parse(&json!({"min": 1})).is_err());
    }

    #[test]
    fn test_protected_commas() {
        let slots = Tuple::exact(&["a", "b"]).parse(&json!("[rgb(1,2,3), '${strConcat(a, b)}']")).unwrap();
        assert_eq!(slots, some(&["rgb(1,2,3)", "${strConcat(a, b)}"]));
        let slots = Tuple::exact(&["a", "b"]).parse(&json!("['x, y', null]")).unwrap();
        assert_eq!(slots, vec![Some("x, y".to_string()), None]);
    }
}
