//! Literal forms of spec values, for the YAML documentation block and for
//! Python source.

use crate::model::Scalar;
use serde_yaml::Value;

/// Documentation form: `true`/`false`, `null`, otherwise the plain value.
pub fn yaml(value: &Scalar) -> String {
    match value {
        Scalar::Null => "null".to_string(),
        Scalar::Bool(b) => b.to_string(),
        Scalar::Number(n) => n.to_string(),
        Scalar::Text(s) => s.clone(),
    }
}

/// Python `str()` form: `True`/`False`, `None`, otherwise the plain value.
pub fn py_str(value: &Scalar) -> String {
    match value {
        Scalar::Null => "None".to_string(),
        Scalar::Bool(b) => py_bool(*b).to_string(),
        Scalar::Number(n) => n.to_string(),
        Scalar::Text(s) => s.clone(),
    }
}

/// Python source literal for a scalar.
pub fn py_repr(value: &Scalar) -> String {
    match value {
        Scalar::Text(s) => py_string(s),
        other => py_str(other),
    }
}

pub fn py_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Quote `s` as a Python string literal.
///
/// Single quotes unless the text contains a single quote and no double quote.
pub fn py_string(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Python list literal from already-rendered items.
pub fn py_list<I>(items: I) -> String
where
    I: IntoIterator<Item = String>,
{
    format!("[{}]", items.into_iter().collect::<Vec<_>>().join(", "))
}

/// Caller-supplied value emitted without quoting; sequences become `[a, b]`.
pub fn as_is(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(b) => py_bool(*b).to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => format!(
            "[{}]",
            items.iter().map(as_is).collect::<Vec<_>>().join(", ")
        ),
        Value::Mapping(map) => format!(
            "{{{}}}",
            map.iter()
                .map(|(k, v)| format!("{}: {}", as_is(k), as_is(v)))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Value::Tagged(tagged) => as_is(&tagged.value),
    }
}

/// Name of a YAML value's kind, for type-mismatch diagnostics.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
