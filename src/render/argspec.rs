//! Serialize one option into an `argument_spec` entry.

use super::literal;
use crate::error::{CompileError, CompileResult};
use crate::model::{OptionSpec, OptionType, Scalar};
use tracing::debug;

/// Build `name=dict(...)` for one option, without the trailing separator.
///
/// Clause order: `type`, `default`, `choices`, `aliases`, `no_log`.
/// `type='str'` is implied and never emitted. Boolean options take a
/// strictly boolean default and never list choices.
pub fn serialize(name: &str, option: &OptionSpec) -> CompileResult<String> {
    let mut clauses: Vec<String> = Vec::new();

    if let Some(kind) = option.kind.filter(|k| *k != OptionType::Str) {
        clauses.push(format!("type='{}'", kind.as_str()));
    }

    match option.default {
        None | Some(Scalar::Null) => {}
        Some(Scalar::Bool(value)) if option.is_bool() => {
            clauses.push(format!("default={}", literal::py_bool(value)));
        }
        Some(ref other) if option.is_bool() => {
            return Err(CompileError::InvalidBoolDefault {
                option: name.to_string(),
                found: literal::py_str(other),
            });
        }
        Some(ref value) => {
            clauses.push(format!("default={}", literal::py_string(&literal::py_str(value))));
        }
    }

    if let Some(ref choices) = option.choices {
        if !option.is_bool() {
            let items = choices.iter().map(literal::py_repr);
            clauses.push(format!("choices={}", literal::py_list(items)));
        }
    }

    if let Some(ref aliases) = option.aliases {
        let items = aliases.iter().map(|a| literal::py_string(a));
        clauses.push(format!("aliases={}", literal::py_list(items)));
    }

    if option.no_log {
        clauses.push("no_log=True".to_string());
    }

    debug!(option = name, clauses = clauses.len(), "serialized option");
    Ok(format!("{}=dict({})", name, clauses.join(", ")))
}
