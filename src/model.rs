//! Data model for a parsed module spec document.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use std::path::PathBuf;

/// Complete spec document, as loaded from YAML.
#[derive(Debug, Deserialize)]
pub struct SpecDocument {
    pub module_name: String,
    pub short_description: String,
    /// Only the first entry is rendered
    #[serde(deserialize_with = "one_or_many")]
    pub description: Vec<String>,
    /// Validated by the metadata section, not at load time
    #[serde(default, rename = "ansible_metadata")]
    pub metadata: Option<Metadata>,
    /// Insertion order is the declaration order in the generated module
    pub options: IndexMap<String, OptionSpec>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub requirements: Vec<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub notes: Vec<String>,
    /// Kept untyped so the examples section can report a type mismatch
    #[serde(default, deserialize_with = "present")]
    pub examples: Option<Value>,
    #[serde(default, rename = "return", deserialize_with = "present")]
    pub return_spec: Option<Value>,
    #[serde(default)]
    pub extends_documentation_fragment: Option<String>,
    #[serde(default)]
    pub supports_check_mode: bool,
}

/// `ansible_metadata` block.
#[derive(Debug, Deserialize)]
pub struct Metadata {
    /// Emitted as a literal, e.g. `[preview]`
    pub status: Value,
    pub supported_by: Scalar,
    #[serde(default)]
    pub version: Option<Scalar>,
}

/// A single module argument.
#[derive(Debug, Deserialize)]
pub struct OptionSpec {
    #[serde(deserialize_with = "one_or_many")]
    pub description: Vec<String>,
    #[serde(default)]
    pub required: bool,
    /// `Some(Scalar::Null)` for an explicit `default: null`, `None` when absent
    #[serde(default, deserialize_with = "present")]
    pub default: Option<Scalar>,
    #[serde(default, rename = "type")]
    pub kind: Option<OptionType>,
    #[serde(default)]
    pub choices: Option<Vec<Scalar>>,
    #[serde(default)]
    pub aliases: Option<Vec<String>>,
    #[serde(default)]
    pub no_log: bool,
    #[serde(default)]
    pub version_added: Option<Scalar>,
}

/// Argument types understood by `AnsibleModule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Str,
    List,
    Dict,
    Bool,
    Int,
    Float,
    Path,
    Raw,
    Jsonarg,
    Json,
    Bytes,
    Bits,
}

impl OptionType {
    pub fn as_str(self) -> &'static str {
        match self {
            OptionType::Str => "str",
            OptionType::List => "list",
            OptionType::Dict => "dict",
            OptionType::Bool => "bool",
            OptionType::Int => "int",
            OptionType::Float => "float",
            OptionType::Path => "path",
            OptionType::Raw => "raw",
            OptionType::Jsonarg => "jsonarg",
            OptionType::Json => "json",
            OptionType::Bytes => "bytes",
            OptionType::Bits => "bits",
        }
    }
}

/// Primitive YAML value used for defaults, choices and versions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(serde_yaml::Number),
    Text(String),
}

/// Command-line inputs that shape the generated module.
#[derive(Debug, Default, Clone)]
pub struct InvocationOptions {
    pub author: Option<String>,
    pub version_added: Option<String>,
    /// Write to stdout when absent
    pub output: Option<PathBuf>,
}

impl SpecDocument {
    pub fn first_description(&self) -> &str {
        first_line(&self.description)
    }
}

impl OptionSpec {
    pub fn first_description(&self) -> &str {
        first_line(&self.description)
    }

    pub fn is_bool(&self) -> bool {
        self.kind == Some(OptionType::Bool)
    }
}

fn first_line(lines: &[String]) -> &str {
    lines.first().map(String::as_str).unwrap_or_default()
}

// -- serde helpers ------------------------------------------------------------

/// Wrap a present value in `Some`, so an explicit `null` is distinguishable
/// from a missing key (which falls back to `#[serde(default)]`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Accept `description: text` as shorthand for a one-line list.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lines {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Lines::deserialize(deserializer)? {
        Lines::One(line) => vec![line],
        Lines::Many(lines) => lines,
    })
}

/// `requirements:` with no value behaves like an empty list.
fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
