//! Verbatim text sections (`EXAMPLES`, `RETURN`).

use super::{literal, Section, TRIPLE_QUOTE};
use crate::buffer::OutputBuffer;
use crate::error::{CompileError, CompileResult};
use crate::model::{InvocationOptions, SpecDocument};
use serde_yaml::Value;

/// A required string field copied, stripped, into a triple-quoted
/// Python assignment.
pub struct TextBlock {
    name: &'static str,
    /// Key in the spec document
    key: &'static str,
    /// Section label used in diagnostics
    label: &'static str,
    /// Python variable assigned in the output
    variable: &'static str,
    field: fn(&SpecDocument) -> Option<&Value>,
}

pub const EXAMPLES: TextBlock = TextBlock {
    name: "example",
    key: "examples",
    label: "EXAMPLE",
    variable: "EXAMPLES",
    field: examples,
};

pub const RETURN: TextBlock = TextBlock {
    name: "return",
    key: "return",
    label: "RETURN",
    variable: "RETURN",
    field: return_spec,
};

fn examples(doc: &SpecDocument) -> Option<&Value> {
    doc.examples.as_ref()
}

fn return_spec(doc: &SpecDocument) -> Option<&Value> {
    doc.return_spec.as_ref()
}

impl Section for TextBlock {
    fn name(&self) -> &'static str {
        self.name
    }

    fn render(
        &self,
        doc: &SpecDocument,
        _: &InvocationOptions,
        out: &mut OutputBuffer,
    ) -> CompileResult<()> {
        let text = match (self.field)(doc) {
            None => return Err(CompileError::MissingSection(self.label)),
            Some(Value::String(text)) => text,
            Some(other) => {
                return Err(CompileError::TypeMismatch {
                    field: self.key,
                    expected: "string",
                    found: literal::kind_of(other),
                })
            }
        };

        out.blank();
        out.append(&format!("{} = {TRIPLE_QUOTE}", self.variable), 0);
        out.append(text.trim(), 0);
        out.append(TRIPLE_QUOTE, 0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> SpecDocument {
        serde_yaml::from_str(&format!(
            "module_name: m\nshort_description: s\ndescription: [d]\noptions: {{}}\n{yaml}"
        ))
        .unwrap()
    }

    fn render(block: &TextBlock, doc: &SpecDocument) -> CompileResult<String> {
        let mut out = OutputBuffer::new();
        block.render(doc, &InvocationOptions::default(), &mut out)?;
        Ok(out.contents())
    }

    #[test]
    fn examples_are_stripped_and_quoted() {
        let doc = parse("examples: |\n\n  - name: ping the host\n    ping:\n\n");
        assert_eq!(
            render(&EXAMPLES, &doc).unwrap(),
            "\nEXAMPLES = \"\"\"\n- name: ping the host\n  ping:\n\"\"\"\n"
        );
    }

    #[test]
    fn return_block() {
        let doc = parse("return: 'ping: {description: output, returned: always}'");
        assert_eq!(
            render(&RETURN, &doc).unwrap(),
            "\nRETURN = \"\"\"\nping: {description: output, returned: always}\n\"\"\"\n"
        );
    }

    #[test]
    fn missing_examples() {
        let doc = parse("return: x");
        let err = render(&EXAMPLES, &doc).unwrap_err();
        assert_eq!(err.to_string(), "missing required section EXAMPLE");
    }

    #[test]
    fn missing_return() {
        let doc = parse("examples: x");
        let err = render(&RETURN, &doc).unwrap_err();
        assert_eq!(err.to_string(), "missing required section RETURN");
    }

    #[test]
    fn examples_must_be_text() {
        let doc = parse("examples:\n  - ping: {}\n");
        let err = render(&EXAMPLES, &doc).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for examples, expected string, got sequence"
        );
    }

    #[test]
    fn null_return_is_a_type_mismatch() {
        let doc = parse("return: ~");
        let err = render(&RETURN, &doc).unwrap_err();
        assert!(matches!(
            err,
            CompileError::TypeMismatch { field: "return", found: "null", .. }
        ));
    }

    #[test]
    fn section_names() {
        assert_eq!(EXAMPLES.name(), "example");
        assert_eq!(RETURN.name(), "return");
    }
}
