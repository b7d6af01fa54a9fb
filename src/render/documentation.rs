//! `DOCUMENTATION` block — YAML describing the module and its options.

use super::{literal, Section, TRIPLE_QUOTE};
use crate::buffer::OutputBuffer;
use crate::error::{CompileError, CompileResult};
use crate::model::{InvocationOptions, OptionSpec, SpecDocument};
use crate::wrap::{wrap, WRAP_WIDTH};

pub struct DocumentationBlock;

impl Section for DocumentationBlock {
    fn name(&self) -> &'static str {
        "documentation"
    }

    fn render(
        &self,
        doc: &SpecDocument,
        options: &InvocationOptions,
        out: &mut OutputBuffer,
    ) -> CompileResult<()> {
        out.append(&format!("DOCUMENTATION = {TRIPLE_QUOTE}"), 0);
        out.append("---", 0);
        out.append(&format!("module: {}", doc.module_name), 0);

        // Only the command line sets these, never the spec file.
        if let Some(ref version) = options.version_added {
            out.append(&format!("version_added: \"{}\"", version), 0);
        }
        if let Some(ref author) = options.author {
            out.append(&format!("author: \"{}\"", author), 0);
        }

        out.append(&format!("short_description: {}", doc.short_description), 0);
        out.append("description:", 0);
        render_wrapped(out, doc.first_description(), 2);

        if let Some(ref fragment) = doc.extends_documentation_fragment {
            out.append(&format!("extends_documentation_fragment: {}", fragment), 0);
        }

        out.append("options:", 0);
        for (name, option) in &doc.options {
            render_option(out, name, option)?;
        }

        if !doc.requirements.is_empty() {
            render_list(out, "requirements", &doc.requirements, 0);
        }
        if !doc.notes.is_empty() {
            render_list(out, "notes", &doc.notes, 0);
        }

        out.append(TRIPLE_QUOTE, 0);
        Ok(())
    }
}

/// Render one entry of the `options:` mapping.
fn render_option(out: &mut OutputBuffer, name: &str, option: &OptionSpec) -> CompileResult<()> {
    out.append(&format!("{}:", name), 2);
    out.append("description:", 4);
    render_wrapped(out, option.first_description(), 6);

    if option.required {
        out.append("required: true", 4);
        if option.default.is_none() {
            return Err(CompileError::RequiredWithoutDefault(name.to_string()));
        }
    }

    if let Some(ref default) = option.default {
        out.append(&format!("default: {}", literal::yaml(default)), 4);
    }

    if let Some(ref choices) = option.choices {
        let items: Vec<String> = choices.iter().map(literal::yaml).collect();
        render_list(out, "choices", &items, 4);
    }

    if let Some(ref aliases) = option.aliases {
        render_list(out, "aliases", aliases, 4);
    }

    if let Some(ref version) = option.version_added {
        out.append(&format!("version_added: '{}'", literal::py_str(version)), 4);
    }

    Ok(())
}

/// Wrapped text as a one-item list: `- ` on the first line, continuation
/// lines two columns deeper.
fn render_wrapped(out: &mut OutputBuffer, text: &str, indent: usize) {
    for (index, line) in wrap(text, WRAP_WIDTH).iter().enumerate() {
        if index == 0 {
            out.append(&format!("- {}", line), indent);
        } else {
            out.append(line, indent + 2);
        }
    }
}

/// `key:` followed by a bulleted list.
fn render_list(out: &mut OutputBuffer, key: &str, items: &[String], indent: usize) {
    out.append(&format!("{}:", key), indent);
    for item in items {
        out.append(&format!("- {}", item), indent + 2);
    }
}
