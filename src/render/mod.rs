//! Section renderers — fixed-order generation pipeline.

pub mod argspec;
pub mod blocks;
pub mod body;
pub mod documentation;
pub mod literal;
pub mod preamble;

use crate::buffer::OutputBuffer;
use crate::error::CompileResult;
use crate::model::{InvocationOptions, SpecDocument};
use tracing::debug;

/// Closing marker for the triple-quoted Python string blocks.
pub const TRIPLE_QUOTE: &str = "\"\"\"";

/// One named block of the generated module.
pub trait Section {
    fn name(&self) -> &'static str;

    /// Validate the parts of `doc` this section needs and append its lines.
    fn render(
        &self,
        doc: &SpecDocument,
        options: &InvocationOptions,
        out: &mut OutputBuffer,
    ) -> CompileResult<()>;
}

/// Every section, in output order.
pub const SECTIONS: &[&dyn Section] = &[
    &preamble::Shebang,
    &preamble::License,
    &preamble::MetadataBlock,
    &documentation::DocumentationBlock,
    &blocks::EXAMPLES,
    &blocks::RETURN,
    &preamble::Imports,
    &body::Body,
];

/// Render the complete module skeleton.
///
/// Stops at the first failing section; nothing is returned on error.
pub fn compile(doc: &SpecDocument, options: &InvocationOptions) -> CompileResult<String> {
    let mut out = OutputBuffer::new();
    for section in SECTIONS {
        section.render(doc, options, &mut out)?;
        debug!(section = section.name(), lines = out.len(), "rendered section");
    }
    Ok(out.contents())
}
