//! Executable `main()` skeleton.

use super::{argspec, literal, Section};
use crate::buffer::OutputBuffer;
use crate::error::CompileResult;
use crate::model::{InvocationOptions, SpecDocument};

/// Column that lines continuation arguments up under `AnsibleModule(`.
const MODULE_ARGS_INDENT: usize = 27;

pub struct Body;

impl Section for Body {
    fn name(&self) -> &'static str {
        "body"
    }

    fn render(
        &self,
        doc: &SpecDocument,
        _: &InvocationOptions,
        out: &mut OutputBuffer,
    ) -> CompileResult<()> {
        out.blank();
        out.append("def main():", 0);
        out.append("\"\"\"main entry point for module execution", 4);
        out.append("\"\"\"", 4);
        out.append("argument_spec = dict(", 4);

        let last = doc.options.len().saturating_sub(1);
        for (index, (name, option)) in doc.options.iter().enumerate() {
            let mut entry = argspec::serialize(name, option)?;
            if index != last {
                entry.push(',');
            }
            out.append(&entry, 8);
        }

        out.append(")", 4);
        out.blank();
        out.append("module = AnsibleModule(argument_spec=argument_spec,", 4);
        out.append(
            &format!(
                "supports_check_mode={})",
                literal::py_bool(doc.supports_check_mode)
            ),
            MODULE_ARGS_INDENT,
        );
        out.blank();
        // Placeholder for the module author to replace.
        out.append("module.fail_json(msg='not implemented')", 4);
        out.blank();
        out.append("if __name__ == \"__main__\":", 0);
        out.append("main()", 4);
        Ok(())
    }
}
