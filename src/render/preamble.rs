//! Fixed leading and import sections, plus `ANSIBLE_METADATA`.

use super::literal;
use super::Section;
use crate::buffer::OutputBuffer;
use crate::error::{CompileError, CompileResult};
use crate::model::{InvocationOptions, SpecDocument};

const LICENSE: &str = "#
# This file is part of Ansible
#
# Ansible is free software: you can redistribute it and/or modify
# it under the terms of the GNU General Public License as published by
# the Free Software Foundation, either version 3 of the License, or
# (at your option) any later version.
#
# Ansible is distributed in the hope that it will be useful,
# but WITHOUT ANY WARRANTY; without even the implied warranty of
# MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
# GNU General Public License for more details.
#
# You should have received a copy of the GNU General Public License
# along with Ansible.  If not, see <http://www.gnu.org/licenses/>.
#
";

const DEFAULT_METADATA_VERSION: &str = "1.0";

pub struct Shebang;

impl Section for Shebang {
    fn name(&self) -> &'static str {
        "shebang"
    }

    fn render(
        &self,
        _: &SpecDocument,
        _: &InvocationOptions,
        out: &mut OutputBuffer,
    ) -> CompileResult<()> {
        out.append("#!/usr/bin/python", 0);
        Ok(())
    }
}

/// GPLv3 notice. The text carries its own trailing newline, so a blank
/// line follows it.
pub struct License;

impl Section for License {
    fn name(&self) -> &'static str {
        "license"
    }

    fn render(
        &self,
        _: &SpecDocument,
        _: &InvocationOptions,
        out: &mut OutputBuffer,
    ) -> CompileResult<()> {
        out.append(LICENSE, 0);
        Ok(())
    }
}

pub struct MetadataBlock;

impl Section for MetadataBlock {
    fn name(&self) -> &'static str {
        "metadata"
    }

    fn render(
        &self,
        doc: &SpecDocument,
        _: &InvocationOptions,
        out: &mut OutputBuffer,
    ) -> CompileResult<()> {
        let metadata = doc
            .metadata
            .as_ref()
            .ok_or(CompileError::MissingSection("ansible_metadata"))?;

        let version = metadata
            .version
            .as_ref()
            .map(literal::py_str)
            .unwrap_or_else(|| DEFAULT_METADATA_VERSION.to_string());

        out.append("ANSIBLE_METADATA = {", 0);
        out.append(&format!("'status': {},", literal::as_is(&metadata.status)), 4);
        out.append(
            &format!("'supported_by': '{}',", literal::py_str(&metadata.supported_by)),
            4,
        );
        out.append(&format!("'version': '{}'", version), 4);
        out.append("}", 0);
        out.blank();
        Ok(())
    }
}

pub struct Imports;

impl Section for Imports {
    fn name(&self) -> &'static str {
        "imports"
    }

    fn render(
        &self,
        _: &SpecDocument,
        _: &InvocationOptions,
        out: &mut OutputBuffer,
    ) -> CompileResult<()> {
        out.append("from ansible.module_utils.basic import AnsibleModule", 0);
        Ok(())
    }
}
