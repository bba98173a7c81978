//! *GYP* entries for custom command targets, written as a `'none'` target
//! holding a single action

use color_eyre::{eyre::ContextCompat, Result};
use std::fmt::Write;

use super::{dispatch::TargetGenerator, indent::indent, path_output::PathOutput, write_list};
use crate::domain::{config_group::ConfigGroup, source::SourceDir, toolchain::Toolchain};

pub struct ScriptTargetWriter;

impl TargetGenerator for ScriptTargetWriter {
    fn render(
        &self,
        group: &ConfigGroup<'_>,
        toolchain: &Toolchain,
        gyp_dir: &SourceDir,
        out: &mut String,
    ) -> Result<()> {
        let target = group.representative();
        let settings = &target.settings;
        let path_output = PathOutput::new(gyp_dir);

        let script = settings
            .script
            .as_ref()
            .with_context(|| format!("The custom target {} declares no script", target.label))?;

        writeln!(indent(out, 4), "{{")?;
        writeln!(
            indent(out, 6),
            "'target_name': {},",
            PathOutput::quoted(target.name())
        )?;
        writeln!(indent(out, 6), "'type': 'none',")?;
        writeln!(indent(out, 6), "'actions': [{{")?;
        writeln!(
            indent(out, 8),
            "'action_name': {},",
            PathOutput::quoted(&format!("{}_action", target.name()))
        )?;

        let action = [
            PathOutput::escape(&toolchain.script_interpreter),
            path_output.file(script),
        ]
        .into_iter()
        .chain(settings.args.iter().map(|arg| PathOutput::escape(arg)));
        write_list(out, 8, "action", action)?;

        let inputs = std::iter::once(script)
            .chain(settings.inputs.iter())
            .chain(settings.sources.iter())
            .map(|file| path_output.file(file));
        write_list(out, 8, "inputs", inputs)?;
        write_list(
            out,
            8,
            "outputs",
            settings.outputs.iter().map(|file| path_output.file(file)),
        )?;
        writeln!(indent(out, 8), "'msvs_cygwin_shell': 0,")?;
        writeln!(indent(out, 6), "}}],")?;

        write_list(
            out,
            6,
            "dependencies",
            settings.deps.iter().map(|dep| path_output.dependency(dep)),
        )?;

        indent(out, 4).push('}');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config_group::tests::{graph_of, item};
    use crate::domain::config_group::ConfigKey;
    use crate::domain::source::{Label, SourceFile};
    use crate::domain::target::{ItemId, OutputKind};
    use color_eyre::Result;

    #[test]
    fn test_custom_target_entry() -> Result<()> {
        let mut generator = item("//tools/gen:gen_headers", OutputKind::Custom);
        generator.settings.script = Some(SourceFile::new("//build/gen.py")?);
        generator.settings.args = vec!["--out".to_owned(), "it's".to_owned()];
        generator.settings.inputs = vec![SourceFile::new("//tools/gen/schema.json")?];
        generator.settings.outputs = vec![SourceFile::new("//out/gen/schema.h")?];
        generator.settings.deps = vec![Label::parse("//tools/gen:gen_tool")?];
        let graph = graph_of(vec![generator]);
        let group = ConfigGroup::new(&graph).with_slot(ConfigKey::DEBUG, ItemId(0));

        let mut out = String::new();
        let toolchain = Toolchain::new("default");
        ScriptTargetWriter.render(&group, &toolchain, &SourceDir::new("//tools/gen/")?, &mut out)?;

        let expected = "    {
      'target_name': 'gen_headers',
      'type': 'none',
      'actions': [{
        'action_name': 'gen_headers_action',
        'action': [
          'python',
          '../../build/gen.py',
          '--out',
          'it\\'s',
        ],
        'inputs': [
          '../../build/gen.py',
          'schema.json',
        ],
        'outputs': [
          '../../out/gen/schema.h',
        ],
        'msvs_cygwin_shell': 0,
      }],
      'dependencies': [
        'gen_tool',
      ],
    }";
        assert_eq!(out, expected);
        Ok(())
    }

    #[test]
    fn test_custom_target_without_script_fails() {
        let graph = graph_of(vec![item("//tools:gen", OutputKind::Custom)]);
        let group = ConfigGroup::new(&graph).with_slot(ConfigKey::DEBUG, ItemId(0));
        let mut out = String::new();
        assert!(ScriptTargetWriter
            .render(
                &group,
                &Toolchain::new("default"),
                &SourceDir::root(),
                &mut out
            )
            .is_err());
    }
}
