//! Renders source absolute paths as *GYP* string literals relative to the
//! directory of the *GYP* file being written

use crate::domain::source::{Label, SourceDir, SourceFile};

/// All the paths of a *GYP* file are relative to the directory of the file
#[derive(Debug, Clone)]
pub struct PathOutput {
    gyp_dir: SourceDir,
}

impl PathOutput {
    pub fn new(gyp_dir: &SourceDir) -> Self {
        Self {
            gyp_dir: gyp_dir.clone(),
        }
    }

    /// Escapes `value` so it can be placed between single quotes
    pub fn escape(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len());
        for c in value.chars() {
            match c {
                '\\' => escaped.push_str("\\\\"),
                '\'' => escaped.push_str("\\'"),
                '\n' => escaped.push_str("\\n"),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    /// The quoted and escaped `value`
    pub fn quoted(value: &str) -> String {
        format!("'{}'", Self::escape(value))
    }

    pub fn file(&self, file: &SourceFile) -> String {
        let mut components: Vec<&str> = file
            .relative_to_source_root()
            .split('/')
            .filter(|c| !c.is_empty())
            .collect();
        let name = components.pop().unwrap_or_default();

        let mut relative = self.relative_dir(&components);
        relative.push(name);
        Self::escape(&relative.join("/"))
    }

    pub fn dir(&self, dir: &SourceDir) -> String {
        let components: Vec<&str> = dir.components().collect();
        let relative = self.relative_dir(&components);
        if relative.is_empty() {
            ".".to_owned()
        } else {
            Self::escape(&relative.join("/"))
        }
    }

    /// The *GYP* reference to the target named by `label`: `<gyp file>:<name>`.
    /// Targets written on the current file are referenced by their bare name
    pub fn dependency(&self, label: &Label) -> String {
        if label.dir == self.gyp_dir {
            Self::escape(&label.name)
        } else {
            format!(
                "{}:{}",
                self.file(&label.gyp_file()),
                Self::escape(&label.name)
            )
        }
    }

    /// Walks from the *GYP* directory up to the common ancestor with `target`,
    /// then down to it
    fn relative_dir<'t>(&self, target: &[&'t str]) -> Vec<&'t str> {
        let base: Vec<&str> = self.gyp_dir.components().collect();
        let common = base
            .iter()
            .zip(target)
            .take_while(|(a, b)| a == b)
            .count();

        std::iter::repeat("..")
            .take(base.len() - common)
            .chain(target[common..].iter().copied())
            .collect()
    }
}
