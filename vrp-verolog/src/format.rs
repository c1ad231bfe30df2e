//! Selects a reader by file type and provides file based reading.

#[cfg(test)]
#[path = "../tests/unit/format_test.rs"]
mod format_test;

use crate::common::*;
use crate::instance::{Instance, VerologInstance};
use crate::solution::{Solution, VerologSolution};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A file type of instance or solution. Only text format is supported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatKind {
    /// A VeRoLog text format.
    #[default]
    Text,
}

impl FormatKind {
    /// Resolves file type from declared type or from file extension. Unknown types fall back to
    /// text format with a warning.
    pub fn resolve(
        declared: Option<&str>,
        path: Option<&Path>,
        file_kind: &str,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        match declared {
            Some("txt") => {}
            Some(other) => diagnostics.warn(format!("Unknown {file_kind} file type: '{other}', assuming 'txt'.")),
            None => {
                let is_text = path.is_none_or(|path| path.extension().and_then(|ext| ext.to_str()) == Some("txt"));
                diagnostics.check_warning(is_text, || format!("Unknown {file_kind} file type, assuming 'txt'."));
            }
        }

        FormatKind::Text
    }
}

/// Reads instance in given format.
pub fn read_instance<R: Read>(format: FormatKind, reader: BufReader<R>, policy: FailurePolicy) -> Parsed<Instance> {
    match format {
        FormatKind::Text => reader.read_verolog_instance(policy),
    }
}

/// Reads solution of the instance in given format.
pub fn read_solution<R: Read>(
    format: FormatKind,
    reader: BufReader<R>,
    instance: &Instance,
    policy: FailurePolicy,
) -> Parsed<Solution> {
    match format {
        FormatKind::Text => reader.read_verolog_solution(instance, policy),
    }
}

/// Reads instance from the file. File type is resolved from declared type or from file extension.
pub fn read_instance_file(path: &Path, declared: Option<&str>, policy: FailurePolicy) -> Parsed<Instance> {
    read_file(path, declared, "instance", policy, |format, reader, policy| read_instance(format, reader, policy))
}

/// Reads solution of the instance from the file. File type is resolved from declared type or
/// from file extension.
pub fn read_solution_file(
    path: &Path,
    declared: Option<&str>,
    instance: &Instance,
    policy: FailurePolicy,
) -> Parsed<Solution> {
    read_file(path, declared, "solution", policy, |format, reader, policy| {
        read_solution(format, reader, instance, policy)
    })
}

fn read_file<T, F>(
    path: &Path,
    declared: Option<&str>,
    file_kind: &str,
    policy: FailurePolicy,
    read_fn: F,
) -> Parsed<T>
where
    T: Default,
    F: FnOnce(FormatKind, BufReader<File>, FailurePolicy) -> Parsed<T>,
{
    let mut diagnostics = Diagnostics::new(policy);
    let format = FormatKind::resolve(declared, Some(path), file_kind, &mut diagnostics);

    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            let mut file_kind = file_kind.to_string();
            if let Some(first) = file_kind.get_mut(..1) {
                first.make_ascii_uppercase();
            }

            let message = format!("{file_kind} file {} could not be read.", path.display());
            let _ = diagnostics.fatal(DiagnosticKind::Structural, message);

            return Parsed { value: T::default(), diagnostics };
        }
    };

    let parsed = read_fn(format, BufReader::new(file), policy);
    diagnostics.extend(parsed.diagnostics);

    Parsed { value: parsed.value, diagnostics }
}
