#[cfg(test)]
#[path = "../../tests/unit/common/text_reader_test.rs"]
mod text_reader_test;

use super::*;
use crate::utils::GenericError;
use std::io::prelude::*;
use std::io::{BufReader, Read};

/// Reads a model from line oriented text and collects findings on the way.
pub(crate) trait TextReader<T> {
    /// Reads the whole content. An abort leaves the model partially populated.
    fn read(mut self, policy: FailurePolicy) -> Parsed<T>
    where
        Self: Sized,
    {
        let mut diagnostics = Diagnostics::new(policy);

        // NOTE the reason of abort is already in diagnostics
        let _ = self.read_content(&mut diagnostics);

        Parsed { value: self.into_value(), diagnostics }
    }

    /// Reads content, stops on the first abort.
    fn read_content(&mut self, diagnostics: &mut Diagnostics) -> CheckResult<()>;

    /// Returns the model read so far.
    fn into_value(self) -> T;
}

/// A classified non blank line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Line {
    /// A `KEY = value` line.
    Assignment { key: String, value: String },
    /// Any other line.
    Data(String),
}

/// Reads non blank, trimmed lines.
pub(crate) struct LineReader<R: Read> {
    reader: BufReader<R>,
    buffer: String,
}

impl<R: Read> LineReader<R> {
    pub fn new(reader: BufReader<R>) -> Self {
        Self { reader, buffer: String::new() }
    }

    /// Returns next non blank line or `None` at the end of input.
    pub fn next_line(&mut self, diagnostics: &mut Diagnostics) -> CheckResult<Option<String>> {
        loop {
            match read_line(&mut self.reader, &mut self.buffer) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    let line = self.buffer.trim();
                    if !line.is_empty() {
                        return Ok(Some(line.to_string()));
                    }
                }
                Err(err) => {
                    return Err(diagnostics.fatal(DiagnosticKind::Structural, format!("cannot read line: '{err}'")));
                }
            }
        }
    }

    /// Returns next non blank line classified as assignment or data, `None` at the end of input.
    pub fn next_entry(&mut self, diagnostics: &mut Diagnostics) -> CheckResult<Option<Line>> {
        Ok(self.next_line(diagnostics)?.map(|line| match split_assignment(line.as_str()) {
            Some((key, value)) => Line::Assignment { key: key.to_string(), value: value.to_string() },
            None => Line::Data(line),
        }))
    }

    /// Reads `key = value` line with the expected key and returns its value.
    pub fn expect_assignment(
        &mut self,
        key: &str,
        field_type: &str,
        diagnostics: &mut Diagnostics,
    ) -> CheckResult<String> {
        let line = self.next_line(diagnostics)?.unwrap_or_default();
        let message_fn = || format!("Expected header line of the form '{key} = {field_type}'. Found: '{line}'.");

        match split_assignment(line.as_str()) {
            Some((actual, value)) if actual == key => Ok(value.to_string()),
            Some((_, value)) => diagnostics.error(DiagnosticKind::Structural, message_fn()).map(|_| value.to_string()),
            None => Err(diagnostics.fatal(DiagnosticKind::Structural, message_fn())),
        }
    }

    /// Reads `key = number` line with the expected key and returns its value.
    pub fn expect_int_assignment(
        &mut self,
        key: &str,
        field: &str,
        diagnostics: &mut Diagnostics,
    ) -> CheckResult<i64> {
        let value = self.expect_assignment(key, "number", diagnostics)?;
        parse_int(field, value.as_str(), "", diagnostics)
    }
}

pub(crate) fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> Result<usize, GenericError> {
    buffer.clear();
    reader.read_line(buffer).map_err(|err| err.to_string().into())
}

/// Splits `KEY = value` line into key and value. The value is the rest of the line.
pub(crate) fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let (key, rest) = line.trim().split_once(char::is_whitespace)?;
    let (equals, value) = rest.trim_start().split_once(char::is_whitespace)?;
    let value = value.trim();

    if equals == "=" && !value.is_empty() { Some((key, value)) } else { None }
}

/// Parses an integer token. A non integer token leaves nothing to continue with, so it always aborts.
pub(crate) fn parse_int(field: &str, token: &str, extra: &str, diagnostics: &mut Diagnostics) -> CheckResult<i64> {
    token.parse::<i64>().map_err(|_| {
        diagnostics.fatal(DiagnosticKind::Structural, format!("{field} ({token}) {extra}is not an integer."))
    })
}
