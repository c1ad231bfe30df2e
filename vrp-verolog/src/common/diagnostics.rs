#[cfg(test)]
#[path = "../../tests/unit/common/diagnostics_test.rs"]
mod diagnostics_test;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Specifies what happens when a check fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FailurePolicy {
    /// The first failed check stops the current operation.
    #[default]
    FailFast,
    /// Failed checks are recorded and the operation continues on a best-effort basis.
    Tolerant,
}

/// A category of a finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticKind {
    /// Wrong token count, non-integer token, missing or misplaced keyword, or a value which
    /// cannot be represented, such as an overflowing cost.
    Structural,
    /// An id outside of its declared range or an indexing mismatch.
    Referential,
    /// A violated capacity, distance, time, skill or work schedule rule.
    Constraint,
    /// Claimed and calculated values disagree or declared counts are off. Never fatal.
    Consistency,
}

/// A single finding produced by readers or checker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// A finding category.
    pub kind: DiagnosticKind,
    /// A human readable message.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// A marker which signals that processing has to stop. The reason is already recorded
/// in [`Diagnostics`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aborted;

/// A result type used by all checks.
pub type CheckResult<T> = Result<T, Aborted>;

/// An ordered, append-only sink of errors and warnings.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Diagnostics {
    #[serde(skip)]
    policy: FailurePolicy,
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates a new instance of `Diagnostics`.
    pub fn new(policy: FailurePolicy) -> Self {
        Self { policy, errors: Vec::default(), warnings: Vec::default() }
    }

    /// Returns failure policy.
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Records an error when `test` is false. Message is evaluated lazily.
    pub fn check<F>(&mut self, kind: DiagnosticKind, test: bool, message_fn: F) -> CheckResult<()>
    where
        F: FnOnce() -> String,
    {
        if test { Ok(()) } else { self.error(kind, message_fn()) }
    }

    /// Records an error and aborts if policy requires so.
    pub fn error(&mut self, kind: DiagnosticKind, message: String) -> CheckResult<()> {
        self.errors.push(Diagnostic { kind, message });

        match self.policy {
            FailurePolicy::FailFast => Err(Aborted),
            FailurePolicy::Tolerant => Ok(()),
        }
    }

    /// Records an error which makes further processing impossible regardless of policy.
    pub fn fatal(&mut self, kind: DiagnosticKind, message: String) -> Aborted {
        self.errors.push(Diagnostic { kind, message });
        Aborted
    }

    /// Records a warning when `test` is false. Returns `test`.
    pub fn check_warning<F>(&mut self, test: bool, message_fn: F) -> bool
    where
        F: FnOnce() -> String,
    {
        if !test {
            self.warn(message_fn());
        }

        test
    }

    /// Records a warning.
    pub fn warn(&mut self, message: String) {
        self.warnings.push(Diagnostic { kind: DiagnosticKind::Consistency, message });
    }

    /// Returns true if no errors were recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns recorded errors in order of discovery.
    pub fn errors(&self) -> &[Diagnostic] {
        self.errors.as_slice()
    }

    /// Returns recorded warnings in order of discovery.
    pub fn warnings(&self) -> &[Diagnostic] {
        self.warnings.as_slice()
    }

    /// Returns error messages.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.message.clone()).collect()
    }

    /// Returns warning messages.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(|warning| warning.message.clone()).collect()
    }

    /// Moves all findings from other sink into this one, keeping their order.
    pub fn extend(&mut self, other: Diagnostics) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Keeps a value produced by a reader together with findings collected while reading it.
/// When reading was aborted, the value is partially populated.
#[derive(Debug)]
pub struct Parsed<T> {
    /// A read (possibly partial) value.
    pub value: T,
    /// Findings collected while reading.
    pub diagnostics: Diagnostics,
}

impl<T> Parsed<T> {
    /// Returns true if no errors were found.
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_valid()
    }
}
