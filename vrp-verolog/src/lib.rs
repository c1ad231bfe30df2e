//! This crate contains logic to read and check problem instances and solutions of the VeRoLog
//! solver challenge 2019: trucks deliver machines to customers within delivery windows, and
//! technicians with different skills install them afterwards.
//!
//! A solution is replayed against its instance: all constraint violations are reported and the
//! true cost is calculated together with its per-day cumulative series.
//!
//! # Supported formats
//!
//! - **txt**: a line oriented text format of the challenge for both instances and solutions
//!
//! # Examples
//!
//! ```
//! use std::io::BufReader;
//! use std::sync::Arc;
//! use vrp_verolog::check_solution;
//! use vrp_verolog::config::CheckConfig;
//! use vrp_verolog::utils::InfoLogger;
//!
//! let instance = "DATASET = demo\nNAME = empty\nDAYS = 1\nTRUCK_CAPACITY = 10\nTRUCK_MAX_DISTANCE = 100\n\
//!     TRUCK_DISTANCE_COST = 1\nTRUCK_DAY_COST = 1\nTRUCK_COST = 1\nTECHNICIAN_DISTANCE_COST = 1\n\
//!     TECHNICIAN_DAY_COST = 1\nTECHNICIAN_COST = 1\nMACHINES = 0\nLOCATIONS = 1\n1 0 0\nREQUESTS = 0\n\
//!     TECHNICIANS = 0\n";
//! let solution = "DATASET = demo\nNAME = empty\nTOTAL_COST = 0\n";
//! let logger: InfoLogger = Arc::new(|_: &str| {});
//!
//! let report = check_solution(
//!     BufReader::new(instance.as_bytes()),
//!     BufReader::new(solution.as_bytes()),
//!     &CheckConfig::default(),
//!     &logger,
//! );
//!
//! assert!(report.valid);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/integration/known_problems_test.rs"]
mod known_problems_test;

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

pub mod checker;
pub mod common;
pub mod config;
pub mod format;
pub mod instance;
pub mod solution;
pub mod utils;

use crate::common::{Diagnostics, FailurePolicy, Parsed};
use crate::config::CheckConfig;
use crate::format::*;
use crate::instance::Instance;
use crate::solution::{Solution, SolutionCost};
use crate::utils::{GenericError, GenericResult, InfoLogger, Timer};
use serde::Serialize;
use std::io::{BufReader, Read};
use std::path::Path;

/// A result of checking a solution against its instance.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    /// True if no errors were found.
    pub valid: bool,
    /// Error messages in order of discovery.
    pub errors: Vec<String>,
    /// Warning messages in order of discovery.
    pub warnings: Vec<String>,
    /// A result of comparing given distances with calculated ones, if checked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distances: Option<String>,
    /// Claimed and calculated costs, if solution was evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<SolutionCost>,
}

impl CheckReport {
    fn new(diagnostics: &Diagnostics, distances: Option<String>, cost: Option<SolutionCost>) -> Self {
        Self {
            valid: diagnostics.is_valid(),
            errors: diagnostics.error_messages(),
            warnings: diagnostics.warning_messages(),
            distances,
            cost,
        }
    }

    /// Serializes report as json string.
    pub fn to_json(&self) -> GenericResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| GenericError::with_cause("serialize report", err))
    }
}

/// Checks solution read from `solution_reader` against instance read from `instance_reader`.
/// File type is taken from config and defaults to text.
pub fn check_solution<I: Read, S: Read>(
    instance_reader: BufReader<I>,
    solution_reader: BufReader<S>,
    config: &CheckConfig,
    logger: &InfoLogger,
) -> CheckReport {
    let policy = config.policy.unwrap_or_default();
    let declared = config.format.as_deref();

    let mut diagnostics = Diagnostics::new(policy);
    let instance_format = FormatKind::resolve(declared, None, "instance", &mut diagnostics);
    let solution_format = FormatKind::resolve(declared, None, "solution", &mut diagnostics);

    run_check(
        config,
        logger,
        diagnostics,
        |policy| read_instance(instance_format, instance_reader, policy),
        |instance, policy| read_solution(solution_format, solution_reader, instance, policy),
    )
}

/// Checks solution file against instance file. File type is taken from config or resolved from
/// file extension.
pub fn check_solution_files(
    instance_path: &Path,
    solution_path: &Path,
    config: &CheckConfig,
    logger: &InfoLogger,
) -> CheckReport {
    let declared = config.format.as_deref();

    run_check(
        config,
        logger,
        Diagnostics::new(config.policy.unwrap_or_default()),
        |policy| read_instance_file(instance_path, declared, policy),
        |instance, policy| read_solution_file(solution_path, declared, instance, policy),
    )
}

fn run_check<IF, SF>(
    config: &CheckConfig,
    logger: &InfoLogger,
    mut diagnostics: Diagnostics,
    instance_fn: IF,
    solution_fn: SF,
) -> CheckReport
where
    IF: FnOnce(FailurePolicy) -> Parsed<Instance>,
    SF: FnOnce(&Instance, FailurePolicy) -> Parsed<Solution>,
{
    let policy = diagnostics.policy();

    let Parsed { value: instance, diagnostics: instance_diagnostics } = Timer::measure_duration_with_callback(
        || instance_fn(policy),
        |duration| (logger)(&format!("instance read in {}ms", duration.as_millis())),
    );
    diagnostics.extend(instance_diagnostics);

    if !diagnostics.is_valid() {
        (logger)("instance is invalid, solution is not checked");
        return CheckReport::new(&diagnostics, None, None);
    }

    let distances = if config.skip_distance_check.unwrap_or(false) {
        None
    } else {
        Timer::measure_duration_with_callback(
            || instance.distances().size(),
            |duration| (logger)(&format!("distance matrix created in {}ms", duration.as_millis())),
        );

        let distance_check = instance.check_distances();
        if !distance_check.is_valid() {
            diagnostics.warn(distance_check.to_string());
        }

        Some(distance_check.to_string())
    };

    let Parsed { value: mut solution, diagnostics: solution_diagnostics } = Timer::measure_duration_with_callback(
        || solution_fn(&instance, policy),
        |duration| (logger)(&format!("solution read in {}ms", duration.as_millis())),
    );
    diagnostics.extend(solution_diagnostics);

    if !diagnostics.is_valid() {
        (logger)("solution is invalid, its cost is not calculated");
        return CheckReport::new(&diagnostics, distances, None);
    }

    let is_evaluated = Timer::measure_duration_with_callback(
        || solution.evaluate(&instance, &mut diagnostics).is_some(),
        |duration| (logger)(&format!("solution evaluated in {}ms", duration.as_millis())),
    );

    if diagnostics.is_valid() && !config.skip_given_cost_check.unwrap_or(false) {
        solution.compare_given_costs(&mut diagnostics);
    }

    (logger)(&format!(
        "solution is {}: {} error(s), {} warning(s)",
        if diagnostics.is_valid() { "valid" } else { "invalid" },
        diagnostics.errors().len(),
        diagnostics.warnings().len()
    ));

    CheckReport::new(&diagnostics, distances, is_evaluated.then_some(solution.cost))
}
