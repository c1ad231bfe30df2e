//! Contains check configuration.

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use crate::common::FailurePolicy;
use crate::utils::{GenericError, GenericResult};
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A check configuration. Missing values fall back to defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckConfig {
    /// Specifies what happens on the first failed check. Default is fail fast.
    pub policy: Option<FailurePolicy>,
    /// Specifies file type of instance and solution. Default is resolved from file extension.
    pub format: Option<String>,
    /// Skips comparison of given distances with calculated ones. Default is false.
    pub skip_distance_check: Option<bool>,
    /// Skips comparison of claimed costs with calculated ones. Default is false.
    pub skip_given_cost_check: Option<bool>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<CheckConfig> {
    serde_json::from_reader(reader).map_err(|err| GenericError::with_cause("deserialize config", err))
}
