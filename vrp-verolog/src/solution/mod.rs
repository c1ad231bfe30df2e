//! Contains the solution model together with its text reader and writer.

#[cfg(test)]
#[path = "../../tests/unit/solution/solution_test.rs"]
mod solution_test;

mod cost;
pub use self::cost::*;

mod reader;
pub use self::reader::VerologSolution;

mod writer;
pub use self::writer::write_solution;

use crate::checker::{CheckerContext, compare_given_costs};
use crate::common::Diagnostics;
use crate::instance::Instance;

/// Keywords of the solution text format which are not cost fields.
pub(crate) mod keywords {
    pub const DATASET: &str = "DATASET";
    pub const NAME: &str = "NAME";
    pub const DAY: &str = "DAY";
    pub const NUMBER_OF_TRUCKS: &str = "NUMBER_OF_TRUCKS";
    pub const NUMBER_OF_TECHNICIANS: &str = "NUMBER_OF_TECHNICIANS";
}

/// A truck route. Request id `0` means a visit to the depot to reload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TruckRoute {
    /// Truck id.
    pub id: i64,
    /// Request ids in visiting order.
    pub route: Vec<i64>,
}

/// A technician route which starts and ends at technician's home.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TechnicianRoute {
    /// Technician id.
    pub id: i64,
    /// Request ids in installation order.
    pub route: Vec<i64>,
}

/// Routes of a single day.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolutionDay {
    /// Day number, starts from 1.
    pub day: i64,
    /// Amount of truck routes declared in the solution.
    pub declared_trucks: i64,
    /// Truck routes.
    pub truck_routes: Vec<TruckRoute>,
    /// Amount of technician routes declared in the solution.
    pub declared_technicians: i64,
    /// Technician routes.
    pub technician_routes: Vec<TechnicianRoute>,
}

/// A solution of VeRoLog problem.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    /// Dataset name.
    pub dataset: String,
    /// Instance name.
    pub name: String,
    /// Days with routes in ascending order.
    pub days: Vec<SolutionDay>,
    /// Claimed and calculated costs.
    pub cost: SolutionCost,
}

impl Solution {
    /// Replays the solution against the instance, records findings and keeps the calculated
    /// cost. Returns `None` when evaluation was aborted.
    pub fn evaluate(&mut self, instance: &Instance, diagnostics: &mut Diagnostics) -> Option<&CalculatedCost> {
        let calculated = CheckerContext::new(instance, self).evaluate(diagnostics);
        self.cost.calculated = calculated;

        self.cost.calculated.as_ref()
    }

    /// Compares claimed costs with calculated ones, each difference is reported as a warning.
    /// Returns false if there is any difference or the solution was not evaluated.
    pub fn compare_given_costs(&self, diagnostics: &mut Diagnostics) -> bool {
        self.cost
            .calculated
            .as_ref()
            .is_some_and(|calculated| compare_given_costs(&self.cost.given, calculated, diagnostics))
    }
}
