//! This module provides functionality to replay a solution against its instance: it checks that
//! there is no constraint violation and calculates the true cost of the solution.

#[cfg(test)]
#[path = "../../tests/unit/checker/checker_test.rs"]
mod checker_test;

mod costs;
pub(crate) use self::costs::compare_given_costs;
use self::costs::calculate_costs;

mod requests;
use self::requests::check_requests;

mod schedule;
use self::schedule::check_work_schedules;

mod technicians;
use self::technicians::check_technician_routes;

mod trucks;
use self::trucks::check_truck_routes;

use crate::common::*;
use crate::instance::*;
use crate::solution::*;

/// Stores instance and solution together and provides some helper methods.
pub struct CheckerContext<'a> {
    /// A problem instance.
    pub instance: &'a Instance,
    /// A solution to be checked.
    pub solution: &'a Solution,
}

/// Keeps what has happened while replaying the solution. Per day values are indexed by day index
/// within the planning horizon, working days are kept per technician as sorted day numbers.
struct EvaluationState {
    delivered: Vec<Option<i64>>,
    installed: Vec<Option<i64>>,
    truck_distances: Vec<i64>,
    truck_routes: Vec<i64>,
    technician_distances: Vec<i64>,
    technician_routes: Vec<i64>,
    working_days: Vec<Vec<i64>>,
    idle_machine_cost: i64,
}

impl<'a> CheckerContext<'a> {
    /// Creates an instance of `CheckerContext`.
    pub fn new(instance: &'a Instance, solution: &'a Solution) -> Self {
        Self { instance, solution }
    }

    /// Replays the solution. Returns calculated cost or `None` when evaluation was aborted.
    /// In tolerant mode, cost is calculated even if some constraints are violated.
    pub fn evaluate(&self, diagnostics: &mut Diagnostics) -> Option<CalculatedCost> {
        self.evaluate_solution(diagnostics).ok()
    }

    fn evaluate_solution(&self, diagnostics: &mut Diagnostics) -> CheckResult<CalculatedCost> {
        let days = self.instance.days;
        if !(0..=MAX_DAYS).contains(&days) {
            return Err(diagnostics.fatal(
                DiagnosticKind::Structural,
                format!("Horizon of {days} days is outside of the supported range (0..{MAX_DAYS}), cannot continue."),
            ));
        }

        let mut state = EvaluationState::new(self.instance);

        for day in self.solution.days.iter() {
            let day_idx = self.get_day_index(day.day, diagnostics)?;

            check_truck_routes(self, day, day_idx, &mut state, diagnostics)?;
            check_technician_routes(self, day, day_idx, &mut state, diagnostics)?;
        }

        check_requests(self, &mut state, diagnostics)?;
        check_work_schedules(&state, diagnostics)?;

        calculate_costs(self, &state, diagnostics)
    }

    fn get_day_index(&self, day: i64, diagnostics: &mut Diagnostics) -> CheckResult<usize> {
        let days = self.instance.days;

        to_index(day).filter(|_| day <= days).ok_or_else(|| {
            diagnostics.fatal(
                DiagnosticKind::Structural,
                format!("Day {day} is outside of the horizon (1..{days}), cannot continue."),
            )
        })
    }

    /// Gets request and its index by request id.
    fn get_request(&self, id: i64, day: i64, diagnostics: &mut Diagnostics) -> CheckResult<(usize, &'a Request)> {
        to_index(id).zip(self.instance.request(id)).ok_or_else(|| {
            let message = format!("Unknown request {id} (day {day}), cannot continue.");
            diagnostics.fatal(DiagnosticKind::Referential, message)
        })
    }

    /// Gets technician and its index by technician id.
    fn get_technician(
        &self,
        id: i64,
        day: i64,
        diagnostics: &mut Diagnostics,
    ) -> CheckResult<(usize, &'a Technician)> {
        to_index(id).zip(self.instance.technician(id)).ok_or_else(|| {
            let message = format!("Unknown technician {id} (day {day}), cannot continue.");
            diagnostics.fatal(DiagnosticKind::Referential, message)
        })
    }

    fn get_machine(&self, request: &Request, diagnostics: &mut Diagnostics) -> CheckResult<&'a Machine> {
        self.instance.machine(request.machine_id).ok_or_else(|| {
            diagnostics.fatal(
                DiagnosticKind::Referential,
                format!("Unknown machine type {} of request {}, cannot continue.", request.machine_id, request.id),
            )
        })
    }

    fn get_distance(&self, from: i64, to: i64, diagnostics: &mut Diagnostics) -> CheckResult<i64> {
        self.instance.distance(from, to).ok_or_else(|| {
            diagnostics.fatal(
                DiagnosticKind::Referential,
                format!("Unknown distance between locations {from} and {to}, cannot continue."),
            )
        })
    }
}

impl EvaluationState {
    fn new(instance: &Instance) -> Self {
        let horizon = instance.days.max(0) as usize;
        let requests = instance.requests.len();

        Self {
            delivered: vec![None; requests],
            installed: vec![None; requests],
            truck_distances: vec![0; horizon],
            truck_routes: vec![0; horizon],
            technician_distances: vec![0; horizon],
            technician_routes: vec![0; horizon],
            working_days: vec![Vec::default(); instance.technicians.len()],
            idle_machine_cost: 0,
        }
    }

    fn horizon(&self) -> usize {
        self.truck_routes.len()
    }
}

/// Unwraps a result of checked arithmetic. An overflow leaves no meaningful value to continue with.
fn checked<F>(value: Option<i64>, subject_fn: F, diagnostics: &mut Diagnostics) -> CheckResult<i64>
where
    F: FnOnce() -> String,
{
    value.ok_or_else(|| {
        diagnostics.fatal(DiagnosticKind::Structural, format!("{} overflows, cannot continue.", subject_fn()))
    })
}
