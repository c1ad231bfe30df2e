#[cfg(test)]
#[path = "../../tests/unit/checker/schedule_test.rs"]
mod schedule_test;

use super::*;

/// Max amount of consecutive working days.
const MAX_WORKING_DAYS: usize = 5;

/// Amount of days off required after max amount of consecutive working days.
const REQUIRED_DAYS_OFF: usize = 2;

/// Checks that technicians have required days off after working max amount of consecutive days.
pub(super) fn check_work_schedules(state: &EvaluationState, diagnostics: &mut Diagnostics) -> CheckResult<()> {
    let run_length = MAX_WORKING_DAYS as i64;

    state.working_days.iter().enumerate().try_for_each(|(technician_idx, days)| {
        days.windows(MAX_WORKING_DAYS)
            .filter(|run| run[MAX_WORKING_DAYS - 1] - run[0] == run_length - 1)
            .filter_map(|run| {
                let last_working_day = run[MAX_WORKING_DAYS - 1];

                (1..=REQUIRED_DAYS_OFF as i64)
                    .map(|offset| last_working_day + offset)
                    .find(|day| days.binary_search(day).is_ok())
                    .map(|works_again| (last_working_day, works_again))
            })
            .try_for_each(|(last_working_day, works_again)| {
                diagnostics.error(
                    DiagnosticKind::Constraint,
                    format!(
                        "Technician {} has an infeasible work schedule, {REQUIRED_DAYS_OFF} days off are required \
                         after day {last_working_day} (works again on day {works_again})",
                        technician_idx + 1,
                    ),
                )
            })
    })
}
