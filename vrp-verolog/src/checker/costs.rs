#[cfg(test)]
#[path = "../../tests/unit/checker/costs_test.rs"]
mod costs_test;

use super::*;

/// Calculates cost metrics and their cumulative series over the whole planning horizon.
pub(super) fn calculate_costs(
    context: &CheckerContext,
    state: &EvaluationState,
    diagnostics: &mut Diagnostics,
) -> CheckResult<CalculatedCost> {
    let instance = context.instance;
    let horizon = state.horizon();

    let first_working_days =
        state.working_days.iter().filter_map(|days| days.first().copied()).filter_map(to_index).collect::<Vec<_>>();
    let technicians_used_per_day = (0..horizon)
        .map(|day_idx| first_working_days.iter().filter(|&&first_day| first_day == day_idx).count() as i64)
        .collect::<Vec<_>>();
    let idle_costs_per_day = get_idle_costs_per_day(context, state, diagnostics)?;

    let truck_distance_cumulative = get_cumulative(&state.truck_distances, CostField::TruckDistance, diagnostics)?;
    let truck_days_cumulative = get_cumulative(&state.truck_routes, CostField::TruckDays, diagnostics)?;
    let technician_distance_cumulative =
        get_cumulative(&state.technician_distances, CostField::TechnicianDistance, diagnostics)?;
    let technician_days_cumulative =
        get_cumulative(&state.technician_routes, CostField::TechnicianDays, diagnostics)?;
    let technicians_used_cumulative =
        get_cumulative(&technicians_used_per_day, CostField::TechniciansUsed, diagnostics)?;
    let idle_machine_cost_cumulative =
        get_cumulative(&idle_costs_per_day, CostField::IdleMachineCost, diagnostics)?;

    let last = |values: &[i64]| values.last().copied().unwrap_or_default();

    let mut cost = CalculatedCost {
        truck_distance: last(&truck_distance_cumulative),
        truck_days: last(&truck_days_cumulative),
        trucks_used: state.truck_routes.iter().copied().max().unwrap_or_default(),
        technician_distance: last(&technician_distance_cumulative),
        technician_days: last(&technician_days_cumulative),
        technicians_used: first_working_days.len() as i64,
        idle_machine_cost: state.idle_machine_cost,
        total_cost: 0,
        truck_distance_cumulative,
        truck_days_cumulative,
        trucks_used_cumulative: running_max(&state.truck_routes),
        technician_distance_cumulative,
        technician_days_cumulative,
        technicians_used_cumulative,
        idle_machine_cost_cumulative,
        total_cost_cumulative: Vec::default(),
    };

    cost.total_cost = checked(
        get_total_cost(
            &instance.costs,
            [
                cost.truck_distance,
                cost.truck_days,
                cost.trucks_used,
                cost.technician_distance,
                cost.technician_days,
                cost.technicians_used,
                cost.idle_machine_cost,
            ],
        ),
        || "Total cost".to_string(),
        diagnostics,
    )?;
    cost.total_cost_cumulative = (0..horizon)
        .map(|day_idx| {
            let metrics = [
                cost.truck_distance_cumulative[day_idx],
                cost.truck_days_cumulative[day_idx],
                cost.trucks_used_cumulative[day_idx],
                cost.technician_distance_cumulative[day_idx],
                cost.technician_days_cumulative[day_idx],
                cost.technicians_used_cumulative[day_idx],
                cost.idle_machine_cost_cumulative[day_idx],
            ];

            checked(
                get_total_cost(&instance.costs, metrics),
                || format!("Total cost on day {}", day_idx + 1),
                diagnostics,
            )
        })
        .collect::<CheckResult<_>>()?;

    Ok(cost)
}

/// Compares claimed costs with calculated ones. All fields are compared, each difference is
/// reported as a warning. Returns true if there is no difference.
pub(crate) fn compare_given_costs(
    given: &GivenCost,
    calculated: &CalculatedCost,
    diagnostics: &mut Diagnostics,
) -> bool {
    CostField::ALL.iter().fold(true, |result, &field| {
        let expected = calculated.get(field);

        let is_same = match given.get(field) {
            Some(actual) => diagnostics.check_warning(actual == expected, || {
                format!(
                    "Incorrect {} (given value: {actual}. Calculated value: {expected}).",
                    field.description()
                )
            }),
            None => true,
        };

        is_same && result
    })
}

/// Returns idle machine cost paid on each day: a machine is idle on days strictly between its
/// delivery and installation.
fn get_idle_costs_per_day(
    context: &CheckerContext,
    state: &EvaluationState,
    diagnostics: &mut Diagnostics,
) -> CheckResult<Vec<i64>> {
    let mut idle_costs = vec![0_i64; state.horizon()];

    let idle_requests = context
        .instance
        .requests
        .iter()
        .zip(state.delivered.iter().zip(state.installed.iter()))
        .filter_map(|(request, (delivered, installed))| {
            let machine = context.instance.machine(request.machine_id)?;
            Some((request, machine, (*delivered)?, (*installed)?))
        });

    for (request, machine, delivered, installed) in idle_requests {
        let subject_fn = || format!("Idle machine cost of request {}", request.id);
        let day_cost = checked(request.amount.checked_mul(machine.idle_penalty), subject_fn, diagnostics)?;

        for day_idx in ((delivered + 1)..installed).filter_map(to_index) {
            if let Some(idle_cost) = idle_costs.get_mut(day_idx) {
                *idle_cost = checked(idle_cost.checked_add(day_cost), subject_fn, diagnostics)?;
            }
        }
    }

    Ok(idle_costs)
}

/// Returns total cost of metrics listed in cost field order, idle machine cost is the last one.
/// Returns `None` on overflow.
fn get_total_cost(costs: &UnitCosts, metrics: [i64; 7]) -> Option<i64> {
    let weights = [
        costs.truck_distance,
        costs.truck_day,
        costs.truck,
        costs.technician_distance,
        costs.technician_day,
        costs.technician,
        1,
    ];

    weights
        .iter()
        .zip(metrics.iter())
        .try_fold(0_i64, |total, (weight, metric)| total.checked_add(weight.checked_mul(*metric)?))
}

/// Returns prefix sums of per day values.
fn get_cumulative(values: &[i64], field: CostField, diagnostics: &mut Diagnostics) -> CheckResult<Vec<i64>> {
    values
        .iter()
        .scan(Some(0_i64), |total, &value| {
            *total = total.and_then(|total| total.checked_add(value));
            Some(*total)
        })
        .map(|total| checked(total, || format!("Cumulative {}", field.description()), diagnostics))
        .collect()
}

fn running_max(values: &[i64]) -> Vec<i64> {
    values
        .iter()
        .scan(0, |max, &value| {
            *max = (*max).max(value);
            Some(*max)
        })
        .collect()
}
