#[cfg(test)]
#[path = "../../tests/unit/checker/trucks_test.rs"]
mod trucks_test;

use super::*;

/// Checks truck routes of the day. The following rules are checked:
/// * each request is delivered only once
/// * truck load between depot visits does not exceed truck capacity
/// * route distance does not exceed truck max distance
pub(super) fn check_truck_routes(
    context: &CheckerContext,
    day: &SolutionDay,
    day_idx: usize,
    state: &mut EvaluationState,
    diagnostics: &mut Diagnostics,
) -> CheckResult<()> {
    let instance = context.instance;
    let depot = instance.depot_location_id();

    state.truck_routes[day_idx] += day.truck_routes.len() as i64;

    day.truck_routes.iter().try_for_each(|truck| {
        let (mut load, mut distance, mut last_location) = (0_i64, 0_i64, depot);
        let distance_subject = || format!("Distance traveled by truck {} on day {}", truck.id, day.day);

        for &node in truck.route.iter() {
            let location = if node == 0 {
                load = 0;
                depot
            } else {
                let (request_idx, request) = context.get_request(node, day.day, diagnostics)?;

                let delivered = state.delivered[request_idx];
                diagnostics.check(DiagnosticKind::Constraint, delivered.is_none(), || {
                    format!(
                        "Delivery of request {node} is already planned on day {} (current day {}).",
                        delivered.unwrap_or_default(),
                        day.day
                    )
                })?;
                state.delivered[request_idx] = Some(day.day);

                let size = context.get_machine(request, diagnostics)?.size;
                load = checked(
                    request.amount.checked_mul(size).and_then(|request_load| load.checked_add(request_load)),
                    || format!("Truck load of truck {} on day {}", truck.id, day.day),
                    diagnostics,
                )?;
                diagnostics.check(DiagnosticKind::Constraint, load <= instance.truck_capacity, || {
                    format!(
                        "Truck load of truck {} exceeds capacity on day {} ({load} > {})",
                        truck.id, day.day, instance.truck_capacity
                    )
                })?;

                request.customer_location_id
            };

            let leg = context.get_distance(last_location, location, diagnostics)?;
            distance = checked(distance.checked_add(leg), distance_subject, diagnostics)?;
            last_location = location;
        }

        let leg = context.get_distance(last_location, depot, diagnostics)?;
        distance = checked(distance.checked_add(leg), distance_subject, diagnostics)?;
        diagnostics.check(DiagnosticKind::Constraint, distance <= instance.truck_max_distance, || {
            format!(
                "Distance traveled by truck {} exceeds maximum allowed distance on day {} ({distance} > {})",
                truck.id, day.day, instance.truck_max_distance
            )
        })?;

        let day_distance = &mut state.truck_distances[day_idx];
        *day_distance = checked(day_distance.checked_add(distance), distance_subject, diagnostics)?;

        Ok(())
    })
}
