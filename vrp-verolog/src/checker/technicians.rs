#[cfg(test)]
#[path = "../../tests/unit/checker/technicians_test.rs"]
mod technicians_test;

use super::*;

/// Checks technician routes of the day. The following rules are checked:
/// * amount of installations does not exceed technician's daily maximum
/// * each request is installed only once and not earlier than a day after delivery
/// * technician is capable of installing requested machine type
/// * route distance does not exceed technician's max day distance
pub(super) fn check_technician_routes(
    context: &CheckerContext,
    day: &SolutionDay,
    day_idx: usize,
    state: &mut EvaluationState,
    diagnostics: &mut Diagnostics,
) -> CheckResult<()> {
    state.technician_routes[day_idx] += day.technician_routes.len() as i64;

    day.technician_routes.iter().try_for_each(|route| {
        let (technician_idx, technician) = context.get_technician(route.id, day.day, diagnostics)?;
        let working_days = &mut state.working_days[technician_idx];
        if let Err(position) = working_days.binary_search(&day.day) {
            working_days.insert(position, day.day);
        }

        let installations = route.route.len() as i64;
        diagnostics.check(DiagnosticKind::Constraint, installations <= technician.max_installations, || {
            format!(
                "Number of installations ({installations}) exceeds maximum allowed number of installations ({}) \
                 for technician {} on day {}",
                technician.max_installations, technician.id, day.day
            )
        })?;

        let home = technician.location_id;
        let (mut distance, mut last_location) = (0_i64, home);
        let distance_subject = || format!("Distance traveled by technician {} on day {}", technician.id, day.day);

        for &node in route.route.iter() {
            let (request_idx, request) = context.get_request(node, day.day, diagnostics)?;

            let installed = state.installed[request_idx];
            diagnostics.check(DiagnosticKind::Constraint, installed.is_none(), || {
                format!(
                    "Installation of request {node} is already planned on day {} (current day {}).",
                    installed.unwrap_or_default(),
                    day.day
                )
            })?;

            let delivered = state.delivered[request_idx];
            diagnostics.check(DiagnosticKind::Constraint, delivered.is_some_and(|delivered| delivered < day.day), || {
                format!("Installation of request {node} on day {} cannot take place before delivery", day.day)
            })?;
            state.installed[request_idx] = Some(day.day);

            let can_install = technician.can_install(request.machine_id).ok_or_else(|| {
                diagnostics.fatal(
                    DiagnosticKind::Referential,
                    format!(
                        "Technician {} has no capability entry for machine type {}, cannot continue.",
                        technician.id, request.machine_id
                    ),
                )
            })?;
            diagnostics.check(DiagnosticKind::Constraint, can_install, || {
                format!(
                    "Technician {} is not allowed to install request {node} (machine type {})",
                    technician.id, request.machine_id
                )
            })?;

            let leg = context.get_distance(last_location, request.customer_location_id, diagnostics)?;
            distance = checked(distance.checked_add(leg), distance_subject, diagnostics)?;
            last_location = request.customer_location_id;
        }

        let leg = context.get_distance(last_location, home, diagnostics)?;
        distance = checked(distance.checked_add(leg), distance_subject, diagnostics)?;
        diagnostics.check(DiagnosticKind::Constraint, distance <= technician.max_day_distance, || {
            format!(
                "Distance traveled by technician {} exceeds maximum allowed distance on day {} ({distance} > {})",
                technician.id, day.day, technician.max_day_distance
            )
        })?;

        let day_distance = &mut state.technician_distances[day_idx];
        *day_distance = checked(day_distance.checked_add(distance), distance_subject, diagnostics)?;

        Ok(())
    })
}
