#[cfg(test)]
#[path = "../../tests/unit/checker/requests_test.rs"]
mod requests_test;

use super::*;

/// Checks that every request is delivered within its time window and installed afterwards.
/// Accumulates idle machine cost of requests which are both delivered and installed.
pub(super) fn check_requests(
    context: &CheckerContext,
    state: &mut EvaluationState,
    diagnostics: &mut Diagnostics,
) -> CheckResult<()> {
    context.instance.requests.iter().enumerate().try_for_each(|(request_idx, request)| {
        let (delivered, installed) = (state.delivered[request_idx], state.installed[request_idx]);

        match delivered {
            Some(day) => diagnostics.check(
                DiagnosticKind::Constraint,
                (request.from_day..=request.to_day).contains(&day),
                || format!("Request {} is not delivered within its time window", request.id),
            )?,
            None => {
                diagnostics.error(DiagnosticKind::Constraint, format!("Request {} has not been delivered", request.id))?
            }
        }

        if installed.is_none() {
            diagnostics.error(DiagnosticKind::Constraint, format!("Request {} has not been installed", request.id))?;
        }

        if let Some((delivered, installed)) = delivered.zip(installed) {
            let idle_penalty = context.get_machine(request, diagnostics)?.idle_penalty;
            let idle_cost = (installed - delivered - 1)
                .checked_mul(request.amount)
                .and_then(|idle_amount| idle_amount.checked_mul(idle_penalty))
                .and_then(|idle_cost| idle_cost.checked_add(state.idle_machine_cost));

            state.idle_machine_cost =
                checked(idle_cost, || format!("Idle machine cost of request {}", request.id), diagnostics)?;
        }

        Ok(())
    })
}
