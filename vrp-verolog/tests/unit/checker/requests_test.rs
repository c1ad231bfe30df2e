use super::*;
use crate::helpers::*;

#[test]
fn can_detect_not_delivered_request() {
    let instance = parse_instance(create_single_request_instance());

    let text = SolutionBuilder::default().build();

    let (solution, diagnostics) = evaluate_solution(text, &instance, FailurePolicy::FailFast);

    assert_eq!(diagnostics.error_messages(), vec!["Request 1 has not been delivered"]);
    assert!(solution.cost.calculated.is_none());
}

#[test]
fn can_detect_not_delivered_and_not_installed_request_in_tolerant_mode() {
    let instance = parse_instance(create_single_request_instance());

    let text = SolutionBuilder::default().build();

    let (solution, diagnostics) = evaluate_solution(text, &instance, FailurePolicy::Tolerant);

    assert_eq!(
        diagnostics.error_messages(),
        vec!["Request 1 has not been delivered", "Request 1 has not been installed"]
    );
    assert_eq!(solution.cost.calculated.map(|cost| cost.total_cost), Some(0));
}

#[test]
fn can_detect_delivery_outside_of_time_window() {
    let instance = parse_instance(
        InstanceBuilder::default()
            .add_machine((1, 1))
            .add_location((0, 0))
            .add_request((1, 2, 3, 1, 1))
            .add_technician((1, 100, 5, vec![1]))
            .build(),
    );
    let text =
        SolutionBuilder::default().add_day(1, vec![vec![1, 1]], vec![]).add_day(3, vec![], vec![vec![1, 1]]).build();

    let (_, diagnostics) = evaluate_solution(text, &instance, FailurePolicy::FailFast);

    assert_eq!(diagnostics.error_messages(), vec!["Request 1 is not delivered within its time window"]);
}

#[test]
fn can_calculate_idle_machine_cost() {
    let instance = parse_instance(create_two_customers_instance());
    let text = SolutionBuilder::default()
        .add_day(1, vec![vec![1, 1]], vec![])
        .add_day(2, vec![vec![1, 2]], vec![])
        .add_day(4, vec![], vec![vec![1, 1], vec![2, 2]])
        .build();

    let (solution, diagnostics) = evaluate_solution(text, &instance, FailurePolicy::FailFast);

    assert!(diagnostics.is_valid(), "{:?}", diagnostics.error_messages());
    assert_eq!(solution.cost.calculated.map(|cost| cost.idle_machine_cost), Some(2 * 2 * 3 + 7));
}
