use super::*;
use crate::common::FailurePolicy;
use crate::helpers::*;

#[test]
fn can_store_calculated_cost_after_evaluation() {
    let instance = parse_instance(create_single_request_instance());
    let mut solution = parse_solution(
        SolutionBuilder::default().add_day(1, vec![vec![1, 1]], vec![]).add_day(2, vec![], vec![vec![1, 1]]).build(),
        &instance,
    );
    let mut diagnostics = Diagnostics::new(FailurePolicy::FailFast);

    let total_cost = solution.evaluate(&instance, &mut diagnostics).map(|cost| cost.total_cost);

    assert!(diagnostics.is_valid());
    assert_eq!(total_cost, Some(220));
    assert_eq!(solution.cost.calculated.as_ref().map(|cost| cost.total_cost), Some(220));
}

#[test]
fn can_evaluate_solution_repeatedly_with_same_result() {
    let instance = parse_instance(create_two_customers_instance());
    let text = SolutionBuilder::default()
        .add_day(2, vec![vec![1, 1, 2]], vec![])
        .add_day(3, vec![], vec![vec![2, 2, 1]])
        .build();
    let mut solution = parse_solution(text, &instance);

    let mut first_diagnostics = Diagnostics::new(FailurePolicy::Tolerant);
    let first = solution.evaluate(&instance, &mut first_diagnostics).cloned();
    let mut second_diagnostics = Diagnostics::new(FailurePolicy::Tolerant);
    let second = solution.evaluate(&instance, &mut second_diagnostics).cloned();

    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(first_diagnostics.error_messages(), second_diagnostics.error_messages());
}

#[test]
fn can_not_compare_costs_of_not_evaluated_solution() {
    let instance = parse_instance(create_single_request_instance());
    let solution = parse_solution(SolutionBuilder::default().add_cost("TOTAL_COST", 1).build(), &instance);
    let mut diagnostics = Diagnostics::new(FailurePolicy::FailFast);

    assert!(!solution.compare_given_costs(&mut diagnostics));
    assert!(diagnostics.warnings().is_empty());
}
