use super::*;
use crate::helpers::*;
use proptest::prelude::*;

fn create_idle_solution() -> String {
    SolutionBuilder::default()
        .add_day(1, vec![vec![1, 1]], vec![])
        .add_day(2, vec![vec![1, 2]], vec![])
        .add_day(4, vec![], vec![vec![1, 1], vec![2, 2]])
        .build()
}

fn create_two_customers_solution(total_cost: i64) -> String {
    SolutionBuilder::default()
        .add_cost("TOTAL_COST", total_cost)
        .add_day(2, vec![vec![1, 1, 2]], vec![])
        .add_day(3, vec![], vec![vec![2, 2, 1]])
        .build()
}

#[test]
fn can_calculate_cumulative_series() {
    let instance = parse_instance(create_two_customers_instance());

    let (solution, diagnostics) = evaluate_solution(create_idle_solution(), &instance, FailurePolicy::FailFast);

    assert!(diagnostics.is_valid(), "{:?}", diagnostics.error_messages());
    let cost = solution.cost.calculated.expect("cost should be calculated");
    assert_eq!(cost.truck_distance_cumulative, vec![10, 30, 30, 30, 30]);
    assert_eq!(cost.truck_days_cumulative, vec![1, 2, 2, 2, 2]);
    assert_eq!(cost.trucks_used_cumulative, vec![1, 1, 1, 1, 1]);
    assert_eq!(cost.technician_distance_cumulative, vec![0, 0, 0, 10, 10]);
    assert_eq!(cost.technician_days_cumulative, vec![0, 0, 0, 2, 2]);
    assert_eq!(cost.technicians_used_cumulative, vec![0, 0, 0, 2, 2]);
    assert_eq!(cost.idle_machine_cost_cumulative, vec![0, 6, 19, 19, 19]);
    assert_eq!(cost.total_cost_cumulative, vec![120, 156, 169, 399, 399]);
}

#[test]
fn can_keep_last_cumulative_value_equal_to_total() {
    let instance = parse_instance(create_two_customers_instance());

    let (solution, _) = evaluate_solution(create_idle_solution(), &instance, FailurePolicy::FailFast);

    let cost = solution.cost.calculated.expect("cost should be calculated");
    CostField::ALL.iter().for_each(|&field| {
        assert_eq!(cost.cumulative(field).last().copied(), Some(cost.get(field)), "{}", field.description());
    });
}

parameterized_test! {can_compare_given_total_cost, (given_total, expected_warnings), {
    let instance = parse_instance(create_two_customers_instance());
    let text = create_two_customers_solution(given_total);
    let (solution, mut diagnostics) = evaluate_solution(text, &instance, FailurePolicy::FailFast);

    let is_same = solution.compare_given_costs(&mut diagnostics);

    assert_eq!(is_same, expected_warnings.is_empty());
    assert_eq!(diagnostics.warning_messages(), expected_warnings);
    assert!(diagnostics.is_valid());
}}

can_compare_given_total_cost! {
    case01_same: (250, Vec::<&str>::new()),
    case02_different: (251, vec!["Incorrect total cost (given value: 251. Calculated value: 250)."]),
}

#[test]
fn can_report_all_incorrect_given_costs() {
    let calculated =
        CalculatedCost { truck_distance: 20, trucks_used: 1, total_cost: 250, ..CalculatedCost::default() };
    let mut given = GivenCost::default();
    given.set(CostField::TruckDistance, 21);
    given.set(CostField::TrucksUsed, 1);
    given.set(CostField::TotalCost, 249);
    let mut diagnostics = Diagnostics::new(FailurePolicy::FailFast);

    let is_same = compare_given_costs(&given, &calculated, &mut diagnostics);

    assert!(!is_same);
    assert_eq!(
        diagnostics.warning_messages(),
        vec![
            "Incorrect truck distance (given value: 21. Calculated value: 20).",
            "Incorrect total cost (given value: 249. Calculated value: 250).",
        ]
    );
}

prop_compose! {
    fn get_route(min_node: i64)
    (id in 1_i64..=2, nodes in prop::collection::vec(min_node..=2, 1..4)) -> Vec<i64> {
        std::iter::once(id).chain(nodes).collect()
    }
}

prop_compose! {
    fn get_days()
    (days in prop::collection::vec(
        (any::<bool>(), prop::collection::vec(get_route(0), 0..3), prop::collection::vec(get_route(1), 0..3)),
        5
    )) -> Vec<(i64, Vec<Vec<i64>>, Vec<Vec<i64>>)> {
        days.into_iter()
            .zip(1..)
            .filter(|((is_used, _, _), _)| *is_used)
            .map(|((_, trucks, technicians), day)| (day, trucks, technicians))
            .collect()
    }
}

proptest! {
    #[test]
    fn can_calculate_non_decreasing_cumulative_series(days in get_days()) {
        let instance = parse_instance(create_two_customers_instance());
        let mut builder = SolutionBuilder::default();
        days.into_iter().for_each(|(day, trucks, technicians)| {
            builder.add_day(day, trucks, technicians);
        });

        let (solution, _) = evaluate_solution(builder.build(), &instance, FailurePolicy::Tolerant);

        let cost = solution.cost.calculated.expect("cost should be calculated in tolerant mode");
        for &field in CostField::ALL {
            let series = cost.cumulative(field);
            prop_assert_eq!(series.len(), 5);
            prop_assert!(series.windows(2).all(|pair| pair[0] <= pair[1]), "{}: {:?}", field.description(), series);
        }
    }
}
