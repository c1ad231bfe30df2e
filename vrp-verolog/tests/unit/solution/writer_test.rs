use super::*;
use crate::helpers::*;

fn write_to_string(solution: &Solution, with_costs: bool) -> String {
    let mut writer = BufWriter::new(Vec::new());
    write_solution(&mut writer, solution, with_costs).unwrap();

    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}

fn create_solution_text() -> String {
    SolutionBuilder::default()
        .add_cost("TOTAL_COST", 1)
        .add_day(2, vec![vec![1, 1, 2]], vec![])
        .add_day(3, vec![], vec![vec![2, 2, 1]])
        .build()
}

#[test]
fn can_write_solution_without_costs() {
    let instance = parse_instance(create_two_customers_instance());
    let solution = parse_solution(create_solution_text(), &instance);

    let text = write_to_string(&solution, false);

    assert_eq!(
        text,
        "DATASET = VeRoLog solver challenge 2019\nNAME = test\n\n\
         DAY = 2\nNUMBER_OF_TRUCKS = 1\n1 1 2\nNUMBER_OF_TECHNICIANS = 0\n\n\
         DAY = 3\nNUMBER_OF_TRUCKS = 0\nNUMBER_OF_TECHNICIANS = 1\n2 2 1\n\n"
    );
}

#[test]
fn can_write_given_costs_of_not_evaluated_solution() {
    let instance = parse_instance(create_two_customers_instance());
    let solution = parse_solution(create_solution_text(), &instance);

    let text = write_to_string(&solution, true);

    assert!(text.starts_with("DATASET = VeRoLog solver challenge 2019\nNAME = test\n\nTOTAL_COST = 1\n\nDAY = 2\n"));
}

#[test]
fn can_write_calculated_costs_of_evaluated_solution() {
    let instance = parse_instance(create_two_customers_instance());
    let (solution, diagnostics) = evaluate_solution(create_solution_text(), &instance, FailurePolicy::FailFast);
    assert!(diagnostics.is_valid());

    let text = write_to_string(&solution, true);

    assert!(text.contains(
        "TRUCK_DISTANCE = 20\nNUMBER_OF_TRUCK_DAYS = 1\nNUMBER_OF_TRUCKS_USED = 1\n\
         TECHNICIAN_DISTANCE = 10\nNUMBER_OF_TECHNICIAN_DAYS = 1\nNUMBER_OF_TECHNICIANS_USED = 1\n\
         IDLE_MACHINE_COSTS = 0\nTOTAL_COST = 250\n"
    ));

    let read_back = parse_solution(text, &instance);
    assert_eq!(read_back.days, solution.days);
    assert_eq!(read_back.cost.given.total_cost, Some(250));
}
