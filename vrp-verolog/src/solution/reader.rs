#[cfg(test)]
#[path = "../../tests/unit/solution/reader_test.rs"]
mod reader_test;

use super::*;
use crate::common::*;
use std::io::{BufReader, Read};

/// A trait to read VeRoLog solution in text format.
pub trait VerologSolution {
    /// Reads solution of the given instance. The result keeps a (possibly partial) solution and all findings.
    fn read_verolog_solution(self, instance: &Instance, policy: FailurePolicy) -> Parsed<Solution>;
}

impl<R: Read> VerologSolution for BufReader<R> {
    fn read_verolog_solution(self, instance: &Instance, policy: FailurePolicy) -> Parsed<Solution> {
        SolutionReader::new(self, instance).read(policy)
    }
}

impl VerologSolution for String {
    fn read_verolog_solution(self, instance: &Instance, policy: FailurePolicy) -> Parsed<Solution> {
        SolutionReader::new(BufReader::new(self.as_bytes()), instance).read(policy)
    }
}

struct SolutionReader<'a, R: Read> {
    lines: LineReader<R>,
    instance: &'a Instance,
    solution: Solution,
}

impl<R: Read> TextReader<Solution> for SolutionReader<'_, R> {
    fn read_content(&mut self, diagnostics: &mut Diagnostics) -> CheckResult<()> {
        self.solution.dataset = self.lines.expect_assignment(keywords::DATASET, "string", diagnostics)?;
        self.solution.name = self.lines.expect_assignment(keywords::NAME, "string", diagnostics)?;

        let mut entry = self.read_costs(diagnostics)?;
        while let Some(line) = entry {
            entry = self.read_day(line, diagnostics)?;
        }

        Ok(())
    }

    fn into_value(self) -> Solution {
        self.solution
    }
}

impl<'a, R: Read> SolutionReader<'a, R> {
    fn new(reader: BufReader<R>, instance: &'a Instance) -> Self {
        Self { lines: LineReader::new(reader), instance, solution: Solution::default() }
    }

    /// Reads optional cost lines and returns the first line after them.
    fn read_costs(&mut self, diagnostics: &mut Diagnostics) -> CheckResult<Option<Line>> {
        loop {
            match self.lines.next_entry(diagnostics)? {
                Some(Line::Assignment { key, value }) if key != keywords::DAY => match CostField::from_keyword(&key) {
                    Some(field) => {
                        let value = parse_int(field.keyword(), &value, "", diagnostics)?;
                        self.solution.cost.given.set(field, value);
                    }
                    None => diagnostics.error(DiagnosticKind::Structural, format!("Unexpected field: {key}."))?,
                },
                other => return Ok(other),
            }
        }
    }

    /// Reads a day block which starts with the given line and returns the first line after it.
    fn read_day(&mut self, first: Line, diagnostics: &mut Diagnostics) -> CheckResult<Option<Line>> {
        let value = match first {
            Line::Assignment { key, value } if key == keywords::DAY => value,
            Line::Assignment { key, .. } => {
                diagnostics.error(DiagnosticKind::Structural, format!("Unexpected field: {key}."))?;
                return self.lines.next_entry(diagnostics);
            }
            Line::Data(line) => {
                diagnostics.error(DiagnosticKind::Structural, format!("Unexpected string: {line}."))?;
                return self.lines.next_entry(diagnostics);
            }
        };

        let day = parse_int("Day", &value, "", diagnostics)?;
        let horizon = self.instance.days;
        diagnostics.check(DiagnosticKind::Structural, day > 0, || format!("Day should be positive, found {day}."))?;
        diagnostics.check(DiagnosticKind::Structural, day <= horizon, || {
            format!("Day {day} is outside of the horizon (1..{horizon}).")
        })?;

        let previous = self.solution.days.last().map_or(0, |last| last.day);
        diagnostics.check(DiagnosticKind::Structural, day > previous, || {
            format!("Days should be in strictly increasing order, found day {day} after day {previous}.")
        })?;

        let mut solution_day = SolutionDay { day, ..SolutionDay::default() };

        let entry = self.lines.next_entry(diagnostics)?;
        solution_day.declared_trucks =
            expect_route_count(entry, keywords::NUMBER_OF_TRUCKS, "Nr Trucks used", day, diagnostics)?;

        let mut entry = self.lines.next_entry(diagnostics)?;
        while let Some(Line::Data(line)) = entry {
            let route = self.read_truck_route(&line, day, diagnostics)?;
            solution_day.truck_routes.push(route);
            entry = self.lines.next_entry(diagnostics)?;
        }
        check_route_count(solution_day.declared_trucks, solution_day.truck_routes.len(), day, diagnostics);

        solution_day.declared_technicians =
            expect_route_count(entry, keywords::NUMBER_OF_TECHNICIANS, "Nr Technicians used", day, diagnostics)?;

        let mut entry = self.lines.next_entry(diagnostics)?;
        while let Some(Line::Data(line)) = entry {
            let route = self.read_technician_route(&line, day, diagnostics)?;
            solution_day.technician_routes.push(route);
            entry = self.lines.next_entry(diagnostics)?;
        }
        check_route_count(solution_day.declared_technicians, solution_day.technician_routes.len(), day, diagnostics);

        self.solution.days.push(solution_day);

        Ok(entry)
    }

    fn read_truck_route(&self, line: &str, day: i64, diagnostics: &mut Diagnostics) -> CheckResult<TruckRoute> {
        let (id, route) = parse_route(line, "Truck ID", day, diagnostics)?;

        diagnostics.check(DiagnosticKind::Structural, route.iter().all(|&node| node >= 0), || {
            format!("Expected non-negative integers on the route line (day {day}). Found incorrect data: {line}.")
        })?;
        diagnostics.check(DiagnosticKind::Referential, id > 0, || {
            format!("Truck ID should be positive, found {id} (day {day}).")
        })?;
        self.check_requests(&route, "truck", id, day, diagnostics)?;

        Ok(TruckRoute { id, route })
    }

    fn read_technician_route(
        &self,
        line: &str,
        day: i64,
        diagnostics: &mut Diagnostics,
    ) -> CheckResult<TechnicianRoute> {
        let (id, route) = parse_route(line, "Technician ID", day, diagnostics)?;

        diagnostics.check(DiagnosticKind::Structural, route.iter().all(|&node| node > 0), || {
            format!("Expected strictly positive integers on the route line (day {day}). Found incorrect data: {line}.")
        })?;
        diagnostics.check(DiagnosticKind::Referential, self.instance.technician(id).is_some(), || {
            format!("Unknown technician {id} (day {day}).")
        })?;
        self.check_requests(&route, "technician", id, day, diagnostics)?;

        Ok(TechnicianRoute { id, route })
    }

    fn check_requests(
        &self,
        route: &[i64],
        vehicle: &str,
        id: i64,
        day: i64,
        diagnostics: &mut Diagnostics,
    ) -> CheckResult<()> {
        let request_count = self.instance.requests.len() as i64;

        route.iter().filter(|&&node| node > request_count).try_for_each(|node| {
            diagnostics.error(
                DiagnosticKind::Referential,
                format!("Unknown request {node} on the route of {vehicle} {id} (day {day})."),
            )
        })
    }
}

/// Parses route line into vehicle id and route nodes. Nodes which are not integers are reported
/// and dropped.
fn parse_route(line: &str, field: &str, day: i64, diagnostics: &mut Diagnostics) -> CheckResult<(i64, Vec<i64>)> {
    let mut tokens = line.split_whitespace();
    let id = parse_int(field, tokens.next().unwrap_or_default(), "", diagnostics)?;

    let route = match tokens.map(|token| token.parse::<i64>()).collect::<Result<Vec<_>, _>>() {
        Ok(route) => route,
        Err(_) => {
            diagnostics.error(
                DiagnosticKind::Structural,
                format!("Expected integers on the route line (day {day}). Found incorrect data: {line}."),
            )?;
            Vec::default()
        }
    };

    diagnostics.check(DiagnosticKind::Structural, !route.is_empty(), || {
        format!("Route should be at least length 1, found {} (day {day}).", route.len())
    })?;

    Ok((id, route))
}

/// Reads `KEY = count` line which starts a route list.
fn expect_route_count(
    entry: Option<Line>,
    key: &str,
    field: &str,
    day: i64,
    diagnostics: &mut Diagnostics,
) -> CheckResult<i64> {
    match entry {
        Some(Line::Assignment { key: actual, value }) => {
            diagnostics.check(DiagnosticKind::Structural, actual == key, || format!("Unexpected field: {actual}."))?;

            let count = parse_int(field, &value, "", diagnostics)?;
            diagnostics.check(DiagnosticKind::Structural, count >= 0, || {
                format!("{field} should be non-negative, found {count} (day {day}).")
            })?;

            Ok(count)
        }
        Some(Line::Data(line)) => Err(diagnostics.fatal(
            DiagnosticKind::Structural,
            format!("Expected line of the form '{key} = number' (day {day}). Found: '{line}'."),
        )),
        None => Err(diagnostics.fatal(
            DiagnosticKind::Structural,
            format!("Unexpected end of file, expected line of the form '{key} = number' (day {day})."),
        )),
    }
}

fn check_route_count(declared: i64, found: usize, day: i64, diagnostics: &mut Diagnostics) {
    diagnostics.check_warning(declared == found as i64, || {
        format!("Expected {declared} routes (day {day}). Found {found}.")
    });
}
