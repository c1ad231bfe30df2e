#[cfg(test)]
#[path = "../../tests/unit/instance/reader_test.rs"]
mod reader_test;

use super::*;
use crate::common::*;
use std::io::{BufReader, Read};

/// A trait to read VeRoLog instance in text format.
pub trait VerologInstance {
    /// Reads instance. The result keeps a (possibly partial) instance and all findings.
    fn read_verolog_instance(self, policy: FailurePolicy) -> Parsed<Instance>;
}

impl<R: Read> VerologInstance for BufReader<R> {
    fn read_verolog_instance(self, policy: FailurePolicy) -> Parsed<Instance> {
        InstanceReader::new(self).read(policy)
    }
}

impl VerologInstance for String {
    fn read_verolog_instance(self, policy: FailurePolicy) -> Parsed<Instance> {
        InstanceReader::new(BufReader::new(self.as_bytes())).read(policy)
    }
}

struct InstanceReader<R: Read> {
    lines: LineReader<R>,
    instance: Instance,
    machine_count: i64,
    location_count: i64,
}

impl<R: Read> TextReader<Instance> for InstanceReader<R> {
    fn read_content(&mut self, diagnostics: &mut Diagnostics) -> CheckResult<()> {
        self.read_header(diagnostics)?;
        self.read_machines(diagnostics)?;
        self.read_locations(diagnostics)?;
        self.read_requests(diagnostics)?;
        self.read_technicians(diagnostics)?;
        self.read_distances(diagnostics)
    }

    fn into_value(self) -> Instance {
        self.instance
    }
}

impl<R: Read> InstanceReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self { lines: LineReader::new(reader), instance: Instance::default(), machine_count: 0, location_count: 0 }
    }

    fn read_header(&mut self, diagnostics: &mut Diagnostics) -> CheckResult<()> {
        let lines = &mut self.lines;
        let instance = &mut self.instance;

        instance.dataset = lines.expect_assignment(keywords::DATASET, "string", diagnostics)?;
        instance.name = lines.expect_assignment(keywords::NAME, "string", diagnostics)?;

        instance.days = lines.expect_int_assignment(keywords::DAYS, "Days", diagnostics)?;
        let days = instance.days;
        diagnostics.check(DiagnosticKind::Structural, (1..=MAX_DAYS).contains(&days), || {
            format!("Days should be in range (1..{MAX_DAYS}), found {days}.")
        })?;
        instance.truck_capacity =
            lines.expect_int_assignment(keywords::TRUCK_CAPACITY, "Truck Capacity", diagnostics)?;
        instance.truck_max_distance =
            lines.expect_int_assignment(keywords::TRUCK_MAX_DISTANCE, "Truck Max trip distance", diagnostics)?;

        instance.costs = UnitCosts {
            truck_distance: lines.expect_int_assignment(
                keywords::TRUCK_DISTANCE_COST,
                "Truck Distance Cost",
                diagnostics,
            )?,
            truck_day: lines.expect_int_assignment(keywords::TRUCK_DAY_COST, "Truck Day Cost", diagnostics)?,
            truck: lines.expect_int_assignment(keywords::TRUCK_COST, "Truck Cost", diagnostics)?,
            technician_distance: lines.expect_int_assignment(
                keywords::TECHNICIAN_DISTANCE_COST,
                "Technician Distance Cost",
                diagnostics,
            )?,
            technician_day: lines.expect_int_assignment(
                keywords::TECHNICIAN_DAY_COST,
                "Technician Day Cost",
                diagnostics,
            )?,
            technician: lines.expect_int_assignment(keywords::TECHNICIAN_COST, "Technician Cost", diagnostics)?,
        };

        Ok(())
    }

    fn read_machines(&mut self, diagnostics: &mut Diagnostics) -> CheckResult<()> {
        self.machine_count =
            self.read_block(keywords::MACHINES, "Number of machines", diagnostics, |reader, line, d| {
                let tokens = expect_tokens(&line, 3, 3, "three integers on a machine line", d)?;

                let id = parse_int("Machine ID", tokens[0], "", d)?;
                let extra = format!("for machine {id} ");
                let size = parse_int("Machine size", tokens[1], &extra, d)?;
                let idle_penalty = parse_int("Machine idle penalty", tokens[2], &extra, d)?;

                let machines = &mut reader.instance.machines;
                machines.push(Machine { id, size, idle_penalty });
                check_indexing("Machines", "Machine", id, machines.len(), d)
            })?;

        Ok(())
    }

    fn read_locations(&mut self, diagnostics: &mut Diagnostics) -> CheckResult<()> {
        self.location_count =
            self.read_block(keywords::LOCATIONS, "Number of locations", diagnostics, |reader, line, d| {
                let tokens = expect_tokens(&line, 3, 3, "three integers on a coordinate line", d)?;

                let id = parse_int("Coordinate ID", tokens[0], "", d)?;
                let extra = format!("for Location {id} ");
                let x = parse_int("Coordinate X", tokens[1], &extra, d)?;
                let y = parse_int("Coordinate Y", tokens[2], &extra, d)?;

                let locations = &mut reader.instance.locations;
                locations.push(Location { id, x, y });
                check_indexing("Locations", "Location", id, locations.len(), d)
            })?;

        Ok(())
    }

    fn read_requests(&mut self, diagnostics: &mut Diagnostics) -> CheckResult<()> {
        self.read_block(keywords::REQUESTS, "Number of requests", diagnostics, |reader, line, d| {
            let (days, machine_count, location_count) =
                (reader.instance.days, reader.machine_count, reader.location_count);
            let tokens = expect_tokens(&line, 6, 6, "six integers on a request line", d)?;

            let id = parse_int("Request ID", tokens[0], "", d)?;
            let extra = format!("for Request {id} ");

            let customer_location_id = parse_int("Customer Location ID", tokens[1], &extra, d)?;
            d.check(DiagnosticKind::Referential, (1..=location_count).contains(&customer_location_id), || {
                format!(
                    "Customer Location ID {customer_location_id} for request {id} is outside of the locations \
                     range (1..{location_count})."
                )
            })?;

            let from_day = parse_int("Request from-day", tokens[2], &extra, d)?;
            d.check(DiagnosticKind::Structural, (1..=days).contains(&from_day), || {
                format!("Request from-day {from_day} is outside of the horizon (1..{days}) for request {id}.")
            })?;

            let to_day = parse_int("Request to-day", tokens[3], &extra, d)?;
            d.check(DiagnosticKind::Structural, (1..=days).contains(&to_day), || {
                format!("Request to-day {to_day} is outside of the horizon (1..{days}) for request {id}.")
            })?;
            d.check(DiagnosticKind::Structural, from_day <= to_day, || {
                format!("Request to-day {to_day} is smaller than request from-day ({from_day}) for request {id}.")
            })?;

            let machine_id = parse_int("Request Machine ID", tokens[4], &extra, d)?;
            d.check(DiagnosticKind::Referential, (1..=machine_count).contains(&machine_id), || {
                format!(
                    "Request Machine ID {machine_id} is outside of the machines range (1..{machine_count}) \
                     for request {id}."
                )
            })?;

            let amount = parse_int("Requested amount", tokens[5], &extra, d)?;
            d.check(DiagnosticKind::Structural, amount > 0, || {
                format!("Requested amount is not strict positive ({amount}) for request {id}.")
            })?;

            let requests = &mut reader.instance.requests;
            requests.push(Request { id, customer_location_id, from_day, to_day, machine_id, amount });
            check_indexing("Requests", "Request", id, requests.len(), d)
        })?;

        Ok(())
    }

    fn read_technicians(&mut self, diagnostics: &mut Diagnostics) -> CheckResult<()> {
        self.read_block(keywords::TECHNICIANS, "Number of technicians", diagnostics, |reader, line, d| {
            let (machine_count, location_count) = (reader.machine_count, reader.location_count);
            let expected = 4 + machine_count.max(0) as usize;
            let description = format!("{expected} integers on a technician line");
            let tokens = expect_tokens(&line, 4, expected, &description, d)?;

            let id = parse_int("Technician ID", tokens[0], "", d)?;
            let extra = format!("for Technician {id} ");

            let location_id = parse_int("Technician Location ID", tokens[1], &extra, d)?;
            d.check(DiagnosticKind::Referential, (1..=location_count).contains(&location_id), || {
                format!(
                    "Technician Location ID {location_id} is outside of the locations range (1..{location_count}) \
                     for technician {id}."
                )
            })?;

            let max_day_distance = parse_int("Max Day Distance", tokens[2], &extra, d)?;
            d.check(DiagnosticKind::Structural, max_day_distance > 0, || {
                format!("Max Day Distance is not strict positive ({max_day_distance}) for Technician {id}.")
            })?;

            let max_installations = parse_int("Max Nr Installations", tokens[3], &extra, d)?;
            d.check(DiagnosticKind::Structural, max_installations > 0, || {
                format!("Max Nr Installations is not strict positive ({max_installations}) for Technician {id}.")
            })?;

            let capabilities = tokens[4..]
                .iter()
                .map(|token| token.parse::<i64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| {
                    d.fatal(
                        DiagnosticKind::Structural,
                        format!(
                            "Error reading technician capabilities for technician {id}, expecting integers on line: \
                             {line}"
                        ),
                    )
                })?;
            d.check(DiagnosticKind::Structural, capabilities.iter().all(|&value| value == 0 || value == 1), || {
                format!("Technician capabilities should be zero or one for technician {id} on line: {line}")
            })?;

            let technicians = &mut reader.instance.technicians;
            technicians.push(Technician {
                id,
                location_id,
                max_day_distance,
                max_installations,
                capabilities: capabilities.into_iter().map(|value| value == 1).collect(),
            });
            check_indexing("Technicians", "Technician", id, technicians.len(), d)
        })?;

        Ok(())
    }

    fn read_distances(&mut self, diagnostics: &mut Diagnostics) -> CheckResult<()> {
        match self.lines.next_line(diagnostics)? {
            None => Ok(()),
            Some(line) if line == keywords::DISTANCE => {
                let size = self.location_count.max(0) as usize;
                let description = format!("{size} integers on a distance line");

                let mut values = Vec::with_capacity(size * size);
                for _ in 0..size {
                    let line = self.lines.next_line(diagnostics)?.unwrap_or_default();
                    let tokens = expect_tokens(&line, size, size, &description, diagnostics)?;
                    for token in tokens.into_iter().take(size) {
                        values.push(parse_int("Distance", token, "", diagnostics)?);
                    }
                }

                let matrix = DistanceMatrix::new(values)
                    .map_err(|err| diagnostics.fatal(DiagnosticKind::Structural, err.to_string()))?;
                self.instance.given_distances = Some(matrix);

                Ok(())
            }
            Some(line) => diagnostics.error(
                DiagnosticKind::Structural,
                format!("Expected '{}' or end of file after technicians. Found: '{line}'.", keywords::DISTANCE),
            ),
        }
    }

    /// Reads `KEY = count` line followed by `count` data lines.
    fn read_block<F>(
        &mut self,
        key: &str,
        field: &str,
        diagnostics: &mut Diagnostics,
        mut line_fn: F,
    ) -> CheckResult<i64>
    where
        F: FnMut(&mut Self, String, &mut Diagnostics) -> CheckResult<()>,
    {
        let count = self.lines.expect_int_assignment(key, field, diagnostics)?;
        diagnostics.check(DiagnosticKind::Structural, count >= 0, || {
            format!("{field} should be non-negative, found {count}.")
        })?;

        for _ in 0..count.max(0) {
            let line = self.lines.next_line(diagnostics)?.unwrap_or_default();
            line_fn(self, line, diagnostics)?;
        }

        Ok(count)
    }
}

/// Splits data line into tokens. Having less than `min` tokens leaves nothing to continue with.
fn expect_tokens<'a>(
    line: &'a str,
    min: usize,
    expected: usize,
    description: &str,
    diagnostics: &mut Diagnostics,
) -> CheckResult<Vec<&'a str>> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    let message_fn = || format!("Expected {description}. Found: '{line}'.");

    if tokens.len() < min {
        Err(diagnostics.fatal(DiagnosticKind::Structural, message_fn()))
    } else {
        diagnostics.check(DiagnosticKind::Structural, tokens.len() == expected, message_fn)?;
        Ok(tokens)
    }
}

fn check_indexing(
    block: &str,
    entity: &str,
    id: i64,
    expected: usize,
    diagnostics: &mut Diagnostics,
) -> CheckResult<()> {
    diagnostics.check(DiagnosticKind::Referential, id == expected as i64, || {
        format!("The indexing of the {block} is incorrect at {entity} nr. {id} (expected {expected}).")
    })
}
