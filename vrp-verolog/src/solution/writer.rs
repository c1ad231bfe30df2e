#[cfg(test)]
#[path = "../../tests/unit/solution/writer_test.rs"]
mod writer_test;

use super::*;
use crate::common::*;
use crate::utils::GenericResult;
use std::io::{BufWriter, Write};

/// Writes solution in text format. When `with_costs` is set, cost lines are written after the
/// header: calculated values if solution was evaluated, otherwise claimed ones.
pub fn write_solution<W: Write>(
    writer: &mut BufWriter<W>,
    solution: &Solution,
    with_costs: bool,
) -> GenericResult<()> {
    write_assignment(writer, keywords::DATASET, &solution.dataset)?;
    write_assignment(writer, keywords::NAME, &solution.name)?;
    write_separator(writer)?;

    if with_costs {
        let cost = &solution.cost;
        CostField::ALL
            .iter()
            .filter_map(|&field| {
                let value = match cost.calculated.as_ref() {
                    Some(calculated) => Some(calculated.get(field)),
                    None => cost.given.get(field),
                };

                value.map(|value| (field, value))
            })
            .try_for_each(|(field, value)| write_assignment(writer, field.keyword(), value))?;
        write_separator(writer)?;
    }

    for day in solution.days.iter() {
        write_assignment(writer, keywords::DAY, day.day)?;

        write_assignment(writer, keywords::NUMBER_OF_TRUCKS, day.truck_routes.len())?;
        day.truck_routes.iter().try_for_each(|truck| write_route(writer, truck.id, &truck.route))?;

        write_assignment(writer, keywords::NUMBER_OF_TECHNICIANS, day.technician_routes.len())?;
        day.technician_routes.iter().try_for_each(|technician| write_route(writer, technician.id, &technician.route))?;

        write_separator(writer)?;
    }

    writer.flush()?;

    Ok(())
}

fn write_route<W: Write>(writer: &mut BufWriter<W>, id: i64, route: &[i64]) -> GenericResult<()> {
    write_values(writer, std::iter::once(&id).chain(route.iter()), " ")
}
