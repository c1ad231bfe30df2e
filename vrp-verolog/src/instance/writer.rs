#[cfg(test)]
#[path = "../../tests/unit/instance/writer_test.rs"]
mod writer_test;

use super::*;
use crate::common::*;
use crate::utils::GenericResult;
use std::io::{BufWriter, Write};

/// Writes instance in text format. When `with_matrix` is set, the calculated distance matrix
/// is written after technicians.
pub fn write_instance<W: Write>(
    writer: &mut BufWriter<W>,
    instance: &Instance,
    with_matrix: bool,
) -> GenericResult<()> {
    write_assignment(writer, keywords::DATASET, &instance.dataset)?;
    write_assignment(writer, keywords::NAME, &instance.name)?;
    write_separator(writer)?;

    write_assignment(writer, keywords::DAYS, instance.days)?;
    write_assignment(writer, keywords::TRUCK_CAPACITY, instance.truck_capacity)?;
    write_assignment(writer, keywords::TRUCK_MAX_DISTANCE, instance.truck_max_distance)?;
    write_separator(writer)?;

    let costs = &instance.costs;
    write_assignment(writer, keywords::TRUCK_DISTANCE_COST, costs.truck_distance)?;
    write_assignment(writer, keywords::TRUCK_DAY_COST, costs.truck_day)?;
    write_assignment(writer, keywords::TRUCK_COST, costs.truck)?;
    write_assignment(writer, keywords::TECHNICIAN_DISTANCE_COST, costs.technician_distance)?;
    write_assignment(writer, keywords::TECHNICIAN_DAY_COST, costs.technician_day)?;
    write_assignment(writer, keywords::TECHNICIAN_COST, costs.technician)?;
    write_separator(writer)?;

    write_block(writer, keywords::MACHINES, instance.machines.iter(), |machine| {
        vec![machine.id, machine.size, machine.idle_penalty]
    })?;

    write_block(writer, keywords::LOCATIONS, instance.locations.iter(), |location| {
        vec![location.id, location.x, location.y]
    })?;

    write_block(writer, keywords::REQUESTS, instance.requests.iter(), |request| {
        vec![
            request.id,
            request.customer_location_id,
            request.from_day,
            request.to_day,
            request.machine_id,
            request.amount,
        ]
    })?;

    write_block(writer, keywords::TECHNICIANS, instance.technicians.iter(), |technician| {
        [technician.id, technician.location_id, technician.max_day_distance, technician.max_installations]
            .into_iter()
            .chain(technician.capabilities.iter().map(|&can_install| can_install as i64))
            .collect()
    })?;

    if with_matrix {
        writeln!(writer, "{}", keywords::DISTANCE)?;
        instance.distances().rows().try_for_each(|row| write_values(writer, row.iter(), "\t"))?;
        write_separator(writer)?;
    }

    writer.flush()?;

    Ok(())
}

fn write_block<'a, W, T, F>(
    writer: &mut BufWriter<W>,
    key: &str,
    items: impl ExactSizeIterator<Item = &'a T>,
    values_fn: F,
) -> GenericResult<()>
where
    W: Write,
    T: 'a,
    F: Fn(&T) -> Vec<i64>,
{
    write_assignment(writer, key, items.len())?;
    items.into_iter().try_for_each(|item| write_values(writer, values_fn(item).into_iter(), " "))?;
    write_separator(writer)
}
