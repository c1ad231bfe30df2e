use crate::utils::GenericResult;
use std::fmt::Display;
use std::io::{BufWriter, Write};

/// Writes `KEY = value` line.
pub(crate) fn write_assignment<W: Write, V: Display>(
    writer: &mut BufWriter<W>,
    key: &str,
    value: V,
) -> GenericResult<()> {
    writeln!(writer, "{key} = {value}")?;
    Ok(())
}

/// Writes values as a single line joined by separator.
pub(crate) fn write_values<W: Write, V: Display>(
    writer: &mut BufWriter<W>,
    values: impl Iterator<Item = V>,
    separator: &str,
) -> GenericResult<()> {
    let line = values.map(|value| value.to_string()).collect::<Vec<_>>().join(separator);
    writeln!(writer, "{line}")?;
    Ok(())
}

/// Writes an empty line.
pub(crate) fn write_separator<W: Write>(writer: &mut BufWriter<W>) -> GenericResult<()> {
    writeln!(writer)?;
    Ok(())
}
