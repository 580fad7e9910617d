//! Elements command: print the card table.

use crate::error::CliError;
use elemental_engine::cards::{COPIES_PER_ELEMENT, ELEMENTS};
use std::io::Write;

pub fn handle_elements_command(out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(
        out,
        "{:>2}  {:<3} {:<11} {:<20} {}",
        "Z", "Sym", "Name", "Group", "Period"
    )?;
    for e in ELEMENTS.iter() {
        writeln!(
            out,
            "{:>2}  {:<3} {:<11} {:<20} {}",
            e.atomic_number,
            e.symbol,
            e.name,
            e.group.name(),
            e.period
        )?;
    }
    writeln!(
        out,
        "{} elements x {} copies = {} cards",
        ELEMENTS.len(),
        COPIES_PER_ELEMENT,
        ELEMENTS.len() * COPIES_PER_ELEMENT as usize
    )?;
    Ok(())
}
