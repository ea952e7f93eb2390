//! Pre-registration command handler.

use parkease_core::{Lot, Plate};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

pub fn handle(lot: &mut Lot, plate: &Plate, global: &GlobalOpts) -> Result<bool, CliError> {
    lot.register_vehicle(plate)?;

    let rendered = output::render_single(
        &global.output,
        plate,
        |p| format!("Vehicle {p} registered."),
        ToString::to_string,
    );
    output::print_output(&rendered, global.quiet);

    Ok(true)
}
