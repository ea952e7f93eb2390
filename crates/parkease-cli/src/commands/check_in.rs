//! Check-in command handler.

use chrono::Utc;
use owo_colors::OwoColorize;

use parkease_core::{Lot, Plate};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

pub fn handle(lot: &mut Lot, plate: &Plate, global: &GlobalOpts) -> Result<bool, CliError> {
    let receipt = lot.check_in(plate, Utc::now())?;

    let rendered = output::render_single(
        &global.output,
        &receipt,
        |r| {
            format!(
                "Vehicle {} checked in. {} of {} spaces left.",
                r.plate,
                r.available_spaces,
                lot.total_spaces()
            )
        },
        |r| r.plate.to_string(),
    );
    output::print_output(&rendered, global.quiet);

    if receipt.low_capacity {
        let alert = format!(
            "Alert: the lot is almost full, only {} spaces left.",
            receipt.available_spaces
        );
        if output::should_color(&global.color) {
            eprintln!("{}", alert.yellow());
        } else {
            eprintln!("{alert}");
        }
    }

    Ok(true)
}
