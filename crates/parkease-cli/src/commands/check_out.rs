//! Check-out command handler: prints the receipt for the stay.

use chrono::Utc;

use parkease_core::{Lot, Plate};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

pub fn handle(lot: &mut Lot, plate: &Plate, global: &GlobalOpts) -> Result<bool, CliError> {
    let receipt = lot.check_out(plate, Utc::now())?;

    let rendered = output::render_single(
        &global.output,
        &receipt,
        |r| {
            let mut lines = vec![
                format!(
                    "Vehicle {} checked out after {}.",
                    r.plate,
                    output::format_duration(r.parked_seconds)
                ),
                format!("Amount due: {}.", output::format_amount(r.amount_due)),
            ];
            if let Some(sub) = &r.subscription {
                lines.push(format!(
                    "Subscription valid until {}.",
                    sub.end().format("%Y-%m-%d")
                ));
            }
            lines.join("\n")
        },
        |r| r.amount_due.to_string(),
    );
    output::print_output(&rendered, global.quiet);

    Ok(true)
}
