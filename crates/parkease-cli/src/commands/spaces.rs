//! Available-spaces command handler.

use serde::Serialize;

use parkease_core::Lot;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct SpacesView {
    available: u32,
    total: u32,
}

pub fn handle(lot: &Lot, global: &GlobalOpts) -> Result<bool, CliError> {
    let view = SpacesView {
        available: lot.available_spaces(),
        total: lot.total_spaces(),
    };

    let rendered = output::render_single(
        &global.output,
        &view,
        |v| format!("{} of {} spaces available.", v.available, v.total),
        |v| v.available.to_string(),
    );
    output::print_output(&rendered, global.quiet);

    Ok(false)
}
