//! Command dispatch: bridges CLI args -> lot operations -> output formatting.

pub mod check_in;
pub mod check_out;
pub mod config_cmd;
pub mod register;
pub mod report;
pub mod spaces;
pub mod subscription;

use parkease_core::Lot;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a lot-bound command to the appropriate handler. Returns
/// whether the lot was mutated and should be persisted.
pub fn dispatch(cmd: Command, lot: &mut Lot, global: &GlobalOpts) -> Result<bool, CliError> {
    match cmd {
        Command::CheckIn { plate } => check_in::handle(lot, &plate, global),
        Command::CheckOut { plate } => check_out::handle(lot, &plate, global),
        Command::Spaces => spaces::handle(lot, global),
        Command::Register { plate } => register::handle(lot, &plate, global),
        Command::Subscription(args) => subscription::handle(lot, args, global),
        Command::Report => report::handle(lot, global),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
