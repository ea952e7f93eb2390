//! Subscription command handlers: add, extend, show.

use chrono::{DateTime, Utc};
use serde::Serialize;

use parkease_core::{Lot, Plate};

use crate::cli::{GlobalOpts, SubscriptionArgs, SubscriptionCommand};
use crate::error::CliError;
use crate::output;

pub fn handle(lot: &mut Lot, args: SubscriptionArgs, global: &GlobalOpts) -> Result<bool, CliError> {
    match args.command {
        SubscriptionCommand::Add { plate, months } => {
            let receipt = lot.subscribe(&plate, months, Utc::now())?;
            let rendered = output::render_single(
                &global.output,
                &receipt,
                |r| {
                    format!(
                        "Subscription for {}: {} months for {}, valid until {}.",
                        r.plate,
                        r.months_added,
                        output::format_amount(r.price),
                        r.ends.format("%Y-%m-%d")
                    )
                },
                |r| r.price.to_string(),
            );
            output::print_output(&rendered, global.quiet);
            Ok(true)
        }

        SubscriptionCommand::Extend { plate, months } => {
            let receipt = lot.extend_subscription(&plate, months)?;
            let rendered = output::render_single(
                &global.output,
                &receipt,
                |r| {
                    format!(
                        "Subscription for {} extended by {} months for {}, now valid until {}.",
                        r.plate,
                        r.months_added,
                        output::format_amount(r.price),
                        r.ends.format("%Y-%m-%d")
                    )
                },
                |r| r.price.to_string(),
            );
            output::print_output(&rendered, global.quiet);
            Ok(true)
        }

        SubscriptionCommand::Show { plate } => {
            show(lot, &plate, global)?;
            Ok(false)
        }
    }
}

#[derive(Serialize)]
struct SubscriptionView {
    plate: String,
    length_months: u32,
    starts: DateTime<Utc>,
    ends: DateTime<Utc>,
    active: bool,
}

fn show(lot: &Lot, plate: &Plate, global: &GlobalOpts) -> Result<(), CliError> {
    let Some(sub) = lot.subscription(plate)? else {
        output::print_output(
            &format!("Vehicle {plate} has no subscription."),
            global.quiet,
        );
        return Ok(());
    };

    let now = Utc::now();
    let view = SubscriptionView {
        plate: plate.to_string(),
        length_months: sub.length_months(),
        starts: sub.start(),
        ends: sub.end(),
        active: sub.is_active(now),
    };

    let rendered = output::render_single(
        &global.output,
        &view,
        |v| {
            let state = if v.active { "active" } else { "expired" };
            format!(
                "Subscription for {}: {} months from {} until {} ({state}).",
                v.plate,
                v.length_months,
                v.starts.format("%Y-%m-%d"),
                v.ends.format("%Y-%m-%d")
            )
        },
        |v| v.ends.format("%Y-%m-%d").to_string(),
    );
    output::print_output(&rendered, global.quiet);
    Ok(())
}
