//! Occupancy report command handler.

use chrono::NaiveDate;
use tabled::Tabled;

use parkease_core::{Lot, Report};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Date")]
    date: NaiveDate,
    #[tabled(rename = "Entries")]
    entries: u64,
}

#[derive(Tabled)]
struct HourRow {
    #[tabled(rename = "Hour")]
    hour: String,
    #[tabled(rename = "Entries")]
    entries: u64,
}

pub fn handle(lot: &Lot, global: &GlobalOpts) -> Result<bool, CliError> {
    let report = Report::collect(lot);

    let rendered = match global.output {
        OutputFormat::Json => output::render_json_pretty(&report),
        OutputFormat::JsonCompact => output::render_json_compact(&report),
        OutputFormat::Yaml => output::render_yaml(&report),
        OutputFormat::Plain => report
            .per_day()
            .iter()
            .map(|(date, count)| format!("{date} {count}"))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Table => render_tables(&report),
    };
    output::print_output(&rendered, global.quiet);

    Ok(false)
}

fn render_tables(report: &Report) -> String {
    if report.total_entries() == 0 {
        return "No entries recorded yet.".into();
    }

    let day_rows: Vec<DayRow> = report
        .per_day()
        .iter()
        .map(|(date, count)| DayRow {
            date: *date,
            entries: *count,
        })
        .collect();

    let hour_rows: Vec<HourRow> = report
        .per_hour()
        .iter()
        .map(|(hour, count)| HourRow {
            hour: format!("{hour:02}h"),
            entries: *count,
        })
        .collect();

    let busiest_days = report
        .busiest_days()
        .into_iter()
        .map(|(date, count)| format!("{date} ({count} entries)"))
        .collect::<Vec<_>>()
        .join(", ");
    let busiest_hours = report
        .busiest_hours()
        .into_iter()
        .map(|(hour, count)| format!("{hour:02}h ({count} entries)"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Entries per day\n{}\n\nEntries per hour of day\n{}\n\nBusiest day(s): {busiest_days}\nBusiest hour(s): {busiest_hours}",
        output::render_table(&day_rows),
        output::render_table(&hour_rows),
    )
}
