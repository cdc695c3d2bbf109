//! Timeline command handler

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;

use captable::domain::services::vesting;
use captable::vesting_timeline;

use crate::cli::{ColorWhen, Timeframe};
use crate::ui::views::timeline::TimelineView;
use crate::ui::UiContext;

pub fn cmd_timeline(
    timeframe: Timeframe,
    from: Option<NaiveDate>,
    file: Option<PathBuf>,
    at: Option<NaiveDate>,
    json: bool,
    color: Option<ColorWhen>,
) -> Result<()> {
    let config = super::load_config();
    let ui = UiContext::new(json, color, &config);

    let now = super::resolve_now(at);
    let mut structure = super::load_structure(file.as_ref(), now)?;

    // Bring the cached vested-share snapshots up to the evaluation date.
    for holder in &mut structure.shareholders {
        for instrument in &mut holder.instruments {
            if let Some(schedule) = &instrument.vesting_schedule {
                instrument.vesting_schedule =
                    Some(vesting::refresh_snapshot(schedule, now.date_naive()));
            }
        }
    }

    // Default origin: the earliest vesting start, so month offsets line up
    // with the schedules' own ramps.
    let from = from
        .or_else(|| {
            structure
                .vesting_shareholders()
                .filter_map(|h| h.vesting_instrument())
                .filter_map(|i| i.vesting_schedule.as_ref())
                .map(|s| s.start_date)
                .min()
        })
        .unwrap_or_else(|| now.date_naive());

    if json {
        let points = vesting_timeline(&structure, from, timeframe.months(), 6);
        let out = serde_json::json!({
            "command": "timeline",
            "from": from,
            "months": timeframe.months(),
            "points": points,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print!(
        "{}",
        TimelineView::new(&structure, from, timeframe.months(), now.date_naive())
            .render(ui.color)
    );
    Ok(())
}
