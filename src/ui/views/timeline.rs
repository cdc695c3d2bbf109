//! Vesting timeline view
//!
//! Per-holder vesting progress with cliff and full-vest milestones, then
//! the sampled timeline table.

use chrono::NaiveDate;

use captable::domain::services::{vesting, vesting_timeline};
use captable::OwnershipStructure;

use crate::ui::table::{format_pct, format_shares, Align, Table};
use crate::ui::theme::{colors, dim, icons, paint};

const PROGRESS_WIDTH: usize = 24;

pub struct TimelineView<'a> {
    structure: &'a OwnershipStructure,
    from: NaiveDate,
    months: u32,
    as_of: NaiveDate,
}

impl<'a> TimelineView<'a> {
    pub fn new(
        structure: &'a OwnershipStructure,
        from: NaiveDate,
        months: u32,
        as_of: NaiveDate,
    ) -> Self {
        Self {
            structure,
            from,
            months,
            as_of,
        }
    }

    pub fn render(&self, color: bool) -> String {
        let mut out = String::new();
        out.push_str(&paint("Vesting timeline", colors::INFO, color));
        out.push('\n');
        out.push_str(&dim(
            &format!("as of {}", self.as_of.format("%Y-%m-%d")),
            color,
        ));
        out.push_str("\n\n");

        let mut any = false;
        for holder in self.structure.vesting_shareholders() {
            let schedule = holder
                .vesting_instrument()
                .and_then(|i| i.vesting_schedule.as_ref())
                .expect("vesting_shareholders yields holders with a schedule");
            any = true;

            let progress = vesting::vesting_progress_at(schedule, self.as_of);
            let filled = (progress * PROGRESS_WIDTH as f64).round() as usize;
            let bar = format!(
                "[{}{}]",
                "█".repeat(filled.min(PROGRESS_WIDTH)),
                "░".repeat(PROGRESS_WIDTH - filled.min(PROGRESS_WIDTH))
            );

            out.push_str(&format!(
                "{} {} {} vested\n",
                holder.name,
                bar,
                format_pct(progress * 100.0),
            ));

            let cliff_marker = if schedule.is_cliff_passed(self.as_of) {
                paint(icons::SUCCESS, colors::SUCCESS, color)
            } else {
                dim(icons::BULLET, color)
            };
            let vest_marker = if schedule.is_fully_vested(self.as_of) {
                paint(icons::SUCCESS, colors::SUCCESS, color)
            } else {
                dim(icons::BULLET, color)
            };
            out.push_str(&dim(
                &format!(
                    "  cliff {} {}   full vest {} {}   vested {} / {}\n",
                    schedule.cliff_date().format("%Y-%m-%d"),
                    cliff_marker,
                    schedule.full_vest_date().format("%Y-%m-%d"),
                    vest_marker,
                    format_shares(schedule.vested_shares),
                    format_shares(schedule.total_shares),
                ),
                color,
            ));
            out.push('\n');
        }

        if !any {
            out.push_str(&dim("No vesting schedules in this structure.\n", color));
            return out;
        }

        let points = vesting_timeline(self.structure, self.from, self.months, 6);
        let mut header = vec![("Month", Align::Right), ("Date", Align::Left)];
        let names: Vec<String> = points
            .first()
            .map(|p| p.holders.iter().map(|h| h.name.clone()).collect())
            .unwrap_or_default();
        for name in &names {
            header.push((name.as_str(), Align::Right));
        }

        let mut table = Table::new(header);
        for point in &points {
            let mut row = vec![
                point.month.to_string(),
                point.date.format("%b %Y").to_string(),
            ];
            for holder in &point.holders {
                row.push(format_shares(holder.vested_shares));
            }
            table.add_row(row);
        }
        out.push_str(&table.render());

        out
    }
}
