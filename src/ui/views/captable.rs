//! Cap table view

use captable::{InstrumentKind, OwnershipStructure};

use crate::ui::table::{format_money, format_pct, format_shares, Align, Table};
use crate::ui::theme::{colors, dim, icons, paint};

pub struct CapTableView<'a> {
    structure: &'a OwnershipStructure,
}

impl<'a> CapTableView<'a> {
    pub fn new(structure: &'a OwnershipStructure) -> Self {
        Self { structure }
    }

    pub fn render(&self, color: bool) -> String {
        let mut out = String::new();

        out.push_str(&paint(&self.structure.company_name, colors::INFO, color));
        out.push('\n');
        out.push_str(&dim(
            &format!(
                "{} shares outstanding · updated {}",
                format_shares(self.structure.total_shares),
                self.structure.last_updated.format("%Y-%m-%d")
            ),
            color,
        ));
        out.push_str("\n\n");

        let mut table = Table::new(vec![
            ("Shareholder", Align::Left),
            ("Type", Align::Left),
            ("Shares", Align::Right),
            ("Ownership", Align::Right),
        ]);
        for holder in &self.structure.shareholders {
            table.add_row(vec![
                holder.name.clone(),
                holder.kind.label().to_string(),
                format_shares(holder.total_shares),
                format_pct(holder.total_percentage),
            ]);
        }
        out.push_str(&table.render());

        for holder in &self.structure.shareholders {
            for instrument in &holder.instruments {
                let mut detail = format!(
                    "  {} {} · {} · {}",
                    icons::BULLET,
                    holder.name,
                    instrument.kind.label(),
                    format_shares(instrument.shares),
                );
                if let Some(strike) = instrument.strike_price {
                    detail.push_str(&format!(" @ {}", format_money(strike)));
                }
                if let Some(vesting) = &instrument.vesting_schedule {
                    detail.push_str(&format!(
                        " · vested {} / {}",
                        format_shares(vesting.vested_shares),
                        format_shares(vesting.total_shares)
                    ));
                }
                if instrument.kind == InstrumentKind::ConvertibleNote
                    || instrument.kind == InstrumentKind::Safe
                {
                    detail.push_str(" (not converted)");
                }
                out.push('\n');
                out.push_str(&dim(&detail, color));
            }
        }
        out.push('\n');

        if !self.structure.financing_rounds.is_empty() {
            out.push('\n');
            out.push_str(&paint("Financing history", colors::INFO, color));
            out.push('\n');
            for round in &self.structure.financing_rounds {
                out.push_str(&format!(
                    "  {} {} ({}) — raised {} at {} pre, {} new shares\n",
                    icons::ARROW,
                    round.name,
                    round.date.format("%Y-%m-%d"),
                    format_money(round.amount),
                    format_money(round.pre_money),
                    format_shares(round.new_shares),
                ));
            }
        }

        out
    }
}
