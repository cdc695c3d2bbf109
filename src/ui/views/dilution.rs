//! Dilution scenario result view
//!
//! Per-holder before/after ownership with the dilution delta, then the
//! incoming investors.

use captable::DilutionResult;

use crate::ui::table::{format_money, format_pct, format_shares, Align, Table};
use crate::ui::theme::{colors, dim, icons, paint};

pub struct DilutionView<'a> {
    result: &'a DilutionResult,
}

impl<'a> DilutionView<'a> {
    pub fn new(result: &'a DilutionResult) -> Self {
        Self { result }
    }

    pub fn render(&self, color: bool) -> String {
        let round = self
            .result
            .new
            .financing_rounds
            .last()
            .expect("simulation records its round");

        let mut out = String::new();
        out.push_str(&paint(
            &format!("{} — dilution impact", round.name),
            colors::INFO,
            color,
        ));
        out.push('\n');
        out.push_str(&dim(
            &format!(
                "raise {} at {} pre ({} post) · {} new shares · {} total after",
                format_money(round.amount),
                format_money(round.pre_money),
                format_money(self.result.post_money),
                format_shares(self.result.new_shares),
                format_shares(self.result.new.total_shares),
            ),
            color,
        ));
        out.push_str("\n\n");

        let mut table = Table::new(vec![
            ("Shareholder", Align::Left),
            ("Before", Align::Right),
            ("After", Align::Right),
            ("Dilution", Align::Right),
        ]);
        for holder in &self.result.original.shareholders {
            let after = self
                .result
                .new
                .shareholder(&holder.id)
                .map(|h| h.total_percentage)
                .unwrap_or(0.0);
            let dilution = self
                .result
                .dilution_percentages
                .get(&holder.id)
                .copied()
                .unwrap_or(0.0);
            table.add_row(vec![
                holder.name.clone(),
                format_pct(holder.total_percentage),
                format_pct(after),
                format!("-{}", format_pct(dilution)),
            ]);
        }
        out.push_str(&table.render());

        let new_ids: Vec<&str> = round.investors.iter().map(String::as_str).collect();
        if !new_ids.is_empty() {
            out.push('\n');
            out.push_str(&paint("New investors", colors::SUCCESS, color));
            out.push('\n');
            for id in new_ids {
                if let Some(investor) = self.result.new.shareholder(id) {
                    out.push_str(&format!(
                        "  {} {} — {} shares ({})\n",
                        icons::BULLET,
                        investor.name,
                        format_shares(investor.total_shares),
                        format_pct(investor.total_percentage),
                    ));
                }
            }
        }

        out
    }
}
