//! Simulate command handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use captable::{simulate_round_with, NewInvestor, ScenarioInput};

use crate::cli::ColorWhen;
use crate::ui::views::dilution::DilutionView;
use crate::ui::UiContext;

#[allow(clippy::too_many_arguments)]
pub fn cmd_simulate(
    raise: f64,
    pre_money: f64,
    round_name: String,
    investors: Vec<NewInvestor>,
    file: Option<PathBuf>,
    at: Option<NaiveDate>,
    json: bool,
    color: Option<ColorWhen>,
) -> Result<()> {
    let config = super::load_config();
    let ui = UiContext::new(json, color, &config);

    let now = super::resolve_now(at);
    let structure = super::load_structure(file.as_ref(), now)?;

    let input = ScenarioInput {
        round_name,
        raise_amount: raise,
        pre_money,
        new_investors: investors,
    };

    let result = simulate_round_with(
        &structure,
        &input,
        now,
        config.simulation.dilution_options(),
    )
    .context("simulation rejected")?;

    if json {
        let out = serde_json::json!({
            "command": "simulate",
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print!("{}", DilutionView::new(&result).render(ui.color));
    Ok(())
}
