//! Check command handler

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::Utc;

use crate::cli::ColorWhen;
use crate::ui::views::check::CheckView;
use crate::ui::UiContext;

pub fn cmd_check(file: Option<PathBuf>, json: bool, color: Option<ColorWhen>) -> Result<ExitCode> {
    let config = super::load_config();
    let ui = UiContext::new(json, color, &config);

    let structure = super::load_structure(file.as_ref(), Utc::now())?;
    let violations = structure.check_invariants();

    if json {
        let out = serde_json::json!({
            "command": "check",
            "company": structure.company_name,
            "ok": violations.is_empty(),
            "violations": violations,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!(
            "{}",
            CheckView::new(&structure.company_name, &violations).render(ui.color)
        );
    }

    Ok(if violations.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
