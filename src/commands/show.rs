//! Show command handler

use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;

use crate::cli::ColorWhen;
use crate::ui::views::captable::CapTableView;
use crate::ui::UiContext;

pub fn cmd_show(file: Option<PathBuf>, json: bool, color: Option<ColorWhen>) -> Result<()> {
    let config = super::load_config();
    let ui = UiContext::new(json, color, &config);

    let structure = super::load_structure(file.as_ref(), Utc::now())?;

    if json {
        let out = serde_json::json!({
            "command": "show",
            "structure": structure,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print!("{}", CapTableView::new(&structure).render(ui.color));
    Ok(())
}
