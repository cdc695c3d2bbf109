//! Command handlers
//!
//! Each handler loads the config and input structure, calls the domain
//! layer, and renders the result (or emits the JSON envelope).

mod check;
mod show;
mod simulate;
mod timeline;

pub use check::cmd_check;
pub use show::cmd_show;
pub use simulate::cmd_simulate;
pub use timeline::cmd_timeline;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};

use captable::OwnershipStructure;

/// Load the structure from `--file`, or fall back to the built-in sample
pub(crate) fn load_structure(file: Option<&PathBuf>, now: DateTime<Utc>) -> Result<OwnershipStructure> {
    match file {
        Some(path) => captable::load_structure(path)
            .with_context(|| format!("failed to load ownership structure from {}", path.display())),
        None => Ok(captable::sample_structure(now)),
    }
}

/// Resolve "now": the `--at` override at midnight UTC, or the wall clock
pub(crate) fn resolve_now(at: Option<NaiveDate>) -> DateTime<Utc> {
    match at {
        Some(date) => date
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always valid")
            .and_utc(),
        None => Utc::now(),
    }
}

/// Load the effective config, surfacing unknown-key warnings for a project
/// `captable.toml` when one exists
pub(crate) fn load_config() -> captable::Config {
    let cwd = std::env::current_dir().ok();

    if let Some(root) = &cwd {
        let project_config = root.join("captable.toml");
        if project_config.exists() {
            if let Ok((config, warnings)) = captable::Config::load_with_warnings(&project_config) {
                print_config_warnings(&project_config, &warnings);
                return captable::config::with_env_overrides(config);
            }
        }
    }

    captable::Config::load_or_default(cwd.as_deref())
}

/// Print the config's unknown-key warnings the way the loader reports them
pub(crate) fn print_config_warnings(path: &Path, warnings: &[captable::ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}
