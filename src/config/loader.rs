//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CaptableError, CaptableResult};

use super::types::{ColorMode, Config};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load a config file, failing on parse errors
pub fn load(path: &Path) -> CaptableResult<Config> {
    let (config, _) = load_with_warnings(path)?;
    Ok(config)
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CaptableResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CaptableError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from `captable.toml` in the working directory, the user config, or
/// defaults, then apply environment overrides
pub fn load_or_default(cwd: Option<&Path>) -> Config {
    if let Some(root) = cwd {
        let project_config = root.join("captable.toml");
        if project_config.exists() {
            if let Ok(config) = load(&project_config) {
                return with_env_overrides(config);
            }
        }
    }

    if let Some(user_config_dir) = dirs::config_dir() {
        let user_config = user_config_dir.join("captable/config.toml");
        if user_config.exists() {
            if let Ok(config) = load(&user_config) {
                return with_env_overrides(config);
            }
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (CAPTABLE_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(tolerance) = std::env::var("CAPTABLE_DRIFT_TOLERANCE") {
        if let Ok(value) = tolerance.parse::<u64>() {
            config.simulation.drift_tolerance = Some(value);
        }
    }

    if let Ok(color) = std::env::var("CAPTABLE_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["simulation", "drift_tolerance", "output", "color"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            current[j + 1] = (prev[j + 1] + 1).min(current[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut current);
    }

    prev[b.len()]
}
