use std::path::PathBuf;

use super::Config;

/// Returns the config directory: `~/.config/hypr-hotspots/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("hypr-hotspots"))
}

/// Returns the config file path: `~/.config/hypr-hotspots/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    parse(&content).map_err(|e| format!("{}: {e}", path.display()))
}

/// Parses and validates config file contents.
pub(crate) fn parse(content: &str) -> Result<Config, toml::de::Error> {
    let mut config: Config = toml::from_str(content)?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently yields defaults. Any other problem is handed
/// back so the caller can report it once the logger is configured.
pub fn load_with_warning() -> (Config, Option<String>) {
    split_or_default(try_load, Config::default)
}

/// Falls back to defaults, returning the error unless the file was
/// simply missing.
pub(super) fn split_or_default<T>(
    try_load: impl FnOnce() -> Result<T, String>,
    default: impl Fn() -> T,
) -> (T, Option<String>) {
    match try_load() {
        Ok(val) => (val, None),
        Err(e) if is_file_not_found(&e) => (default(), None),
        Err(e) => (default(), Some(e)),
    }
}

/// Returns true if the error message indicates a missing file.
pub(super) fn is_file_not_found(e: &str) -> bool {
    e.contains("No such file or directory") || e.contains("not found")
}
