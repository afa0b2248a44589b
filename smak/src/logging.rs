use smak_core::constants::APP_NAME;
use std::path::PathBuf;

const LOG_FILE_NAME: &str = "smak.log";

pub const DEFAULT_LOG_LEVEL: &str = "warn";

pub fn parse_level(raw: &str) -> Result<log::LevelFilter, String> {
    raw.parse()
        .map_err(|_| format!("invalid log level '{raw}'"))
}

pub fn cache_dir() -> PathBuf {
    #[cfg(unix)]
    {
        if let Ok(xdg_cache_home) = std::env::var("XDG_CACHE_HOME")
            && !xdg_cache_home.is_empty()
        {
            return PathBuf::from(xdg_cache_home).join(APP_NAME);
        }
        dirs::home_dir()
            .map_or_else(std::env::temp_dir, |home| home.join(".cache"))
            .join(APP_NAME)
    }
    #[cfg(windows)]
    {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_NAME)
    }
}

pub fn default_log_file() -> PathBuf {
    cache_dir().join(LOG_FILE_NAME)
}

pub fn setup_logging(level: log::LevelFilter) -> anyhow::Result<()> {
    let log_file = default_log_file();
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    simple_log::file(log_file.to_string_lossy().into_owned(), level, 10, 10)
        .map_err(|e| anyhow::anyhow!(e))?;
    log::info!("smak logging initialised (level={level})");
    Ok(())
}
